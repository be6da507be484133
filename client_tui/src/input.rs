//! Input adapter: folds terminal events into the per-tick snapshot.
//!
//! Terminals do not reliably emit key release events, so held keys are
//! auto-released after a short quiet period; when the terminal does
//! report releases they are honored directly. Mouse rows are mapped
//! into logical arena coordinates and take precedence over the key
//! flags for the tick they arrive in.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use game_core::{Arena, PaddleInput};

use crate::view::Viewport;

// Long enough to bridge terminal auto-repeat gaps, short enough that a
// single tap does not read as a sustained hold.
const DEFAULT_HOLD_TIMEOUT: Duration = Duration::from_millis(150);

/// Tracks the latest-value input state between ticks.
pub struct InputTracker {
    up_held: bool,
    down_held: bool,
    last_up: Instant,
    last_down: Instant,
    target_y: Option<f32>,
    hold_timeout: Duration,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::with_hold_timeout(DEFAULT_HOLD_TIMEOUT)
    }

    pub fn with_hold_timeout(hold_timeout: Duration) -> Self {
        let now = Instant::now();
        Self {
            up_held: false,
            down_held: false,
            last_up: now,
            last_down: now,
            target_y: None,
            hold_timeout,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let pressed = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);
        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
                self.up_held = pressed;
                if pressed {
                    self.last_up = Instant::now();
                    // Keyboard reclaims the active modality.
                    self.target_y = None;
                }
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
                self.down_held = pressed;
                if pressed {
                    self.last_down = Instant::now();
                    self.target_y = None;
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, viewport: &Viewport, arena: &Arena) {
        if matches!(
            event.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_)
        ) {
            self.target_y = Some(viewport.row_to_logical_y(event.row, arena));
        }
    }

    /// Produce the snapshot the engine consumes at the top of a tick.
    ///
    /// Pointer targets are one-shot; key holds persist until released
    /// or timed out.
    pub fn snapshot(&mut self) -> PaddleInput {
        if self.up_held && self.last_up.elapsed() > self.hold_timeout {
            self.up_held = false;
        }
        if self.down_held && self.last_down.elapsed() > self.hold_timeout {
            self.down_held = false;
        }

        PaddleInput {
            up: self.up_held,
            down: self.down_held,
            target_y: self.target_y.take(),
        }
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
