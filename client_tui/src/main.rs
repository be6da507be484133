//! Terminal Pong runner.
//!
//! Thin glue around the simulation core: one `step` and one `draw` per
//! ~16 ms tick, input events folded into a latest-value snapshot in
//! between. The core never sees the terminal.

mod input;
mod view;

use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute, terminal,
};
use hecs::World;

use game_core::{spawn_match, step, Arena, Config, Events, GameRng, Score};
use input::{should_quit, InputTracker};
use view::{GameView, Viewport};

// One tick per display-ish refresh; the core's speed constants are
// tuned for this rate.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging();

    let seed = seed_from_args();
    log::info!("starting match, seed {}", seed);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        EnableMouseCapture
    )?;

    let result = run(&mut stdout, seed);

    // Always try to restore terminal state.
    let _ = execute!(
        stdout,
        DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
    result
}

fn run(stdout: &mut impl Write, seed: u64) -> Result<()> {
    let mut world = World::new();
    let arena = Arena::new();
    let config = Config::new();
    let mut score = Score::new();
    let mut events = Events::new();
    let mut rng = GameRng::new(seed);
    spawn_match(&mut world, &arena, &config, &mut rng);

    let mut tracker = InputTracker::new();
    let mut view = GameView::new(&score);
    let mut last_tick = Instant::now();

    loop {
        let (term_cols, term_rows) = terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::fit(term_cols, term_rows, &arena);

        // Drain input until the next tick is due.
        let timeout = TICK
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!(
                            "final score: player {} computer {}",
                            score.player,
                            score.computer
                        );
                        return Ok(());
                    }
                    tracker.handle_key(key);
                }
                Event::Mouse(mouse) => tracker.handle_mouse(mouse, &viewport, &arena),
                _ => {} // Resize is picked up on the next frame
            }
            continue;
        }

        // Tick: step the simulation, then present it.
        let snapshot = tracker.snapshot();
        step(
            &mut world,
            &arena,
            &config,
            &snapshot,
            &mut score,
            &mut events,
            &mut rng,
        );

        if events.score_changed() {
            view.update_score(&score);
            log::debug!("score: player {} computer {}", score.player, score.computer);
        }

        view.draw(stdout, &world, &arena, &config, &viewport)?;
        last_tick = Instant::now();
    }
}

/// Seed from argv for deterministic replays, otherwise from the clock.
fn seed_from_args() -> u64 {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(12345)
        })
}

/// Route logs to a file: the alternate screen owns stdout/stderr.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    if let Ok(file) = File::create("pong-tui.log") {
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}
