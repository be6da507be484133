//! Renderer: reads engine state once per tick and draws it.
//!
//! The arena keeps its 700x400 logical resolution; the viewport scales
//! it to the terminal with the aspect ratio preserved (a cell counts
//! as roughly twice as tall as it is wide). Full redraw every tick;
//! the score line is re-formatted only when a goal was scored.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use hecs::World;

use game_core::{Arena, Ball, Config, Paddle, Score};

// Terminal cells are about twice as tall as wide; stretch columns to
// keep the arena visually proportional.
const CELL_ASPECT: f32 = 2.0;

/// The rectangle of terminal cells the arena is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin_col: u16,
    pub origin_row: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// Fit the largest aspect-preserving arena box into the terminal,
    /// leaving the top row for the score line.
    pub fn fit(term_cols: u16, term_rows: u16, arena: &Arena) -> Self {
        let avail_cols = term_cols.max(8);
        let avail_rows = term_rows.saturating_sub(1).max(4);

        let cols_per_row = arena.width / arena.height * CELL_ASPECT;
        let mut rows = avail_rows;
        let mut cols = (rows as f32 * cols_per_row) as u16;
        if cols > avail_cols {
            cols = avail_cols;
            rows = ((cols as f32 / cols_per_row) as u16).max(1);
        }

        Self {
            origin_col: (term_cols.saturating_sub(cols)) / 2,
            origin_row: 1 + (avail_rows - rows) / 2,
            cols,
            rows,
        }
    }

    /// Logical units per cell row
    pub fn y_scale(&self, arena: &Arena) -> f32 {
        arena.height / self.rows as f32
    }

    /// Map a terminal row (device space) to a logical arena y
    pub fn row_to_logical_y(&self, row: u16, arena: &Arena) -> f32 {
        let rel = row.saturating_sub(self.origin_row) as f32 + 0.5;
        (rel * self.y_scale(arena)).clamp(0.0, arena.height)
    }

    /// Map a logical x to a cell column inside the viewport
    fn col_of(&self, x: f32, arena: &Arena) -> u16 {
        let rel = (x / arena.width * self.cols as f32) as i32;
        self.origin_col + rel.clamp(0, self.cols as i32 - 1) as u16
    }

    /// Map a logical y to a cell row inside the viewport
    fn row_of(&self, y: f32, arena: &Arena) -> u16 {
        let rel = (y / arena.height * self.rows as f32) as i32;
        self.origin_row + rel.clamp(0, self.rows as i32 - 1) as u16
    }
}

/// Draws the match and keeps the score text cached between goals.
pub struct GameView {
    score_line: String,
}

impl GameView {
    pub fn new(score: &Score) -> Self {
        Self {
            score_line: format_score(score),
        }
    }

    /// Refresh the score text. Call only when a score event fired.
    pub fn update_score(&mut self, score: &Score) {
        self.score_line = format_score(score);
    }

    pub fn draw(
        &self,
        out: &mut impl Write,
        world: &World,
        arena: &Arena,
        config: &Config,
        viewport: &Viewport,
    ) -> Result<()> {
        out.queue(Clear(ClearType::All))?;

        // Score line, centered over the arena
        let score_col = viewport.origin_col
            + (viewport.cols.saturating_sub(self.score_line.len() as u16)) / 2;
        out.queue(MoveTo(score_col, viewport.origin_row.saturating_sub(1)))?;
        out.queue(Print(&self.score_line))?;

        // Arena rows: dashed center guideline on alternating rows
        let center_col = viewport.origin_col + viewport.cols / 2;
        for r in 0..viewport.rows {
            if r % 2 == 0 {
                out.queue(MoveTo(center_col, viewport.origin_row + r))?;
                out.queue(Print('\u{2506}'))?; // ┆
            }
        }

        // Paddles: a column of blocks spanning the paddle's extent
        for (_entity, paddle) in world.query::<&Paddle>().iter() {
            let x = config.paddle_x(paddle.side, arena) + config.paddle_width / 2.0;
            let col = viewport.col_of(x, arena);
            let top = viewport.row_of(paddle.y, arena);
            let bottom = viewport.row_of(paddle.y + config.paddle_height - 1.0, arena);
            for row in top..=bottom {
                out.queue(MoveTo(col, row))?;
                out.queue(Print('\u{2588}'))?; // █
            }
        }

        // Ball
        for (_entity, ball) in world.query::<&Ball>().iter() {
            let col = viewport.col_of(ball.pos.x + config.ball_size / 2.0, arena);
            let row = viewport.row_of(ball.center_y(config.ball_size), arena);
            out.queue(MoveTo(col, row))?;
            out.queue(Print('\u{25cf}'))?; // ●
        }

        out.flush()?;
        Ok(())
    }
}

fn format_score(score: &Score) -> String {
    format!("You {}  :  {} CPU", score.player, score.computer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_fits_inside_terminal() {
        let arena = Arena::new();
        let vp = Viewport::fit(80, 24, &arena);
        assert!(vp.cols <= 80);
        assert!(u32::from(vp.origin_row) + u32::from(vp.rows) <= 24);
        assert!(vp.origin_row >= 1, "Top row is reserved for the score");
    }

    #[test]
    fn test_viewport_preserves_aspect() {
        let arena = Arena::new();
        let vp = Viewport::fit(200, 24, &arena);
        let aspect = vp.cols as f32 / (vp.rows as f32 * CELL_ASPECT);
        let want = arena.width / arena.height;
        assert!(
            (aspect - want).abs() / want < 0.15,
            "Cell aspect {} should approximate {}",
            aspect,
            want
        );
    }

    #[test]
    fn test_row_to_logical_y_scales_and_clamps() {
        let arena = Arena::new();
        let vp = Viewport::fit(80, 24, &arena);

        let top = vp.row_to_logical_y(vp.origin_row, &arena);
        let bottom = vp.row_to_logical_y(vp.origin_row + vp.rows - 1, &arena);
        assert!(top < bottom);
        assert!(top >= 0.0 && bottom <= arena.height);

        // Rows above the arena clamp rather than go negative.
        assert!(vp.row_to_logical_y(0, &arena) >= 0.0);
        assert!(vp.row_to_logical_y(u16::MAX, &arena) <= arena.height);
    }

    #[test]
    fn test_logical_to_cell_round_trip_stays_in_bounds() {
        let arena = Arena::new();
        let vp = Viewport::fit(120, 40, &arena);

        for x in [0.0, 10.0, 350.0, 699.0, 700.0] {
            let col = vp.col_of(x, &arena);
            assert!(col >= vp.origin_col && col < vp.origin_col + vp.cols);
        }
        for y in [0.0, 200.0, 399.0, 400.0] {
            let row = vp.row_of(y, &arena);
            assert!(row >= vp.origin_row && row < vp.origin_row + vp.rows);
        }
    }

    #[test]
    fn test_score_line_updates_only_on_request() {
        let mut score = Score::new();
        let mut view = GameView::new(&score);
        assert_eq!(view.score_line, "You 0  :  0 CPU");

        score.increment_player();
        assert_eq!(view.score_line, "You 0  :  0 CPU", "Cached until notified");

        view.update_score(&score);
        assert_eq!(view.score_line, "You 1  :  0 CPU");
    }
}
