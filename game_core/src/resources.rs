/// Game score tracking. Monotonically non-decreasing; incremented only
/// on goal events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_computer(&mut self) {
        self.computer += 1;
    }
}

/// Random number generator behind the ball serve. Injected so replays
/// and tests are deterministic.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Per-tick input snapshot for the player paddle.
///
/// Latest-value semantics: the adapter folds asynchronous events into
/// this snapshot and the engine reads it once per tick. `target_y`
/// (pointer modality, in logical arena units) takes precedence over
/// the key flags when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
    pub target_y: Option<f32>,
}

impl PaddleInput {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when a score sink needs to refresh its display
    pub fn score_changed(&self) -> bool {
        self.player_scored || self.computer_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_player() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        score.increment_player();
        assert_eq!(score.player, 1);
        score.increment_player();
        assert_eq!(score.player, 2);
    }

    #[test]
    fn test_score_increment_computer() {
        let mut score = Score::new();
        assert_eq!(score.computer, 0);
        score.increment_computer();
        assert_eq!(score.computer, 1);
        assert_eq!(score.player, 0, "Computer goals leave player score alone");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.computer_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.computer_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_score_changed() {
        let mut events = Events::new();
        assert!(!events.score_changed());
        events.ball_hit_wall = true;
        assert!(!events.score_changed(), "Wall hits do not touch the score");
        events.computer_scored = true;
        assert!(events.score_changed());
    }

    #[test]
    fn test_game_rng_is_seeded() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<u32> = (0..4).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys, "Same seed yields the same stream");
    }
}
