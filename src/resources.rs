use crate::components::Side;

/// Opponent wiring, fixed at match creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Both paddles follow their movement intents.
    TwoPlayer,
    /// The right paddle ignores movement intents and chases the ball.
    VsMachine,
}

/// Intents for one side, as sampled by the input layer this tick. The
/// activate/capture/throw flags are edge-triggered by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideInput {
    pub dir: i8,    // -1 = up, 0 = none, 1 = down
    pub rotate: i8, // -1 = counter-clockwise, 1 = clockwise
    pub activate: bool,
    pub capture: bool,
    pub throw: bool,
}

/// Everything the input layer observed this tick. A defaulted snapshot
/// means "no intent" across the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: SideInput,
    pub right: SideInput,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: Side) -> SideInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Game score tracking. Only scoring events may change these tallies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,  // player 1
    pub right: u32, // player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Random number generator, seedable so tests are reproducible.
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

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub power_up_activated: bool,
    pub ball_captured: bool,
    pub ball_thrown: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
