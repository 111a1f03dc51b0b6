use crate::arena::Arena;
use crate::components::Side;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    pub const PADDLE_MARGIN: f32 = 20.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SERVE_SPEED: f32 = 5.0;
    pub const BALL_SERVE_DRIFT: f32 = 3.0;
    pub const BALL_SPEED_MAX: f32 = 15.0;
    pub const BOUNCE_SPEED_SCALE: f32 = 1.2;
    pub const BOUNCE_ANGLE_FACTOR: f32 = 0.8;
    pub const WALL_JITTER: f32 = 0.5;

    // Charge / hold / throw
    pub const LOAD_MAX: u8 = 100;
    pub const LOAD_PER_HIT: u8 = 10;
    pub const AIM_STEP_DEGREES: f32 = 5.0;
    pub const LAUNCH_SPEED: f32 = 10.0;

    // Machine opponent
    pub const MACHINE_DEAD_ZONE: f32 = 10.0;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_serve_speed: f32,
    pub ball_serve_drift: f32,
    pub ball_speed_max: f32,
    pub bounce_speed_scale: f32,
    pub bounce_angle_factor: f32,
    pub wall_jitter: f32,
    pub load_max: u8,
    pub load_per_hit: u8,
    pub aim_step_degrees: f32,
    pub launch_speed: f32,
    pub machine_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            ball_serve_drift: Params::BALL_SERVE_DRIFT,
            ball_speed_max: Params::BALL_SPEED_MAX,
            bounce_speed_scale: Params::BOUNCE_SPEED_SCALE,
            bounce_angle_factor: Params::BOUNCE_ANGLE_FACTOR,
            wall_jitter: Params::WALL_JITTER,
            load_max: Params::LOAD_MAX,
            load_per_hit: Params::LOAD_PER_HIT,
            aim_step_degrees: Params::AIM_STEP_DEGREES,
            launch_speed: Params::LAUNCH_SPEED,
            machine_dead_zone: Params::MACHINE_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X of a paddle's center; each paddle sits a fixed margin off its wall.
    pub fn paddle_x(&self, side: Side, arena: &Arena) -> f32 {
        match side {
            Side::Left => self.paddle_margin + self.paddle_width / 2.0,
            Side::Right => arena.width - self.paddle_margin - self.paddle_width / 2.0,
        }
    }
}
