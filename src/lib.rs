//! Volley - a two-player paddle duel on a fixed court
//!
//! Core modules:
//! - `sim`: Simulation core (state, input, physics, round lifecycle)
//! - `session`: Frame driver tying input, simulation and rendering together
//! - `presentation`: Status lines and scoreboard text for the host UI
//! - `renderer`: Render adapters (WebGPU and headless)
//! - `assets`: Startup resource gate
//! - `settings`: Key bindings and visual preferences

pub mod assets;
pub mod presentation;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, AssetGate, GateStatus};
pub use session::Session;
pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    /// Court dimensions (pixels)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;
    /// Inset of the playable boundary from the court edge
    pub const COURT_PADDING: f32 = 26.0;

    /// First side to reach this many points wins the match
    pub const TARGET_SCORE: u32 = 7;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    /// Vertical paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 340.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 24.0;
    /// Baseline speed restored on every serve
    pub const BALL_BASE_SPEED: f32 = 260.0;

    /// Serve speed is drawn from [SERVE_SPEED_MIN, SERVE_SPEED_MAX)
    pub const SERVE_SPEED_MIN: f32 = 280.0;
    pub const SERVE_SPEED_MAX: f32 = 320.0;
    /// Serve angle is drawn from [-SPREAD, SPREAD) * π/2 radians
    pub const SERVE_ANGLE_SPREAD: f32 = 0.3;

    /// Speed added on every paddle bounce (pixels/s)
    pub const BOUNCE_SPEED_BOOST: f32 = 12.0;
    /// Bounce angle at the very edge of a paddle (radians, ~46°)
    pub const MAX_BOUNCE_ANGLE: f32 = 0.8;
    /// Margin the ball is pushed back inside after a wall bounce
    pub const WALL_MARGIN: f32 = 1.0;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;
}
