//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Plain data mutated in place, passed explicitly
//! - Serve randomness injected through `ServeSource`
//! - Transitions report structured events, never text

pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod serve;
pub mod state;
pub mod tick;

pub use geometry::{Circle, Rect, clamp, intersects};
pub use input::{Control, HeldControls, sample_input};
pub use lifecycle::{MatchEvent, Transition, full_reset, point_scored, serve_ball, toggle_play};
pub use serve::{FixedServe, SeededServe, Serve, ServeSource};
pub use state::{Ball, Court, MatchPhase, Paddle, Score, Side, SimulationState, Snapshot};
pub use tick::{advance_ball, bounce_from_paddle, step};
