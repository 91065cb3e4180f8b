//! Rendering
//!
//! Renderers only ever see a read-only [`Snapshot`] of the match and give
//! nothing back to the simulation except a draw error.

pub mod headless;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use headless::HeadlessRenderer;
pub use pipeline::{RenderInitError, RenderState};
pub use scene::build_scene;

use crate::sim::Snapshot;

/// Draws one frame of the match
pub trait RenderAdapter {
    type Error;

    fn draw(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error>;
}
