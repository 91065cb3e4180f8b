//! Render adapter without a GPU
//!
//! Builds the same vertex list as the WebGPU path and keeps counters, so
//! native runs and tests exercise the full frame path.

use std::convert::Infallible;

use super::RenderAdapter;
use super::scene::build_scene;
use crate::settings::Settings;
use crate::sim::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    settings: Settings,
    frames: u64,
    last_vertex_count: usize,
    last_snapshot: Option<Snapshot>,
}

impl HeadlessRenderer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_vertex_count(&self) -> usize {
        self.last_vertex_count
    }

    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.last_snapshot.as_ref()
    }
}

impl RenderAdapter for HeadlessRenderer {
    type Error = Infallible;

    fn draw(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        self.last_vertex_count = build_scene(snapshot, &self.settings).len();
        self.last_snapshot = Some(*snapshot);
        self.frames += 1;
        Ok(())
    }
}
