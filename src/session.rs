//! Frame driver
//!
//! Owns the match state plus everything that is host-side rather than game
//! state: held keys, key bindings, the serve source and the last frame
//! timestamp. Each frame runs input and physics (only while rallying) and
//! then always draws.

use crate::consts::MAX_FRAME_DELTA;
use crate::renderer::RenderAdapter;
use crate::settings::KeyBindings;
use crate::sim::{
    self, HeldControls, MatchEvent, SeededServe, ServeSource, SimulationState, Transition,
};

/// One running match and its input/timing context
pub struct Session<S: ServeSource = SeededServe> {
    pub state: SimulationState,
    serve: S,
    held: HeldControls,
    bindings: KeyBindings,
    /// Timestamp of the previous frame (ms)
    last_time: Option<f64>,
}

impl Session<SeededServe> {
    /// Session with a seeded serve source
    pub fn new(seed: u64, bindings: KeyBindings) -> Self {
        let session = Self::with_source(SeededServe::new(seed), bindings);
        log::info!("Session created with seed: {}", session.serve.seed());
        session
    }
}

impl<S: ServeSource> Session<S> {
    pub fn with_source(serve: S, bindings: KeyBindings) -> Self {
        Self {
            state: SimulationState::new(),
            serve,
            held: HeldControls::default(),
            bindings,
            last_time: None,
        }
    }

    pub fn held(&self) -> &HeldControls {
        &self.held
    }

    /// Raw key pressed; returns false for keys that are not bound
    pub fn key_down(&mut self, key: &str) -> bool {
        match self.bindings.control_for(key) {
            Some(control) => {
                log::trace!("{:?} held ({:?} paddle)", control, control.side());
                self.held.press(control);
                true
            }
            None => false,
        }
    }

    /// Raw key released; returns false for keys that are not bound
    pub fn key_up(&mut self, key: &str) -> bool {
        match self.bindings.control_for(key) {
            Some(control) => {
                self.held.release(control);
                true
            }
            None => false,
        }
    }

    /// Drop every held control (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held = HeldControls::default();
    }

    pub fn toggle_play(&mut self) -> Transition {
        sim::toggle_play(&mut self.state, &mut self.serve)
    }

    pub fn full_reset(&mut self) -> Transition {
        sim::full_reset(&mut self.state, &mut self.serve)
    }

    /// Seconds since the previous frame, capped; 0 on the first frame and
    /// for timestamps that do not yield a finite delta
    fn frame_delta(&mut self, timestamp_ms: f64) -> f32 {
        let delta = match self.last_time {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(timestamp_ms);
        // `min` would turn NaN into the cap
        if !delta.is_finite() {
            return 0.0;
        }
        delta.min(MAX_FRAME_DELTA)
    }

    /// Advance the match to `timestamp_ms`: input then physics, only while
    /// rallying
    pub fn advance(&mut self, timestamp_ms: f64) -> Vec<MatchEvent> {
        let delta = self.frame_delta(timestamp_ms);
        sim::step(&mut self.state, &self.held, delta, &mut self.serve)
    }

    /// Draw the current state; called every frame, paused or not
    pub fn draw<R: RenderAdapter>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.draw(&self.state.snapshot())
    }

    /// Advance and draw one animation frame
    ///
    /// A draw failure does not lose the frame's events: they were already
    /// applied to the state and are returned alongside the draw result.
    pub fn frame<R: RenderAdapter>(
        &mut self,
        timestamp_ms: f64,
        renderer: &mut R,
    ) -> (Vec<MatchEvent>, Result<(), R::Error>) {
        let events = self.advance(timestamp_ms);
        let drawn = self.draw(renderer);
        (events, drawn)
    }
}
