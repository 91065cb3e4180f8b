//! Held-key sampling for paddle movement

use super::state::{Side, SimulationState};

/// The four logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Control {
    pub fn side(self) -> Side {
        match self {
            Control::LeftUp | Control::LeftDown => Side::Left,
            Control::RightUp | Control::RightDown => Side::Right,
        }
    }
}

/// Which controls are currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldControls {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl HeldControls {
    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::LeftUp => self.left_up = held,
            Control::LeftDown => self.left_down = held,
            Control::RightUp => self.right_up = held,
            Control::RightDown => self.right_down = held,
        }
    }

    pub fn press(&mut self, control: Control) {
        self.set(control, true);
    }

    pub fn release(&mut self, control: Control) {
        self.set(control, false);
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::LeftUp => self.left_up,
            Control::LeftDown => self.left_down,
            Control::RightUp => self.right_up,
            Control::RightDown => self.right_down,
        }
    }

    /// Net vertical direction for a side: -1 up, +1 down, 0 idle or both held
    pub fn axis(&self, side: Side) -> f32 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        let mut axis = 0.0;
        if up {
            axis -= 1.0;
        }
        if down {
            axis += 1.0;
        }
        axis
    }
}

/// Move both paddles according to the held controls over `delta` seconds
pub fn sample_input(state: &mut SimulationState, held: &HeldControls, delta: f32) {
    let court = state.court;
    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle_mut(side);
        let dy = held.axis(side) * paddle.speed * delta;
        paddle.move_by(dy, &court);
    }
}
