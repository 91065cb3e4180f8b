//! Match state and core simulation types
//!
//! Everything the physics step and lifecycle transitions mutate lives here.
//! Nothing in this module knows about rendering or the host.

use glam::Vec2;

use super::geometry::{Circle, Rect, clamp};
use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal sign pointing toward this side of the court
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Not started yet, or freshly reset; waiting for Start
    Idle,
    /// Ball in motion, simulation advancing
    Rallying,
    /// Frozen mid-match
    Paused,
    /// One side reached the target score
    MatchOver,
}

impl MatchPhase {
    /// True when input and physics should advance
    #[inline]
    pub fn is_playing(self) -> bool {
        self == MatchPhase::Rallying
    }
}

/// The padded playing field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            width: COURT_WIDTH,
            height: COURT_HEIGHT,
            padding: COURT_PADDING,
        }
    }
}

impl Court {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Allowed range for the top edge of something `height` tall
    pub fn vertical_range(&self, height: f32) -> (f32, f32) {
        (self.padding, self.height - height - self.padding)
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed (pixels/s)
    pub speed: f32,
}

impl Paddle {
    /// Paddle at its side's fixed column, vertically centered
    pub fn new(side: Side, court: &Court) -> Self {
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        let x = match side {
            Side::Left => court.padding,
            Side::Right => court.width - court.padding - size.x,
        };
        Self {
            side,
            pos: Vec2::new(x, court.height / 2.0 - size.y / 2.0),
            size,
            speed: PADDLE_SPEED,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move vertically by `dy`, staying inside the padded court
    pub fn move_by(&mut self, dy: f32, court: &Court) {
        let (min, max) = court.vertical_range(self.size.y);
        self.pos.y = clamp(self.pos.y + dy, min, max);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Bounding box diameter
    pub size: f32,
    /// Baseline speed, restored on serve
    pub speed: f32,
}

impl Ball {
    /// Ball resting at the court center (before the first serve)
    pub fn new(court: &Court) -> Self {
        Self {
            pos: court.center(),
            vel: Vec2::ZERO,
            size: BALL_SIZE,
            speed: BALL_BASE_SPEED,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Collision circle around the bounding-box center
    #[inline]
    pub fn bounds(&self) -> Circle {
        Circle {
            center: self.center(),
            radius: self.size / 2.0,
        }
    }

    /// True before the very first serve
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.vel.x == 0.0 && self.vel.y == 0.0
    }

    /// Magnitude of the current velocity
    #[inline]
    pub fn current_speed(&self) -> f32 {
        self.vel.x.hypot(self.vel.y)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side that has reached `target`, if any
    pub fn winner(&self, target: u32) -> Option<Side> {
        if self.left >= target {
            Some(Side::Left)
        } else if self.right >= target {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Read-only view of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub court: Court,
    pub left: Rect,
    pub right: Rect,
    /// Ball bounding box
    pub ball: Rect,
}

/// Complete match state
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub court: Court,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// Fresh match: centered paddles, ball at rest, no score
    pub fn new() -> Self {
        let court = Court::default();
        Self {
            left: Paddle::new(Side::Left, &court),
            right: Paddle::new(Side::Right, &court),
            ball: Ball::new(&court),
            score: Score::default(),
            phase: MatchPhase::Idle,
            court,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            court: self.court,
            left: self.left.rect(),
            right: self.right.rect(),
            ball: Rect {
                pos: self.ball.pos,
                size: Vec2::splat(self.ball.size),
            },
        }
    }
}
