//! Builds the vertex list for one frame from a read-only snapshot

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{Rect, Snapshot};

/// Blur radius of the paddle glow (pixels)
const PADDLE_GLOW_BLUR: f32 = 16.0;
/// Blur radius of the ball glow (pixels)
const BALL_GLOW_BLUR: f32 = 12.0;
const STRIPE_WIDTH: f32 = 4.0;
const BORDER_WIDTH: f32 = 2.0;
const BALL_SEGMENTS: u32 = 32;

/// Court, paddles and ball, back to front
pub fn build_scene(snapshot: &Snapshot, settings: &Settings) -> Vec<Vertex> {
    let court = &snapshot.court;
    let mut vertices = Vec::with_capacity(1024);

    vertices.extend(shapes::rect(
        &Rect::new(0.0, 0.0, court.width, court.height),
        colors::BACKGROUND,
    ));

    if settings.court_lines {
        let stripe = Rect::new(
            court.width / 2.0 - STRIPE_WIDTH / 2.0,
            court.padding,
            STRIPE_WIDTH,
            court.height - court.padding * 2.0,
        );
        vertices.extend(shapes::rect(&stripe, colors::COURT_STRIPE));

        let border = Rect::new(
            court.padding,
            court.padding,
            court.width - court.padding * 2.0,
            court.height - court.padding * 2.0,
        );
        vertices.extend(shapes::rect_outline(
            &border,
            BORDER_WIDTH,
            colors::COURT_BORDER,
        ));
    }

    for (paddle, color) in [
        (&snapshot.left, colors::PADDLE_LEFT),
        (&snapshot.right, colors::PADDLE_RIGHT),
    ] {
        if settings.glow {
            vertices.extend(shapes::rect_glow(
                paddle,
                PADDLE_GLOW_BLUR,
                colors::PADDLE_GLOW,
            ));
        }
        vertices.extend(shapes::rect(paddle, color));
    }

    let ball = &snapshot.ball;
    let center = ball.center();
    let radius = ball.size.x / 2.0;
    if settings.glow {
        vertices.extend(shapes::circle_glow(
            center,
            radius,
            BALL_GLOW_BLUR,
            colors::BALL_GLOW,
        ));
    }
    vertices.extend(shapes::circle(center, radius, colors::BALL, BALL_SEGMENTS));
    vertices.extend(shapes::rect(
        &Rect {
            pos: Vec2::new(ball.pos.x, center.y - 1.5),
            size: Vec2::new(ball.size.x, 3.0),
        },
        colors::BALL_BAND,
    ));

    vertices
}
