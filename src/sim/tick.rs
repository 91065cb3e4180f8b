//! Per-frame simulation step
//!
//! Order within a step: paddle input, ball integration, wall bounce,
//! paddle bounce, scoring.

use super::geometry::{clamp, intersects};
use super::input::{HeldControls, sample_input};
use super::lifecycle::{MatchEvent, point_scored};
use super::serve::ServeSource;
use super::state::{Ball, Paddle, Side, SimulationState};
use crate::consts::{BOUNCE_SPEED_BOOST, MAX_BOUNCE_ANGLE, WALL_MARGIN};

/// Advance the match by `delta` seconds
///
/// Does nothing unless the match is rallying. A zero, negative or
/// non-finite `delta` (stalled clock) is a no-op.
pub fn step(
    state: &mut SimulationState,
    held: &HeldControls,
    delta: f32,
    source: &mut impl ServeSource,
) -> Vec<MatchEvent> {
    if !state.is_playing() || !delta.is_finite() || delta <= 0.0 {
        return Vec::new();
    }

    sample_input(state, held, delta);
    advance_ball(state, delta, source)
}

/// Integrate the ball and resolve walls, paddles and scoring
pub fn advance_ball(
    state: &mut SimulationState,
    delta: f32,
    source: &mut impl ServeSource,
) -> Vec<MatchEvent> {
    if !delta.is_finite() || delta <= 0.0 {
        return Vec::new();
    }

    let mut events = Vec::new();
    let court = state.court;
    let ball = &mut state.ball;

    ball.pos += ball.vel * delta;

    // Top/bottom walls
    if ball.pos.y <= court.padding || ball.pos.y + ball.size >= court.height - court.padding {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = clamp(
            ball.pos.y,
            court.padding + WALL_MARGIN,
            court.height - ball.size - court.padding - WALL_MARGIN,
        );
        log::trace!("Wall bounce at y={:.1}", ball.pos.y);
        events.push(MatchEvent::WallBounce);
    }

    // Only honor a paddle hit while the ball is still heading into it, so an
    // overlapping ball is not bounced twice.
    if ball.vel.x < 0.0 && intersects(&ball.bounds(), &state.left.rect()) {
        events.push(bounce_from_paddle(ball, &state.left));
    }
    if ball.vel.x > 0.0 && intersects(&ball.bounds(), &state.right.rect()) {
        events.push(bounce_from_paddle(ball, &state.right));
    }

    // A ball fully past one edge is a point for the far side
    let scorer = if ball.pos.x + ball.size < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > court.width {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        events.extend(point_scored(state, scorer, source).events);
    }

    events
}

/// Send the ball back off `paddle`, steeper the further from its center
/// it hits, and slightly faster than it arrived.
pub fn bounce_from_paddle(ball: &mut Ball, paddle: &Paddle) -> MatchEvent {
    let half_height = paddle.size.y / 2.0;
    let hit_pos = ball.center().y - paddle.center_y();
    let normalized = hit_pos / half_height;
    let angle = normalized * MAX_BOUNCE_ANGLE;

    let speed = ball.current_speed() + BOUNCE_SPEED_BOOST;
    let direction = if ball.vel.x > 0.0 { -1.0 } else { 1.0 };
    ball.vel.x = angle.cos() * speed * direction;
    ball.vel.y = angle.sin() * speed;

    log::debug!(
        "{:?} paddle bounce: offset {:.2}, speed {:.1}",
        paddle.side,
        normalized,
        speed
    );
    MatchEvent::PaddleBounce {
        side: paddle.side,
        speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::serve::FixedServe;
    use crate::sim::state::{MatchPhase, Score};
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn rallying() -> SimulationState {
        let mut state = SimulationState::new();
        state.phase = MatchPhase::Rallying;
        state
    }

    fn serve() -> FixedServe {
        FixedServe::flat(Side::Right, 300.0)
    }

    #[test]
    fn test_step_is_noop_for_bad_delta() {
        let mut state = rallying();
        state.ball.vel = Vec2::new(200.0, 50.0);
        let before = state.clone();
        let mut held = HeldControls::default();
        held.left_up = true;

        for delta in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let events = step(&mut state, &held, delta, &mut serve());
            assert!(events.is_empty());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_step_is_noop_when_not_playing() {
        for phase in [MatchPhase::Idle, MatchPhase::Paused, MatchPhase::MatchOver] {
            let mut state = SimulationState::new();
            state.phase = phase;
            state.ball.vel = Vec2::new(200.0, 0.0);
            let before = state.clone();

            let mut held = HeldControls::default();
            held.right_down = true;
            step(&mut state, &held, DT, &mut serve());

            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_ball_integrates_position() {
        let mut state = rallying();
        state.ball.vel = Vec2::new(120.0, -60.0);
        let start = state.ball.pos;

        step(&mut state, &HeldControls::default(), 0.5, &mut serve());

        assert_eq!(state.ball.pos, start + Vec2::new(60.0, -30.0));
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = rallying();
        state.ball.pos = Vec2::new(400.0, COURT_PADDING + 2.0);
        state.ball.vel = Vec2::new(0.0, -300.0);

        let events = step(&mut state, &HeldControls::default(), DT, &mut serve());

        assert_eq!(events, vec![MatchEvent::WallBounce]);
        assert!(state.ball.vel.y > 0.0);
        assert_eq!(state.ball.pos.y, COURT_PADDING + WALL_MARGIN);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = rallying();
        let bottom = COURT_HEIGHT - COURT_PADDING;
        state.ball.pos = Vec2::new(400.0, bottom - BALL_SIZE - 1.0);
        state.ball.vel = Vec2::new(0.0, 300.0);

        step(&mut state, &HeldControls::default(), DT, &mut serve());

        assert!(state.ball.vel.y < 0.0);
        assert_eq!(state.ball.pos.y, bottom - BALL_SIZE - WALL_MARGIN);
    }

    #[test]
    fn test_centered_left_paddle_bounce() {
        // Left paddle centered (y=240, 60x120 at x=26), ball level with its
        // center and overlapping the paddle face, moving left at 200 px/s.
        let mut state = rallying();
        assert_eq!(state.left.rect().pos, Vec2::new(26.0, 240.0));
        state.ball.pos = Vec2::new(70.0, 288.0);
        state.ball.vel = Vec2::new(-200.0, 0.0);
        assert!(intersects(&state.ball.bounds(), &state.left.rect()));

        let events = advance_ball(&mut state, 0.001, &mut serve());

        assert!(state.ball.vel.x > 0.0);
        assert!(state.ball.vel.y.abs() < 1.0);
        assert!((state.ball.current_speed() - 212.0).abs() < 1e-3);
        assert!(matches!(
            events.as_slice(),
            [MatchEvent::PaddleBounce {
                side: Side::Left,
                ..
            }]
        ));
    }

    #[test]
    fn test_right_paddle_edge_hit_is_steep() {
        let mut state = rallying();
        // Ball center level with the bottom edge of the right paddle
        let bottom = state.right.pos.y + state.right.size.y;
        state.ball.pos = Vec2::new(state.right.pos.x - 20.0, bottom - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::new(300.0, 0.0);
        let before = state.ball.current_speed();

        let mut ball = state.ball.clone();
        ball.pos += ball.vel * 0.001;
        let event = bounce_from_paddle(&mut ball, &state.right);

        assert!(ball.vel.x < 0.0);
        assert!(ball.vel.y > 0.0);
        let angle = ball.vel.y.atan2(-ball.vel.x);
        assert!((angle - MAX_BOUNCE_ANGLE).abs() < 0.01);
        assert_eq!(
            event,
            MatchEvent::PaddleBounce {
                side: Side::Right,
                speed: before + BOUNCE_SPEED_BOOST
            }
        );
    }

    #[test]
    fn test_overlap_moving_away_does_not_bounce() {
        let mut state = rallying();
        state.ball.pos = Vec2::new(60.0, 288.0);
        state.ball.vel = Vec2::new(250.0, 0.0);

        let events = advance_ball(&mut state, 0.001, &mut serve());

        assert!(events.is_empty());
        assert_eq!(state.ball.vel, Vec2::new(250.0, 0.0));
    }

    #[test]
    fn test_ball_past_left_edge_scores_right() {
        let mut state = rallying();
        state.ball.pos = Vec2::new(-BALL_SIZE + 0.5, 100.0);
        state.ball.vel = Vec2::new(-60.0, 0.0);

        let events = step(&mut state, &HeldControls::default(), 0.1, &mut serve());

        assert_eq!(state.score, Score { left: 0, right: 1 });
        assert!(matches!(
            events.first(),
            Some(MatchEvent::PointScored {
                scorer: Side::Right,
                ..
            })
        ));
        assert_eq!(state.ball.pos, state.court.center());
        assert!(state.is_playing());
    }

    #[test]
    fn test_ball_past_right_edge_scores_left() {
        let mut state = rallying();
        state.ball.pos = Vec2::new(COURT_WIDTH - 1.0, 100.0);
        state.ball.vel = Vec2::new(60.0, 0.0);

        step(&mut state, &HeldControls::default(), 0.1, &mut serve());

        assert_eq!(state.score, Score { left: 1, right: 0 });
    }

    #[test]
    fn test_ball_at_minus_one_scores_seventh_point() {
        // Right edge still at 23 > 0: one more step carries it past
        let mut state = rallying();
        state.score.right = TARGET_SCORE - 1;
        state.ball.pos = Vec2::new(-1.0, 100.0);
        state.ball.vel = Vec2::new(-300.0, 0.0);

        let events = step(&mut state, &HeldControls::default(), 0.1, &mut serve());

        assert_eq!(state.score.right, TARGET_SCORE);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.phase, MatchPhase::MatchOver);
        assert!(matches!(
            events.last(),
            Some(MatchEvent::MatchWon {
                winner: Side::Right,
                ..
            })
        ));

        // Frozen until toggled or reset
        let frozen = state.ball.pos;
        step(&mut state, &HeldControls::default(), 0.1, &mut serve());
        assert_eq!(state.ball.pos, frozen);
    }

    proptest! {
        #[test]
        fn paddle_bounce_adds_fixed_speed(
            vx in 50.0f32..900.0,
            vy in -400.0f32..400.0,
            offset in -70.0f32..70.0,
            from_left in any::<bool>(),
        ) {
            let state = SimulationState::new();
            let paddle = if from_left { &state.left } else { &state.right };
            let mut ball = state.ball.clone();
            ball.pos.y = paddle.center_y() + offset - ball.size / 2.0;
            ball.vel = Vec2::new(if from_left { -vx } else { vx }, vy);
            let before = ball.current_speed();

            bounce_from_paddle(&mut ball, paddle);

            prop_assert!((ball.current_speed() - (before + BOUNCE_SPEED_BOOST)).abs() < 1e-2);
            if from_left {
                prop_assert!(ball.vel.x > 0.0);
            } else {
                prop_assert!(ball.vel.x < 0.0);
            }
        }

        #[test]
        fn wall_bounce_flips_once_and_lands_inside(
            x in 200.0f32..600.0,
            vy in 50.0f32..900.0,
            downward in any::<bool>(),
        ) {
            let mut state = rallying();
            let court = state.court;
            state.ball.pos.x = x;
            state.ball.pos.y = if downward {
                court.height - court.padding - state.ball.size - 0.5
            } else {
                court.padding + 0.5
            };
            state.ball.vel = Vec2::new(0.0, if downward { vy } else { -vy });

            let events = advance_ball(&mut state, DT, &mut serve());

            prop_assert_eq!(events, vec![MatchEvent::WallBounce]);
            prop_assert_eq!(state.ball.vel.y > 0.0, !downward);
            prop_assert!(state.ball.pos.y > court.padding);
            prop_assert!(state.ball.pos.y + state.ball.size < court.height - court.padding);
        }
    }
}
