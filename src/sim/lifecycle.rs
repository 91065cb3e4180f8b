//! Round lifecycle: serve, point, pause/resume, reset
//!
//! Phase machine:
//! ```text
//! Idle ──toggle──▶ Rallying ◀──toggle──▶ Paused
//!                     │
//!                  point (score reaches target)
//!                     ▼
//!                 MatchOver ──toggle──▶ full reset + Rallying
//! ```
//! Every transition returns the new phase plus structured events; turning
//! events into text is left to `presentation`.

use glam::Vec2;

use super::serve::ServeSource;
use super::state::{MatchPhase, Score, Side, SimulationState};
use crate::consts::{BALL_BASE_SPEED, TARGET_SCORE};

/// Something that happened during a tick or a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchEvent {
    /// Ball re-centered and launched toward `toward`
    Served { toward: Side },
    /// Ball reflected off the top or bottom boundary
    WallBounce,
    /// Ball returned by a paddle at the given post-bounce speed
    PaddleBounce { side: Side, speed: f32 },
    /// `scorer` won the rally
    PointScored { scorer: Side, score: Score },
    /// `winner` reached the target score
    MatchWon { winner: Side, score: Score },
    Paused,
    Resumed,
    ScoresCleared,
}

/// Result of a lifecycle transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub phase: MatchPhase,
    pub events: Vec<MatchEvent>,
}

impl Transition {
    fn new(phase: MatchPhase) -> Self {
        Self {
            phase,
            events: Vec::new(),
        }
    }
}

/// Re-center the ball and launch it with a freshly drawn serve
pub fn serve_ball(state: &mut SimulationState, source: &mut impl ServeSource) -> MatchEvent {
    let serve = source.draw_serve();
    let ball = &mut state.ball;

    ball.speed = BALL_BASE_SPEED;
    ball.vel = Vec2::new(
        serve.angle.cos() * serve.speed * serve.toward.direction(),
        serve.angle.sin() * serve.speed,
    );
    ball.pos = state.court.center();

    log::debug!(
        "Served toward {:?} at {:.0} px/s, angle {:.3}",
        serve.toward,
        serve.speed,
        serve.angle
    );
    MatchEvent::Served {
        toward: serve.toward,
    }
}

/// Award a point to `scorer`, then either end the match or serve again
pub fn point_scored(
    state: &mut SimulationState,
    scorer: Side,
    source: &mut impl ServeSource,
) -> Transition {
    state.score.award(scorer);
    let score = state.score;
    log::info!(
        "{:?} scores ({} - {})",
        scorer,
        score.left,
        score.right
    );

    let mut transition = Transition::new(state.phase);
    transition
        .events
        .push(MatchEvent::PointScored { scorer, score });

    if let Some(winner) = score.winner(TARGET_SCORE) {
        state.phase = MatchPhase::MatchOver;
        log::info!("{:?} wins the match", winner);
        transition.events.push(MatchEvent::MatchWon { winner, score });
    } else {
        transition.events.push(serve_ball(state, source));
    }

    transition.phase = state.phase;
    transition
}

/// Flip between playing and not playing
///
/// Starting from a ball at rest serves first. Starting from `MatchOver`
/// runs a full reset and then starts the rematch.
pub fn toggle_play(state: &mut SimulationState, source: &mut impl ServeSource) -> Transition {
    match state.phase {
        MatchPhase::Rallying => {
            state.phase = MatchPhase::Paused;
            log::info!("Match paused");
            Transition {
                phase: state.phase,
                events: vec![MatchEvent::Paused],
            }
        }
        MatchPhase::MatchOver => {
            let mut transition = full_reset(state, source);
            transition.events.extend(start(state, source));
            transition.phase = state.phase;
            transition
        }
        MatchPhase::Idle | MatchPhase::Paused => {
            let events = start(state, source);
            Transition {
                phase: state.phase,
                events,
            }
        }
    }
}

fn start(state: &mut SimulationState, source: &mut impl ServeSource) -> Vec<MatchEvent> {
    let mut events = Vec::with_capacity(2);
    if state.ball.is_at_rest() {
        events.push(serve_ball(state, source));
    }
    state.phase = MatchPhase::Rallying;
    log::info!("Match running");
    events.push(MatchEvent::Resumed);
    events
}

/// Zero the score, serve a fresh ball and wait for Start
pub fn full_reset(state: &mut SimulationState, source: &mut impl ServeSource) -> Transition {
    state.score = Score::default();
    let served = serve_ball(state, source);
    state.phase = MatchPhase::Idle;
    log::info!("Scores cleared");

    Transition {
        phase: state.phase,
        events: vec![served, MatchEvent::ScoresCleared],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::serve::{FixedServe, Serve};

    fn flat_right() -> FixedServe {
        FixedServe::flat(Side::Right, 300.0)
    }

    #[test]
    fn test_serve_sets_velocity_from_angle() {
        let mut state = SimulationState::new();
        state.ball.speed = 999.0;
        state.ball.pos = Vec2::new(5.0, 5.0);
        let mut source = FixedServe(Serve {
            toward: Side::Left,
            angle: 0.25,
            speed: 300.0,
        });

        let event = serve_ball(&mut state, &mut source);

        assert_eq!(event, MatchEvent::Served { toward: Side::Left });
        assert_eq!(state.ball.speed, BALL_BASE_SPEED);
        assert_eq!(state.ball.pos, state.court.center());
        assert!((state.ball.vel.x - (-0.25f32.cos() * 300.0)).abs() < 1e-3);
        assert!((state.ball.vel.y - 0.25f32.sin() * 300.0).abs() < 1e-3);
        assert!((state.ball.current_speed() - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_point_scored_serves_again() {
        let mut state = SimulationState::new();
        state.phase = MatchPhase::Rallying;
        state.ball.pos = Vec2::new(-100.0, 300.0);

        let t = point_scored(&mut state, Side::Right, &mut flat_right());

        assert_eq!(state.score, Score { left: 0, right: 1 });
        assert_eq!(t.phase, MatchPhase::Rallying);
        assert_eq!(
            t.events,
            vec![
                MatchEvent::PointScored {
                    scorer: Side::Right,
                    score: state.score
                },
                MatchEvent::Served { toward: Side::Right },
            ]
        );
        assert_eq!(state.ball.pos, state.court.center());
    }

    #[test]
    fn test_point_scored_reaching_target_ends_match() {
        let mut state = SimulationState::new();
        state.phase = MatchPhase::Rallying;
        state.score.left = TARGET_SCORE - 1;
        state.score.right = 3;

        let t = point_scored(&mut state, Side::Left, &mut flat_right());

        assert_eq!(t.phase, MatchPhase::MatchOver);
        assert!(!state.is_playing());
        assert_eq!(state.score.right, 3);
        assert!(matches!(
            t.events.last(),
            Some(MatchEvent::MatchWon {
                winner: Side::Left,
                ..
            })
        ));
    }

    #[test]
    fn test_toggle_serves_when_ball_at_rest() {
        let mut state = SimulationState::new();
        assert!(state.ball.is_at_rest());

        let t = toggle_play(&mut state, &mut flat_right());

        assert_eq!(t.phase, MatchPhase::Rallying);
        assert_eq!(
            t.events,
            vec![
                MatchEvent::Served { toward: Side::Right },
                MatchEvent::Resumed
            ]
        );
        assert!(!state.ball.is_at_rest());
    }

    #[test]
    fn test_toggle_pause_and_resume_keeps_ball() {
        let mut state = SimulationState::new();
        toggle_play(&mut state, &mut flat_right());
        state.ball.pos = Vec2::new(123.0, 200.0);
        let vel = state.ball.vel;

        let paused = toggle_play(&mut state, &mut flat_right());
        assert_eq!(paused.phase, MatchPhase::Paused);
        assert_eq!(paused.events, vec![MatchEvent::Paused]);

        let resumed = toggle_play(&mut state, &mut flat_right());
        assert_eq!(resumed.phase, MatchPhase::Rallying);
        assert_eq!(resumed.events, vec![MatchEvent::Resumed]);
        assert_eq!(state.ball.pos, Vec2::new(123.0, 200.0));
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn test_full_reset() {
        let mut state = SimulationState::new();
        state.phase = MatchPhase::Rallying;
        state.score = Score { left: 4, right: 6 };

        let t = full_reset(&mut state, &mut flat_right());

        assert_eq!(state.score, Score::default());
        assert_eq!(t.phase, MatchPhase::Idle);
        assert!(!state.is_playing());
        assert_eq!(
            t.events,
            vec![
                MatchEvent::Served { toward: Side::Right },
                MatchEvent::ScoresCleared
            ]
        );
    }

    #[test]
    fn test_toggle_after_match_over_starts_rematch() {
        let mut state = SimulationState::new();
        state.phase = MatchPhase::MatchOver;
        state.score = Score {
            left: TARGET_SCORE,
            right: 2,
        };

        let t = toggle_play(&mut state, &mut flat_right());

        assert_eq!(t.phase, MatchPhase::Rallying);
        assert_eq!(state.score, Score::default());
        assert_eq!(
            t.events,
            vec![
                MatchEvent::Served { toward: Side::Right },
                MatchEvent::ScoresCleared,
                MatchEvent::Resumed,
            ]
        );
    }
}
