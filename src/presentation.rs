//! Text shown by the host UI
//!
//! The simulation only reports [`MatchEvent`]s; wording lives here.

use crate::sim::{MatchEvent, MatchPhase, Score, Side};

/// Display name for a side
pub fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "Pikachu",
        Side::Right => "Charizard",
    }
}

/// Scoreboard text, e.g. `3 ❖ 5`
pub fn scoreboard(score: &Score) -> String {
    format!("{} ❖ {}", score.left, score.right)
}

/// Label for the play/pause button
pub fn toggle_label(phase: MatchPhase) -> &'static str {
    if phase.is_playing() { "Pause" } else { "Start" }
}

/// Status line for a batch of events from one tick or transition
///
/// Returns `None` when nothing in the batch warrants a new status line
/// (bounces, or a serve on its own).
pub fn status_line(events: &[MatchEvent]) -> Option<String> {
    let mut line: Option<String> = None;

    for event in events {
        match *event {
            MatchEvent::PointScored { scorer, .. } => {
                line = Some(format!("{} scores! Rally again!", side_name(scorer)));
            }
            MatchEvent::MatchWon { winner, .. } => {
                line = Some(format!(
                    "{} scores! Victory! Press Start for a rematch.",
                    side_name(winner)
                ));
            }
            MatchEvent::Paused => line = Some("Game paused.".to_string()),
            MatchEvent::Resumed => {
                line = Some("Battle on! Keep the Poké Ball moving.".to_string());
            }
            MatchEvent::ScoresCleared => {
                line = Some("Scores cleared. Press Start to play!".to_string());
            }
            MatchEvent::Served { .. }
            | MatchEvent::WallBounce
            | MatchEvent::PaddleBounce { .. } => {}
        }
    }

    line
}

/// Shown when startup resources fail
pub fn load_failure_line() -> &'static str {
    "Failed to start the graphics. Check your browser and refresh."
}
