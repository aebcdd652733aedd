//! HUD and overlay text

use crate::sim::state::GamePhase;
use crate::tuning::Difficulty;
use crate::ui;

use super::Frame;

/// Text for the current screen, top to bottom
pub fn hud_lines(frame: &Frame<'_>) -> Vec<String> {
    let mut lines = Vec::new();

    if frame.phase == GamePhase::LevelSelect {
        lines.push("PLANE DODGE".to_string());
        lines.push("SELECT DIFFICULTY".to_string());
        for d in Difficulty::ALL {
            let marker = if d == frame.difficulty { ">" } else { " " };
            lines.push(format!("{} {} (best {})", marker, d, frame.high_scores.get(d)));
        }
        return lines;
    }

    lines.push(format!("Score: {}", frame.score));
    lines.push(format!("Level: {}", frame.difficulty));
    lines.push("High Scores:".to_string());
    for (d, score) in frame.high_scores.iter() {
        lines.push(format!("{}: {}", d, score));
    }

    let title = match frame.phase {
        GamePhase::Paused => Some("GAME PAUSED"),
        GamePhase::GameOver => Some("GAME OVER"),
        GamePhase::LevelCompleted => Some("LEVEL COMPLETED!"),
        _ => None,
    };
    if let Some(title) = title {
        lines.push(title.to_string());
        if frame.phase != GamePhase::Paused {
            lines.push(format!("Your score: {}", frame.score));
        }
        for button in ui::buttons_for(frame.phase, &frame.field) {
            lines.push(format!("[{}]", button.id.label(frame.mouse_control)));
        }
    }

    if frame.phase == GamePhase::Playing {
        lines.push("P: Pause | M: Toggle Mouse Control | ESC: Menu".to_string());
    }
    lines
}
