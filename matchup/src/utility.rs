use matchdex_records::MoveCategory;

use crate::{EvaluatorConfig, ResolvedMove};

pub const HEALING_BONUS: f64 = 0.25;
pub const STATUS_MOVE_BONUS: f64 = 0.12;
pub const STATUS_BONUS_CAP: f64 = 0.5;

/// Support value of a move list, in `[0, 1]`
pub fn utility_score(moves: &[ResolvedMove], config: &EvaluatorConfig) -> f64 {
    let healing = if moves.iter().any(|m| config.is_healing_move(&m.name)) {
        HEALING_BONUS
    } else {
        0.0
    };

    let status_moves = moves
        .iter()
        .filter(|m| m.category == MoveCategory::Status)
        .count();
    let status = (status_moves as f64 * STATUS_MOVE_BONUS).min(STATUS_BONUS_CAP);

    (healing + status).clamp(0.0, 1.0)
}
