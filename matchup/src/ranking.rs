//! Counter scores and per-opponent rankings

use serde::Serialize;

use crate::Weights;

/// Unweighted score terms of one (own, opponent) pair, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub damage: f64,
    pub survival: f64,
    pub utility: f64,
    pub exposure: f64,
}

impl ScoreBreakdown {
    /// Weighted sum before display scaling
    pub fn raw_score(&self, weights: &Weights) -> f64 {
        weights.damage * self.damage + weights.survival * self.survival
            + weights.utility * self.utility
            - weights.exposure * self.exposure
    }

    /// The two largest positive weighted contributions, largest first
    pub fn top_reasons(&self, weights: &Weights) -> Vec<Reason> {
        let mut reasons = vec![
            Reason::Damage(weights.damage * self.damage),
            Reason::Survival(weights.survival * self.survival),
            Reason::Utility(weights.utility * self.utility),
        ];
        reasons.retain(|r| r.contribution() > 0.0);
        reasons.sort_by(|a, b| b.contribution().total_cmp(&a.contribution()));
        reasons.truncate(2);
        reasons
    }
}

/// A positive contributor to a counter score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Reason {
    Damage(f64),
    Survival(f64),
    Utility(f64),
}

impl Reason {
    pub fn contribution(&self) -> f64 {
        match self {
            Reason::Damage(v) | Reason::Survival(v) | Reason::Utility(v) => *v,
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::Damage(v) => write!(f, "hits hard (+{:.2})", v),
            Reason::Survival(v) => write!(f, "likely to survive (+{:.2})", v),
            Reason::Utility(v) => write!(f, "brings support moves (+{:.2})", v),
        }
    }
}

/// One recommended counter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCounter {
    pub own: String,
    /// 0-100
    pub score: f64,
    pub reasons: Vec<Reason>,
    pub best_own_move: Option<String>,
    pub best_opponent_move: Option<String>,
    pub exposure: f64,
    pub exposure_warning: bool,
    pub breakdown: ScoreBreakdown,
}

/// Best counters for one opponent, best first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpponentRanking {
    pub opponent: String,
    pub counters: Vec<RankedCounter>,
}

impl OpponentRanking {
    pub fn best(&self) -> Option<&RankedCounter> {
        self.counters.first()
    }
}

/// Sort by score descending, keeping input order for equal scores, and keep `top_n`
pub fn top_counters(mut candidates: Vec<RankedCounter>, top_n: usize) -> Vec<RankedCounter> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(top_n);
    candidates
}
