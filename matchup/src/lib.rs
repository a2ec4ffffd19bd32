//! Matchup evaluation: which own Pokemon should face which opponent.
//!
//! # Overview
//!
//! ```text
//! TypeChart + Combatants + EvaluatorConfig
//!        │
//!        ▼
//! Evaluator ← THIS CRATE
//!   ├─ resolve moves once (category, power, accuracy)
//!   ├─ best move in both directions for every pair
//!   ├─ normalize damage over the run, derive exposure
//!   ├─ survival, utility, weighted counter score
//!   └─> OpponentRanking (top N counters per opponent)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use matchdex_chart::{Type, TypeChart};
//! use matchdex_matchup::{Evaluator, EvaluatorConfig};
//! use matchdex_records::{Accuracy, Combatant, MoveCategory, MoveRecord, Power, StatBlock};
//!
//! let chart = TypeChart::standard();
//! let evaluator = Evaluator::new(&chart, EvaluatorConfig::default()).unwrap();
//!
//! let lapras = Combatant::new("Lapras", vec![Type::Water, Type::Ice], StatBlock::new(130, 85, 80, 85, 95, 60))
//!     .with_moves(vec![MoveRecord::new("Surfer", Type::Water, MoveCategory::Special, Power::Fixed(90), Accuracy::Percent(100))]);
//! let arcanine = Combatant::new("Arkani", vec![Type::Fire], StatBlock::new(90, 110, 80, 100, 80, 95))
//!     .with_moves(vec![MoveRecord::new("Flammenwurf", Type::Fire, MoveCategory::Special, Power::Fixed(90), Accuracy::Percent(100))]);
//!
//! let report = evaluator.evaluate(&[lapras, arcanine], &[Combatant::new("Golem", vec![Type::Rock, Type::Ground], StatBlock::new(80, 120, 130, 55, 65, 45))]);
//! let best = report.rankings[0].best().unwrap();
//! assert_eq!(best.own, "Lapras");
//! ```

mod config;
mod damage;
mod error;
mod evaluator;
pub mod normalize;
pub mod ranking;
pub mod survival;
mod utility;

mod tests;

pub use config::{EvaluatorConfig, MoveOverride, OverrideTable, Weights, default_healing_moves};
pub use damage::{
    AccuracySource, CategorySource, MoveEstimate, PowerSource, ResolvedMove, STAB_MULTIPLIER,
    best_move, estimate_damage, resolve_move,
};
pub use error::MatchupError;
pub use evaluator::{EvaluationReport, Evaluator, PairEvaluation, SkippedPair};
pub use ranking::{OpponentRanking, RankedCounter, Reason, ScoreBreakdown};
pub use survival::{SpeedOrder, SurvivalInput, survival_estimate};
pub use utility::utility_score;
