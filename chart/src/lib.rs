//! Type effectiveness chart for Pokemon matchup analysis.
//!
//! # Overview
//!
//! `matchdex-chart` turns an 18x18 single-type table into the full chart of
//! single and dual type defenders, and answers lookups against it:
//!
//! ```text
//! BaseChart (single-type multipliers, omitted = 1.0)
//!        │  TypeChart::build
//!        ▼
//! TypeChart (18 singles + 153 pairs per attacker) ← THIS CRATE
//!        │
//!        └─> matchdex-matchup (damage and counter scoring)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 types, parseable from English or German names
//! - [`BaseChart`] - sparse single-type table
//! - [`TypeChart`] - full chart with canonical [`DefenderKey`]s
//! - [`Effectiveness`] - multiplier tiers with display labels
//!
//! # Example Usage
//!
//! ```
//! use matchdex_chart::{Type, TypeChart};
//!
//! let chart = TypeChart::standard();
//! let eff = chart.effectiveness(Type::Fire, &[Type::Grass, Type::Steel]).unwrap();
//! assert_eq!(eff, 4.0);
//!
//! let eff = chart.effectiveness_by_name("Elektro", &["Wasser", "Boden"]).unwrap();
//! assert_eq!(eff, 0.0);
//! ```

use thiserror::Error;

mod base;
mod chart;
pub mod query;
mod tier;
mod types;

mod tests;

pub use base::{BaseChart, STANDARD_MATRIX};
pub use chart::{ChartTable, DefenderKey, ENTRIES_PER_ATTACKER, TypeChart};
pub use tier::Effectiveness;
pub use types::{Type, parse_types};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Defender must have 1 or 2 types, got {0}")]
    InvalidCardinality(usize),

    #[error("Malformed defender key: {0}")]
    MalformedKey(String),

    #[error("No chart entry for {attack} against {defender}")]
    MissingEntry { attack: Type, defender: String },
}

impl ChartError {
    /// Caller passed something that can never be looked up
    /// (unknown type name or wrong number of defender types)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ChartError::UnknownType(_) | ChartError::InvalidCardinality(_)
        )
    }
}
