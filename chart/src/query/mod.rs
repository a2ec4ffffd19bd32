//! Query helpers for matchup decisions
//!
//! This module provides utilities for analyzing type matchups against a
//! built [`TypeChart`](crate::TypeChart).

mod matchup;

pub use matchup::{
    DefenderReport,
    MatchupFilter,
    // Type-level queries
    immunities,
    is_immune_to,
    is_weak_to_any,
    matchups_by_tier,
    // Team-level queries
    optimal_attack_types,
    rank_defenders,
    resistances,
    resists_all,
    type_matchups,
    weaknesses,
};
