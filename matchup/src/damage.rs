//! Damage estimation.
//!
//! A move is first *resolved* against its user: category, power and accuracy
//! are fixed once, each through a fixed precedence chain. The resolved move
//! is then scored against any number of defenders.

use matchdex_chart::{ChartError, Type, TypeChart};
use matchdex_records::{Accuracy, Combatant, MoveCategory, MoveRecord, MoveSource, Power, StatBlock};
use serde::Serialize;

use crate::EvaluatorConfig;

pub const STAB_MULTIPLIER: f64 = 1.5;

/// Where a resolved move's category came from, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategorySource {
    /// The move record's own category
    Declared,
    /// The move database handed to the evaluator
    Cached,
    /// Attack vs special attack of the user; ties are physical
    InferredFromStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerSource {
    Declared,
    Override,
    OneHitKo,
    /// Status move without a power value
    NotDamaging,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccuracySource {
    Declared,
    Override,
    OneHitKo,
    /// Non-numeric or absent accuracy, treated as always hitting
    Default,
}

/// A move with category, power and accuracy fixed for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMove {
    pub name: String,
    pub move_type: Option<Type>,
    pub category: MoveCategory,
    pub category_source: CategorySource,
    pub power: u32,
    pub power_source: PowerSource,
    /// 0-1 hit chance
    pub accuracy: f64,
    pub accuracy_source: AccuracySource,
}

fn infer_category(stats: &StatBlock) -> MoveCategory {
    if stats.special_attack > stats.attack {
        MoveCategory::Special
    } else {
        MoveCategory::Physical
    }
}

/// Resolve `record` for a user with `stats`
pub fn resolve_move(
    record: &MoveRecord,
    stats: &StatBlock,
    config: &EvaluatorConfig,
    moves_db: Option<&dyn MoveSource>,
) -> ResolvedMove {
    let cached = if record.category.is_none() || record.move_type.is_none() {
        moves_db.and_then(|db| db.move_record(&record.name))
    } else {
        None
    };

    let (category, category_source) = match (record.category, cached.as_ref().and_then(|c| c.category)) {
        (Some(category), _) => (category, CategorySource::Declared),
        (None, Some(category)) => (category, CategorySource::Cached),
        (None, None) => {
            let category = infer_category(stats);
            tracing::debug!(
                move_name = %record.name,
                category = %category,
                "Inferred move category from stats"
            );
            (category, CategorySource::InferredFromStats)
        }
    };

    let move_type = record
        .move_type
        .or_else(|| cached.as_ref().and_then(|c| c.move_type));

    let entry = config.overrides.get(&record.name);
    let one_hit_ko = record.is_one_hit_ko() || entry.is_some_and(|o| o.one_hit_ko);

    let (power, power_source) = match (record.power, entry.and_then(|o| o.power)) {
        (Power::Fixed(n), _) => (n, PowerSource::Declared),
        (_, Some(n)) => (n, PowerSource::Override),
        _ if one_hit_ko => (config.ohko_power, PowerSource::OneHitKo),
        _ if category == MoveCategory::Status => (0, PowerSource::NotDamaging),
        (declared, None) => {
            tracing::warn!(
                move_name = %record.name,
                power = ?declared,
                fallback = config.default_power,
                "No usable power, using default"
            );
            (config.default_power, PowerSource::Default)
        }
    };

    let (accuracy, accuracy_source) = match (record.accuracy, entry.and_then(|o| o.accuracy)) {
        (Accuracy::Percent(p), _) => (f64::from(p) / 100.0, AccuracySource::Declared),
        (_, Some(a)) => (a, AccuracySource::Override),
        _ if one_hit_ko => (config.ohko_accuracy, AccuracySource::OneHitKo),
        _ => (1.0, AccuracySource::Default),
    };
    let accuracy = accuracy.clamp(0.0, 1.0);

    ResolvedMove {
        name: record.name.clone(),
        move_type,
        category,
        category_source,
        power,
        power_source,
        accuracy,
        accuracy_source,
    }
}

/// Damage of one resolved move against one defender
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveEstimate {
    pub move_name: String,
    pub category: MoveCategory,
    pub category_source: CategorySource,
    pub power: u32,
    pub power_source: PowerSource,
    pub accuracy: f64,
    pub accuracy_source: AccuracySource,
    pub effectiveness: f64,
    pub stab: f64,
    pub raw: f64,
    pub expected: f64,
}

/// Estimate the damage of `resolved`, used by `attacker`, against `defender`.
///
/// Fails only when the defender's type set cannot be looked up. A move with
/// no type is treated as neutral without STAB. Status moves do no damage.
pub fn estimate_damage(
    chart: &TypeChart,
    attacker: &Combatant,
    resolved: &ResolvedMove,
    defender: &Combatant,
) -> Result<MoveEstimate, ChartError> {
    let (effectiveness, stab) = match resolved.move_type {
        Some(move_type) => {
            let effectiveness = chart.effectiveness(move_type, &defender.types)?;
            let stab = if attacker.has_type(move_type) {
                STAB_MULTIPLIER
            } else {
                1.0
            };
            (effectiveness, stab)
        }
        None => {
            // Still reject a defender the chart could never handle
            if !(1..=2).contains(&defender.types.len()) {
                return Err(ChartError::InvalidCardinality(defender.types.len()));
            }
            tracing::warn!(move_name = %resolved.name, "Move has no type, assuming neutral");
            (1.0, 1.0)
        }
    };

    let (attack, defense) = match resolved.category {
        MoveCategory::Physical => (attacker.stats.attack, defender.stats.defense),
        MoveCategory::Special => (attacker.stats.special_attack, defender.stats.special_defense),
        MoveCategory::Status => (0, 1),
    };

    let raw = f64::from(resolved.power) * (f64::from(attack) / f64::from(defense.max(1)))
        * effectiveness
        * stab;

    Ok(MoveEstimate {
        move_name: resolved.name.clone(),
        category: resolved.category,
        category_source: resolved.category_source,
        power: resolved.power,
        power_source: resolved.power_source,
        accuracy: resolved.accuracy,
        accuracy_source: resolved.accuracy_source,
        effectiveness,
        stab,
        raw,
        expected: raw * resolved.accuracy,
    })
}

/// Highest expected damage; the first move wins ties
pub fn best_move(estimates: impl IntoIterator<Item = MoveEstimate>) -> Option<MoveEstimate> {
    estimates.into_iter().fold(None, |best, estimate| match best {
        Some(current) if current.expected >= estimate.expected => Some(current),
        _ => Some(estimate),
    })
}
