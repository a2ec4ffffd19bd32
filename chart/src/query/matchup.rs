//! Type matchup helpers for decision making

use std::collections::BTreeMap;

use crate::{ChartError, Effectiveness, Type, TypeChart};

/// Which attacking types to keep in [`type_matchups`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchupFilter {
    #[default]
    All,
    /// Only multipliers above 1.0
    Weakness,
    /// Only multipliers below 1.0 (immunities included)
    Resistance,
}

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(
    chart: &TypeChart,
    defender_types: &[Type],
    attacking_types: &[Type],
) -> Result<bool, ChartError> {
    for t in attacking_types {
        if chart.effectiveness(*t, defender_types)? > 1.0 {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(
    chart: &TypeChart,
    defender_types: &[Type],
    attacking_types: &[Type],
) -> Result<bool, ChartError> {
    if attacking_types.is_empty() {
        return Ok(false);
    }
    for t in attacking_types {
        if chart.effectiveness(*t, defender_types)? >= 1.0 {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(
    chart: &TypeChart,
    defender_types: &[Type],
    attacking_type: Type,
) -> Result<bool, ChartError> {
    Ok(chart.effectiveness(attacking_type, defender_types)? == 0.0)
}

/// Every attacking type's multiplier against the defender, most effective first.
///
/// Ties keep chart order.
pub fn type_matchups(
    chart: &TypeChart,
    defender_types: &[Type],
    filter: MatchupFilter,
) -> Result<Vec<(Type, f64)>, ChartError> {
    let mut result = Vec::with_capacity(Type::ALL.len());
    for attack in Type::all() {
        let eff = chart.effectiveness(*attack, defender_types)?;
        let keep = match filter {
            MatchupFilter::All => true,
            MatchupFilter::Weakness => eff > 1.0,
            MatchupFilter::Resistance => eff < 1.0,
        };
        if keep {
            result.push((*attack, eff));
        }
    }
    result.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(result)
}

/// Attacking types grouped by tier; every tier is present, possibly empty
pub fn matchups_by_tier(
    chart: &TypeChart,
    defender_types: &[Type],
) -> Result<BTreeMap<Effectiveness, Vec<Type>>, ChartError> {
    let mut groups: BTreeMap<Effectiveness, Vec<Type>> = Effectiveness::ALL
        .iter()
        .map(|tier| (*tier, Vec::new()))
        .collect();

    for attack in Type::all() {
        let eff = chart.effectiveness(*attack, defender_types)?;
        if let Some(tier) = Effectiveness::from_multiplier(eff) {
            groups.entry(tier).or_default().push(*attack);
        }
    }
    Ok(groups)
}

/// Get all types that are super effective against the defender
pub fn weaknesses(chart: &TypeChart, defender_types: &[Type]) -> Result<Vec<Type>, ChartError> {
    filter_types(chart, defender_types, |eff| eff > 1.0)
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(chart: &TypeChart, defender_types: &[Type]) -> Result<Vec<Type>, ChartError> {
    filter_types(chart, defender_types, |eff| eff > 0.0 && eff < 1.0)
}

/// Get all types that the defender is immune to
pub fn immunities(chart: &TypeChart, defender_types: &[Type]) -> Result<Vec<Type>, ChartError> {
    filter_types(chart, defender_types, |eff| eff == 0.0)
}

fn filter_types(
    chart: &TypeChart,
    defender_types: &[Type],
    keep: impl Fn(f64) -> bool,
) -> Result<Vec<Type>, ChartError> {
    let mut result = Vec::new();
    for attack in Type::all() {
        if keep(chart.effectiveness(*attack, defender_types)?) {
            result.push(*attack);
        }
    }
    Ok(result)
}

/// Attacking types whose mean multiplier over a whole team is above 1.0,
/// best first.
///
/// A member with an unusable type set counts as neutral.
pub fn optimal_attack_types(chart: &TypeChart, team: &[Vec<Type>]) -> Vec<(Type, f64)> {
    let mut scores: Vec<(Type, f64)> = Type::all()
        .iter()
        .map(|attack| {
            if team.is_empty() {
                return (*attack, 1.0);
            }
            let total: f64 = team
                .iter()
                .map(|member| chart.effectiveness(*attack, member).unwrap_or(1.0))
                .sum();
            (*attack, total / team.len() as f64)
        })
        .filter(|(_, avg)| *avg > 1.0)
        .collect();

    scores.sort_by(|a, b| b.1.total_cmp(&a.1));
    scores
}

/// How one defender fares against a fixed set of attacking types
#[derive(Debug, Clone, PartialEq)]
pub struct DefenderReport {
    pub name: String,
    pub types: Vec<Type>,
    /// Multiplier per attacking type; `None` when the lookup failed
    pub per_type: Vec<(Type, Option<f64>)>,
    /// Sum of multipliers; `None` if any lookup failed
    pub total: Option<f64>,
}

/// Rank defenders against an attacker's move types, best defender first.
///
/// Defenders are ordered by the sum of multipliers they take, ascending;
/// defenders whose type set could not be looked up sort last.
pub fn rank_defenders(
    chart: &TypeChart,
    attack_types: &[Type],
    defenders: &[(String, Vec<Type>)],
) -> Vec<DefenderReport> {
    let mut reports: Vec<DefenderReport> = defenders
        .iter()
        .map(|(name, types)| {
            let per_type: Vec<(Type, Option<f64>)> = attack_types
                .iter()
                .map(|attack| (*attack, chart.effectiveness(*attack, types).ok()))
                .collect();
            let total = per_type
                .iter()
                .map(|(_, eff)| *eff)
                .sum::<Option<f64>>();
            DefenderReport {
                name: name.clone(),
                types: types.clone(),
                per_type,
                total,
            }
        })
        .collect();

    reports.sort_by(|a, b| {
        let a = a.total.unwrap_or(f64::INFINITY);
        let b = b.total.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });
    reports
}
