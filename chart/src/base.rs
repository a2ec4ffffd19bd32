//! Single-type base effectiveness table

use std::collections::HashMap;

use crate::{ChartError, Type};

/// 18x18 single-type effectiveness matrix
/// Row = attacking type, Column = defending type
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static STANDARD_MATRIX: [[f64; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];

/// Sparse single-type effectiveness table.
///
/// Only non-neutral interactions need to be listed; everything omitted,
/// including a type against itself, reads as `1.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseChart {
    rows: HashMap<Type, HashMap<Type, f64>>,
}

impl BaseChart {
    /// Create an empty (all neutral) base chart
    pub fn new() -> Self {
        Self::default()
    }

    /// The Gen 6+ effectiveness table
    pub fn standard() -> Self {
        Self::from_matrix(&STANDARD_MATRIX)
    }

    /// Build from a dense matrix in [`Type::ALL`] order, keeping only non-neutral cells
    pub fn from_matrix(matrix: &[[f64; 18]; 18]) -> Self {
        let mut chart = Self::new();
        for attack in Type::all() {
            for defend in Type::all() {
                let multiplier = matrix[attack.index()][defend.index()];
                if multiplier != 1.0 {
                    chart.set(*attack, *defend, multiplier);
                }
            }
        }
        chart
    }

    /// Build from string-keyed rows (English or German type names)
    pub fn from_names<A, D>(rows: &HashMap<A, HashMap<D, f64>>) -> Result<Self, ChartError>
    where
        A: AsRef<str>,
        D: AsRef<str>,
    {
        let mut chart = Self::new();
        for (attack, row) in rows {
            let attack: Type = attack.as_ref().parse()?;
            for (defend, multiplier) in row {
                let defend: Type = defend.as_ref().parse()?;
                chart.set(attack, defend, *multiplier);
            }
        }
        Ok(chart)
    }

    /// Set (or override) a single interaction
    pub fn set(&mut self, attack: Type, defend: Type, multiplier: f64) {
        self.rows.entry(attack).or_default().insert(defend, multiplier);
    }

    /// Builder-style [`BaseChart::set`]
    pub fn with(mut self, attack: Type, defend: Type, multiplier: f64) -> Self {
        self.set(attack, defend, multiplier);
        self
    }

    /// Multiplier for a single interaction, `1.0` when omitted
    pub fn get(&self, attack: Type, defend: Type) -> f64 {
        self.rows
            .get(&attack)
            .and_then(|row| row.get(&defend))
            .copied()
            .unwrap_or(1.0)
    }

    /// Whether the interaction is explicitly listed
    pub fn is_explicit(&self, attack: Type, defend: Type) -> bool {
        self.rows
            .get(&attack)
            .is_some_and(|row| row.contains_key(&defend))
    }
}
