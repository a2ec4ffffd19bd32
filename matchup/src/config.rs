//! Evaluator configuration

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Weights of the counter score terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub damage: f64,
    pub survival: f64,
    pub utility: f64,
    /// Subtracted from the score
    pub exposure: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            damage: 2.0,
            survival: 3.0,
            utility: 0.5,
            exposure: 1.0,
        }
    }
}

/// Replacement data for a move whose power or accuracy is not a number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveOverride {
    pub power: Option<u32>,
    /// Hit chance as a 0-1 fraction
    pub accuracy: Option<f64>,
    pub one_hit_ko: bool,
}

impl MoveOverride {
    pub fn power(power: u32) -> Self {
        Self {
            power: Some(power),
            ..Self::default()
        }
    }

    pub fn one_hit_ko() -> Self {
        Self {
            one_hit_ko: true,
            ..Self::default()
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}

/// Move name (case-insensitive) to override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, MoveOverride>", into = "BTreeMap<String, MoveOverride>")]
pub struct OverrideTable {
    entries: BTreeMap<String, MoveOverride>,
}

const ONE_HIT_KO_MOVES: &[&str] = &[
    "eiseskälte",
    "sheer cold",
    "guillotine",
    "hornbohrer",
    "horn drill",
    "geofissur",
    "fissure",
];

// Weight, speed and HP based moves, pinned to a typical value
const VARIABLE_POWER_MOVES: &[(&str, u32)] = &[
    ("fußkick", 60),
    ("low kick", 60),
    ("strauchler", 60),
    ("grass knot", 60),
    ("rammboss", 60),
    ("heavy slam", 60),
    ("gyroball", 60),
    ("gyro ball", 60),
    ("dreschflegel", 40),
    ("flail", 40),
    ("gegenschlag", 40),
    ("reversal", 40),
];

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-hit KO moves and the common variable-power moves
    pub fn standard() -> Self {
        let mut table = Self::new();
        for name in ONE_HIT_KO_MOVES {
            table.insert(*name, MoveOverride::one_hit_ko());
        }
        for (name, power) in VARIABLE_POWER_MOVES {
            table.insert(*name, MoveOverride::power(*power));
        }
        table
    }

    pub fn insert(&mut self, name: impl AsRef<str>, entry: MoveOverride) {
        self.entries.insert(name.as_ref().trim().to_lowercase(), entry);
    }

    pub fn with(mut self, name: impl AsRef<str>, entry: MoveOverride) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn get(&self, name: &str) -> Option<&MoveOverride> {
        self.entries.get(&name.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, MoveOverride>> for OverrideTable {
    fn from(map: BTreeMap<String, MoveOverride>) -> Self {
        let mut table = Self::new();
        for (name, entry) in map {
            table.insert(name, entry);
        }
        table
    }
}

impl From<OverrideTable> for BTreeMap<String, MoveOverride> {
    fn from(table: OverrideTable) -> Self {
        table.entries
    }
}

const HEALING_MOVES: &[&str] = &[
    "morgengrauen",
    "mondschein",
    "genesung",
    "ruheort",
    "synthese",
    "heilbefehl",
    "tagedieb",
    "sandsammler",
    "lunargebet",
    "weichei",
    "milchgetränk",
    "läuterung",
    "erholung",
    "verzehrer",
    "heilwoge",
    "florakur",
    "pollenknödel",
    "lebentropfen",
    "dschungelheilung",
    "giga-lichtblick",
    "wunschtraum",
    "lunartanz",
    "heilopfer",
    "wasserring",
    "verwurzler",
    "egelsamen",
    "vitalsegen",
    "vitalglocke",
    "heilung",
    "aromakur",
    "mutschub",
    "morning sun",
    "moonlight",
    "recover",
    "roost",
    "synthesis",
    "heal order",
    "slack off",
    "shore up",
    "lunar blessing",
    "soft-boiled",
    "milk drink",
    "purify",
    "rest",
    "strength sap",
    "heal pulse",
    "floral healing",
    "pollen puff",
    "life dew",
    "jungle healing",
    "wish",
    "lunar dance",
    "healing wish",
    "aqua ring",
    "ingrain",
    "leech seed",
    "heal bell",
    "aromatherapy",
];

/// Default set of recovery move names, lowercased
pub fn default_healing_moves() -> BTreeSet<String> {
    HEALING_MOVES.iter().map(|m| m.to_string()).collect()
}

/// Evaluator configuration.
///
/// Every field has a default; a JSON config only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub weights: Weights,

    /// Power used when a move's power cannot be determined
    pub default_power: u32,

    /// Power used for one-hit KO moves
    pub ohko_power: u32,

    /// Hit chance used for one-hit KO moves without a numeric accuracy
    pub ohko_accuracy: f64,

    pub overrides: OverrideTable,

    /// Lowercased names of recovery moves
    pub healing_moves: BTreeSet<String>,

    /// Counters reported per opponent
    pub top_n: usize,

    /// Exposure at or above this is flagged
    pub exposure_warning: f64,

    /// When slower, assume our hit still lands before the opponent's.
    /// If false, the slower side always takes the incoming hit first.
    pub assume_first_strike: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            default_power: 10,
            ohko_power: 255,
            ohko_accuracy: 0.3,
            overrides: OverrideTable::standard(),
            healing_moves: default_healing_moves(),
            top_n: 3,
            exposure_warning: 0.4,
            assume_first_strike: true,
        }
    }
}

impl EvaluatorConfig {
    pub fn is_healing_move(&self, name: &str) -> bool {
        self.healing_moves.contains(&name.trim().to_lowercase())
    }
}
