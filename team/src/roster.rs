use matchdex_records::RecordSource;
use serde::{Deserialize, Serialize};

use crate::Resolved;

pub const DEFAULT_LEVEL_CAP: u32 = 55;

/// Which level cap limits an owned Pokemon's level-up moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelCapPolicy {
    /// Everyone uses the roster's global cap
    #[default]
    Global,
    /// Use each Pokemon's own level when it has one
    Individual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedPokemon {
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
}

impl OwnedPokemon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
        }
    }

    pub fn at_level(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level: Some(level),
        }
    }
}

/// The player's side of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub owned: Vec<OwnedPokemon>,
    pub global_level_cap: u32,
    pub policy: LevelCapPolicy,
    /// Opponent species, when not taken from a [`Fight`](crate::Fight)
    pub opponents: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            owned: Vec::new(),
            global_level_cap: DEFAULT_LEVEL_CAP,
            policy: LevelCapPolicy::Global,
            opponents: Vec::new(),
        }
    }
}

impl Roster {
    pub fn new<S: Into<String>>(owned: impl IntoIterator<Item = S>) -> Self {
        Self {
            owned: owned.into_iter().map(OwnedPokemon::new).collect(),
            ..Self::default()
        }
    }

    pub fn with_opponents<S: Into<String>>(mut self, opponents: impl IntoIterator<Item = S>) -> Self {
        self.opponents = opponents.into_iter().map(Into::into).collect();
        self
    }

    /// Level cap applied to `pokemon`
    pub fn level_cap_for(&self, pokemon: &OwnedPokemon) -> u32 {
        match (self.policy, pokemon.level) {
            (LevelCapPolicy::Individual, Some(level)) => level,
            _ => self.global_level_cap,
        }
    }

    /// Resolve the owned Pokemon. Names the source does not know are
    /// reported in [`Resolved::missing`] and otherwise skipped.
    pub fn resolve(&self, source: &impl RecordSource) -> Resolved {
        let mut resolved = Resolved::default();
        for pokemon in &self.owned {
            let cap = self.level_cap_for(pokemon);
            match source.combatant_at_level(&pokemon.name, Some(cap)) {
                Some(combatant) => resolved.combatants.push(combatant),
                None => {
                    tracing::warn!(name = %pokemon.name, "Owned Pokemon not found, skipping");
                    resolved.missing.push(pokemon.name.clone());
                }
            }
        }
        resolved
    }

    /// Resolve the opponent list with full learnsets
    pub fn resolve_opponents(&self, source: &impl RecordSource) -> Resolved {
        let mut resolved = Resolved::default();
        for name in &self.opponents {
            match source.combatant(name) {
                Some(combatant) => resolved.combatants.push(combatant),
                None => {
                    tracing::warn!(name = %name, "Opponent not found, skipping");
                    resolved.missing.push(name.clone());
                }
            }
        }
        resolved
    }
}
