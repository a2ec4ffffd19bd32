//! Record lookup traits and the in-memory [`Dex`]

use std::collections::HashMap;

use anyhow::{Context, Result};
use matchdex_chart::Type;

use crate::{Combatant, LearnedMove, Learnset, MoveRecord, RawMove, RawPokemon, StatBlock};

/// Move database looked up by name
pub trait MoveSource {
    /// Find a move by name (case-insensitive)
    fn move_record(&self, name: &str) -> Option<MoveRecord>;
}

/// Species and move database
pub trait RecordSource: MoveSource {
    /// Combatant with its full move list
    fn combatant(&self, name: &str) -> Option<Combatant>;

    /// Combatant whose level-up moves are limited to `level_cap`.
    ///
    /// The default ignores the cap and returns [`RecordSource::combatant`].
    /// Sources that know learn levels should override it.
    fn combatant_at_level(&self, name: &str, level_cap: Option<u32>) -> Option<Combatant> {
        let _ = level_cap;
        self.combatant(name)
    }
}

#[derive(Debug, Clone)]
struct Species {
    name: String,
    types: Vec<Type>,
    stats: StatBlock,
    learnset: Learnset,
}

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct Dex {
    species: HashMap<String, Species>,
    moves: HashMap<String, MoveRecord>,
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Dex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the already-read Pokemon and attack cache files.
    ///
    /// Both are JSON objects keyed by name. Individual entries are converted
    /// leniently; only a document that is not valid JSON of that shape fails.
    pub fn from_cache_json(pokemon_json: &str, attack_json: &str) -> Result<Self> {
        let raw_moves: HashMap<String, RawMove> =
            serde_json::from_str(attack_json).context("Failed to parse attack cache")?;
        let raw_pokemon: HashMap<String, RawPokemon> =
            serde_json::from_str(pokemon_json).context("Failed to parse Pokemon cache")?;

        let mut dex = Self::new();
        for (name, raw) in raw_moves {
            dex.insert_move(raw.into_record(&name));
        }
        for (name, raw) in raw_pokemon {
            let types = raw.parsed_types(&name);
            let stats = raw.stat_block();
            let learnset = raw.moves.to_learnset();
            dex.insert_species(name, types, stats, learnset);
        }

        tracing::debug!(
            species = dex.species.len(),
            moves = dex.moves.len(),
            "Loaded record cache"
        );
        Ok(dex)
    }

    pub fn insert_move(&mut self, record: MoveRecord) {
        self.moves.insert(key(&record.name), record);
    }

    pub fn insert_species(
        &mut self,
        name: impl Into<String>,
        types: Vec<Type>,
        stats: StatBlock,
        learnset: Learnset,
    ) {
        let name = name.into();
        self.species.insert(
            key(&name),
            Species {
                name,
                types,
                stats,
                learnset,
            },
        );
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn learnset(&self, name: &str) -> Option<&Learnset> {
        self.species.get(&key(name)).map(|s| &s.learnset)
    }

    /// Learned moves at `level_cap` paired with their records.
    ///
    /// Moves missing from the attack cache get a placeholder record.
    pub fn detailed_moves(
        &self,
        name: &str,
        level_cap: Option<u32>,
    ) -> Option<Vec<(LearnedMove, MoveRecord)>> {
        let species = self.species.get(&key(name))?;
        Some(
            species
                .learnset
                .moves_up_to(level_cap)
                .into_iter()
                .map(|learned| (learned.clone(), self.resolve_move(&species.name, &learned.name)))
                .collect(),
        )
    }

    fn resolve_move(&self, species: &str, move_name: &str) -> MoveRecord {
        match self.moves.get(&key(move_name)) {
            Some(record) => record.clone(),
            None => {
                tracing::warn!(species, move_name, "Move missing from attack cache");
                MoveRecord::unknown(move_name)
            }
        }
    }
}

impl MoveSource for Dex {
    fn move_record(&self, name: &str) -> Option<MoveRecord> {
        self.moves.get(&key(name)).cloned()
    }
}

impl RecordSource for Dex {
    fn combatant(&self, name: &str) -> Option<Combatant> {
        self.combatant_at_level(name, None)
    }

    fn combatant_at_level(&self, name: &str, level_cap: Option<u32>) -> Option<Combatant> {
        let species = self.species.get(&key(name))?;
        let moves = self
            .detailed_moves(name, level_cap)?
            .into_iter()
            .map(|(_, record)| record)
            .collect();

        Some(Combatant {
            name: species.name.clone(),
            types: species.types.clone(),
            stats: species.stats,
            moves,
        })
    }
}
