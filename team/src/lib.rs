//! Own roster and opponent teams.
//!
//! A [`Roster`] names the Pokemon the player owns and the level cap that
//! applies to them. A [`Fight`] is one trainer battle from the fight data,
//! whose members are turned into combatants through a
//! [`RecordSource`](matchdex_records::RecordSource).

use matchdex_records::Combatant;
use thiserror::Error;

mod fight;
mod roster;

pub use fight::{Fight, FightMember, find_fights};
pub use roster::{DEFAULT_LEVEL_CAP, LevelCapPolicy, OwnedPokemon, Roster};

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Invalid fight data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown species id: {0}")]
    UnknownSpecies(String),
}

/// Outcome of turning names into combatants
#[derive(Debug, Clone, Default)]
pub struct Resolved {
    pub combatants: Vec<Combatant>,

    /// Names (or species ids) that could not be found
    pub missing: Vec<String>,
}

impl Resolved {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
