//! Canonical Pokemon and move records.
//!
//! Everything the evaluator reads goes through the types in this crate, so
//! key spellings and sentinel strings from the wiki cache are resolved once,
//! at the loading boundary:
//!
//! ```text
//! cache JSON (German keys, "K.O.", "variiert", "—")
//!        │  RawPokemon / RawMove
//!        ▼
//! Combatant / MoveRecord / StatBlock ← THIS CRATE
//!        │
//!        └─> matchdex-matchup
//! ```
//!
//! # Example Usage
//!
//! ```
//! use matchdex_records::{Dex, RecordSource, Power};
//!
//! let pokemon = r#"{
//!     "Glumanda": {
//!         "Typen": ["Feuer"],
//!         "Statuswerte": {"KP": 39, "Angriff": 52, "Verteidigung": 43,
//!                         "SpAngriff": 60, "SpVerteidigung": 50, "Initiative": 65},
//!         "Attacken": {"LevelUp": [{"Name": "Glut", "Level": "Start"}]}
//!     }
//! }"#;
//! let moves = r#"{
//!     "Glut": {"Name": "Glut", "Typ": "Feuer", "Kategorie": "Speziell",
//!              "Stärke": "40", "Genauigkeit": "100", "AP": "25"}
//! }"#;
//!
//! let dex = Dex::from_cache_json(pokemon, moves).unwrap();
//! let glumanda = dex.combatant("glumanda").unwrap();
//! assert_eq!(glumanda.stats.speed, 65);
//! assert_eq!(glumanda.moves[0].power, Power::Fixed(40));
//! ```

use thiserror::Error;

mod combatant;
mod learnset;
mod moves;
mod raw;
mod source;
mod stats;

pub use combatant::Combatant;
pub use learnset::{GroupKey, LearnLevel, LearnMethod, LearnedMove, Learnset, group_moves};
pub use moves::{Accuracy, MoveCategory, MoveRecord, Power};
pub use raw::{RawLearnEntry, RawMove, RawMoveLists, RawPokemon};
pub use source::{Dex, MoveSource, RecordSource};
pub use stats::{Stat, StatBlock};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown move category: {0}")]
    UnknownCategory(String),
}
