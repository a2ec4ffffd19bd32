//! Serde adapters for the wiki cache files.
//!
//! The cache stores German keys and loosely typed values (numbers are
//! sometimes strings, sometimes numbers). These structs accept both and
//! convert into the canonical records.

use std::collections::BTreeMap;

use matchdex_chart::Type;
use serde::{Deserialize, Deserializer};

use crate::{
    Accuracy, LearnLevel, LearnMethod, LearnedMove, Learnset, MoveCategory, MoveRecord, Power,
    StatBlock,
};

/// Accept a JSON string or number as an optional string
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accept integer or numeric-string stat values; anything else is dropped
fn lenient_stats<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| {
            let n = match &value {
                serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
                serde_json::Value::String(s) => s.trim().parse().ok(),
                _ => None,
            };
            if n.is_none() {
                tracing::warn!(key = %key, value = %value, "Dropping non-numeric stat value");
            }
            n.map(|n| (key, n))
        })
        .collect())
}

/// Move entry from the attack cache
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMove {
    #[serde(rename = "Name", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(rename = "Typ", default, deserialize_with = "lenient_string")]
    pub move_type: Option<String>,

    #[serde(rename = "Kategorie", default, deserialize_with = "lenient_string")]
    pub category: Option<String>,

    #[serde(rename = "Stärke", alias = "Staerke", default, deserialize_with = "lenient_string")]
    pub power: Option<String>,

    #[serde(rename = "Genauigkeit", default, deserialize_with = "lenient_string")]
    pub accuracy: Option<String>,

    #[serde(rename = "AP", default, deserialize_with = "lenient_string")]
    pub pp: Option<String>,
}

impl RawMove {
    /// Convert into a [`MoveRecord`]. `fallback_name` is the cache key, used
    /// when the entry carries no `Name` of its own.
    pub fn into_record(self, fallback_name: &str) -> MoveRecord {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        let move_type = self.move_type.as_deref().and_then(|t| {
            let parsed = Type::from_name(t);
            if parsed.is_none() {
                tracing::warn!(move_name = %name, move_type = t, "Unknown move type");
            }
            parsed
        });

        let category = self
            .category
            .as_deref()
            .and_then(|c| match MoveCategory::parse(c) {
                Ok(category) => Some(category),
                Err(err) => {
                    tracing::warn!(move_name = %name, error = %err, "Ignoring move category");
                    None
                }
            });

        let pp = self.pp.as_deref().and_then(|s| s.trim().parse().ok());

        MoveRecord {
            move_type,
            category,
            power: Power::from_field(self.power.as_deref()),
            accuracy: Accuracy::from_field(self.accuracy.as_deref()),
            pp,
            name,
        }
    }
}

/// Learnset entry (`{"Name": ..., "Level": ...}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLearnEntry {
    #[serde(rename = "Name", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(rename = "Level", default, deserialize_with = "lenient_string")]
    pub level: Option<String>,
}

/// `Attacken` block, one list per learn method
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMoveLists {
    #[serde(rename = "LevelUp", default)]
    pub level_up: Vec<RawLearnEntry>,

    #[serde(rename = "TM", default)]
    pub machine: Vec<RawLearnEntry>,

    #[serde(rename = "Ei", default)]
    pub egg: Vec<RawLearnEntry>,

    #[serde(rename = "Tutor", default)]
    pub tutor: Vec<RawLearnEntry>,
}

impl RawMoveLists {
    /// Flatten into a [`Learnset`]. Entries without a name are skipped.
    pub fn to_learnset(&self) -> Learnset {
        let mut learnset = Learnset::default();
        let lists = [
            (LearnMethod::LevelUp, &self.level_up),
            (LearnMethod::Machine, &self.machine),
            (LearnMethod::Egg, &self.egg),
            (LearnMethod::Tutor, &self.tutor),
        ];

        for (method, list) in lists {
            for entry in list {
                let Some(name) = entry.name.as_deref().filter(|n| !n.trim().is_empty()) else {
                    continue;
                };
                let level = match method {
                    LearnMethod::LevelUp => Some(
                        entry
                            .level
                            .as_deref()
                            .map_or(LearnLevel::Start, LearnLevel::parse),
                    ),
                    _ => None,
                };
                learnset.push(LearnedMove {
                    name: name.trim().to_string(),
                    method,
                    level,
                });
            }
        }
        learnset
    }
}

/// Species entry from the Pokemon cache
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPokemon {
    #[serde(rename = "Typen", default)]
    pub types: Vec<String>,

    #[serde(rename = "Statuswerte", default, deserialize_with = "lenient_stats")]
    pub stats: BTreeMap<String, u32>,

    #[serde(rename = "Attacken", default)]
    pub moves: RawMoveLists,
}

impl RawPokemon {
    /// Known types in source order. Unrecognised names are dropped with a warning.
    pub fn parsed_types(&self, species: &str) -> Vec<Type> {
        self.types
            .iter()
            .filter_map(|t| {
                let parsed = Type::from_name(t);
                if parsed.is_none() {
                    tracing::warn!(species, type_name = %t, "Unknown species type");
                }
                parsed
            })
            .collect()
    }

    /// Stat block in the canonical schema
    pub fn stat_block(&self) -> StatBlock {
        StatBlock::from_named(self.stats.iter().map(|(k, v)| (k.as_str(), *v)))
    }
}
