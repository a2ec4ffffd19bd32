use matchdex_records::{Combatant, MoveRecord, RecordSource};
use serde::{Deserialize, Serialize};

use crate::{Resolved, TeamError};

/// One Pokemon on a trainer's team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightMember {
    /// National dex id as written in the fight data (e.g. "0025")
    pub id: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub ball: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub ability: Option<String>,
    /// Moves the trainer's Pokemon actually has; empty means "use learnset"
    #[serde(default)]
    pub moves: Vec<String>,
}

impl FightMember {
    /// Species name for this member's id
    pub fn species_name<F>(&self, id_to_name: F) -> Result<String, TeamError>
    where
        F: Fn(&str) -> Option<String>,
    {
        id_to_name(self.id.trim()).ok_or_else(|| TeamError::UnknownSpecies(self.id.clone()))
    }
}

/// A trainer battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fight {
    pub trainer_name: String,
    #[serde(default)]
    pub trainer_class: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub battle_type: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub team: Vec<FightMember>,
}

impl Fight {
    /// Parse the fight list from an already-read JSON string
    pub fn parse_all(json: &str) -> Result<Vec<Fight>, TeamError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turn the trainer's team into combatants.
    ///
    /// Members with listed moves use exactly those moves; the others get
    /// their learnset up to the member's level. Ids or species the source
    /// cannot resolve end up in [`Resolved::missing`].
    pub fn opponent_team<S, F>(&self, source: &S, id_to_name: F) -> Resolved
    where
        S: RecordSource,
        F: Fn(&str) -> Option<String>,
    {
        let mut resolved = Resolved::default();

        for member in &self.team {
            let species = match member.species_name(&id_to_name) {
                Ok(species) => species,
                Err(err) => {
                    tracing::warn!(trainer = %self.trainer_name, error = %err, "Skipping member");
                    resolved.missing.push(member.id.clone());
                    continue;
                }
            };

            let cap = (member.level > 0).then_some(member.level);
            let Some(mut combatant) = source.combatant_at_level(&species, cap) else {
                tracing::warn!(trainer = %self.trainer_name, species = %species, "Species not found");
                resolved.missing.push(species);
                continue;
            };

            if !member.moves.is_empty() {
                combatant.moves = listed_moves(source, &combatant, &member.moves);
            }
            resolved.combatants.push(combatant);
        }

        resolved
    }
}

fn listed_moves<S: RecordSource>(source: &S, combatant: &Combatant, names: &[String]) -> Vec<MoveRecord> {
    names
        .iter()
        .filter(|name| !name.trim().is_empty())
        .map(|name| {
            source.move_record(name).unwrap_or_else(|| {
                tracing::warn!(species = %combatant.name, move_name = %name, "Listed move not found");
                MoveRecord::unknown(name.trim())
            })
        })
        .collect()
}

/// Fights whose trainer name contains `query` (case-insensitive).
/// A blank query matches nothing.
pub fn find_fights<'a>(fights: &'a [Fight], query: &str) -> Vec<&'a Fight> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    fights
        .iter()
        .filter(|f| f.trainer_name.to_lowercase().contains(&query))
        .collect()
}
