use matchdex_chart::Type;
use serde::{Deserialize, Serialize};

use crate::{MoveRecord, StatBlock};

/// A Pokemon as the evaluator sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,

    /// One or two types, in source order
    pub types: Vec<Type>,

    pub stats: StatBlock,

    /// Known moves
    pub moves: Vec<MoveRecord>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, types: Vec<Type>, stats: StatBlock) -> Self {
        Self {
            name: name.into(),
            types,
            stats,
            moves: Vec::new(),
        }
    }

    /// Builder-style move list
    pub fn with_moves(mut self, moves: Vec<MoveRecord>) -> Self {
        self.moves = moves;
        self
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    /// Look up a known move by name (case-insensitive)
    pub fn find_move(&self, name: &str) -> Option<&MoveRecord> {
        self.moves.iter().find(|m| m.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Accuracy, MoveCategory, Power};

    #[test]
    fn test_combatant_lookup() {
        let c = Combatant::new(
            "Bisaflor",
            vec![Type::Grass, Type::Poison],
            StatBlock::new(80, 82, 83, 100, 100, 80),
        )
        .with_moves(vec![MoveRecord::new(
            "Matschbombe",
            Type::Poison,
            MoveCategory::Special,
            Power::Fixed(90),
            Accuracy::Percent(100),
        )]);

        assert!(c.has_type(Type::Poison));
        assert!(!c.has_type(Type::Fire));
        assert!(c.find_move("matschbombe").is_some());
        assert!(c.find_move("Solarstrahl").is_none());
    }
}
