//! Pokemon type enum and name handling

use std::str::FromStr;

use crate::ChartError;

/// Elemental type of a Pokemon or move. Declaration order is chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types, in chart order
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Chart order, same as [`Type::ALL`]
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Index into an 18-wide chart row
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a type name (case-insensitive).
    ///
    /// Accepts the English name as well as the German name used by the wiki
    /// the records are scraped from ("Feuer", "Käfer", "Unlicht", ...).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" | "feuer" => Some(Type::Fire),
            "water" | "wasser" => Some(Type::Water),
            "electric" | "elektro" => Some(Type::Electric),
            "grass" | "pflanze" => Some(Type::Grass),
            "ice" | "eis" => Some(Type::Ice),
            "fighting" | "kampf" => Some(Type::Fighting),
            "poison" | "gift" => Some(Type::Poison),
            "ground" | "boden" => Some(Type::Ground),
            "flying" | "flug" => Some(Type::Flying),
            "psychic" | "psycho" => Some(Type::Psychic),
            "bug" | "käfer" | "kaefer" => Some(Type::Bug),
            "rock" | "gestein" => Some(Type::Rock),
            "ghost" | "geist" => Some(Type::Ghost),
            "dragon" | "drache" => Some(Type::Dragon),
            "dark" | "unlicht" => Some(Type::Dark),
            "steel" | "stahl" => Some(Type::Steel),
            "fairy" | "fee" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical (English) string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// German wiki name
    pub fn german_name(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Feuer",
            Type::Water => "Wasser",
            Type::Electric => "Elektro",
            Type::Grass => "Pflanze",
            Type::Ice => "Eis",
            Type::Fighting => "Kampf",
            Type::Poison => "Gift",
            Type::Ground => "Boden",
            Type::Flying => "Flug",
            Type::Psychic => "Psycho",
            Type::Bug => "Käfer",
            Type::Rock => "Gestein",
            Type::Ghost => "Geist",
            Type::Dragon => "Drache",
            Type::Dark => "Unlicht",
            Type::Steel => "Stahl",
            Type::Fairy => "Fee",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Type {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_name(s).ok_or_else(|| ChartError::UnknownType(s.to_string()))
    }
}

/// Parse a list of type names, failing on the first unknown one
pub fn parse_types<S: AsRef<str>>(names: &[S]) -> Result<Vec<Type>, ChartError> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_name() {
        assert_eq!(Type::from_name("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("FIRE"), Some(Type::Fire));
        assert_eq!(Type::from_name(" Psychic "), Some(Type::Psychic));
        assert_eq!(Type::from_name("unknown"), None);
    }

    #[test]
    fn test_german_and_english_agree() {
        for t in Type::all() {
            assert_eq!(Type::from_name(t.as_str()), Some(*t));
            assert_eq!(Type::from_name(t.german_name()), Some(*t));
        }
        assert_eq!(Type::from_name("KÄFER"), Some(Type::Bug));
        assert_eq!(Type::from_name("Unlicht"), Some(Type::Dark));
    }

    #[test]
    fn test_from_str_error() {
        let err = "Shadow".parse::<Type>().unwrap_err();
        assert_eq!(err, ChartError::UnknownType("Shadow".to_string()));
    }

    #[test]
    fn test_parse_types() {
        assert_eq!(
            parse_types(&["Wasser", "Flug"]).unwrap(),
            vec![Type::Water, Type::Flying]
        );
        assert!(parse_types(&["Wasser", "Sound"]).is_err());
    }

    #[test]
    fn chart_order_matches_index() {
        assert_eq!(Type::all().len(), 18);
        for (i, t) in Type::all().iter().enumerate() {
            assert_eq!(t.index(), i);
        }
        assert_eq!(Type::all()[17], Type::Fairy);
    }
}
