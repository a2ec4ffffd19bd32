//! Move records and sentinel parsing for power, accuracy and category

use matchdex_chart::Type;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Damage class of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    /// Parse a category (English or German wiki spelling)
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s.trim().to_lowercase().as_str() {
            "physical" | "physisch" | "phys" => Ok(MoveCategory::Physical),
            "special" | "speziell" | "spez" => Ok(MoveCategory::Special),
            "status" => Ok(MoveCategory::Status),
            "" => Err(ParseError::MissingField("category".to_string())),
            _ => Err(ParseError::UnknownCategory(s.trim().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
            MoveCategory::Status => "Status",
        }
    }

    pub fn is_damaging(&self) -> bool {
        !matches!(self, MoveCategory::Status)
    }
}

impl std::fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared base power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Power {
    Fixed(u32),
    /// "K.O." - one-hit knockout moves
    OneHitKo,
    /// "varies" / "variiert"
    Varies,
    /// Absent or "—"
    Unknown,
}

impl Power {
    /// Parse a power field. Never fails; unrecognised text is `Unknown`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Some(n) = leading_number(s) {
            return Power::Fixed(n);
        }
        match s.to_lowercase().as_str() {
            "k.o." | "k.o" | "ko" | "ohko" => Power::OneHitKo,
            "varies" | "variiert" | "variabel" | "?" => Power::Varies,
            _ => Power::Unknown,
        }
    }

    /// Parse an optional field
    pub fn from_field(field: Option<&str>) -> Self {
        field.map_or(Power::Unknown, Power::parse)
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            Power::Fixed(n) => Some(*n),
            _ => None,
        }
    }
}

/// Declared accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accuracy {
    /// Hit chance in percent
    Percent(u32),
    /// "—" - cannot miss
    AlwaysHits,
    /// "varies" / "variiert"
    Varies,
    /// Absent or unrecognised
    Unknown,
}

impl Accuracy {
    /// Parse an accuracy field. Never fails; unrecognised text is `Unknown`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Some(n) = leading_number(s) {
            return Accuracy::Percent(n);
        }
        match s.to_lowercase().as_str() {
            "—" | "-" | "–" | "∞" | "always" | "immer" => Accuracy::AlwaysHits,
            "varies" | "variiert" | "variabel" => Accuracy::Varies,
            _ => Accuracy::Unknown,
        }
    }

    /// Parse an optional field
    pub fn from_field(field: Option<&str>) -> Self {
        field.map_or(Accuracy::Unknown, Accuracy::parse)
    }

    /// Hit chance as a 0-1 fraction, if numeric
    pub fn fraction(&self) -> Option<f64> {
        match self {
            Accuracy::Percent(p) => Some(f64::from(*p) / 100.0),
            _ => None,
        }
    }
}

/// Leading run of ASCII digits, e.g. "90", "100%", "60*"
fn leading_number(s: &str) -> Option<u32> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// A move in the canonical schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub name: String,

    /// Move type; `None` when the source had no recognisable type
    pub move_type: Option<Type>,

    /// Category declared by the record itself
    pub category: Option<MoveCategory>,

    pub power: Power,

    pub accuracy: Accuracy,

    /// Power points
    pub pp: Option<u32>,
}

impl MoveRecord {
    /// Create a fully specified damaging or status move
    pub fn new(
        name: impl Into<String>,
        move_type: Type,
        category: MoveCategory,
        power: Power,
        accuracy: Accuracy,
    ) -> Self {
        Self {
            name: name.into(),
            move_type: Some(move_type),
            category: Some(category),
            power,
            accuracy,
            pp: None,
        }
    }

    /// Placeholder for a move whose record is absent from the source
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            move_type: None,
            category: None,
            power: Power::Unknown,
            accuracy: Accuracy::Unknown,
            pp: None,
        }
    }

    /// Same move with the declared category cleared
    pub fn without_category(mut self) -> Self {
        self.category = None;
        self
    }

    pub fn is_one_hit_ko(&self) -> bool {
        self.power == Power::OneHitKo
    }

    /// Whether this record carries nothing beyond its name
    pub fn is_placeholder(&self) -> bool {
        self.move_type.is_none()
            && self.category.is_none()
            && self.power == Power::Unknown
            && self.accuracy == Accuracy::Unknown
    }
}
