//! Full effectiveness chart for single and dual type defenders

use std::collections::{BTreeMap, HashMap};

use crate::{BaseChart, ChartError, Type};

/// Canonical defender key.
///
/// Pairs are stored with the two types sorted by name, so
/// `Pair(Grass, Poison)` and a lookup for `[Poison, Grass]` hit the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DefenderKey {
    Single(Type),
    Pair(Type, Type),
}

impl DefenderKey {
    /// Canonical key for a pair of types; equal types collapse to a single key
    pub fn pair(a: Type, b: Type) -> Self {
        if a == b {
            DefenderKey::Single(a)
        } else if a.as_str() <= b.as_str() {
            DefenderKey::Pair(a, b)
        } else {
            DefenderKey::Pair(b, a)
        }
    }

    /// Key for a defender's type set (1 or 2 types)
    pub fn from_types(types: &[Type]) -> Result<Self, ChartError> {
        match types {
            [single] => Ok(DefenderKey::Single(*single)),
            [a, b] => Ok(DefenderKey::pair(*a, *b)),
            _ => Err(ChartError::InvalidCardinality(types.len())),
        }
    }

    /// Parse a persisted key: `"Fire, None"` or `"Grass, Poison"`
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let (first, second) = s
            .split_once(',')
            .ok_or_else(|| ChartError::MalformedKey(s.to_string()))?;
        let first: Type = first.trim().parse()?;
        match second.trim() {
            "None" => Ok(DefenderKey::Single(first)),
            other => Ok(DefenderKey::pair(first, other.parse()?)),
        }
    }

    /// Persisted string form
    pub fn to_key_string(&self) -> String {
        match self {
            DefenderKey::Single(t) => format!("{}, None", t),
            DefenderKey::Pair(a, b) => format!("{}, {}", a, b),
        }
    }

    /// The defender's types, in canonical order
    pub fn types(&self) -> Vec<Type> {
        match self {
            DefenderKey::Single(t) => vec![*t],
            DefenderKey::Pair(a, b) => vec![*a, *b],
        }
    }
}

impl std::fmt::Display for DefenderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefenderKey::Single(t) => write!(f, "{}", t),
            DefenderKey::Pair(a, b) => write!(f, "{}/{}", a, b),
        }
    }
}

/// Persisted table form: attacking type name -> defender key -> multiplier
pub type ChartTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Effectiveness of every attacking type against every single type and
/// every unordered pair of distinct types.
///
/// Immutable once built; share it by reference for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    entries: HashMap<Type, HashMap<DefenderKey, f64>>,
}

/// Entries per attacking type: 18 singles + 153 distinct pairs
pub const ENTRIES_PER_ATTACKER: usize = 18 + 18 * 17 / 2;

impl TypeChart {
    /// Build the full chart from a single-type base table.
    ///
    /// Total by construction: every attacker gets a value for every single
    /// type and every distinct pair.
    pub fn build(base: &BaseChart) -> Self {
        let mut entries = HashMap::with_capacity(Type::ALL.len());

        for attack in Type::all() {
            let mut row = HashMap::with_capacity(ENTRIES_PER_ATTACKER);
            for (i, first) in Type::all().iter().enumerate() {
                row.insert(DefenderKey::Single(*first), base.get(*attack, *first));

                for second in &Type::all()[i + 1..] {
                    let combined = base.get(*attack, *first) * base.get(*attack, *second);
                    row.insert(DefenderKey::pair(*first, *second), combined);
                }
            }
            entries.insert(*attack, row);
        }

        Self { entries }
    }

    /// Chart built from the standard Gen 6+ table
    pub fn standard() -> Self {
        Self::build(&BaseChart::standard())
    }

    /// Look up the multiplier of `attack` against a defender with 1 or 2 types
    pub fn effectiveness(&self, attack: Type, defenders: &[Type]) -> Result<f64, ChartError> {
        let key = DefenderKey::from_types(defenders)?;
        self.get(attack, key)
    }

    /// [`TypeChart::effectiveness`] over type names (English or German)
    pub fn effectiveness_by_name<S: AsRef<str>>(
        &self,
        attack: &str,
        defenders: &[S],
    ) -> Result<f64, ChartError> {
        let attack: Type = attack.parse()?;
        let defenders = crate::types::parse_types(defenders)?;
        self.effectiveness(attack, &defenders)
    }

    /// Look up a canonical key directly
    pub fn get(&self, attack: Type, key: DefenderKey) -> Result<f64, ChartError> {
        self.entries
            .get(&attack)
            .and_then(|row| row.get(&key))
            .copied()
            .ok_or_else(|| ChartError::MissingEntry {
                attack,
                defender: key.to_key_string(),
            })
    }

    /// Whether the chart has a row for this attacking type
    pub fn has_attacker(&self, attack: Type) -> bool {
        self.entries.get(&attack).is_some_and(|row| !row.is_empty())
    }

    /// Number of entries for one attacking type
    pub fn row_len(&self, attack: Type) -> usize {
        self.entries.get(&attack).map_or(0, HashMap::len)
    }

    /// Whether every attacker has every single and pair entry
    pub fn is_complete(&self) -> bool {
        Type::all()
            .iter()
            .all(|t| self.row_len(*t) == ENTRIES_PER_ATTACKER)
    }

    /// Convert to the persisted table form
    pub fn to_table(&self) -> ChartTable {
        self.entries
            .iter()
            .map(|(attack, row)| {
                let row = row
                    .iter()
                    .map(|(key, multiplier)| (key.to_key_string(), *multiplier))
                    .collect();
                (attack.as_str().to_string(), row)
            })
            .collect()
    }

    /// Load from the persisted table form.
    ///
    /// Keys may use English or German names and either pair order. Holes are
    /// allowed here and surface as [`ChartError::MissingEntry`] on lookup.
    pub fn from_table(table: &ChartTable) -> Result<Self, ChartError> {
        let mut entries: HashMap<Type, HashMap<DefenderKey, f64>> = HashMap::new();
        for (attack, row) in table {
            let attack: Type = attack.parse()?;
            let target = entries.entry(attack).or_default();
            for (key, multiplier) in row {
                target.insert(DefenderKey::parse(key)?, *multiplier);
            }
        }
        Ok(Self { entries })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeChart {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_table().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TypeChart {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let table = ChartTable::deserialize(deserializer)?;
        TypeChart::from_table(&table).map_err(serde::de::Error::custom)
    }
}
