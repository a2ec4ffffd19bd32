//! Base stats and the canonical stat schema

use serde::{Deserialize, Serialize};

/// One of the six base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Map a source key to a stat.
    ///
    /// Covers English names, short forms, and the German wiki keys with their
    /// spelling variants (`SpAngriff`, `Sp_Angriff`, `Sp.Angriff`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| !matches!(c, '_' | '.' | ' ' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "hp" | "kp" => Some(Stat::Hp),
            "attack" | "atk" | "angriff" => Some(Stat::Attack),
            "defense" | "def" | "verteidigung" => Some(Stat::Defense),
            "specialattack" | "spattack" | "spa" | "spangriff" => Some(Stat::SpecialAttack),
            "specialdefense" | "spdefense" | "spd" | "spverteidigung" => {
                Some(Stat::SpecialDefense)
            }
            "speed" | "spe" | "initiative" | "init" => Some(Stat::Speed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special_attack",
            Stat::SpecialDefense => "special_defense",
            Stat::Speed => "speed",
        }
    }
}

/// Base stat block in the canonical schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatBlock {
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Build from `(key, value)` pairs in any supported naming scheme.
    ///
    /// Unknown keys are skipped with a warning; stats that never appear stay 0.
    pub fn from_named<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, u32)>,
    {
        let mut block = Self::default();
        for (key, value) in entries {
            match Stat::from_key(key.as_ref()) {
                Some(stat) => block.set(stat, value),
                None => tracing::warn!(key = key.as_ref(), "Ignoring unknown stat key"),
            }
        }
        block
    }

    /// Get a stat
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set a stat
    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Sum of all six stats
    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|s| self.get(*s)).sum()
    }

    /// Stats that are still zero, usually missing from the source
    pub fn missing(&self) -> Vec<Stat> {
        Stat::ALL
            .iter()
            .copied()
            .filter(|s| self.get(*s) == 0)
            .collect()
    }
}
