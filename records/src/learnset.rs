//! Learnsets, level filtering and move grouping

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::MoveRecord;

/// How a move is learned
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LearnMethod {
    LevelUp,
    /// TM / TR
    Machine,
    Egg,
    Tutor,
}

impl LearnMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearnMethod::LevelUp => "LevelUp",
            LearnMethod::Machine => "TM",
            LearnMethod::Egg => "Egg",
            LearnMethod::Tutor => "Tutor",
        }
    }
}

/// Level at which a level-up move is learned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnLevel {
    /// Known from the start ("Start")
    Start,
    Level(u32),
}

impl LearnLevel {
    /// Parse a cache level field. "Start" and anything non-numeric count as level 1.
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<u32>() {
            Ok(n) => LearnLevel::Level(n),
            Err(_) => LearnLevel::Start,
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            LearnLevel::Start => 1,
            LearnLevel::Level(n) => *n,
        }
    }
}

/// One learnset entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedMove {
    pub name: String,
    pub method: LearnMethod,
    /// Only set for level-up moves
    pub level: Option<LearnLevel>,
}

impl LearnedMove {
    pub fn level_up(name: impl Into<String>, level: LearnLevel) -> Self {
        Self {
            name: name.into(),
            method: LearnMethod::LevelUp,
            level: Some(level),
        }
    }

    pub fn other(name: impl Into<String>, method: LearnMethod) -> Self {
        Self {
            name: name.into(),
            method,
            level: None,
        }
    }
}

/// All moves a species can learn, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learnset {
    pub entries: Vec<LearnedMove>,
}

impl Learnset {
    pub fn new(entries: Vec<LearnedMove>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: LearnedMove) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves available at `cap`.
    ///
    /// Level-up moves above the cap are dropped; machine, egg and tutor moves
    /// are always kept. Duplicate names keep their first occurrence.
    pub fn moves_up_to(&self, cap: Option<u32>) -> Vec<&LearnedMove> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|entry| match (cap, entry.method, entry.level) {
                (Some(cap), LearnMethod::LevelUp, Some(level)) => level.value() <= cap,
                _ => true,
            })
            .filter(|entry| seen.insert(entry.name.to_lowercase()))
            .collect()
    }
}

/// Field to group moves by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Type,
    Category,
    Method,
}

const UNKNOWN_GROUP: &str = "Unknown";

fn group_name(key: GroupKey, learned: &LearnedMove, record: &MoveRecord) -> String {
    match key {
        GroupKey::Type => record
            .move_type
            .map_or(UNKNOWN_GROUP, |t| t.as_str())
            .to_string(),
        GroupKey::Category => record
            .category
            .map_or(UNKNOWN_GROUP, |c| c.as_str())
            .to_string(),
        GroupKey::Method => learned.method.as_str().to_string(),
    }
}

/// Group learned moves by `key`, keeping only those `filter` accepts.
///
/// Groups are ordered by name. Within a group, moves with a level come first
/// (ascending), then the rest, each sorted by move name.
pub fn group_moves<'a, F>(
    moves: &'a [(LearnedMove, MoveRecord)],
    key: GroupKey,
    filter: F,
) -> BTreeMap<String, Vec<&'a (LearnedMove, MoveRecord)>>
where
    F: Fn(&LearnedMove, &MoveRecord) -> bool,
{
    let mut groups: BTreeMap<String, Vec<&'a (LearnedMove, MoveRecord)>> = BTreeMap::new();
    for entry in moves {
        let (learned, record) = entry;
        if !filter(learned, record) {
            continue;
        }
        groups
            .entry(group_name(key, learned, record))
            .or_default()
            .push(entry);
    }

    for group in groups.values_mut() {
        group.sort_by(|(a, _), (b, _)| {
            let level_a = a.level.map_or(u32::MAX, |l| l.value());
            let level_b = b.level.map_or(u32::MAX, |l| l.value());
            level_a.cmp(&level_b).then_with(|| a.name.cmp(&b.name))
        });
    }
    groups
}
