//! Completed/unlocked level tracking
//!
//! Stored as `{"completed": [..], "unlocked": n}`. `unlocked` is the highest
//! 1-based level number the player may open, so a fresh save has level 1
//! available and nothing completed.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Persisted player progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Indices (0-based) of levels the player has solved
    #[serde(default)]
    completed: BTreeSet<usize>,
    /// Highest level number (1-based) that can be played
    #[serde(default = "first_level", deserialize_with = "at_least_one")]
    unlocked: usize,
}

fn first_level() -> usize {
    1
}

fn at_least_one<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    Ok(usize::deserialize(d)?.max(1))
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            completed: BTreeSet::new(),
            unlocked: first_level(),
        }
    }
}

/// How a level is shown in the level-select grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Completed,
    Available,
    Locked,
}

impl CardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CardStatus::Completed => "Completed!",
            CardStatus::Available => "Available",
            CardStatus::Locked => "Locked",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CardStatus::Completed => "level-card completed",
            CardStatus::Available => "level-card",
            CardStatus::Locked => "level-card locked",
        }
    }
}

/// One entry of the level-select grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCard {
    pub index: usize,
    /// 1-based number shown to the player
    pub number: usize,
    pub status: CardStatus,
    /// Whether clicking the card opens the level
    pub playable: bool,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlocked(&self) -> usize {
        self.unlocked
    }

    pub fn completed(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Level `index` (0-based) may be opened
    pub fn is_unlocked(&self, index: usize) -> bool {
        index < self.unlocked
    }

    /// Record a solved level and unlock its successor.
    ///
    /// Returns true if anything changed. Repeating a completion is a no-op and
    /// `unlocked` never moves backwards.
    pub fn complete(&mut self, index: usize, level_count: usize) -> bool {
        if index >= level_count {
            log::warn!("Ignoring completion of level {} (only {} levels)", index, level_count);
            return false;
        }
        let mut changed = self.completed.insert(index);
        if index + 1 < level_count && self.unlocked <= index + 1 {
            self.unlocked = index + 2;
            changed = true;
        }
        changed
    }

    /// Completed levels that exist in a list of `level_count` levels.
    ///
    /// A save can outlive a shorter (or fallback) level list. Out-of-range
    /// indices stay in the save and only drop out of what is shown.
    pub fn completed_within(&self, level_count: usize) -> usize {
        self.completed.range(..level_count).count()
    }

    /// Completed share in [0, 1]; zero when there are no levels
    pub fn fraction(&self, level_count: usize) -> f32 {
        if level_count == 0 {
            return 0.0;
        }
        self.completed_within(level_count) as f32 / level_count as f32
    }

    /// Build the level-select grid
    pub fn level_cards(&self, level_count: usize) -> Vec<LevelCard> {
        (0..level_count)
            .map(|index| {
                let playable = self.is_unlocked(index);
                let status = if self.is_completed(index) {
                    CardStatus::Completed
                } else if playable {
                    CardStatus::Available
                } else {
                    CardStatus::Locked
                };
                LevelCard {
                    index,
                    number: index + 1,
                    status,
                    playable,
                }
            })
            .collect()
    }
}
