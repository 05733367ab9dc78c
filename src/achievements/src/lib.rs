//! Achievements tracking
//!
//! A hero collects achievements during one game. The collection is a set:
//! earning the same title twice changes nothing.

pub mod achievement;

#[cfg(test)]
mod tests;

pub use achievement::Achievement;

use std::collections::BTreeSet;

/// Set of achievements earned in the current game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Achievements {
    earned: BTreeSet<Achievement>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an achievement. Returns `false` if it was already earned.
    pub fn add(&mut self, achievement: impl Into<Achievement>) -> bool {
        self.earned.insert(achievement.into())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.earned.iter().any(|a| a.as_str() == text)
    }

    pub fn len(&self) -> usize {
        self.earned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earned.is_empty()
    }

    /// Earned achievements in a stable order
    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.earned.iter()
    }

    /// Titles as plain strings, for summaries
    pub fn titles(&self) -> Vec<String> {
        self.earned.iter().map(|a| a.to_string()).collect()
    }
}
