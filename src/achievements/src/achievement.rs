//! Achievement definitions

use std::fmt;

/// A single earned title, compared by its text
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Achievement(String);

impl Achievement {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Earned by winning a battle against `enemy`
    pub fn defeated(enemy: &str) -> Self {
        Self(format!("Defeated {}", enemy))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Achievement {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Achievement {
    fn from(text: String) -> Self {
        Self(text)
    }
}
