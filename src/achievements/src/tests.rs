//! Tests for the achievements set

use crate::*;
use pretty_assertions::assert_eq;

#[test]
fn test_defeated_title() {
    assert_eq!(Achievement::defeated("Goblin").as_str(), "Defeated Goblin");
    assert_eq!(Achievement::defeated("Orc").to_string(), "Defeated Orc");
}

#[test]
fn test_duplicates_are_ignored() {
    let mut achievements = Achievements::new();
    assert!(achievements.add(Achievement::defeated("Goblin")));
    assert!(!achievements.add("Defeated Goblin"));
    assert!(!achievements.add(String::from("Defeated Goblin")));

    assert_eq!(achievements.len(), 1);
    assert!(achievements.contains("Defeated Goblin"));
}

#[test]
fn test_titles_are_stable() {
    let mut achievements = Achievements::new();
    achievements.add(Achievement::defeated("Orc"));
    achievements.add(Achievement::defeated("Dragon"));
    achievements.add(Achievement::defeated("Goblin"));

    assert_eq!(
        achievements.titles(),
        vec![
            "Defeated Dragon".to_string(),
            "Defeated Goblin".to_string(),
            "Defeated Orc".to_string(),
        ]
    );
}
