//! Shared fixtures for the integration tests: scripted dice and canned input.
#![allow(dead_code)]

use std::io::Cursor;

use combat::{Dice, GameEvent};
use potion_quest::game_loop::GameContext;

/// Dice that always roll the same number, clamped into the requested range
#[derive(Debug, Clone)]
pub struct FixedDice {
    /// `None` rolls the top of every range
    value: Option<u32>,
    drops: bool,
    pub rolls: Vec<(u32, u32)>,
}

impl FixedDice {
    pub fn new(value: u32) -> Self {
        Self {
            value: Some(value),
            drops: false,
            rolls: Vec::new(),
        }
    }

    pub fn max() -> Self {
        Self {
            value: None,
            drops: false,
            rolls: Vec::new(),
        }
    }

    /// Every chance check succeeds (or fails)
    pub fn with_drops(mut self, drops: bool) -> Self {
        self.drops = drops;
        self
    }
}

impl Dice for FixedDice {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        self.rolls.push((low, high));
        let high = high.max(low);
        match self.value {
            Some(value) => value.clamp(low, high),
            None => high,
        }
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.drops
    }
}

pub type TestContext<D> = GameContext<D, Cursor<String>, Vec<GameEvent>>;

/// Context reading `script` as console input and collecting events
pub fn context<D: Dice>(dice: D, script: &str) -> TestContext<D> {
    GameContext::new(dice, Cursor::new(script.to_string()), Vec::new())
}

/// `token` followed by a newline, `times` times
pub fn repeat(token: &str, times: usize) -> String {
    format!("{}\n", token).repeat(times)
}

pub fn count(events: &[GameEvent], wanted: &GameEvent) -> usize {
    events.iter().filter(|e| *e == wanted).count()
}

pub fn count_matching(events: &[GameEvent], pred: impl Fn(&GameEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}
