// src/hero/src/core.rs
use achievements::{Achievement, Achievements};
use combat::{Combatant, EventSink, GameEvent, Vitals};

use crate::bag::{Bag, Item};

/// The player's character for one game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    vitals: Vitals,
    pub bag: Bag,
    pub achievements: Achievements,
}

impl Hero {
    pub const DEFAULT_HP: u32 = 100;
    pub const DEFAULT_ATTACK: u32 = 15;
    pub const STARTING_POTIONS: usize = 3;
    /// Hit points restored by one potion
    pub const POTION_HEAL: u32 = 20;
    /// Max hp gained per level
    pub const HP_PER_LEVEL: u32 = 10;

    /// Hero with the standard 100 hp, 15 attack and three potions
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stats(name, Self::DEFAULT_HP, Self::DEFAULT_ATTACK)
    }

    pub fn with_stats(name: impl Into<String>, hp: u32, attack: u32) -> Self {
        Self {
            vitals: Vitals::new(name, hp, attack),
            bag: Bag::with_items(Item::Potion, Self::STARTING_POTIONS),
            achievements: Achievements::new(),
        }
    }

    pub fn potions(&self) -> usize {
        self.bag.count(Item::Potion)
    }

    /// Drink a potion if one is left.
    ///
    /// Returns whether a potion was consumed. A hero already at full health
    /// still spends the potion.
    pub fn heal(&mut self, sink: &mut impl EventSink) -> bool {
        if let Err(err) = self.bag.take(Item::Potion) {
            log::debug!("{} cannot heal: {}", self.name(), err);
            sink.emit(GameEvent::NoPotions);
            return false;
        }

        self.vitals.restore(Self::POTION_HEAL);
        sink.emit(GameEvent::Healed {
            hero: self.name().to_string(),
            amount: Self::POTION_HEAL,
            hp: self.hp(),
        });
        sink.emit(GameEvent::PotionsRemaining {
            count: self.potions(),
        });
        true
    }

    /// Returns `false` if the achievement was already earned
    pub fn add_achievement(&mut self, achievement: impl Into<Achievement>) -> bool {
        self.achievements.add(achievement)
    }

    /// Raise max hp and restore to full
    pub fn level_up(&mut self, sink: &mut impl EventSink) {
        self.vitals.max_hp += Self::HP_PER_LEVEL;
        self.vitals.hp = self.vitals.max_hp;
        sink.emit(GameEvent::LeveledUp {
            hero: self.name().to_string(),
            max_hp: self.vitals.max_hp,
        });
    }

    /// Put a looted potion in the bag and announce it
    pub fn loot_potion(&mut self, from: &str, sink: &mut impl EventSink) {
        self.bag.add(Item::Potion);
        sink.emit(GameEvent::PotionDropped {
            enemy: from.to_string(),
        });
        sink.emit(GameEvent::PotionsNow {
            count: self.potions(),
        });
    }
}

impl Combatant for Hero {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
