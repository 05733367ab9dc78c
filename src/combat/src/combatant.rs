// src/combat/src/combatant.rs

use crate::event::{EventSink, GameEvent};

/// Hit points and attack shared by everyone who fights
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vitals {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    /// Upper bound of damage rolls
    pub attack: u32,
}

impl Vitals {
    /// Start at full health; `max_hp` is the starting hp
    pub fn new(name: impl Into<String>, hp: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            max_hp: hp,
            attack,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtract `amount`, stopping at zero, and report the result
    pub fn take_damage(&mut self, amount: u32, sink: &mut impl EventSink) {
        self.hp = self.hp.saturating_sub(amount);
        sink.emit(GameEvent::DamageTaken {
            target: self.name.clone(),
            amount,
            hp: self.hp,
        });
    }

    /// Add `amount`, never past `max_hp`. Returns the hp actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }
}

/// Anything that can stand in a battle
pub trait Combatant {
    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    fn name(&self) -> &str {
        &self.vitals().name
    }

    fn hp(&self) -> u32 {
        self.vitals().hp
    }

    fn max_hp(&self) -> u32 {
        self.vitals().max_hp
    }

    fn attack(&self) -> u32 {
        self.vitals().attack
    }

    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }

    fn take_damage(&mut self, amount: u32, sink: &mut impl EventSink)
    where
        Self: Sized,
    {
        self.vitals_mut().take_damage(amount, sink);
    }
}
