// src/combat/src/ally.rs

use crate::Combat;
use crate::combatant::{Combatant, Vitals};
use crate::event::{EventSink, GameEvent};
use crate::rng::Dice;

/// Companion who joins the hero for a whole game.
///
/// The ally is never attacked, so it exposes read accessors only and does
/// not implement `Combatant`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ally {
    vitals: Vitals,
}

impl Ally {
    pub const DEFAULT_NAME: &'static str = "Shivansh";
    pub const DEFAULT_HP: u32 = 50;
    pub const DEFAULT_ATTACK: u32 = 8;

    pub fn new(name: impl Into<String>, hp: u32, attack: u32) -> Self {
        Self {
            vitals: Vitals::new(name, hp, attack),
        }
    }

    pub fn name(&self) -> &str {
        &self.vitals.name
    }

    pub fn hp(&self) -> u32 {
        self.vitals.hp
    }

    pub fn attack(&self) -> u32 {
        self.vitals.attack
    }

    /// Hit `enemy` for a roll in `[3, max(3, attack)]`
    pub fn assist<T: Combatant>(
        &self,
        enemy: &mut T,
        dice: &mut impl Dice,
        sink: &mut impl EventSink,
    ) -> u32 {
        let damage = Combat::roll_damage(dice, Combat::ALLY_MIN_DAMAGE, self.attack());
        sink.emit(GameEvent::AllyAssisted {
            ally: self.name().to_string(),
            enemy: enemy.name().to_string(),
            damage,
        });
        enemy.take_damage(damage, sink);
        damage
    }
}

impl Default for Ally {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME, Self::DEFAULT_HP, Self::DEFAULT_ATTACK)
    }
}
