// src/combat/src/lib.rs
//! Combatants and the dice rules that decide every exchange of blows.

pub mod ally;
pub mod combatant;
pub mod enemy;
pub mod event;
pub mod rng;

pub use crate::ally::Ally;
pub use crate::combatant::{Combatant, Vitals};
pub use crate::enemy::{Enemy, EnemyKind, EnemyStats, RosterEntry, roster};
pub use crate::event::{Delivery, EventSink, GameEvent, Tone};
pub use crate::rng::{CombatRng, Dice};

/// Damage rules for the three kinds of blow
pub struct Combat;

impl Combat {
    /// Lowest roll of a hero attack
    pub const HERO_MIN_DAMAGE: u32 = 5;
    /// Lowest roll of an ally assist
    pub const ALLY_MIN_DAMAGE: u32 = 3;
    /// Lowest roll of an enemy counter
    pub const ENEMY_MIN_DAMAGE: u32 = 3;
    /// Lowest roll of an enemy counter when its attack is below the threshold
    pub const WEAK_ENEMY_MIN_DAMAGE: u32 = 1;
    pub const WEAK_ENEMY_THRESHOLD: u32 = 3;
    /// Chance a beaten enemy leaves a potion behind
    pub const POTION_DROP_CHANCE: f64 = 0.3;

    /// Roll in `[low, max(low, attack)]`
    pub fn roll_damage(dice: &mut impl Dice, low: u32, attack: u32) -> u32 {
        dice.roll(low, attack.max(low))
    }

    /// Lower bound of an enemy's counter roll
    pub fn enemy_floor(attack: u32) -> u32 {
        if attack < Self::WEAK_ENEMY_THRESHOLD {
            Self::WEAK_ENEMY_MIN_DAMAGE
        } else {
            Self::ENEMY_MIN_DAMAGE
        }
    }

    /// The hero's basic attack
    pub fn hero_attack<A: Combatant, D: Combatant>(
        hero: &A,
        enemy: &mut D,
        dice: &mut impl Dice,
        sink: &mut impl EventSink,
    ) -> u32 {
        let damage = Self::roll_damage(dice, Self::HERO_MIN_DAMAGE, hero.attack());
        log::debug!("{} rolls {} against {}", hero.name(), damage, enemy.name());
        sink.emit(GameEvent::HeroAttacked {
            hero: hero.name().to_string(),
            enemy: enemy.name().to_string(),
            damage,
        });
        enemy.take_damage(damage, sink);
        damage
    }

    /// The enemy's reply after the hero's turn
    pub fn counter_attack<A: Combatant, D: Combatant>(
        enemy: &A,
        hero: &mut D,
        dice: &mut impl Dice,
        sink: &mut impl EventSink,
    ) -> u32 {
        let damage = Self::roll_damage(dice, Self::enemy_floor(enemy.attack()), enemy.attack());
        log::debug!("{} rolls {} against {}", enemy.name(), damage, hero.name());
        sink.emit(GameEvent::EnemyStruck {
            enemy: enemy.name().to_string(),
            damage,
        });
        hero.take_damage(damage, sink);
        damage
    }

    /// Whether a beaten enemy drops a potion
    pub fn potion_drops(dice: &mut impl Dice) -> bool {
        dice.chance(Self::POTION_DROP_CHANCE)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::rng::Dice;

    /// Dice that always land on one end of the range
    pub struct LoadedDice {
        high: bool,
        lucky: bool,
    }

    impl LoadedDice {
        pub fn max() -> Self {
            Self {
                high: true,
                lucky: true,
            }
        }

        pub fn min() -> Self {
            Self {
                high: false,
                lucky: false,
            }
        }
    }

    impl Dice for LoadedDice {
        fn roll(&mut self, low: u32, high: u32) -> u32 {
            if self.high { high.max(low) } else { low }
        }

        fn chance(&mut self, _probability: f64) -> bool {
            self.lucky
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::LoadedDice;

    #[test]
    fn test_hero_attack_range() {
        let hero = Enemy::new("Hero", EnemyStats { hp: 100, attack: 15 });
        let mut enemy = Enemy::from_kind(EnemyKind::Goblin);
        let mut sink = Vec::new();

        assert_eq!(
            Combat::hero_attack(&hero, &mut enemy, &mut LoadedDice::max(), &mut sink),
            15
        );
        assert_eq!(
            Combat::hero_attack(&hero, &mut enemy, &mut LoadedDice::min(), &mut sink),
            5
        );
        assert_eq!(enemy.hp(), 10);
        assert_eq!(
            sink[0],
            GameEvent::HeroAttacked {
                hero: "Hero".to_string(),
                enemy: "Goblin".to_string(),
                damage: 15,
            }
        );
    }

    #[test]
    fn test_enemy_floor() {
        assert_eq!(Combat::enemy_floor(0), 1);
        assert_eq!(Combat::enemy_floor(2), 1);
        assert_eq!(Combat::enemy_floor(3), 3);
        assert_eq!(Combat::enemy_floor(20), 3);
    }

    #[test]
    fn test_weak_enemy_counter() {
        let rat = Enemy::new("Rat", EnemyStats { hp: 5, attack: 2 });
        let mut target = Enemy::new("Hero", EnemyStats { hp: 100, attack: 15 });
        assert_eq!(
            Combat::counter_attack(&rat, &mut target, &mut LoadedDice::min(), &mut Vec::new()),
            1
        );
        assert_eq!(
            Combat::counter_attack(&rat, &mut target, &mut LoadedDice::max(), &mut Vec::new()),
            2
        );
        assert_eq!(target.hp(), 97);
    }

    #[test]
    fn test_zero_attack_enemy_still_hits() {
        let husk = Enemy::new("Husk", EnemyStats { hp: 5, attack: 0 });
        let mut target = Enemy::new("Hero", EnemyStats { hp: 10, attack: 15 });
        assert_eq!(
            Combat::counter_attack(&husk, &mut target, &mut LoadedDice::max(), &mut Vec::new()),
            1
        );
    }

    #[test]
    fn test_potion_drop_rate() {
        let mut rng = CombatRng::new(2024);
        let trials = 10_000;
        let drops = (0..trials).filter(|_| Combat::potion_drops(&mut rng)).count();
        let rate = drops as f64 / trials as f64;
        // three standard deviations of a 30% binomial over 10k trials is ~0.014
        assert!((rate - 0.3).abs() < 0.02, "drop rate {rate}");
    }
}
