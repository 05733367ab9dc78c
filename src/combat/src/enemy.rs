// src/combat/src/enemy.rs

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::combatant::{Combatant, Vitals};

/// Stat pair an enemy is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyStats {
    pub hp: u32,
    pub attack: u32,
}

/// The foes of the adventure, in the order they are met
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Dragon,
}

impl EnemyKind {
    pub fn stats(self) -> EnemyStats {
        let (hp, attack) = match self {
            EnemyKind::Goblin => (30, 10),
            EnemyKind::Orc => (50, 12),
            EnemyKind::Dragon => (80, 20),
        };
        EnemyStats { hp, attack }
    }
}

/// One stop on the roster
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub kind: EnemyKind,
    /// Last fight of the game; winning it grants no level-up
    pub is_final: bool,
}

impl RosterEntry {
    pub fn spawn(&self) -> Enemy {
        Enemy::from_kind(self.kind)
    }
}

/// The fixed roster, final enemy last
pub fn roster() -> impl Iterator<Item = RosterEntry> {
    EnemyKind::iter().enumerate().map(|(i, kind)| RosterEntry {
        kind,
        is_final: i + 1 == EnemyKind::COUNT,
    })
}

/// A single opponent, alive for one battle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    vitals: Vitals,
}

impl Enemy {
    pub fn new(name: impl Into<String>, stats: EnemyStats) -> Self {
        Self {
            vitals: Vitals::new(name, stats.hp, stats.attack),
        }
    }

    pub fn from_kind(kind: EnemyKind) -> Self {
        Self::new(kind.to_string(), kind.stats())
    }
}

impl Combatant for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_creation() {
        let goblin = Enemy::from_kind(EnemyKind::Goblin);
        assert_eq!(goblin.name(), "Goblin");
        assert_eq!(goblin.hp(), 30);
        assert_eq!(goblin.max_hp(), 30);
        assert_eq!(goblin.attack(), 10);

        let dragon = Enemy::new("Dragon", EnemyStats { hp: 80, attack: 20 });
        assert_eq!(dragon, Enemy::from_kind(EnemyKind::Dragon));
    }

    #[test]
    fn test_roster_order_and_final_flag() {
        let entries: Vec<RosterEntry> = roster().collect();
        let kinds: Vec<EnemyKind> = entries.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EnemyKind::Goblin, EnemyKind::Orc, EnemyKind::Dragon]);

        let finals: Vec<bool> = entries.iter().map(|e| e.is_final).collect();
        assert_eq!(finals, vec![false, false, true]);
    }

    #[test]
    fn test_spawn_is_fresh() {
        let entry = roster().next().unwrap();
        let mut first = entry.spawn();
        first.take_damage(10, &mut Vec::new());
        assert_eq!(entry.spawn().hp(), 30);
    }
}
