//! A single battle between the hero (with an optional ally) and one enemy.

use achievements::Achievement;
use combat::{Ally, Combat, Combatant, Dice, Enemy, EventSink, GameEvent};
use error::GameResult;
use hero::Hero;
use std::io::BufRead;

use crate::game_loop::GameContext;
use crate::input::{BattleChoice, read_choice};

/// Where a battle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    InProgress,
    PlayerWon,
    PlayerLost,
}

impl BattleState {
    pub fn is_over(self) -> bool {
        self != BattleState::InProgress
    }
}

pub struct Battle<'a> {
    hero: &'a mut Hero,
    enemy: Enemy,
    ally: Option<&'a Ally>,
    /// Winning the final battle grants no level-up
    is_final: bool,
    state: BattleState,
    rounds: u32,
}

impl<'a> Battle<'a> {
    pub fn new(hero: &'a mut Hero, enemy: Enemy, ally: Option<&'a Ally>, is_final: bool) -> Self {
        Self {
            hero,
            enemy,
            ally,
            is_final,
            state: BattleState::InProgress,
            rounds: 0,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn hero(&self) -> &Hero {
        &*self.hero
    }

    /// Fight to the end, reading each turn's action from the console
    pub fn run<D: Dice, R: BufRead, S: EventSink>(
        &mut self,
        ctx: &mut GameContext<D, R, S>,
    ) -> GameResult<BattleState> {
        log::debug!(
            "battle start: {} ({} hp) vs {} ({} hp)",
            self.hero.name(),
            self.hero.hp(),
            self.enemy.name(),
            self.enemy.hp()
        );
        ctx.sink.emit(GameEvent::BattleStarted {
            hero: self.hero.name().to_string(),
            enemy: self.enemy.name().to_string(),
        });

        while !self.state.is_over() {
            if !self.both_standing() {
                self.conclude(&mut ctx.dice, &mut ctx.sink);
                break;
            }
            ctx.sink.emit(GameEvent::ChooseAction);
            for option in BattleChoice::menu() {
                ctx.sink.emit(option);
            }
            let choice = read_choice(&mut ctx.input, &mut ctx.sink)?;
            self.play_round(choice, &mut ctx.dice, &mut ctx.sink);
        }

        log::debug!(
            "battle end: {:?} after {} rounds against {}",
            self.state,
            self.rounds,
            self.enemy.name()
        );
        Ok(self.state)
    }

    /// Resolve one round: the hero's action, then the enemy's reply if it
    /// still stands. Settles the battle once either side falls.
    pub fn play_round(
        &mut self,
        choice: BattleChoice,
        dice: &mut impl Dice,
        sink: &mut impl EventSink,
    ) -> BattleState {
        if self.state.is_over() {
            return self.state;
        }
        self.rounds += 1;

        self.player_turn(choice, dice, sink);
        if self.enemy.is_alive() {
            Combat::counter_attack(&self.enemy, &mut *self.hero, dice, sink);
        }

        if !self.both_standing() {
            self.conclude(dice, sink);
        }
        self.state
    }

    fn player_turn(&mut self, choice: BattleChoice, dice: &mut impl Dice, sink: &mut impl EventSink) {
        match choice {
            BattleChoice::Attack => {
                Combat::hero_attack(&*self.hero, &mut self.enemy, dice, sink);
            }
            BattleChoice::Heal => {
                self.hero.heal(sink);
            }
            BattleChoice::CallAlly => match self.ally {
                Some(ally) => {
                    ally.assist(&mut self.enemy, dice, sink);
                }
                None => log::debug!("{} calls for an ally but none answers", self.hero.name()),
            },
        }
    }

    fn both_standing(&self) -> bool {
        self.hero.is_alive() && self.enemy.is_alive()
    }

    fn conclude(&mut self, dice: &mut impl Dice, sink: &mut impl EventSink) {
        let hero = self.hero.name().to_string();
        let enemy = self.enemy.name().to_string();

        if !self.hero.is_alive() {
            sink.emit(GameEvent::Defeat { hero, enemy });
            self.state = BattleState::PlayerLost;
            return;
        }

        sink.emit(GameEvent::Victory {
            hero,
            enemy: enemy.clone(),
        });
        self.hero.add_achievement(Achievement::defeated(&enemy));

        if Combat::potion_drops(dice) {
            self.hero.loot_potion(&enemy, sink);
        }
        if !self.is_final {
            self.hero.level_up(sink);
        }
        self.state = BattleState::PlayerWon;
    }
}
