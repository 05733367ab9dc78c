//! Game and session drivers.
//!
//! A game walks the hero through the roster until the final enemy falls or
//! the hero does. A session repeats games until the player declines a replay.

use std::ffi::OsString;
use std::io::BufRead;

use combat::{Ally, Combatant, Dice, EventSink, GameEvent, roster};
use error::GameResult;
use hero::Hero;

use crate::battle::{Battle, BattleState};
use crate::input::{ReplayChoice, read_choice};

/// Name used when none is given on the command line
pub const DEFAULT_HERO_NAME: &str = "Hero";

/// Everything a game needs from the outside world
pub struct GameContext<D, R, S> {
    pub dice: D,
    pub input: R,
    pub sink: S,
}

impl<D: Dice, R: BufRead, S: EventSink> GameContext<D, R, S> {
    pub fn new(dice: D, input: R, sink: S) -> Self {
        Self { dice, input, sink }
    }
}

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every enemy on the roster was beaten
    Cleared,
    /// The hero fell to this enemy
    Fallen { enemy: String },
}

#[derive(Debug, Clone)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub hero: Hero,
    pub battles_won: usize,
}

/// Play one full game for a hero called `name`
pub fn play_game<D: Dice, R: BufRead, S: EventSink>(
    ctx: &mut GameContext<D, R, S>,
    name: &str,
) -> GameResult<GameReport> {
    let mut hero = Hero::new(name);
    let ally = Ally::default();
    let mut outcome = GameOutcome::Cleared;
    let mut battles_won = 0;

    for entry in roster() {
        let mut battle = Battle::new(&mut hero, entry.spawn(), Some(&ally), entry.is_final);
        match battle.run(ctx)? {
            BattleState::PlayerWon => battles_won += 1,
            _ => {
                outcome = GameOutcome::Fallen {
                    enemy: battle.enemy().name().to_string(),
                };
                break;
            }
        }
    }

    log::info!(
        "game over for {}: {:?} ({} battles won, {} potions left)",
        hero.name(),
        outcome,
        battles_won,
        hero.potions()
    );
    emit_summary(&hero, &mut ctx.sink);

    Ok(GameReport {
        outcome,
        hero,
        battles_won,
    })
}

fn emit_summary(hero: &Hero, sink: &mut impl EventSink) {
    sink.emit(GameEvent::GameOver {
        hero: hero.name().to_string(),
    });
    sink.emit(GameEvent::InventorySummary {
        items: hero.bag.names(),
    });
    sink.emit(GameEvent::AchievementSummary {
        achievements: hero.achievements.titles(),
    });
}

/// Pick the hero's name from the first program argument.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn resolve_name(arg: Option<OsString>, sink: &mut impl EventSink) -> String {
    match arg {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            sink.emit(GameEvent::DefaultName {
                name: DEFAULT_HERO_NAME.to_string(),
            });
            DEFAULT_HERO_NAME.to_string()
        }
    }
}

/// Play games until the player declines another. Returns how many were played.
pub fn run_session<D: Dice, R: BufRead, S: EventSink>(
    ctx: &mut GameContext<D, R, S>,
    name: &str,
) -> GameResult<u32> {
    let mut games = 0;
    loop {
        play_game(ctx, name)?;
        games += 1;

        ctx.sink.emit(GameEvent::PlayAgain);
        match read_choice(&mut ctx.input, &mut ctx.sink)? {
            ReplayChoice::Again => log::debug!("starting game {}", games + 1),
            ReplayChoice::Quit => {
                ctx.sink.emit(GameEvent::Farewell);
                return Ok(games);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name_given() {
        let mut sink = Vec::new();
        assert_eq!(resolve_name(Some("Mira".into()), &mut sink), "Mira");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_resolve_name_default() {
        let mut sink = Vec::new();
        assert_eq!(resolve_name(None, &mut sink), "Hero");
        assert_eq!(
            sink,
            vec![GameEvent::DefaultName {
                name: "Hero".to_string()
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_name_non_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let mut sink = Vec::new();
        let arg = OsString::from_vec(b"Mi\xffra".to_vec());
        assert_eq!(resolve_name(Some(arg), &mut sink), "Mi\u{FFFD}ra");
        assert!(sink.is_empty());
    }
}
