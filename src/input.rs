//! Console choices.
//!
//! Reading is separated from rendering: [`read_choice`] pulls lines from any
//! `BufRead` and reports prompts and rejections through an [`EventSink`], so
//! the same loop runs against stdin or a canned script.

use std::io::BufRead;

use combat::{EventSink, GameEvent};
use error::{GameError, GameResult};
use strum::{EnumIter, IntoEnumIterator};

/// A validated answer to a console prompt
pub trait Choice: Sized {
    /// Parse one line, already trimmed
    fn parse(token: &str) -> Option<Self>;

    /// Event shown when a line does not parse
    fn rejection() -> GameEvent;
}

/// Player actions during a battle turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum BattleChoice {
    Attack,
    Heal,
    CallAlly,
}

impl BattleChoice {
    pub fn key(self) -> char {
        match self {
            BattleChoice::Attack => '1',
            BattleChoice::Heal => '2',
            BattleChoice::CallAlly => '3',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BattleChoice::Attack => "Attack",
            BattleChoice::Heal => "Heal (use potion)",
            BattleChoice::CallAlly => "Call Ally",
        }
    }

    /// Menu lines in key order
    pub fn menu() -> impl Iterator<Item = GameEvent> {
        BattleChoice::iter().map(|choice| GameEvent::MenuOption {
            key: choice.key(),
            label: choice.label(),
        })
    }
}

impl Choice for BattleChoice {
    fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => BattleChoice::iter().find(|c| c.key() == key),
            _ => None,
        }
    }

    fn rejection() -> GameEvent {
        GameEvent::InvalidBattleChoice
    }
}

/// Answer to "play again?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    Again,
    Quit,
}

impl Choice for ReplayChoice {
    fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "y" | "yes" => Some(ReplayChoice::Again),
            "n" | "no" => Some(ReplayChoice::Quit),
            _ => None,
        }
    }

    fn rejection() -> GameEvent {
        GameEvent::InvalidReplayChoice
    }
}

/// Prompt until a line parses as `C`.
///
/// Invalid lines emit `C::rejection()` and are retried forever. End of input
/// is reported as [`GameError::InputClosed`].
pub fn read_choice<C: Choice>(
    input: &mut impl BufRead,
    sink: &mut impl EventSink,
) -> GameResult<C> {
    let mut buf = Vec::new();
    loop {
        sink.emit(GameEvent::InputPrompt);
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }

        // undecodable bytes become U+FFFD and fail to parse like any other typo
        let line = String::from_utf8_lossy(&buf);
        let token = line.trim();
        match C::parse(token) {
            Some(choice) => return Ok(choice),
            None => {
                log::debug!("rejected input {:?}", token);
                sink.emit(C::rejection());
            }
        }
    }
}
