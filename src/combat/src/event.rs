//! Narration events.
//!
//! Every line the player sees is a [`GameEvent`]. Game logic pushes events
//! into an [`EventSink`]; the terminal narrator renders them with pacing while
//! tests collect them into a `Vec`.

use std::fmt;
use std::time::Duration;

/// How an event is delivered to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Typed out character by character, then a pause
    Typed(Duration),
    /// Printed at once on its own line
    Plain,
    /// Printed at once without a trailing newline (input prompts)
    Inline,
}

/// Colour hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Good,
    Bad,
    Reward,
    Warning,
}

/// Everything that can be narrated during a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    // ===== Session =====
    /// No name argument was passed
    DefaultName { name: String },
    /// Replay question after a game
    PlayAgain,
    /// Replay answer was not one of y/n/yes/no
    InvalidReplayChoice,
    /// Player chose to stop
    Farewell,
    /// Input marker printed before each read
    InputPrompt,

    // ===== Battle flow =====
    BattleStarted { hero: String, enemy: String },
    ChooseAction,
    /// One line of the action menu
    MenuOption { key: char, label: &'static str },
    InvalidBattleChoice,
    Victory { hero: String, enemy: String },
    Defeat { hero: String, enemy: String },

    // ===== Combat =====
    DamageTaken { target: String, amount: u32, hp: u32 },
    HeroAttacked { hero: String, enemy: String, damage: u32 },
    AllyAssisted { ally: String, enemy: String, damage: u32 },
    EnemyStruck { enemy: String, damage: u32 },

    // ===== Hero =====
    Healed { hero: String, amount: u32, hp: u32 },
    PotionsRemaining { count: usize },
    NoPotions,
    LeveledUp { hero: String, max_hp: u32 },
    PotionDropped { enemy: String },
    PotionsNow { count: usize },

    // ===== Summary =====
    GameOver { hero: String },
    InventorySummary { items: Vec<String> },
    AchievementSummary { achievements: Vec<String> },
}

impl GameEvent {
    /// Presentation delivery for this event
    pub fn delivery(&self) -> Delivery {
        let millis = match self {
            GameEvent::MenuOption { .. } => return Delivery::Plain,
            GameEvent::InputPrompt => return Delivery::Inline,
            GameEvent::BattleStarted { .. }
            | GameEvent::Victory { .. }
            | GameEvent::Defeat { .. }
            | GameEvent::LeveledUp { .. }
            | GameEvent::GameOver { .. } => 1500,
            GameEvent::HeroAttacked { .. }
            | GameEvent::AllyAssisted { .. }
            | GameEvent::EnemyStruck { .. }
            | GameEvent::Healed { .. }
            | GameEvent::PotionDropped { .. }
            | GameEvent::InventorySummary { .. }
            | GameEvent::AchievementSummary { .. }
            | GameEvent::Farewell => 1000,
            _ => 500,
        };
        Delivery::Typed(Duration::from_millis(millis))
    }

    /// Colour hint for this event
    pub fn tone(&self) -> Tone {
        match self {
            GameEvent::Victory { .. } | GameEvent::Healed { .. } => Tone::Good,
            GameEvent::Defeat { .. } | GameEvent::EnemyStruck { .. } => Tone::Bad,
            GameEvent::LeveledUp { .. }
            | GameEvent::PotionDropped { .. }
            | GameEvent::PotionsNow { .. } => Tone::Reward,
            GameEvent::InvalidBattleChoice
            | GameEvent::InvalidReplayChoice
            | GameEvent::NoPotions
            | GameEvent::DefaultName { .. } => Tone::Warning,
            _ => Tone::Normal,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::DefaultName { name } => {
                write!(f, "No name given, using default: {}", name)
            }
            GameEvent::PlayAgain => write!(f, "\nDo you want to play again? (y/n): "),
            GameEvent::InvalidReplayChoice => {
                write!(f, "Invalid choice! Please enter 'y' or 'n'.")
            }
            GameEvent::Farewell => write!(f, "\n👋 Thanks for playing! Goodbye!"),
            GameEvent::InputPrompt => write!(f, "> "),
            GameEvent::BattleStarted { hero, enemy } => {
                write!(f, "\n⚔️ Battle starts: {} vs {}!\n", hero, enemy)
            }
            GameEvent::ChooseAction => write!(f, "\nChoose action:"),
            GameEvent::MenuOption { key, label } => write!(f, "{}. {}", key, label),
            GameEvent::InvalidBattleChoice => {
                write!(f, "Invalid choice! Please enter 1, 2, or 3.")
            }
            GameEvent::Victory { hero, enemy } => write!(f, "\n✅ {} defeated {}!\n", hero, enemy),
            GameEvent::Defeat { hero, enemy } => {
                write!(f, "\n💀 {} was defeated by {}...\n", hero, enemy)
            }
            GameEvent::DamageTaken { target, amount, hp } => {
                write!(f, "{} takes {} damage! (HP: {})", target, amount, hp)
            }
            GameEvent::HeroAttacked { hero, enemy, damage } => {
                write!(f, "{} attacks {} for {}!", hero, enemy, damage)
            }
            GameEvent::AllyAssisted { ally, enemy, damage } => {
                write!(f, "{} assists and hits {} for {}!", ally, enemy, damage)
            }
            GameEvent::EnemyStruck { enemy, damage } => {
                write!(f, "{} strikes back for {}!", enemy, damage)
            }
            GameEvent::Healed { hero, amount, hp } => write!(
                f,
                "{} drinks a potion and heals {} HP! (HP: {})",
                hero, amount, hp
            ),
            GameEvent::PotionsRemaining { count } => write!(f, "Remaining Potions: {}", count),
            GameEvent::NoPotions => write!(f, "No potions left!"),
            GameEvent::LeveledUp { hero, max_hp } => write!(
                f,
                "✨ {} leveled up! Max HP increased to {}. HP fully restored!",
                hero, max_hp
            ),
            GameEvent::PotionDropped { enemy } => {
                write!(f, "🍷 {} dropped a Potion! Added to inventory.", enemy)
            }
            GameEvent::PotionsNow { count } => write!(f, "Potions now: {}", count),
            GameEvent::GameOver { hero } => write!(f, "\n🎉 Game Over! {}'s Summary:", hero),
            GameEvent::InventorySummary { items } => {
                write!(f, "Inventory: [{}]", items.join(", "))
            }
            GameEvent::AchievementSummary { achievements } => {
                write!(f, "Achievements: {{{}}}", achievements.join(", "))
            }
        }
    }
}

/// Receiver of narration events
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
