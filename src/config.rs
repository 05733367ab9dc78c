//! Runtime settings.
//!
//! Everything has a default; the environment can override pacing and the
//! random seed. Unparsable values are reported and ignored.

use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const TYPING_MS_VAR: &str = "QUEST_TYPING_MS";
pub const PAUSE_SCALE_VAR: &str = "QUEST_PAUSE_SCALE";
pub const FAST_VAR: &str = "QUEST_FAST";
pub const SEED_VAR: &str = "QUEST_SEED";

/// Presentation timing for narration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    /// Delay after each typed character
    pub typing: Duration,
    /// Multiplier on each message's own pause
    pub pause_scale: f32,
}

impl Pacing {
    pub const DEFAULT_TYPING_MS: u64 = 30;
    /// Largest accepted pause multiplier
    pub const MAX_PAUSE_SCALE: f32 = 100.0;

    /// No delays at all
    pub fn instant() -> Self {
        Self {
            typing: Duration::ZERO,
            pause_scale: 0.0,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.typing.is_zero() && self.pause_scale == 0.0
    }

    /// Scaled pause for a message, saturating at `Duration::MAX`
    pub fn pause(&self, base: Duration) -> Duration {
        Duration::try_from_secs_f32(base.as_secs_f32() * self.pause_scale)
            .unwrap_or(Duration::MAX)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(Self::DEFAULT_TYPING_MS),
            pause_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub pacing: Pacing,
    /// Fixed RNG seed, if any
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(ms) = parse_var::<u64>(&lookup, TYPING_MS_VAR) {
            settings.pacing.typing = Duration::from_millis(ms);
        }
        if let Some(scale) = parse_var::<f32>(&lookup, PAUSE_SCALE_VAR) {
            if (0.0..=Pacing::MAX_PAUSE_SCALE).contains(&scale) {
                settings.pacing.pause_scale = scale;
            } else {
                log::warn!(
                    "{} must be between 0 and {}, got {}",
                    PAUSE_SCALE_VAR,
                    Pacing::MAX_PAUSE_SCALE,
                    scale
                );
            }
        }
        if lookup(FAST_VAR).is_some_and(|v| is_truthy(&v)) {
            settings.pacing = Pacing::instant();
        }
        settings.seed = parse_var::<u64>(&lookup, SEED_VAR);

        settings
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]);
        assert_eq!(settings.pacing.typing, Duration::from_millis(30));
        assert_eq!(settings.pacing.pause_scale, 1.0);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            (TYPING_MS_VAR, "5"),
            (PAUSE_SCALE_VAR, "0.5"),
            (SEED_VAR, "42"),
        ]);
        assert_eq!(settings.pacing.typing, Duration::from_millis(5));
        assert_eq!(settings.pacing.pause(Duration::from_millis(1000)), Duration::from_millis(500));
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_fast_wins_over_pacing() {
        let settings = settings_from(&[(TYPING_MS_VAR, "80"), (FAST_VAR, "Yes")]);
        assert!(settings.pacing.is_instant());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let settings = settings_from(&[
            (TYPING_MS_VAR, "fast"),
            (PAUSE_SCALE_VAR, "-2"),
            (SEED_VAR, "abc"),
            (FAST_VAR, "0"),
        ]);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_huge_pause_scale_is_rejected() {
        for raw in ["1e30", "inf", "NaN", "100.5"] {
            let settings = settings_from(&[(PAUSE_SCALE_VAR, raw)]);
            assert_eq!(settings.pacing.pause_scale, 1.0, "{}", raw);
        }
        let settings = settings_from(&[(PAUSE_SCALE_VAR, "100")]);
        assert_eq!(settings.pacing.pause_scale, Pacing::MAX_PAUSE_SCALE);
    }

    #[test]
    fn test_pause_saturates() {
        let pacing = Pacing {
            typing: Duration::ZERO,
            pause_scale: 1e30,
        };
        assert_eq!(pacing.pause(Duration::from_secs(2)), Duration::MAX);
        assert_eq!(Pacing::instant().pause(Duration::from_secs(2)), Duration::ZERO);
    }
}
