//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON file. `Default`
//! mirrors [`crate::consts`], and files may override any subset of fields.

use core::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants, overridable per game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Rounds per game
    pub rounds: u32,
    /// Clickable radius of a bubble
    pub bubble_radius: f32,
    /// Influence zone side length in round 1
    pub base_zone_size: u32,
    /// Influence zone growth per round
    pub zone_growth: u32,
    /// Milliseconds between relocations while hiding
    pub reposition_period_ms: u64,
    /// Milliseconds between countdown decrements
    pub countdown_period_ms: u64,
    /// Seconds granted in round 1
    pub countdown_base_secs: u32,
    /// Seconds never drop below this
    pub countdown_min_secs: u32,
    /// Minimum distance from existing zone centers when respawning
    pub respawn_spacing: f32,
    /// Field inset while sampling respawn positions
    pub respawn_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rounds: ROUNDS,
            bubble_radius: BUBBLE_RADIUS,
            base_zone_size: BASE_ZONE_SIZE,
            zone_growth: ZONE_GROWTH,
            reposition_period_ms: REPOSITION_PERIOD_MS,
            countdown_period_ms: COUNTDOWN_PERIOD_MS,
            countdown_base_secs: COUNTDOWN_BASE_SECS,
            countdown_min_secs: COUNTDOWN_MIN_SECS,
            respawn_spacing: RESPAWN_SPACING,
            respawn_margin: RESPAWN_MARGIN,
        }
    }
}

impl Tuning {
    /// Influence zone side length for a 1-based round
    pub fn zone_size_for_round(&self, round: u32) -> u32 {
        self.base_zone_size + self.zone_growth * round.saturating_sub(1)
    }

    /// Seconds on the clock for a 1-based round
    pub fn time_for_round(&self, round: u32) -> u32 {
        self.countdown_base_secs
            .saturating_sub(round.saturating_sub(1))
            .max(self.countdown_min_secs)
    }

    /// Parse a tuning file's contents; unknown fields are errors, missing
    /// fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(text).map_err(TuningError::Parse)?;
        tuning.check()?;
        Ok(tuning)
    }

    /// Load overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let text = fs::read_to_string(path).map_err(TuningError::Io)?;
        let tuning = Self::from_json(&text)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    fn check(&self) -> Result<(), TuningError> {
        if self.rounds == 0 {
            return Err(TuningError::Invalid("rounds must be at least 1"));
        }
        if self.bubble_radius <= 0.0 {
            return Err(TuningError::Invalid("bubble_radius must be positive"));
        }
        if self.base_zone_size == 0 {
            return Err(TuningError::Invalid("base_zone_size must be positive"));
        }
        if self.reposition_period_ms == 0 || self.countdown_period_ms == 0 {
            return Err(TuningError::Invalid("tick periods must be positive"));
        }
        Ok(())
    }
}

/// Why a tuning file was refused
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "tuning file unreadable: {e}"),
            Self::Parse(e) => write!(f, "tuning file invalid: {e}"),
            Self::Invalid(why) => write!(f, "tuning rejected: {why}"),
        }
    }
}

impl std::error::Error for TuningError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_size_grows_per_round() {
        let t = Tuning::default();
        assert_eq!(t.zone_size_for_round(1), 50);
        assert_eq!(t.zone_size_for_round(2), 68);
        assert_eq!(t.zone_size_for_round(3), 86);
        assert_eq!(t.zone_size_for_round(10), 212);
    }

    #[test]
    fn test_time_shrinks_to_floor() {
        let t = Tuning::default();
        assert_eq!(t.time_for_round(1), 15);
        assert_eq!(t.time_for_round(2), 14);
        assert_eq!(t.time_for_round(10), 6);
        assert_eq!(t.time_for_round(11), 5);
        assert_eq!(t.time_for_round(20), 5);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "rounds": 3, "countdown_base_secs": 8 }"#).unwrap();
        assert_eq!(t.rounds, 3);
        assert_eq!(t.countdown_base_secs, 8);
        assert_eq!(t.base_zone_size, Tuning::default().base_zone_size);
    }

    #[test]
    fn test_rejects_unusable_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "rounds": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "bubble_radius": -1.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_misspelled_fields() {
        assert!(matches!(
            Tuning::from_json(r#"{ "bubble_radios": 20.0 }"#),
            Err(TuningError::Parse(_))
        ));
    }
}
