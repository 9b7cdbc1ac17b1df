//! Game state and core simulation types
//!
//! One `GameState` per started game, owned by the round controller and
//! mutated only through its message handler.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FIELD;
use crate::sim::bubble::Bubble;

/// Difficulty, fixed for the whole game at start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// Bubbles placed (and hunted) per round
    pub fn bubble_count(&self) -> usize {
        match self {
            Level::Easy => 4,
            Level::Medium => 5,
            Level::Hard => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Level::Easy),
            "medium" | "med" => Some(Level::Medium),
            "hard" => Some(Level::Hard),
            _ => None,
        }
    }

    /// Difficulty slider mapping: 4, 5 or 6 bubbles
    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            4 => Some(Level::Easy),
            5 => Some(Level::Medium),
            6 => Some(Level::Hard),
            _ => None,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Player is placing bubbles one click at a time
    Placing,
    /// Bubbles are hidden and roaming; player hunts them against the clock
    Hiding,
    /// Momentary while the next round's bubbles are generated; the controller
    /// passes through and returns to `Hiding` before the message completes
    RoundTransition,
    /// Terminal: every round cleared
    Won,
    /// Terminal: timeout or wrong click
    Lost,
}

/// Playfield dimensions, refreshed by every click message
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f32,
    pub height: f32,
}

impl FieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD,
            height: DEFAULT_FIELD,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Difficulty chosen at start
    pub level: Level,
    /// Current round, 1-based
    pub round: u32,
    /// Live bubbles in insertion order
    pub bubbles: Vec<Bubble>,
    /// Current phase
    pub phase: Phase,
    /// Seconds left; `Some` exactly while hiding
    pub countdown: Option<u32>,
    /// Latest known field dimensions
    pub field: FieldSize,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh game at round 1, waiting for the first placement
    pub fn new(level: Level, field: FieldSize) -> Self {
        Self {
            level,
            round: 1,
            bubbles: Vec::with_capacity(level.bubble_count()),
            phase: Phase::Placing,
            countdown: None,
            field,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
