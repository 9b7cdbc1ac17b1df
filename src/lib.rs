//! Bubble Hunt - a round-based place-and-seek arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, placement rules, round state machine)
//! - `presenter`: Render-agnostic snapshots and player-facing messages
//! - `tuning`: Data-driven game balance

pub mod presenter;
pub mod sim;
pub mod tuning;

pub use presenter::{Notice, NoticeKind, Snapshot};
pub use sim::round::{Event, Input, LossReason, RoundController, Screen};
pub use sim::state::{FieldSize, GameState, Level, Phase};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Rounds per game; clearing the last one wins
    pub const ROUNDS: u32 = 10;

    /// Clickable radius of a bubble (also the boundary inset for placement)
    pub const BUBBLE_RADIUS: f32 = 15.0;

    /// Influence zone side length in round 1
    pub const BASE_ZONE_SIZE: u32 = 50;
    /// Influence zone growth per round
    pub const ZONE_GROWTH: u32 = 18;

    /// Hidden bubbles relocate on this period
    pub const REPOSITION_PERIOD_MS: u64 = 1500;
    /// Countdown decrements on this period
    pub const COUNTDOWN_PERIOD_MS: u64 = 1000;
    /// Seconds granted in round 1
    pub const COUNTDOWN_BASE_SECS: u32 = 15;
    /// Seconds never drop below this in later rounds
    pub const COUNTDOWN_MIN_SECS: u32 = 5;

    /// Minimum distance from existing zone centers when respawning bubbles
    pub const RESPAWN_SPACING: f32 = 15.0;
    /// Field inset applied while sampling respawn positions
    pub const RESPAWN_MARGIN: f32 = 30.0;
    /// Samples per bubble before a respawn position is accepted as-is
    pub const RESPAWN_RETRY_CAP: u32 = 64;

    /// Default square field edge when the host supplies no size
    pub const DEFAULT_FIELD: f32 = 400.0;
}
