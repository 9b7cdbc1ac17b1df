//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Message-driven only (clicks and timer ticks arrive as inputs)
//! - Seeded RNG only
//! - Stable iteration order (bubbles keep insertion order)
//! - No rendering or platform dependencies

pub mod bubble;
pub mod geometry;
pub mod placement;
pub mod reposition;
pub mod round;
pub mod state;

pub use bubble::{Bubble, Color};
pub use geometry::{
    ZoneBox, point_in_bubble, point_in_zone_box, point_near_zone_center, zones_overlap,
};
pub use placement::{RejectReason, Verdict, validate};
pub use reposition::reposition_all;
pub use round::{Event, Input, LossReason, RoundController, Screen};
pub use state::{FieldSize, GameState, Level, Phase};
