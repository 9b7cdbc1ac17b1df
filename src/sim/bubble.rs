//! The bubble entity
//!
//! A bubble is placed once, then roams inside its influence zone while
//! hidden. The zone is anchored where the bubble was placed and never moves;
//! only `origin` (the current, clickable position) changes.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim::geometry::ZoneBox;

/// Display color, carried as data only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color from the game's seeded generator
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random::<u8>(),
            g: rng.random::<u8>(),
            b: rng.random::<u8>(),
        }
    }
}

/// A bubble entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    /// Current position; moves while the bubble hides
    pub origin: Vec2,
    /// Anchor of the influence zone, fixed at placement
    pub zone_center: Vec2,
    /// Side length of the square influence zone
    pub zone_size: u32,
    /// Set when the bubble has been clicked away
    pub burst: bool,
    pub color: Color,
}

impl Bubble {
    /// New bubble placed at `at`, zone anchored there too
    pub fn new(id: u32, at: Vec2, zone_size: u32, color: Color) -> Self {
        Self {
            id,
            origin: at,
            zone_center: at,
            zone_size,
            burst: false,
            color,
        }
    }

    /// The influence box the bubble may roam inside
    #[inline]
    pub fn zone_box(&self) -> ZoneBox {
        ZoneBox::centered(self.zone_center, self.zone_size as f32)
    }
}
