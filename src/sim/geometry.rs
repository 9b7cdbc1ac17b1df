//! Box and distance geometry for bubbles and their influence zones
//!
//! An influence zone is the axis-aligned square of side `zone_size` centered
//! on the bubble's fixed `zone_center`. Hidden bubbles roam inside it, and
//! the placement rules keep zones apart. Zone-vs-zone spacing uses a circular
//! approximation over the zone sizes rather than true box intersection; the
//! looseness is part of the game's feel and is kept on purpose.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::bubble::Bubble;

/// An axis-aligned rectangle, `min` inclusive to `max` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl ZoneBox {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square box of side `size` centered on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// True when the box has no interior to sample from
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Shrink the box by `d` on every side (may produce an empty box)
    pub fn inset(&self, d: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(d),
            max: self.max - Vec2::splat(d),
        }
    }

    /// Clip the box to the field rectangle `[0, extent]`
    pub fn clamp_to(&self, extent: Vec2) -> Self {
        Self {
            min: self.min.clamp(Vec2::ZERO, extent),
            max: self.max.clamp(Vec2::ZERO, extent),
        }
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Is `p` within the bubble's clickable circle (boundary counts as a hit)?
#[inline]
pub fn point_in_bubble(bubble: &Bubble, p: Vec2, hit_radius: f32) -> bool {
    distance(p, bubble.origin) <= hit_radius
}

/// Is `p` inside the bubble's influence box?
#[inline]
pub fn point_in_zone_box(bubble: &Bubble, p: Vec2) -> bool {
    bubble.zone_box().contains(p)
}

/// Do two influence zones overlap, treating each as a circle of diameter
/// `zone_size`? Touching exactly does not count as overlap.
#[inline]
pub fn zones_overlap(a: &Bubble, b: &Bubble) -> bool {
    distance(a.zone_center, b.zone_center) < (a.zone_size as f32 + b.zone_size as f32) / 2.0
}

/// Is `p` strictly closer than `threshold` to the bubble's zone center?
/// Spacing rule for respawned bubbles.
#[inline]
pub fn point_near_zone_center(bubble: &Bubble, p: Vec2, threshold: f32) -> bool {
    distance(bubble.zone_center, p) < threshold
}
