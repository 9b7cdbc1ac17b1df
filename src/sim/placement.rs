//! Placement validation for the placing phase
//!
//! Pure checks, no mutation: the controller inserts the bubble only after an
//! `Accepted` verdict. A candidate must clear three gates, in order: the
//! field boundary (inset by the bubble radius), containment against every
//! existing bubble and its influence box, and the circular zone-overlap rule.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::bubble::{Bubble, Color};
use crate::sim::geometry::{point_in_bubble, point_in_zone_box, zones_overlap};
use crate::sim::state::FieldSize;

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Too close to (or past) the field edge
    OutOfBounds,
    /// Inside an existing bubble's clickable circle
    InsideBubble,
    /// Inside an existing bubble's influence box
    InsideZone,
    /// The new influence zone would overlap an existing one
    ZoneOverlap,
}

/// Outcome of a placement check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Validate a candidate placement point against the current bubbles.
///
/// `zone_size` is the influence size the new bubble would get (it grows with
/// the round, so the caller supplies it). Containment and zone overlap are
/// separate rules with separate reasons: a point can sit outside every box
/// yet still put two zone circles too close together.
pub fn validate(
    candidate: Vec2,
    zone_size: u32,
    existing: &[Bubble],
    field: FieldSize,
    hit_radius: f32,
) -> Verdict {
    if !in_bounds(candidate, field, hit_radius) {
        return Verdict::Rejected(RejectReason::OutOfBounds);
    }

    for bubble in existing {
        if point_in_bubble(bubble, candidate, hit_radius) {
            return Verdict::Rejected(RejectReason::InsideBubble);
        }
        if point_in_zone_box(bubble, candidate) {
            return Verdict::Rejected(RejectReason::InsideZone);
        }
    }

    // Prospective zone for the overlap rule; never inserted
    let prospective = Bubble::new(u32::MAX, candidate, zone_size, Color::new(0, 0, 0));
    for bubble in existing {
        if zones_overlap(&prospective, bubble) {
            return Verdict::Rejected(RejectReason::ZoneOverlap);
        }
    }

    Verdict::Accepted
}

/// Is the point inside the field inset by `margin` on every side?
#[inline]
pub fn in_bounds(p: Vec2, field: FieldSize, margin: f32) -> bool {
    p.x >= margin && p.x <= field.width - margin && p.y >= margin && p.y <= field.height - margin
}
