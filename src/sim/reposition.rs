//! Bubble relocation while hidden
//!
//! On each reposition tick every bubble jumps to a fresh uniform position
//! inside its reachable box: the influence box clipped to the field, then
//! inset by the bubble radius so the drawn circle stays inside both. The
//! zone itself never moves.

use glam::Vec2;
use rand::Rng;

use crate::sim::bubble::Bubble;
use crate::sim::state::FieldSize;

/// Relocate every bubble within its own zone. Bubbles whose reachable box
/// has no interior stay where they are.
pub fn reposition_all(
    bubbles: &mut [Bubble],
    field: FieldSize,
    hit_radius: f32,
    rng: &mut impl Rng,
) {
    let extent = Vec2::new(field.width, field.height);
    for bubble in bubbles.iter_mut() {
        let reachable = bubble.zone_box().clamp_to(extent).inset(hit_radius);
        if reachable.is_empty() {
            continue;
        }
        bubble.origin = Vec2::new(
            rng.random_range(reachable.min.x..reachable.max.x),
            rng.random_range(reachable.min.y..reachable.max.y),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bubble::Color;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const R: f32 = 15.0;

    fn field() -> FieldSize {
        FieldSize::new(400.0, 400.0)
    }

    fn bubble_at(x: f32, y: f32, zone_size: u32) -> Bubble {
        Bubble::new(0, Vec2::new(x, y), zone_size, Color::new(0, 0, 0))
    }

    #[test]
    fn test_moves_stay_inside_inset_zone() {
        let mut bubbles = vec![bubble_at(200.0, 200.0, 50)];
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            reposition_all(&mut bubbles, field(), R, &mut rng);
            let allowed = bubbles[0].zone_box().inset(R);
            assert!(allowed.contains(bubbles[0].origin));
        }
    }

    #[test]
    fn test_zone_anchor_never_moves() {
        let mut bubbles = vec![bubble_at(120.0, 300.0, 86)];
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            reposition_all(&mut bubbles, field(), R, &mut rng);
        }
        assert_eq!(bubbles[0].zone_center, Vec2::new(120.0, 300.0));
        assert_eq!(bubbles[0].zone_size, 86);
    }

    #[test]
    fn test_zone_hanging_off_corner_is_clipped() {
        // Zone box spans -33..67 on both axes before clipping
        let mut bubbles = vec![bubble_at(17.0, 17.0, 100)];
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..200 {
            reposition_all(&mut bubbles, field(), R, &mut rng);
            let o = bubbles[0].origin;
            assert!(o.x >= R && o.y >= R);
            assert!(o.x < 67.0 - R && o.y < 67.0 - R);
        }
    }

    #[test]
    fn test_tiny_zone_leaves_bubble_in_place() {
        // 20-wide zone inset by 15 on each side has no interior
        let mut bubbles = vec![bubble_at(200.0, 200.0, 20)];
        let mut rng = Pcg32::seed_from_u64(5);
        reposition_all(&mut bubbles, field(), R, &mut rng);
        assert_eq!(bubbles[0].origin, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_same_seed_same_positions() {
        let mut a = vec![bubble_at(100.0, 100.0, 50), bubble_at(300.0, 250.0, 50)];
        let mut b = a.clone();
        let mut rng_a = Pcg32::seed_from_u64(42);
        let mut rng_b = Pcg32::seed_from_u64(42);
        reposition_all(&mut a, field(), R, &mut rng_a);
        reposition_all(&mut b, field(), R, &mut rng_b);
        assert_eq!(a[0].origin, b[0].origin);
        assert_eq!(a[1].origin, b[1].origin);
    }

    proptest! {
        #[test]
        fn origin_stays_in_zone_and_field(
            cx in 0.0f32..400.0, cy in 0.0f32..400.0,
            size in 40u32..150, seed in 0u64..1000,
        ) {
            let mut bubbles = vec![bubble_at(cx, cy, size)];
            let zone = bubbles[0].zone_box();
            let mut rng = Pcg32::seed_from_u64(seed);
            reposition_all(&mut bubbles, field(), R, &mut rng);
            let o = bubbles[0].origin;
            prop_assert!(zone.contains(o) || o == Vec2::new(cx, cy));
            prop_assert!(o.x >= 0.0 && o.x <= 400.0);
            prop_assert!(o.y >= 0.0 && o.y <= 400.0);
        }
    }
}
