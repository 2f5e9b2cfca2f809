use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned rectangular collider centered on the entity's
/// [`MapPosition`](super::mapposition::MapPosition).
///
/// Bounds are computed from the current position at test time, never cached,
/// so a test always sees the position of the same tick. The overlap test is
/// closed-interval: touching edges count as a collision.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2 {
                x: width,
                y: height,
            },
        }
    }

    /// Returns (min, max) of the collider AABB for a given center position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let half = Vector2 {
            x: self.size.x / 2.0,
            y: self.size.y / 2.0,
        };
        let p0 = position - half;
        let p1 = position + half;
        let min = Vector2 {
            x: p0.x.min(p1.x),
            y: p0.y.min(p1.y),
        };
        let max = Vector2 {
            x: p0.x.max(p1.x),
            y: p0.y.max(p1.y),
        };
        (min, max)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different
    /// center position. Touching edges overlap.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        max_a.x >= min_b.x && max_b.x >= min_a.x && max_a.y >= min_b.y && max_b.y >= min_a.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_min_not_greater_than_max() {
        let collider = BoxCollider::new(10.0, 20.0);
        let (min, max) = collider.aabb(Vector2 { x: 5.0, y: -3.0 });
        assert!(min.x <= max.x);
        assert!(min.y <= max.y);
    }

    #[test]
    fn test_aabb_centered_on_position() {
        let collider = BoxCollider::new(10.0, 20.0);
        let (min, max) = collider.aabb(Vector2 { x: 100.0, y: 200.0 });
        assert_eq!(min.x, 95.0);
        assert_eq!(max.x, 105.0);
        assert_eq!(min.y, 190.0);
        assert_eq!(max.y, 210.0);
    }

    #[test]
    fn test_aabb_negative_size_normalized() {
        let collider = BoxCollider::new(-10.0, -20.0);
        let (min, max) = collider.aabb(Vector2 { x: 0.0, y: 0.0 });
        assert!(min.x <= max.x);
        assert!(min.y <= max.y);
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(4.0, 4.0);
        let pa = Vector2 { x: 0.0, y: 0.0 };
        let pb = Vector2 { x: 6.0, y: 3.0 };
        assert_eq!(a.overlaps(pa, &b, pb), b.overlaps(pb, &a, pa));

        let pb_far = Vector2 { x: 100.0, y: 0.0 };
        assert_eq!(a.overlaps(pa, &b, pb_far), b.overlaps(pb_far, &a, pa));
    }

    #[test]
    fn test_identical_positions_with_nonzero_size_overlap() {
        let a = BoxCollider::new(1.0, 1.0);
        let b = BoxCollider::new(50.0, 2.0);
        let p = Vector2 { x: 33.0, y: -7.0 };
        assert!(a.overlaps(p, &b, p));
    }

    #[test]
    fn test_separated_beyond_half_widths_never_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(6.0, 6.0);
        // Sum of half-widths is 8; separation of 8.1 on x cannot collide.
        let pa = Vector2 { x: 0.0, y: 0.0 };
        let pb = Vector2 { x: 8.1, y: 0.0 };
        assert!(!a.overlaps(pa, &b, pb));
    }

    #[test]
    fn test_touching_edges_count_as_collision() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(6.0, 6.0);
        // Exactly at the sum of half-widths the closed interval still overlaps.
        let pa = Vector2 { x: 0.0, y: 0.0 };
        let pb = Vector2 { x: 8.0, y: 0.0 };
        assert!(a.overlaps(pa, &b, pb));
    }

    #[test]
    fn test_overlap_on_one_axis_only_is_no_collision() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        let pa = Vector2 { x: 0.0, y: 0.0 };
        let pb = Vector2 { x: 2.0, y: 50.0 };
        assert!(!a.overlaps(pa, &b, pb));
    }
}
