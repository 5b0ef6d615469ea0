//! Line segment geometry for vine collision
//!
//! The vine is a polyline; self-collision reduces to segment/segment tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cross products below this fraction of `|a| * |b|` count as parallel
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Vector from start to end
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Distance from a point to the closest point on this segment
    #[cfg(test)]
    pub(crate) fn distance_to_point(&self, point: Vec2) -> f32 {
        let line_vec = self.direction();
        let len_sq = line_vec.length_squared();
        if len_sq == 0.0 {
            return (point - self.start).length();
        }
        let t = ((point - self.start).dot(line_vec) / len_sq).clamp(0.0, 1.0);
        (point - (self.start + line_vec * t)).length()
    }

    /// Intersection point of two segments, if they properly cross
    ///
    /// Solves `self.start + t * d1 == other.start + u * d2` and accepts the
    /// hit when both `t` and `u` lie in `[0, 1]`. Parallel and collinear
    /// segments (including overlapping ones) never intersect.
    pub fn intersection(&self, other: &Segment) -> Option<Vec2> {
        let d1 = self.direction();
        let d2 = other.direction();

        let denom = d1.perp_dot(d2);
        let scale = self.length() * other.length();
        if scale == 0.0 || denom.abs() <= PARALLEL_EPSILON * scale {
            return None;
        }

        let diff = other.start - self.start;
        let t = diff.perp_dot(d2) / denom;
        let u = diff.perp_dot(d1) / denom;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(self.start + d1 * t)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(ax: f32, ay: f32, bx: f32, by: f32) -> Segment {
        Segment::new(Vec2::new(ax, ay), Vec2::new(bx, by))
    }

    #[test]
    fn test_crossing_segments() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        let hit = a.intersection(&b).expect("diagonals cross");
        assert!((hit - Vec2::new(5.0, 5.0)).length() < 1e-4);
        // Symmetric
        let hit2 = b.intersection(&a).expect("diagonals cross");
        assert!((hit - hit2).length() < 1e-4);
    }

    #[test]
    fn test_disjoint_segments() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(20.0, -5.0, 20.0, 5.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_touching_endpoint_counts() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(10.0, 0.0, 10.0, 10.0);
        let hit = a.intersection(&b).expect("shared endpoint is inside [0,1]");
        assert!((hit - Vec2::new(10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_parallel_segments() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(0.0, 1.0, 10.0, 1.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_collinear_overlap_is_not_a_hit() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 0.0, 15.0, 0.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_degenerate_segment() {
        let a = seg(3.0, 3.0, 3.0, 3.0);
        let b = seg(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_distance_to_point() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        assert!((a.distance_to_point(Vec2::new(5.0, 3.0)) - 3.0).abs() < 1e-5);
        assert!((a.distance_to_point(Vec2::new(13.0, 4.0)) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_length() {
        let a = seg(0.0, 0.0, 6.0, 8.0);
        assert!((a.length() - 10.0).abs() < 1e-5);
    }
}
