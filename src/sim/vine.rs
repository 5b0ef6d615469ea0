//! Vine growth and self-collision
//!
//! The vine is a head point plus a bounded trail of committed points. Turning
//! is continuous; growth happens in discrete steps when the controller calls
//! [`Vine::grow`]. Between growth events the head position stays fixed and
//! only the heading changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::path::VinePath;
use super::segment::Segment;
use crate::heading_vector;
use crate::tuning::Tuning;

/// Where the leading edge crosses the vine's own trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelfCollision {
    /// Intersection point (lies on both the leading edge and the trail segment)
    pub point: Vec2,
    /// Index of the trail segment that was hit (0 = oldest)
    pub segment_index: usize,
}

/// The player's vine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vine {
    head_position: Vec2,
    /// Radians, counter-clockwise from +x. Never normalized.
    heading: f32,
    path: VinePath,
    start_position: Vec2,
    start_heading: f32,
    expand_distance: f32,
}

impl Vine {
    pub fn new(tuning: &Tuning) -> Self {
        Self::with_params(
            tuning.vine_start,
            tuning.vine_start_heading,
            tuning.expand_distance,
            tuning.max_path_points,
        )
    }

    pub fn with_params(
        start_position: Vec2,
        start_heading: f32,
        expand_distance: f32,
        capacity: usize,
    ) -> Self {
        Self {
            head_position: start_position,
            heading: start_heading,
            path: VinePath::new(capacity),
            start_position,
            start_heading,
            expand_distance,
        }
    }

    /// Back to the start point and heading with an empty trail
    pub fn reset(&mut self) {
        self.head_position = self.start_position;
        self.heading = self.start_heading;
        self.path.clear();
    }

    #[inline]
    pub fn head_position(&self) -> Vec2 {
        self.head_position
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn path(&self) -> &VinePath {
        &self.path
    }

    #[inline]
    pub fn expand_distance(&self) -> f32 {
        self.expand_distance
    }

    /// Where the head would be after one growth step on the current heading
    pub fn peek_next_head_position(&self) -> Vec2 {
        self.head_position + heading_vector(self.heading) * self.expand_distance
    }

    /// Rotate the heading by `turn_signal * turn_rate * dt`
    pub fn apply_turn(&mut self, turn_signal: f32, turn_rate: f32, dt: f32) {
        self.heading += turn_signal * turn_rate * dt;
    }

    /// Commit the head to the trail and advance one step along the heading
    ///
    /// The trail records every head position in order, so after `n` calls
    /// (below capacity) it holds exactly `n` points.
    pub fn grow(&mut self) {
        let next = self.peek_next_head_position();
        if let Some(evicted) = self.path.push(self.head_position) {
            log::trace!("Vine trail full, dropped {:?}", evicted);
        }
        self.head_position = next;
    }

    /// Segment from the head to the next growth position
    pub fn leading_edge(&self) -> Segment {
        Segment::new(self.head_position, self.peek_next_head_position())
    }

    /// Committed trail segments, oldest first
    pub fn trailing_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.path.segments()
    }

    /// First trail segment (oldest first) crossed by the leading edge
    ///
    /// Every committed segment is tested. The link from the newest trail
    /// point to the head shares an endpoint with the leading edge and is not
    /// part of the trail.
    pub fn check_self_collision(&self) -> Option<SelfCollision> {
        let front = self.leading_edge();

        self.trailing_segments()
            .enumerate()
            .find_map(|(segment_index, segment)| {
                front
                    .intersection(&segment)
                    .map(|point| SelfCollision {
                        point,
                        segment_index,
                    })
            })
    }

    pub fn collides_with_self(&self) -> bool {
        self.check_self_collision().is_some()
    }
}
