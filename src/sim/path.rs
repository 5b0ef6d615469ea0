//! Bounded FIFO of committed vine points

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// Fixed-capacity point history. Pushing onto a full path drops the oldest point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VinePath {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl VinePath {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, returning the evicted oldest point if the path was full
    pub fn push(&mut self, point: Vec2) -> Option<Vec2> {
        let evicted = if self.points.len() >= self.capacity {
            self.points.pop_front()
        } else {
            None
        };
        self.points.push_back(point);
        evicted
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Oldest surviving point
    pub fn first(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    /// Most recently committed point
    pub fn last(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Consecutive point pairs, oldest first
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(&a, &b)| Segment::new(a, b))
    }

    /// Number of trailing segments (`len - 1`, or 0 when fewer than two points)
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn to_vec(&self) -> Vec<Vec2> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> Vec2 {
        Vec2::new(i as f32, 0.0)
    }

    #[test]
    fn test_push_below_capacity() {
        let mut path = VinePath::new(4);
        for i in 0..3 {
            assert_eq!(path.push(p(i)), None);
        }
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(p(0)));
        assert_eq!(path.last(), Some(p(2)));
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut path = VinePath::new(3);
        for i in 0..3 {
            path.push(p(i));
        }
        assert_eq!(path.push(p(3)), Some(p(0)));
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_vec(), vec![p(1), p(2), p(3)]);
    }

    #[test]
    fn test_segments_are_consecutive_pairs() {
        let mut path = VinePath::new(10);
        assert_eq!(path.segments().count(), 0);
        path.push(p(0));
        assert_eq!(path.segment_count(), 0);
        path.push(p(1));
        path.push(p(2));

        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::new(p(0), p(1)));
        assert_eq!(segments[1], Segment::new(p(1), p(2)));
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut path = VinePath::new(0);
        assert_eq!(path.capacity(), 1);
        path.push(p(0));
        assert_eq!(path.push(p(1)), Some(p(0)));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut path = VinePath::new(3);
        path.push(p(0));
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.get(0), None);
    }
}
