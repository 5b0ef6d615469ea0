//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{GameState, Segment, Vine, World};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate a quad (two triangles) of the given width along a segment
pub fn thick_segment(segment: Segment, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = segment.direction().normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = segment.start + perp;
    let b1 = segment.start - perp;
    let a2 = segment.end + perp;
    let b2 = segment.end - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Axis-aligned filled rectangle (two triangles)
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Horizontal bar filled in proportion to the current speed
pub fn speed_bar(state: &GameState, origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let filled = size.x * state.speed_fraction();
    if filled <= 0.0 {
        return Vec::new();
    }
    rect(origin, origin + Vec2::new(filled, size.y), color)
}

/// Every segment the player sees: the committed trail, the link from the
/// newest trail point to the head, and the moving leading edge
pub fn vine_segments(vine: &Vine) -> Vec<Segment> {
    let mut segments: Vec<Segment> = vine.trailing_segments().collect();
    if let Some(last) = vine.path().last() {
        segments.push(Segment::new(last, vine.head_position()));
    }
    segments.push(vine.leading_edge());
    segments
}

/// Generate vertices for the whole vine, offset by `offset` (for shadow passes)
pub fn vine(vine: &Vine, width: f32, color: [f32; 4], offset: Vec2) -> Vec<Vertex> {
    let segments = vine_segments(vine);
    let mut vertices = Vec::with_capacity(segments.len() * 6);
    for segment in segments {
        let shifted = Segment::new(segment.start + offset, segment.end + offset);
        vertices.extend(thick_segment(shifted, width, color));
    }
    vertices
}

/// Generate the bubble mask: one filled circle per bubble
pub fn bubble_mask(world: &World, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(world.bubble_count() * (segments * 3) as usize);
    for bubble in world.bubbles() {
        vertices.extend(circle(bubble.center, bubble.radius, color, segments));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bubble, WorldBounds};
    use crate::renderer::colors;

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::ZERO, 10.0, colors::BUBBLE, 16);
        assert_eq!(v.len(), 48);
        // Rim vertices sit on the radius
        let rim = Vec2::from(v[1].position);
        assert!((rim.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_thick_segment_width() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let v = thick_segment(seg, 4.0, colors::VINE);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [0.0, 2.0]);
        assert_eq!(v[1].position, [0.0, -2.0]);
    }

    #[test]
    fn test_degenerate_segment_is_empty() {
        let seg = Segment::new(Vec2::ONE, Vec2::ONE);
        assert!(thick_segment(seg, 4.0, colors::VINE).is_empty());
    }

    #[test]
    fn test_vine_segments_cover_trail_and_head() {
        let mut v = Vine::with_params(Vec2::new(100.0, 100.0), 0.0, 15.0, 100);
        // Fresh vine: only the leading edge
        assert_eq!(vine_segments(&v).len(), 1);

        for _ in 0..4 {
            v.grow();
        }
        // 3 trail segments + link to head + leading edge
        let segments = vine_segments(&v);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments.last().copied(), Some(v.leading_edge()));
        assert_eq!(segments[3].end, v.head_position());

        let shadow = vine(&v, 6.0, colors::VINE_SHADOW, Vec2::new(0.0, 1.0));
        assert_eq!(shadow.len(), 5 * 6);
    }

    #[test]
    fn test_speed_bar_tracks_speed() {
        use crate::tuning::Tuning;

        let mut state = GameState::new(1, Tuning::default());
        state.speed = state.tuning.max_speed / 4.0;
        let size = Vec2::new(100.0, 8.0);
        let bar = speed_bar(&state, Vec2::new(10.0, 10.0), size, colors::SPEED_BAR);
        assert_eq!(bar.len(), 6);
        let right = bar.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!((right - 35.0).abs() < 1e-4);

        state.speed = 0.0;
        assert!(speed_bar(&state, Vec2::ZERO, size, colors::SPEED_BAR).is_empty());
    }

    #[test]
    fn test_bubble_mask() {
        let world = World::from_bubbles(
            WorldBounds::new(100.0, 100.0),
            vec![
                Bubble::new(Vec2::new(10.0, 10.0), 5.0),
                Bubble::new(Vec2::new(50.0, 50.0), 8.0),
            ],
        );
        let v = bubble_mask(&world, colors::BUBBLE, 12);
        assert_eq!(v.len(), 2 * 12 * 3);
    }
}
