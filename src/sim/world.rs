//! Procedural bubble world
//!
//! The world is a bounded rectangle of plain terrain with clusters of
//! overlapping circular "bubbles". Each cluster is a random walk: the next
//! bubble's centre wanders from the previous one by up to its radius on
//! each axis. Clusters only matter during generation; queries see one flat
//! list of circles.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A circular bubble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub center: Vec2,
    pub radius: f32,
}

impl Bubble {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Strictly inside (points on the rim are outside)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (self.center - point).length_squared() < self.radius * self.radius
    }
}

/// Playable rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Inclusive on every edge
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }
}

/// Cluster and bubble size ranges (all inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldGenParams {
    pub num_clusters: u32,
    pub min_cluster_size: u32,
    pub max_cluster_size: u32,
    pub min_hole_radius: f32,
    pub max_hole_radius: f32,
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self {
            num_clusters: WORLD_NUM_CLUSTERS,
            min_cluster_size: WORLD_MIN_SIZE_CLUSTER,
            max_cluster_size: WORLD_MAX_SIZE_CLUSTER,
            min_hole_radius: WORLD_MIN_SIZE_HOLE,
            max_hole_radius: WORLD_MAX_SIZE_HOLE,
        }
    }
}

impl WorldGenParams {
    /// Upper bound on bubbles a single generation can produce
    pub fn max_bubbles(&self) -> usize {
        (self.num_clusters as usize) * (self.max_cluster_size as usize)
    }
}

/// The world: bounds plus the current bubble set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    bounds: WorldBounds,
    bubbles: Vec<Bubble>,
}

impl World {
    /// An empty world (no bubbles until `generate`)
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            bubbles: Vec::new(),
        }
    }

    /// Build a world from explicit bubbles
    pub fn from_bubbles(bounds: WorldBounds, bubbles: Vec<Bubble>) -> Self {
        Self { bounds, bubbles }
    }

    /// Generate a fresh world from a seed
    pub fn generate_seeded(bounds: WorldBounds, params: &WorldGenParams, seed: u64) -> Self {
        let mut world = Self::new(bounds);
        let mut rng = Pcg32::seed_from_u64(seed);
        world.generate(params, &mut rng);
        world
    }

    /// Replace every bubble with a newly generated set
    pub fn generate<R: Rng>(&mut self, params: &WorldGenParams, rng: &mut R) {
        self.bubbles.clear();
        self.bubbles.reserve(params.max_bubbles());

        // Inverted or negative ranges are clamped rather than panicking
        let min_size = params.min_cluster_size.min(params.max_cluster_size);
        let max_radius = params.max_hole_radius.max(0.0);
        let min_radius = params.min_hole_radius.clamp(0.0, max_radius);
        let width = self.bounds.width.max(0.0);
        let height = self.bounds.height.max(0.0);

        for cluster in 0..params.num_clusters {
            let mut walk = Vec2::new(
                rng.random_range(0.0..=width),
                rng.random_range(0.0..=height),
            );
            let count = rng.random_range(min_size..=params.max_cluster_size);
            log::debug!("Cluster {} at {:?}: {} bubbles", cluster, walk, count);

            for _ in 0..count {
                let radius = rng.random_range(min_radius..=max_radius);
                self.bubbles.push(Bubble::new(walk, radius));

                walk += Vec2::new(
                    rng.random_range(-radius..=radius),
                    rng.random_range(-radius..=radius),
                );
            }
        }

        log::info!(
            "Generated world {}x{} with {} bubbles",
            self.bounds.width,
            self.bounds.height,
            self.bubbles.len()
        );
    }

    /// True if the point is strictly inside any bubble
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bubbles.iter().any(|b| b.contains(point))
    }

    /// True if the point lies outside the inclusive world rectangle
    pub fn is_out_of_bounds(&self, point: Vec2) -> bool {
        !self.bounds.contains(point)
    }

    #[inline]
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    #[inline]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    #[inline]
    pub fn bubble_count(&self) -> usize {
        self.bubbles.len()
    }
}
