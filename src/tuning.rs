//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be replayed or rebalanced
//! from a JSON file. Missing fields fall back to the built-in defaults.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::world::{WorldBounds, WorldGenParams};

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub num_clusters: u32,
    pub min_cluster_size: u32,
    pub max_cluster_size: u32,
    pub min_hole_radius: f32,
    pub max_hole_radius: f32,

    // === Vine ===
    pub vine_start: Vec2,
    /// Radians, counter-clockwise from +x
    pub vine_start_heading: f32,
    pub expand_distance: f32,
    /// Maximum committed path points before the oldest is dropped
    pub max_path_points: usize,

    // === Speed ===
    /// Growth fires each time `dt * speed` accumulates past this
    pub grow_interval: f32,
    pub start_speed: f32,
    pub max_speed: f32,
    pub bubble_acceleration: f32,
    pub terrain_deceleration: f32,
    pub stall_speed: f32,

    // === Steering ===
    pub turn_rate_bubble: f32,
    pub turn_rate_terrain: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            num_clusters: WORLD_NUM_CLUSTERS,
            min_cluster_size: WORLD_MIN_SIZE_CLUSTER,
            max_cluster_size: WORLD_MAX_SIZE_CLUSTER,
            min_hole_radius: WORLD_MIN_SIZE_HOLE,
            max_hole_radius: WORLD_MAX_SIZE_HOLE,

            vine_start: Vec2::new(VINE_START_X, VINE_START_Y),
            vine_start_heading: VINE_START_HEADING,
            expand_distance: VINE_EXPAND_DISTANCE,
            max_path_points: VINE_MAX_POINTS,

            grow_interval: GROW_INTERVAL,
            start_speed: START_SPEED,
            max_speed: MAX_SPEED,
            bubble_acceleration: BUBBLE_ACCELERATION,
            terrain_deceleration: TERRAIN_DECELERATION,
            stall_speed: STALL_SPEED,

            turn_rate_bubble: TURN_RATE_BUBBLE,
            turn_rate_terrain: TURN_RATE_TERRAIN,
        }
    }
}

impl Tuning {
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }

    pub fn world_gen(&self) -> WorldGenParams {
        WorldGenParams {
            num_clusters: self.num_clusters,
            min_cluster_size: self.min_cluster_size,
            max_cluster_size: self.max_cluster_size,
            min_hole_radius: self.min_hole_radius,
            max_hole_radius: self.max_hole_radius,
        }
    }

    /// Turn rate for the terrain the vine is about to enter
    pub fn turn_rate(&self, in_bubble: bool) -> f32 {
        if in_bubble {
            self.turn_rate_bubble
        } else {
            self.turn_rate_terrain
        }
    }

    /// Reject values that would make the simulation meaningless
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: &str) -> Result<()> {
            Err(Error::InvalidTuning(msg.to_string()))
        }

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return invalid("world dimensions must be positive");
        }
        if self.min_cluster_size == 0 || self.min_cluster_size > self.max_cluster_size {
            return invalid("cluster sizes must satisfy 0 < min <= max");
        }
        if !(self.min_hole_radius > 0.0 && self.min_hole_radius <= self.max_hole_radius) {
            return invalid("hole radii must satisfy 0 < min <= max");
        }
        if !(self.expand_distance > 0.0) {
            return invalid("expand_distance must be positive");
        }
        if self.max_path_points < 2 {
            return invalid("max_path_points must be at least 2");
        }
        if !(self.grow_interval > 0.0) {
            return invalid("grow_interval must be positive");
        }
        if !(self.max_speed > 0.0 && self.start_speed <= self.max_speed) {
            return invalid("speeds must satisfy 0 < start_speed <= max_speed");
        }
        Ok(())
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning: Tuning = serde_json::from_str(&json).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
