//! Trepadeira - a vine-steering arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vine growth, world bubbles, game state)
//! - `renderer`: CPU-side geometry for an external renderer
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-score leaderboard

pub mod error;
pub mod highscores;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::Error;
pub use highscores::HighScores;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playable world size (half of the 1920x1080 window)
    pub const WORLD_WIDTH: f32 = 960.0;
    pub const WORLD_HEIGHT: f32 = 540.0;

    /// Vine defaults
    pub const VINE_START_X: f32 = 200.0;
    pub const VINE_START_Y: f32 = 200.0;
    /// Start heading points along +y
    pub const VINE_START_HEADING: f32 = std::f32::consts::FRAC_PI_2;
    pub const VINE_EXPAND_DISTANCE: f32 = 15.0;
    pub const VINE_MAX_POINTS: usize = 1000;

    /// World generation
    pub const WORLD_NUM_CLUSTERS: u32 = 6;
    pub const WORLD_MIN_SIZE_CLUSTER: u32 = 5;
    pub const WORLD_MAX_SIZE_CLUSTER: u32 = 15;
    pub const WORLD_MIN_SIZE_HOLE: f32 = 20.0;
    pub const WORLD_MAX_SIZE_HOLE: f32 = 50.0;

    /// Seconds of `dt * speed` between growth events
    pub const GROW_INTERVAL: f32 = 0.3;
    pub const START_SPEED: f32 = 2.0;
    pub const MAX_SPEED: f32 = 5.0;
    /// Speed gained per second inside a bubble
    pub const BUBBLE_ACCELERATION: f32 = 1.4;
    /// Speed lost per second on plain terrain
    pub const TERRAIN_DECELERATION: f32 = 0.2;
    /// Below this speed the vine has stalled
    pub const STALL_SPEED: f32 = 0.01;

    /// Turn rates (radians/sec at full input)
    pub const TURN_RATE_BUBBLE: f32 = 1.2;
    pub const TURN_RATE_TERRAIN: f32 = 3.5;
}

/// Unit vector for a heading angle (radians, counter-clockwise from +x)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
