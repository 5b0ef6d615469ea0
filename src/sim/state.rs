//! Game state and controller-owned values
//!
//! All state that must be persisted for replays/determinism lives here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::vine::Vine;
use super::world::World;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Start,
    /// A session is running (the vine may still be waiting for its first confirm)
    Playing,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// Leading edge crossed the vine's own trail
    SelfCollision,
    /// Head left the world rectangle
    OutOfBounds,
    /// Speed decayed to (near) zero
    Stalled,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Draws one world seed per session
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub vine: Vine,
    pub world: World,
    /// Growth-rate multiplier
    pub speed: f32,
    /// Carry-over accumulator for growth cadence
    pub grow_accumulator: f32,
    /// Set by the first confirm of a session; the vine holds still until then
    pub vine_go: bool,
    /// Growth events this session
    pub score: u64,
    pub best_score: Option<u64>,
    /// Sessions started this run
    pub session: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl GameState {
    /// Create a new game state with the given seed
    ///
    /// The title screen already shows a generated world.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        if let Err(e) = tuning.validate() {
            log::warn!("Running with questionable tuning: {e}");
        }

        let vine = Vine::new(&tuning);
        let world = World::new(tuning.world_bounds());
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            speed: tuning.start_speed,
            tuning,
            phase: GamePhase::Start,
            vine,
            world,
            grow_accumulator: 0.0,
            vine_go: false,
            score: 0,
            best_score: None,
            session: 0,
            time_ticks: 0,
        };
        state.regenerate_world();
        state
    }

    /// Replace the world with one built from the next session seed
    fn regenerate_world(&mut self) -> u64 {
        let world_seed: u64 = self.rng.random();
        self.world = World::generate_seeded(
            self.tuning.world_bounds(),
            &self.tuning.world_gen(),
            world_seed,
        );
        world_seed
    }

    /// Reset vine/speed/score and regenerate the world for a new session
    pub fn start_session(&mut self) {
        self.session += 1;
        self.vine.reset();
        let world_seed = self.regenerate_world();
        self.speed = self.tuning.start_speed;
        self.grow_accumulator = 0.0;
        self.vine_go = false;
        self.score = 0;
        self.phase = GamePhase::Playing;

        log::info!(
            "Session {} started (world seed {}, {} bubbles)",
            self.session,
            world_seed,
            self.world.bubble_count()
        );
    }

    /// Current loss condition, if any
    pub fn loss_reason(&self) -> Option<LossReason> {
        if self.vine.collides_with_self() {
            Some(LossReason::SelfCollision)
        } else if self.world.is_out_of_bounds(self.vine.head_position()) {
            Some(LossReason::OutOfBounds)
        } else if self.speed < self.tuning.stall_speed {
            Some(LossReason::Stalled)
        } else {
            None
        }
    }

    /// End the session and return to the title
    pub fn end_session(&mut self, reason: LossReason) {
        log::info!(
            "Session {} lost ({:?}) with score {}",
            self.session,
            reason,
            self.score
        );
        self.record_score();
        self.phase = GamePhase::Start;
    }

    /// Fold the current score into the best score (called on every growth
    /// so the best score follows a record run live)
    pub fn record_score(&mut self) {
        if self.best_score.is_none_or(|best| self.score > best) {
            self.best_score = Some(self.score);
        }
    }

    /// Speed as a fraction of max speed (for a speed bar)
    pub fn speed_fraction(&self) -> f32 {
        (self.speed / self.tuning.max_speed).clamp(0.0, 1.0)
    }
}
