//! Per-frame simulation step
//!
//! Advances the controller by one variable-length frame. Growth is
//! discretized with a carry-over accumulator so the effective growth rate
//! does not depend on frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, LossReason};
use crate::normalize_angle;

/// Autopilot steers back toward the middle when the next head is this close to an edge
const AUTOPILOT_EDGE_MARGIN: f32 = 60.0;

/// Input sampled for a single frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Net steering (-1 per held left, +1 per held right); not clamped
    pub turn: f32,
    /// Confirm/start (enter/space)
    pub confirm: bool,
    /// Idle/demo mode - the autopilot plays the game
    #[serde(default)]
    pub idle_mode: bool,
}

/// Something the outside world (audio, UI) may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted { session: u32 },
    /// The vine was released by the first confirm of a session
    VineReleased,
    /// One growth step was committed
    Grew { score: u64 },
    Lost { reason: LossReason, score: u64 },
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    let mut input = input.clone();
    if input.idle_mode {
        // Auto-confirm on the title screen and to release the vine
        input.confirm = state.phase == GamePhase::Start || !state.vine_go;
        input.turn = autopilot_turn(state);
    }
    let input = &input;

    match state.phase {
        GamePhase::Start => {
            if input.confirm {
                state.start_session();
                events.push(GameEvent::SessionStarted {
                    session: state.session,
                });
            }
        }
        GamePhase::Playing => {
            if input.confirm && !state.vine_go {
                state.vine_go = true;
                events.push(GameEvent::VineReleased);
            }

            if let Some(reason) = state.loss_reason() {
                let score = state.score;
                state.end_session(reason);
                events.push(GameEvent::Lost { reason, score });
                return events;
            }

            let in_bubble = state
                .world
                .contains_point(state.vine.peek_next_head_position());

            if state.vine_go {
                if advance_growth(state, dt) {
                    events.push(GameEvent::Grew { score: state.score });
                }
                update_speed(state, in_bubble, dt);
            }

            let turn_rate = state.tuning.turn_rate(in_bubble);
            state.vine.apply_turn(input.turn, turn_rate, dt);
        }
    }

    events
}

/// Steer toward the nearest bubble we are not already in, or back to the
/// middle of the world when close to an edge
pub fn autopilot_turn(state: &GameState) -> f32 {
    let head = state.vine.head_position();
    let next = state.vine.peek_next_head_position();
    let bounds = state.world.bounds();
    let center = Vec2::new(bounds.width / 2.0, bounds.height / 2.0);

    let near_edge = next.x < AUTOPILOT_EDGE_MARGIN
        || next.y < AUTOPILOT_EDGE_MARGIN
        || next.x > bounds.width - AUTOPILOT_EDGE_MARGIN
        || next.y > bounds.height - AUTOPILOT_EDGE_MARGIN;

    let target = if near_edge {
        center
    } else {
        state
            .world
            .bubbles()
            .iter()
            .filter(|b| !b.contains(head))
            .min_by(|a, b| {
                a.center
                    .distance_squared(head)
                    .partial_cmp(&b.center.distance_squared(head))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|b| b.center)
            .unwrap_or(center)
    };

    let to_target = target - head;
    if to_target.length_squared() < 1e-6 {
        return 0.0;
    }
    let desired = to_target.y.atan2(to_target.x);
    let delta = normalize_angle(desired - state.vine.heading());
    delta.clamp(-1.0, 1.0)
}

/// Accumulate `dt * speed`; grow once when the interval is crossed
fn advance_growth(state: &mut GameState, dt: f32) -> bool {
    state.grow_accumulator += dt * state.speed;
    if state.grow_accumulator < state.tuning.grow_interval {
        return false;
    }

    state.grow_accumulator -= state.tuning.grow_interval;
    state.score += 1;
    state.vine.grow();
    state.record_score();
    log::debug!(
        "Grew to {:?} (score {}, speed {:.2})",
        state.vine.head_position(),
        state.score,
        state.speed
    );
    true
}

/// Bubbles speed the vine up, plain terrain slows it down
fn update_speed(state: &mut GameState, in_bubble: bool, dt: f32) {
    let tuning = &state.tuning;
    state.speed = if in_bubble {
        (state.speed + dt * tuning.bubble_acceleration).min(tuning.max_speed)
    } else {
        (state.speed - dt * tuning.terrain_deceleration).max(0.0)
    };
}
