//! Per-frame simulation step and the mode state machine
//!
//! `tick` advances one frame of gameplay; `control` applies the
//! edge-triggered confirm/quit events. Both mutate only `GameState` and
//! report outcomes as discrete signals, so the surrounding audio/HUD/
//! persistence plumbing stays out of the hot path.

use glam::Vec2;

use super::geom::{self, Rect};
use super::spawn;
use super::state::{Enemy, GameEvent, GameMode, GameState};
use crate::consts::*;
use crate::play_area;

/// Held movement input for a single tick.
///
/// WASD/arrow aliasing is collapsed by the host before it gets here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Unit-length movement direction; opposing keys cancel
    pub fn direction(&self) -> Vec2 {
        let x = (self.right as i32 - self.left as i32) as f32;
        let y = (self.down as i32 - self.up as i32) as f32;
        Vec2::new(x, y).normalize_or_zero()
    }
}

/// Edge-triggered control events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Start, restart, or resume (Enter)
    Confirm,
    /// Request process shutdown (Esc)
    Quit,
}

/// Apply a control event. Returns true when the host should terminate.
pub fn control(state: &mut GameState, event: ControlEvent) -> bool {
    match event {
        ControlEvent::Quit => true,
        ControlEvent::Confirm => {
            match state.mode {
                GameMode::Title | GameMode::GameOver => {
                    state.start_run();
                    state.mode = GameMode::Playing;
                }
                GameMode::LifeLostPause => {
                    // Entities were already repositioned at the moment of loss
                    state.mode = GameMode::Playing;
                }
                GameMode::Playing => {}
            }
            false
        }
    }
}

/// Advance the simulation by one frame.
///
/// Outside `Playing` this is a no-op. `dt` is sanitized at the boundary:
/// non-finite or negative values are dropped, oversized ones clamped, so a
/// debugger pause cannot teleport entities across the arena.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.mode != GameMode::Playing || !dt.is_finite() || dt < 0.0 {
        return events;
    }
    let dt = dt.min(MAX_FRAME_DT);

    state.banner_secs = (state.banner_secs - dt).max(0.0);

    move_player(state, input, dt);
    move_enemies(state, dt);

    if state.player.rect.overlaps(&state.coin) {
        collect_coin(state, &mut events);
    }

    let hit = geom::first_overlap(&state.player.rect, state.enemies.iter().map(|e| &e.rect));
    if hit.is_some() {
        if state.lives > 1 {
            lose_life(state, &mut events);
        } else {
            end_run(state, &mut events);
        }
    }

    events
}

fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let speed = if state.player.rect.overlaps(&state.slow_zone.rect) {
        PLAYER_SLOW_SPEED
    } else {
        PLAYER_SPEED
    };
    state.player.vel = input.direction() * speed;

    let rect = state.player.rect;
    let moved = Rect::new(
        rect.x + (state.player.vel.x * dt) as i32,
        rect.y + (state.player.vel.y * dt) as i32,
        rect.w,
        rect.h,
    );
    state.player.rect = moved.clamp_into(&play_area());
}

fn move_enemies(state: &mut GameState, dt: f32) {
    let bounds = play_area();
    for enemy in &mut state.enemies {
        enemy.rect.x += (enemy.vel.x * dt) as i32;
        enemy.rect.y += (enemy.vel.y * dt) as i32;

        // Reflect only when heading out, so a deep overshoot cannot leave
        // the enemy oscillating against the boundary.
        if enemy.rect.left() <= bounds.left() {
            enemy.vel.x = enemy.vel.x.abs();
        } else if enemy.rect.right() >= bounds.right() {
            enemy.vel.x = -enemy.vel.x.abs();
        }
        if enemy.rect.top() <= bounds.top() {
            enemy.vel.y = enemy.vel.y.abs();
        } else if enemy.rect.bottom() >= bounds.bottom() {
            enemy.vel.y = -enemy.vel.y.abs();
        }

        enemy.rect = enemy.rect.clamp_into(&bounds);
    }
}

fn collect_coin(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.score += 1;
    state.level_coins += 1;
    state.coin = spawn::coin(
        &mut state.rng,
        state.player.rect.center(),
        &state.slow_zone.rect,
    );
    events.push(GameEvent::CoinCollected);

    if state.level_coins >= COINS_PER_LEVEL {
        advance_level(state);
        events.push(GameEvent::LevelUp);
    }
}

/// Quota reached: bump the level, add exactly one enemy, move and recolor
/// the slow zone, arm the banner. Runs atomically within the tick.
fn advance_level(state: &mut GameState) {
    state.level += 1;
    state.level_coins = 0;

    let player_center = state.player.rect.center();
    let (rect, vel) = spawn::enemy(&mut state.rng, player_center);
    state.enemies.push(Enemy { rect, vel });

    state.slow_zone.color = spawn::zone_color(&mut state.rng);
    state.slow_zone.rect = spawn::slow_zone(&mut state.rng, player_center, state.coin.center());

    state.banner_secs = LEVEL_BANNER_SECS;
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives -= 1;
    state.mode = GameMode::LifeLostPause;
    state.recover_after_life_loss();
    events.push(GameEvent::LifeLost);
}

fn end_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = 0;
    state.mode = GameMode::GameOver;
    if state.score > state.high_score {
        state.high_score = state.score;
    }
    events.push(GameEvent::GameOver);
}
