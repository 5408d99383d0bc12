//! Spawn placement policy
//!
//! Rejection sampling: draw uniform candidate positions inside the play
//! area until every constraint passes or the attempt budget runs out, then
//! fall back to the last candidate. Placement never blocks and never fails.

use glam::Vec2;
use rand::Rng;

use super::geom::Rect;
use crate::consts::*;
use crate::play_area;

/// A single placement restriction
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Candidate center must be at least `min` units from `from`
    MinCenterDistance { from: Vec2, min: f32 },
    /// Candidate must not overlap the given rect
    ClearOf(Rect),
}

impl Constraint {
    fn permits(&self, candidate: &Rect) -> bool {
        match self {
            Constraint::MinCenterDistance { from, min } => {
                candidate.center().distance(*from) >= *min
            }
            Constraint::ClearOf(rect) => !candidate.overlaps(rect),
        }
    }
}

/// Place a `w` x `h` rect inside `area` subject to `constraints`.
///
/// Exhausting the attempt budget returns the last candidate drawn, so an
/// unsatisfiable constraint set degrades placement quality instead of
/// hanging the tick.
pub fn place_rect(
    rng: &mut impl Rng,
    w: i32,
    h: i32,
    area: &Rect,
    constraints: &[Constraint],
) -> Rect {
    debug_assert!(w <= area.w && h <= area.h);
    let max_x = area.right() - w;
    let max_y = area.bottom() - h;

    let mut candidate = Rect::new(area.left(), area.top(), w, h);
    for _ in 0..PLACEMENT_ATTEMPTS {
        candidate = Rect::new(
            rng.random_range(area.left()..=max_x),
            rng.random_range(area.top()..=max_y),
            w,
            h,
        );
        if constraints.iter().all(|c| c.permits(&candidate)) {
            break;
        }
    }
    candidate
}

/// New coin: away from the player, outside the slow zone
pub fn coin(rng: &mut impl Rng, player_center: Vec2, slow_zone: &Rect) -> Rect {
    place_rect(
        rng,
        COIN_SIZE,
        COIN_SIZE,
        &play_area(),
        &[
            Constraint::MinCenterDistance {
                from: player_center,
                min: COIN_SPAWN_CLEARANCE,
            },
            Constraint::ClearOf(*slow_zone),
        ],
    )
}

/// New enemy: placed away from the player, with random velocity signs
pub fn enemy(rng: &mut impl Rng, player_center: Vec2) -> (Rect, Vec2) {
    let rect = place_rect(
        rng,
        ENEMY_SIZE,
        ENEMY_SIZE,
        &play_area(),
        &[Constraint::MinCenterDistance {
            from: player_center,
            min: ENEMY_SPAWN_CLEARANCE,
        }],
    );
    (rect, enemy_velocity(rng))
}

/// Fresh enemy velocity: fixed magnitude per axis, random sign
pub fn enemy_velocity(rng: &mut impl Rng) -> Vec2 {
    let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(sx * ENEMY_SPEED_X, sy * ENEMY_SPEED_Y)
}

/// Relocated slow zone after a level-up: away from both player and coin
pub fn slow_zone(rng: &mut impl Rng, player_center: Vec2, coin_center: Vec2) -> Rect {
    place_rect(
        rng,
        SLOW_ZONE_WIDTH,
        SLOW_ZONE_HEIGHT,
        &play_area(),
        &[
            Constraint::MinCenterDistance {
                from: player_center,
                min: ZONE_PLAYER_CLEARANCE,
            },
            Constraint::MinCenterDistance {
                from: coin_center,
                min: ZONE_COIN_CLEARANCE,
            },
        ],
    )
}

/// Initial slow zone at run reset: clear of the player's start box
pub fn initial_slow_zone(rng: &mut impl Rng, player_box: &Rect) -> Rect {
    place_rect(
        rng,
        SLOW_ZONE_WIDTH,
        SLOW_ZONE_HEIGHT,
        &play_area(),
        &[Constraint::ClearOf(player_box.inflate(SPAWN_BOX_PADDING))],
    )
}

/// Fresh slow zone display color
pub fn zone_color(rng: &mut impl Rng) -> [u8; 3] {
    [
        rng.random_range(50..=255u8),
        rng.random_range(50..=255u8),
        rng.random_range(50..=255u8),
    ]
}
