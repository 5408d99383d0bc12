//! Coin Dash - a coin-chasing arcade dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `highscores`: Single-integer high score persistence
//! - `feedback`: Maps simulation events to feedback cues

pub mod feedback;
pub mod highscores;
pub mod sim;

pub use highscores::HighScoreStore;

use sim::geom::Rect;

/// Game configuration constants
pub mod consts {
    /// Arena width in world units
    pub const ARENA_WIDTH: i32 = 960;
    /// Arena height in world units
    pub const ARENA_HEIGHT: i32 = 540;
    /// Height of the HUD band reserved along the top edge
    pub const HUD_HEIGHT: i32 = 60;

    /// Player square side length
    pub const PLAYER_SIZE: i32 = 32;
    /// Player speed (units/s)
    pub const PLAYER_SPEED: f32 = 360.0;
    /// Player speed while overlapping the slow zone (units/s)
    pub const PLAYER_SLOW_SPEED: f32 = 133.0;

    /// Enemy square side length
    pub const ENEMY_SIZE: i32 = 36;
    /// Enemy horizontal speed (units/s)
    pub const ENEMY_SPEED_X: f32 = 220.0;
    /// Enemy vertical speed (units/s)
    pub const ENEMY_SPEED_Y: f32 = 180.0;

    /// Coin square side length
    pub const COIN_SIZE: i32 = 18;
    /// Coins required to clear a level
    pub const COINS_PER_LEVEL: u32 = 5;

    /// Slow zone width
    pub const SLOW_ZONE_WIDTH: i32 = 260;
    /// Slow zone height
    pub const SLOW_ZONE_HEIGHT: i32 = 80;

    /// Lives at the start of a run
    pub const STARTING_LIVES: u32 = 3;
    /// Level-up banner duration (seconds)
    pub const LEVEL_BANNER_SECS: f32 = 2.0;
    /// Ceiling applied to frame delta times before integration
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Placement attempts before falling back to the last candidate
    pub const PLACEMENT_ATTEMPTS: u32 = 64;
    /// Minimum enemy spawn distance from the player center
    pub const ENEMY_SPAWN_CLEARANCE: f32 = 180.0;
    /// Minimum coin spawn distance from the player center
    pub const COIN_SPAWN_CLEARANCE: f32 = 100.0;
    /// Minimum slow zone distance from the player center
    pub const ZONE_PLAYER_CLEARANCE: f32 = 120.0;
    /// Minimum slow zone distance from the coin center
    pub const ZONE_COIN_CLEARANCE: f32 = 80.0;
    /// Padding around the player start box kept free of the slow zone
    pub const SPAWN_BOX_PADDING: i32 = 60;
}

/// The region below the HUD band where entities move and collide
#[inline]
pub fn play_area() -> Rect {
    Rect::new(
        0,
        consts::HUD_HEIGHT,
        consts::ARENA_WIDTH,
        consts::ARENA_HEIGHT - consts::HUD_HEIGHT,
    )
}
