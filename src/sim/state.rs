//! Game state and entity types
//!
//! The whole simulation lives in one `GameState` aggregate stepped by
//! `tick`; rendering reads it and never writes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geom::Rect;
use super::spawn;
use crate::consts::*;
use crate::play_area;

/// Slow zone color at the start of a run, before the first level-up re-roll
const INITIAL_ZONE_COLOR: [u8; 3] = [80, 120, 200];

/// Top-level mode.
///
/// `LifeLostPause` suspends the simulation while the playing scene stays
/// on screen; the only way out is a confirm (resume) or quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Title,
    Playing,
    LifeLostPause,
    GameOver,
}

/// One-shot signals for audio/HUD collaborators.
///
/// Each fires at most once per tick; dropping them never affects the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected,
    LevelUp,
    LifeLost,
    GameOver,
}

/// The player avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Recomputed from input every tick; zeroed on life loss
    pub vel: Vec2,
}

/// A bouncing enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    pub vel: Vec2,
}

/// The region that slows the player down while overlapped
#[derive(Debug, Clone)]
pub struct SlowZone {
    pub rect: Rect,
    /// Display color, re-rolled on every level-up
    pub color: [u8; 3],
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub mode: GameMode,
    pub score: u32,
    /// In-memory mirror of the persisted best; the host saves it on game over
    pub high_score: u32,
    pub lives: u32,
    pub level: u32,
    /// Coins collected toward the current level's quota
    pub level_coins: u32,
    /// Level-up banner time remaining in seconds (0 = inactive)
    pub banner_secs: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coin: Rect,
    pub slow_zone: SlowZone,
}

impl GameState {
    /// Create a state on the title screen with the given run seed
    pub fn new(seed: u64, high_score: u32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Title,
            score: 0,
            high_score,
            lives: STARTING_LIVES,
            level: 1,
            level_coins: 0,
            banner_secs: 0.0,
            player: Player {
                rect: player_start_rect(),
                vel: Vec2::ZERO,
            },
            enemies: Vec::new(),
            coin: play_area(),
            slow_zone: SlowZone {
                rect: play_area(),
                color: INITIAL_ZONE_COLOR,
            },
        };
        state.reset_entities();
        state
    }

    /// Coins still needed to clear the current level
    pub fn coins_to_next_level(&self) -> u32 {
        COINS_PER_LEVEL.saturating_sub(self.level_coins)
    }

    /// Remaining fraction of the level-up banner: 1.0 just armed, 0.0 inactive
    pub fn banner_fraction(&self) -> f32 {
        (self.banner_secs / LEVEL_BANNER_SECS).clamp(0.0, 1.0)
    }

    /// True while the level-up banner should be on screen
    pub fn banner_active(&self) -> bool {
        self.banner_secs > 0.0
    }

    /// Full run reset: score, lives, and level back to start values,
    /// fresh entities. Leaves `mode` to the caller.
    pub(crate) fn start_run(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.level_coins = 0;
        self.banner_secs = 0.0;
        self.reset_entities();
    }

    /// Life lost: recenter the player, then push enemies and the coin back
    /// out to spawn clearance so the resumed run cannot collide instantly.
    /// Score and level carry through.
    pub(crate) fn recover_after_life_loss(&mut self) {
        self.player.rect = player_start_rect();
        self.player.vel = Vec2::ZERO;

        let player_center = self.player.rect.center();
        for enemy in &mut self.enemies {
            let (rect, vel) = spawn::enemy(&mut self.rng, player_center);
            enemy.rect = rect;
            enemy.vel = vel;
        }
        self.coin = spawn::coin(&mut self.rng, player_center, &self.slow_zone.rect);
    }

    fn reset_entities(&mut self) {
        self.player.rect = player_start_rect();
        self.player.vel = Vec2::ZERO;

        self.slow_zone = SlowZone {
            rect: spawn::initial_slow_zone(&mut self.rng, &self.player.rect),
            color: INITIAL_ZONE_COLOR,
        };

        let player_center = self.player.rect.center();
        self.enemies.clear();
        for _ in 0..self.level {
            let (rect, vel) = spawn::enemy(&mut self.rng, player_center);
            self.enemies.push(Enemy { rect, vel });
        }
        self.coin = spawn::coin(&mut self.rng, player_center, &self.slow_zone.rect);
    }
}

/// Player start rect, centered in the play area
fn player_start_rect() -> Rect {
    let center = play_area().center();
    Rect::centered_at(center.x as i32, center.y as i32, PLAYER_SIZE, PLAYER_SIZE)
}
