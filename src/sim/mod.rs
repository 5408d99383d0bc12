//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, dt supplied by the host clock
//! - Seeded RNG only
//! - No rendering, audio, or file I/O

pub mod geom;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geom::{Rect, center_distance, first_overlap};
pub use spawn::{Constraint, place_rect};
pub use state::{Enemy, GameEvent, GameMode, GameState, Player, SlowZone};
pub use tick::{ControlEvent, TickInput, control, tick};
