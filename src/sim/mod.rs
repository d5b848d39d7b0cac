//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Seeded RNG only
//! - Stars kept in spawn order, never removed
//! - No rendering or platform dependencies

pub mod ark;
pub mod camera;
pub mod physics;
pub mod scene;
pub mod star;
pub mod state;
pub mod tick;

pub use ark::{Ark, Proximity};
pub use camera::Camera;
pub use scene::{ArkView, Scene, StarView, TargetIndicator};
pub use star::{ColonyPhase, Star};
pub use state::GameWorld;
pub use tick::{TickInput, tick};
