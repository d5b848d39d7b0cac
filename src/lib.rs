//! Entropy's Ark - an orbital-mechanics arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, resources, colonization, world generation)
//! - `session`: Input latching and restart handling around a single world
//! - `settings`: Front-end preferences (viewport, seed, input mode)
//!
//! Windowing, drawing and frame pacing live outside this crate. A front-end
//! feeds [`sim::TickInput`] snapshots in and draws the [`sim::Scene`] it gets back.

pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Gravitational constant
    pub const G: f32 = 1.0;
    /// Fixed simulation timestep (one tick per frame)
    pub const DT: f32 = 1.0;

    /// Heading change per tick while a rotate key is held (radians)
    pub const ROT_SPEED: f32 = 0.08;
    /// Velocity added per tick of thrust
    pub const THRUST_POWER: f32 = 0.15;
    pub const THRUST_FUEL_COST: f32 = 0.3;
    pub const THRUST_ENERGY_COST: f32 = 0.1;

    /// Stars further than this exert no pull
    pub const GRAVITY_CUTOFF: f32 = 5000.0;
    /// Extra clearance beyond a star's radius that still counts as a crash
    pub const COLLISION_MARGIN: f32 = 10.0;

    /// Ark defaults
    pub const ARK_MASS: f32 = 10.0;
    pub const ARK_START_ENERGY: f32 = 500.0;
    pub const ARK_START_FUEL: f32 = 500.0;
    pub const ARK_START_MATTER: f32 = 200.0;
    pub const ARK_SOLAR_PANELS: u32 = 1;
    /// Distance from the origin star at which the Ark starts its orbit
    pub const ORBIT_DISTANCE: f32 = 450.0;

    /// Solar flux: (mass / FLUX_MASS_DIVISOR) / (d² + 1) * FLUX_SCALE
    pub const FLUX_MASS_DIVISOR: f32 = 10.0;
    pub const FLUX_SCALE: f32 = 2000.0;
    /// Fraction of flux each solar panel turns into energy
    pub const PANEL_EFFICIENCY: f32 = 0.1;
    /// Base life-support drain per tick
    pub const LIFE_SUPPORT_DRAIN: f32 = 0.2;

    /// Star generation
    pub const STAR_MIN_RADIUS: i32 = 60;
    pub const STAR_MAX_RADIUS: i32 = 90;
    pub const STAR_MASS_PER_RADIUS: f32 = 120.0;
    pub const HZ_INNER_FACTOR: f32 = 4.0;
    pub const HZ_OUTER_FACTOR: f32 = 7.0;

    /// Colonization
    pub const COLONIZE_SPEED: f32 = 0.3;
    pub const COLONIZE_MAX_SPEED: f32 = 3.0;
    pub const PROGRESS_DECAY: f32 = 0.1;
    pub const PROGRESS_COMPLETE: f32 = 100.0;
    pub const COLONY_MATTER_REWARD: f32 = 200.0;
    pub const COLONY_FUEL_REWARD: f32 = 200.0;
    pub const TARGET_COLONIES: u32 = 5;

    /// Build commands
    pub const BATTERY_MATTER_COST: f32 = 50.0;
    pub const BATTERY_CAPACITY_GAIN: f32 = 100.0;
    pub const FUEL_MATTER_COST: f32 = 20.0;
    pub const FUEL_ENERGY_COST: f32 = 50.0;
    pub const FUEL_YIELD: f32 = 50.0;

    /// Procedural generation
    pub const GEN_DISTANCE: f32 = 3000.0;
    pub const SPAWN_ANGLE_SPREAD: f32 = 0.5;
    pub const SPAWN_MIN_DISTANCE: f32 = 2000.0;
    pub const SPAWN_MAX_DISTANCE: f32 = 3000.0;

    /// Camera
    pub const CAMERA_SCALE: f32 = 0.5;
    pub const CAMERA_SMOOTHING: f32 = 0.05;
    pub const VIEWPORT_WIDTH: f32 = 1200.0;
    pub const VIEWPORT_HEIGHT: f32 = 800.0;
    /// Distance from viewport centre of the off-screen target marker
    pub const INDICATOR_RADIUS: f32 = 350.0;
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

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
