//! The Ark: the player craft, its motion and its resource pools

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::physics::{gravity_accel, heading_vector, normalize, orbital_speed, solar_flux};
use super::star::Star;
use super::tick::TickInput;
use crate::consts::*;
use crate::normalize_angle;

pub const MSG_ONLINE: &str = "System Online.";
pub const MSG_CRASHED: &str = "CRITICAL: Crashed into Star";
pub const MSG_FROZEN: &str = "FAILURE: Energy Depleted (Frozen)";

/// Nearest star found during a gravity pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    /// Index into the world's star list
    pub nearest: Option<usize>,
    /// Distance to the nearest star (measured before this tick's move)
    pub distance: f32,
}

impl Proximity {
    /// What a dead craft reports
    pub const NONE: Self = Self {
        nearest: None,
        distance: 0.0,
    };
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ark {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading (radians), kept in [-π, π)
    pub angle: f32,
    /// Dry mass. Gravity accelerates the craft independently of it.
    pub mass: f32,
    pub energy: f32,
    pub max_energy: f32,
    pub fuel: f32,
    /// Raw material for building batteries and synthesizing fuel
    pub matter: f32,
    pub solar_panels: u32,
    pub alive: bool,
    /// True if the engine fired on the last tick
    pub thrusting: bool,
    /// Last status line for the HUD
    pub status: String,
}

impl Ark {
    /// Place the Ark in a circular orbit above `home`, moving clockwise on screen
    pub fn new(home: &Star) -> Self {
        let v_orbit = orbital_speed(home.mass, ORBIT_DISTANCE);
        Self {
            pos: home.pos - Vec2::new(0.0, ORBIT_DISTANCE),
            // Above the star, so tangential is +x
            vel: Vec2::new(v_orbit, 0.0),
            angle: 0.0,
            mass: ARK_MASS,
            energy: ARK_START_ENERGY,
            max_energy: ARK_START_ENERGY,
            fuel: ARK_START_FUEL,
            matter: ARK_START_MATTER,
            solar_panels: ARK_SOLAR_PANELS,
            alive: true,
            thrusting: false,
            status: MSG_ONLINE.to_string(),
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Advance the craft by one tick.
    ///
    /// Step order matters for the numerics: rotate, thrust, gravity (with
    /// collision check), move, solar charge, life support, depletion check.
    /// A crash returns immediately, before the craft moves.
    pub fn update(&mut self, stars: &[Star], input: &TickInput) -> Proximity {
        self.thrusting = false;
        if !self.alive {
            return Proximity::NONE;
        }

        if input.rotate_left {
            self.angle -= ROT_SPEED;
        }
        if input.rotate_right {
            self.angle += ROT_SPEED;
        }
        self.angle = normalize_angle(self.angle);

        // Costs are taken in full even if that overdraws the pools
        if input.thrust && self.fuel > 0.0 && self.energy > 0.0 {
            self.thrusting = true;
            self.fuel -= THRUST_FUEL_COST;
            self.energy -= THRUST_ENERGY_COST;
            self.vel += heading_vector(self.angle) * THRUST_POWER;
        }

        let mut proximity = Proximity {
            nearest: None,
            distance: f32::INFINITY,
        };

        for (idx, star) in stars.iter().enumerate() {
            let delta = star.pos - self.pos;
            let dist_sq = delta.length_squared();
            let dist = dist_sq.sqrt();

            if dist < proximity.distance {
                proximity = Proximity {
                    nearest: Some(idx),
                    distance: dist,
                };
            }

            if dist < star.collision_distance() {
                self.alive = false;
                self.set_status(MSG_CRASHED);
                log::info!("Ark crashed into star {} (level {})", idx, star.level);
                return proximity;
            }

            if dist < GRAVITY_CUTOFF {
                let acc = gravity_accel(star.mass, dist_sq);
                self.vel += normalize(delta, dist) * acc * DT;
            }
        }

        self.pos += self.vel * DT;

        if let Some(star) = proximity.nearest.map(|idx| &stars[idx]) {
            let flux = solar_flux(star.mass, proximity.distance);
            self.energy += flux * self.solar_panels as f32 * PANEL_EFFICIENCY;
        }

        self.energy -= LIFE_SUPPORT_DRAIN;
        self.energy = self.energy.min(self.max_energy);

        if self.energy <= 0.0 {
            self.alive = false;
            self.set_status(MSG_FROZEN);
            log::info!("Ark lost all power at ({:.0}, {:.0})", self.pos.x, self.pos.y);
        }

        proximity
    }
}
