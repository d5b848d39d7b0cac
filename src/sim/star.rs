//! Star systems the Ark orbits and colonizes

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Colonization phase of a star, derived from its progress and flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColonyPhase {
    /// No progress yet (or fully decayed)
    Uncolonized,
    /// Partial progress toward colonization
    Colonizing,
    /// Terminal
    Colonized,
}

/// A star. Position, mass and zone are fixed; only colonization state changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Generation index (0 = origin star)
    pub level: u32,
    pub radius: f32,
    pub mass: f32,
    /// Habitable zone inner radius
    pub hz_min: f32,
    /// Habitable zone outer radius
    pub hz_max: f32,
    pub colonized: bool,
    /// Colonization progress, 0-100
    pub progress: f32,
}

impl Star {
    /// Create a star with a random radius. Level 0 is the pre-colonized origin star.
    pub fn new<R: Rng>(pos: Vec2, level: u32, rng: &mut R) -> Self {
        let radius = rng.random_range(STAR_MIN_RADIUS..=STAR_MAX_RADIUS) as f32;
        Self::with_radius(pos, level, radius)
    }

    pub fn with_radius(pos: Vec2, level: u32, radius: f32) -> Self {
        let origin = level == 0;
        Self {
            pos,
            level,
            radius,
            mass: radius * STAR_MASS_PER_RADIUS,
            hz_min: radius * HZ_INNER_FACTOR,
            hz_max: radius * HZ_OUTER_FACTOR,
            colonized: origin,
            progress: if origin { PROGRESS_COMPLETE } else { 0.0 },
        }
    }

    /// Whether a distance from the star centre lies strictly inside the habitable zone
    #[inline]
    pub fn in_habitable_zone(&self, dist: f32) -> bool {
        self.hz_min < dist && dist < self.hz_max
    }

    /// Distance at which a craft is considered to have crashed into the star
    #[inline]
    pub fn collision_distance(&self) -> f32 {
        self.radius + COLLISION_MARGIN
    }

    pub fn phase(&self) -> ColonyPhase {
        if self.colonized {
            ColonyPhase::Colonized
        } else if self.progress > 0.0 {
            ColonyPhase::Colonizing
        } else {
            ColonyPhase::Uncolonized
        }
    }
}
