//! World state: the star field, the Ark and the campaign counters
//!
//! One `GameWorld` is one run. Restarting throws the whole value away.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ark::Ark;
use super::camera::Camera;
use super::scene::Scene;
use super::star::Star;
use crate::consts::*;
use crate::polar_to_cartesian;

pub const MSG_NEW_STAR: &str = "New Star System Detected.";

#[derive(Debug, Clone)]
pub struct GameWorld {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Drives star radii and spawn placement
    rng: Pcg32,
    /// All stars in spawn order. Never shrinks, so indices stay valid.
    pub stars: Vec<Star>,
    pub ark: Ark,
    pub camera: Camera,
    /// Includes the origin star
    pub colonized_count: u32,
    pub target_colonies: u32,
    /// Furthest distance from the origin at which a star was spawned
    pub max_dist_gen: f32,
    /// Ticks simulated while the Ark was alive
    pub time_ticks: u64,
}

impl GameWorld {
    /// Create a new world with the given seed and the default viewport
    pub fn new(seed: u64) -> Self {
        Self::with_viewport(seed, Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT))
    }

    pub fn with_viewport(seed: u64, viewport: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let origin = Star::new(Vec2::ZERO, 0, &mut rng);
        let ark = Ark::new(&origin);

        log::info!(
            "World created (seed {}): origin star radius {}, orbit speed {:.2}",
            seed,
            origin.radius,
            ark.speed()
        );

        Self {
            seed,
            rng,
            stars: vec![origin],
            ark,
            camera: Camera::new(viewport),
            colonized_count: 1,
            target_colonies: TARGET_COLONIES,
            max_dist_gen: 0.0,
            time_ticks: 0,
        }
    }

    /// Spawn a star somewhere in the cone ahead of the Ark's direction of travel
    pub fn spawn_star_ahead(&mut self) -> usize {
        let heading = self.ark.vel.y.atan2(self.ark.vel.x);
        let angle = heading + self.rng.random_range(-SPAWN_ANGLE_SPREAD..SPAWN_ANGLE_SPREAD);
        let dist = self.rng.random_range(SPAWN_MIN_DISTANCE..SPAWN_MAX_DISTANCE);
        let pos = self.ark.pos + polar_to_cartesian(dist, angle);

        let level = self.stars.len() as u32;
        let star = Star::new(pos, level, &mut self.rng);
        log::info!(
            "Spawned star {} at ({:.0}, {:.0}), radius {}",
            level,
            pos.x,
            pos.y,
            star.radius
        );
        self.stars.push(star);
        self.ark.set_status(MSG_NEW_STAR);
        self.stars.len() - 1
    }

    /// Victory is reached once enough stars are colonized. The run keeps going.
    pub fn has_won(&self) -> bool {
        self.colonized_count >= self.target_colonies
    }

    pub fn is_game_over(&self) -> bool {
        !self.ark.alive
    }

    /// Closest star not yet colonized, by distance from the Ark
    pub fn nearest_uncolonized(&self) -> Option<usize> {
        self.stars
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.colonized)
            .min_by(|(_, a), (_, b)| {
                let da = a.pos.distance_squared(self.ark.pos);
                let db = b.pos.distance_squared(self.ark.pos);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(idx, _)| idx)
    }

    /// Snapshot for the renderer
    pub fn scene(&self) -> Scene {
        Scene::capture(self)
    }
}
