//! Renderable snapshot of a world
//!
//! Everything a front-end needs to draw one frame, already reduced to plain
//! values. The snapshot serializes to JSON for headless runs and tooling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::state::GameWorld;
use crate::consts::INDICATOR_RADIUS;
use crate::polar_to_cartesian;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarView {
    pub pos: Vec2,
    pub radius: f32,
    pub hz_min: f32,
    pub hz_max: f32,
    pub colonized: bool,
    pub progress: f32,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArkView {
    pub pos: Vec2,
    pub angle: f32,
    pub vel: Vec2,
    pub speed: f32,
    pub alive: bool,
    pub thrusting: bool,
    pub energy: f32,
    pub max_energy: f32,
    pub fuel: f32,
    pub matter: f32,
    pub status: String,
}

/// Where to point the player at the next colonization target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetIndicator {
    /// Target is visible at this screen position
    OnScreen { star: usize, screen: Vec2 },
    /// Target is off screen; draw a marker at `marker`, on a fixed-radius
    /// ring around the viewport centre in the target's direction
    OffScreen { star: usize, marker: Vec2 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub tick: u64,
    pub stars: Vec<StarView>,
    pub ark: ArkView,
    pub camera: Camera,
    pub colonized_count: u32,
    pub target_colonies: u32,
    pub victory: bool,
    pub game_over: bool,
    pub target: Option<TargetIndicator>,
}

impl Scene {
    pub fn capture(world: &GameWorld) -> Self {
        let stars = world
            .stars
            .iter()
            .map(|s| StarView {
                pos: s.pos,
                radius: s.radius,
                hz_min: s.hz_min,
                hz_max: s.hz_max,
                colonized: s.colonized,
                progress: s.progress,
                level: s.level,
            })
            .collect();

        let ark = &world.ark;
        let ark = ArkView {
            pos: ark.pos,
            angle: ark.angle,
            vel: ark.vel,
            speed: ark.speed(),
            alive: ark.alive,
            thrusting: ark.thrusting,
            energy: ark.energy,
            max_energy: ark.max_energy,
            fuel: ark.fuel,
            matter: ark.matter,
            status: ark.status.clone(),
        };

        let target = world
            .nearest_uncolonized()
            .map(|idx| target_indicator(&world.camera, idx, world.stars[idx].pos));

        Self {
            tick: world.time_ticks,
            stars,
            ark,
            camera: world.camera,
            colonized_count: world.colonized_count,
            target_colonies: world.target_colonies,
            victory: world.has_won(),
            game_over: world.is_game_over(),
            target,
        }
    }
}

/// Screen position of a target star, or an edge marker if it is off screen
pub fn target_indicator(camera: &Camera, star: usize, star_pos: Vec2) -> TargetIndicator {
    let screen = camera.world_to_screen(star_pos);
    if camera.is_on_screen(screen) {
        return TargetIndicator::OnScreen { star, screen };
    }
    let center = camera.center();
    let to_target = screen - center;
    let angle = to_target.y.atan2(to_target.x);
    TargetIndicator::OffScreen {
        star,
        marker: center + polar_to_cartesian(INDICATOR_RADIUS, angle),
    }
}
