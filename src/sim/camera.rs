//! Follow camera: world-to-screen transform with eased tracking

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World position shown at the viewport centre
    pub origin: Vec2,
    /// World-to-screen scale (fixed for the session)
    pub scale: f32,
    /// Viewport size in screen units
    pub viewport: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT))
    }
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: CAMERA_SCALE,
            viewport,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.origin) * self.scale + self.center()
    }

    /// Move a fixed fraction of the remaining distance toward `target`.
    /// The camera lags behind a moving target rather than snapping to it.
    pub fn update(&mut self, target: Vec2) {
        self.origin += (target - self.origin) * CAMERA_SMOOTHING;
    }

    pub fn is_on_screen(&self, screen: Vec2) -> bool {
        screen.x >= 0.0 && screen.x <= self.viewport.x && screen.y >= 0.0 && screen.y <= self.viewport.y
    }
}
