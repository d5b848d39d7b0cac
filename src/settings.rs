//! Front-end settings and preferences
//!
//! None of these change the rules of the game; they describe how a front-end
//! hosts it. Read from the `ENTROPY_ARK_SETTINGS` environment variable as JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport size in screen units
    pub viewport_width: f32,
    pub viewport_height: f32,

    /// Fixed run seed (random when unset)
    pub seed: Option<u64>,

    /// Turn held build keys into single presses.
    /// When off, a held key keeps buying upgrades every tick it can afford one.
    pub edge_triggered_builds: bool,

    /// Ticks to simulate in headless mode
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            seed: None,
            edge_triggered_builds: true,
            // One minute at 60 fps
            demo_ticks: 3600,
        }
    }
}

impl Settings {
    /// Environment variable holding a JSON settings object
    const ENV_KEY: &'static str = "ENTROPY_ARK_SETTINGS";

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the environment, falling back to defaults
    pub fn load() -> Self {
        let Ok(json) = std::env::var(Self::ENV_KEY) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::ENV_KEY);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid {}: {}", Self::ENV_KEY, e);
                Self::default()
            }
        }
    }
}
