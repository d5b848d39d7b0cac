//! A play session: one live world plus the input latching around it
//!
//! The front-end hands over raw held-key state each frame. The session turns
//! build and restart keys into press events, restarts dead runs on request,
//! and ticks the world once per frame.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::Settings;
use crate::sim::{GameWorld, Scene, TickInput, tick};

#[derive(Debug)]
pub struct Session {
    settings: Settings,
    world: GameWorld,
    /// Seeds each new run
    rng: Pcg32,
    /// Raw key state from the previous frame
    prev_held: TickInput,
    restarts: u32,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let base_seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg32::seed_from_u64(base_seed);
        let world = GameWorld::with_viewport(rng.random(), settings.viewport());
        log::info!("Session started (base seed {})", base_seed);

        Self {
            settings,
            world,
            rng,
            prev_held: TickInput::default(),
            restarts: 0,
        }
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn scene(&self) -> Scene {
        self.world.scene()
    }

    /// Advance one frame from the raw held-key state
    pub fn step(&mut self, held: &TickInput) {
        let input = self.latch(held);
        self.prev_held = *held;

        if input.restart && !self.world.ark.alive {
            self.restart();
        }

        tick(&mut self.world, &input);
    }

    /// Discard the current world and start a fresh run
    pub fn restart(&mut self) {
        let seed = self.rng.random();
        self.world = GameWorld::with_viewport(seed, self.settings.viewport());
        self.restarts += 1;
        log::info!("Restarted (run {}, seed {})", self.restarts + 1, seed);
    }

    /// Movement keys pass through as held state. Restart, and build keys when
    /// configured, only fire on the frame they go down.
    fn latch(&self, held: &TickInput) -> TickInput {
        let pressed = |now: bool, before: bool| now && !before;
        let prev = &self.prev_held;

        let (build_battery, synthesize_fuel) = if self.settings.edge_triggered_builds {
            (
                pressed(held.build_battery, prev.build_battery),
                pressed(held.synthesize_fuel, prev.synthesize_fuel),
            )
        } else {
            (held.build_battery, held.synthesize_fuel)
        };

        TickInput {
            rotate_left: held.rotate_left,
            rotate_right: held.rotate_right,
            thrust: held.thrust,
            build_battery,
            synthesize_fuel,
            restart: pressed(held.restart, prev.restart),
        }
    }
}
