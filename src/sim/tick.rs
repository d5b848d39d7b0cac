//! Fixed timestep simulation tick
//!
//! Advances a `GameWorld` by one frame: craft physics, camera, build orders,
//! colonization and star generation, in that order.

use glam::Vec2;

use super::ark::Ark;
use super::physics::distance;
use super::state::GameWorld;
use crate::consts::*;

pub const MSG_BATTERY: &str = "Battery Upgraded.";
pub const MSG_FUEL: &str = "Fuel Synthesized.";
pub const MSG_TOO_FAST: &str = "Too Fast to Colonize! Slow Down!";
pub const MSG_COLONIZED: &str = "Colonization Complete! Supplies Added.";

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// Key 1: trade matter for battery capacity
    pub build_battery: bool,
    /// Key 2: trade matter and energy for fuel
    pub synthesize_fuel: bool,
    /// Start a new run (only honoured once the Ark is dead)
    pub restart: bool,
}

/// Advance the world by one tick.
///
/// Build commands fire on every tick their flag is set; callers that want
/// one purchase per key press must pass press events, not held state.
pub fn tick(world: &mut GameWorld, input: &TickInput) {
    let proximity = world.ark.update(&world.stars, input);
    if !world.ark.alive {
        return;
    }
    world.time_ticks += 1;

    world.camera.update(world.ark.pos);

    apply_build_commands(&mut world.ark, input);

    if let Some(idx) = proximity.nearest {
        colonize(world, idx, proximity.distance);
    }

    check_generation(world);
}

/// Spend matter on upgrades
pub(crate) fn apply_build_commands(ark: &mut Ark, input: &TickInput) {
    if input.build_battery && ark.matter >= BATTERY_MATTER_COST {
        ark.matter -= BATTERY_MATTER_COST;
        ark.max_energy += BATTERY_CAPACITY_GAIN;
        ark.set_status(MSG_BATTERY);
        log::debug!("Battery upgraded, capacity {}", ark.max_energy);
    }

    if input.synthesize_fuel && ark.matter >= FUEL_MATTER_COST && ark.energy >= FUEL_ENERGY_COST {
        ark.matter -= FUEL_MATTER_COST;
        ark.energy -= FUEL_ENERGY_COST;
        ark.fuel += FUEL_YIELD;
        ark.set_status(MSG_FUEL);
        log::debug!("Fuel synthesized, fuel {:.1}", ark.fuel);
    }
}

/// Run the colonization state machine for the star nearest the Ark.
///
/// Progress rises while the Ark sits slowly inside the habitable zone and
/// decays (never below zero) once it leaves. Colonized stars are terminal.
pub(crate) fn colonize(world: &mut GameWorld, star_idx: usize, dist: f32) {
    let speed = world.ark.speed();
    let Some(star) = world.stars.get_mut(star_idx) else {
        return;
    };
    if star.colonized {
        return;
    }

    let in_zone = star.in_habitable_zone(dist);
    if in_zone && speed < COLONIZE_MAX_SPEED {
        star.progress += COLONIZE_SPEED;
        world
            .ark
            .set_status(format!("Colonizing... {}%", star.progress as i32));

        if star.progress >= PROGRESS_COMPLETE {
            star.progress = PROGRESS_COMPLETE;
            star.colonized = true;
            world.colonized_count += 1;

            let ark = &mut world.ark;
            ark.matter += COLONY_MATTER_REWARD;
            ark.fuel += COLONY_FUEL_REWARD;
            ark.energy = ark.max_energy;
            ark.set_status(MSG_COLONIZED);

            log::info!(
                "Star {} colonized ({}/{})",
                star.level,
                world.colonized_count,
                world.target_colonies
            );
            if world.colonized_count == world.target_colonies {
                log::info!("Victory: {} colonies established", world.colonized_count);
            }
        }
    } else if in_zone {
        world.ark.set_status(MSG_TOO_FAST);
    } else if star.progress > 0.0 {
        star.progress = (star.progress - PROGRESS_DECAY).max(0.0);
    }
}

/// Spawn a new star each time the Ark pushes another GEN_DISTANCE past its
/// previous spawn point
pub(crate) fn check_generation(world: &mut GameWorld) {
    let dist_from_origin = distance(Vec2::ZERO, world.ark.pos);
    if dist_from_origin > world.max_dist_gen + GEN_DISTANCE {
        world.max_dist_gen = dist_from_origin;
        world.spawn_star_ahead();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ark::{MSG_CRASHED, MSG_FROZEN};
    use crate::sim::star::Star;
    use proptest::prelude::*;

    /// World with one uncolonized radius-60 star far from the origin,
    /// and the Ark parked at rest `dist` away from it
    fn world_near_target(dist: f32) -> (GameWorld, usize) {
        let mut world = GameWorld::new(12345);
        let star_pos = Vec2::new(20_000.0, 0.0);
        world.stars.push(Star::with_radius(star_pos, 1, 60.0));
        world.ark.pos = star_pos - Vec2::new(0.0, dist);
        world.ark.vel = Vec2::ZERO;
        // Keep generation out of the way
        world.max_dist_gen = 1.0e6;
        (world, 1)
    }

    #[test]
    fn test_battery_upgrade() {
        let mut world = GameWorld::new(1);
        let input = TickInput {
            build_battery: true,
            ..Default::default()
        };
        apply_build_commands(&mut world.ark, &input);
        assert_eq!(world.ark.matter, 150.0);
        assert_eq!(world.ark.max_energy, 600.0);
        assert_eq!(world.ark.status, MSG_BATTERY);

        world.ark.matter = 49.0;
        apply_build_commands(&mut world.ark, &input);
        assert_eq!(world.ark.matter, 49.0);
        assert_eq!(world.ark.max_energy, 600.0);
    }

    #[test]
    fn test_fuel_synthesis() {
        let mut world = GameWorld::new(1);
        let input = TickInput {
            synthesize_fuel: true,
            ..Default::default()
        };
        apply_build_commands(&mut world.ark, &input);
        assert_eq!(world.ark.matter, 180.0);
        assert_eq!(world.ark.energy, 450.0);
        assert_eq!(world.ark.fuel, 550.0);
        assert_eq!(world.ark.status, MSG_FUEL);

        // Not enough energy
        world.ark.energy = 49.0;
        apply_build_commands(&mut world.ark, &input);
        assert_eq!(world.ark.fuel, 550.0);
        assert_eq!(world.ark.matter, 180.0);

        // Not enough matter
        world.ark.energy = 400.0;
        world.ark.matter = 19.0;
        apply_build_commands(&mut world.ark, &input);
        assert_eq!(world.ark.fuel, 550.0);
    }

    #[test]
    fn test_held_build_key_repeats_every_tick() {
        let mut world = GameWorld::new(1);
        let input = TickInput {
            build_battery: true,
            ..Default::default()
        };
        for _ in 0..10 {
            apply_build_commands(&mut world.ark, &input);
        }
        // 200 matter buys exactly four upgrades
        assert_eq!(world.ark.matter, 0.0);
        assert_eq!(world.ark.max_energy, 900.0);
    }

    #[test]
    fn test_colonization_progress_and_rewards() {
        let (mut world, idx) = world_near_target(300.0);
        let mut ticks = 0;
        let mut last = 0.0;

        while !world.stars[idx].colonized {
            colonize(&mut world, idx, 300.0);
            ticks += 1;
            let progress = world.stars[idx].progress;
            if !world.stars[idx].colonized {
                assert!((progress - last - 0.3).abs() < 1e-3);
                assert!(world.ark.status.starts_with("Colonizing..."));
            }
            last = progress;
            assert!(ticks <= 400, "never colonized");
        }

        assert_eq!(ticks, 334);
        assert_eq!(world.stars[idx].progress, 100.0);
        assert_eq!(world.colonized_count, 2);
        assert_eq!(world.ark.matter, 400.0);
        assert_eq!(world.ark.fuel, 700.0);
        assert_eq!(world.ark.energy, world.ark.max_energy);
        assert_eq!(world.ark.status, MSG_COLONIZED);

        // Rewards are granted once
        world.ark.energy = 10.0;
        for _ in 0..10 {
            colonize(&mut world, idx, 300.0);
        }
        assert_eq!(world.colonized_count, 2);
        assert_eq!(world.ark.matter, 400.0);
        assert_eq!(world.ark.energy, 10.0);
    }

    #[test]
    fn test_colonizing_status_shows_percent() {
        let (mut world, idx) = world_near_target(300.0);
        world.stars[idx].progress = 41.9;
        colonize(&mut world, idx, 300.0);
        assert_eq!(world.ark.status, "Colonizing... 42%");
    }

    #[test]
    fn test_too_fast_blocks_progress() {
        let (mut world, idx) = world_near_target(300.0);
        world.stars[idx].progress = 10.0;
        world.ark.vel = Vec2::new(3.0, 0.0);

        for _ in 0..5 {
            colonize(&mut world, idx, 300.0);
            assert_eq!(world.stars[idx].progress, 10.0);
        }
        assert_eq!(world.ark.status, MSG_TOO_FAST);
    }

    #[test]
    fn test_progress_decays_outside_zone() {
        let (mut world, idx) = world_near_target(1000.0);
        world.stars[idx].progress = 10.0;
        colonize(&mut world, idx, 1000.0);
        assert!((world.stars[idx].progress - 9.9).abs() < 1e-4);

        world.stars[idx].progress = 0.05;
        colonize(&mut world, idx, 1000.0);
        assert_eq!(world.stars[idx].progress, 0.0);

        colonize(&mut world, idx, 1000.0);
        assert_eq!(world.stars[idx].progress, 0.0);
    }

    #[test]
    fn test_colonized_star_ignored() {
        let mut world = GameWorld::new(3);
        let status = world.ark.status.clone();
        colonize(&mut world, 0, 300.0);
        assert_eq!(world.colonized_count, 1);
        assert_eq!(world.ark.status, status);
    }

    #[test]
    fn test_full_tick_colonizes_nearest() {
        let (mut world, idx) = world_near_target(300.0);
        tick(&mut world, &TickInput::default());
        assert!(world.ark.alive);
        assert!((world.stars[idx].progress - 0.3).abs() < 1e-5);
        assert_eq!(world.ark.status, "Colonizing... 0%");
    }

    #[test]
    fn test_generation_threshold() {
        let mut world = GameWorld::new(99);
        world.ark.vel = Vec2::new(1.0, 0.0);

        world.ark.pos = Vec2::new(2999.0, 0.0);
        check_generation(&mut world);
        assert_eq!(world.stars.len(), 1);

        world.ark.pos = Vec2::new(3001.5, 0.0);
        check_generation(&mut world);
        assert_eq!(world.stars.len(), 2);
        assert_eq!(world.max_dist_gen, 3001.5);
        assert_eq!(world.stars[1].level, 1);

        // No second spawn until another 3000 beyond the trigger point
        world.ark.pos = Vec2::new(6000.0, 0.0);
        check_generation(&mut world);
        assert_eq!(world.stars.len(), 2);

        world.ark.pos = Vec2::new(6002.0, 0.0);
        check_generation(&mut world);
        assert_eq!(world.stars.len(), 3);
        assert_eq!(world.max_dist_gen, 6002.0);
        assert_eq!(world.stars[2].level, 2);
    }

    #[test]
    fn test_death_short_circuits_tick() {
        let mut world = GameWorld::new(5);
        world.ark.pos = Vec2::new(0.0, -65.0);
        let input = TickInput {
            build_battery: true,
            ..Default::default()
        };
        tick(&mut world, &input);

        assert!(!world.ark.alive);
        assert_eq!(world.ark.status, MSG_CRASHED);
        assert_eq!(world.ark.matter, 200.0);
        assert_eq!(world.camera.origin, Vec2::ZERO);
        assert_eq!(world.time_ticks, 0);
        assert!(world.is_game_over());

        // Dead worlds stay frozen
        let pos = world.ark.pos;
        tick(&mut world, &input);
        assert_eq!(world.ark.pos, pos);
    }

    #[test]
    fn test_victory_is_display_only() {
        let (mut world, idx) = world_near_target(300.0);
        world.colonized_count = 4;
        world.stars[idx].progress = 99.9;
        colonize(&mut world, idx, 300.0);
        assert!(world.has_won());
        assert_eq!(world.colonized_count, 5);

        // Simulation carries on and the Ark can still die
        world.ark.pos = Vec2::new(-100_000.0, 0.0);
        world.ark.energy = 0.1;
        tick(&mut world, &TickInput::default());
        assert!(!world.ark.alive);
        assert_eq!(world.ark.status, MSG_FROZEN);
        assert!(world.has_won());
    }

    #[test]
    fn test_camera_follows_ark() {
        let mut world = GameWorld::new(8);
        tick(&mut world, &TickInput::default());
        let expected = world.ark.pos * 0.05;
        assert!((world.camera.origin - expected).length() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        let mut world1 = GameWorld::new(99999);
        let mut world2 = GameWorld::new(99999);

        let inputs = [
            TickInput {
                thrust: true,
                ..Default::default()
            },
            TickInput {
                rotate_left: true,
                thrust: true,
                ..Default::default()
            },
            TickInput {
                synthesize_fuel: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut world1, input);
                tick(&mut world2, input);
            }
        }

        assert_eq!(world1.time_ticks, world2.time_ticks);
        assert_eq!(world1.stars.len(), world2.stars.len());
        assert_eq!(world1.ark.pos, world2.ark.pos);
        assert_eq!(world1.ark.fuel, world2.ark.fuel);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<[bool; 5]>()).prop_map(|b| TickInput {
            rotate_left: b[0],
            rotate_right: b[1],
            thrust: b[2],
            build_battery: b[3],
            synthesize_fuel: b[4],
            restart: false,
        })
    }

    proptest! {
        #[test]
        fn prop_energy_never_exceeds_capacity(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..300),
        ) {
            let mut world = GameWorld::new(seed);
            for input in &inputs {
                tick(&mut world, input);
                prop_assert!(world.ark.energy <= world.ark.max_energy);
                for star in &world.stars {
                    prop_assert!((0.0..=100.0).contains(&star.progress));
                    prop_assert!(!star.colonized || star.progress == 100.0);
                }
            }
        }

        #[test]
        fn prop_depleted_ark_is_dead(
            energy in 0.0f32..1.0,
            thrust in any::<bool>(),
        ) {
            // Deep space: nothing to recharge from
            let mut world = GameWorld::new(1);
            world.ark.pos = glam::Vec2::new(0.0, -100_000.0);
            world.ark.energy = energy;
            let input = TickInput { thrust, ..Default::default() };
            let stars = world.stars.clone();
            world.ark.update(&stars, &input);
            if world.ark.energy <= 0.0 {
                prop_assert!(!world.ark.alive);
            } else {
                prop_assert!(world.ark.alive);
            }
        }
    }
}
