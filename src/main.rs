//! Entropy's Ark entry point
//!
//! Runs the simulation headless: no window, no input. The Ark coasts in its
//! starting orbit for the configured number of ticks and the final scene is
//! printed as JSON.

use entropy_ark::sim::TickInput;
use entropy_ark::{Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Entropy's Ark (headless) starting...");

    let settings = Settings::load();
    let ticks = settings.demo_ticks;
    let mut session = Session::new(settings);

    let idle = TickInput::default();
    for _ in 0..ticks {
        session.step(&idle);
        if session.world().is_game_over() {
            break;
        }
    }

    let scene = session.scene();
    log::info!(
        "Finished after {} ticks: alive={}, colonies {}/{}, stars {}, status \"{}\"",
        scene.tick,
        scene.ark.alive,
        scene.colonized_count,
        scene.target_colonies,
        scene.stars.len(),
        scene.ark.status
    );

    match serde_json::to_string_pretty(&scene) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize scene: {}", e),
    }
}
