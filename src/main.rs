//! Fruitfall main entry point.
//!
//! A small "catch the falling item" game built with:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Fruit falls from the top of the play area; catch it to score, dodge the
//! ice cubes or lose a life. The session ends at zero lives.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Load the catalog and textures, spawn the scene ([`game::setup`])
//! 3. Register observers and systems
//! 4. Run the main loop in a fixed per-tick order:
//!    input, player movement, collisions, falling items, animation, render
//! 5. Exit on window close, Esc, or game over
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::warn;

use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::GameSession;
use crate::resources::spawner::ItemSpawner;
use crate::resources::worldtime::WorldTime;
use crate::resources::animationclock::AnimationClock;
use crate::systems::animation::animation;
use crate::systems::catch::catch_observer;
use crate::systems::collision::collision_detector;
use crate::systems::falling::falling;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::update_input_state;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Fruitfall: catch the fruit, dodge the ice.
#[derive(Parser)]
#[command(version, about = "Catch the falling fruit, dodge the ice cubes.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the gameplay random generator (defaults to wall-clock time).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::new();
    if let Some(path) = cli.config {
        config = config.with_config_path(path);
    }
    if let Err(e) = config.load_from_file() {
        warn!("using default configuration: {}", e);
    }

    // One generator for the whole session, seeded once.
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Fruitfall")
        .build();
    rl.set_target_fps(config.target_fps);
    // Esc is handled by the input system instead of closing the window.
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(AnimationClock::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(ItemSpawner::new(config.item_speed, seed));
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(catch_observer));
    // Ensure observers are registered before any system triggers events.
    world.flush();

    world.resource_mut::<GameState>().set(GameStates::Setup);
    game::setup(&mut world);

    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Playing);
    }
    world.trigger(GameStateChangedEvent {});

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        player_controller
            .run_if(state_is_playing)
            .after(update_input_state),
    );
    update.add_systems(
        collision_detector
            .run_if(state_is_playing)
            .after(player_controller),
    );
    update.add_systems(falling.run_if(state_is_playing).after(collision_detector));
    update.add_systems(animation.after(falling));
    update.add_systems(render_system.after(animation));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    loop {
        if world
            .non_send_resource::<raylib::RaylibHandle>()
            .window_should_close()
        {
            break;
        }
        if matches!(
            world.resource::<GameState>().get(),
            GameStates::GameOver | GameStates::Quitting
        ) {
            break;
        }

        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }

    let session = world.resource::<GameSession>();
    log::info!(
        "Session ended with score {} and {} lives left",
        session.score,
        session.displayed_lives()
    );
}
