//! Skyline Dash: a side-scrolling rock-dodging arcade game
//!
//! Run and jump over rocks rolling in from the right while the clock counts
//! how long you last. One hit ends the run; R starts a new one.
//!
//! - Fixed 60 FPS loop with frame-based physics (gravity + jump impulse)
//! - AABB collision between the player and every rock
//! - Optional background/sprite images with procedural fallbacks

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod asset;
mod config;
mod game;
mod input;
mod scene;

use macroquad::prelude::{get_time, next_frame, prevent_quit, Conf};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use config::{GameConfig, CONFIG_PATH};
use game::{GameState, Transition, wait_for_frame};
use input::InputState;
use scene::Scene;

fn window_conf() -> Conf {
    let config = read_config_quiet();
    Conf {
        window_title: format!("Skyline Dash v{}", VERSION),
        window_width: config.window_width.round() as i32,
        window_height: config.window_height.round() as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Config for window creation, before logging is meaningful
fn read_config_quiet() -> GameConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        GameConfig::load_from_path(std::path::Path::new(CONFIG_PATH)).unwrap_or_default()
    }
    #[cfg(target_arch = "wasm32")]
    {
        GameConfig::default()
    }
}

/// Load `config.ron` if present. A missing file means defaults; a broken one
/// is reported and also means defaults.
async fn load_config() -> GameConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = std::path::Path::new(CONFIG_PATH);
        if !path.exists() {
            println!("No {} found, using defaults", CONFIG_PATH);
            return GameConfig::default();
        }
        match GameConfig::load_from_path(path) {
            Ok(config) => {
                println!("Loaded config from {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}, using defaults", CONFIG_PATH, e);
                GameConfig::default()
            }
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        // Can't tell "missing" from "unreachable" over HTTP
        let Ok(source) = macroquad::file::load_string(CONFIG_PATH).await else {
            return GameConfig::default();
        };
        match GameConfig::from_ron(&source) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}, using defaults", CONFIG_PATH, e);
                GameConfig::default()
            }
        }
    }
}

/// Game seed plus a generator for the backdrop. The game seed is drawn first,
/// so the rock sequence does not depend on which images were found.
fn split_seed(seed: u64) -> (u64, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let game_seed = rng.gen();
    (game_seed, rng)
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Window close becomes a Quit command instead of killing the loop
    prevent_quit();

    let config = load_config().await;
    let fps_limit = config.fps_limit;

    let seed = config
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
    let (game_seed, mut scene_rng) = split_seed(seed);

    let scene = Scene::load(&config, &mut scene_rng).await;
    let mut input = InputState::new();
    let mut state = GameState::new(config, game_seed, get_time());

    println!("=== Skyline Dash v{} ===", VERSION);
    println!("Seed: {}, FPS limit: {}", seed, fps_limit.label());
    if input.has_gamepad() {
        println!("Gamepad connected");
    }

    loop {
        let frame_start = get_time();

        input.poll();
        let commands = input.commands();
        if commands.quit {
            break;
        }

        match state.step(&commands, get_time()) {
            Some(Transition::GameOver { final_time }) => println!("Game over after {}s", final_time),
            Some(Transition::Restarted) => println!("Restarted"),
            None => {}
        }

        scene.draw(&state);
        next_frame().await;

        wait_for_frame(fps_limit, frame_start);
    }

    println!("Bye");
}
