//! Brick Breaker entry point
//!
//! Native headless driver: runs the fixed-timestep loop with a simple
//! autopilot on the paddle and reports what happened.

use brick_breaker::consts::{MAX_SUBSTEPS, SIM_DT};
use brick_breaker::renderer::SpriteBatch;
use brick_breaker::sim::Game;
use brick_breaker::{GameConfig, Key, ResourceStore};

/// Simulated wall-clock frame time (slightly uneven to exercise substepping)
const FRAME_DT: f32 = 1.0 / 50.0;
/// Frames to run before exiting
const FRAMES: u32 = 3000;

/// Hold Left/Right to keep the paddle under the ball, launch when stuck
fn autopilot(game: &mut Game) {
    let paddle_center = game.player.position.x + game.player.size.x / 2.0;
    let ball_center = game.ball.center().x;

    game.keys.release_all();
    if game.ball.stuck {
        game.keys.press(Key::Launch);
    } else if ball_center < paddle_center - 10.0 {
        game.keys.press(Key::Left);
    } else if ball_center > paddle_center + 10.0 {
        game.keys.press(Key::Right);
    }
}

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };

    let mut resources = ResourceStore::new();
    resources.load_shader("res/shaders/sprite/vertex.glsl", "res/shaders/sprite/fragment.glsl", "sprite");
    let mut game = match Game::new(config, &mut resources) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to load levels: {}", e);
            std::process::exit(1);
        }
    };

    let mut batch = SpriteBatch::new();
    let mut accumulator = 0.0;
    let mut sprites_drawn = 0usize;

    for frame in 0..FRAMES {
        accumulator += FRAME_DT;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            autopilot(&mut game);
            game.process_input(SIM_DT);
            game.update(SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        batch.clear();
        game.render(&mut batch);
        sprites_drawn += batch.len();

        if game.current_level().is_completed() {
            log::info!("Level {} cleared at frame {}", game.level, frame);
            break;
        }
    }

    let level = game.current_level();
    let remaining = level.bricks.iter().filter(|b| !b.solid && !b.destroyed).count();
    println!(
        "Level {}: {} destructible bricks left, {} sprites drawn ({} bytes last frame)",
        game.level,
        remaining,
        sprites_drawn,
        batch.as_bytes().len()
    );

    resources.clear();
}
