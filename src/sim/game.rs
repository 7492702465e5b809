//! Per-frame game logic
//!
//! One frame runs `process_input`, then `update` (which does collisions),
//! then `render`. Everything here is single threaded and in place.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::{Collision, check_collision, paddle_bounce, resolve_brick_hit};
use super::entity::{Ball, Entity};
use super::level::{BrickTextures, Level, LevelError, bundled_levels};
use crate::input::{Key, Keys};
use crate::renderer::Renderer;
use crate::resources::{ResourceStore, TextureHandle};
use crate::settings::GameConfig;

/// Which mode the game is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Input, physics and drawing all run
    #[default]
    Active,
    Menu,
    Win,
}

/// Texture handles resolved once at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteTextures {
    pub background: TextureHandle,
    pub ball: TextureHandle,
    pub paddle: TextureHandle,
    pub bricks: BrickTextures,
}

impl SpriteTextures {
    /// Register the game's textures with the store
    pub fn register(resources: &mut ResourceStore) -> Self {
        Self {
            background: resources.load_texture("res/textures/background.jpg", false, "background"),
            ball: resources.load_texture("res/textures/awesomeface.png", true, "face"),
            paddle: resources.load_texture("res/textures/paddle.png", true, "paddle"),
            bricks: BrickTextures {
                block: resources.load_texture("res/textures/block.png", false, "block"),
                solid: resources.load_texture("res/textures/block_solid.png", false, "block_solid"),
            },
        }
    }
}

/// The game: owns the paddle, the ball and every level
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub keys: Keys,
    pub config: GameConfig,
    pub levels: Vec<Level>,
    /// Index into `levels`
    pub level: usize,
    pub player: Entity,
    pub ball: Ball,
    pub textures: SpriteTextures,
}

impl Game {
    /// Create a game over the bundled levels
    pub fn new(config: GameConfig, resources: &mut ResourceStore) -> Result<Self, LevelError> {
        let textures = SpriteTextures::register(resources);
        let levels = bundled_levels(config.width as f32, config.height as f32 / 2.0, textures.bricks)?;
        Ok(Self::with_levels(config, levels, textures))
    }

    /// Create a game over a caller-supplied level set
    pub fn with_levels(config: GameConfig, levels: Vec<Level>, textures: SpriteTextures) -> Self {
        assert!(!levels.is_empty(), "a game needs at least one level");

        let player = Entity::new(initial_player_position(&config), config.player_size, textures.paddle);
        let ball = Ball::new(
            initial_ball_position(&config),
            config.ball_radius,
            config.initial_ball_velocity,
            textures.ball,
        );
        log::info!(
            "Game initialized: {}x{}, {} levels",
            config.width,
            config.height,
            levels.len()
        );

        Self {
            state: GameState::Active,
            keys: Keys::new(),
            config,
            levels,
            level: 0,
            player,
            ball,
            textures,
        }
    }

    fn width(&self) -> f32 {
        self.config.width as f32
    }

    fn height(&self) -> f32 {
        self.config.height as f32
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.level]
    }

    /// Switch to another level. Panics if `index` is out of range.
    pub fn set_level(&mut self, index: usize) {
        assert!(
            index < self.levels.len(),
            "level {index} out of range ({} levels)",
            self.levels.len()
        );
        self.level = index;
    }

    /// Move the paddle and release the ball from held keys
    pub fn process_input(&mut self, dt: f32) {
        if self.state != GameState::Active {
            return;
        }

        let step = self.config.player_velocity * dt;
        let max_x = self.width() - self.player.size.x;
        if self.keys.is_held(Key::Left) {
            self.player.position.x = (self.player.position.x - step).max(0.0);
        }
        if self.keys.is_held(Key::Right) {
            self.player.position.x = (self.player.position.x + step).min(max_x);
        }
        if self.ball.stuck {
            self.ball.entity.position.x =
                self.player.position.x + self.player.size.x / 2.0 - self.ball.radius;
        }
        if self.keys.is_held(Key::Launch) && self.ball.stuck {
            log::debug!("Ball launched");
            self.ball.stuck = false;
        }
    }

    /// Move the ball, resolve collisions and reset if the ball fell out
    pub fn update(&mut self, dt: f32) {
        self.ball.advance(dt, self.width());
        self.do_collisions();

        if self.ball.position().y >= self.height() {
            log::info!("Ball lost, resetting level {}", self.level);
            self.reset_level();
            self.reset_player();
        }
    }

    /// Ball against every live brick, then against the paddle.
    ///
    /// Bricks are resolved one by one against the ball's current state, so two
    /// bricks hit in the same frame may over-correct on one axis.
    pub fn do_collisions(&mut self) {
        let ball = &mut self.ball;
        for brick in self.levels[self.level].bricks.iter_mut() {
            if brick.destroyed {
                continue;
            }
            if let Collision::Hit {
                direction,
                difference,
            } = check_collision(ball, brick)
            {
                if !brick.solid {
                    brick.destroyed = true;
                    log::debug!("Brick at {} destroyed", brick.position);
                }
                resolve_brick_hit(ball, direction, difference);
            }
        }

        if !self.ball.stuck && check_collision(&self.ball, &self.player).is_hit() {
            paddle_bounce(
                &mut self.ball,
                &self.player,
                self.config.initial_ball_velocity.x,
                self.config.paddle_strength,
            );
            log::debug!("Paddle bounce, velocity {}", self.ball.velocity());
        }
    }

    /// Draw background, bricks, paddle and ball in that order
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        if self.state != GameState::Active {
            return;
        }

        renderer.draw_sprite(
            self.textures.background,
            Vec2::ZERO,
            Vec2::new(self.width(), self.height()),
            0.0,
            Vec3::ONE,
        );
        for brick in self.current_level().active_bricks() {
            draw_entity(renderer, brick);
        }
        draw_entity(renderer, &self.player);
        draw_entity(renderer, &self.ball.entity);
    }

    /// Bring back every brick of the current level
    pub fn reset_level(&mut self) {
        self.levels[self.level].reset();
    }

    /// Center the paddle and stick the ball back on it
    pub fn reset_player(&mut self) {
        self.player.position = initial_player_position(&self.config);
        let velocity = self.config.initial_ball_velocity;
        self.ball.reset(initial_ball_position(&self.config), velocity);
    }
}

fn draw_entity<R: Renderer>(renderer: &mut R, entity: &Entity) {
    renderer.draw_sprite(
        entity.texture,
        entity.position,
        entity.size,
        entity.rotation,
        entity.color,
    );
}

fn initial_player_position(config: &GameConfig) -> Vec2 {
    Vec2::new(
        config.width as f32 / 2.0 - config.player_size.x / 2.0,
        config.height as f32 - config.player_size.y,
    )
}

/// Ball resting on top of the paddle's center
fn initial_ball_position(config: &GameConfig) -> Vec2 {
    initial_player_position(config)
        + Vec2::new(
            config.player_size.x / 2.0 - config.ball_radius,
            -config.ball_radius * 2.0,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::renderer::SpriteBatch;

    fn new_game() -> Game {
        Game::new(GameConfig::default(), &mut ResourceStore::new()).unwrap()
    }

    /// Game with a single custom level and the given config
    fn game_with(config: GameConfig, bricks: Vec<Entity>) -> Game {
        let textures = SpriteTextures::register(&mut ResourceStore::new());
        Game::with_levels(config, vec![Level { bricks }], textures)
    }

    fn brick(pos: Vec2, size: Vec2) -> Entity {
        Entity::new(pos, size, TextureHandle(9))
    }

    #[test]
    fn test_initial_layout() {
        let game = new_game();
        assert_eq!(game.state, GameState::Active);
        assert_eq!(game.levels.len(), 4);
        assert_eq!(game.level, 0);
        assert_eq!(game.player.position, Vec2::new(350.0, 580.0));
        assert_eq!(game.ball.position(), Vec2::new(387.5, 555.0));
        assert!(game.ball.stuck);
    }

    #[test]
    fn test_paddle_moves_and_clamps_right() {
        let mut game = new_game();
        game.keys.press(Key::Right);

        game.process_input(0.1);
        assert_eq!(game.player.position.x, 400.0);

        for _ in 0..20 {
            game.process_input(0.1);
        }
        assert_eq!(game.player.position.x, 700.0);
    }

    #[test]
    fn test_paddle_clamps_left() {
        let mut game = new_game();
        game.keys.press(Key::Left);
        for _ in 0..20 {
            game.process_input(0.1);
            assert!(game.player.position.x >= 0.0);
        }
        assert_eq!(game.player.position.x, 0.0);
    }

    #[test]
    fn test_stuck_ball_follows_paddle() {
        let mut game = new_game();
        game.keys.press(Key::Right);
        game.process_input(0.1);
        let expected = game.player.position.x + game.player.size.x / 2.0 - game.ball.radius;
        assert_eq!(game.ball.position().x, expected);
    }

    #[test]
    fn test_launch_unsticks_ball() {
        let mut game = new_game();
        game.keys.press(Key::Launch);
        game.process_input(SIM_DT);
        assert!(!game.ball.stuck);

        // Once free the ball ignores paddle movement
        game.keys.release(Key::Launch);
        game.keys.press(Key::Left);
        let before = game.ball.position().x;
        game.process_input(0.1);
        assert_eq!(game.ball.position().x, before);
    }

    #[test]
    fn test_input_ignored_outside_active() {
        let mut game = new_game();
        game.state = GameState::Menu;
        game.keys.press(Key::Right);
        game.keys.press(Key::Launch);
        game.process_input(0.1);
        assert_eq!(game.player.position.x, 350.0);
        assert!(game.ball.stuck);
    }

    #[test]
    fn test_ball_hits_brick_from_below() {
        let target = brick(Vec2::new(390.0, 290.0), Vec2::new(60.0, 20.0));
        let mut game = game_with(GameConfig::default(), vec![target]);
        game.ball.entity.position = Vec2::new(400.0, 300.0);
        game.ball.entity.velocity = Vec2::new(100.0, -350.0);
        game.ball.stuck = false;

        game.do_collisions();

        assert!(game.levels[0].bricks[0].destroyed);
        assert_eq!(game.ball.velocity(), Vec2::new(100.0, 350.0));
        assert_eq!(game.ball.position(), Vec2::new(400.0, 310.0));
    }

    #[test]
    fn test_destroyed_brick_is_skipped() {
        let target = brick(Vec2::new(390.0, 290.0), Vec2::new(60.0, 20.0));
        let mut game = game_with(GameConfig::default(), vec![target]);
        game.levels[0].bricks[0].destroyed = true;
        game.ball.entity.position = Vec2::new(400.0, 300.0);
        game.ball.entity.velocity = Vec2::new(100.0, -350.0);
        game.ball.stuck = false;

        for _ in 0..3 {
            game.do_collisions();
        }
        assert!(game.levels[0].bricks[0].destroyed);
        assert_eq!(game.ball.velocity(), Vec2::new(100.0, -350.0));
        assert_eq!(game.ball.position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_two_bricks_same_frame_resolve_in_order() {
        let bricks = vec![
            brick(Vec2::new(350.0, 290.0), Vec2::new(60.0, 20.0)),
            brick(Vec2::new(410.0, 290.0), Vec2::new(60.0, 20.0)),
        ];
        let mut game = game_with(GameConfig::default(), bricks);
        game.ball.entity.position = Vec2::new(397.5, 300.0);
        game.ball.entity.velocity = Vec2::new(0.0, -350.0);
        game.ball.stuck = false;

        game.do_collisions();

        // The second brick sees the ball already pushed out by the first:
        // it still flips the velocity back but adds no correction
        assert!(game.levels[0].bricks.iter().all(|b| b.destroyed));
        assert_eq!(game.ball.velocity(), Vec2::new(0.0, -350.0));
        assert_eq!(game.ball.position(), Vec2::new(397.5, 310.0));
    }

    #[test]
    fn test_center_inside_brick_pushes_up() {
        let target = brick(Vec2::new(100.0, 100.0), Vec2::new(60.0, 20.0));
        let mut game = game_with(GameConfig::default(), vec![target]);
        // Ball center at (130, 110), the brick's center
        game.ball.entity.position = Vec2::new(117.5, 97.5);
        game.ball.entity.velocity = Vec2::new(0.0, 200.0);
        game.ball.stuck = false;

        game.do_collisions();

        assert!(game.levels[0].bricks[0].destroyed);
        assert_eq!(game.ball.velocity(), Vec2::new(0.0, -200.0));
        assert_eq!(game.ball.position(), Vec2::new(117.5, 85.0));
    }

    #[test]
    fn test_solid_brick_survives_but_reflects() {
        let target = brick(Vec2::new(390.0, 290.0), Vec2::new(60.0, 20.0)).with_solid(true);
        let mut game = game_with(GameConfig::default(), vec![target]);
        game.ball.entity.position = Vec2::new(400.0, 300.0);
        game.ball.entity.velocity = Vec2::new(100.0, -350.0);
        game.ball.stuck = false;

        game.do_collisions();
        assert!(!game.levels[0].bricks[0].destroyed);
        assert_eq!(game.ball.velocity().y, 350.0);
    }

    #[test]
    fn test_paddle_bounce_preserves_speed() {
        let mut game = game_with(GameConfig::default(), Vec::new());
        game.ball.stuck = false;
        game.ball.entity.position = Vec2::new(420.0, 560.0);
        game.ball.entity.velocity = Vec2::new(-120.0, 300.0);
        let before = game.ball.velocity().length();

        game.do_collisions();

        let after = game.ball.velocity();
        assert!((after.length() - before).abs() < 1e-3);
        assert!(after.y < 0.0);
        assert!(after.x > 0.0);
    }

    #[test]
    fn test_stuck_ball_ignores_paddle() {
        let mut game = game_with(GameConfig::default(), Vec::new());
        let before = game.ball.velocity();
        game.do_collisions();
        assert_eq!(game.ball.velocity(), before);
    }

    #[test]
    fn test_ball_lost_resets_level_and_player() {
        let config = GameConfig {
            height: 480,
            ..GameConfig::default()
        };
        let bricks = vec![
            brick(Vec2::new(0.0, 0.0), Vec2::new(80.0, 20.0)),
            brick(Vec2::new(80.0, 0.0), Vec2::new(80.0, 20.0)),
        ];
        let mut game = game_with(config, bricks);
        for brick in &mut game.levels[0].bricks {
            brick.destroyed = true;
        }
        game.player.position.x = 10.0;
        game.ball.stuck = false;
        game.ball.entity.position = Vec2::new(600.0, 480.0);
        game.ball.entity.velocity = Vec2::ZERO;

        game.update(SIM_DT);

        assert!(game.levels[0].bricks.iter().all(|b| !b.destroyed));
        assert_eq!(game.player.position, Vec2::new(350.0, 460.0));
        assert_eq!(game.ball.position(), Vec2::new(387.5, 435.0));
        assert_eq!(game.ball.velocity(), Vec2::new(100.0, -350.0));
        assert!(game.ball.stuck);
    }

    #[test]
    fn test_update_moves_free_ball() {
        let mut game = game_with(GameConfig::default(), Vec::new());
        game.ball.stuck = false;
        game.ball.entity.position = Vec2::new(400.0, 300.0);
        game.ball.entity.velocity = Vec2::new(100.0, -350.0);
        game.update(0.1);
        assert!((game.ball.position() - Vec2::new(410.0, 265.0)).length() < 1e-3);
    }

    #[test]
    fn test_render_order() {
        let game = new_game();
        let mut batch = SpriteBatch::new();
        game.render(&mut batch);

        let sprites = batch.instances();
        let bricks = game.current_level().active_bricks().count();
        assert_eq!(sprites.len(), bricks + 3);
        assert_eq!(sprites[0].texture, game.textures.background.0);
        assert_eq!(sprites[0].size, [800.0, 600.0]);
        assert_eq!(sprites[bricks + 1].texture, game.textures.paddle.0);
        assert_eq!(sprites[bricks + 2].texture, game.textures.ball.0);
    }

    #[test]
    fn test_render_skips_destroyed_bricks() {
        let mut game = new_game();
        let total = game.levels[0].bricks.len();
        game.levels[0].bricks[0].destroyed = true;
        let mut batch = SpriteBatch::new();
        game.render(&mut batch);
        assert_eq!(batch.len(), total - 1 + 3);
    }

    #[test]
    fn test_render_inert_outside_active() {
        let mut game = new_game();
        game.state = GameState::Win;
        let mut batch = SpriteBatch::new();
        game.render(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_set_level_switches_bricks() {
        let mut game = new_game();
        game.set_level(3);
        assert_eq!(game.level, 3);
        assert_eq!(game.current_level().bricks.len(), game.levels[3].bricks.len());
        game.levels[3].bricks[1].destroyed = true;
        game.reset_level();
        assert!(!game.levels[3].bricks[1].destroyed);
    }

    #[test]
    #[should_panic]
    fn test_set_level_out_of_range_panics() {
        let mut game = new_game();
        game.set_level(4);
    }
}
