//! Movable entities: paddle, bricks and the ball
//!
//! Positions are top-left anchored in screen space (y grows downward).

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::resources::TextureHandle;

/// A rectangular game object (paddle or brick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height (both > 0)
    pub size: Vec2,
    /// Units per second
    pub velocity: Vec2,
    /// Degrees, only used for drawing
    pub rotation: f32,
    pub color: Vec3,
    /// Solid entities are never destroyed by collisions
    pub solid: bool,
    /// Destroyed entities are skipped by collisions and drawing
    pub destroyed: bool,
    /// Sprite used when drawing
    pub texture: TextureHandle,
}

impl Entity {
    pub fn new(position: Vec2, size: Vec2, texture: TextureHandle) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "entity size must be positive, got {size}"
        );
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            color: Vec3::ONE,
            solid: false,
            destroyed: false,
            texture,
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn with_solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }

    /// Center of the bounding box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Half width/height of the bounding box
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// The ball: an entity with circular bounds that can ride on the paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Bounding box is `(2r, 2r)` anchored at the top-left of the circle
    pub entity: Entity,
    pub radius: f32,
    /// While stuck the ball follows the paddle and ignores its velocity
    pub stuck: bool,
}

impl Ball {
    /// Create a ball stuck to the paddle
    pub fn new(position: Vec2, radius: f32, velocity: Vec2, texture: TextureHandle) -> Self {
        assert!(radius > 0.0, "ball radius must be positive, got {radius}");
        let mut entity = Entity::new(position, Vec2::splat(radius * 2.0), texture);
        entity.velocity = velocity;
        Self {
            entity,
            radius,
            stuck: true,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.entity.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.entity.velocity
    }

    /// Center of the circle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.entity.position + self.radius
    }

    /// Integrate velocity and bounce off the left, right and top screen edges.
    ///
    /// Returns the new position. A stuck ball does not move.
    pub fn advance(&mut self, dt: f32, window_width: f32) -> Vec2 {
        if self.stuck {
            return self.entity.position;
        }

        let e = &mut self.entity;
        e.position += e.velocity * dt;

        if e.position.x <= 0.0 {
            e.velocity.x = -e.velocity.x;
            e.position.x = 0.0;
        } else if e.position.x + e.size.x >= window_width {
            e.velocity.x = -e.velocity.x;
            e.position.x = window_width - e.size.x;
        }
        if e.position.y <= 0.0 {
            e.velocity.y = -e.velocity.y;
            e.position.y = 0.0;
        }

        e.position
    }

    /// Put the ball back at `position` with `velocity`, stuck to the paddle
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.entity.position = position;
        self.entity.velocity = velocity;
        self.stuck = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_ball(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(pos, 10.0, vel, TextureHandle::default());
        ball.stuck = false;
        ball
    }

    #[test]
    fn test_stuck_ball_does_not_integrate() {
        let mut ball = Ball::new(
            Vec2::new(100.0, 100.0),
            10.0,
            Vec2::new(50.0, -50.0),
            TextureHandle::default(),
        );
        assert!(ball.stuck);
        ball.advance(1.0, 800.0);
        assert_eq!(ball.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_free_ball_integrates() {
        let mut ball = free_ball(Vec2::new(100.0, 100.0), Vec2::new(50.0, -20.0));
        let pos = ball.advance(0.5, 800.0);
        assert_eq!(pos, Vec2::new(125.0, 90.0));
        assert_eq!(ball.velocity(), Vec2::new(50.0, -20.0));
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = free_ball(Vec2::new(5.0, 100.0), Vec2::new(-100.0, 0.0));
        ball.advance(0.1, 800.0);
        assert_eq!(ball.position().x, 0.0);
        assert_eq!(ball.velocity().x, 100.0);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut ball = free_ball(Vec2::new(775.0, 100.0), Vec2::new(100.0, 0.0));
        ball.advance(0.1, 800.0);
        assert_eq!(ball.position().x, 780.0);
        assert_eq!(ball.velocity().x, -100.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut ball = free_ball(Vec2::new(100.0, 5.0), Vec2::new(0.0, -100.0));
        ball.advance(0.1, 800.0);
        assert_eq!(ball.position().y, 0.0);
        assert_eq!(ball.velocity().y, 100.0);
    }

    #[test]
    fn test_center_offsets_by_radius() {
        let ball = free_ball(Vec2::new(400.0, 300.0), Vec2::ZERO);
        assert_eq!(ball.center(), Vec2::new(410.0, 310.0));
        assert_eq!(ball.entity.size, Vec2::splat(20.0));
    }

    #[test]
    #[should_panic]
    fn test_zero_size_entity_panics() {
        Entity::new(Vec2::ZERO, Vec2::new(0.0, 10.0), TextureHandle::default());
    }
}
