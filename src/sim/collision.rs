//! Collision detection and response for the ball
//!
//! The ball is a circle, everything it can hit is an axis-aligned box. A hit
//! is classified into one of four directions which decides the reflection
//! axis and the penetration correction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Entity};

/// Dominant direction of the difference vector from ball center to the
/// closest point on the box (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Compass in comparison order; earlier entries win ties
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Result of a ball vs box test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    Miss,
    Hit {
        direction: Direction,
        /// Closest point on the box minus the ball center
        difference: Vec2,
    },
}

impl Collision {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Collision::Hit { .. })
    }
}

/// Which compass direction `target` points at the most.
///
/// Only strictly larger dot products replace the current best, so ties go to
/// the direction listed first in [`Direction::ALL`]. A zero vector maps to Up.
pub fn vector_direction(target: Vec2) -> Direction {
    let dir = target.normalize_or_zero();
    let mut max = 0.0;
    let mut best = Direction::Up;
    for candidate in Direction::ALL {
        let dot = dir.dot(candidate.unit());
        if dot > max {
            max = dot;
            best = candidate;
        }
    }
    best
}

/// Circle vs AABB test. Touching counts as a hit.
pub fn check_collision(ball: &Ball, target: &Entity) -> Collision {
    let center = ball.center();
    let half_extents = target.half_extents();
    let aabb_center = target.center();

    // Closest point on the box to the circle center
    let clamped = (center - aabb_center).clamp(-half_extents, half_extents);
    let closest = aabb_center + clamped;
    let difference = closest - center;

    if difference.length() <= ball.radius {
        Collision::Hit {
            direction: vector_direction(difference),
            difference,
        }
    } else {
        Collision::Miss
    }
}

/// Reflect the ball off a brick it hit and push it back out along one axis
pub fn resolve_brick_hit(ball: &mut Ball, direction: Direction, difference: Vec2) {
    let radius = ball.radius;
    let e = &mut ball.entity;
    if direction.is_horizontal() {
        e.velocity.x = -e.velocity.x;
        let penetration = radius - difference.x.abs();
        if direction == Direction::Left {
            e.position.x += penetration;
        } else {
            e.position.x -= penetration;
        }
    } else {
        e.velocity.y = -e.velocity.y;
        let penetration = radius - difference.y.abs();
        if direction == Direction::Up {
            e.position.y -= penetration;
        } else {
            e.position.y += penetration;
        }
    }
}

/// Bounce the ball off the paddle.
///
/// Horizontal speed depends on how far from the paddle center the ball landed
/// (-1 at the left edge, +1 at the right), vertical velocity always points up,
/// and the overall speed is kept.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Entity, launch_speed_x: f32, strength: f32) {
    let center_board = paddle.position.x + paddle.size.x / 2.0;
    let distance = ball.center().x - center_board;
    let percentage = distance / (paddle.size.x / 2.0);

    let old_velocity = ball.entity.velocity;
    let bent = Vec2::new(launch_speed_x * percentage * strength, -old_velocity.y.abs());
    ball.entity.velocity = bent.normalize_or_zero() * old_velocity.length();
}
