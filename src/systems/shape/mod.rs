//! Shapes that can move and collide
//!
//! Movement and collision are separate capabilities. `Body` (a circle) is the
//! only shape today and implements both.

mod body;

pub use body::{Body, SpawnOptions};

use crate::domain::palette::Rgba;
use crate::domain::point::Point;

/// Has a position and velocity and can be displaced
pub trait Movable {
    fn id(&self) -> u32;
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);
    /// (velocity_x, velocity_y) in units per step
    fn velocity(&self) -> (f64, f64);
    fn set_velocity(&mut self, vx: f64, vy: f64);

    fn translate(&mut self, dx: f64, dy: f64) {
        let p = self.position();
        self.set_position(Point::new(p.x + dx, p.y + dy));
    }
}

/// Takes part in boundary and collision physics
pub trait CollisionAware: Movable {
    fn radius(&self) -> f64;
    fn immunity(&self) -> i32;
    fn is_settled(&self) -> bool;

    /// Snap tiny horizontal speeds to zero and settle once fully stopped
    fn settle_check(&mut self, stop_threshold: f64, settled_color: Rgba);

    /// Eligible to collide: not immune, not settled
    fn is_collision_candidate(&self) -> bool {
        self.immunity() <= 0 && !self.is_settled()
    }

    /// Circles overlap (touching does not count)
    fn is_collision(&self, other: &dyn CollisionAware) -> bool {
        self.position().distance(other.position()) < self.radius() + other.radius()
    }
}
