use crate::domain::palette::Rgba;
use crate::domain::params::PhysicsParams;
use crate::domain::point::Point;

use super::{CollisionAware, Movable};

/// Circular body (a.k.a. ball)
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    id: u32,
    /// Centre of the circle
    pub position: Point,
    /// Units per step, signed
    pub velocity_x: f64,
    pub velocity_y: f64,
    radius: f64,
    pub color: Rgba,
    /// Steps (attenuation ticks) left before the body may collide
    pub immunity: i32,
    /// Terminal: once set the body is out of boundary/collision physics for good
    settled: bool,
}

/// Optional construction values; `None` fields get random or configured defaults
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpawnOptions {
    pub velocity_x: Option<f64>,
    pub velocity_y: Option<f64>,
    pub radius: Option<f64>,
    pub color: Option<Rgba>,
    pub immunity: Option<i32>,
}

impl SpawnOptions {
    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity_x = Some(vx);
        self.velocity_y = Some(vy);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn immunity(mut self, immunity: i32) -> Self {
        self.immunity = Some(immunity);
        self
    }
}

impl Body {
    /// Build a body with fully specified state. `radius` must be positive.
    pub fn new(
        id: u32,
        position: Point,
        velocity_x: f64,
        velocity_y: f64,
        radius: f64,
        color: Rgba,
        immunity: i32,
    ) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            id,
            position,
            velocity_x,
            velocity_y,
            radius,
            color,
            immunity,
            settled: false,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Either velocity component is nonzero
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.velocity_x != 0.0 || self.velocity_y != 0.0
    }

    pub fn is_collision(&self, other: &Body) -> bool {
        CollisionAware::is_collision(self, other)
    }

    /// Settle check using the configured stop threshold and marker colour
    pub fn cleanup(&mut self, params: &PhysicsParams) {
        self.settle_check(params.stop_threshold, params.settled_color);
    }
}

impl Movable for Body {
    fn id(&self) -> u32 {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn velocity(&self) -> (f64, f64) {
        (self.velocity_x, self.velocity_y)
    }

    fn set_velocity(&mut self, vx: f64, vy: f64) {
        self.velocity_x = vx;
        self.velocity_y = vy;
    }
}

impl CollisionAware for Body {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn immunity(&self) -> i32 {
        self.immunity
    }

    fn is_settled(&self) -> bool {
        self.settled
    }

    fn settle_check(&mut self, stop_threshold: f64, settled_color: Rgba) {
        if self.velocity_x.abs() < stop_threshold {
            self.velocity_x = 0.0;
        }
        if self.velocity_x == 0.0 && self.velocity_y == 0.0 {
            self.settled = true;
            self.color = settled_color;
        }
    }
}
