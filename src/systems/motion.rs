//! One movement step of a single body against the boundary
//!
//! The reversal tests look at the position *before* the move, and the
//! position is then advanced by the delta that was requested for this call,
//! not the reversed velocity. A body can therefore overlap a wall for one
//! frame before the reversed velocity carries it back; the final clamp keeps
//! the drawn circle inside the rectangle regardless.

use crate::domain::params::PhysicsParams;
use crate::domain::point::Point;

use super::shape::CollisionAware;

/// What a step did, so the caller knows whether collisions must be resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// No boundary: plain translation, nothing else touched
    Free,
    /// Boundary rules applied; collision handling should follow
    Bounded,
}

/// Advance `body` by (dx, dy).
///
/// A body whose own vertical velocity is zero never receives vertical
/// displacement, whatever `dy` the caller passes.
pub fn advance<B: CollisionAware + ?Sized>(
    body: &mut B,
    dx: f64,
    dy: f64,
    boundary: Option<Point>,
    params: &PhysicsParams,
) -> Step {
    let dy = if body.velocity().1 == 0.0 { 0.0 } else { dy };

    let Some(bounds) = boundary else {
        body.translate(dx, dy);
        return Step::Free;
    };

    reflect_vertical(body, dy, bounds, params.rest_threshold);
    reflect_horizontal(body, dx, bounds);

    body.translate(dx, dy);
    clamp_inside(body, bounds);

    body.settle_check(params.stop_threshold, params.settled_color);
    Step::Bounded
}

/// Floor/ceiling reversal, with snap-to-rest for slow floor hits
fn reflect_vertical<B: CollisionAware + ?Sized>(body: &mut B, dy: f64, bounds: Point, rest_threshold: f64) {
    let pos = body.position();
    let r = body.radius();
    let hits_floor = pos.y + r + dy > bounds.y;
    let hits_ceiling = pos.y - r - dy < 0.0;

    if (hits_floor && dy > 0.0) || (hits_ceiling && dy < 0.0) {
        let (vx, vy) = body.velocity();
        let vy = -vy;
        if vy.abs() < rest_threshold && hits_floor {
            body.set_position(Point::new(pos.x, bounds.y - r));
            body.set_velocity(vx, 0.0);
        } else {
            body.set_velocity(vx, vy);
        }
    }
}

fn reflect_horizontal<B: CollisionAware + ?Sized>(body: &mut B, dx: f64, bounds: Point) {
    let pos = body.position();
    let r = body.radius();

    if (pos.x + r + dx > bounds.x && dx > 0.0) || (pos.x - r - dx.abs() < 0.0 && dx < 0.0) {
        let (vx, vy) = body.velocity();
        body.set_velocity(-vx, vy);
    }
}

/// Keep the circle inside the rectangle. Upper bound first, then lower, so a
/// boundary narrower than the body pins it at `radius` instead of panicking
/// like `f64::clamp` would.
fn clamp_inside<B: CollisionAware + ?Sized>(body: &mut B, bounds: Point) {
    let pos = body.position();
    let r = body.radius();
    body.set_position(Point::new(
        pos.x.min(bounds.x - r).max(r),
        pos.y.min(bounds.y - r).max(r),
    ));
}
