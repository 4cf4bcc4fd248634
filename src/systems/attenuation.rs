//! Periodic velocity decay
//!
//! The only source of gravity and energy loss. Runs on the driver's coarse
//! tick, not every frame, and is the only place immunity counts down.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::params::PhysicsParams;

use super::shape::Body;

/// Attenuate one body. Bodies with both velocities at zero are skipped.
pub fn attenuate_body(body: &mut Body, params: &PhysicsParams) {
    if !body.is_moving() {
        return;
    }

    if body.immunity > 0 {
        body.immunity -= 1;
    }

    body.velocity_y *= params.air_resistance;
    if body.velocity_y != 0.0 {
        body.velocity_y += params.gravity;
    }

    // Horizontal motion dies off faster once the body stopped bouncing
    body.velocity_x *= if body.velocity_y != 0.0 {
        params.air_resistance
    } else {
        params.ground_friction
    };
}

/// Attenuate every body. Bodies are independent here, so this is the one
/// pass that fans out over rayon when `parallel` is on.
pub fn attenuate_all(bodies: &mut [Body], params: &PhysicsParams) {
    #[cfg(feature = "parallel")]
    {
        bodies.par_iter_mut().for_each(|b| attenuate_body(b, params));
    }
    #[cfg(not(feature = "parallel"))]
    {
        bodies.iter_mut().for_each(|b| attenuate_body(b, params));
    }
}
