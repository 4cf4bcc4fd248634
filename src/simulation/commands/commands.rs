use std::f64::consts::PI;

use crate::domain::palette::BLUE;
use crate::domain::params::PhysicsParams;
use crate::domain::point::Point;
use crate::systems::shape::{Body, SpawnOptions};

use super::{BodyHandle, SimulationCore};

/// Bodies allowed before bursts are refused: the fill ratio of the boundary
/// area divided by the area of a nominal radius-10 body (10 * 2pi).
pub(super) fn body_limit_for(boundary: Option<Point>, params: &PhysicsParams) -> Option<usize> {
    boundary.map(|b| (b.x * b.y * params.fill_ratio / (10.0 * PI * 2.0)).max(0.0) as usize)
}

pub(super) fn set_boundary(sim: &mut SimulationCore, boundary: Option<Point>) {
    sim.boundary = boundary;
    sim.body_limit = body_limit_for(boundary, &sim.params);
}

pub(super) fn resize(sim: &mut SimulationCore, width: f64, height: f64) {
    set_boundary(sim, Some(Point::new(width, height)));

    for body in sim.items.iter_mut().filter(|b| b.is_settled()) {
        body.position.y = height - body.radius();
    }
}

pub(super) fn spawn(sim: &mut SimulationCore, position: Point, id: u32, options: SpawnOptions) -> BodyHandle {
    let params = &sim.params;
    let rng = &mut sim.rng;

    let velocity_x = options
        .velocity_x
        .unwrap_or_else(|| rng.range(params.spawn_speed_x.min, params.spawn_speed_x.max, false, false));
    let velocity_y = options
        .velocity_y
        .unwrap_or_else(|| rng.range(params.spawn_speed_y.min, params.spawn_speed_y.max, false, false));
    let radius = options
        .radius
        .unwrap_or_else(|| rng.range(params.spawn_radius.min, params.spawn_radius.max, true, true));
    let color = options
        .color
        .unwrap_or_else(|| rng.choice(&params.palette).copied().unwrap_or(BLUE));
    let immunity = options.immunity.unwrap_or(params.default_immunity);

    sim.items.push(Body::new(id, position, velocity_x, velocity_y, radius, color, immunity));
    BodyHandle(sim.items.len() - 1)
}

pub(super) fn spawn_burst(sim: &mut SimulationCore, point: Point) -> u32 {
    if let Some(limit) = sim.body_limit {
        if sim.items.len() > limit {
            console_warn!("body limit reached ({} > {}), burst refused", sim.items.len(), limit);
            return 0;
        }
    }

    let (min, max) = (sim.params.min_burst as f64, sim.params.max_burst as f64);
    let count = sim.rng.range(min, max, true, true) as u32;

    for _ in 0..count {
        let id = sim.items.len() as u32;
        spawn(sim, point, id, SpawnOptions::default());
    }

    sim.running = true;
    count
}

pub(super) fn restart(sim: &mut SimulationCore) {
    sim.running = false;
    sim.items.clear();
    sim.last_attenuate_ms = None;
    sim.render.bodies.clear();
    sim.render.colors.clear();
    console_log!("simulation restarted");
}
