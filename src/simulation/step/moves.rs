use crate::systems::collision::collisions_for;
use crate::systems::motion::{advance, Step};

use super::SimulationCore;

pub(super) fn move_body(sim: &mut SimulationCore, idx: usize, vx: Option<f64>, vy: Option<f64>, depth: u32) {
    if sim.perf_enabled {
        sim.perf_stats.moves += 1;
    }

    // Cap on how far one movement may cascade through neighbours
    if depth > sim.params.max_recursion_depth {
        if sim.perf_enabled {
            sim.perf_stats.depth_cutoffs += 1;
        }
        return;
    }

    let boundary = sim.boundary;
    let body = &mut sim.items[idx];
    let dx = vx.unwrap_or(body.velocity_x);
    let dy = vy.unwrap_or(body.velocity_y);

    if advance(body, dx, dy, boundary, &sim.params) == Step::Bounded {
        handle_collision(sim, idx, depth + 1);
    }
}

/// Push each overlapping candidate with the mover's current velocity, then
/// reverse the mover on both axes if anything was hit.
///
/// Resolution is order dependent: targets are fixed up front, but the
/// mover's velocity is re-read per target since a cascade may have bounced it.
pub(super) fn handle_collision(sim: &mut SimulationCore, idx: usize, depth: u32) {
    let targets: Vec<usize> = collisions_for(&sim.items, &sim.items[idx])
        .map(|(i, _)| i)
        .collect();
    if targets.is_empty() {
        return;
    }

    if sim.perf_enabled {
        sim.perf_stats.collisions += targets.len() as u32;
    }

    for target in targets {
        let (vx, vy) = {
            let mover = &sim.items[idx];
            (mover.velocity_x, mover.velocity_y)
        };
        move_body(sim, target, Some(vx), Some(vy), depth);
    }

    let mover = &mut sim.items[idx];
    mover.velocity_x = -mover.velocity_x;
    mover.velocity_y = -mover.velocity_y;
}
