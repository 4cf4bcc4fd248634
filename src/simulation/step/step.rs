use crate::systems::attenuation::attenuate_all;
use crate::systems::shape::CollisionAware;

use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore, timestamp_ms: f64) {
    if !sim.running {
        return;
    }

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = PerfTimer::start_if(perf_on);

    let last = *sim.last_attenuate_ms.get_or_insert(timestamp_ms);

    for idx in 0..sim.items.len() {
        super::moves::move_body(sim, idx, None, None, 0);
    }

    if timestamp_ms - last > sim.params.attenuate_interval_ms {
        sim.last_attenuate_ms = Some(timestamp_ms);
        attenuate(sim);
    }

    if let Some(t0) = step_start {
        sim.perf_stats.step_ms = t0.elapsed_ms();
        sim.perf_stats.body_count = sim.items.len() as u32;
        sim.perf_stats.settled_count = sim.items.iter().filter(|b| b.is_settled()).count() as u32;
        sim.perf_stats.candidate_count =
            sim.items.iter().filter(|b| b.is_collision_candidate()).count() as u32;
    }
}

pub(super) fn attenuate(sim: &mut SimulationCore) {
    let t0 = PerfTimer::start_if(sim.perf_enabled);
    attenuate_all(&mut sim.items, &sim.params);
    if let Some(t0) = t0 {
        sim.perf_stats.attenuate_ms = t0.elapsed_ms();
    }
}
