use crate::domain::params::PhysicsParams;

use super::commands::body_limit_for;
use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn set_running(sim: &mut SimulationCore, running: bool) {
    sim.running = running;
}

pub(super) fn toggle(sim: &mut SimulationCore) -> bool {
    sim.running = !sim.running;
    sim.running
}

pub(super) fn set_seed(sim: &mut SimulationCore, seed: u32) {
    sim.rng.reseed(seed);
}

pub(super) fn set_params(sim: &mut SimulationCore, params: PhysicsParams) -> Result<(), String> {
    params.validate()?;
    sim.body_limit = body_limit_for(sim.boundary, &params);
    sim.params = params;
    Ok(())
}

pub(super) fn load_params_json(sim: &mut SimulationCore, json: &str) -> Result<(), String> {
    match PhysicsParams::from_json(json) {
        Ok(params) => {
            sim.body_limit = body_limit_for(sim.boundary, &params);
            sim.params = params;
            console_log!("physics params loaded (limit {:?})", sim.body_limit);
            Ok(())
        }
        Err(e) => {
            console_warn!("physics params rejected: {}", e);
            Err(e)
        }
    }
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}
