use crate::core::utils::Rng;
use crate::domain::params::PhysicsParams;
use crate::domain::point::Point;
use crate::systems::shape::Body;

use super::commands::body_limit_for;
use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::SimulationCore;

pub(super) fn create_simulation_core(
    items: Vec<Body>,
    boundary: Option<Point>,
    params: PhysicsParams,
) -> SimulationCore {
    let body_limit = body_limit_for(boundary, &params);
    let capacity = items.len().max(64);
    SimulationCore {
        items,
        boundary,
        running: false,
        params,
        rng: Rng::default(),
        body_limit,
        last_attenuate_ms: None,

        render: RenderBuffers {
            bodies: Vec::with_capacity(capacity * super::RENDER_STRIDE),
            colors: Vec::with_capacity(capacity),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
