//! Simulation - owns the bodies and the boundary
//!
//! `SimulationCore` is the orchestrator (a.k.a. BouncyService). Bodies never
//! hold a reference back to it; they are addressed by `BodyHandle`, an index
//! into `items` that stays valid until `restart` replaces the collection.
//!
//! Call flow inside a frame:
//!   step -> move_body (each body) -> handle_collision -> move_body (neighbours) ...
//! bounded by `PhysicsParams::max_recursion_depth`. Separately the driver's
//! coarse tick runs `attenuate`.

use crate::core::utils::Rng;
use crate::domain::params::PhysicsParams;
use crate::domain::point::Point;
use crate::systems::collision;
use crate::systems::shape::{Body, SpawnOptions};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/moves.rs"]
mod moves;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;
pub use render_extract::RENDER_STRIDE;

use perf_timer::PerfTimer;

/// Index of a body inside its simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

pub(crate) struct RenderBuffers {
    /// x, y, radius, settled (0/1) per body
    pub(crate) bodies: Vec<f64>,
    /// 0xRRGGBBAA per body
    pub(crate) colors: Vec<u32>,
}

pub struct SimulationCore {
    items: Vec<Body>,
    /// Rectangle [0, x] x [0, y]; `None` means open-world movement
    boundary: Option<Point>,
    /// Owned by the driver: whether frames are being stepped
    running: bool,
    params: PhysicsParams,
    rng: Rng,
    /// Bursts are refused once the body count exceeds this
    body_limit: Option<usize>,
    last_attenuate_ms: Option<f64>,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    pub fn new(items: Vec<Body>, boundary: Option<Point>) -> Self {
        init::create_simulation_core(items, boundary, PhysicsParams::default())
    }

    pub fn with_params(items: Vec<Body>, boundary: Option<Point>, params: PhysicsParams) -> Self {
        init::create_simulation_core(items, boundary, params)
    }

    // === STATE ===

    pub fn items(&self) -> &[Body] {
        &self.items
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.items.get(handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.items.get_mut(handle.0)
    }

    pub fn body_count(&self) -> usize {
        self.items.len()
    }

    pub fn boundary(&self) -> Option<Point> {
        self.boundary
    }

    pub fn body_limit(&self) -> Option<usize> {
        self.body_limit
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // === SETTINGS ===

    pub fn set_running(&mut self, running: bool) {
        settings::set_running(self, running);
    }

    /// Flip `running`, returning the new value
    pub fn toggle(&mut self) -> bool {
        settings::toggle(self)
    }

    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    pub fn set_params(&mut self, params: PhysicsParams) -> Result<(), String> {
        settings::set_params(self, params)
    }

    pub fn load_params_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_params_json(self, json)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    /// Replace or clear the boundary. Clearing it puts every later move into
    /// the unconstrained branch.
    pub fn set_boundary(&mut self, boundary: Option<Point>) {
        commands::set_boundary(self, boundary);
    }

    /// New boundary of `width` x `height`; settled bodies drop to the new floor
    pub fn resize(&mut self, width: f64, height: f64) {
        commands::resize(self, width, height);
    }

    /// Create a body and append it. Unset options get random defaults.
    pub fn spawn(&mut self, position: Point, id: u32, options: SpawnOptions) -> BodyHandle {
        commands::spawn(self, position, id, options)
    }

    /// Spawn a random-sized burst of default bodies at `point` and start
    /// running. Returns how many were created (0 when over the body limit).
    pub fn spawn_burst(&mut self, point: Point) -> u32 {
        commands::spawn_burst(self, point)
    }

    /// Drop every body and stop
    pub fn restart(&mut self) {
        commands::restart(self);
    }

    // === PHYSICS ===

    /// Move a body one step. With perf on, the stats then describe this call only. `vx`/`vy` default to the body's own velocity;
    /// collision cascades pass the pusher's velocity instead. Returns `None`
    /// for a stale handle.
    pub fn move_body(&mut self, handle: BodyHandle, vx: Option<f64>, vy: Option<f64>, depth: u32) -> Option<&Body> {
        if handle.0 >= self.items.len() {
            return None;
        }
        if self.perf_enabled {
            self.perf_stats.reset();
        }
        moves::move_body(self, handle.0, vx, vy, depth);
        self.items.get(handle.0)
    }

    /// Push every body overlapping `handle` with its velocity, then bounce it
    /// back if anything was hit
    pub fn handle_collision(&mut self, handle: BodyHandle, depth: u32) {
        if handle.0 < self.items.len() {
            if self.perf_enabled {
                self.perf_stats.reset();
            }
            moves::handle_collision(self, handle.0, depth);
        }
    }

    /// Bodies that may collide (not immune, not settled), insertion order
    pub fn find_collision_candidates(&self) -> Vec<&Body> {
        collision::candidates(&self.items).map(|(_, b)| b).collect()
    }

    /// Candidates overlapping `item`, other than `item` itself
    pub fn find_all_collision_items_for_item<'a>(&'a self, item: &'a Body) -> Vec<&'a Body> {
        collision::collisions_for(&self.items, item).map(|(_, b)| b).collect()
    }

    /// Settle check on one body with the loaded params
    pub fn cleanup(&mut self, handle: BodyHandle) {
        if let Some(body) = self.items.get_mut(handle.0) {
            body.cleanup(&self.params);
        }
    }

    /// Periodic gravity, drag and immunity decay
    pub fn attenuate(&mut self) {
        if self.perf_enabled {
            self.perf_stats.reset();
        }
        step::attenuate(self);
    }

    /// Driver frame: move every body once, attenuate when the interval elapsed
    pub fn step(&mut self, timestamp_ms: f64) {
        step::step(self, timestamp_ms);
    }

    // === RENDER ===

    /// Refresh the render buffers, returning the body count
    pub fn extract_render_data(&mut self) -> usize {
        render_extract::extract_render_data(self)
    }

    pub fn render_ptr(&self) -> *const f64 {
        self.render.bodies.as_ptr()
    }

    pub fn render_len(&self) -> usize {
        self.render.bodies.len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }

    pub fn render_data(&self) -> (&[f64], &[u32]) {
        (&self.render.bodies, &self.render.colors)
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
