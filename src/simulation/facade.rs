use wasm_bindgen::prelude::*;

use crate::domain::palette;
use crate::domain::point::Point;
use crate::systems::shape::{Body, SpawnOptions};

use super::perf_stats::PerfStats;
use super::{BodyHandle, SimulationCore};

fn boundary_from(width: Option<f64>, height: Option<f64>) -> Option<Point> {
    match (width, height) {
        (Some(w), Some(h)) => Some(Point::new(w, h)),
        _ => None,
    }
}

/// JS-facing wrapper. Bodies are addressed by the handle `spawn` returns.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create an empty simulation; omit either dimension for open-world movement
    #[wasm_bindgen(constructor)]
    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            core: SimulationCore::new(Vec::new(), boundary_from(width, height)),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    /// `undefined` when no boundary is set
    #[wasm_bindgen(getter)]
    pub fn body_limit(&self) -> Option<u32> {
        self.core.body_limit().map(|n| n as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(setter)]
    pub fn set_running(&mut self, running: bool) {
        self.core.set_running(running);
    }

    pub fn toggle(&mut self) -> bool {
        self.core.toggle()
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    pub fn load_params(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_params_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn params_json(&self) -> String {
        self.core.params().to_json()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === COMMANDS ===

    /// Set the boundary to width x height, or clear it when either is missing
    pub fn set_boundary(&mut self, width: Option<f64>, height: Option<f64>) {
        self.core.set_boundary(boundary_from(width, height));
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.core.resize(width, height);
    }

    /// Spawn one body; returns its handle
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        x: f64,
        y: f64,
        id: u32,
        velocity_x: Option<f64>,
        velocity_y: Option<f64>,
        radius: Option<f64>,
        color: Option<u32>,
        immunity: Option<i32>,
    ) -> u32 {
        let options = SpawnOptions {
            velocity_x,
            velocity_y,
            radius,
            color,
            immunity,
        };
        self.core.spawn(Point::new(x, y), id, options).index() as u32
    }

    /// Spawn a burst at a click point; returns how many bodies were created
    pub fn spawn_burst(&mut self, x: f64, y: f64) -> u32 {
        self.core.spawn_burst(Point::new(x, y))
    }

    pub fn restart(&mut self) {
        self.core.restart();
    }

    // === PHYSICS ===

    /// Returns false for an unknown handle
    pub fn move_body(&mut self, handle: u32, vx: Option<f64>, vy: Option<f64>, depth: Option<u32>) -> bool {
        self.core
            .move_body(BodyHandle(handle as usize), vx, vy, depth.unwrap_or(0))
            .is_some()
    }

    pub fn handle_collision(&mut self, handle: u32, depth: u32) {
        self.core.handle_collision(BodyHandle(handle as usize), depth);
    }

    pub fn cleanup(&mut self, handle: u32) {
        self.core.cleanup(BodyHandle(handle as usize));
    }

    pub fn attenuate(&mut self) {
        self.core.attenuate();
    }

    /// One animation frame
    pub fn step(&mut self, timestamp_ms: f64) {
        self.core.step(timestamp_ms);
    }

    /// Ids of bodies that may collide
    pub fn collision_candidate_ids(&self) -> Vec<u32> {
        self.core
            .find_collision_candidates()
            .into_iter()
            .map(Body::id)
            .collect()
    }

    /// Ids of candidates overlapping the body at `handle`
    pub fn collision_ids_for(&self, handle: u32) -> Vec<u32> {
        let Some(item) = self.core.body(BodyHandle(handle as usize)) else {
            return Vec::new();
        };
        self.core
            .find_all_collision_items_for_item(item)
            .into_iter()
            .map(Body::id)
            .collect()
    }

    // === BODY STATE ===

    pub fn body_id(&self, handle: u32) -> Option<u32> {
        self.body(handle).map(Body::id)
    }

    pub fn body_x(&self, handle: u32) -> Option<f64> {
        self.body(handle).map(|b| b.position.x)
    }

    pub fn body_y(&self, handle: u32) -> Option<f64> {
        self.body(handle).map(|b| b.position.y)
    }

    pub fn body_radius(&self, handle: u32) -> Option<f64> {
        self.body(handle).map(Body::radius)
    }

    pub fn body_velocity_x(&self, handle: u32) -> Option<f64> {
        self.body(handle).map(|b| b.velocity_x)
    }

    pub fn body_velocity_y(&self, handle: u32) -> Option<f64> {
        self.body(handle).map(|b| b.velocity_y)
    }

    pub fn body_immunity(&self, handle: u32) -> Option<i32> {
        self.body(handle).map(|b| b.immunity)
    }

    pub fn body_settled(&self, handle: u32) -> bool {
        self.body(handle).is_some_and(Body::is_settled)
    }

    pub fn body_color(&self, handle: u32) -> Option<u32> {
        self.body(handle).map(|b| b.color)
    }

    /// Fill style for canvas drawing
    pub fn body_color_css(&self, handle: u32) -> Option<String> {
        self.body(handle).map(|b| palette::to_css(b.color))
    }

    // === RENDER API ===

    /// Pack every body into the render buffers; returns the body count
    pub fn extract_render_data(&mut self) -> usize {
        self.core.extract_render_data()
    }

    /// Pointer to x, y, radius, settled per body (f64)
    pub fn render_ptr(&self) -> *const f64 {
        self.core.render_ptr()
    }

    pub fn render_len(&self) -> usize {
        self.core.render_len()
    }

    /// Pointer to 0xRRGGBBAA per body (u32)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }
}

impl Simulation {
    fn body(&self, handle: u32) -> Option<&Body> {
        self.core.body(BodyHandle(handle as usize))
    }

    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }
}
