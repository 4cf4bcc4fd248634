use wasm_bindgen::prelude::*;

/// Counters for the last frame (or the last attenuation tick)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) attenuate_ms: f64,
    /// Every move entry, recursive ones included
    pub(super) moves: u32,
    /// Neighbours pushed by collision handling
    pub(super) collisions: u32,
    /// Moves dropped by the recursion guard
    pub(super) depth_cutoffs: u32,
    pub(super) body_count: u32,
    pub(super) settled_count: u32,
    pub(super) candidate_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn attenuate_ms(&self) -> f64 { self.attenuate_ms }
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 { self.moves }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn depth_cutoffs(&self) -> u32 { self.depth_cutoffs }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn settled_count(&self) -> u32 { self.settled_count }
    #[wasm_bindgen(getter)]
    pub fn candidate_count(&self) -> u32 { self.candidate_count }
}
