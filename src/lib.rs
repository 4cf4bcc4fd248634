//! Bouncy Engine - bouncing ball physics in WASM
//!
//! A field of circular bodies inside an optional rectangular boundary:
//! per-frame motion, wall reflection, pairwise push-and-bounce collisions,
//! and a periodic attenuation tick that supplies gravity and friction.
//!
//! Architecture:
//! - core/       - Logging macros, random source
//! - domain/     - Value types (Point, palette, params)
//! - systems/    - Per-body physics (shape traits, motion, collision, attenuation)
//! - simulation/ - Orchestration and the JS facade

// Logging macros must be declared before the modules that use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use domain::params::PhysicsParams;
pub use domain::point::Point;
pub use simulation::{BodyHandle, PerfStats, Simulation, SimulationCore};
pub use systems::shape::{Body, CollisionAware, Movable, SpawnOptions};

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("bouncy engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Floats per body in the render buffer (x, y, radius, settled)
#[wasm_bindgen]
pub fn render_stride() -> usize {
    simulation::RENDER_STRIDE
}
