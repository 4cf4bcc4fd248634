use super::SimulationCore;

/// f64 slots per body in the render buffer: x, y, radius, settled
pub const RENDER_STRIDE: usize = 4;

pub(super) fn extract_render_data(sim: &mut SimulationCore) -> usize {
    let count = sim.items.len();
    let render = &mut sim.render;
    render.bodies.clear();
    render.colors.clear();
    render.bodies.reserve(count * RENDER_STRIDE);
    render.colors.reserve(count);

    for body in sim.items.iter() {
        render.bodies.extend_from_slice(&[
            body.position.x,
            body.position.y,
            body.radius(),
            if body.is_settled() { 1.0 } else { 0.0 },
        ]);
        render.colors.push(body.color);
    }

    count
}
