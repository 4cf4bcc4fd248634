//! Body colours, packed as 0xRRGGBBAA

pub type Rgba = u32;

pub const BLUE: Rgba = 0x0000_FFFF;
pub const GREEN: Rgba = 0x0080_00FF;
pub const RED: Rgba = 0xFF00_00FF;
pub const YELLOW: Rgba = 0xFFFF_00FF;
pub const PINK: Rgba = 0xE754_80FF;

/// Coral at ~30% alpha, marks bodies that stopped taking part in physics
pub const SETTLED: Rgba = 0xFF7F_504D;

pub const DEFAULT_PALETTE: [Rgba; 5] = [BLUE, GREEN, RED, YELLOW, PINK];

#[inline]
pub fn channels(color: Rgba) -> (u8, u8, u8, u8) {
    (
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    )
}

/// CSS `rgba(...)` string for canvas fill styles
pub fn to_css(color: Rgba) -> String {
    let (r, g, b, a) = channels(color);
    let alpha = (a as f64 / 255.0 * 100.0).round() / 100.0;
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}
