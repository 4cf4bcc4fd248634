//! Domain value types

pub mod palette;
pub mod params;
pub mod point;
