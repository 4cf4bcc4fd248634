//! Per-body physics
//!
//! - shape/       - Body and the capability traits it implements
//! - motion       - One step of movement against the boundary
//! - collision    - Candidate filtering and overlap queries
//! - attenuation  - Periodic gravity, drag and immunity decay

pub mod attenuation;
pub mod collision;
pub mod motion;
pub mod shape;
