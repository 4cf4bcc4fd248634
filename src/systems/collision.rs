//! Collision queries
//!
//! Full scan of the candidate set for every mover; no spatial partitioning.

use super::shape::{Body, CollisionAware};

/// Bodies eligible to collide (not immune, not settled), in insertion order,
/// paired with their index.
pub fn candidates(bodies: &[Body]) -> impl Iterator<Item = (usize, &Body)> + '_ {
    bodies
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_collision_candidate())
}

/// Candidates overlapping `item`, excluding any body sharing its id
pub fn collisions_for<'a>(bodies: &'a [Body], item: &'a Body) -> impl Iterator<Item = (usize, &'a Body)> + 'a {
    candidates(bodies).filter(move |(_, other)| other.id() != item.id() && item.is_collision(other))
}
