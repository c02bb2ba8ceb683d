//! Body store
//!
//! This module holds the mutable physical state of the simulation:
//! - [`Vec2`] for positions, velocities and forces
//! - [`Body`] for a single point mass
//! - [`BodyStore`] for the ordered, fixed-cardinality set of bodies
//!
//! Nothing here computes physics. The gravity model and the integrator
//! operate on slices of bodies handed out by the store.

mod body;
mod store;
mod vector;

pub use body::Body;
pub use store::{BodyId, BodyStore};
pub use vector::Vec2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = BodyStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_body_roundtrip_through_store() {
        let mut store = BodyStore::with_capacity(1);
        let id = store.push(Body::new(3.0, Vec2::new(1.0, 1.0), Vec2::zero()).unwrap());
        assert_eq!(store.get(id).map(Body::mass), Some(3.0));
    }
}
