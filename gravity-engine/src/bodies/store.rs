// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Body storage
//!
//! The store is an ordered, append-only list of bodies. Order is fixed once a
//! body is added and both passes of a tick walk it in the same order, which
//! keeps force summation deterministic.

use super::{Body, Vec2};
use crate::error::SimResult;
use std::fmt;

/// Index of a body within a [`BodyStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    /// Create a handle from a raw index
    pub fn new(index: usize) -> Self {
        BodyId(index)
    }

    /// Get the raw index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for BodyId {
    fn from(index: usize) -> Self {
        BodyId(index)
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

/// Ordered collection of all simulated bodies
///
/// # Examples
///
/// ```
/// use gravity_engine::bodies::{BodyStore, Vec2};
///
/// let mut store = BodyStore::new();
/// let sun = store.add_body(1.989e30, Vec2::zero(), Vec2::zero()).unwrap();
/// assert!(store.add_body(-5.0, Vec2::zero(), Vec2::zero()).is_err());
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.position_of(sun), Some(Vec2::zero()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    /// Create an empty store
    pub fn new() -> Self {
        BodyStore { bodies: Vec::new() }
    }

    /// Create an empty store with room for `capacity` bodies
    pub fn with_capacity(capacity: usize) -> Self {
        BodyStore {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Append an already validated body
    pub fn push(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Validate and append a new body
    ///
    /// Nothing is added if validation fails.
    pub fn add_body(&mut self, mass: f64, position: Vec2, velocity: Vec2) -> SimResult<BodyId> {
        let body = Body::new(mass, position, velocity)?;
        Ok(self.push(body))
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check if the store has no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Get a body by handle
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    /// Get a mutable body by handle
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    /// Current position of a body
    pub fn position_of(&self, id: BodyId) -> Option<Vec2> {
        self.get(id).map(Body::position)
    }

    /// Current velocity of a body
    pub fn velocity_of(&self, id: BodyId) -> Option<Vec2> {
        self.get(id).map(Body::velocity)
    }

    /// Iterate bodies in store order
    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    /// Iterate `(id, body)` pairs in store order
    pub fn enumerate(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Snapshot of all positions in store order
    pub fn positions(&self) -> Vec<Vec2> {
        self.bodies.iter().map(Body::position).collect()
    }

    /// Bodies as a slice
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// Bodies as a mutable slice
    ///
    /// The slice cannot grow or shrink, so cardinality stays fixed.
    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl FromIterator<Body> for BodyStore {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        BodyStore {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
