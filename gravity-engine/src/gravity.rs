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
//! Pairwise Newtonian gravitation
//!
//! # Physics Background
//!
//! Every point mass attracts every other point mass with a force proportional
//! to the product of their masses and inversely proportional to the square of
//! their separation:
//!
//! **F = G * (m₁ * m₂) / r²**
//!
//! In vector form, the force on body *i* due to body *j* is
//!
//! **F_ij = G * m_i * m_j * r_vec / |r_vec|³**, with **r_vec = x_j - x_i**
//!
//! # References
//!
//! - Newton, I. (1687). "Philosophiæ Naturalis Principia Mathematica"
//! - [CODATA 2018 value for G](https://physics.nist.gov/cgi-bin/cuu/Value?bg)
//!
//! # Implementation Details
//!
//! The force pass is a direct O(n²) sum with no softening and no tree
//! approximation; the engine targets a handful of bodies. Bodies sharing the
//! exact same position contribute nothing to each other rather than
//! producing an infinite force. This happens when orbits cross and must not
//! stop the simulation.
//!
//! Summation for body *i* runs over *j* in store order, so results are
//! reproducible bit for bit on a given platform.

use crate::bodies::{Body, Vec2};
use crate::error::{SimError, SimResult};
use log::warn;

/// Standard gravitational constant in SI units (m³/(kg⋅s²))
///
/// CODATA 2018 recommended value: 6.67430(15) × 10⁻¹¹ m³/(kg⋅s²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Newtonian gravity evaluated over every ordered pair of bodies
///
/// # Example
///
/// ```
/// use gravity_engine::bodies::{Body, Vec2};
/// use gravity_engine::gravity::GravityModel;
///
/// let gravity = GravityModel::default();
/// let mut bodies = vec![
///     Body::new(1.0e3, Vec2::new(0.0, 0.0), Vec2::zero()).unwrap(),
///     Body::new(1.0e3, Vec2::new(1.0e3, 0.0), Vec2::zero()).unwrap(),
/// ];
/// gravity.compute_forces(&mut bodies);
///
/// assert!(bodies[0].force().x() > 0.0);
/// assert_eq!(bodies[0].force(), -bodies[1].force());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityModel {
    g_constant: f64,
}

impl GravityModel {
    /// Create a gravity model with the specified gravitational constant
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `g_constant` is negative or
    /// not finite.
    pub fn new(g_constant: f64) -> SimResult<Self> {
        if !(g_constant >= 0.0 && g_constant.is_finite()) {
            return Err(SimError::invalid(
                "gravitational_constant",
                g_constant,
                "must be non-negative and finite",
            ));
        }
        Ok(GravityModel { g_constant })
    }

    /// Gravitational constant used by this model
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Force exerted on `target` by `source`
    ///
    /// Returns the zero vector when the two bodies share the same position.
    pub fn pairwise_force(&self, target: &Body, source: &Body) -> Vec2 {
        let r_vec = source.position() - target.position();
        let r_mag = r_vec.magnitude();

        if r_mag > 0.0 {
            let force_mag =
                self.g_constant * target.mass() * source.mass() / (r_mag * r_mag * r_mag);
            r_vec * force_mag
        } else {
            Vec2::zero()
        }
    }

    /// Total gravitational force on the body at `index` from every other body
    ///
    /// Self-interaction is excluded by index.
    pub fn net_force_on(&self, bodies: &[Body], index: usize) -> Vec2 {
        let target = &bodies[index];
        let mut total = Vec2::zero();

        for (j, source) in bodies.iter().enumerate() {
            if j == index {
                continue;
            }
            total += self.pairwise_force(target, source);
        }

        total
    }

    /// Force pass: recompute the accumulated force of every body
    ///
    /// Each body's accumulator is reset and refilled from the positions held
    /// at call time. Positions and velocities are only read, so no body sees
    /// another's updated state within a tick.
    pub fn compute_forces(&self, bodies: &mut [Body]) {
        for i in 0..bodies.len() {
            bodies[i].reset_force();
            let force = self.net_force_on(bodies, i);

            if !force.is_valid() {
                warn!("Non-finite gravitational force on body {}: {:?}", i, force);
            }

            bodies[i].set_force(force);
        }
    }

    /// Gravitational potential energy of the whole system
    ///
    /// U = -Σ_{i<j} G m_i m_j / r_ij. Coincident pairs are skipped, matching
    /// the force pass.
    pub fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let mut pe = 0.0;

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let r = (bodies[j].position() - bodies[i].position()).magnitude();
                if r > 0.0 {
                    pe -= self.g_constant * bodies[i].mass() * bodies[j].mass() / r;
                }
            }
        }

        pe
    }
}

impl Default for GravityModel {
    fn default() -> Self {
        GravityModel {
            g_constant: GRAVITATIONAL_CONSTANT,
        }
    }
}
