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
//! Point-mass body state
//!
//! A [`Body`] is pure storage: mass, position, velocity and the force
//! accumulated for the current tick. It carries no physics logic; the
//! gravity model writes `force` and the integrator reads it back.

use super::Vec2;
use crate::error::{SimError, SimResult};

/// A single gravitating point mass
///
/// Mass is in kilograms, position in meters, velocity in meters per second
/// and force in newtons. Mass must be strictly positive since the
/// integration step divides by it.
///
/// # Examples
///
/// ```
/// use gravity_engine::bodies::{Body, Vec2};
///
/// let earth = Body::new(5.972e24, Vec2::new(1.496e11, 0.0), Vec2::new(0.0, 29.78e3)).unwrap();
/// assert_eq!(earth.force(), Vec2::zero());
///
/// assert!(Body::new(0.0, Vec2::zero(), Vec2::zero()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: f64,
    position: Vec2,
    velocity: Vec2,
    force: Vec2,
}

impl Body {
    /// Create a body with the given mass, initial position and velocity
    ///
    /// The force accumulator starts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `mass` is not strictly
    /// positive and finite, or if either vector has a non-finite component.
    pub fn new(mass: f64, position: Vec2, velocity: Vec2) -> SimResult<Self> {
        validate_mass(mass)?;
        validate_vector("position", position)?;
        validate_vector("velocity", velocity)?;

        Ok(Body {
            mass,
            position,
            velocity,
            force: Vec2::zero(),
        })
    }

    /// Mass in kilograms
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Replace the mass, keeping the positivity invariant
    pub fn set_mass(&mut self, mass: f64) -> SimResult<()> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Current position in meters
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Current velocity in meters per second
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Set the velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Force accumulated during the most recent force pass, in newtons
    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Overwrite the accumulated force
    pub fn set_force(&mut self, force: Vec2) {
        self.force = force;
    }

    /// Clear the force accumulator
    pub fn reset_force(&mut self) {
        self.force = Vec2::zero();
    }

    /// Acceleration implied by the accumulated force (F / m)
    pub fn acceleration(&self) -> Vec2 {
        self.force / self.mass
    }

    /// Linear momentum (m v)
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy (½ m v²)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Check that position, velocity and force are all finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid() && self.force.is_valid()
    }
}

fn validate_mass(mass: f64) -> SimResult<()> {
    if mass > 0.0 && mass.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid("mass", mass, "must be positive and finite"))
    }
}

fn validate_vector(name: &'static str, v: Vec2) -> SimResult<()> {
    if v.is_valid() {
        return Ok(());
    }
    let bad = if v.x().is_finite() { v.y() } else { v.x() };
    Err(SimError::invalid(name, bad, "components must be finite"))
}
