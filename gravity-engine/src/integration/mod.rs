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
//! Numerical integration of body state
//!
//! An integrator is the second pass of a tick: it reads the forces left in
//! each body's accumulator by the force pass and advances velocity and
//! position by one fixed timestep. It never evaluates forces itself.
//!
//! # Integrators
//!
//! - **Semi-implicit Euler** ([`SemiImplicitEuler`]): velocity from the
//!   start-of-tick force, position from the freshly updated velocity.
//!
//! # Timestep Guidelines
//!
//! For the reference Sun/Earth/Moon system a timestep of one hour (3600 s)
//! keeps Earth's orbit closed to within a few percent over a year. The Moon's
//! month-long orbit around Earth needs that resolution or better.

use crate::bodies::Body;

mod euler;

pub use euler::SemiImplicitEuler;

/// Upper bound on a timestep before [`Integrator::validate_timestep`] warns (one day)
pub const MAX_RECOMMENDED_TIMESTEP: f64 = 86_400.0;

/// Lower bound on a timestep before [`Integrator::validate_timestep`] warns
pub const MIN_RECOMMENDED_TIMESTEP: f64 = 1e-9;

/// Calculate total kinetic energy of a set of bodies
///
/// KE = Σ ½ m v²
pub fn calculate_total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Trait for fixed-step integration methods
pub trait Integrator {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the default timestep used by this integrator
    fn timestep(&self) -> f64;

    /// Validate the timestep for stability
    ///
    /// Returns a warning message if the timestep might cause numerical issues.
    fn validate_timestep(&self) -> Result<(), String> {
        let dt = self.timestep();

        if dt <= 0.0 || !dt.is_finite() {
            return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
        }

        if dt < MIN_RECOMMENDED_TIMESTEP {
            return Err(format!(
                "Warning: Timestep {} s is extremely small and may cause precision loss with f64.",
                dt
            ));
        }

        if dt > MAX_RECOMMENDED_TIMESTEP {
            return Err(format!(
                "Warning: Timestep {} s is large and may cause orbits to diverge. \
                Consider using smaller timesteps for better accuracy.",
                dt
            ));
        }

        Ok(())
    }

    /// Advance every body by `dt` using the forces already accumulated
    ///
    /// Must only be called after the force pass has completed for all bodies.
    /// Returns the number of bodies whose state is still finite afterwards.
    fn integrate(&self, bodies: &mut [Body], dt: f64) -> usize;
}
