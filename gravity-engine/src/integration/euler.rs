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
//! Semi-implicit Euler integrator
//!
//! # Algorithm
//!
//! ```text
//! a(t)      = F(t) / m
//! v(t + dt) = v(t) + a(t)*dt
//! x(t + dt) = x(t) + v(t + dt)*dt
//! ```
//!
//! Velocity is advanced with the force evaluated at the start of the tick
//! (explicit Euler). Position is then advanced with the velocity that was
//! just updated (Euler-Cromer), not the pre-tick velocity. The asymmetry is
//! intentional: it is the update rule the reference trajectories were
//! produced with, and switching to a uniform scheme changes them.
//!
//! # Properties
//!
//! - **First-order accurate**: global error O(dt)
//! - **One force evaluation per step**
//! - **Not time-reversible**, though the Euler-Cromer position update keeps
//!   bound orbits from spiralling out as fast as pure explicit Euler does
//!
//! # References
//!
//! - Cromer, A. (1981). Stable solutions using the Euler approximation.
//!   American Journal of Physics, 49(5), 455-459.

use crate::bodies::Body;
use crate::error::{SimError, SimResult};
use log::warn;
use super::Integrator;

/// Explicit-velocity, semi-implicit-position Euler integrator
///
/// # Example
///
/// ```
/// use gravity_engine::integration::{SemiImplicitEuler, Integrator};
///
/// let integrator = SemiImplicitEuler::new(3600.0); // one hour
/// assert_eq!(integrator.timestep(), 3600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemiImplicitEuler {
    timestep: f64,
}

impl SemiImplicitEuler {
    /// Create a new integrator with the given default timestep
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite. Use
    /// [`SemiImplicitEuler::try_new`] for fallible construction.
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        SemiImplicitEuler { timestep }
    }

    /// Try to create a new integrator with the given default timestep
    pub fn try_new(timestep: f64) -> SimResult<Self> {
        if timestep > 0.0 && timestep.is_finite() {
            Ok(SemiImplicitEuler { timestep })
        } else {
            Err(SimError::invalid("timestep", timestep, "must be positive and finite"))
        }
    }
}

impl Integrator for SemiImplicitEuler {
    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    fn timestep(&self) -> f64 {
        self.timestep
    }

    fn integrate(&self, bodies: &mut [Body], dt: f64) -> usize {
        let mut valid_count = 0;

        for (i, body) in bodies.iter_mut().enumerate() {
            let acceleration = body.force() / body.mass();

            let velocity = body.velocity() + acceleration * dt;
            body.set_velocity(velocity);

            // Uses the velocity updated above
            let position = body.position() + velocity * dt;
            body.set_position(position);

            if !velocity.is_valid() || !position.is_valid() {
                warn!("Invalid state after Euler update for body {}", i);
                continue;
            }

            valid_count += 1;
        }

        valid_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Vec2;

    #[test]
    fn test_euler_creation() {
        let integrator = SemiImplicitEuler::new(0.01);
        assert_eq!(integrator.timestep(), 0.01);
        assert_eq!(integrator.name(), "Semi-implicit Euler");
    }

    #[test]
    #[should_panic(expected = "Timestep must be positive and finite")]
    fn test_euler_zero_timestep() {
        SemiImplicitEuler::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Timestep must be positive and finite")]
    fn test_euler_nan_timestep() {
        SemiImplicitEuler::new(f64::NAN);
    }

    #[test]
    fn test_euler_try_new() {
        assert!(SemiImplicitEuler::try_new(1.0).is_ok());
        assert!(SemiImplicitEuler::try_new(-1.0).unwrap_err().is_invalid_parameter());
        assert!(SemiImplicitEuler::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_euler_free_motion() {
        // No force: velocity is constant and position moves linearly
        let integrator = SemiImplicitEuler::new(0.1);
        let mut bodies = vec![Body::new(1.0, Vec2::zero(), Vec2::new(1.0, 2.0)).unwrap()];

        let count = integrator.integrate(&mut bodies, 0.1);
        assert_eq!(count, 1);

        let pos = bodies[0].position();
        assert!((pos.x() - 0.1).abs() < 1e-12);
        assert!((pos.y() - 0.2).abs() < 1e-12);
        assert_eq!(bodies[0].velocity(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_euler_position_uses_updated_velocity() {
        // F = 10 N on 2 kg from rest, dt = 1:
        // v = 0 + 5*1 = 5, x = 0 + 5*1 = 5 (explicit Euler would give x = 0)
        let integrator = SemiImplicitEuler::new(1.0);
        let mut body = Body::new(2.0, Vec2::zero(), Vec2::zero()).unwrap();
        body.set_force(Vec2::new(10.0, 0.0));
        let mut bodies = vec![body];

        integrator.integrate(&mut bodies, 1.0);

        assert_eq!(bodies[0].velocity(), Vec2::new(5.0, 0.0));
        assert_eq!(bodies[0].position(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_euler_uses_explicit_dt() {
        let integrator = SemiImplicitEuler::new(1.0);
        let mut bodies = vec![Body::new(1.0, Vec2::zero(), Vec2::new(1.0, 0.0)).unwrap()];

        integrator.integrate(&mut bodies, 3.0);
        assert_eq!(bodies[0].position(), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_euler_leaves_force_untouched() {
        let integrator = SemiImplicitEuler::new(1.0);
        let mut body = Body::new(1.0, Vec2::zero(), Vec2::zero()).unwrap();
        body.set_force(Vec2::new(0.0, -3.0));
        let mut bodies = vec![body];

        integrator.integrate(&mut bodies, 1.0);
        assert_eq!(bodies[0].force(), Vec2::new(0.0, -3.0));
    }

    #[test]
    fn test_euler_reports_invalid_state() {
        let integrator = SemiImplicitEuler::new(1.0);
        let mut body = Body::new(1.0, Vec2::zero(), Vec2::zero()).unwrap();
        body.set_force(Vec2::new(f64::INFINITY, 0.0));
        let mut bodies = vec![body, Body::new(1.0, Vec2::zero(), Vec2::zero()).unwrap()];

        assert_eq!(integrator.integrate(&mut bodies, 1.0), 1);
    }
}
