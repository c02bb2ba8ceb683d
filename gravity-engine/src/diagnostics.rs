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
//! Conservation diagnostics
//!
//! Read-only summaries of a simulation's state, used to watch numerical
//! drift. The semi-implicit Euler scheme does not conserve energy exactly,
//! so these quantities wander; a sudden jump usually means the timestep is
//! too coarse for the closest pair of bodies.

use crate::bodies::{Body, BodyId, Vec2};
use crate::gravity::GravityModel;
use crate::integration::calculate_total_kinetic_energy;
use crate::simulation::Simulation;
use std::fmt;

/// Energy and momentum of the whole system at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    /// Tick count when the snapshot was taken
    pub tick: u64,
    /// Total kinetic energy (J)
    pub kinetic_energy: f64,
    /// Total gravitational potential energy (J)
    pub potential_energy: f64,
    /// Total linear momentum (kg⋅m/s)
    pub momentum: Vec2,
    /// Total angular momentum about the origin (kg⋅m²/s)
    pub angular_momentum: f64,
}

impl Diagnostics {
    /// Snapshot the current state of a simulation
    pub fn capture(sim: &Simulation) -> Self {
        let bodies = sim.bodies().as_slice();
        Self::from_bodies(sim.elapsed_ticks(), bodies, sim.gravity())
    }

    /// Snapshot an arbitrary set of bodies
    pub fn from_bodies(tick: u64, bodies: &[Body], gravity: &GravityModel) -> Self {
        Diagnostics {
            tick,
            kinetic_energy: calculate_total_kinetic_energy(bodies),
            potential_energy: gravity.potential_energy(bodies),
            momentum: total_momentum(bodies),
            angular_momentum: total_angular_momentum(bodies),
        }
    }

    /// Kinetic plus potential energy
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }

    /// Relative change in total energy since `initial`
    ///
    /// Returns 0.0 when the initial energy is exactly zero.
    pub fn energy_drift(&self, initial: &Diagnostics) -> f64 {
        let e0 = initial.total_energy();
        if e0 == 0.0 {
            0.0
        } else {
            ((self.total_energy() - e0) / e0).abs()
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {}: KE = {:.6e} J, PE = {:.6e} J, E = {:.6e} J, |p| = {:.6e} kg⋅m/s",
            self.tick,
            self.kinetic_energy,
            self.potential_energy,
            self.total_energy(),
            self.momentum.magnitude()
        )
    }
}

/// Σ m v over all bodies
pub fn total_momentum(bodies: &[Body]) -> Vec2 {
    bodies.iter().fold(Vec2::zero(), |acc, b| acc + b.momentum())
}

/// Σ m (x × v) over all bodies, about the origin
pub fn total_angular_momentum(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| b.mass() * b.position().cross(b.velocity()))
        .sum()
}

/// Mass-weighted mean position
///
/// Returns `None` for an empty set.
pub fn center_of_mass(bodies: &[Body]) -> Option<Vec2> {
    let total_mass: f64 = bodies.iter().map(Body::mass).sum();
    if bodies.is_empty() {
        return None;
    }
    let weighted = bodies
        .iter()
        .fold(Vec2::zero(), |acc, b| acc + b.position() * b.mass());
    Some(weighted / total_mass)
}

/// Distance between two bodies of a simulation
pub fn separation(sim: &Simulation, a: BodyId, b: BodyId) -> Option<f64> {
    let pa = sim.position_of(a)?;
    let pb = sim.position_of(b)?;
    Some((pb - pa).magnitude())
}
