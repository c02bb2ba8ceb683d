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
//! Simulation state and tick execution
//!
//! A tick is two full passes over the body store:
//!
//! 1. **Force pass**: every body's force is recomputed from the positions all
//!    bodies held at the start of the tick.
//! 2. **Integration pass**: every body's velocity, then position, is advanced
//!    from that force.
//!
//! The passes are exposed separately through [`Simulation::compute_forces`],
//! which returns a [`ForcePass`] guard. The guard holds the only mutable
//! borrow of the simulation, so nothing can move a body between the two
//! passes, and the only way forward is [`ForcePass::integrate`].
//!
//! ```
//! use gravity_engine::{Simulation, SimulationConfig};
//! use gravity_engine::bodies::{BodyStore, Vec2};
//!
//! let mut store = BodyStore::new();
//! store.add_body(1.989e30, Vec2::zero(), Vec2::zero()).unwrap();
//! let earth = store
//!     .add_body(5.972e24, Vec2::new(1.496e11, 0.0), Vec2::new(0.0, 29.78e3))
//!     .unwrap();
//!
//! let mut sim = Simulation::new(store, &SimulationConfig::default()).unwrap();
//!
//! let pass = sim.compute_forces();
//! assert!(pass.force_on(earth).unwrap().x() < 0.0); // pulled toward the Sun
//! pass.integrate(3600.0);
//!
//! assert_eq!(sim.elapsed_ticks(), 1);
//! assert!(sim.position_of(earth).unwrap().y() > 0.0);
//! ```

use crate::bodies::{BodyId, BodyStore, Vec2};
use crate::config::SimulationConfig;
use crate::error::SimResult;
use crate::gravity::GravityModel;
use crate::integration::{Integrator, SemiImplicitEuler};
use log::{debug, info, trace, warn};

/// Complete simulation state: bodies, physical constants, timestep and clock
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: BodyStore,
    gravity: GravityModel,
    integrator: SemiImplicitEuler,
    elapsed_ticks: u64,
    elapsed_time: f64,
}

impl Simulation {
    /// Create a simulation over `bodies` with constants from `config`
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`](crate::SimError::InvalidParameter)
    /// if the configuration fails validation.
    pub fn new(bodies: BodyStore, config: &SimulationConfig) -> SimResult<Self> {
        config.validate()?;

        let gravity = GravityModel::new(config.gravitational_constant)?;
        let integrator = SemiImplicitEuler::try_new(config.timestep)?;

        if let Err(warning) = integrator.validate_timestep() {
            warn!("{}", warning);
        }

        info!(
            "Simulation initialized: {} bodies, G = {:.5e}, dt = {} s, integrator = {}",
            bodies.len(),
            gravity.g_constant(),
            integrator.timestep(),
            integrator.name()
        );

        Ok(Simulation {
            bodies,
            gravity,
            integrator,
            elapsed_ticks: 0,
            elapsed_time: 0.0,
        })
    }

    /// Create a simulation from explicit parts
    pub fn from_parts(
        bodies: BodyStore,
        gravity: GravityModel,
        integrator: SemiImplicitEuler,
    ) -> Self {
        Simulation {
            bodies,
            gravity,
            integrator,
            elapsed_ticks: 0,
            elapsed_time: 0.0,
        }
    }

    /// Run the force pass and return a guard for the integration pass
    pub fn compute_forces(&mut self) -> ForcePass<'_> {
        self.gravity.compute_forces(self.bodies.as_mut_slice());
        ForcePass { sim: self }
    }

    /// Advance every body by one tick of length `dt`
    ///
    /// A `dt` that is not positive and finite is refused with a warning:
    /// no force pass runs, no body moves and no tick is counted.
    pub fn advance(&mut self, dt: f64) {
        if !is_usable_timestep(dt) {
            warn!("Ignoring tick with invalid timestep {} s", dt);
            return;
        }
        self.compute_forces().integrate(dt);
    }

    /// Advance by one tick of the configured timestep
    pub fn step(&mut self) {
        let dt = self.integrator.timestep();
        self.advance(dt);
    }

    /// Advance by `ticks` ticks of the configured timestep
    pub fn run(&mut self, ticks: u64) {
        self.run_with(ticks, |_, _| {});
    }

    /// Advance by `ticks` ticks, calling `observer` after each completed tick
    ///
    /// The observer receives the elapsed tick count and the body store. This
    /// is the polling point for anything that plots or records positions.
    pub fn run_with<F>(&mut self, ticks: u64, mut observer: F)
    where
        F: FnMut(u64, &BodyStore),
    {
        for _ in 0..ticks {
            self.step();
            observer(self.elapsed_ticks, &self.bodies);
        }
        debug!(
            "Ran {} ticks, now at tick {} ({:.3e} s)",
            ticks, self.elapsed_ticks, self.elapsed_time
        );
    }

    /// Current position of a body
    pub fn position_of(&self, id: BodyId) -> Option<Vec2> {
        self.bodies.position_of(id)
    }

    /// Current velocity of a body
    pub fn velocity_of(&self, id: BodyId) -> Option<Vec2> {
        self.bodies.velocity_of(id)
    }

    /// Read access to the body store
    pub fn bodies(&self) -> &BodyStore {
        &self.bodies
    }

    /// Number of bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of completed ticks
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Simulated seconds elapsed, summed over the `dt` of each tick
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Configured timestep in seconds
    pub fn timestep(&self) -> f64 {
        self.integrator.timestep()
    }

    /// Gravitational constant in use
    pub fn gravitational_constant(&self) -> f64 {
        self.gravity.g_constant()
    }

    /// The gravity model in use
    pub fn gravity(&self) -> &GravityModel {
        &self.gravity
    }
}

/// Result of a completed force pass, awaiting integration
///
/// Dropping the guard without calling [`ForcePass::integrate`] leaves
/// positions and velocities untouched and does not count a tick.
#[must_use = "forces are computed but bodies do not move until `integrate` is called"]
pub struct ForcePass<'a> {
    sim: &'a mut Simulation,
}

impl ForcePass<'_> {
    /// Force accumulated on one body during this pass
    pub fn force_on(&self, id: BodyId) -> Option<Vec2> {
        self.sim.bodies.get(id).map(|b| b.force())
    }

    /// Forces on every body, in store order
    pub fn forces(&self) -> Vec<Vec2> {
        self.sim.bodies.iter().map(|b| b.force()).collect()
    }

    /// Run the integration pass with timestep `dt` and complete the tick
    ///
    /// A `dt` that is not positive and finite is refused with a warning and
    /// the guard is consumed as if dropped: bodies stay put and no tick is
    /// counted.
    pub fn integrate(self, dt: f64) {
        let sim = self.sim;
        if !is_usable_timestep(dt) {
            warn!("Ignoring integration pass with invalid timestep {} s", dt);
            return;
        }

        let valid = sim.integrator.integrate(sim.bodies.as_mut_slice(), dt);
        if valid < sim.bodies.len() {
            debug!(
                "Tick {}: {} of {} bodies in a valid state",
                sim.elapsed_ticks + 1,
                valid,
                sim.bodies.len()
            );
        }
        sim.elapsed_ticks += 1;
        sim.elapsed_time += dt;
        trace!("Tick {} complete (dt = {} s)", sim.elapsed_ticks, dt);
    }
}

fn is_usable_timestep(dt: f64) -> bool {
    dt > 0.0 && dt.is_finite()
}
