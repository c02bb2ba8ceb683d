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
//! # Gravity Engine
//!
//! A small, deterministic 2D gravitational N-body engine for a handful of
//! point masses.
//!
//! ## Features
//!
//! - **Body Store**: ordered, fixed-cardinality storage of mass, position,
//!   velocity and accumulated force
//! - **Newtonian Gravity**: direct pairwise force summation with a zero-force
//!   policy for coincident bodies
//! - **Two-Pass Ticks**: a full force pass over every body, then a full
//!   integration pass, enforced by the [`ForcePass`] guard type
//! - **Semi-implicit Euler**: explicit velocity update, position from the
//!   updated velocity
//! - **Scenarios**: YAML scenario files and a built-in Sun/Earth/Moon system
//!
//! ## Example
//!
//! ```rust
//! use gravity_engine::{ScenarioConfig, bodies::BodyId};
//!
//! let scenario = ScenarioConfig::reference();
//! let mut sim = scenario.build().unwrap();
//!
//! sim.run(24); // one simulated day
//! let earth = sim.position_of(BodyId::new(1)).unwrap();
//! assert!(earth.y() > 0.0);
//! ```
//!
//! Logging goes through the [`log`] facade; install any logger in the host
//! binary to see it.

#![warn(missing_docs)]

/// Body state storage
pub mod bodies;

/// Simulation parameters and scenario loading
pub mod config;

/// Conservation diagnostics
pub mod diagnostics;

/// Error types
pub mod error;

/// Newtonian gravity force pass
pub mod gravity;

/// Numerical integration methods
pub mod integration;

/// Simulation state and tick execution
pub mod simulation;

pub use bodies::{Body, BodyId, BodyStore, Vec2};
pub use config::{ScenarioConfig, SimulationConfig};
pub use error::{SimError, SimResult};
pub use gravity::{GravityModel, GRAVITATIONAL_CONSTANT};
pub use simulation::{ForcePass, Simulation};
