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
//! Simulation parameters and scenario loading
//!
//! [`SimulationConfig`] holds the run-wide constants (G, timestep, total
//! duration). [`ScenarioConfig`] adds the initial bodies and can be loaded
//! from YAML.
//!
//! # YAML format
//!
//! ```yaml
//! version: "1.0.0"          # scenario format version (semver)
//!
//! parameters:               # optional, defaults to the reference parameters
//!   gravitational_constant: 6.6743e-11
//!   timestep: 3600.0        # seconds per tick
//!   duration: 31536000.0    # total simulated seconds (one year)
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30        # kg
//!     position: [0.0, 0.0]  # m
//!     velocity: [0.0, 0.0]  # m/s
//!   - name: Earth
//!     mass: 5.972e24
//!     position: [1.496e11, 0.0]
//!     velocity: [0.0, 29780.0]
//! ```
//!
//! Body order in the file is the store order used for every tick.

use crate::bodies::{Body, BodyStore, Vec2};
use crate::error::{SimError, SimResult};
use crate::gravity::GRAVITATIONAL_CONSTANT;
use crate::simulation::Simulation;
use log::info;
use semver::Version;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Scenario file format version understood by this build
///
/// Format: MAJOR.MINOR.PATCH following semantic versioning.
pub const SCENARIO_FORMAT_VERSION: &str = "1.0.0";

/// Reference timestep: one hour
pub const REFERENCE_TIMESTEP: f64 = 3600.0;

/// Reference duration: one 365-day year
pub const REFERENCE_DURATION: f64 = 365.0 * 24.0 * 3600.0;

/// Run-wide physical and numerical parameters
///
/// These are fixed for the lifetime of a [`Simulation`].
///
/// # Examples
///
/// ```
/// use gravity_engine::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.tick_count(), 8760); // hourly ticks over one year
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Gravitational constant (m³/(kg⋅s²))
    pub gravitational_constant: f64,
    /// Tick duration in seconds
    pub timestep: f64,
    /// Total simulated duration in seconds
    pub duration: f64,
}

impl SimulationConfig {
    /// Check every parameter against its domain
    pub fn validate(&self) -> SimResult<()> {
        if !(self.gravitational_constant >= 0.0 && self.gravitational_constant.is_finite()) {
            return Err(SimError::invalid(
                "gravitational_constant",
                self.gravitational_constant,
                "must be non-negative and finite",
            ));
        }
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(SimError::invalid("timestep", self.timestep, "must be positive and finite"));
        }
        if !(self.duration >= 0.0 && self.duration.is_finite()) {
            return Err(SimError::invalid(
                "duration",
                self.duration,
                "must be non-negative and finite",
            ));
        }
        Ok(())
    }

    /// Number of whole ticks that fit in the configured duration
    pub fn tick_count(&self) -> u64 {
        (self.duration / self.timestep).floor() as u64
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            timestep: REFERENCE_TIMESTEP,
            duration: REFERENCE_DURATION,
        }
    }
}

/// Initial state of one body in a scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    /// Optional label, used only for reporting
    #[serde(default)]
    pub name: Option<String>,
    /// Mass in kilograms
    pub mass: f64,
    /// Initial position `[x, y]` in meters
    pub position: Vec<f64>,
    /// Initial velocity `[vx, vy]` in meters per second
    pub velocity: Vec<f64>,
}

impl BodyConfig {
    /// Convenience constructor for code-built scenarios
    pub fn new(name: &str, mass: f64, position: [f64; 2], velocity: [f64; 2]) -> Self {
        BodyConfig {
            name: Some(name.to_string()),
            mass,
            position: position.to_vec(),
            velocity: velocity.to_vec(),
        }
    }

    /// Validate and convert to a [`Body`]
    pub fn to_body(&self) -> SimResult<Body> {
        let position = vector_from(&self.position, "position", self.name.as_deref())?;
        let velocity = vector_from(&self.velocity, "velocity", self.name.as_deref())?;
        Body::new(self.mass, position, velocity)
    }
}

fn vector_from(values: &[f64], field: &str, name: Option<&str>) -> SimResult<Vec2> {
    match values {
        [x, y] => Ok(Vec2::new(*x, *y)),
        _ => Err(SimError::Config(format!(
            "body {}: `{}` must have exactly 2 components, got {}",
            name.unwrap_or("<unnamed>"),
            field,
            values.len()
        ))),
    }
}

/// Complete description of a run: format version, parameters and bodies
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Scenario format version
    pub version: String,
    /// Run-wide parameters
    #[serde(default)]
    pub parameters: SimulationConfig,
    /// Bodies in store order
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Sun, Earth and Moon on the x-axis with near-circular velocities
    ///
    /// Hourly ticks over one year with the CODATA gravitational constant.
    pub fn reference() -> Self {
        ScenarioConfig {
            version: SCENARIO_FORMAT_VERSION.to_string(),
            parameters: SimulationConfig::default(),
            bodies: vec![
                BodyConfig::new("Sun", 1.989e30, [0.0, 0.0], [0.0, 0.0]),
                BodyConfig::new("Earth", 5.972e24, [1.496e11, 0.0], [0.0, 29.78e3]),
                BodyConfig::new(
                    "Moon",
                    7.348e22,
                    [1.496e11 + 384.4e6, 0.0],
                    [0.0, 29.78e3 + 1.022e3],
                ),
            ],
        }
    }

    /// Parse a scenario from YAML text and validate it
    pub fn from_yaml_str(yaml: &str) -> SimResult<Self> {
        let scenario: ScenarioConfig = serde_yaml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from a YAML file and validate it
    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let scenario: ScenarioConfig = serde_yaml::from_reader(reader)?;
        scenario.validate()?;
        info!("Loaded scenario {} with {} bodies", path.display(), scenario.bodies.len());
        Ok(scenario)
    }

    /// Check version compatibility, parameters and body count
    pub fn validate(&self) -> SimResult<()> {
        check_version(&self.version)?;
        self.parameters.validate()?;
        if self.bodies.is_empty() {
            return Err(SimError::Config("scenario has no bodies".to_string()));
        }
        Ok(())
    }

    /// Build the body store, validating every body
    pub fn body_store(&self) -> SimResult<BodyStore> {
        self.bodies.iter().map(BodyConfig::to_body).collect()
    }

    /// Display names in store order, falling back to `body-<index>`
    pub fn body_names(&self) -> Vec<String> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| b.name.clone().unwrap_or_else(|| format!("body-{}", i)))
            .collect()
    }

    /// Build a ready-to-run simulation
    pub fn build(&self) -> SimResult<Simulation> {
        self.validate()?;
        Simulation::new(self.body_store()?, &self.parameters)
    }
}

/// Check a scenario version against [`SCENARIO_FORMAT_VERSION`]
///
/// - Major version must match
/// - For major >= 1, file minor must be <= supported minor
/// - For major 0, minor must match exactly
/// - Patch version is ignored
fn check_version(found: &str) -> SimResult<()> {
    let file_ver = Version::parse(found)
        .map_err(|e| SimError::Config(format!("invalid scenario version `{}`: {}", found, e)))?;
    let supported = Version::parse(SCENARIO_FORMAT_VERSION)
        .map_err(|e| SimError::Config(format!("invalid built-in scenario version: {}", e)))?;

    let compatible = file_ver.major == supported.major
        && if supported.major == 0 {
            file_ver.minor == supported.minor
        } else {
            file_ver.minor <= supported.minor
        };

    if compatible {
        Ok(())
    } else {
        Err(SimError::IncompatibleScenarioVersion {
            found: found.to_string(),
            supported: SCENARIO_FORMAT_VERSION,
        })
    }
}
