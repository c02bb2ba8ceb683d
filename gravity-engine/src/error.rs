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
//! Error types for simulation setup
//!
//! Every fallible operation in the engine happens before the first tick:
//! building bodies, configuring gravity and timestep, and loading scenario
//! files. Once a [`Simulation`](crate::Simulation) exists, ticking never fails.

use thiserror::Error;

/// Errors raised while constructing or configuring a simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// A physical or numerical parameter is outside its valid domain
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable constraint that was violated
        reason: &'static str,
    },

    /// A scenario description is structurally wrong
    #[error("invalid scenario: {0}")]
    Config(String),

    /// The scenario file declares a format version this engine cannot read
    #[error("scenario format version {found} is not compatible with supported version {supported}")]
    IncompatibleScenarioVersion {
        /// Version declared by the file
        found: String,
        /// Version understood by this build
        supported: &'static str,
    },

    /// Reading a scenario file failed
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a scenario file failed
    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimError::InvalidParameter { name, value, reason }
    }

    /// Returns true if this is an [`SimError::InvalidParameter`]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SimError::InvalidParameter { .. })
    }
}

/// Result alias used throughout the crate
pub type SimResult<T> = Result<T, SimError>;
