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
//! Scenario file loading tests

use gravity_engine::bodies::BodyId;
use gravity_engine::{ScenarioConfig, SimError};
use std::path::PathBuf;

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

#[test]
fn test_bundled_scenario_matches_reference() {
    let loaded = ScenarioConfig::from_path(scenario_path("sun_earth_moon.yaml")).unwrap();
    let reference = ScenarioConfig::reference();

    assert_eq!(loaded.parameters, reference.parameters);
    assert_eq!(loaded.body_names(), reference.body_names());

    let a = loaded.body_store().unwrap();
    let b = reference.body_store().unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.mass(), y.mass());
        assert!((x.position() - y.position()).magnitude() < 1.0);
        assert_eq!(x.velocity(), y.velocity());
    }
}

#[test]
fn test_bundled_scenario_runs() {
    let scenario = ScenarioConfig::from_path(scenario_path("sun_earth_moon.yaml")).unwrap();
    let mut sim = scenario.build().unwrap();

    sim.run(24 * 30);

    assert_eq!(sim.elapsed_ticks(), 720);
    assert!((sim.elapsed_time() - 720.0 * 3600.0).abs() < 1e-6);
    let earth = sim.position_of(BodyId::new(1)).unwrap();
    assert!(earth.is_valid());
    assert!(earth.y() > 0.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ScenarioConfig::from_path(scenario_path("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_unknown_field_rejected() {
    let yaml = r#"
version: "1.0.0"
bodies:
  - mass: 1.0
    position: [0.0, 0.0]
    velocity: [0.0, 0.0]
    radius: 3.0
"#;
    assert!(matches!(ScenarioConfig::from_yaml_str(yaml), Err(SimError::Yaml(_))));
}

#[test]
fn test_future_major_version_rejected() {
    let yaml = r#"
version: "2.0.0"
bodies:
  - mass: 1.0
    position: [0.0, 0.0]
    velocity: [0.0, 0.0]
"#;
    let err = ScenarioConfig::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, SimError::IncompatibleScenarioVersion { .. }));
}
