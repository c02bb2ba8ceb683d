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
//! Conservation and orbit tests
//!
//! Verifies Newton's third law, momentum conservation across ticks, and that
//! realistic orbits stay closed over a simulated year.

use gravity_engine::bodies::{Body, BodyId, BodyStore, Vec2};
use gravity_engine::diagnostics::{separation, total_momentum, Diagnostics};
use gravity_engine::gravity::GravityModel;
use gravity_engine::{ScenarioConfig, Simulation, SimulationConfig};

const SUN_MASS: f64 = 1.989e30;
const EARTH_MASS: f64 = 5.972e24;
const EARTH_ORBIT: f64 = 1.496e11;
const EARTH_SPEED: f64 = 29.78e3;
const YEAR: f64 = 365.0 * 24.0 * 3600.0;

fn assert_opposite(a: Vec2, b: Vec2) {
    let sum = a + b;
    let scale = a.magnitude().max(b.magnitude());
    assert!(
        sum.magnitude() <= scale * 1e-14,
        "forces not equal and opposite: {:?} vs {:?}",
        a,
        b
    );
}

fn sun_earth() -> Simulation {
    let mut store = BodyStore::new();
    store.add_body(SUN_MASS, Vec2::zero(), Vec2::zero()).unwrap();
    store
        .add_body(EARTH_MASS, Vec2::new(EARTH_ORBIT, 0.0), Vec2::new(0.0, EARTH_SPEED))
        .unwrap();
    Simulation::new(store, &SimulationConfig::default()).unwrap()
}

#[test]
fn test_newton_third_law_pairwise() {
    let gravity = GravityModel::default();
    let cases = [
        (1.0, 2.0, [0.0, 0.0], [1.0, 0.0]),
        (5.0e24, 7.0e22, [1.0e11, -3.0e9], [1.004e11, 2.0e8]),
        (3.3, 1.0e10, [-4.0, 12.0], [8.0, -7.5]),
    ];

    for (m1, m2, p1, p2) in cases {
        let b1 = Body::new(m1, p1.into(), Vec2::zero()).unwrap();
        let b2 = Body::new(m2, p2.into(), Vec2::zero()).unwrap();

        let f12 = gravity.pairwise_force(&b1, &b2);
        let f21 = gravity.pairwise_force(&b2, &b1);

        assert!(f12.magnitude() > 0.0);
        assert_opposite(f12, f21);
    }
}

#[test]
fn test_newton_third_law_after_force_pass() {
    let mut sim = sun_earth();
    let pass = sim.compute_forces();
    let forces = pass.forces();
    pass.integrate(3600.0);

    assert_opposite(forces[0], forces[1]);

    // |F| = G M m / r²
    let expected =
        sim.gravitational_constant() * SUN_MASS * EARTH_MASS / (EARTH_ORBIT * EARTH_ORBIT);
    assert!((forces[1].magnitude() - expected).abs() / expected < 1e-12);
    assert!(forces[1].x() < 0.0, "Earth must be pulled toward the Sun");
}

#[test]
fn test_momentum_conserved_over_ticks() {
    let mut sim = ScenarioConfig::reference().build().unwrap();
    let p0 = total_momentum(sim.bodies().as_slice());

    sim.run(500);

    let p1 = total_momentum(sim.bodies().as_slice());
    let drift = (p1 - p0).magnitude() / p0.magnitude();
    assert!(drift < 1e-9, "momentum drift too large: {:e}", drift);
}

#[test]
fn test_two_body_orbit_stays_closed_for_a_year() {
    let mut sim = sun_earth();
    let earth = BodyId::new(1);
    let ticks = (YEAR / sim.timestep()) as u64;
    assert_eq!(ticks, 8760);

    let mut max_deviation: f64 = 0.0;
    sim.run_with(ticks, |_, bodies| {
        let r = bodies.position_of(earth).unwrap().magnitude();
        max_deviation = max_deviation.max((r - EARTH_ORBIT).abs() / EARTH_ORBIT);
    });

    assert_eq!(sim.elapsed_ticks(), 8760);
    assert!(
        max_deviation < 0.05,
        "Earth drifted {:.2}% from its initial orbital radius",
        max_deviation * 100.0
    );
}

#[test]
fn test_earth_completes_most_of_an_orbit() {
    let mut sim = sun_earth();
    let earth = BodyId::new(1);

    // Half a year puts Earth on the far side of the Sun
    sim.run(8760 / 2);
    let half = sim.position_of(earth).unwrap();
    assert!(half.x() < -0.9 * EARTH_ORBIT, "unexpected position {:?}", half);
}

#[test]
fn test_reference_scenario_energy_drift_bounded() {
    let mut sim = ScenarioConfig::reference().build().unwrap();
    let initial = Diagnostics::capture(&sim);

    sim.run(SimulationConfig::default().tick_count());

    let last = Diagnostics::capture(&sim);
    assert!(last.total_energy() < 0.0, "system must stay bound");
    assert!(
        last.energy_drift(&initial) < 0.01,
        "energy drift {:e} too large",
        last.energy_drift(&initial)
    );
}

#[test]
fn test_moon_stays_bound_to_earth() {
    let mut sim = ScenarioConfig::reference().build().unwrap();
    let (earth, moon) = (BodyId::new(1), BodyId::new(2));
    let initial = separation(&sim, earth, moon).unwrap();
    assert!((initial - 384.4e6).abs() < 1.0);

    let mut closest = f64::MAX;
    let mut farthest: f64 = 0.0;
    for _ in 0..SimulationConfig::default().tick_count() {
        sim.step();
        let d = separation(&sim, earth, moon).unwrap();
        closest = closest.min(d);
        farthest = farthest.max(d);
    }

    assert!(closest > 2.0e8, "Moon fell toward Earth: {:e} m", closest);
    assert!(farthest < 6.0e8, "Moon escaped Earth: {:e} m", farthest);
}
