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
//! Sun / Earth / Moon headless driver
//!
//! Runs a scenario tick by tick and polls body positions between ticks, the
//! same way a plotting front end would. Positions are printed as CSV rows.
//!
//! # Running
//!
//! ```bash
//! # Built-in reference scenario, one year of hourly ticks, report daily
//! cargo run --example sun_earth_moon --release
//!
//! # Load a scenario file and stop after 100 frames
//! cargo run --example sun_earth_moon --release -- \
//!     --scenario gravity-engine/scenarios/sun_earth_moon.yaml --frames 100 --report-every 1
//!
//! # Show engine logs
//! RUST_LOG=debug cargo run --example sun_earth_moon --release
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use gravity_engine::diagnostics::{separation, Diagnostics};
use gravity_engine::{BodyId, BodyStore, ScenarioConfig};
use std::path::PathBuf;

/// Astronomical Unit in meters
const AU: f64 = 1.495978707e11;

/// One Earth day in seconds
const DAY: f64 = 86400.0;

#[derive(Parser, Debug)]
#[command(about = "Headless Sun/Earth/Moon gravity simulation")]
struct Args {
    /// YAML scenario file (defaults to the built-in Sun/Earth/Moon system)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the tick length in seconds
    #[arg(long)]
    timestep: Option<f64>,

    /// Override the simulated duration in years of 365 days
    #[arg(long)]
    years: Option<f64>,

    /// Number of ticks to run (defaults to duration / timestep)
    #[arg(long)]
    frames: Option<u64>,

    /// Print positions every N ticks (defaults to one simulated day)
    #[arg(long)]
    report_every: Option<u64>,
}

fn print_positions(tick: u64, names: &[String], bodies: &BodyStore) {
    let row: Vec<String> = bodies
        .iter()
        .zip(names)
        .map(|(body, name)| {
            let p = body.position();
            format!("{}=({:.6e},{:.6e})", name, p.x(), p.y())
        })
        .collect();
    println!("{},{}", tick, row.join(","));
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::reference(),
    };

    if let Some(dt) = args.timestep {
        scenario.parameters.timestep = dt;
    }
    if let Some(years) = args.years {
        scenario.parameters.duration = years * 365.0 * DAY;
    }

    let mut sim = scenario.build().context("invalid scenario")?;
    let names = scenario.body_names();
    let frames = args.frames.unwrap_or_else(|| scenario.parameters.tick_count());
    let report_every = args
        .report_every
        .unwrap_or_else(|| (DAY / sim.timestep()).round() as u64)
        .max(1);

    println!("# bodies: {}", names.join(", "));
    println!(
        "# dt = {} s, frames = {}, G = {:.5e}",
        sim.timestep(),
        frames,
        sim.gravitational_constant()
    );

    let initial = Diagnostics::capture(&sim);
    print_positions(0, &names, sim.bodies());

    sim.run_with(frames, |tick, bodies| {
        if tick % report_every == 0 || tick == frames {
            print_positions(tick, &names, bodies);
        }
    });

    let last = Diagnostics::capture(&sim);
    println!("# {}", initial);
    println!("# {}", last);
    println!("# relative energy drift: {:.6e}", last.energy_drift(&initial));

    if names.len() > 1 {
        if let Some(r) = separation(&sim, BodyId::new(0), BodyId::new(1)) {
            println!("# {} - {} distance: {:.6e} m ({:.4} AU)", names[0], names[1], r, r / AU);
        }
    }

    Ok(())
}
