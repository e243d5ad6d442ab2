use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::error::Result;
use crate::simulation::*;

/// Reads the config from stdin, then streams one JSON frame per line to
/// stdout until the outbreak is over or `MAX_TICKS` is reached.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let config = read_config(&mut stdin.lock())?;
    let simulation = get_simulation(Model::with_config(&config)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let time = drive(simulation, config.max_ticks, &mut out)?;
    info!("finished after {} ticks", time);
    Ok(())
}

#[cfg(not(feature = "debug"))]
fn get_simulation(model: Model) -> Model {
    model
}

#[cfg(feature = "debug")]
fn get_simulation(model: Model) -> TimingWrapper<Model> {
    TimingWrapper::new(model)
}

/// An empty first line keeps the defaults.
pub fn read_config<R: BufRead>(input: &mut R) -> Result<Config> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.trim().is_empty() {
        return Ok(Config::default());
    }
    let json: serde_json::Value = serde_json::from_str(&line)?;
    Config::from_json(&json)
}

/// Ticks `simulation` and writes every frame, the initial one included.
/// Returns the time reached.
pub fn drive<S: Simulation, W: Write>(mut simulation: S, max_ticks: Tick, out: &mut W) -> Result<Tick> {
    print_frame(&simulation, out)?;
    while !simulation.is_complete() && simulation.time() < max_ticks {
        simulation.tick();
        print_frame(&simulation, out)?;
    }
    if !simulation.is_complete() {
        warn!("stopped at tick {} with infection still spreading", simulation.time());
    }
    out.flush()?;
    Ok(simulation.time())
}

fn print_frame<S: Simulation, W: Write>(simulation: &S, out: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *out, &simulation.snapshot())?;
    writeln!(out)?;
    Ok(())
}
