use time::precise_time_s;

use crate::simulation::*;

const SLOW_TICK_SECS: f64 = 1.0 / 60.0;

/// Logs the wall time each tick takes.
pub struct TimingWrapper<S: Simulation> {
    simulation: S,
    start: f64,
}

impl<S: Simulation> TimingWrapper<S> {
    pub fn new(simulation: S) -> TimingWrapper<S> {
        TimingWrapper {
            simulation,
            start: precise_time_s(),
        }
    }

    pub fn into_inner(self) -> S {
        self.simulation
    }
}

impl<S: Simulation> Simulation for TimingWrapper<S> {
    fn tick(&mut self) {
        let tick_start = precise_time_s();
        self.simulation.tick();
        let now = precise_time_s();
        let elapsed = now - tick_start;
        if elapsed > SLOW_TICK_SECS {
            warn!("SLOW tick {}: {:.4}s", self.simulation.time(), elapsed);
        } else {
            debug!(
                "tick {}: {:.4}s, {:.2}s total",
                self.simulation.time(),
                elapsed,
                now - self.start
            );
        }
    }

    fn is_complete(&self) -> bool {
        self.simulation.is_complete()
    }

    fn time(&self) -> Tick {
        self.simulation.time()
    }

    fn snapshot(&self) -> Snapshot {
        self.simulation.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_to_wrapped_simulation() -> crate::error::Result<()> {
        let mut wrapped = TimingWrapper::new(Model::new(10, 1.0, 1, 0)?);
        wrapped.tick();
        wrapped.tick();
        assert_eq!(wrapped.time(), 2);
        assert_eq!(wrapped.snapshot().time, 2);
        assert_eq!(wrapped.into_inner().time(), 2);
        Ok(())
    }
}
