pub use self::model::Model;
#[cfg(feature = "debug")]
pub use self::timing_wrapper::TimingWrapper;

use crate::snapshot::Snapshot;

mod model;
#[cfg(feature = "debug")]
mod timing_wrapper;

pub type Tick = i64;

/// What a driver needs from a running simulation.
pub trait Simulation {
    fn tick(&mut self);

    fn is_complete(&self) -> bool;

    fn time(&self) -> Tick;

    fn snapshot(&self) -> Snapshot;
}
