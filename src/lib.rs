#[macro_use]
extern crate log;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

pub mod config;
pub mod error;
pub mod interactor;
pub mod models;
pub mod simulation;
pub mod snapshot;
