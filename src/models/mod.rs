pub use self::cell::{Cell, Color, InfectionTicks, Sickness};
pub use self::point::Point;

mod cell;
mod point;
