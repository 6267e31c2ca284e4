mod unit;

pub use unit::{OccupancyType, UnitEntry};
