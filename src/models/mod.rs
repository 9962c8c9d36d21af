//! Domain model types for brigade routing.
//!
//! Provides the core abstractions: locations with opening hours and
//! inspection data, routes as ordered sequences of location IDs, brigades
//! that own one route each, and solutions that partition every location
//! among the brigades.

mod location;
mod route;
mod solution;

pub use location::{Coords, Location, OpeningHours, HOURS_PER_DAY};
pub use route::{Brigade, Route};
pub use solution::Solution;
