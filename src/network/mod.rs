//! Travel times and the location network.
//!
//! Provides a dense directed travel-time matrix and the validated
//! [`Network`] that ties the depot, the locations and the matrix together.

mod matrix;
#[allow(clippy::module_inception)]
mod network;

pub use matrix::TravelMatrix;
pub use network::Network;
