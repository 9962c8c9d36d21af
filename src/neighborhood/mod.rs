//! Neighborhood operators for moving between solutions.
//!
//! - [`Crossover`] — tail swap between two brigades
//! - [`Mutation`] — swap two stops within one route
//! - [`Shuffle`] — random permutation of one route
//! - [`RandomOf`] — uniform choice among operators
//! - [`Multi`] — operators applied in sequence
//! - [`BestOfN`] — best of repeated applications under a fitness

mod best_of;
mod crossover;
mod generator;
mod multi;
mod mutation;
mod random_of;
mod shuffle;

pub use best_of::BestOfN;
pub use crossover::{crossover_at, Crossover};
pub use generator::NeighborhoodGenerator;
pub use multi::Multi;
pub use mutation::Mutation;
pub use random_of::{RandomOf, SelectionMode};
pub use shuffle::Shuffle;
