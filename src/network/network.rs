//! The travel network: depot, establishments and travel times.

use crate::error::NetworkError;
use crate::models::Location;

use super::TravelMatrix;

/// Immutable problem data shared by every component of a run.
///
/// The depot is held separately from the locations to visit; IDs index the
/// travel matrix and do not need to be contiguous.
///
/// # Examples
///
/// ```
/// use u_brigade::models::{Coords, Location};
/// use u_brigade::network::{Network, TravelMatrix};
///
/// let depot = Location::depot(0, Coords::default());
/// let locations = vec![
///     Location::new(1, Coords::default(), 600.0),
///     Location::new(2, Coords::default(), 600.0),
/// ];
/// let matrix = TravelMatrix::from_rows(vec![
///     vec![0.0, 10.0, 20.0],
///     vec![10.0, 0.0, 15.0],
///     vec![20.0, 15.0, 0.0],
/// ]).unwrap();
///
/// let network = Network::new(depot, locations, matrix).unwrap();
/// assert_eq!(network.num_locations(), 2);
/// assert_eq!(network.travel_time(0, 2), 20.0);
/// assert_eq!(network.location(1).map(|l| l.id()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    depot: Location,
    locations: Vec<Location>,
    matrix: TravelMatrix,
    // id -> position in `locations`
    index: Vec<Option<usize>>,
}

impl Network {
    /// Validates and assembles a network.
    ///
    /// Every ID (depot included) must fit in the matrix, location IDs must be
    /// unique, the depot must not be listed among the locations, there
    /// must be at least one location, and every travel time must be finite
    /// and non-negative.
    pub fn new(
        depot: Location,
        locations: Vec<Location>,
        matrix: TravelMatrix,
    ) -> Result<Self, NetworkError> {
        if locations.is_empty() {
            return Err(NetworkError::EmptyLocationSet);
        }
        matrix.check_entries()?;
        let size = matrix.size();
        if depot.id() >= size {
            return Err(NetworkError::LocationOutOfRange {
                id: depot.id(),
                size,
            });
        }

        let mut index = vec![None; size];
        for (pos, location) in locations.iter().enumerate() {
            let id = location.id();
            if id == depot.id() {
                return Err(NetworkError::DepotListed(id));
            }
            let slot = index
                .get_mut(id)
                .ok_or(NetworkError::LocationOutOfRange { id, size })?;
            if slot.is_some() {
                return Err(NetworkError::DuplicateLocation(id));
            }
            *slot = Some(pos);
        }

        Ok(Self {
            depot,
            locations,
            matrix,
            index,
        })
    }

    /// Builds a network whose travel times are straight-line estimates at
    /// `speed_kmh`.
    pub fn from_coordinates(
        depot: Location,
        locations: Vec<Location>,
        speed_kmh: f64,
    ) -> Result<Self, NetworkError> {
        let size = locations
            .iter()
            .map(Location::id)
            .chain(std::iter::once(depot.id()))
            .max()
            .map_or(0, |max| max + 1);
        let mut points = vec![*depot.coords(); size];
        for location in &locations {
            points[location.id()] = *location.coords();
        }
        let matrix = TravelMatrix::from_coords(&points, speed_kmh);
        Self::new(depot, locations, matrix)
    }

    pub fn depot(&self) -> &Location {
        &self.depot
    }

    /// The locations to visit (depot excluded).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// IDs of the locations to visit, in ascending order.
    pub fn location_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.locations.iter().map(Location::id).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of locations to visit (depot excluded).
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// Looks up a location to visit by ID.
    pub fn location(&self, id: usize) -> Option<&Location> {
        self.index
            .get(id)
            .copied()
            .flatten()
            .map(|pos| &self.locations[pos])
    }

    pub fn matrix(&self) -> &TravelMatrix {
        &self.matrix
    }

    /// Directed travel time in seconds.
    pub fn travel_time(&self, from: usize, to: usize) -> f64 {
        self.matrix.get(from, to)
    }
}
