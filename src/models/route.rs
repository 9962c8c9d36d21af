//! Route and brigade types.

use serde::{Deserialize, Serialize};

/// An ordered sequence of location IDs visited by one brigade.
///
/// The depot is not stored; every route implicitly starts there.
///
/// # Examples
///
/// ```
/// use u_brigade::models::Route;
///
/// let mut route = Route::new();
/// route.push(4);
/// route.push(2);
/// assert_eq!(route.location_ids(), &[4, 2]);
/// assert_eq!(route.last(), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    location_ids: Vec<usize>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a route visiting the given locations in order.
    pub fn from_ids(location_ids: Vec<usize>) -> Self {
        Self { location_ids }
    }

    /// Appends a location to the end of this route.
    pub fn push(&mut self, location_id: usize) {
        self.location_ids.push(location_id);
    }

    /// Location IDs in visit order.
    pub fn location_ids(&self) -> &[usize] {
        &self.location_ids
    }

    /// Mutable access for operators that permute a freshly cloned route.
    pub fn location_ids_mut(&mut self) -> &mut [usize] {
        &mut self.location_ids
    }

    /// The last visited location, if any.
    pub fn last(&self) -> Option<usize> {
        self.location_ids.last().copied()
    }

    pub fn len(&self) -> usize {
        self.location_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.location_ids.is_empty()
    }
}

/// A carrier (inspection brigade) with its assigned route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brigade {
    route: Route,
}

impl Brigade {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn route_mut(&mut self) -> &mut Route {
        &mut self.route
    }

    /// Consumes the brigade, returning its route.
    pub fn into_route(self) -> Route {
        self.route
    }
}

impl From<Vec<usize>> for Brigade {
    fn from(location_ids: Vec<usize>) -> Self {
        Self::new(Route::from_ids(location_ids))
    }
}
