//! Location, coordinate and opening-hour types.

use serde::{Deserialize, Serialize};

/// Hours in a day; opening hours are tracked at hour granularity.
pub const HOURS_PER_DAY: usize = 24;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use u_brigade::models::Coords;
///
/// let porto = Coords::new(41.1579, -8.6291);
/// let lisbon = Coords::new(38.7223, -9.1393);
/// let d = porto.distance_km(&lisbon);
/// assert!(d > 270.0 && d < 280.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coords {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coords {
    /// Creates a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometres (haversine formula).
    pub fn distance_km(&self, other: &Coords) -> f64 {
        let lat_diff = (other.latitude - self.latitude).to_radians();
        let lon_diff = (other.longitude - self.longitude).to_radians();
        let arc = (lat_diff / 2.0).sin().powi(2)
            + (lon_diff / 2.0).sin().powi(2)
                * self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos();
        2.0 * arc.sqrt().asin() * EARTH_RADIUS_KM
    }
}

/// Hour-of-day opening mask. Index `h` means open during `[h:00, h+1:00)`.
///
/// # Examples
///
/// ```
/// use u_brigade::models::OpeningHours;
///
/// let hours = OpeningHours::from_hours(&[14]);
/// assert!(hours.is_open(14));
/// assert!(!hours.is_open(9));
/// assert_eq!(hours.next_open_offset(9), Some(5));
/// assert_eq!(hours.next_open_offset(15), Some(23));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours([bool; HOURS_PER_DAY]);

impl OpeningHours {
    /// Open every hour of the day.
    pub fn always_open() -> Self {
        Self([true; HOURS_PER_DAY])
    }

    /// Closed every hour of the day.
    pub fn never_open() -> Self {
        Self([false; HOURS_PER_DAY])
    }

    /// Open exactly at the listed hours. Values are taken modulo 24.
    pub fn from_hours(hours: &[u8]) -> Self {
        let mut mask = [false; HOURS_PER_DAY];
        for &h in hours {
            mask[h as usize % HOURS_PER_DAY] = true;
        }
        Self(mask)
    }

    /// Builds the mask from the low 24 bits of `bits` (bit `h` = hour `h`).
    pub fn from_mask(bits: u32) -> Self {
        let mut mask = [false; HOURS_PER_DAY];
        for (h, open) in mask.iter_mut().enumerate() {
            *open = bits & (1 << h) != 0;
        }
        Self(mask)
    }

    /// Returns `true` if open at the given hour (taken modulo 24).
    pub fn is_open(&self, hour: usize) -> bool {
        self.0[hour % HOURS_PER_DAY]
    }

    /// Returns `true` if there is no open hour at all.
    pub fn is_never_open(&self) -> bool {
        self.0.iter().all(|&open| !open)
    }

    /// Number of hours to move forward from `hour` (inclusive) to reach an
    /// open hour, wrapping over midnight.
    ///
    /// Returns `None` if the location never opens.
    pub fn next_open_offset(&self, hour: usize) -> Option<usize> {
        (0..HOURS_PER_DAY).find(|&k| self.is_open(hour + k))
    }

    /// The raw mask.
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self::always_open()
    }
}

/// An establishment to inspect (or the depot).
///
/// The `id` is stable and doubles as the row/column index into the
/// travel matrix.
///
/// # Examples
///
/// ```
/// use u_brigade::models::{Coords, Location, OpeningHours};
///
/// let depot = Location::depot(0, Coords::new(41.15, -8.61));
/// assert_eq!(depot.service_duration(), 0.0);
///
/// let shop = Location::new(3, Coords::new(41.16, -8.60), 1800.0)
///     .with_opening_hours(OpeningHours::from_hours(&[10, 11, 12]))
///     .with_utility(4.5);
/// assert_eq!(shop.id(), 3);
/// assert!(shop.opening_hours().is_open(11));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    coords: Coords,
    opening_hours: OpeningHours,
    service_duration: f64,
    utility: f64,
}

impl Location {
    /// Creates a location that is always open, with the given service
    /// duration in seconds.
    pub fn new(id: usize, coords: Coords, service_duration: f64) -> Self {
        Self {
            id,
            coords,
            opening_hours: OpeningHours::always_open(),
            service_duration,
            utility: 0.0,
        }
    }

    /// Creates a depot: always open, no service time.
    pub fn depot(id: usize, coords: Coords) -> Self {
        Self::new(id, coords, 0.0)
    }

    /// Sets the opening hours.
    pub fn with_opening_hours(mut self, hours: OpeningHours) -> Self {
        self.opening_hours = hours;
        self
    }

    /// Sets the inspection utility score.
    pub fn with_utility(mut self, utility: f64) -> Self {
        self.utility = utility;
        self
    }

    /// Location ID (matrix index).
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    pub fn opening_hours(&self) -> &OpeningHours {
        &self.opening_hours
    }

    /// Service (inspection) duration in seconds.
    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }

    /// Benefit score of inspecting this location.
    pub fn utility(&self) -> f64 {
        self.utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_hours_from_hours() {
        let hours = OpeningHours::from_hours(&[9, 10, 33]);
        assert!(hours.is_open(9));
        assert!(hours.is_open(10));
        assert!(hours.is_open(33)); // 33 % 24 == 9
        assert!(!hours.is_open(11));
    }

    #[test]
    fn test_opening_hours_from_mask() {
        let hours = OpeningHours::from_mask(0b101);
        assert!(hours.is_open(0));
        assert!(!hours.is_open(1));
        assert!(hours.is_open(2));
        assert!(!hours.is_open(23));
    }

    #[test]
    fn test_next_open_offset_inclusive() {
        let hours = OpeningHours::from_hours(&[9]);
        assert_eq!(hours.next_open_offset(9), Some(0));
        assert_eq!(hours.next_open_offset(8), Some(1));
    }

    #[test]
    fn test_next_open_offset_wraps_midnight() {
        let hours = OpeningHours::from_hours(&[2]);
        assert_eq!(hours.next_open_offset(22), Some(4));
    }

    #[test]
    fn test_never_open() {
        let hours = OpeningHours::never_open();
        assert!(hours.is_never_open());
        assert_eq!(hours.next_open_offset(0), None);
        assert!(!OpeningHours::always_open().is_never_open());
    }

    #[test]
    fn test_location_defaults() {
        let loc = Location::new(1, Coords::new(0.0, 0.0), 600.0);
        assert_eq!(loc.id(), 1);
        assert_eq!(loc.service_duration(), 600.0);
        assert_eq!(loc.utility(), 0.0);
        assert_eq!(*loc.opening_hours(), OpeningHours::always_open());
    }

    #[test]
    fn test_haversine_zero_and_symmetric() {
        let a = Coords::new(41.0, -8.0);
        let b = Coords::new(40.0, -7.5);
        assert!(a.distance_km(&a).abs() < 1e-10);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(1.0, 0.0);
        // 2 * pi * 6371 / 360
        assert!((a.distance_km(&b) - 111.194_926_6).abs() < 1e-3);
    }
}
