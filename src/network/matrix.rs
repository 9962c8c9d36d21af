//! Dense travel-time matrix.

use serde::{Deserialize, Serialize};

use crate::error::NetworkError;
use crate::models::Coords;

/// A dense n×n matrix of directed travel times (seconds), row-major.
///
/// `get(i, j)` is the time to travel from location `i` to location `j`.
/// Symmetry is not assumed. Entries must be finite and non-negative.
///
/// # Examples
///
/// ```
/// use u_brigade::network::TravelMatrix;
///
/// let m = TravelMatrix::from_rows(vec![
///     vec![0.0, 60.0],
///     vec![90.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.get(0, 1), 60.0);
/// assert_eq!(m.get(1, 0), 90.0);
///
/// assert!(TravelMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelMatrix {
    times: Vec<f64>,
    n: usize,
}

impl TravelMatrix {
    /// An `n`×`n` matrix where every trip is instantaneous.
    pub fn new(n: usize) -> Self {
        Self {
            times: vec![0.0; n * n],
            n,
        }
    }

    /// Creates a matrix from an explicit row-major n×n buffer.
    pub fn from_data(n: usize, times: Vec<f64>) -> Result<Self, NetworkError> {
        if times.len() != n * n {
            return Err(NetworkError::MatrixDataLength {
                size: n,
                len: times.len(),
            });
        }
        let matrix = Self { times, n };
        matrix.check_entries()?;
        Ok(matrix)
    }

    /// Creates a matrix from nested rows; every row must have `rows.len()`
    /// columns.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, NetworkError> {
        let n = rows.len();
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(NetworkError::MatrixNotSquare {
                rows: n,
                row,
                len: values.len(),
            });
        }
        Self::from_data(n, rows.concat())
    }

    /// Estimates travel times from great-circle distances at a constant
    /// speed. `points[i]` is the position of location `i`.
    pub fn from_coords(points: &[Coords], speed_kmh: f64) -> Self {
        let n = points.len();
        let times = points
            .iter()
            .flat_map(|a| points.iter().map(move |b| a.distance_km(b) / speed_kmh * 3600.0))
            .collect();
        Self { times, n }
    }

    /// Travel time from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.size()`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.times[self.offset(from, to)]
    }

    /// Overwrites one directed trip. Validity is checked again when the
    /// matrix is handed to a [`Network`](super::Network).
    pub fn set(&mut self, from: usize, to: usize, seconds: f64) {
        let at = self.offset(from, to);
        self.times[at] = seconds;
    }

    /// Number of locations covered, depot included.
    pub fn size(&self) -> usize {
        self.n
    }

    /// First entry that is negative, infinite or NaN.
    pub(crate) fn check_entries(&self) -> Result<(), NetworkError> {
        match self.times.iter().position(|t| !(t.is_finite() && *t >= 0.0)) {
            Some(at) => Err(NetworkError::InvalidTravelTime {
                from: at / self.n,
                to: at % self.n,
                seconds: self.times[at],
            }),
            None => Ok(()),
        }
    }

    fn offset(&self, from: usize, to: usize) -> usize {
        from * self.n + to
    }

    /// Returns the candidate reachable soonest from `from`.
    ///
    /// Ties go to the earliest candidate in iteration order, so an ordered
    /// candidate set yields the lowest ID. Returns `None` if there are no
    /// candidates.
    pub fn nearest(
        &self,
        from: usize,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
