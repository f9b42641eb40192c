//! Pairwise distance matrix with max-distance normalization.

use super::point::Point;

/// Symmetric, zero-diagonal matrix of pairwise Euclidean distances.
///
/// Entries are divided by the largest pairwise distance at construction, so
/// every internal cost lies in `[0, 1]` and the floor temperature sits many
/// orders of magnitude below any meaningful cost difference. The divisor is
/// kept so reported costs can be rescaled back to original units.
///
/// The matrix is immutable after construction and safe to share across
/// concurrent runs by reference.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    dist: Vec<Vec<f64>>,
    max_dist: f64,
}

impl DistanceMatrix {
    /// Builds the normalized matrix from a list of sites.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dist = vec![vec![0.0; n]; n];
        let mut max_dist = 0.0f64;
        for i in 0..n {
            for j in 0..i {
                let d = points[i].distance(&points[j]);
                dist[i][j] = d;
                dist[j][i] = d;
                max_dist = max_dist.max(d);
            }
        }
        if max_dist > 0.0 {
            for row in &mut dist {
                for entry in row {
                    *entry /= max_dist;
                }
            }
        } else {
            // Degenerate instance (fewer than two distinct sites): leave the
            // zero matrix alone and make rescaling the identity.
            max_dist = 1.0;
        }
        Self { dist, max_dist }
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Normalized cost between two sites.
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.dist[i][j]
    }

    /// The normalization divisor: the largest original pairwise distance.
    pub fn max_dist(&self) -> f64 {
        self.max_dist
    }

    /// Rescales a normalized cost back to original distance units.
    pub fn rescale(&self, cost: f64) -> f64 {
        cost * self.max_dist
    }

    /// Total normalized cost of the closed cycle `tour[0] -> tour[1] -> ...
    /// -> tour[n-1] -> tour[0]`.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n).map(|i| self.dist[tour[i]][tour[(i + 1) % n]]).sum()
    }
}
