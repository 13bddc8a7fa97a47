use super::labels::Labels;
use crate::error::Result;
use crate::point::Point;

/// Common interface for hard clustering of planar points (one label per point).
pub trait Clustering {
    /// Cluster `points` and return one label per input point, in input order.
    fn fit_predict(&self, points: &[Point]) -> Result<Labels>;
}
