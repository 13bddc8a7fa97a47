//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. It finds clusters of arbitrary
//! shape, decides the number of clusters by itself, and flags outliers as noise.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors (inclusive).
//! - **MinPts**: Minimum neighborhood size, counting the point itself, for a point to be "core".
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Reclaimed from noise by a cluster; joins it without extending it.
//! - **Noise point**: Never reached by any cluster.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in input order. For each unlabeled point P:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, mark as noise (may be reclaimed later)
//!    - Else P is core: start a new cluster and expand it
//!
//! 2. Expansion works through a FIFO frontier seeded with P's neighbors:
//!    - Unlabeled: add to cluster, query it, and push all of its neighbors
//!    - Noise: reclaim as a border point, never queried
//!    - Already clustered: skip
//!
//! Cluster ids follow scan order, so re-running on the same input always yields
//! the same numbering.
//!
//! ## Complexity
//!
//! - **Time**: O(n²), brute-force neighbor search.
//! - **Space**: O(n) for labels, plus the frontier.

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::labels::{Label, Labels};
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::point::Point;

/// How a neighbor found by a region query is mapped back to a point index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointIdentity {
    /// Neighbors carry their original index. Duplicate coordinates stay distinct.
    #[default]
    Index,
    /// Neighbors resolve to the first index whose coordinates are equal.
    ///
    /// Duplicate-coordinate points collapse onto their first occurrence during
    /// expansion, so a later duplicate is only labeled when the scan reaches it.
    Coordinates,
}

/// DBSCAN clustering over planar points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dbscan {
    /// Epsilon: neighborhood radius.
    eps: f64,
    /// Minimum neighborhood size (including the point itself) for a core point.
    min_pts: usize,
    /// Neighbor-to-index resolution.
    identity: PointIdentity,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum neighborhood size, counting the point itself.
    ///
    /// Parameters are checked when clustering, see [`Dbscan::validate`].
    pub fn new(eps: f64, min_pts: usize) -> Self {
        Self {
            eps,
            min_pts,
            identity: PointIdentity::Index,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Set how neighbors are mapped back to indices.
    pub fn with_identity(mut self, identity: PointIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Neighborhood radius.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Minimum neighborhood size.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Neighbor-to-index resolution.
    pub fn identity(&self) -> PointIdentity {
        self.identity
    }

    /// Check parameters: `eps` must be finite and positive, `min_pts` at least 1.
    pub fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be finite",
            });
        }

        if self.eps <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be positive",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Find all points within `eps` of `points[point_idx]`, itself included.
    ///
    /// Indices come back in scan order.
    pub fn region_query(&self, points: &[Point], point_idx: usize) -> Vec<usize> {
        let point = &points[point_idx];
        points
            .iter()
            .enumerate()
            .filter(|(_, other)| point.distance(other) <= self.eps)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Map a neighbor index to the index expansion should label.
    fn resolve(&self, points: &[Point], idx: usize) -> usize {
        match self.identity {
            PointIdentity::Index => idx,
            PointIdentity::Coordinates => {
                let target = points[idx];
                // NaN coordinates never compare equal; keep the tagged index.
                points.iter().position(|p| *p == target).unwrap_or(idx)
            }
        }
    }

    /// Try to grow cluster `cluster_id` from `seed_idx`.
    ///
    /// Returns `false` (and marks the seed as noise) when the seed is not core;
    /// the caller must not consume the id in that case.
    pub(crate) fn expand_cluster(
        &self,
        points: &[Point],
        seed_idx: usize,
        cluster_id: usize,
        labels: &mut [Option<Label>],
    ) -> bool {
        let seeds = self.region_query(points, seed_idx);
        if seeds.len() < self.min_pts {
            labels[seed_idx] = Some(Label::Noise);
            return false;
        }

        labels[seed_idx] = Some(Label::Cluster(cluster_id));

        let mut frontier: VecDeque<usize> = seeds.into();
        while let Some(neighbor) = frontier.pop_front() {
            let idx = self.resolve(points, neighbor);
            match labels[idx] {
                None => {
                    labels[idx] = Some(Label::Cluster(cluster_id));
                    frontier.extend(self.region_query(points, idx));
                }
                Some(Label::Noise) => {
                    // Border point: joins the cluster but does not propagate it.
                    labels[idx] = Some(Label::Cluster(cluster_id));
                }
                Some(Label::Cluster(_)) => {}
            }
        }

        true
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(45.0, 3)
    }
}

impl Clustering for Dbscan {
    fn fit_predict(&self, points: &[Point]) -> Result<Labels> {
        self.validate()?;

        let n = points.len();
        let mut labels: Vec<Option<Label>> = vec![None; n];
        let mut cluster_id = 0;

        for point_idx in 0..n {
            if labels[point_idx].is_some() {
                continue;
            }

            if self.expand_cluster(points, point_idx, cluster_id, &mut labels) {
                trace!("cluster {} seeded at point {}", cluster_id, point_idx);
                cluster_id += 1;
            }
        }

        // The scan visits every index, so nothing is left unclassified.
        let labels = Labels::from_vec(
            labels
                .into_iter()
                .map(|l| l.unwrap_or(Label::Noise))
                .collect(),
        );

        debug!(
            "dbscan: {} points, eps={}, min_pts={}, {} clusters, {} noise",
            n,
            self.eps,
            self.min_pts,
            cluster_id,
            labels.noise_count()
        );

        Ok(labels)
    }
}
