//! Density clustering for planar points.
//!
//! ## DBSCAN
//!
//! DBSCAN groups points by density. Given a radius `eps` and a minimum
//! neighborhood size `min_pts`, it partitions points into connected dense
//! regions and flags sparse points as noise. It does not need the number of
//! clusters in advance.
//!
//! Every run is a full recomputation: the output depends only on the point
//! sequence and the parameters. Cluster ids are assigned in scan order, so the
//! same input always produces the same numbering.
//!
//! ## Usage
//!
//! ```rust
//! use clusterpad::cluster::{Clustering, Dbscan, Label};
//! use clusterpad::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 0.5),
//!     Point::new(10.0, 10.0),
//! ];
//!
//! let labels = Dbscan::new(1.0, 2).fit_predict(&points).unwrap();
//! assert_eq!(labels[0], Label::Cluster(0));
//! assert_eq!(labels[1], Label::Cluster(0));
//! assert_eq!(labels[2], Label::Noise);
//! assert_eq!(labels.to_raw(), vec![0, 0, -1]);
//! ```

mod dbscan;
mod labels;
mod traits;

pub use dbscan::{Dbscan, PointIdentity};
pub use labels::{Label, Labels, NOISE};
pub use traits::Clustering;
