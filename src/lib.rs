//! Density clustering for interactively placed points.
//!
//! `clusterpad` runs DBSCAN over a 2D point set and maps the result onto a
//! small display contract.
//!
//! - [`cluster`]: the clustering engine (DBSCAN over [`Point`]s)
//! - [`render`]: cluster-to-color palette and per-point marks
//! - [`session`]: point set, parameters and display flag, re-clustered on every change

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod point;
pub mod render;
pub mod session;

pub use cluster::{Clustering, Dbscan, Label, Labels, PointIdentity, NOISE};
pub use error::{Error, Result};
pub use point::Point;
pub use render::{display_list, Color, DisplayOptions, Mark, Palette};
pub use session::{Session, SessionConfig};
