//! Interactive clustering session.
//!
//! A [`Session`] owns the point set, the DBSCAN parameters and the display
//! flag. Labels are derived state: any change to the points or parameters
//! re-runs the whole clustering, so the labels never lag behind their inputs.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cluster::{Clustering, Dbscan, Labels};
use crate::error::Result;
use crate::point::Point;
use crate::render::{display_list, DisplayOptions, Mark, Palette};

/// Session configuration, typically loaded from YAML.
///
/// Clustering and display keys sit at the top level:
///
/// ```yaml
/// eps: 45.0
/// min_pts: 3
/// identity: index
/// show_radius: true
/// dot_radius: 3.0
/// points:
///   - { x: 10.0, y: 20.0 }
/// ```
///
/// Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Clustering parameters
    #[serde(flatten)]
    pub dbscan: Dbscan,
    /// Display settings
    #[serde(flatten)]
    pub display: DisplayOptions,
    /// Initial points
    #[serde(default)]
    pub points: Vec<Point>,
}

impl SessionConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Write the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Point set, parameters and display flag, with labels kept in sync.
#[derive(Debug, Clone)]
pub struct Session {
    points: Vec<Point>,
    dbscan: Dbscan,
    display: DisplayOptions,
    palette: Palette,
    labels: Labels,
}

impl Session {
    /// Start an empty session. Fails if the parameters are invalid.
    pub fn new(dbscan: Dbscan) -> Result<Self> {
        Self::with_points(dbscan, Vec::new())
    }

    /// Start a session with initial points.
    pub fn with_points(dbscan: Dbscan, points: Vec<Point>) -> Result<Self> {
        let labels = dbscan.fit_predict(&points)?;
        Ok(Self {
            points,
            dbscan,
            display: DisplayOptions::default(),
            palette: Palette::default(),
            labels,
        })
    }

    /// Build a session from a configuration.
    pub fn from_config(config: SessionConfig) -> Result<Self> {
        let mut session = Self::with_points(config.dbscan, config.points)?;
        session.display = config.display;
        Ok(session)
    }

    /// Snapshot the points, parameters and display settings.
    pub fn to_config(&self) -> SessionConfig {
        SessionConfig {
            dbscan: self.dbscan.clone(),
            display: self.display,
            points: self.points.clone(),
        }
    }

    /// Replace the palette used by [`Session::marks`].
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Labels for [`Session::points`], from the latest clustering run.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Current clustering parameters.
    pub fn dbscan(&self) -> &Dbscan {
        &self.dbscan
    }

    /// Whether marks carry the `eps` circle.
    pub fn show_radius(&self) -> bool {
        self.display.show_radius
    }

    /// Add a point and re-cluster.
    pub fn push_point(&mut self, point: Point) -> Result<()> {
        let mut points = self.points.clone();
        points.push(point);
        self.commit(points, self.dbscan.clone())
    }

    /// Add several points and re-cluster once.
    pub fn extend<I>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut all = self.points.clone();
        all.extend(points);
        self.commit(all, self.dbscan.clone())
    }

    /// Remove all points.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new(), self.dbscan.clone())
    }

    /// Change the neighborhood radius. An invalid value leaves the session unchanged.
    pub fn set_eps(&mut self, eps: f64) -> Result<()> {
        let dbscan = self.dbscan.clone().with_eps(eps);
        self.commit(self.points.clone(), dbscan)
    }

    /// Change the minimum neighborhood size. An invalid value leaves the session unchanged.
    pub fn set_min_pts(&mut self, min_pts: usize) -> Result<()> {
        let dbscan = self.dbscan.clone().with_min_pts(min_pts);
        self.commit(self.points.clone(), dbscan)
    }

    /// Toggle the radius circles. Labels do not depend on it.
    pub fn set_show_radius(&mut self, show_radius: bool) {
        self.display.show_radius = show_radius;
    }

    /// Marks for the current points and labels.
    pub fn marks(&self) -> Result<Vec<Mark>> {
        display_list(
            &self.points,
            &self.labels,
            self.dbscan.eps(),
            &self.palette,
            &self.display,
        )
    }

    fn commit(&mut self, points: Vec<Point>, dbscan: Dbscan) -> Result<()> {
        let labels = match dbscan.fit_predict(&points) {
            Ok(labels) => labels,
            Err(err) => {
                warn!("keeping previous clustering: {}", err);
                return Err(err);
            }
        };

        debug!(
            "reclustered {} points into {} clusters",
            points.len(),
            labels.n_clusters()
        );
        self.points = points;
        self.dbscan = dbscan;
        self.labels = labels;
        Ok(())
    }
}
