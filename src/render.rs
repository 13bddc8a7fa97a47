//! Mapping from labels to what a renderer draws.
//!
//! Nothing here touches a drawing surface. A renderer takes the [`Mark`]s and
//! paints a dot per point, plus an optional circle of radius `eps` around it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cluster::{Label, Labels};
use crate::error::{Error, Result};
use crate::point::Point;

/// Colors used for points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Pink,
    Brown,
    Cyan,
    Magenta,
    Yellow,
    Gray,
}

impl Color {
    /// CSS color name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Brown => "brown",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::Gray => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const DEFAULT_CLUSTER_COLORS: [Color; 10] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Orange,
    Color::Purple,
    Color::Pink,
    Color::Brown,
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
];

/// Fixed-size cluster palette plus a dedicated noise color.
///
/// Cluster `id` gets `colors[id % colors.len()]`; noise always gets `noise`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    noise: Color,
}

impl Palette {
    /// Create a palette. `colors` must be non-empty.
    pub fn new(colors: Vec<Color>, noise: Color) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidParameter {
                name: "colors",
                message: "palette needs at least one cluster color",
            });
        }
        Ok(Self { colors, noise })
    }

    /// Number of cluster colors before they repeat.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a label.
    pub fn color_for(&self, label: Label) -> Color {
        match label {
            Label::Cluster(id) => self.colors[id % self.colors.len()],
            Label::Noise => self.noise,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_CLUSTER_COLORS.to_vec(),
            noise: Color::Gray,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Draw the `eps` circle around every point.
    pub show_radius: bool,
    /// Radius of the dot drawn for each point.
    pub dot_radius: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_radius: true,
            dot_radius: 3.0,
        }
    }
}

/// One point as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// Position of the point.
    pub center: Point,
    /// Fill color, from the label.
    pub color: Color,
    /// Radius of the dot.
    pub dot_radius: f64,
    /// Neighborhood circle radius, when enabled.
    pub halo: Option<f64>,
}

/// Build one mark per point, in point order.
pub fn display_list(
    points: &[Point],
    labels: &Labels,
    eps: f64,
    palette: &Palette,
    options: &DisplayOptions,
) -> Result<Vec<Mark>> {
    if points.len() != labels.len() {
        return Err(Error::LengthMismatch {
            points: points.len(),
            labels: labels.len(),
        });
    }

    let halo = options.show_radius.then_some(eps);
    Ok(points
        .iter()
        .zip(labels.iter())
        .map(|(&center, label)| Mark {
            center,
            color: palette.color_for(label),
            dot_radius: options.dot_radius,
            halo,
        })
        .collect())
}
