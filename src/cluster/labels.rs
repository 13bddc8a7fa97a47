use std::fmt;

/// Raw label value used for noise when labels are flattened to integers.
pub const NOISE: i64 = -1;

/// Label of a single point: a cluster id, or noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Member of the cluster with this id. Ids start at 0.
    Cluster(usize),
    /// Not density-reachable from any core point.
    Noise,
}

impl Label {
    /// Whether this label is noise.
    pub fn is_noise(self) -> bool {
        matches!(self, Label::Noise)
    }

    /// Cluster id, if any.
    pub fn cluster(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            Label::Noise => None,
        }
    }

    /// Integer form: cluster id, or [`NOISE`].
    pub fn to_raw(self) -> i64 {
        match self {
            Label::Cluster(id) => id as i64,
            Label::Noise => NOISE,
        }
    }

    /// Inverse of [`Label::to_raw`]. Any negative value reads as noise.
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            Label::Noise
        } else {
            Label::Cluster(raw as usize)
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Cluster(id) => write!(f, "cluster {id}"),
            Label::Noise => f.write_str("NOISE"),
        }
    }
}

/// A complete label assignment: exactly one label per input point, by index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Labels {
    labels: Vec<Label>,
}

impl Labels {
    pub(crate) fn from_vec(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Number of labeled points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the assignment is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of the point at `idx`.
    pub fn get(&self, idx: usize) -> Option<Label> {
        self.labels.get(idx).copied()
    }

    /// Labels in point order.
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.labels.iter().copied()
    }

    /// Labels as a slice.
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    /// Number of clusters. Ids are contiguous from 0, so this is `max id + 1`.
    pub fn n_clusters(&self) -> usize {
        self.labels
            .iter()
            .filter_map(|l| l.cluster())
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Number of noise points.
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_noise()).count()
    }

    /// Indices of the points in cluster `cluster_id`, ascending.
    pub fn members(&self, cluster_id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == Label::Cluster(cluster_id))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Flatten to integers, with noise as [`NOISE`].
    pub fn to_raw(&self) -> Vec<i64> {
        self.labels.iter().map(|l| l.to_raw()).collect()
    }
}

impl std::ops::Index<usize> for Labels {
    type Output = Label;

    fn index(&self, idx: usize) -> &Label {
        &self.labels[idx]
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = Label;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Label>>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter().copied()
    }
}

impl From<Labels> for Vec<Label> {
    fn from(labels: Labels) -> Self {
        labels.labels
    }
}
