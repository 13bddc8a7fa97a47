use clusterpad::{Clustering, Dbscan, Label, Point};
use proptest::prelude::*;

fn points(
    range: std::ops::Range<f64>,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((range.clone(), range), len)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn prop_dbscan_every_point_labeled(
        data in points(-10.0..10.0, 0..40),
        eps in 0.1f64..5.0,
        min_pts in 1usize..6
    ) {
        let labels = Dbscan::new(eps, min_pts).fit_predict(&data).unwrap();
        prop_assert_eq!(labels.len(), data.len());

        // Ids are contiguous from 0 and each one is used.
        let n_clusters = labels.n_clusters();
        for id in 0..n_clusters {
            prop_assert!(!labels.members(id).is_empty());
        }
        let clustered: usize = (0..n_clusters).map(|id| labels.members(id).len()).sum();
        prop_assert_eq!(clustered + labels.noise_count(), data.len());
    }

    #[test]
    fn prop_dbscan_idempotent(
        data in points(-10.0..10.0, 0..40),
        eps in 0.1f64..5.0,
        min_pts in 1usize..6
    ) {
        let dbscan = Dbscan::new(eps, min_pts);
        let first = dbscan.fit_predict(&data).unwrap();
        let second = dbscan.fit_predict(&data).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_dbscan_larger_eps_never_adds_noise(
        data in points(-10.0..10.0, 0..40),
        eps in 0.1f64..5.0,
        grow in 0.0f64..5.0,
        min_pts in 1usize..6
    ) {
        let small = Dbscan::new(eps, min_pts).fit_predict(&data).unwrap();
        let large = Dbscan::new(eps + grow, min_pts).fit_predict(&data).unwrap();
        prop_assert!(large.noise_count() <= small.noise_count());
    }

    #[test]
    fn prop_dbscan_below_threshold_is_noise(
        data in points(0.0..1.0, 1..8),
        extra in 1usize..4
    ) {
        // All points are mutually within eps, but there are too few of them.
        let min_pts = data.len() + extra;
        let labels = Dbscan::new(2.0, min_pts).fit_predict(&data).unwrap();
        prop_assert!(labels.iter().all(|l| l == Label::Noise));
    }

    #[test]
    fn prop_dbscan_min_pts_one_has_no_noise(
        data in points(-10.0..10.0, 0..40),
        eps in 0.1f64..5.0
    ) {
        let labels = Dbscan::new(eps, 1).fit_predict(&data).unwrap();
        prop_assert_eq!(labels.noise_count(), 0);
    }
}
