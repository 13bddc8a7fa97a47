//! DBSCAN on a simple 2D dataset, printed with the colors a renderer would use.
//!
//! Run with `RUST_LOG=debug` to see the engine's log lines.

use clusterpad::{Dbscan, Label, Point, Session};

fn main() {
    env_logger::init();

    // Three well-separated groups in 2D plus one straggler.
    let data: Vec<Point> = [
        // Group A (near origin)
        (0.0, 0.0),
        (0.1, 0.2),
        (0.2, 0.1),
        (-0.1, 0.1),
        // Group B (near (5, 5))
        (5.0, 5.0),
        (5.1, 4.9),
        (4.9, 5.1),
        (5.2, 5.2),
        // Group C (near (10, 0))
        (10.0, 0.0),
        (10.1, 0.1),
        (9.9, -0.1),
        (10.2, 0.2),
        // Outlier
        (20.0, 20.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    let session = match Session::with_points(Dbscan::new(1.0, 2), data) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("clustering failed: {err}");
            std::process::exit(1);
        }
    };

    let marks = match session.marks() {
        Ok(marks) => marks,
        Err(err) => {
            eprintln!("display list failed: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "=== DBSCAN (eps={}, min_pts={}) ===",
        session.dbscan().eps(),
        session.dbscan().min_pts()
    );
    for (i, (label, mark)) in session.labels().iter().zip(&marks).enumerate() {
        let tag = match label {
            Label::Cluster(id) => format!("cluster {id}"),
            Label::Noise => "NOISE".to_string(),
        };
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => {:10} {}",
            i, mark.center.x, mark.center.y, tag, mark.color
        );
    }
}
