use fcmkit_core::Point;
use fcmkit_designer::{
    order_paths, Outline, Path, PathFlags, PieceAssembler, SegmentLine, TravelMetric,
};

fn dot(x: i32, y: i32) -> Path {
    Path::new(
        PathFlags::cut(true),
        Point::new(x, y),
        vec![Outline::Line {
            segments: vec![SegmentLine::new(Point::new(x, y))],
        }],
    )
}

#[test]
fn test_ordering_is_deterministic() {
    let input = vec![dot(0, 0), dot(0, 100), dot(50, 0)];
    let first = order_paths(input.clone(), TravelMetric::default());
    let second = order_paths(input, TravelMetric::default());
    assert_eq!(first, second);

    let starts: Vec<Point> = first.iter().map(|p| p.start).collect();
    assert_eq!(
        starts,
        vec![Point::new(0, 0), Point::new(50, 0), Point::new(0, 100)]
    );
}

#[test]
fn test_bounding_box_consistency() {
    let piece = PieceAssembler::default()
        .assemble_str(
            "leaf",
            &[
                "M 1.25 2 C 3 -4 8 -4 9.333 2 S 4 9 1.25 2 Z",
                "m 4 1 l 1.5 0.25 l -0.75 1.12 z",
            ],
        )
        .unwrap();

    // x spans 1.25..9.333, y spans 1..2.37
    assert_eq!(piece.width, 933 - 125);
    assert_eq!(piece.height, 237 - 100);

    // Control points reach y = 9, about 6.6 units below the endpoint box
    let epsilon = 700;
    let half_width = piece.width as i32 / 2 + 1 + epsilon;
    let half_height = piece.height as i32 / 2 + 1 + epsilon;
    for path in &piece.paths {
        let points = std::iter::once(path.start)
            .chain(path.outlines.iter().flat_map(|outline| outline.points()));
        for point in points {
            assert!(point.x.abs() <= half_width, "{:?} outside width", point);
            assert!(point.y.abs() <= half_height, "{:?} outside height", point);
        }
    }
}

#[test]
fn test_piece_labels_and_flags() {
    let piece = PieceAssembler::default()
        .assemble_str("tag", &["M 0 0 h 4 v 2 h -4 z"])
        .unwrap();
    assert_eq!(piece.label, "tag");
    assert!(piece.flags.seam_allowance_locked);
    assert!(!piece.flags.licensed && !piece.flags.path_locked);
    assert_eq!(piece.translation(), Some((200.0, 100.0)));
}
