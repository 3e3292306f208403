use fcmkit_core::{Point, Quantizer};
use fcmkit_designer::{
    contours_of, order_paths, BoundingBox, CurveEncoder, EncoderOptions, Outline, PathData,
    PathFlags, PieceAssembler, SegmentLine, TravelMetric,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    (-5000i32..5000).prop_map(|v| v as f64 / 10.0)
}

fn pair() -> impl Strategy<Value = String> {
    (coordinate(), coordinate()).prop_map(|(x, y)| format!("{} {}", x, y))
}

fn command() -> impl Strategy<Value = String> {
    prop_oneof![
        pair().prop_map(|p| format!("L {}", p)),
        pair().prop_map(|p| format!("l {}", p)),
        coordinate().prop_map(|x| format!("H {}", x)),
        coordinate().prop_map(|y| format!("v {}", y)),
        (pair(), pair(), pair()).prop_map(|(a, b, c)| format!("C {} {} {}", a, b, c)),
        (pair(), pair()).prop_map(|(a, b)| format!("q {} {}", a, b)),
        (pair(), pair()).prop_map(|(a, b)| format!("S {} {}", a, b)),
        pair().prop_map(|p| format!("T {}", p)),
        pair().prop_map(|p| format!("M {}", p)),
        Just("Z".to_string()),
    ]
}

fn line_command() -> impl Strategy<Value = String> {
    prop_oneof![
        pair().prop_map(|p| format!("L {}", p)),
        pair().prop_map(|p| format!("l {}", p)),
        coordinate().prop_map(|x| format!("h {}", x)),
        coordinate().prop_map(|y| format!("V {}", y)),
        pair().prop_map(|p| format!("m {}", p)),
        Just("z".to_string()),
    ]
}

fn line_data() -> impl Strategy<Value = String> {
    (pair(), prop::collection::vec(line_command(), 0..16))
        .prop_map(|(start, commands)| format!("M {} {}", start, commands.join(" ")))
}

fn path_data() -> impl Strategy<Value = String> {
    (pair(), prop::collection::vec(command(), 0..24))
        .prop_map(|(start, commands)| format!("M {} {}", start, commands.join(" ")))
}

proptest! {
    #[test]
    fn outlines_are_non_empty_and_homogeneous(text in path_data()) {
        let data = PathData::parse(&text).unwrap();
        let encoder = CurveEncoder::new(EncoderOptions::default(), Point::new(17, -3));

        // Smooth commands right after a Move are rejected; nothing to check then.
        if let Ok(paths) = encoder.encode(&data) {
            for path in &paths {
                prop_assert!(!path.outlines.is_empty());
                for window in path.outlines.windows(2) {
                    prop_assert_ne!(window[0].kind(), window[1].kind());
                }
                for outline in &path.outlines {
                    prop_assert!(!outline.is_empty());
                }
            }
        }
    }

    #[test]
    fn line_pieces_stay_inside_their_box(
        sources in prop::collection::vec(line_data(), 1..4)
    ) {
        let piece = match PieceAssembler::default().assemble_str("box", &sources) {
            Ok(piece) => piece,
            // Only Moves and Closes: nothing to cut
            Err(err) => {
                prop_assert!(err.is_input_error());
                return Ok(());
            }
        };

        let contours: Vec<_> = sources
            .iter()
            .flat_map(|text| contours_of(&PathData::parse(text).unwrap()))
            .collect();
        let bounds = BoundingBox::of(&contours).unwrap();
        let quantizer = Quantizer::default();
        let min = quantizer.point(bounds.min).unwrap();
        let max = quantizer.point(bounds.max).unwrap();
        prop_assert_eq!(piece.width as i32, max.x - min.x);
        prop_assert_eq!(piece.height as i32, max.y - min.y);

        // Floored centering leaves at most one unit of slack
        let epsilon = 1;
        let half_width = piece.width as i32 / 2 + epsilon;
        let half_height = piece.height as i32 / 2 + epsilon;
        for path in &piece.paths {
            let points = std::iter::once(path.start)
                .chain(path.outlines.iter().flat_map(|outline| outline.points()));
            for point in points {
                prop_assert!(point.x.abs() <= half_width, "{:?} outside width", point);
                prop_assert!(point.y.abs() <= half_height, "{:?} outside height", point);
            }
        }
    }

    #[test]
    fn ordering_is_a_permutation(
        starts in prop::collection::vec((-1000i32..1000, -1000i32..1000), 0..40)
    ) {
        let paths: Vec<_> = starts
            .iter()
            .map(|&(x, y)| {
                fcmkit_designer::Path::new(
                    PathFlags::cut(true),
                    Point::new(x, y),
                    vec![Outline::Line { segments: vec![SegmentLine::new(Point::new(y, x))] }],
                )
            })
            .collect();

        let ordered = order_paths(paths.clone(), TravelMetric::default());
        prop_assert_eq!(ordered.len(), paths.len());

        let mut expected: Vec<(i32, i32)> = starts.clone();
        let mut actual: Vec<(i32, i32)> = ordered.iter().map(|p| (p.start.x, p.start.y)).collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);

        if let Some(first) = ordered.first() {
            let lowest = starts.iter().map(|&(_, y)| y).min().unwrap();
            prop_assert_eq!(first.start.y, lowest);
        }
    }
}
