use fcmkit_core::Point;
use fcmkit_designer::{
    CurveEncoder, EncoderOptions, Outline, OutlineKind, PathData, SegmentBezier, SegmentLine,
};

fn encode(text: &str) -> Vec<fcmkit_designer::Path> {
    CurveEncoder::new(EncoderOptions::default(), Point::ZERO)
        .encode(&PathData::parse(text).unwrap())
        .unwrap()
}

#[test]
fn test_closed_polyline_round_trip() {
    let paths = encode("M 0 0 L 10 0 L 10 10 Z");
    assert_eq!(paths.len(), 1);
    assert!(!paths[0].flags.open);
    assert_eq!(
        paths[0].outlines,
        vec![Outline::Line {
            segments: vec![
                SegmentLine::new(Point::new(1000, 0)),
                SegmentLine::new(Point::new(1000, 1000)),
                SegmentLine::new(Point::new(0, 0)),
            ]
        }]
    );
}

#[test]
fn test_quadratic_elevation_is_exact() {
    let paths = encode("M 0 0 Q 10 0 10 10");
    assert_eq!(
        paths[0].outlines,
        vec![Outline::Bezier {
            segments: vec![SegmentBezier::new(
                Point::new(667, 0),
                Point::new(1000, 333),
                Point::new(1000, 1000),
            )]
        }]
    );
}

#[test]
fn test_smooth_reflection() {
    let paths = encode("M 0 0 C 0 1 0.8 1 1 1 S 2 2 3 3");
    let Outline::Bezier { segments } = &paths[0].outlines[0] else {
        panic!("expected a bezier outline");
    };
    assert_eq!(segments[1].control1, Point::new(120, 100));
}

#[test]
fn test_compact_svgo_output() {
    // Minified path data: no separators before negative numbers
    let paths = encode("M10-5h-5v10H0l5-5z");
    let path = &paths[0];
    assert_eq!(path.start, Point::new(1000, -500));
    assert_eq!(path.outlines.len(), 1);
    assert_eq!(path.outlines[0].kind(), OutlineKind::Line);
    assert_eq!(
        path.outlines[0].points(),
        vec![
            Point::new(500, -500),
            Point::new(500, 500),
            Point::new(0, 500),
            Point::new(500, 0),
            Point::new(1000, -500),
        ]
    );
}
