use fcmkit_designer::{Converter, CutFile, CutFileFormat, OutlineKind, PieceLayout};
use fcmkit_settings::{ArcPolicy, Config};

const SNOWMAN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 60" width="40mm" height="60mm">
  <g id="body">
    <path d="M20 20c6 0 10 4 10 10s-4 10-10 10-10-4-10-10 4-10 10-10z"/>
  </g>
  <g id="head">
    <path d="M20 5q5 0 5 5t-5 5-5-5 5-5z"/>
    <path d="M18 9h1v1h-1zM21 9h1v1h-1z"/>
  </g>
  <g id="scarf">
    <path d="M12 18a2 2 0 0 1 4 0L24 18"/>
  </g>
</svg>"#;

#[test]
fn test_convert_whole_document() {
    let file = Converter::new(&Config::default())
        .convert_svg(SNOWMAN, "snowman", PieceLayout::Single)
        .unwrap();
    assert_eq!(file.pieces.len(), 1);

    let piece = &file.pieces[0];
    assert_eq!(piece.label, "snowman");
    assert_eq!(piece.width, 2000);
    assert_eq!(piece.height, 3500);
    // body, head, two eyes, scarf
    assert_eq!(piece.paths.len(), 5);
}

#[test]
fn test_convert_by_group() {
    let file = Converter::new(&Config::default())
        .convert_svg(SNOWMAN, "snowman", PieceLayout::SplitGroups)
        .unwrap();
    let labels: Vec<&str> = file.pieces.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["body", "head", "scarf"]);

    let body = &file.pieces[0];
    assert_eq!((body.width, body.height), (2000, 2000));
    assert!(body.paths[0]
        .outlines
        .iter()
        .all(|o| o.kind() == OutlineKind::Bezier || o.len() == 1));

    // Arc dropped: only the trailing line is cut
    let scarf = &file.pieces[2];
    assert_eq!(scarf.paths.len(), 1);
    assert_eq!(scarf.paths[0].segment_count(), 1);
}

#[test]
fn test_arc_rejection_aborts_conversion() {
    let mut config = Config::default();
    config.encoder.arc_policy = ArcPolicy::Reject;
    let err = Converter::new(&config)
        .convert_svg(SNOWMAN, "snowman", PieceLayout::Single)
        .unwrap_err();
    assert!(err.is_encoding_error());
    assert_eq!(err.to_string(), "Unsupported command 'a'");
}

#[test]
fn test_written_file_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snowman.json");

    let file = Converter::new(&Config::default())
        .convert_svg(SNOWMAN, "snowman", PieceLayout::SplitGroups)
        .unwrap();
    file.save_to_file(&path).unwrap();

    let loaded = CutFile::load_from_file(&path).unwrap();
    assert_eq!(loaded, file);
    assert_eq!(loaded.summary().pieces.len(), 3);
}

#[test]
fn test_fcm_file_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snowman.fcm");

    let file = Converter::new(&Config::default())
        .convert_svg(SNOWMAN, "snowman", PieceLayout::SplitGroups)
        .unwrap();
    file.save(&path, CutFileFormat::Fcm).unwrap();

    let loaded = CutFile::load(&path).unwrap();
    assert_eq!(loaded, file);
    let labels: Vec<&str> = loaded.pieces.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["body", "head", "scarf"]);
}

#[test]
fn test_dot_paths_are_not_cut() {
    let dots = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <path d="M 1 1 Z M 5 5 z"/>
  <path d="M 0 0 L 10 0"/>
</svg>"#;
    let file = Converter::new(&Config::default())
        .convert_svg(dots, "dots", PieceLayout::Single)
        .unwrap();
    assert_eq!(file.pieces[0].paths.len(), 1);

    let only_dots = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M 1 1 Z"/></svg>"#;
    let err = Converter::new(&Config::default())
        .convert_svg(only_dots, "dots", PieceLayout::Single)
        .unwrap_err();
    assert!(err.is_input_error());
}
