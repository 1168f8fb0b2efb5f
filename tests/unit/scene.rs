use super::*;

const SCENE: &str = r#"{
    "container": { "x0": 0.0, "y0": 0.0, "x1": 800.0, "y1": 600.0 },
    "anchor": { "x0": 350.0, "y0": 0.0, "x1": 450.0, "y1": 40.0 },
    "content": { "width": 200.0, "height": 100.0 },
    "config": { "pointer": { "length": 4.0 } }
}"#;

#[test]
fn parses_and_places_scene() {
    let scene = Scene::from_json(SCENE).unwrap();
    assert_eq!(scene.config.target_bias, 0.5);
    let r = scene.place().unwrap();
    assert_eq!(r.direction, PointerDirection::Down);
    assert!((r.primary_axis_offset - 290.0).abs() < 0.5);
}

#[test]
fn scores_report_matches_placement() {
    let scene = Scene::from_json(SCENE).unwrap();
    let report = scene.scores().unwrap();
    assert_eq!(report.bubble, Size::new(220.0, 120.0));
    assert_eq!(report.scores.down, 436.0);
    assert_eq!(report.selected, scene.place().unwrap().direction);
}

#[test]
fn missing_anchor_has_no_scores_but_still_places() {
    let mut scene = Scene::from_json(SCENE).unwrap();
    scene.anchor = None;
    assert!(scene.scores().is_none());
    assert_eq!(scene.place().unwrap().direction, PointerDirection::None);
}

#[test]
fn rejects_invalid_scene_data() {
    let bad = SCENE.replace("\"length\": 4.0", "\"length\": -4.0");
    assert!(matches!(
        Scene::from_json(&bad),
        Err(BubbleError::Validation(_))
    ));
    assert!(matches!(
        Scene::from_json("{ \"container\": 3 }"),
        Err(BubbleError::Serde(_))
    ));
}

#[test]
fn rejects_inverted_or_non_finite_rects() {
    let inverted = SCENE.replace("\"x0\": 350.0", "\"x0\": 500.0");
    let err = Scene::from_json(&inverted).unwrap_err();
    assert!(err.to_string().contains("anchor"), "{err}");

    let mut scene = Scene::from_json(SCENE).unwrap();
    scene.container = Rect::new(0.0, 600.0, 800.0, 0.0);
    assert!(matches!(scene.validate(), Err(BubbleError::Validation(_))));

    scene.container = Rect::new(0.0, 0.0, f64::INFINITY, 600.0);
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("container"), "{err}");

    scene.container = Rect::new(0.0, 0.0, 800.0, 600.0);
    scene.anchor = Some(Rect::new(f64::NAN, 0.0, 10.0, 10.0));
    assert!(scene.validate().is_err());

    // zero-size rectangles are valid; layout just skips them
    scene.anchor = Some(Rect::new(10.0, 10.0, 10.0, 10.0));
    scene.validate().unwrap();
}

#[test]
fn json_round_trip_preserves_scene() {
    let scene = Scene::from_json(SCENE).unwrap();
    let again = Scene::from_json(&scene.to_json_pretty().unwrap()).unwrap();
    assert_eq!(scene, again);
}
