use app_core::{normalize_pointer, PointerSample};

#[test]
fn top_left_corner_maps_to_negative_half() {
    let s = normalize_pointer(0.0, 0.0, 800.0, 600.0);
    assert_eq!(s, PointerSample { x: -0.5, y: -0.5 });
}

#[test]
fn center_maps_to_zero() {
    let s = normalize_pointer(400.0, 300.0, 800.0, 600.0);
    assert_eq!(s, PointerSample { x: 0.0, y: 0.0 });
}

#[test]
fn bottom_right_corner_maps_to_positive_half() {
    let s = normalize_pointer(800.0, 600.0, 800.0, 600.0);
    assert_eq!(s, PointerSample { x: 0.5, y: 0.5 });
}

#[test]
fn quarter_position_maps_proportionally() {
    let s = normalize_pointer(200.0, 150.0, 800.0, 600.0);
    assert_eq!(s, PointerSample { x: -0.25, y: -0.25 });
}

#[test]
fn normalization_is_independent_of_viewport_size() {
    for (w, h) in [(320.0, 240.0), (1920.0, 1080.0), (2560.0, 1440.0)] {
        let s = normalize_pointer(w * 0.75, h * 0.25, w, h);
        assert!((s.x - 0.25).abs() < 1e-6);
        assert!((s.y - (-0.25)).abs() < 1e-6);
    }
}

#[test]
fn degenerate_viewport_yields_center() {
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 600.0), PointerSample::default());
    assert_eq!(normalize_pointer(10.0, 10.0, 800.0, 0.0), PointerSample::default());
    assert_eq!(normalize_pointer(0.0, 0.0, -1.0, -1.0), PointerSample::default());
}
