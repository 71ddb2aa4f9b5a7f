use crate::device_display::impl_gui::{skeleton_segments, to_screen};
use crate::hand_detector::impl_fake::open_hand;
use crate::landmark::{Hand, HandSet, HAND_CONNECTIONS};

fn window() -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0))
}

#[test]
fn test_to_screen_scales_into_rect() {
    assert_eq!(to_screen(window(), 0.0, 0.0), egui::pos2(10.0, 20.0));
    assert_eq!(to_screen(window(), 1.0, 1.0), egui::pos2(210.0, 120.0));
    assert_eq!(to_screen(window(), 0.5, 0.25), egui::pos2(110.0, 45.0));
}

#[test]
fn test_complete_hand_draws_every_edge() {
    let hands = HandSet::new(vec![
        Hand::new(open_hand(0.3, 0.8)),
        Hand::new(open_hand(0.7, 0.8)),
    ]);

    let segments = skeleton_segments(&hands, window());

    assert_eq!(segments.len(), 2 * HAND_CONNECTIONS.len());
    assert_eq!(segments[0][0], to_screen(window(), 0.3, 0.8));
}

#[test]
fn test_truncated_hand_skips_edges_with_missing_points() {
    let mut points = open_hand(0.5, 0.5);
    points.truncate(5);

    let segments = skeleton_segments(&HandSet::new(vec![Hand::new(points)]), window());

    // Only the wrist to thumb tip chain survives.
    assert_eq!(segments.len(), 4);
}

#[test]
fn test_no_hands_no_segments() {
    assert!(skeleton_segments(&HandSet::empty(), window()).is_empty());
}
