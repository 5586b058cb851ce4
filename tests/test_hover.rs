// tests/test_hover.rs — hit-testing the marker against gallery slots.

use gallery_art::hover::resolve_hover;
use gallery_art::layout::layout;
use gallery_art::{Config, Point, Rect};

fn reference_slots() -> Vec<Rect> {
    layout(800, 600, 4, &Config::default())
}

#[test]
fn point_inside_first_slot_hovers_it() {
    let slots = reference_slots();
    assert_eq!(resolve_hover(Point::new(360, 310), &slots), Some(0));
    assert_eq!(resolve_hover(Point::new(820, 399), &slots), Some(3));
}

#[test]
fn off_frame_point_hovers_nothing() {
    let slots = reference_slots();
    assert_eq!(resolve_hover(Point::new(1000, 360), &slots), None);
    assert_eq!(resolve_hover(Point::new(-5, -5), &slots), None);
}

#[test]
fn gap_between_slots_hovers_nothing() {
    let slots = reference_slots();
    // Slot 0 ends at x=450, slot 1 starts at x=500.
    assert_eq!(resolve_hover(Point::new(470, 350), &slots), None);
}

#[test]
fn edges_are_half_open() {
    let slots = reference_slots();
    let r = slots[1];
    assert_eq!(resolve_hover(Point::new(r.x, r.y), &slots), Some(1));
    assert_eq!(resolve_hover(Point::new(r.x + 99, r.y + 99), &slots), Some(1));

    assert_eq!(resolve_hover(Point::new(r.x - 1, r.y), &slots), None);
    assert_eq!(resolve_hover(Point::new(r.x, r.y - 1), &slots), None);
    assert_eq!(resolve_hover(Point::new(r.x + 100, r.y), &slots), None);
    assert_eq!(resolve_hover(Point::new(r.x, r.y + 100), &slots), None);
}

#[test]
fn same_input_same_answer() {
    let slots = reference_slots();
    let p = Point::new(655, 301);
    let first = resolve_hover(p, &slots);
    assert_eq!(first, Some(2));
    assert_eq!(resolve_hover(p, &slots), first);
}

#[test]
fn overlapping_slots_prefer_earliest() {
    let cfg = Config { stride: 10, ..Config::default() };
    let slots = layout(800, 600, 3, &cfg);
    // x=375 lies in all three slots (350..450, 360..460, 370..470).
    assert_eq!(resolve_hover(Point::new(375, 320), &slots), Some(0));
    assert_eq!(resolve_hover(Point::new(455, 320), &slots), Some(1));
}

#[test]
fn empty_catalog_never_hovers() {
    assert_eq!(resolve_hover(Point::new(400, 350), &[]), None);
}
