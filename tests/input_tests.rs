// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn px_to_ndc_maps_corners_and_centre() {
    let (w, h) = (800.0, 600.0);
    assert_eq!(px_to_ndc(Vec2::new(0.0, 0.0), w, h), Vec2::new(-1.0, 1.0));
    assert_eq!(px_to_ndc(Vec2::new(800.0, 600.0), w, h), Vec2::new(1.0, -1.0));
    let c = px_to_ndc(Vec2::new(400.0, 300.0), w, h);
    assert!(c.length() < 1e-6);
}

#[test]
fn px_to_ndc_clamps_outside_canvas() {
    let v = px_to_ndc(Vec2::new(-50.0, 900.0), 800.0, 600.0);
    assert_eq!(v, Vec2::new(-1.0, -1.0));
}

#[test]
fn px_to_ndc_survives_zero_sized_canvas() {
    let v = px_to_ndc(Vec2::new(10.0, 10.0), 0.0, 0.0);
    assert!(v.x.is_finite() && v.y.is_finite());
    assert!(v.x.abs() <= 1.0 && v.y.abs() <= 1.0);
}

#[test]
fn small_movement_is_a_click_large_is_a_drag() {
    let down = Vec2::new(100.0, 100.0);
    assert!(is_click(down, Vec2::new(103.0, 104.0), 6.0));
    assert!(is_click(down, down, 6.0));
    assert!(!is_click(down, Vec2::new(120.0, 100.0), 6.0));
}

#[test]
fn digit_keys_select_by_registration_order() {
    assert_eq!(focus_index_for_digit("1"), Some(0));
    assert_eq!(focus_index_for_digit("5"), Some(4));
    assert_eq!(focus_index_for_digit("9"), Some(8));
    assert_eq!(focus_index_for_digit("0"), None);
    assert_eq!(focus_index_for_digit("10"), None);
    assert_eq!(focus_index_for_digit("Enter"), None);
}

#[test]
fn pointer_state_starts_released() {
    let ps = PointerState::default();
    assert!(!ps.down);
    assert_eq!(ps.down_at, Vec2::ZERO);
}
