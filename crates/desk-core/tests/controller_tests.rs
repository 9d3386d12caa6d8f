// Host-side tests for the per-subject hover controller.

use desk_core::{
    Cursor, FocusEvent, HoverParams, InteractiveObject, Subject, Transform, HOVER_FLOAT_AMPLITUDE,
};
use glam::{Mat4, Vec3};

const DT: f32 = 1.0 / 60.0;

// Catalog laptop geometry without the main-subject intro, so hover starts from rest.
fn laptop() -> Subject {
    Subject::new(
        "laptop",
        "projects",
        Transform {
            position: Vec3::new(-4.5, -2.2, -1.0),
            rotation: Vec3::new(0.0, 0.45, 0.0),
            scale: 2.0,
        },
        Vec3::new(0.75, 0.55, 0.55),
    )
    .with_hover_intensity(1.1)
}

fn settle(obj: &mut InteractiveObject, params: &HoverParams, t: &mut f32, frames: usize) {
    for _ in 0..frames {
        *t += DT;
        obj.tick(*t, DT, params);
    }
}

#[test]
fn hover_scales_up_then_back_down() {
    let params = HoverParams::default();
    let mut obj = InteractiveObject::new(laptop());
    let base = obj.subject().base.scale;
    let hovered_target = base * 1.1;
    let mut t = 0.0;

    assert_eq!(obj.on_pointer_enter(), Cursor::Pointer);
    let mut prev = obj.current_scale();
    for i in 0..10 {
        t += DT;
        obj.tick(t, DT, &params);
        let s = obj.current_scale();
        assert!(s > prev, "scale did not grow at frame {i}: {prev} -> {s}");
        assert!(s <= hovered_target + 1e-6);
        prev = s;
    }
    settle(&mut obj, &params, &mut t, 90);
    assert!((obj.current_scale() - hovered_target).abs() < 1e-3);

    assert_eq!(obj.on_pointer_leave(), Cursor::Default);
    let mut prev = obj.current_scale();
    for i in 0..10 {
        t += DT;
        obj.tick(t, DT, &params);
        let s = obj.current_scale();
        assert!(s < prev, "scale did not shrink at frame {i}: {prev} -> {s}");
        assert!(s >= base - 1e-6);
        prev = s;
    }
    settle(&mut obj, &params, &mut t, 120);
    assert!((obj.current_scale() - base).abs() < 1e-3);
}

#[test]
fn main_subject_starts_enlarged_and_settles() {
    let params = HoverParams::default();
    let mut obj = InteractiveObject::new(laptop().main());
    assert!((obj.current_scale() - 2.4).abs() < 1e-6);
    let mut t = 0.0;
    settle(&mut obj, &params, &mut t, 120);
    assert!((obj.current_scale() - 2.0).abs() < 1e-3);
}

#[test]
fn floats_only_while_hovered() {
    let params = HoverParams::default();
    let mut obj = InteractiveObject::new(laptop());
    let base_y = obj.subject().base.position.y;
    let mut t = 0.0;

    settle(&mut obj, &params, &mut t, 30);
    assert_eq!(obj.current_position().y, base_y);

    obj.on_pointer_enter();
    let mut max_dev = 0.0_f32;
    for _ in 0..200 {
        t += DT;
        obj.tick(t, DT, &params);
        let dev = (obj.current_position().y - base_y).abs();
        assert!(dev <= HOVER_FLOAT_AMPLITUDE + 1e-5);
        max_dev = max_dev.max(dev);
    }
    assert!(max_dev > HOVER_FLOAT_AMPLITUDE * 0.9, "expected visible float");

    obj.on_pointer_leave();
    settle(&mut obj, &params, &mut t, 120);
    assert!((obj.current_position().y - base_y).abs() < 1e-4);
}

#[test]
fn jitter_does_not_accumulate() {
    let mut obj = InteractiveObject::new(laptop());
    for _ in 0..5 {
        obj.on_pointer_enter();
    }
    obj.on_pointer_leave();
    assert!(!obj.hovered());

    for _ in 0..7 {
        obj.on_pointer_leave();
        obj.on_pointer_enter();
    }
    assert!(obj.hovered());
}

#[test]
fn click_selects_section() {
    let obj = InteractiveObject::new(laptop());
    assert_eq!(obj.on_click(), FocusEvent::Select("projects".to_string()));
}

#[test]
fn lights_exist_only_while_hovered() {
    let params = HoverParams::default();
    let mut obj = InteractiveObject::new(laptop());
    assert!(obj.lights(Mat4::IDENTITY, &params).is_empty());

    obj.on_pointer_enter();
    let lights = obj.lights(Mat4::IDENTITY, &params);
    assert_eq!(lights.len(), 2);
    let key = lights[0];
    let fill = lights[1];
    assert!(key.intensity > fill.intensity);
    assert!(key.position.y > obj.current_position().y);
    assert!(fill.position.y < obj.current_position().y);

    obj.on_pointer_leave();
    assert!(obj.lights(Mat4::IDENTITY, &params).is_empty());
}

#[test]
fn large_dt_spike_does_not_overshoot() {
    let params = HoverParams::default();
    let mut obj = InteractiveObject::new(laptop());
    obj.on_pointer_enter();
    obj.tick(5.0, 5.0, &params);
    let s = obj.current_scale();
    assert!(s.is_finite());
    assert!(s > 2.0 && s <= 2.2 + 1e-6);
}
