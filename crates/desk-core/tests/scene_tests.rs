// Host-side tests for the scene composer: hover routing, click/miss handling,
// idle motion and the end-to-end focus scenarios.

use desk_core::catalog::{desk_catalog, ABOUT, CONTACT, PROJECTS};
use desk_core::{
    Catalog, Cursor, FocusEvent, FocusRegistry, FocusTarget, Scene, SceneError, SceneEvent,
    SceneParams, Subject, Transform, BREATHE_AMPLITUDE,
};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn scene() -> Scene {
    Scene::new(desk_catalog().expect("catalog"), SceneParams::default()).expect("scene")
}

fn hovered_count(s: &Scene) -> usize {
    s.objects().iter().filter(|o| o.hovered()).count()
}

#[test]
fn at_most_one_subject_hovered() {
    let mut s = scene();
    let ids: Vec<String> = s.objects().iter().map(|o| o.id().to_string()).collect();
    for id in ids.iter().chain(ids.iter().rev()) {
        s.pointer_over(Some(id)).unwrap();
        assert_eq!(hovered_count(&s), 1);
        assert_eq!(s.hovered_id(), Some(id.as_str()));
        s.tick(DT);
    }
    s.pointer_over(None).unwrap();
    assert_eq!(hovered_count(&s), 0);
    assert_eq!(s.hovered_id(), None);
}

#[test]
fn hover_switch_emits_leave_then_enter_cursor() {
    let mut s = scene();
    s.pointer_over(Some("laptop")).unwrap();
    s.pointer_over(Some("mug")).unwrap();
    s.pointer_over(Some("mug")).unwrap();
    s.pointer_over(None).unwrap();
    let cursors: Vec<Cursor> = s
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            SceneEvent::Cursor(c) => Some(c),
            _ => None,
        })
        .collect();
    assert_eq!(
        cursors,
        vec![
            Cursor::Pointer,
            Cursor::Default,
            Cursor::Pointer,
            Cursor::Default
        ]
    );
}

#[test]
fn picking_resolves_nearest_subject() {
    let s = scene();
    // Straight down onto the laptop
    let laptop = s.object("laptop").unwrap().current_position();
    let origin = Vec3::new(laptop.x, 10.0, laptop.z);
    assert_eq!(s.pick(origin, Vec3::NEG_Y), Some("laptop"));

    // Along -Z at the laptop's height the mug sits in front and wins
    let grazing = Vec3::new(-4.9, -2.25, 20.0);
    assert_eq!(s.pick(grazing, Vec3::NEG_Z), Some("mug"));

    // A vertical ray through the notepad from above
    let pad = s.object("notepad").unwrap().current_position();
    let from_above = Vec3::new(pad.x, 10.0, pad.z);
    assert_eq!(s.pick(from_above, Vec3::NEG_Y), Some("notepad"));

    // Pointing at the sky hits nothing
    assert_eq!(s.pick(Vec3::new(0.0, 5.0, 11.0), Vec3::Y), None);
}

#[test]
fn picking_through_camera_center_hits_nothing_on_empty_desk() {
    let s = scene();
    // The default view looks at the origin, above the desk surface
    assert_eq!(s.pick_ndc(Vec2::new(0.0, 0.9)), None);
}

#[test]
fn subject_click_selects_and_does_not_miss() {
    let mut s = scene();
    s.click(Some("laptop")).unwrap();
    assert_eq!(s.focus().active_id(), Some(PROJECTS));
    assert_eq!(
        s.drain_events(),
        vec![SceneEvent::Focus(FocusEvent::Select(PROJECTS.to_string()))]
    );
}

#[test]
fn confirm_again_while_revealed_requests_scroll_without_state_change() {
    let mut s = scene();
    s.select(PROJECTS).unwrap();
    assert!(s.confirm());
    s.drain_events();

    assert!(!s.confirm());
    assert!(s.focus().content_revealed());
    assert_eq!(s.focus().active_id(), Some(PROJECTS));
    assert_eq!(s.drain_events(), vec![SceneEvent::Focus(FocusEvent::Confirm)]);

    s.reset();
    s.drain_events();
    assert!(!s.confirm());
    assert!(s.drain_events().is_empty());
}

#[test]
fn catalog_laptop_grows_on_hover_once_intro_has_settled() {
    let mut s = scene();
    let scale = |s: &Scene| s.object("laptop").unwrap().current_scale();

    // the main subject starts enlarged and shrinks back to its resting scale
    assert!((scale(&s) - 2.4).abs() < 1e-5);
    for _ in 0..120 {
        s.tick(DT);
    }
    assert!((scale(&s) - 2.0).abs() < 1e-3);

    s.pointer_over(Some("laptop")).unwrap();
    let mut prev = scale(&s);
    for frame in 0..10 {
        s.tick(DT);
        let now = scale(&s);
        assert!(now > prev, "frame {frame}: {now} <= {prev}");
        prev = now;
    }
    for _ in 0..120 {
        s.tick(DT);
    }
    assert!((scale(&s) - 2.2).abs() < 1e-3);

    s.pointer_over(None).unwrap();
    let mut prev = scale(&s);
    for frame in 0..10 {
        s.tick(DT);
        let now = scale(&s);
        assert!(now < prev, "frame {frame}: {now} >= {prev}");
        prev = now;
    }
    assert!(prev > 2.0);
}

#[test]
fn shared_section_subjects_select_same_target() {
    let mut s = scene();
    s.click(Some("books")).unwrap();
    assert_eq!(s.focus().active_id(), Some(ABOUT));
    s.reset();
    s.click(Some("notepad")).unwrap();
    assert_eq!(s.focus().active_id(), Some(ABOUT));
}

#[test]
fn pointer_missed_while_revealed_resets_and_blocks_confirm() {
    let mut s = scene();
    s.select(CONTACT).unwrap();
    assert!(s.confirm());
    assert!(s.focus().content_revealed());

    s.click(None).unwrap();
    assert_eq!(s.focus().active_id(), None);
    assert!(!s.focus().content_revealed());

    assert!(!s.confirm());
    assert_eq!(s.focus().active_id(), None);
    assert!(!s.focus().content_revealed());
}

#[test]
fn unknown_ids_are_rejected_without_state_change() {
    let mut s = scene();
    s.select(PROJECTS).unwrap();
    s.drain_events();
    assert_eq!(
        s.select("nowhere"),
        Err(SceneError::UnknownSubject("nowhere".into()))
    );
    assert_eq!(s.focus().active_id(), Some(PROJECTS));
    assert!(s.pointer_over(Some("ghost")).is_err());
    assert!(s.click(Some("ghost")).is_err());
    assert_eq!(hovered_count(&s), 0);
    assert!(s.drain_events().is_empty());
}

#[test]
fn select_projects_scenario_converges() {
    let mut s = scene();
    s.select(PROJECTS).unwrap();
    let goal = s.registry().lookup(PROJECTS).unwrap().eye;
    let d0 = s.camera().eye.distance(goal);
    for _ in 0..160 {
        s.tick(DT);
    }
    assert!(s.camera().eye.distance(goal) < 0.01 * d0);
}

#[test]
fn focus_survives_idle_motion_and_hover() {
    let mut s = scene();
    s.select(PROJECTS).unwrap();
    s.set_pointer(Vec2::new(0.8, -0.5));
    s.pointer_over(Some("lamp")).unwrap();
    for _ in 0..60 {
        s.tick(DT);
    }
    assert_eq!(s.focus().active_id(), Some(PROJECTS));
    assert!(s.group_rotation().y > 0.0, "parallax keeps running while focused");
    assert!(s.group_rotation().x > 0.0);
}

#[test]
fn parallax_approaches_pointer_target() {
    let mut s = scene();
    s.set_pointer(Vec2::new(1.0, 1.0));
    for _ in 0..600 {
        s.tick(DT);
    }
    let r = s.group_rotation();
    assert!((r.y - 0.1).abs() < 1e-3, "yaw {}", r.y);
    assert!((r.x + 0.06).abs() < 1e-3, "pitch {}", r.x);

    // Out-of-range input is clamped to the unit square
    s.set_pointer(Vec2::new(5.0, 0.0));
    for _ in 0..600 {
        s.tick(DT);
    }
    assert!(s.group_rotation().y <= 0.1 + 1e-4);
}

#[test]
fn frozen_input_ignores_pointer_but_keeps_breathing() {
    let mut s = scene();
    s.set_input_frozen(true);
    s.set_pointer(Vec2::new(1.0, 1.0));
    let mut max_offset = 0.0_f32;
    for _ in 0..400 {
        s.tick(DT);
        max_offset = max_offset.max(s.group_offset_y().abs());
    }
    assert_eq!(s.group_rotation(), Vec2::ZERO);
    assert!(max_offset > BREATHE_AMPLITUDE * 0.9);
    assert!(max_offset <= BREATHE_AMPLITUDE + 1e-6);
}

#[test]
fn hover_lights_follow_single_hovered_subject() {
    let mut s = scene();
    assert!(s.lights().is_empty());
    s.pointer_over(Some("mug")).unwrap();
    assert_eq!(s.lights().len(), 2);
    s.pointer_over(Some("phone")).unwrap();
    assert_eq!(s.lights().len(), 2);
    s.pointer_over(None).unwrap();
    assert!(s.lights().is_empty());
}

#[test]
fn dt_spikes_are_clamped() {
    let mut s = scene();
    s.tick(10.0);
    assert!(s.elapsed() <= 0.25 + 1e-6);
    s.tick(-1.0);
    s.tick(f32::NAN);
    assert!(s.elapsed().is_finite());
    assert!(s.camera().eye.is_finite());
}

#[test]
fn catalog_validation() {
    let mut registry = FocusRegistry::new(FocusTarget::default());
    registry
        .register(
            "only",
            FocusTarget::default(),
            desk_core::SectionContent {
                title: "Only",
                blurb: "",
            },
        )
        .unwrap();
    let t = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    let empty = Catalog {
        registry: registry.clone(),
        subjects: vec![],
    };
    assert_eq!(
        Scene::new(empty, SceneParams::default()).err(),
        Some(SceneError::EmptyCatalog)
    );

    let dup = Catalog {
        registry: registry.clone(),
        subjects: vec![
            Subject::new("a", "only", t, Vec3::ONE),
            Subject::new("a", "only", t, Vec3::ONE),
        ],
    };
    assert_eq!(
        Scene::new(dup, SceneParams::default()).err(),
        Some(SceneError::DuplicateSubject("a".into()))
    );

    let orphan = Catalog {
        registry,
        subjects: vec![Subject::new("a", "missing", t, Vec3::ONE)],
    };
    assert_eq!(
        Scene::new(orphan, SceneParams::default()).err(),
        Some(SceneError::UnknownSubject("missing".into()))
    );
}
