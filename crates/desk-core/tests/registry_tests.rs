// Host-side tests for the focus registry, the desk catalog and ray picking.

use desk_core::catalog::{desk_catalog, ABOUT, CONTACT, HERO, PROJECTS, SKILLS};
use desk_core::pick::{nearest_hit, ray_sphere};
use desk_core::{FocusRegistry, FocusTarget, SceneError, SectionContent};
use glam::Vec3;

#[test]
fn lookup_known_and_unknown() {
    let reg = desk_catalog().unwrap().registry;
    for id in [HERO, PROJECTS, SKILLS, ABOUT, CONTACT] {
        let t = reg.lookup(id).unwrap();
        assert_ne!(t.eye, t.look_at, "degenerate framing for {id}");
    }
    assert_eq!(
        reg.lookup("blog"),
        Err(SceneError::UnknownSubject("blog".to_string()))
    );
}

#[test]
fn registration_order_is_page_order() {
    let reg = desk_catalog().unwrap().registry;
    let ids: Vec<&str> = reg.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![HERO, PROJECTS, SKILLS, ABOUT, CONTACT]);
    assert_eq!(reg.nth(1).map(|e| e.id.as_str()), Some(PROJECTS));
    assert!(reg.nth(reg.len()).is_none());
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut reg = FocusRegistry::new(FocusTarget::default());
    let content = SectionContent {
        title: "x",
        blurb: "y",
    };
    reg.register("a", FocusTarget::default(), content.clone())
        .unwrap();
    assert_eq!(
        reg.register("a", FocusTarget::default(), content),
        Err(SceneError::DuplicateSubject("a".into()))
    );
    assert_eq!(reg.len(), 1);
}

#[test]
fn every_subject_section_is_registered() {
    let catalog = desk_catalog().unwrap();
    for s in &catalog.subjects {
        assert!(catalog.registry.contains(&s.section), "{} -> {}", s.id, s.section);
        assert!(s.base.scale > 0.0);
        assert!(s.bounding_radius() > 0.0);
    }
}

#[test]
fn ray_sphere_hits_front_face() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_misses_and_behind() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_from_inside_reports_exit() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn nearest_hit_prefers_closest() {
    let spheres = [
        (Vec3::new(0.0, 0.0, 10.0), 1.0),
        (Vec3::new(0.0, 0.0, 4.0), 1.0),
        (Vec3::new(5.0, 0.0, 2.0), 1.0),
    ];
    let (i, t) = nearest_hit(Vec3::ZERO, Vec3::Z, spheres).unwrap();
    assert_eq!(i, 1);
    assert!((t - 3.0).abs() < 1e-5);
    assert!(nearest_hit(Vec3::ZERO, Vec3::NEG_Z, spheres).is_none());
}
