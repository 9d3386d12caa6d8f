//! The desk scene: which objects sit on the desk, where they rest and which
//! section each one navigates to.

use crate::error::SceneError;
use crate::registry::{FocusRegistry, FocusTarget, SectionContent};
use crate::scene::Catalog;
use crate::subject::{Subject, Transform};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

pub const HERO: &str = "hero";
pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const ABOUT: &str = "about";
pub const CONTACT: &str = "contact";

/// Focus framings in page order.
fn desk_registry() -> Result<FocusRegistry, SceneError> {
    let mut r = FocusRegistry::new(FocusTarget::default());
    r.register(
        HERO,
        FocusTarget::new(Vec3::new(-3.2, 0.3, 6.0), Vec3::new(-5.0, -1.9, 2.0)),
        SectionContent {
            title: "BUILD. INNOVATE.",
            blurb: "Crafting elegant digital experiences that merge cutting-edge technology with thoughtful design.",
        },
    )?;
    r.register(
        PROJECTS,
        FocusTarget::new(Vec3::new(-2.8, 0.8, 4.0), Vec3::new(-4.5, -1.2, -1.0)),
        SectionContent {
            title: "Featured Work",
            blurb: "A selection of projects showcasing innovation, performance, and attention to detail.",
        },
    )?;
    r.register(
        SKILLS,
        FocusTarget::new(Vec3::new(6.0, 1.6, 2.0), Vec3::new(8.5, -0.4, -4.0)),
        SectionContent {
            title: "Technical Expertise",
            blurb: "A comprehensive toolkit for building modern, scalable applications.",
        },
    )?;
    r.register(
        ABOUT,
        FocusTarget::new(Vec3::new(4.2, 0.4, 5.5), Vec3::new(5.5, -2.0, 1.0)),
        SectionContent {
            title: "Beyond the Code",
            blurb: "Transforming complex challenges into elegant, scalable solutions.",
        },
    )?;
    r.register(
        CONTACT,
        FocusTarget::new(Vec3::new(2.3, 0.2, 6.5), Vec3::new(2.0, -2.4, 3.0)),
        SectionContent {
            title: "Let's Create Together",
            blurb: "Have a project in mind or just want to chat? Always open to discussing new opportunities.",
        },
    )?;
    Ok(r)
}

fn rest(position: [f32; 3], rotation: [f32; 3], scale: f32) -> Transform {
    Transform {
        position: Vec3::from(position),
        rotation: Vec3::from(rotation),
        scale,
    }
}

fn desk_subjects() -> Vec<Subject> {
    vec![
        Subject::new(
            "laptop",
            PROJECTS,
            rest([-4.5, -2.2, -1.0], [0.0, 0.45, 0.0], 2.0),
            Vec3::new(0.75, 0.55, 0.55),
        )
        .with_color([0.118, 0.161, 0.231])
        .with_hover_intensity(1.1)
        .main(),
        Subject::new(
            "books",
            ABOUT,
            rest([5.5, -2.2, 1.0], [0.0, -0.4, 0.0], 1.6),
            Vec3::new(0.4, 0.2, 0.45),
        )
        .with_color([0.118, 0.227, 0.541]),
        Subject::new(
            "phone",
            CONTACT,
            rest([2.0, -2.4, 3.0], [-FRAC_PI_2, 0.0, 0.4], 1.3),
            Vec3::new(0.175, 0.35, 0.01),
        )
        .with_color([0.06, 0.09, 0.16]),
        Subject::new(
            "mug",
            HERO,
            rest([-5.0, -2.25, 2.0], [0.0, 0.8, 0.0], 1.3),
            Vec3::new(0.22, 0.25, 0.22),
        )
        .with_color([0.99, 0.99, 0.99]),
        Subject::new(
            "lamp",
            SKILLS,
            rest([8.5, -2.2, -4.0], [0.0, 0.0, 0.0], 2.5),
            Vec3::new(0.45, 0.75, 0.45),
        )
        .with_color([0.2, 0.255, 0.333]),
        Subject::new(
            "notepad",
            ABOUT,
            rest([0.0, -2.22, 0.5], [0.0, 0.2, 0.0], 1.8),
            Vec3::new(0.4, 0.015, 0.5),
        )
        .with_color([0.996, 0.953, 0.78]),
    ]
}

pub fn desk_catalog() -> Result<Catalog, SceneError> {
    Ok(Catalog {
        registry: desk_registry()?,
        subjects: desk_subjects(),
    })
}
