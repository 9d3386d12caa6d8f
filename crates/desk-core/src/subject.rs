//! Focusable scene elements and their per-object hover controller.

use crate::constants::*;
use crate::focus::FocusEvent;
use crate::motion::frame_factor;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// Resting transform of a subject, relative to the scene group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Transform {
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Static description of one focusable element, supplied by the catalog.
#[derive(Clone, Debug)]
pub struct Subject {
    pub id: String,
    /// Focus id this subject navigates to. Several subjects may share one.
    pub section: String,
    pub base: Transform,
    /// Half size of the subject's bounding box at scale 1.
    pub half_extents: Vec3,
    pub color: [f32; 3],
    pub hover_intensity: f32,
    pub is_main: bool,
}

impl Subject {
    pub fn new(id: &str, section: &str, base: Transform, half_extents: Vec3) -> Self {
        Self {
            id: id.to_string(),
            section: section.to_string(),
            base,
            half_extents,
            color: [0.8, 0.8, 0.8],
            hover_intensity: HOVER_INTENSITY,
            is_main: false,
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_hover_intensity(mut self, intensity: f32) -> Self {
        self.hover_intensity = intensity;
        self
    }

    pub fn main(mut self) -> Self {
        self.is_main = true;
        self
    }

    /// Radius of the sphere enclosing the bounding box at scale 1.
    pub fn bounding_radius(&self) -> f32 {
        self.half_extents.length()
    }
}

/// Cursor affordance requested from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
    pub decay: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct LightSpec {
    pub offset: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

#[derive(Clone, Debug)]
pub struct HoverParams {
    /// Fraction of the scale gap closed per 60 Hz frame.
    pub smoothing: f32,
    pub float_amplitude: f32,
    pub float_frequency: f32,
    pub key_light: LightSpec,
    pub fill_light: LightSpec,
    pub light_decay: f32,
}

impl Default for HoverParams {
    fn default() -> Self {
        Self {
            smoothing: HOVER_SMOOTHING,
            float_amplitude: HOVER_FLOAT_AMPLITUDE,
            float_frequency: HOVER_FLOAT_FREQUENCY,
            key_light: LightSpec {
                offset: KEY_LIGHT_OFFSET,
                color: KEY_LIGHT_COLOR,
                intensity: KEY_LIGHT_INTENSITY,
                range: KEY_LIGHT_RANGE,
            },
            fill_light: LightSpec {
                offset: FILL_LIGHT_OFFSET,
                color: FILL_LIGHT_COLOR,
                intensity: FILL_LIGHT_INTENSITY,
                range: FILL_LIGHT_RANGE,
            },
            light_decay: LIGHT_DECAY,
        }
    }
}

/// Hover/selection controller for one subject. Owns the hover flag and the
/// animated scale/position; nothing else writes them.
#[derive(Clone, Debug)]
pub struct InteractiveObject {
    subject: Subject,
    hovered: bool,
    scale: f32,
    position: Vec3,
}

impl InteractiveObject {
    pub fn new(subject: Subject) -> Self {
        let intro = if subject.is_main {
            MAIN_SUBJECT_INTRO_SCALE
        } else {
            1.0
        };
        Self {
            scale: subject.base.scale * intro,
            position: subject.base.position,
            hovered: false,
            subject,
        }
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn id(&self) -> &str {
        &self.subject.id
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn current_scale(&self) -> f32 {
        self.scale
    }

    pub fn current_position(&self) -> Vec3 {
        self.position
    }

    pub fn target_scale(&self) -> f32 {
        if self.hovered {
            self.subject.base.scale * self.subject.hover_intensity
        } else {
            self.subject.base.scale
        }
    }

    pub fn on_pointer_enter(&mut self) -> Cursor {
        self.hovered = true;
        Cursor::Pointer
    }

    pub fn on_pointer_leave(&mut self) -> Cursor {
        self.hovered = false;
        Cursor::Default
    }

    /// The returned event is consumed by the caller; it never reaches other
    /// hit targets or the scene background.
    pub fn on_click(&self) -> FocusEvent {
        FocusEvent::Select(self.subject.section.clone())
    }

    pub fn tick(&mut self, elapsed_sec: f32, dt_sec: f32, params: &HoverParams) {
        let k = frame_factor(params.smoothing, dt_sec);
        self.scale += (self.target_scale() - self.scale) * k;

        let base_y = self.subject.base.position.y;
        if self.hovered {
            self.position.y =
                base_y + params.float_amplitude * (elapsed_sec * params.float_frequency).sin();
        } else {
            self.position.y += (base_y - self.position.y) * k;
        }
    }

    /// Subject-local to scene-group transform.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.subject.base.rotation_quat(),
            self.position,
        )
    }

    /// Key and fill lights while hovered, expressed in the parent space of
    /// `parent` (pass the scene group matrix for world space). Empty otherwise.
    pub fn lights(&self, parent: Mat4, params: &HoverParams) -> SmallVec<[PointLight; 2]> {
        let mut out = SmallVec::new();
        if !self.hovered {
            return out;
        }
        let m = parent * self.local_matrix();
        for light in [&params.key_light, &params.fill_light] {
            out.push(PointLight {
                position: m.transform_point3(light.offset),
                color: light.color,
                intensity: light.intensity,
                range: light.range,
                decay: params.light_decay,
            });
        }
        out
    }
}
