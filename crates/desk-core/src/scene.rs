//! Scene composer: owns the subjects, the focus state and the camera rig,
//! applies the scene-wide idle motion and routes pointer input between them.
//!
//! Input methods (`pointer_over`, `click`, `select`, ...) are called
//! synchronously between frames; `tick` is called once per displayed frame and
//! reads whatever state those calls left behind.

use crate::camera::Camera;
use crate::constants::*;
use crate::error::SceneError;
use crate::focus::{FocusEvent, FocusState};
use crate::motion::{clamp_dt, frame_factor};
use crate::pick::nearest_hit;
use crate::registry::FocusRegistry;
use crate::rig::{CameraRig, RigParams};
use crate::subject::{Cursor, HoverParams, InteractiveObject, PointLight, Subject};
use fnv::FnvHashSet;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct ComposerParams {
    pub parallax_yaw_gain: f32,
    pub parallax_pitch_gain: f32,
    /// Fraction of the rotation gap closed per 60 Hz frame.
    pub parallax_smoothing: f32,
    pub breathe_amplitude: f32,
    pub breathe_frequency: f32,
}

impl Default for ComposerParams {
    fn default() -> Self {
        Self {
            parallax_yaw_gain: PARALLAX_YAW_GAIN,
            parallax_pitch_gain: PARALLAX_PITCH_GAIN,
            parallax_smoothing: PARALLAX_SMOOTHING,
            breathe_amplitude: BREATHE_AMPLITUDE,
            breathe_frequency: BREATHE_FREQUENCY,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneParams {
    pub rig: RigParams,
    pub hover: HoverParams,
    pub composer: ComposerParams,
}

/// Subjects plus the framings they navigate to.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub registry: FocusRegistry,
    pub subjects: Vec<Subject>,
}

/// Notifications for the presentation layer, drained once per frame.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    Focus(FocusEvent),
    Cursor(Cursor),
}

pub struct Scene {
    registry: FocusRegistry,
    focus: FocusState,
    rig: CameraRig,
    objects: Vec<InteractiveObject>,
    hovered: Option<usize>,
    params: SceneParams,

    pointer: Vec2,
    input_frozen: bool,
    /// x = pitch, y = yaw (radians)
    group_rotation: Vec2,
    group_offset_y: f32,
    elapsed: f32,

    outbox: Vec<SceneEvent>,
}

impl Scene {
    pub fn new(catalog: Catalog, params: SceneParams) -> Result<Self, SceneError> {
        let Catalog { registry, subjects } = catalog;
        if subjects.is_empty() {
            return Err(SceneError::EmptyCatalog);
        }
        let mut seen = FnvHashSet::default();
        for s in &subjects {
            if !seen.insert(s.id.as_str()) {
                return Err(SceneError::DuplicateSubject(s.id.clone()));
            }
            if !registry.contains(&s.section) {
                return Err(SceneError::UnknownSubject(s.section.clone()));
            }
        }
        log::info!(
            "[scene] {} subjects, {} focus targets",
            subjects.len(),
            registry.len()
        );
        let rig = CameraRig::at_default(&registry, params.rig.clone());
        Ok(Self {
            objects: subjects.into_iter().map(InteractiveObject::new).collect(),
            registry,
            focus: FocusState::new(),
            rig,
            hovered: None,
            params,
            pointer: Vec2::ZERO,
            input_frozen: false,
            group_rotation: Vec2::ZERO,
            group_offset_y: 0.0,
            elapsed: 0.0,
            outbox: Vec::new(),
        })
    }

    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn camera(&self) -> &Camera {
        self.rig.camera()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.rig.set_aspect(width, height);
    }

    pub fn objects(&self) -> &[InteractiveObject] {
        &self.objects
    }

    pub fn object(&self, id: &str) -> Option<&InteractiveObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered.map(|i| self.objects[i].id())
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn group_rotation(&self) -> Vec2 {
        self.group_rotation
    }

    pub fn group_offset_y(&self) -> f32 {
        self.group_offset_y
    }

    fn index_of(&self, id: &str) -> Result<usize, SceneError> {
        self.objects
            .iter()
            .position(|o| o.id() == id)
            .ok_or_else(|| SceneError::UnknownSubject(id.to_string()))
    }

    // ---------------- Input ----------------

    /// Normalized pointer position in \[-1, 1\] (x right, y up) for parallax.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        if self.input_frozen {
            return;
        }
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    /// While frozen the parallax target stays where it was; breathing and the
    /// camera keep running.
    pub fn set_input_frozen(&mut self, frozen: bool) {
        self.input_frozen = frozen;
    }

    /// Nearest subject under a world-space ray, including the group transform.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<&str> {
        let group = self.group_matrix();
        let spheres = self.objects.iter().map(|o| {
            (
                group.transform_point3(o.current_position()),
                o.subject().bounding_radius() * o.current_scale(),
            )
        });
        nearest_hit(ray_origin, ray_dir, spheres).map(|(i, _)| self.objects[i].id())
    }

    /// Pick through normalized device coordinates of the current camera.
    pub fn pick_ndc(&self, ndc: Vec2) -> Option<&str> {
        let (ro, rd) = self.camera().screen_ray(ndc);
        self.pick(ro, rd)
    }

    /// Move hover to `hit` (the nearest subject under the pointer, if any).
    /// At most one subject is hovered afterwards.
    pub fn pointer_over(&mut self, hit: Option<&str>) -> Result<(), SceneError> {
        let next = hit.map(|id| self.index_of(id)).transpose()?;
        if next == self.hovered {
            return Ok(());
        }
        if let Some(prev) = self.hovered.take() {
            let cursor = self.objects[prev].on_pointer_leave();
            self.outbox.push(SceneEvent::Cursor(cursor));
        }
        if let Some(i) = next {
            let cursor = self.objects[i].on_pointer_enter();
            self.outbox.push(SceneEvent::Cursor(cursor));
            log::debug!("[scene] hover {}", self.objects[i].id());
        }
        self.hovered = next;
        Ok(())
    }

    /// Click on `hit`, or on empty space when `None`. A subject click selects
    /// its section and is not also treated as a miss.
    pub fn click(&mut self, hit: Option<&str>) -> Result<(), SceneError> {
        match hit {
            Some(id) => {
                let i = self.index_of(id)?;
                let event = self.objects[i].on_click();
                self.dispatch(event)?;
            }
            None => self.pointer_missed(),
        }
        Ok(())
    }

    /// Pointer released over no subject: same as `reset`.
    pub fn pointer_missed(&mut self) {
        self.reset();
    }

    /// Navigation-link selection by focus id.
    pub fn select(&mut self, id: &str) -> Result<(), SceneError> {
        self.dispatch(FocusEvent::Select(id.to_string())).map(|_| ())
    }

    /// Reveal the focused section. Returns whether the state changed.
    /// Confirming an already revealed section still queues `Focus(Confirm)`
    /// so the page can bring the content back into view.
    pub fn confirm(&mut self) -> bool {
        let changed = self.apply(FocusEvent::Confirm);
        if !changed && self.focus.content_revealed() {
            self.outbox.push(SceneEvent::Focus(FocusEvent::Confirm));
        }
        changed
    }

    pub fn reset(&mut self) {
        self.apply(FocusEvent::Reset);
    }

    /// Route an event from any source into the focus state. Selections of
    /// unregistered ids are rejected and leave the state untouched.
    pub fn dispatch(&mut self, event: FocusEvent) -> Result<bool, SceneError> {
        if let FocusEvent::Select(id) = &event {
            if !self.registry.contains(id) {
                log::warn!("[scene] navigation to unregistered id '{}'", id);
                return Err(SceneError::UnknownSubject(id.clone()));
            }
        }
        Ok(self.apply(event))
    }

    fn apply(&mut self, event: FocusEvent) -> bool {
        let changed = self.focus.apply(&event);
        if changed {
            self.outbox.push(SceneEvent::Focus(event));
        }
        changed
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.outbox)
    }

    // ---------------- Frame ----------------

    pub fn tick(&mut self, dt_sec: f32) {
        let dt = clamp_dt(dt_sec);
        self.elapsed += dt;
        let t = self.elapsed;

        for o in &mut self.objects {
            o.tick(t, dt, &self.params.hover);
        }

        let c = &self.params.composer;
        let target = Vec2::new(
            -self.pointer.y * c.parallax_pitch_gain,
            self.pointer.x * c.parallax_yaw_gain,
        );
        let k = frame_factor(c.parallax_smoothing, dt);
        self.group_rotation += (target - self.group_rotation) * k;
        self.group_offset_y = c.breathe_amplitude * (t * c.breathe_frequency).sin();

        self.rig.tick(&self.focus, &self.registry);
    }

    /// Scene-group transform carrying the parallax rotation and breathing offset.
    pub fn group_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.group_rotation.x,
            self.group_rotation.y,
            0.0,
        );
        Mat4::from_rotation_translation(rot, Vec3::new(0.0, self.group_offset_y, 0.0))
    }

    pub fn world_matrix(&self, index: usize) -> Option<Mat4> {
        self.objects
            .get(index)
            .map(|o| self.group_matrix() * o.local_matrix())
    }

    /// Hover lights in world space. At most one subject contributes.
    pub fn lights(&self) -> Vec<PointLight> {
        let group = self.group_matrix();
        self.objects
            .iter()
            .flat_map(|o| o.lights(group, &self.params.hover))
            .collect()
    }
}
