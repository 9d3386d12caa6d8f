//! Per-frame camera controller.
//!
//! Every frame the eye and look-at point close a fraction of the remaining gap
//! to the goal. The fraction grows with distance but is clamped on both sides,
//! so far jumps catch up quickly and the final approach settles gently. There
//! is no arrival state: a new goal simply replaces the old one mid-flight.

use crate::camera::Camera;
use crate::constants::*;
use crate::focus::FocusState;
use crate::motion::adaptive_rate;
use crate::registry::{FocusRegistry, FocusTarget};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct RigParams {
    pub pos_gain: f32,
    pub pos_rate_min: f32,
    pub pos_rate_max: f32,
    pub look_gain: f32,
    pub look_rate_min: f32,
    pub look_rate_max: f32,
}

impl Default for RigParams {
    fn default() -> Self {
        Self {
            pos_gain: RIG_POS_GAIN,
            pos_rate_min: RIG_POS_RATE_MIN,
            pos_rate_max: RIG_POS_RATE_MAX,
            look_gain: RIG_LOOK_GAIN,
            look_rate_min: RIG_LOOK_RATE_MIN,
            look_rate_max: RIG_LOOK_RATE_MAX,
        }
    }
}

/// Rates used by the most recent step, exposed for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RigStep {
    pub distance: f32,
    pub pos_rate: f32,
    pub look_rate: f32,
}

/// Derive the goal from the focus state. Recomputed every frame, never cached.
///
/// An active id missing from the registry is a programming error: debug
/// builds panic, release builds log it and frame the default view.
pub fn resolve_goal(focus: &FocusState, registry: &FocusRegistry) -> FocusTarget {
    match focus.active_id() {
        None => registry.default_view(),
        Some(id) => match registry.lookup(id) {
            Ok(target) => *target,
            Err(e) => {
                debug_assert!(false, "focus state holds unregistered id: {e}");
                log::error!("[rig] {e}; falling back to default view");
                registry.default_view()
            }
        },
    }
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    camera: Camera,
    params: RigParams,
    last: RigStep,
}

impl CameraRig {
    pub fn new(camera: Camera, params: RigParams) -> Self {
        Self {
            camera,
            params,
            last: RigStep::default(),
        }
    }

    /// Start at the registry's default framing.
    pub fn at_default(registry: &FocusRegistry, params: RigParams) -> Self {
        let view = registry.default_view();
        let camera = Camera {
            eye: view.eye,
            target: view.look_at,
            ..Camera::default()
        };
        Self::new(camera, params)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    pub fn look_at(&self) -> Vec3 {
        self.camera.target
    }

    pub fn last_step(&self) -> RigStep {
        self.last
    }

    /// Advance one frame toward whatever the focus state currently asks for.
    pub fn tick(&mut self, focus: &FocusState, registry: &FocusRegistry) -> RigStep {
        let goal = resolve_goal(focus, registry);
        self.step_toward(goal)
    }

    pub fn step_toward(&mut self, goal: FocusTarget) -> RigStep {
        let p = &self.params;
        let distance = self.camera.eye.distance(goal.eye);
        let pos_rate = adaptive_rate(distance, p.pos_gain, p.pos_rate_min, p.pos_rate_max);
        let look_rate = adaptive_rate(distance, p.look_gain, p.look_rate_min, p.look_rate_max);

        self.camera.eye = self.camera.eye.lerp(goal.eye, pos_rate);
        self.camera.target = self.camera.target.lerp(goal.look_at, look_rate);

        self.last = RigStep {
            distance,
            pos_rate,
            look_rate,
        };
        self.last
    }
}
