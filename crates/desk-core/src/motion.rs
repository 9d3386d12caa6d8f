//! Small smoothing helpers shared by the controllers, the composer and the rig.

use crate::constants::{MAX_FRAME_DT_SEC, REFERENCE_FRAME_RATE};

/// Clamp a frame delta into the range the animation math is tuned for.
/// Negative or NaN deltas become zero.
#[inline]
pub fn clamp_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_nan() {
        return 0.0;
    }
    dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
}

/// Convert a per-frame smoothing factor tuned at 60 Hz into the factor for an
/// arbitrary frame delta. At exactly 1/60 s this returns `per_frame`.
#[inline]
pub fn frame_factor(per_frame: f32, dt_sec: f32) -> f32 {
    let frames = clamp_dt(dt_sec) * REFERENCE_FRAME_RATE;
    1.0 - (1.0 - per_frame.clamp(0.0, 1.0)).powf(frames)
}

/// Distance-proportional lerp rate with floor and ceiling.
///
/// Stays inside `[min, max]` for zero, huge, infinite and NaN distances.
#[inline]
pub fn adaptive_rate(distance: f32, gain: f32, min: f32, max: f32) -> f32 {
    if distance.is_nan() {
        return max;
    }
    (distance * gain).clamp(min, max)
}
