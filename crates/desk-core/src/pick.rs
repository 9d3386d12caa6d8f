use glam::Vec3;

/// Distance along a normalized ray to the first intersection with a sphere,
/// or `None` when the ray misses or the sphere lies behind the origin.
/// A ray starting inside the sphere reports the exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Index of the sphere hit first along the ray. Ties keep the earlier index.
pub fn nearest_hit<I>(ray_origin: Vec3, ray_dir: Vec3, spheres: I) -> Option<(usize, f32)>
where
    I: IntoIterator<Item = (Vec3, f32)>,
{
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in spheres.into_iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}
