use glam::Quat;

/// Step `from` toward `to` by at most `max_angle` radians along the shortest arc.
///
/// Never overshoots: when the remaining separation is within `max_angle` the
/// result is exactly `to`. A non-positive step leaves `from` unchanged.
pub fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    if max_angle <= 0.0 || max_angle.is_nan() {
        return from;
    }
    // `angle_between` rounds separations below about 5e-4 rad down to zero.
    let angle = from.angle_between(to);
    if angle <= max_angle {
        return to;
    }
    from.slerp(to, max_angle / angle).normalize()
}
