use nalgebra::Point3;

#[inline]
pub fn distance_squared(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm_squared()
}

/// Angle at `vertex` formed by the points `a`, `vertex`, `b`, in radians.
///
/// The result lies in `[0, π]`. A degenerate angle (either arm of zero length)
/// is reported as 0.
#[inline]
pub fn angle(a: &Point3<f64>, vertex: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let arm_a = a - vertex;
    let arm_b = b - vertex;
    let norms = arm_a.norm() * arm_b.norm();
    if norms == 0.0 {
        return 0.0;
    }
    let cos_angle = arm_a.dot(&arm_b) / norms;
    cos_angle.clamp(-1.0, 1.0).acos()
}
