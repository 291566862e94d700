//! Cylindrical coordinate helpers around the cable axis (Z).
//!
//! Angles are carried in degrees everywhere in the pipeline and only
//! converted to radians at the trig call.

use nalgebra::{Point3, Rotation3, Vector3};

/// Cartesian point at `radius` and azimuth `theta_deg`, height `z`.
pub fn polar_point(radius: f64, theta_deg: f64, z: f64) -> Point3<f64> {
    let (sin, cos) = theta_deg.to_radians().sin_cos();
    Point3::new(radius * cos, radius * sin, z)
}

/// Azimuth of `p` about the Z axis, in degrees within (-180, 180].
pub fn azimuth_deg(p: &Point3<f64>) -> f64 {
    p.y.atan2(p.x).to_degrees()
}

/// Distance of `p` from the Z axis.
pub fn radial_distance(p: &Point3<f64>) -> f64 {
    p.x.hypot(p.y)
}

/// Rotation about the Z axis by `angle_deg`.
pub fn rotation_z(angle_deg: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle_deg.to_radians())
}

/// Reflect `p` across the YZ plane (negate X), then rotate about Z.
///
/// This turns a right-handed helix into its left-handed counterpart.
pub fn mirror_rotate(p: &Point3<f64>, angle_deg: f64) -> Point3<f64> {
    rotation_z(angle_deg) * Point3::new(-p.x, p.y, p.z)
}

/// Wrap an angle into [0, 360).
pub fn wrap_deg(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
