//! Euler-angle helpers.
//!
//! Angles follow the aerospace roll/pitch/yaw convention: the rotation is
//! `Rz(yaw) · Ry(pitch) · Rx(roll)`, i.e. roll is applied first about X, then
//! pitch about Y, then yaw about Z.

use nalgebra::{UnitQuaternion, Vector3};

/// Build an orientation from roll, pitch and yaw (radians).
pub fn quaternion_from_rpy(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(roll, pitch, yaw)
}

/// Same as [`quaternion_from_rpy`] with the angles packed as `(roll, pitch, yaw)`.
pub fn quaternion_from_rpy_vector(rpy: &Vector3<f64>) -> UnitQuaternion<f64> {
    quaternion_from_rpy(rpy.x, rpy.y, rpy.z)
}

/// Decompose an orientation into `(roll, pitch, yaw)` radians.
///
/// Pitch lies in `[-π/2, π/2]`; near gimbal lock roll and yaw are not unique.
pub fn quaternion_to_rpy(q: &UnitQuaternion<f64>) -> Vector3<f64> {
    let (roll, pitch, yaw) = q.euler_angles();
    Vector3::new(roll, pitch, yaw)
}

/// Yaw (heading) of an orientation, in `(-π, π]`.
///
/// Computed directly from the quaternion components, which is cheaper than a
/// full [`quaternion_to_rpy`] and stays well defined at gimbal lock.
pub fn quaternion_get_yaw(q: &UnitQuaternion<f64>) -> f64 {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    let siny_cosp = 2.0 * (w * z + x * y);
    let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
    siny_cosp.atan2(cosy_cosp)
}
