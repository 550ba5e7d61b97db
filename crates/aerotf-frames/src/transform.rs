//! Static and dynamic frame transforms.
//!
//! Static transforms apply one of the two canonical rotations, chosen by a
//! [`StaticTf`] selector. Dynamic transforms apply an arbitrary orientation
//! supplied by the caller, typically a live vehicle attitude.
//!
//! # Orientation convention
//!
//! NED ↔ ENU is a change of basis of the *world* frame, so the canonical
//! rotation multiplies the orientation on the left. Aircraft ↔ BaseLink is a
//! change of basis of the *body* frame, so it multiplies on the right:
//!
//! ```text
//! q_enu      = Q_ned_enu * q_ned
//! q_baselink = q_aircraft * Q_aircraft_baselink
//! ```
//!
//! Swapping the side still yields a valid unit quaternion, just the wrong one.
//!
//! # Example
//!
//! ```rust
//! use aerotf_frames::transform::{StaticTransform, transform_orientation};
//! use aerotf_frames::euler::{quaternion_from_rpy, quaternion_get_yaw};
//! use aerotf_types::StaticTf;
//! use nalgebra::Vector3;
//!
//! // Level aircraft heading east in NED/Aircraft convention.
//! let q_ned = quaternion_from_rpy(0.0, 0.0, std::f64::consts::FRAC_PI_2);
//! let q_enu = transform_orientation(
//!     &transform_orientation(&q_ned, StaticTf::NedToEnu),
//!     StaticTf::AircraftToBaseLink,
//! );
//! // In ENU/BaseLink convention east is yaw 0.
//! assert!(quaternion_get_yaw(&q_enu).abs() < 1e-9);
//!
//! let v = Vector3::new(1.0, 2.0, 3.0).transform_static(StaticTf::NedToEnu);
//! assert!((v - Vector3::new(2.0, 1.0, -3.0)).norm() < 1e-9);
//! ```

use aerotf_types::{Covariance3, Covariance6, Covariance9, FrameFamily, StaticTf};
use nalgebra::{Matrix3, UnitQuaternion, Vector3};
use tracing::trace;

use crate::constants::{AIRCRAFT_BASELINK, NED_ENU, canonical};
use crate::covariance;

// ────────────────────────────────────────────────────────────────────────────
// Static transforms
// ────────────────────────────────────────────────────────────────────────────

/// Express orientation `q` in the frame selected by `tf`.
///
/// `q` is not renormalized.
pub fn transform_orientation(q: &UnitQuaternion<f64>, tf: StaticTf) -> UnitQuaternion<f64> {
    let family = tf.family();
    trace!(%tf, ?family, "static orientation transform");
    match family {
        FrameFamily::NedEnu => NED_ENU.quaternion * q,
        FrameFamily::AircraftBaseLink => q * AIRCRAFT_BASELINK.quaternion,
    }
}

/// Rotate `v` by the canonical rotation selected by `tf`.
pub fn transform_static_vector(v: &Vector3<f64>, tf: StaticTf) -> Vector3<f64> {
    let family = tf.family();
    trace!(%tf, ?family, "static vector transform");
    canonical(family).affine.transform_vector(v)
}

/// Rotate a 3×3 covariance by the canonical rotation selected by `tf`.
pub fn transform_static_covariance3(cov: &Covariance3, tf: StaticTf) -> Covariance3 {
    static_covariance::<3, 9>(cov, tf)
}

/// Rotate a 6×6 covariance by the canonical rotation selected by `tf`.
pub fn transform_static_covariance6(cov: &Covariance6, tf: StaticTf) -> Covariance6 {
    static_covariance::<6, 36>(cov, tf)
}

/// Rotate a 9×9 covariance by the canonical rotation selected by `tf`.
pub fn transform_static_covariance9(cov: &Covariance9, tf: StaticTf) -> Covariance9 {
    static_covariance::<9, 81>(cov, tf)
}

fn static_covariance<const N: usize, const L: usize>(cov: &[f64; L], tf: StaticTf) -> [f64; L] {
    let family = tf.family();
    trace!(%tf, ?family, size = N, "static covariance transform");
    covariance::rotate::<N, L>(cov, &canonical(family).matrix)
}

// ────────────────────────────────────────────────────────────────────────────
// Dynamic transforms
// ────────────────────────────────────────────────────────────────────────────

/// Rotate `v` by an arbitrary orientation `q`. `q` is not renormalized.
pub fn transform_frame_vector(v: &Vector3<f64>, q: &UnitQuaternion<f64>) -> Vector3<f64> {
    q * v
}

/// Rotate a 3×3 covariance by an arbitrary orientation `q`.
pub fn transform_frame_covariance3(cov: &Covariance3, q: &UnitQuaternion<f64>) -> Covariance3 {
    covariance::rotate::<3, 9>(cov, &normalized_rotation(q))
}

/// Rotate a 6×6 covariance by an arbitrary orientation `q`.
pub fn transform_frame_covariance6(cov: &Covariance6, q: &UnitQuaternion<f64>) -> Covariance6 {
    covariance::rotate::<6, 36>(cov, &normalized_rotation(q))
}

/// Rotate a 9×9 covariance by an arbitrary orientation `q`.
pub fn transform_frame_covariance9(cov: &Covariance9, q: &UnitQuaternion<f64>) -> Covariance9 {
    covariance::rotate::<9, 81>(cov, &normalized_rotation(q))
}

/// Rotation matrix of `q` after renormalization, so drifted attitudes still
/// give an orthonormal operator.
fn normalized_rotation(q: &UnitQuaternion<f64>) -> Matrix3<f64> {
    UnitQuaternion::new_normalize(*q.quaternion())
        .to_rotation_matrix()
        .into_inner()
}

// ────────────────────────────────────────────────────────────────────────────
// Traits
// ────────────────────────────────────────────────────────────────────────────

/// A quantity that can be re-expressed through one of the static conversions.
pub trait StaticTransform: Sized {
    fn transform_static(&self, tf: StaticTf) -> Self;
}

/// A quantity that can be rotated by an arbitrary orientation.
pub trait FrameTransform: Sized {
    fn transform_frame(&self, q: &UnitQuaternion<f64>) -> Self;
}

impl StaticTransform for UnitQuaternion<f64> {
    fn transform_static(&self, tf: StaticTf) -> Self {
        transform_orientation(self, tf)
    }
}

impl StaticTransform for Vector3<f64> {
    fn transform_static(&self, tf: StaticTf) -> Self {
        transform_static_vector(self, tf)
    }
}

impl StaticTransform for Covariance3 {
    fn transform_static(&self, tf: StaticTf) -> Self {
        transform_static_covariance3(self, tf)
    }
}

impl StaticTransform for Covariance6 {
    fn transform_static(&self, tf: StaticTf) -> Self {
        transform_static_covariance6(self, tf)
    }
}

impl StaticTransform for Covariance9 {
    fn transform_static(&self, tf: StaticTf) -> Self {
        transform_static_covariance9(self, tf)
    }
}

impl FrameTransform for Vector3<f64> {
    fn transform_frame(&self, q: &UnitQuaternion<f64>) -> Self {
        transform_frame_vector(self, q)
    }
}

impl FrameTransform for Covariance3 {
    fn transform_frame(&self, q: &UnitQuaternion<f64>) -> Self {
        transform_frame_covariance3(self, q)
    }
}

impl FrameTransform for Covariance6 {
    fn transform_frame(&self, q: &UnitQuaternion<f64>) -> Self {
        transform_frame_covariance6(self, q)
    }
}

impl FrameTransform for Covariance9 {
    fn transform_frame(&self, q: &UnitQuaternion<f64>) -> Self {
        transform_frame_covariance9(self, q)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Named directions
// ────────────────────────────────────────────────────────────────────────────

/// Express a NED quantity in ENU.
pub fn ned_to_enu<T: StaticTransform>(value: &T) -> T {
    value.transform_static(StaticTf::NedToEnu)
}

/// Express an ENU quantity in NED.
pub fn enu_to_ned<T: StaticTransform>(value: &T) -> T {
    value.transform_static(StaticTf::EnuToNed)
}

/// Express an Aircraft (FRD) quantity in BaseLink (FLU).
pub fn aircraft_to_baselink<T: StaticTransform>(value: &T) -> T {
    value.transform_static(StaticTf::AircraftToBaseLink)
}

/// Express a BaseLink (FLU) quantity in Aircraft (FRD).
pub fn baselink_to_aircraft<T: StaticTransform>(value: &T) -> T {
    value.transform_static(StaticTf::BaseLinkToAircraft)
}

/// Rotate a body-frame quantity into the world frame, where `attitude` is the
/// body orientation expressed in that world frame.
pub fn body_to_world<T: FrameTransform>(value: &T, attitude: &UnitQuaternion<f64>) -> T {
    value.transform_frame(attitude)
}

/// Inverse of [`body_to_world`].
pub fn world_to_body<T: FrameTransform>(value: &T, attitude: &UnitQuaternion<f64>) -> T {
    value.transform_frame(&attitude.inverse())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
