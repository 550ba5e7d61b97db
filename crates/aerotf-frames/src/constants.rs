//! Canonical rotations between the fixed frame pairs.
//!
//! - NED ↔ ENU: +π about X (North/East) followed by +π/2 about Z (Down/Up).
//! - Aircraft ↔ BaseLink: +π about X (Forward).
//!
//! Both are 180° rotations, so each is its own inverse. Every representation
//! is derived from the same source quaternion and is therefore consistent
//! with the others by construction.

use std::f64::consts::{FRAC_PI_2, PI};

use aerotf_types::FrameFamily;
use nalgebra::{Affine3, Matrix3, UnitQuaternion};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::euler::quaternion_from_rpy;

/// One canonical rotation materialized in the three forms the transforms use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalRotation {
    /// Source representation.
    pub quaternion: UnitQuaternion<f64>,
    /// 3×3 rotation matrix of the renormalized quaternion.
    pub matrix: Matrix3<f64>,
    /// Pure rotation with zero translation.
    pub affine: Affine3<f64>,
}

impl CanonicalRotation {
    fn from_quaternion(quaternion: UnitQuaternion<f64>) -> Self {
        let matrix = UnitQuaternion::new_normalize(quaternion.into_inner())
            .to_rotation_matrix()
            .into_inner();
        let affine = Affine3::from_matrix_unchecked(quaternion.to_homogeneous());
        Self {
            quaternion,
            matrix,
            affine,
        }
    }
}

/// NED ↔ ENU.
pub static NED_ENU: Lazy<CanonicalRotation> = Lazy::new(|| {
    let rot = CanonicalRotation::from_quaternion(quaternion_from_rpy(PI, 0.0, FRAC_PI_2));
    debug!(
        family = ?FrameFamily::NedEnu,
        q = ?rot.quaternion.coords,
        "canonical rotation ready"
    );
    rot
});

/// Aircraft ↔ BaseLink.
pub static AIRCRAFT_BASELINK: Lazy<CanonicalRotation> = Lazy::new(|| {
    let rot = CanonicalRotation::from_quaternion(quaternion_from_rpy(PI, 0.0, 0.0));
    debug!(
        family = ?FrameFamily::AircraftBaseLink,
        q = ?rot.quaternion.coords,
        "canonical rotation ready"
    );
    rot
});

/// The canonical rotation for `family`.
pub fn canonical(family: FrameFamily) -> &'static CanonicalRotation {
    match family {
        FrameFamily::NedEnu => &NED_ENU,
        FrameFamily::AircraftBaseLink => &AIRCRAFT_BASELINK,
    }
}

/// Materialize every canonical rotation now.
///
/// Optional: the constants initialize themselves on first use. Call this at
/// startup to keep the one-time cost off the first transform.
pub fn init() {
    Lazy::force(&NED_ENU);
    Lazy::force(&AIRCRAFT_BASELINK);
}
