//! `aerotf-frames` – Frame Transform Engine.
//!
//! Converts orientations, vectors and covariance matrices between the fixed
//! frame pairs used on aerial vehicles (NED ↔ ENU, Aircraft ↔ BaseLink), or
//! through an arbitrary caller-supplied rotation. Every operation is a pure
//! function; the only shared state is a pair of read-only constants.
//!
//! # Modules
//!
//! - [`constants`] – the two canonical rotations, each held as quaternion,
//!   rotation matrix and affine transform.
//! - [`transform`] – static (selector-driven) and dynamic (attitude-driven)
//!   transforms, exposed as free functions and through the
//!   [`StaticTransform`][transform::StaticTransform] /
//!   [`FrameTransform`][transform::FrameTransform] traits.
//! - [`covariance`] – block-diagonal sandwich product on flattened row-major
//!   covariances, plus slice and upper-triangle packing helpers.
//! - [`euler`] – roll/pitch/yaw conversions.
//!
//! # Example
//!
//! ```rust
//! use aerotf_frames::transform::{aircraft_to_baselink, ned_to_enu};
//! use nalgebra::Vector3;
//!
//! aerotf_frames::init();
//!
//! let right = Vector3::new(0.0, 1.0, 0.0);
//! assert!((aircraft_to_baselink(&right) - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-9);
//!
//! let position_var: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0];
//! let enu = ned_to_enu(&position_var);
//! assert!((enu[0] - 2.0).abs() < 1e-9 && (enu[4] - 1.0).abs() < 1e-9);
//! ```

pub mod constants;
pub mod covariance;
pub mod euler;
pub mod transform;

pub use aerotf_types::{
    Covariance3, Covariance6, Covariance9, Frame, FrameError, FrameFamily, StaticTf,
};
pub use constants::{CanonicalRotation, init};
pub use transform::{FrameTransform, StaticTransform};
