//! `aerotf-types` – shared frame vocabulary.
//!
//! Names the reference frames, the closed set of static conversions between
//! them, the flattened covariance layouts, and the error type used at the
//! parsing/validation boundary. The math lives in `aerotf-frames`.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Row-major 3×3 covariance (e.g. position).
pub type Covariance3 = [f64; 9];
/// Row-major 6×6 covariance (e.g. position + velocity, or pose).
pub type Covariance6 = [f64; 36];
/// Row-major 9×9 covariance (e.g. position + velocity + acceleration).
pub type Covariance9 = [f64; 81];

/// A physically-defined reference frame convention.
///
/// Deserializes through [`FromStr`], so config files may use any accepted alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    /// World frame: North, East, Down.
    Ned,
    /// World frame: East, North, Up.
    Enu,
    /// Body frame: Forward, Right, Down.
    Aircraft,
    /// Body frame: Forward, Left, Up.
    BaseLink,
}

impl Frame {
    /// The family of static conversions this frame participates in.
    pub const fn family(self) -> FrameFamily {
        match self {
            Frame::Ned | Frame::Enu => FrameFamily::NedEnu,
            Frame::Aircraft | Frame::BaseLink => FrameFamily::AircraftBaseLink,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Frame::Ned => "ned",
            Frame::Enu => "enu",
            Frame::Aircraft => "aircraft",
            Frame::BaseLink => "base_link",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frame {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ned" => Ok(Frame::Ned),
            "enu" => Ok(Frame::Enu),
            "aircraft" => Ok(Frame::Aircraft),
            "base_link" | "baselink" => Ok(Frame::BaseLink),
            _ => Err(FrameError::UnknownFrame(s.to_string())),
        }
    }
}

/// Which canonical rotation a static conversion uses.
///
/// Both canonical rotations are 180° rotations and therefore self-inverse, so
/// the direction of a conversion never changes the rotation applied. Every
/// transform dispatches on this two-variant type rather than on [`StaticTf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FrameFamily {
    /// World-frame change of basis between NED and ENU.
    NedEnu,
    /// Body-frame change of basis between Aircraft and BaseLink.
    AircraftBaseLink,
}

/// Caller-facing selector for one of the four static conversions.
///
/// Deserializes through [`FromStr`], so `"NED_TO_ENU"` and
/// `"baselink_to_aircraft"` load from config just as they parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StaticTf {
    NedToEnu,
    EnuToNed,
    AircraftToBaseLink,
    BaseLinkToAircraft,
}

impl StaticTf {
    /// All four selectors, in declaration order.
    pub const ALL: [StaticTf; 4] = [
        StaticTf::NedToEnu,
        StaticTf::EnuToNed,
        StaticTf::AircraftToBaseLink,
        StaticTf::BaseLinkToAircraft,
    ];

    /// Collapse the direction away, leaving the rotation family.
    pub const fn family(self) -> FrameFamily {
        match self {
            StaticTf::NedToEnu | StaticTf::EnuToNed => FrameFamily::NedEnu,
            StaticTf::AircraftToBaseLink | StaticTf::BaseLinkToAircraft => {
                FrameFamily::AircraftBaseLink
            }
        }
    }

    /// The frame the input quantity is expressed in.
    pub const fn source(self) -> Frame {
        match self {
            StaticTf::NedToEnu => Frame::Ned,
            StaticTf::EnuToNed => Frame::Enu,
            StaticTf::AircraftToBaseLink => Frame::Aircraft,
            StaticTf::BaseLinkToAircraft => Frame::BaseLink,
        }
    }

    /// The frame the output quantity is expressed in.
    pub const fn target(self) -> Frame {
        self.reverse().source()
    }

    /// The paired selector converting in the opposite direction.
    pub const fn reverse(self) -> StaticTf {
        match self {
            StaticTf::NedToEnu => StaticTf::EnuToNed,
            StaticTf::EnuToNed => StaticTf::NedToEnu,
            StaticTf::AircraftToBaseLink => StaticTf::BaseLinkToAircraft,
            StaticTf::BaseLinkToAircraft => StaticTf::AircraftToBaseLink,
        }
    }

    /// Find the static conversion taking quantities from `from` into `to`.
    ///
    /// Returns [`FrameError::UnsupportedPair`] when the frames are equal or
    /// belong to different families (e.g. NED → BaseLink needs a live
    /// attitude, not a static rotation).
    pub fn between(from: Frame, to: Frame) -> Result<StaticTf, FrameError> {
        StaticTf::ALL
            .into_iter()
            .find(|tf| tf.source() == from && tf.target() == to)
            .ok_or(FrameError::UnsupportedPair { from, to })
    }

    fn as_str(self) -> &'static str {
        match self {
            StaticTf::NedToEnu => "ned_to_enu",
            StaticTf::EnuToNed => "enu_to_ned",
            StaticTf::AircraftToBaseLink => "aircraft_to_base_link",
            StaticTf::BaseLinkToAircraft => "base_link_to_aircraft",
        }
    }
}

impl fmt::Display for StaticTf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaticTf {
    type Err = FrameError;

    /// Accepts the snake_case names produced by `Display` as well as
    /// `"<from>_to_<to>"` spelled with any frame alias [`Frame`] accepts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Some(tf) = StaticTf::ALL.into_iter().find(|tf| tf.as_str() == normalized) {
            return Ok(tf);
        }

        let (from, to) = normalized
            .split_once("_to_")
            .ok_or_else(|| FrameError::UnknownSelector(s.to_string()))?;
        let from: Frame = from
            .parse()
            .map_err(|_| FrameError::UnknownSelector(s.to_string()))?;
        let to: Frame = to
            .parse()
            .map_err(|_| FrameError::UnknownSelector(s.to_string()))?;
        StaticTf::between(from, to)
    }
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        from_name(deserializer)
    }
}

impl<'de> Deserialize<'de> for StaticTf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        from_name(deserializer)
    }
}

fn from_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = FrameError>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl From<StaticTf> for FrameFamily {
    fn from(tf: StaticTf) -> Self {
        tf.family()
    }
}

/// Errors raised at the vocabulary boundary. Transform operations themselves
/// are infallible.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameError {
    #[error("Unknown static transform: {0:?}")]
    UnknownSelector(String),

    #[error("Unknown frame: {0:?}")]
    UnknownFrame(String),

    #[error("No static transform from {from} to {to}")]
    UnsupportedPair { from: Frame, to: Frame },

    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
