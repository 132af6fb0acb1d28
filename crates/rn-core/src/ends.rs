//! Track ends, travel orientation, and the unbound `(parameter, orientation)`
//! pair.
//!
//! A track's parameter runs from `0` at its [`EndType::Front`] to its length
//! at its [`EndType::End`].  An [`Orientation`] says whether "positive
//! travel" for a cursor agrees with that parameter direction.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::{Length, ParseEnumError, TrackId};

// ── EndType ───────────────────────────────────────────────────────────────────

/// One of the two ends of a track.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndType {
    /// The end at parameter `0`.
    Front,
    /// The end at parameter `length`.
    End,
}

impl EndType {
    #[inline]
    pub fn opposite(self) -> EndType {
        match self {
            EndType::Front => EndType::End,
            EndType::End => EndType::Front,
        }
    }

    /// Orientation of travel that leaves the track through this end.
    #[inline]
    pub fn exit_orientation(self) -> Orientation {
        match self {
            EndType::Front => Orientation::Anti,
            EndType::End => Orientation::Para,
        }
    }
}

impl fmt::Display for EndType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EndType::Front => "front",
            EndType::End => "end",
        })
    }
}

impl FromStr for EndType {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(EndType::Front),
            "end" => Ok(EndType::End),
            _ => Err(ParseEnumError { what: "track end", got: s.to_owned() }),
        }
    }
}

/// A specific end of a specific track.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEnd {
    pub track: TrackId,
    pub end: EndType,
}

impl TrackEnd {
    #[inline]
    pub fn new(track: TrackId, end: EndType) -> Self {
        Self { track, end }
    }

    #[inline]
    pub fn front(track: TrackId) -> Self {
        Self::new(track, EndType::Front)
    }

    #[inline]
    pub fn end(track: TrackId) -> Self {
        Self::new(track, EndType::End)
    }

    /// The other end of the same track.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::new(self.track, self.end.opposite())
    }
}

impl fmt::Display for TrackEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.track, self.end)
    }
}

// ── Orientation ───────────────────────────────────────────────────────────────

/// Whether positive travel agrees with the track's own parameter direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Para,
    Anti,
}

impl Orientation {
    #[inline]
    pub fn flip(self) -> Orientation {
        match self {
            Orientation::Para => Orientation::Anti,
            Orientation::Anti => Orientation::Para,
        }
    }

    /// `+1.0` for `Para`, `-1.0` for `Anti`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Orientation::Para => 1.0,
            Orientation::Anti => -1.0,
        }
    }

    /// Compose two orientations: `Para` is the identity, `Anti` flips.
    #[inline]
    pub fn compose(self, other: Orientation) -> Orientation {
        if other == Orientation::Para { self } else { self.flip() }
    }

    /// The end a cursor with this orientation reaches by travelling forward.
    #[inline]
    pub fn forward_end(self) -> EndType {
        match self {
            Orientation::Para => EndType::End,
            Orientation::Anti => EndType::Front,
        }
    }
}

impl Not for Orientation {
    type Output = Orientation;
    #[inline]
    fn not(self) -> Orientation {
        self.flip()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Para => "para",
            Orientation::Anti => "anti",
        })
    }
}

impl FromStr for Orientation {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "para" => Ok(Orientation::Para),
            "anti" => Ok(Orientation::Anti),
            _ => Err(ParseEnumError { what: "orientation", got: s.to_owned() }),
        }
    }
}

// ── TrackLocation ─────────────────────────────────────────────────────────────

/// A `(parameter, orientation)` pair without a bound track.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackLocation {
    pub parameter: Length,
    pub orientation: Orientation,
}

impl TrackLocation {
    #[inline]
    pub fn new(parameter: Length, orientation: Orientation) -> Self {
        Self { parameter, orientation }
    }

    #[inline]
    pub fn para(parameter: Length) -> Self {
        Self::new(parameter, Orientation::Para)
    }

    #[inline]
    pub fn anti(parameter: Length) -> Self {
        Self::new(parameter, Orientation::Anti)
    }

    /// Same parameter, `eps`-tolerant; orientations must match exactly.
    pub fn approx_eq(&self, other: &TrackLocation, eps: Length) -> bool {
        self.orientation == other.orientation && self.parameter.approx_eq(other.parameter, eps)
    }
}

impl fmt::Display for TrackLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.parameter, self.orientation)
    }
}
