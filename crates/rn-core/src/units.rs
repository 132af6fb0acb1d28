//! Arc-length and angle scalars plus closed arc-length intervals.
//!
//! `Length` is an `f64` count of metres.  Equality between lengths computed
//! along different paths is never exact, so every boundary comparison in the
//! engine goes through [`Length::approx_eq`] (or the interval helpers) with
//! the network's configured `epsilon_length`.
//!
//! Formatting never reads process-wide state: the default `Display` prints
//! metres with three decimals, and callers that want another unit pass an
//! explicit [`FormatConfig`] to [`Length::display_with`].

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// ── Length ────────────────────────────────────────────────────────────────────

/// A signed arc length in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Default tolerance for boundary comparisons (one micrometre).
    pub const EPSILON: Length = Length(1e-6);

    #[inline]
    pub fn meters(m: f64) -> Self {
        Self(m)
    }

    #[inline]
    pub fn kilometers(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    #[inline]
    pub fn as_meters(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// `-1.0`, `0.0` or `1.0`.
    #[inline]
    pub fn signum(self) -> f64 {
        if self.0 > 0.0 {
            1.0
        } else if self.0 < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// `true` if `|self - other| <= eps`.
    #[inline]
    pub fn approx_eq(self, other: Length, eps: Length) -> bool {
        (self.0 - other.0).abs() <= eps.0
    }

    /// Format with an explicit unit and precision.
    pub fn display_with(self, format: FormatConfig) -> LengthDisplay {
        LengthDisplay { value: self, format }
    }
}

impl Add for Length {
    type Output = Length;
    #[inline]
    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;
    #[inline]
    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Neg for Length {
    type Output = Length;
    #[inline]
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;
    #[inline]
    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;
    #[inline]
    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

impl Div for Length {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

impl AddAssign for Length {
    #[inline]
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Length {
    #[inline]
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::ZERO, Add::add)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(FormatConfig::default()).fmt(f)
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Unit used when printing a [`Length`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    #[default]
    Meter,
    Kilometer,
}

impl LengthUnit {
    /// Metres per unit.
    fn scale(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1_000.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
        }
    }
}

/// Explicit formatting options, passed to every formatting call that needs
/// something other than the default.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatConfig {
    pub unit: LengthUnit,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { unit: LengthUnit::Meter, precision: 3 }
    }
}

/// Helper returned by [`Length::display_with`].
pub struct LengthDisplay {
    value: Length,
    format: FormatConfig,
}

impl fmt::Display for LengthDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value.0 / self.format.unit.scale();
        write!(f, "{:.*}{}", self.format.precision, v, self.format.unit.symbol())
    }
}

// ── Angle ─────────────────────────────────────────────────────────────────────

/// A plane angle in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub fn radians(r: f64) -> Self {
        Self(r)
    }

    #[inline]
    pub fn degrees(d: f64) -> Self {
        Self(d.to_radians())
    }

    #[inline]
    pub fn as_radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}°", self.0.to_degrees())
    }
}

// ── Interval ──────────────────────────────────────────────────────────────────

/// A closed arc-length interval `[near, far]`.
///
/// Intervals handed to the public API may have `near > far`; every consumer
/// calls [`normalized`](Self::normalized) before doing geometry on them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub near: Length,
    pub far: Length,
}

impl Interval {
    #[inline]
    pub fn new(near: Length, far: Length) -> Self {
        Self { near, far }
    }

    /// Convenience constructor from raw metres.
    #[inline]
    pub fn meters(near: f64, far: f64) -> Self {
        Self::new(Length(near), Length(far))
    }

    /// Degenerate interval addressing a single point.
    #[inline]
    pub fn point(at: Length) -> Self {
        Self::new(at, at)
    }

    /// The same interval with `near <= far`.
    #[inline]
    pub fn normalized(self) -> Self {
        if self.near <= self.far { self } else { Self::new(self.far, self.near) }
    }

    #[inline]
    pub fn length(self) -> Length {
        (self.far - self.near).abs()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.near.is_finite() && self.far.is_finite()
    }

    /// Shift both bounds by `d`.
    #[inline]
    pub fn offset(self, d: Length) -> Self {
        Self::new(self.near + d, self.far + d)
    }

    /// Closed containment test on a normalized interval.
    #[inline]
    pub fn contains(self, x: Length) -> bool {
        self.near <= x && x <= self.far
    }

    /// Closed intersection test; both intervals must be normalized.
    #[inline]
    pub fn intersects(self, other: Interval) -> bool {
        self.near <= other.far && other.near <= self.far
    }

    /// `true` if the intervals intersect or their gap is within `eps`.
    #[inline]
    pub fn touches(self, other: Interval, eps: Length) -> bool {
        self.near.0 <= other.far.0 + eps.0 && other.near.0 <= self.far.0 + eps.0
    }

    /// Intersection with `[lo, hi]`, or `None` if disjoint.
    pub fn clip(self, lo: Length, hi: Length) -> Option<Interval> {
        let near = self.near.max(lo);
        let far = self.far.min(hi);
        (near <= far).then_some(Interval::new(near, far))
    }

    /// Smallest interval covering both.
    #[inline]
    pub fn hull(self, other: Interval) -> Interval {
        Interval::new(self.near.min(other.near), self.far.max(other.far))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.near, self.far)
    }
}
