//! Curve collaborators: turn an arc-length parameter into a 3-D frame.
//!
//! The engine only needs two things from a curve: its total length (which
//! fixes the track length once attached) and a frame at a given parameter.
//! [`Line`] and [`Arc`] cover straight track and constant-radius bends in the
//! horizontal plane; richer geometry plugs in through the [`Curve`] trait.

use std::fmt;

use rn_core::{Angle, Frame, Length, Vec3};

/// Parameterised-by-arc-length curve geometry.
pub trait Curve: fmt::Debug {
    /// Total arc length.
    fn length(&self) -> Length;

    /// Frame at arc length `s` from the curve start.  `s` is clamped to
    /// `[0, length]` by the caller.
    fn frame(&self, s: Length) -> Frame;
}

// ── Line ──────────────────────────────────────────────────────────────────────

/// A straight segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    start: Vec3,
    direction: Vec3,
    length: Length,
}

impl Line {
    /// Segment from `start` along `direction` (normalised here).
    pub fn new(start: Vec3, direction: Vec3, length: Length) -> Self {
        Self { start, direction: direction.normalized(), length }
    }

    /// Segment between two points.
    pub fn between(a: Vec3, b: Vec3) -> Self {
        Self::new(a, b - a, Length(a.distance(b)))
    }
}

impl Curve for Line {
    fn length(&self) -> Length {
        self.length
    }

    fn frame(&self, s: Length) -> Frame {
        Frame::new(self.start + self.direction * s.0, self.direction)
    }
}

// ── Arc ───────────────────────────────────────────────────────────────────────

/// A circular arc in the plane `z = center.z`.
///
/// `start` is the polar angle of the first point around `center`; a positive
/// `sweep` runs counter-clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    center: Vec3,
    radius: Length,
    start: Angle,
    sweep: Angle,
}

impl Arc {
    pub fn new(center: Vec3, radius: Length, start: Angle, sweep: Angle) -> Self {
        Self { center, radius: radius.abs(), start, sweep }
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    fn angle_at(&self, s: Length) -> f64 {
        let turn = if self.radius.0 > 0.0 { s.0 / self.radius.0 } else { 0.0 };
        self.start.0 + self.sweep.0.signum() * turn
    }
}

impl Curve for Arc {
    fn length(&self) -> Length {
        Length(self.radius.0 * self.sweep.0.abs())
    }

    fn frame(&self, s: Length) -> Frame {
        let theta = self.angle_at(s);
        let (sin, cos) = theta.sin_cos();
        let r = self.radius.0;
        let position = self.center + Vec3::new(r * cos, r * sin, 0.0);
        let tangent = Vec3::new(-sin, cos, 0.0) * self.sweep.0.signum();
        Frame::new(position, tangent)
    }
}
