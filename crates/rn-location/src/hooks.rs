//! Callbacks a move dispatches to, and the context they run in.

use rn_core::{Length, Orientation, SensorId, SignalId, TrackId, TrackLocation};
use rn_network::TrackNetwork;

use crate::location::resolve;
use crate::LocationResult;

/// Receives the sensors a move passes over.
pub trait Event {
    /// `sensor`'s interval intersects the span just travelled.
    fn trigger(&mut self, sensor: SensorId, ctx: &mut MoveContext<'_>);
}

/// Receives the signals a move runs into.
///
/// Only signals facing the direction of travel are reported, and only
/// while [`active`](Self::active) returns `true`.
pub trait SignalTarget {
    /// `signal` lies `distance` ahead of where the move started.  Return
    /// `false` to stop the move at the signal.
    fn notify(&mut self, signal: SignalId, distance: Length, ctx: &mut MoveContext<'_>) -> bool;

    fn active(&self) -> bool {
        true
    }

    fn set_active(&mut self, _active: bool) {}
}

/// The traversal state handed to every callback of a move.
///
/// Calling [`relocate`](Self::relocate) puts the cursor somewhere else and
/// marks the traversal stale; the move returns right after the callback
/// with the location at the new position.
#[derive(Debug)]
pub struct MoveContext<'n> {
    net: &'n TrackNetwork,
    track: TrackId,
    tl: TrackLocation,
    valid: bool,
}

impl<'n> MoveContext<'n> {
    pub(crate) fn new(net: &'n TrackNetwork, track: TrackId, tl: TrackLocation) -> Self {
        Self { net, track, tl, valid: true }
    }

    pub fn network(&self) -> &'n TrackNetwork {
        self.net
    }

    /// Track the cursor is on when the callback runs.
    pub fn track(&self) -> TrackId {
        self.track
    }

    /// Cursor position when the callback runs.
    pub fn location(&self) -> TrackLocation {
        self.tl
    }

    /// `false` once a callback has relocated the cursor.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Move the cursor to `tl` on `track`, resolved as by `put_on`, and
    /// abort the traversal in flight.  On error nothing changes.
    pub fn relocate(&mut self, track: TrackId, tl: TrackLocation) -> LocationResult<()> {
        let (track, tl) = resolve(self.net, track, tl)?;
        self.track = track;
        self.tl = tl;
        self.valid = false;
        Ok(())
    }

    pub(crate) fn advance(&mut self, track: TrackId, tl: TrackLocation) {
        self.track = track;
        self.tl = tl;
    }
}

/// Optional extras for [`Location::move_with`](crate::Location::move_with).
#[derive(Default)]
pub struct MoveHooks<'h> {
    /// `Anti` travels against the location's orientation.
    pub orientation: Orientation,
    pub event: Option<&'h mut dyn Event>,
    pub target: Option<&'h mut dyn SignalTarget>,
}

impl<'h> MoveHooks<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn oriented(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_event(mut self, event: &'h mut dyn Event) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_target(mut self, target: &'h mut dyn SignalTarget) -> Self {
        self.target = Some(target);
        self
    }
}

/// Result of a move.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MoveOutcome {
    /// Signed distance not travelled; zero when the move completed.
    pub leftover: Length,
    /// At least one track boundary was crossed.
    pub crossed: bool,
    /// A callback relocated the cursor and the move was abandoned.
    pub relocated: bool,
}

impl MoveOutcome {
    pub fn is_complete(&self) -> bool {
        self.leftover == Length::ZERO && !self.relocated
    }
}
