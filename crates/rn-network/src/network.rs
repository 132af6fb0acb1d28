//! The track network arena.
//!
//! # Data layout
//!
//! Tracks, connectors, sensor hosts and signal hosts each live in a
//! `Vec<Option<_>>` indexed by their typed ID.  Removal leaves a `None`
//! hole; IDs are never reused, so a stale ID fails with a not-found error.
//!
//! ```text
//! tracks[t].front.coupled = Some(TrackEnd { track: u, end: End })
//! tracks[u].end.coupled   = Some(TrackEnd { track: t, end: Front })
//! ```
//!
//! Couplings are always stored on both sides.  Every mutation below keeps
//! that symmetry, and the connector slot bookkeeping keeps the routed pair
//! of each connector coupled.
//!
//! # Threading
//!
//! None.  A network is touched by one thread at a time; callers serialise
//! topology changes against moves and reservations on the same network.

use log::{debug, trace};

use rn_core::{
    ConnectorId, EndType, Frame, Interval, Length, NetworkConfig, SensorId, SignalId, TrackEnd,
    TrackId, TrackLocation,
};

use crate::track::{SensorPlacement, SignalPlacement};
use crate::{
    Connector, ConnectorKind, Curve, Ledger, NetworkError, NetworkResult, NoopSwitchObserver,
    Status, SwitchObserver, Track,
};

/// All tracks, connectors and placements of one railway network.
#[derive(Debug, Default)]
pub struct TrackNetwork {
    config: NetworkConfig,
    pub(crate) tracks: Vec<Option<Track>>,
    connectors: Vec<Option<Connector>>,
    sensors: Vec<Option<TrackId>>,
    signals: Vec<Option<TrackId>>,
}

impl TrackNetwork {
    /// An empty network with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Tolerance for boundary comparisons.
    #[inline]
    pub fn epsilon(&self) -> Length {
        self.config.epsilon_length
    }

    // ── Tracks ────────────────────────────────────────────────────────────

    /// Create a track of the given length without geometry.
    ///
    /// Lengths not strictly greater than `epsilon_length` are rejected, which
    /// guarantees every boundary crossing consumes a positive distance.
    pub fn add_track(&mut self, length: Length) -> NetworkResult<TrackId> {
        self.check_length(length)?;
        let id = TrackId::try_from(self.tracks.len()).map_err(|_| NetworkError::InvalidLength {
            length,
            epsilon: self.epsilon(),
        })?;
        self.tracks.push(Some(Track::new(id, length)));
        debug!("added {id} length {length}");
        Ok(id)
    }

    /// Create a track whose length is fixed by `curve`.
    pub fn add_track_with_curve(&mut self, curve: impl Curve + 'static) -> NetworkResult<TrackId> {
        let id = self.add_track(curve.length())?;
        self.attach_curve(id, curve)?;
        Ok(id)
    }

    /// Attach geometry to a bare track.  The track takes the curve's length
    /// and keeps it from then on.
    pub fn attach_curve(&mut self, id: TrackId, curve: impl Curve + 'static) -> NetworkResult<()> {
        let length = curve.length();
        self.check_length(length)?;
        let track = self.track_mut(id)?;
        if track.curve.is_some() {
            return Err(NetworkError::GeometryAttached(id));
        }
        track.length = length;
        track.curve = Some(Box::new(curve));
        Ok(())
    }

    /// Decouple `id` from every neighbour and connector, then drop it.
    pub fn remove_track(&mut self, id: TrackId) -> NetworkResult<()> {
        for end in [EndType::Front, EndType::End] {
            let te = TrackEnd::new(id, end);
            let membership = self.track(id)?.end_state(end).slot;
            if let Some((c, slot)) = membership {
                self.detach(c, slot)?;
            }
            self.decouple(te)?;
        }
        let track = self.tracks[id.index()].take().ok_or(NetworkError::TrackNotFound(id))?;
        for s in &track.sensors {
            self.sensors[s.id.index()] = None;
        }
        for s in &track.signals {
            self.signals[s.id.index()] = None;
        }
        debug!("removed {id}");
        Ok(())
    }

    pub fn track(&self, id: TrackId) -> NetworkResult<&Track> {
        self.tracks
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(NetworkError::TrackNotFound(id))
    }

    pub(crate) fn track_mut(&mut self, id: TrackId) -> NetworkResult<&mut Track> {
        self.tracks
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(NetworkError::TrackNotFound(id))
    }

    pub fn contains_track(&self, id: TrackId) -> bool {
        self.track(id).is_ok()
    }

    pub fn length(&self, id: TrackId) -> NetworkResult<Length> {
        Ok(self.track(id)?.length)
    }

    /// IDs of all live tracks, ascending.
    pub fn track_ids(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.tracks.iter().flatten().map(|t| t.id)
    }

    pub fn track_count(&self) -> usize {
        self.tracks.iter().flatten().count()
    }

    /// Frame of `track` at `parameter`.
    pub fn transition(&self, track: TrackId, parameter: Length) -> NetworkResult<Frame> {
        let t = self.track(track)?;
        let eps = self.epsilon();
        if parameter.0 < -eps.0 || parameter.0 > t.length.0 + eps.0 {
            return Err(NetworkError::ParameterOutOfRange { track, parameter, length: t.length });
        }
        t.frame(parameter).ok_or(NetworkError::NoGeometry(track))
    }

    fn check_length(&self, length: Length) -> NetworkResult<()> {
        if !length.is_finite() || length <= self.epsilon() {
            return Err(NetworkError::InvalidLength { length, epsilon: self.epsilon() });
        }
        Ok(())
    }

    // ── Couplings ─────────────────────────────────────────────────────────

    /// Couple two track ends directly.
    ///
    /// Fails with [`NetworkError::AlreadyCoupled`] if either end is coupled
    /// to something else, or [`NetworkError::EndInConnector`] if either end
    /// sits in a connector slot, unless `force` is set, in which case the old
    /// couplings and slots are dropped first.  Re-coupling an existing pair
    /// is a no-op.
    pub fn couple(&mut self, a: TrackEnd, b: TrackEnd, force: bool) -> NetworkResult<()> {
        if a == b {
            return Err(NetworkError::SelfCoupling(a));
        }
        let a_now = *self.track(a.track)?.end_state(a.end);
        let b_now = *self.track(b.track)?.end_state(b.end);
        if a_now.coupled == Some(b) && b_now.coupled == Some(a) {
            return Ok(());
        }

        for (end, now) in [(a, a_now), (b, b_now)] {
            if force {
                if let Some((connector, slot)) = now.slot {
                    self.detach(connector, slot)?;
                }
                continue;
            }
            if let Some((connector, slot)) = now.slot {
                return Err(NetworkError::EndInConnector { end, connector, slot });
            }
            if let Some(other) = now.coupled {
                return Err(NetworkError::AlreadyCoupled(end, other));
            }
        }
        self.link(a, b)
    }

    /// Couple `a` and `b`, dropping whatever either was coupled to.  Slots
    /// are left alone.
    fn link(&mut self, a: TrackEnd, b: TrackEnd) -> NetworkResult<()> {
        self.decouple(a)?;
        self.decouple(b)?;

        self.track_mut(a.track)?.end_state_mut(a.end).coupled = Some(b);
        self.track_mut(b.track)?.end_state_mut(b.end).coupled = Some(a);
        debug!("coupled {a} <-> {b}");
        Ok(())
    }

    /// Remove the coupling at `end` on both sides.  Returns the former
    /// partner, if any.
    pub fn decouple(&mut self, end: TrackEnd) -> NetworkResult<Option<TrackEnd>> {
        let Some(other) = self.track_mut(end.track)?.end_state_mut(end.end).coupled.take() else {
            return Ok(None);
        };
        if let Ok(t) = self.track_mut(other.track) {
            let state = t.end_state_mut(other.end);
            if state.coupled == Some(end) {
                state.coupled = None;
            }
        }
        debug!("decoupled {end} <-> {other}");
        Ok(Some(other))
    }

    /// The track end reachable beyond `end` under the current routing, or
    /// `None` for an open end or an unrouted connector slot.
    #[inline]
    pub fn transition_end(&self, end: TrackEnd) -> NetworkResult<Option<TrackEnd>> {
        let next = self.track(end.track)?.end_state(end.end).coupled;
        trace!("transition {end} -> {next:?}");
        Ok(next)
    }

    pub fn is_coupled(&self, end: TrackEnd) -> NetworkResult<bool> {
        Ok(self.transition_end(end)?.is_some())
    }

    // ── Connectors ────────────────────────────────────────────────────────

    /// Create an empty connector in its default status.
    pub fn add_connector(&mut self, kind: ConnectorKind) -> NetworkResult<ConnectorId> {
        if let ConnectorKind::NarrowSwitch { wide } = kind {
            if wide < 2 {
                return Err(NetworkError::TooFewSlots(wide));
            }
        }
        let id = ConnectorId::try_from(self.connectors.len())
            .map_err(|_| NetworkError::TooFewSlots(0))?;
        self.connectors.push(Some(Connector::new(id, kind)));
        debug!("added {id} {kind:?}");
        Ok(id)
    }

    /// Detach every slot, then drop the connector.
    pub fn remove_connector(&mut self, id: ConnectorId) -> NetworkResult<()> {
        let slots = self.connector(id)?.slot_count();
        for slot in 0..slots {
            self.detach(id, slot)?;
        }
        self.connectors[id.index()] = None;
        debug!("removed {id}");
        Ok(())
    }

    pub fn connector(&self, id: ConnectorId) -> NetworkResult<&Connector> {
        self.connectors
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(NetworkError::ConnectorNotFound(id))
    }

    fn connector_mut(&mut self, id: ConnectorId) -> NetworkResult<&mut Connector> {
        self.connectors
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(NetworkError::ConnectorNotFound(id))
    }

    fn check_slot(&self, id: ConnectorId, slot: usize) -> NetworkResult<&Connector> {
        let c = self.connector(id)?;
        if slot >= c.slot_count() {
            return Err(NetworkError::NoSuchSlot { connector: id, slot, slots: c.slot_count() });
        }
        Ok(c)
    }

    /// Contents of slot `slot` of connector `id`.
    pub fn slot(&self, id: ConnectorId, slot: usize) -> NetworkResult<Option<TrackEnd>> {
        Ok(self.check_slot(id, slot)?.slot(slot))
    }

    /// Put `end` into slot `slot`.  If the current status routes that slot
    /// and its partner slot is filled, the two ends are coupled.
    ///
    /// An occupied slot, an end already sitting in another slot, or an end
    /// already coupled elsewhere fails with a logic-conflict error unless
    /// `force` is set, in which case the old state is cleared.
    pub fn attach(
        &mut self,
        id: ConnectorId,
        slot: usize,
        end: TrackEnd,
        force: bool,
    ) -> NetworkResult<()> {
        let connector = self.check_slot(id, slot)?;
        let occupant = connector.slot(slot);
        let status = connector.status;
        let state = *self.track(end.track)?.end_state(end.end);

        if occupant == Some(end) {
            return Ok(());
        }
        if !force {
            if let Some(occupant) = occupant {
                return Err(NetworkError::SlotOccupied { connector: id, slot, occupant });
            }
            if let Some((connector, slot)) = state.slot {
                return Err(NetworkError::EndInConnector { end, connector, slot });
            }
            if let Some(other) = state.coupled {
                return Err(NetworkError::AlreadyCoupled(end, other));
            }
        }

        if occupant.is_some() {
            self.detach(id, slot)?;
        }
        if let Some((c, s)) = state.slot {
            self.detach(c, s)?;
        }
        self.decouple(end)?;

        self.connector_mut(id)?.slots[slot] = Some(end);
        self.track_mut(end.track)?.end_state_mut(end.end).slot = Some((id, slot));
        debug!("attached {end} to slot {slot} of {id}");

        let partner = match status.partner(slot) {
            Some(p) => self.connector(id)?.slot(p),
            None => None,
        };
        if let Some(other) = partner {
            self.link(end, other)?;
        }
        Ok(())
    }

    /// Empty slot `slot`, decoupling its end if it was routed.  Returns the
    /// end that was there.
    pub fn detach(&mut self, id: ConnectorId, slot: usize) -> NetworkResult<Option<TrackEnd>> {
        let connector = self.check_slot(id, slot)?;
        let Some(end) = connector.slot(slot) else {
            return Ok(None);
        };
        let routed_to = connector.status.partner(slot).and_then(|p| connector.slot(p));

        if let Some(other) = routed_to {
            if self.transition_end(end)? == Some(other) {
                self.decouple(end)?;
            }
        }
        self.connector_mut(id)?.slots[slot] = None;
        if let Ok(t) = self.track_mut(end.track) {
            t.end_state_mut(end.end).slot = None;
        }
        debug!("detached {end} from slot {slot} of {id}");
        Ok(Some(end))
    }

    pub fn status(&self, id: ConnectorId) -> NetworkResult<Status> {
        Ok(self.connector(id)?.status)
    }

    /// Set the routing of connector `id`.  Returns the previous status.
    pub fn set_status(&mut self, id: ConnectorId, status: Status) -> NetworkResult<Status> {
        self.set_status_observed(id, status, &mut NoopSwitchObserver)
    }

    /// Set the routing of connector `id`, then notify `observer`.
    ///
    /// The previously routed slot pair is decoupled and the newly selected
    /// pair is coupled (when both its slots are filled).
    pub fn set_status_observed<O: SwitchObserver>(
        &mut self,
        id: ConnectorId,
        status: Status,
        observer: &mut O,
    ) -> NetworkResult<Status> {
        let connector = self.connector(id)?;
        if !connector.kind.accepts(status) {
            return Err(NetworkError::StatusMismatch { connector: id, status });
        }
        let previous = connector.status;
        let old_pair = connector.routed_ends();

        if let Some((a, b)) = old_pair {
            if self.transition_end(a)? == Some(b) {
                self.decouple(a)?;
            }
        }
        let connector = self.connector_mut(id)?;
        connector.status = status;
        let new_pair = connector.routed_ends();
        if let Some((a, b)) = new_pair {
            self.link(a, b)?;
        }

        debug!("{id} status {previous:?} -> {status:?}");
        observer.on_status_changed(id, previous, status);
        Ok(previous)
    }

    /// Advance connector `id` to the next status in its kind's fixed order.
    /// Returns the previous status.
    pub fn toggle(&mut self, id: ConnectorId) -> NetworkResult<Status> {
        let c = self.connector(id)?;
        let next = c.kind.next_status(c.status);
        self.set_status(id, next)
    }

    // ── Sensors & signals ─────────────────────────────────────────────────

    /// Register a sensor covering `interval` of `track`.
    pub fn attach_sensor(&mut self, track: TrackId, interval: Interval) -> NetworkResult<SensorId> {
        let interval = interval.normalized();
        let eps = self.epsilon();
        let t = self.track(track)?;
        let beyond = interval.near.0 < -eps.0 || interval.far.0 > t.length.0 + eps.0;
        if !interval.is_finite() || beyond {
            return Err(NetworkError::IntervalOutOfRange { track, interval });
        }
        let id = SensorId::try_from(self.sensors.len())
            .map_err(|_| NetworkError::IntervalOutOfRange { track, interval })?;
        self.sensors.push(Some(track));
        self.track_mut(track)?.sensors.push(SensorPlacement { id, interval });
        Ok(id)
    }

    pub fn detach_sensor(&mut self, id: SensorId) -> NetworkResult<()> {
        let track = self
            .sensors
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(NetworkError::SensorNotFound(id))?;
        self.track_mut(track)?.sensors.retain(|s| s.id != id);
        Ok(())
    }

    /// Register a signal at `location` of `track`.  The signal governs
    /// travel in the direction of `location.orientation`.
    pub fn attach_signal(
        &mut self,
        track: TrackId,
        location: TrackLocation,
    ) -> NetworkResult<SignalId> {
        let t = self.track(track)?;
        if !location.parameter.is_finite() || !t.in_range(location.parameter) {
            return Err(NetworkError::ParameterOutOfRange {
                track,
                parameter: location.parameter,
                length: t.length,
            });
        }
        let id =
            SignalId::try_from(self.signals.len()).map_err(|_| NetworkError::ParameterOutOfRange {
                track,
                parameter: location.parameter,
                length: Length::ZERO,
            })?;
        self.signals.push(Some(track));
        self.track_mut(track)?.signals.push(SignalPlacement { id, location });
        Ok(id)
    }

    pub fn detach_signal(&mut self, id: SignalId) -> NetworkResult<()> {
        let track = self
            .signals
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(NetworkError::SignalNotFound(id))?;
        self.track_mut(track)?.signals.retain(|s| s.id != id);
        Ok(())
    }

    /// Host track of a signal.
    pub fn signal_track(&self, id: SignalId) -> NetworkResult<TrackId> {
        self.signals
            .get(id.index())
            .copied()
            .flatten()
            .ok_or(NetworkError::SignalNotFound(id))
    }

    // ── Reservation storage ───────────────────────────────────────────────

    pub fn ledger(&self, track: TrackId) -> NetworkResult<&Ledger> {
        Ok(&self.track(track)?.ledger)
    }

    pub fn ledger_mut(&mut self, track: TrackId) -> NetworkResult<&mut Ledger> {
        Ok(&mut self.track_mut(track)?.ledger)
    }
}
