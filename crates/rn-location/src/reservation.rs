//! Reservations addressed relative to a [`Location`].
//!
//! A range is given in the location's own frame: `0` is the cursor, positive
//! values lie ahead in the direction of its orientation.  The range is
//! turned into track coordinates and cut into one piece per track it covers.
//! Overhang past an end is carried onto the coupled track only when it
//! exceeds the end by more than `epsilon_length`; a bound sitting on the end
//! stays on this side.

use std::collections::VecDeque;

use log::{debug, trace};

use rn_core::{EndType, Interval, Length, Orientation, OwnerId, TrackEnd, TrackId};
use rn_network::{Overlap, TrackNetwork};

use crate::{Location, LocationError, LocationResult};

impl Location {
    /// Commit `range` for `owner`, spilling onto neighbouring tracks as far
    /// as couplings reach.  Fails if no part of `range` lands on a track.
    pub fn reserve(
        &self,
        net: &mut TrackNetwork,
        range: Interval,
        owner: OwnerId,
    ) -> LocationResult<()> {
        if !owner.is_valid() {
            return Err(LocationError::InvalidOwner);
        }
        let (track, iv) = self.local_range(range)?;
        let pieces = pieces(net, track, iv)?;
        if pieces.is_empty() {
            return Err(LocationError::ReservationOutOfRange { range });
        }
        let eps = net.epsilon();
        for (t, piece) in &pieces {
            net.ledger_mut(*t)?.commit(owner, *piece, eps);
        }
        debug!("{owner} reserved {range} in {} piece(s) from {track}", pieces.len());
        Ok(())
    }

    /// `true` if `owner` (anyone, for `None`) holds part of `range`.
    pub fn is_reserved(
        &self,
        net: &TrackNetwork,
        range: Interval,
        owner: Option<OwnerId>,
    ) -> LocationResult<bool> {
        let (track, iv) = self.local_range(range)?;
        for (t, piece) in pieces(net, track, iv)? {
            if net.ledger(t)?.is_reserved(owner, piece) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Remove every reservation of `owner` that `range` (or a point, as a
    /// degenerate range) hits, together with the parts of it that continue
    /// over track ends.  Propagation stops at the first track where `owner`
    /// holds nothing touching the shared end.  Returns `true` if anything
    /// was removed.
    pub fn delete_reservation(
        &self,
        net: &mut TrackNetwork,
        range: Interval,
        owner: OwnerId,
    ) -> LocationResult<bool> {
        let (track, iv) = self.local_range(range)?;
        let eps = net.epsilon();

        let mut queue: VecDeque<(TrackId, Vec<Interval>)> = VecDeque::new();
        for (t, piece) in pieces(net, track, iv)? {
            let removed = net.ledger_mut(t)?.remove_intersecting(owner, piece);
            if !removed.is_empty() {
                queue.push_back((t, removed));
            }
        }
        let found = !queue.is_empty();

        while let Some((t, removed)) = queue.pop_front() {
            let len = net.length(t)?;
            for (end, at) in [(EndType::Front, Length::ZERO), (EndType::End, len)] {
                if !removed.iter().any(|iv| iv.touches(Interval::point(at), eps)) {
                    continue;
                }
                let Some(next) = net.transition_end(TrackEnd::new(t, end))? else {
                    continue;
                };
                let next_at = match next.end {
                    EndType::Front => Length::ZERO,
                    EndType::End => net.length(next.track)?,
                };
                let more = net.ledger_mut(next.track)?.remove_touching(owner, next_at, eps);
                if !more.is_empty() {
                    trace!("delete of {owner} continues into {next}");
                    queue.push_back((next.track, more));
                }
            }
        }
        if found {
            debug!("{owner} released reservation at {range} from {track}");
        }
        Ok(found)
    }

    /// Collisions of `owner`'s reservation on this location's track with
    /// anybody else's, following it over every end it continues across.
    pub fn overlaps(&self, net: &TrackNetwork, owner: OwnerId) -> LocationResult<Vec<Overlap>> {
        Ok(net.overlaps_from(self.bound()?, owner)?)
    }

    /// `range` in the coordinates of the location's track.
    fn local_range(&self, range: Interval) -> LocationResult<(TrackId, Interval)> {
        let track = self.bound()?;
        if !range.is_finite() {
            let bad = if range.near.is_finite() { range.far } else { range.near };
            return Err(LocationError::NonFinite(bad));
        }
        let r = range.normalized();
        let p = self.tl.parameter;
        let iv = match self.tl.orientation {
            Orientation::Para => Interval::new(p + r.near, p + r.far),
            Orientation::Anti => Interval::new(p - r.far, p - r.near),
        };
        Ok((track, iv))
    }
}

/// Cut `iv` (coordinates of `track`, possibly overhanging either end) into
/// per-track pieces.
fn pieces(
    net: &TrackNetwork,
    track: TrackId,
    iv: Interval,
) -> LocationResult<Vec<(TrackId, Interval)>> {
    let eps = net.epsilon();
    let mut out = Vec::new();
    let mut stack = vec![(track, iv)];

    while let Some((track, iv)) = stack.pop() {
        let len = net.length(track)?;
        if let Some(piece) = iv.clip(Length::ZERO, len) {
            out.push((track, piece));
        }
        if iv.near.0 < -eps.0 {
            let beyond = Interval::new(-iv.far.min(Length::ZERO), -iv.near);
            stack.extend(across(net, TrackEnd::front(track), beyond)?);
        }
        if iv.far.0 > len.0 + eps.0 {
            let beyond = Interval::new(iv.near.max(len) - len, iv.far - len);
            stack.extend(across(net, TrackEnd::end(track), beyond)?);
        }
    }
    Ok(out)
}

/// `beyond`, measured as distances past `end`, in the coordinates of the
/// track coupled there.
fn across(
    net: &TrackNetwork,
    end: TrackEnd,
    beyond: Interval,
) -> LocationResult<Option<(TrackId, Interval)>> {
    let Some(next) = net.transition_end(end)? else {
        trace!("overhang {beyond} dropped at open {end}");
        return Ok(None);
    };
    let iv = match next.end {
        EndType::Front => beyond,
        EndType::End => {
            let len = net.length(next.track)?;
            Interval::new(len - beyond.far, len - beyond.near)
        }
    };
    trace!("overhang {beyond} past {end} -> {iv} on {}", next.track);
    Ok(Some((next.track, iv)))
}
