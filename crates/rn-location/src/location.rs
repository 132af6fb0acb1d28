//! The `Location` cursor: binding, resolution and read-only queries.

use log::trace;

use rn_core::{EndType, Frame, Length, Orientation, TrackEnd, TrackId, TrackLocation};
use rn_network::TrackNetwork;

use crate::{LocationError, LocationResult};

/// A cursor on a track of a [`TrackNetwork`].
///
/// A location stores only the track ID and a [`TrackLocation`]; the network
/// is passed into every call.  While bound, the parameter always lies in
/// `[0, length]` of the track.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub(crate) track: Option<TrackId>,
    pub(crate) tl: TrackLocation,
}

impl Location {
    /// An unbound location.
    pub fn new() -> Self {
        Self::default()
    }

    /// A location put on `track` at `tl`.
    pub fn on(net: &TrackNetwork, track: TrackId, tl: TrackLocation) -> LocationResult<Self> {
        let mut loc = Self::new();
        loc.put_on(net, track, tl)?;
        Ok(loc)
    }

    /// Bind to `track` at `tl`, resolving a parameter outside `[0, length]`
    /// onto the coupled neighbours.
    ///
    /// Fails with [`LocationError::DeadEnd`] if the parameter runs off an
    /// open end; the location is left unbound in that case.
    pub fn put_on(
        &mut self,
        net: &TrackNetwork,
        track: TrackId,
        tl: TrackLocation,
    ) -> LocationResult<()> {
        self.track = None;
        let (track, tl) = resolve(net, track, tl)?;
        self.track = Some(track);
        self.tl = tl;
        Ok(())
    }

    pub fn unbind(&mut self) {
        self.track = None;
    }

    pub fn is_on(&self) -> bool {
        self.track.is_some()
    }

    pub fn track(&self) -> Option<TrackId> {
        self.track
    }

    pub fn param(&self) -> Length {
        self.tl.parameter
    }

    pub fn orient(&self) -> Orientation {
        self.tl.orientation
    }

    /// Current `(parameter, orientation)`.
    pub fn get(&self) -> LocationResult<TrackLocation> {
        self.bound()?;
        Ok(self.tl)
    }

    /// Reverse the direction of positive travel.
    pub fn flip(&mut self) {
        self.tl.orientation = self.tl.orientation.flip();
    }

    /// Frame at the cursor.  The tangent points in the direction of
    /// positive travel, so it is reversed for `Anti`.
    pub fn transition(&self, net: &TrackNetwork) -> LocationResult<Frame> {
        let frame = net.transition(self.bound()?, self.tl.parameter)?;
        Ok(match self.tl.orientation {
            Orientation::Para => frame,
            Orientation::Anti => frame.reversed(),
        })
    }

    /// `true` if both locations sit on the same spot of the network: the
    /// same track and parameter, or two track ends coupled to each other.
    /// Orientation is ignored.
    pub fn coincides(&self, net: &TrackNetwork, other: &Location) -> LocationResult<bool> {
        let (a, b) = (self.bound()?, other.bound()?);
        let eps = net.epsilon();
        if a == b && self.tl.parameter.approx_eq(other.tl.parameter, eps) {
            return Ok(true);
        }
        let ends = (at_end(net, a, self.tl.parameter)?, at_end(net, b, other.tl.parameter)?);
        let (Some(ea), Some(eb)) = ends else {
            return Ok(false);
        };
        Ok(net.transition_end(ea)? == Some(eb))
    }

    /// Arc-length from this location to `other`, searching in the direction
    /// given by the sign of `max` (relative to this location's orientation)
    /// for at most `|max|`.
    ///
    /// Returns `max` if `other` is not reached within the bound.  Running
    /// off an open end first is an error.
    pub fn distance(
        &self,
        net: &TrackNetwork,
        other: &Location,
        max: Length,
    ) -> LocationResult<Length> {
        let mut track = self.bound()?;
        let target = other.bound()?;
        if !max.is_finite() {
            return Err(LocationError::NonFinite(max));
        }
        let forward = max >= Length::ZERO;
        let limit = max.abs();
        let eps = net.epsilon();

        let mut tl = self.tl;
        let mut travelled = Length::ZERO;
        loop {
            let len = net.length(track)?;
            let dir = travel(tl.orientation, Orientation::Para, forward);
            let to_end = remaining_on(tl.parameter, len, dir);

            if track == target {
                let ahead = (other.tl.parameter - tl.parameter) * dir.sign();
                if ahead.0 >= -eps.0 && travelled + ahead.max(Length::ZERO) <= limit {
                    let gap = travelled + ahead.max(Length::ZERO);
                    return Ok(if forward { gap } else { -gap });
                }
            }
            if travelled + to_end >= limit {
                return Ok(max);
            }

            let exit = TrackEnd::new(track, dir.forward_end());
            let Some(next) = net.transition_end(exit)? else {
                return Err(LocationError::DeadEnd { end: exit });
            };
            travelled += to_end;
            (track, tl) = enter(net, exit.end, next, Length::ZERO, tl.orientation)?;
        }
    }

    pub(crate) fn bound(&self) -> LocationResult<TrackId> {
        self.track.ok_or(LocationError::Unbound)
    }
}

/// Orientation of travel in track coordinates: the cursor orientation,
/// composed with the caller's hint, reversed for backward travel.
pub(crate) fn travel(orientation: Orientation, hint: Orientation, forward: bool) -> Orientation {
    let o = orientation.compose(hint);
    if forward { o } else { o.flip() }
}

/// Distance from `parameter` to the end reached travelling `dir`.
pub(crate) fn remaining_on(parameter: Length, length: Length, dir: Orientation) -> Length {
    match dir {
        Orientation::Para => length - parameter,
        Orientation::Anti => parameter,
    }
}

/// Position `overrun` metres into the track beyond end `next`, having left
/// the previous track through an end of type `exit`.
pub(crate) fn enter(
    net:         &TrackNetwork,
    exit:        EndType,
    next:        TrackEnd,
    overrun:     Length,
    orientation: Orientation,
) -> LocationResult<(TrackId, TrackLocation)> {
    let len = net.length(next.track)?;
    let parameter = match next.end {
        EndType::Front => overrun,
        EndType::End => len - overrun,
    };
    let orientation = if exit == next.end { orientation.flip() } else { orientation };
    Ok((next.track, TrackLocation::new(parameter, orientation)))
}

/// Resolve `tl` on `track` into range by crossing couplings.
pub(crate) fn resolve(
    net:   &TrackNetwork,
    track: TrackId,
    tl:    TrackLocation,
) -> LocationResult<(TrackId, TrackLocation)> {
    if !tl.parameter.is_finite() {
        return Err(LocationError::NonFinite(tl.parameter));
    }
    let eps = net.epsilon();
    let (mut track, mut tl) = (track, tl);
    loop {
        let len = net.length(track)?;
        let p = tl.parameter;
        let (exit, overrun) = if p.0 < -eps.0 {
            (EndType::Front, -p)
        } else if p.0 > len.0 + eps.0 {
            (EndType::End, p - len)
        } else {
            tl.parameter = p.max(Length::ZERO).min(len);
            return Ok((track, tl));
        };

        let from = TrackEnd::new(track, exit);
        let Some(next) = net.transition_end(from)? else {
            return Err(LocationError::DeadEnd { end: from });
        };
        trace!("resolve {overrun} past {from} into {next}");
        (track, tl) = enter(net, exit, next, overrun, tl.orientation)?;
    }
}

/// The end of `track` that `parameter` sits on, if any.
fn at_end(
    net: &TrackNetwork,
    track: TrackId,
    parameter: Length,
) -> LocationResult<Option<TrackEnd>> {
    let eps = net.epsilon();
    let len = net.length(track)?;
    Ok(if parameter.approx_eq(Length::ZERO, eps) {
        Some(TrackEnd::front(track))
    } else if parameter.approx_eq(len, eps) {
        Some(TrackEnd::end(track))
    } else {
        None
    })
}
