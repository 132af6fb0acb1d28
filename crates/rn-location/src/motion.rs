//! Moving a [`Location`] along the network.
//!
//! A move walks track by track.  On each track it covers as much of the
//! remaining distance as the track allows, fires the callbacks for that
//! span, and then either stops or crosses the end it ran into via
//! [`TrackNetwork::transition_end`].  Every crossing consumes a whole track,
//! and track lengths are bounded below by `epsilon_length`, so a move of
//! finite distance always terminates.

use log::{trace, warn};

use rn_core::{Interval, Length, Orientation, SensorId, SignalId, TrackEnd, TrackLocation};
use rn_network::{Track, TrackNetwork};

use crate::location::{enter, remaining_on, travel};
use crate::{Location, LocationError, LocationResult, MoveContext, MoveHooks, MoveOutcome};

impl Location {
    /// Move by the signed distance `d` along the location's orientation.
    pub fn move_by(&mut self, net: &TrackNetwork, d: Length) -> LocationResult<MoveOutcome> {
        self.move_with(net, d, MoveHooks::default())
    }

    /// Move by `d`, dispatching sensors and signals to `hooks`.
    ///
    /// Running into an open end is not an error: the cursor stops on the
    /// end and [`MoveOutcome::leftover`] holds the signed distance still to
    /// go, which can be passed to a later move unchanged.
    pub fn move_with(
        &mut self,
        net: &TrackNetwork,
        d: Length,
        mut hooks: MoveHooks<'_>,
    ) -> LocationResult<MoveOutcome> {
        let mut track = self.bound()?;
        if !d.is_finite() {
            return Err(LocationError::NonFinite(d));
        }
        if d == Length::ZERO {
            return Ok(MoveOutcome::default());
        }

        let forward = d > Length::ZERO;
        let total = d.abs();
        let signed = |x: Length| if forward { x } else { -x };

        let mut ctx = MoveContext::new(net, track, self.tl);
        let mut tl = self.tl;
        let mut travelled = Length::ZERO;
        let mut crossed = false;

        loop {
            let t = net.track(track)?;
            let dir = travel(tl.orientation, hooks.orientation, forward);
            let to_end = remaining_on(tl.parameter, t.length(), dir);
            let remaining = total - travelled;
            let arrives = remaining <= to_end;
            let stop = if arrives {
                (tl.parameter + remaining * dir.sign()).max(Length::ZERO).min(t.length())
            } else {
                t.end_parameter(dir.forward_end())
            };

            let span = Span { from: tl, to: stop, dir, entered: crossed };
            match dispatch(t, span, travelled, &mut ctx, &mut hooks) {
                Dispatch::Clear => {}
                Dispatch::Stopped { parameter, at } => {
                    self.track = Some(track);
                    self.tl = TrackLocation::new(parameter, tl.orientation);
                    let leftover = signed(total - at);
                    return Ok(MoveOutcome { leftover, crossed, relocated: false });
                }
                Dispatch::Relocated { at } => {
                    warn!(
                        "move of {d} abandoned after {at}: relocated to {} on {}",
                        ctx.location(),
                        ctx.track()
                    );
                    self.track = Some(ctx.track());
                    self.tl = ctx.location();
                    let leftover = signed(total - at);
                    return Ok(MoveOutcome { leftover, crossed, relocated: true });
                }
            }

            tl.parameter = stop;
            if arrives {
                self.track = Some(track);
                self.tl = tl;
                return Ok(MoveOutcome { leftover: Length::ZERO, crossed, relocated: false });
            }
            travelled += to_end;

            let exit = TrackEnd::new(track, dir.forward_end());
            let Some(next) = net.transition_end(exit)? else {
                trace!("move stopped at open {exit}");
                self.track = Some(track);
                self.tl = tl;
                let leftover = signed(total - travelled);
                return Ok(MoveOutcome { leftover, crossed, relocated: false });
            };
            trace!("cross {exit} -> {next}");
            (track, tl) = enter(net, exit.end, next, Length::ZERO, tl.orientation)?;
            crossed = true;
        }
    }

    /// Move to the end ahead in the direction of `hooks.orientation`.
    /// Returns the distance covered.
    pub fn move_to_end(
        &mut self,
        net: &TrackNetwork,
        hooks: MoveHooks<'_>,
    ) -> LocationResult<Length> {
        let to_end = self.distance_to_end(net, hooks.orientation)?;
        let outcome = self.move_with(net, to_end, hooks)?;
        Ok(to_end - outcome.leftover.abs())
    }

    /// Move to the end ahead and step onto the track coupled there.
    /// Returns `false` if the end is open or the move was cut short.
    pub fn move_transit(
        &mut self,
        net: &TrackNetwork,
        hooks: MoveHooks<'_>,
    ) -> LocationResult<bool> {
        let hint = hooks.orientation;
        let to_end = self.distance_to_end(net, hint)?;
        let outcome = self.move_with(net, to_end, hooks)?;
        if !outcome.is_complete() {
            return Ok(false);
        }

        let track = self.bound()?;
        let dir = travel(self.tl.orientation, hint, true);
        let exit = TrackEnd::new(track, dir.forward_end());
        let Some(next) = net.transition_end(exit)? else {
            return Ok(false);
        };
        let (track, tl) = enter(net, exit.end, next, Length::ZERO, self.tl.orientation)?;
        self.track = Some(track);
        self.tl = tl;
        Ok(true)
    }

    fn distance_to_end(&self, net: &TrackNetwork, hint: Orientation) -> LocationResult<Length> {
        let len = net.length(self.bound()?)?;
        Ok(remaining_on(self.tl.parameter, len, travel(self.tl.orientation, hint, true)))
    }
}

enum Dispatch {
    Clear,
    Stopped { parameter: Length, at: Length },
    Relocated { at: Length },
}

/// The stretch of one track covered by a move.  `entered` is set when the
/// cursor arrived on the track by crossing an end, so `from` is that end.
struct Span {
    from:    TrackLocation,
    to:      Length,
    dir:     Orientation,
    entered: bool,
}

enum Hit {
    Sensor(SensorId),
    Signal(SignalId, Length),
}

/// Fire the callbacks for `span` of `track`, in the order the cursor
/// reaches them.
///
/// Sensors see the closed span.  Signals see it half-open at the start
/// point of the move, and closed on every track entered by crossing.
fn dispatch(
    track:     &Track,
    span:      Span,
    travelled: Length,
    ctx:       &mut MoveContext<'_>,
    hooks:     &mut MoveHooks<'_>,
) -> Dispatch {
    let Span { from, to, dir, entered } = span;
    let start = from.parameter;
    let covered = Interval::new(start, to).normalized();
    let ahead = |x: Length| (x - start).abs();
    let mut hits: Vec<(Length, Hit)> = Vec::new();

    if hooks.event.is_some() {
        for s in track.sensors().iter().filter(|s| s.interval.intersects(covered)) {
            let first = match dir {
                Orientation::Para => s.interval.near.max(start),
                Orientation::Anti => s.interval.far.min(start),
            };
            hits.push((ahead(first), Hit::Sensor(s.id)));
        }
    }
    if hooks.target.as_ref().is_some_and(|t| t.active()) {
        for s in track.signals().iter().filter(|s| s.location.orientation == dir) {
            let x = s.location.parameter;
            let passed = match dir {
                Orientation::Para => (start < x || (entered && start == x)) && x <= to,
                Orientation::Anti => to <= x && (x < start || (entered && x == start)),
            };
            if passed {
                hits.push((ahead(x), Hit::Signal(s.id, x)));
            }
        }
    }
    if hits.is_empty() {
        return Dispatch::Clear;
    }
    hits.sort_by(|a, b| a.0 .0.total_cmp(&b.0 .0));

    for (offset, hit) in hits {
        let at = travelled + offset;
        ctx.advance(track.id(), TrackLocation::new(start + offset * dir.sign(), from.orientation));
        match hit {
            Hit::Sensor(id) => {
                if let Some(event) = hooks.event.as_mut() {
                    event.trigger(id, ctx);
                }
            }
            Hit::Signal(id, x) => {
                if let Some(target) = hooks.target.as_mut() {
                    let go = target.notify(id, at, ctx);
                    if !go && ctx.is_valid() {
                        return Dispatch::Stopped { parameter: x, at };
                    }
                }
            }
        }
        if !ctx.is_valid() {
            return Dispatch::Relocated { at };
        }
    }
    Dispatch::Clear
}
