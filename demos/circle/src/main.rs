//! circle — drives a cursor around a four-arc loop and through a switch.
//!
//! Run with `RUST_LOG=debug` to see every coupling change, or `trace` for
//! each boundary crossing and reservation spill.

mod network;

use anyhow::Result;
use log::info;

use rn_core::{
    ConnectorId, FormatConfig, Interval, Length, LengthUnit, OwnerId, SensorId, TrackLocation,
};
use rn_location::{Event, Location, MoveContext, MoveHooks};
use rn_network::{Status, SwitchObserver, SwitchStatus, TrackNetwork};

use network::{build_circle, build_yard, RADIUS};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEP_M:  f64     = 5.0;
const TRAIN_A: OwnerId = OwnerId(1);
const TRAIN_B: OwnerId = OwnerId(2);

// ── Callbacks ─────────────────────────────────────────────────────────────────

struct SensorLog;

impl Event for SensorLog {
    fn trigger(&mut self, sensor: SensorId, ctx: &mut MoveContext<'_>) {
        info!("{sensor} occupied at {} on {}", ctx.location(), ctx.track());
    }
}

struct Interlocking;

impl SwitchObserver for Interlocking {
    fn on_status_changed(&mut self, connector: ConnectorId, previous: Status, now: Status) {
        info!("{connector}: {previous:?} -> {now:?}");
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let fmt = FormatConfig { unit: LengthUnit::Meter, precision: 2 };
    let mut net = TrackNetwork::new();

    // ── Loop ──────────────────────────────────────────────────────────────
    let arcs = build_circle(&mut net)?;
    let total: Length = arcs.iter().map(|t| net.length(*t)).sum::<Result<Length, _>>()?;
    info!("circle of radius {RADIUS} m, circumference {}", total.display_with(fmt));

    let gate = net.attach_sensor(arcs[2], Interval::meters(0.0, 2.0))?;
    info!("{gate} at the start of {}", arcs[2]);

    let mut loc = Location::on(&net, arcs[0], TrackLocation::para(Length::ZERO))?;
    let start = loc.transition(&net)?;
    let mut travelled = Length::ZERO;
    let mut sensors = SensorLog;
    while travelled < total {
        let step = Length(STEP_M).min(total - travelled);
        let out = loc.move_with(&net, step, MoveHooks::new().with_event(&mut sensors))?;
        travelled += step - out.leftover.abs();
        let frame = loc.transition(&net)?;
        info!(
            "{} on {:?} at {}: pos {}",
            travelled.display_with(fmt),
            loc.track(),
            loc.param().display_with(fmt),
            frame.position,
        );
    }
    let end = loc.transition(&net)?;
    info!("back at start: {}", end.approx_eq(&start, net.epsilon().0));

    // ── Reservations ──────────────────────────────────────────────────────
    let head = Location::on(&net, arcs[0], TrackLocation::para(Length(1.0)))?;
    head.reserve(&mut net, Interval::meters(-8.0, 4.0), TRAIN_A)?;
    let tail = Location::on(&net, arcs[3], TrackLocation::para(Length(5.0)))?;
    tail.reserve(&mut net, Interval::meters(0.0, 6.0), TRAIN_B)?;
    for o in head.overlaps(&net, TRAIN_A)? {
        info!("{o:?}");
    }
    head.delete_reservation(&mut net, Interval::point(Length::ZERO), TRAIN_A)?;
    info!("cleared {} piece(s) of {TRAIN_B}", net.clear_reservations(TRAIN_B));

    // ── Switch ────────────────────────────────────────────────────────────
    let yard = build_yard(&mut net)?;
    let mut interlocking = Interlocking;
    for status in [SwitchStatus::Branch, SwitchStatus::Go] {
        net.set_status_observed(yard.switch, status.into(), &mut interlocking)?;
        let mut train = Location::on(&net, yard.approach, TrackLocation::para(Length(80.0)))?;
        let out = train.move_by(&net, Length(40.0))?;
        let via = match train.track() {
            Some(t) if t == yard.diverge => "diverging",
            Some(t) if t == yard.straight => "straight",
            _ => "unknown",
        };
        info!(
            "{status:?}: crossed={} now on the {via} track at {}",
            out.crossed,
            train.param().display_with(fmt)
        );
    }
    Ok(())
}
