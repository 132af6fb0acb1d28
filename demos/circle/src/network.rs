//! Hand-built networks for the demo.

use std::f64::consts::FRAC_PI_2;

use anyhow::Result;

use rn_core::{Angle, ConnectorId, Length, TrackEnd, TrackId, Vec3};
use rn_network::{connector, Arc, ConnectorKind, Line, TrackNetwork};

pub const RADIUS: f64 = 10.0;

/// Four counter-clockwise quarter arcs around the origin, End → Front.
pub fn build_circle(net: &mut TrackNetwork) -> Result<Vec<TrackId>> {
    let mut ids = Vec::with_capacity(4);
    for i in 0..4u32 {
        let start = Angle(f64::from(i) * FRAC_PI_2);
        let arc = Arc::new(Vec3::ZERO, Length(RADIUS), start, Angle(FRAC_PI_2));
        ids.push(net.add_track_with_curve(arc)?);
    }
    for (i, id) in ids.iter().enumerate() {
        net.couple(TrackEnd::end(*id), TrackEnd::front(ids[(i + 1) % ids.len()]), false)?;
    }
    Ok(ids)
}

/// A straight approach running into a two-way switch, with a straight and
/// a diverging exit.
pub struct Yard {
    pub switch:   ConnectorId,
    pub approach: TrackId,
    pub straight: TrackId,
    pub diverge:  TrackId,
}

pub fn build_yard(net: &mut TrackNetwork) -> Result<Yard> {
    let joint = Vec3::new(0.0, 50.0, 0.0);
    let approach = net.add_track_with_curve(Line::between(Vec3::new(-100.0, 50.0, 0.0), joint))?;
    let straight = net.add_track_with_curve(Line::between(joint, Vec3::new(100.0, 50.0, 0.0)))?;
    let diverge = net.add_track_with_curve(Arc::new(
        Vec3::new(0.0, 350.0, 0.0),
        Length(300.0),
        Angle::degrees(-90.0),
        Angle::degrees(20.0),
    ))?;

    let switch = net.add_connector(ConnectorKind::Switch)?;
    net.attach(switch, connector::NARROW, TrackEnd::end(approach), false)?;
    net.attach(switch, connector::STRAIGHT, TrackEnd::front(straight), false)?;
    net.attach(switch, connector::DIVERGE, TrackEnd::front(diverge), false)?;
    Ok(Yard { switch, approach, straight, diverge })
}
