//! Unit tests for rn-network.
//!
//! All tests use hand-built networks; nothing here needs geometry except the
//! curve tests.

#[cfg(test)]
mod helpers {
    use rn_core::{ConnectorId, Length, TrackEnd, TrackId};

    use crate::{connector, ConnectorKind, TrackNetwork};

    /// `n` tracks of `len` metres, End of track i coupled to Front of i+1,
    /// closing into a loop.
    pub fn ring(n: usize, len: f64) -> (TrackNetwork, Vec<TrackId>) {
        let mut net = TrackNetwork::new();
        let ids: Vec<TrackId> = (0..n).map(|_| net.add_track(Length(len)).unwrap()).collect();
        for i in 0..n {
            let next = ids[(i + 1) % n];
            net.couple(TrackEnd::end(ids[i]), TrackEnd::front(next), false).unwrap();
        }
        (net, ids)
    }

    /// A two-way switch with three 50 m tracks: narrow, straight, diverge.
    /// Each track's Front sits in its slot.
    pub fn switch_yard() -> (TrackNetwork, ConnectorId, [TrackId; 3]) {
        let mut net = TrackNetwork::new();
        let narrow = net.add_track(Length(50.0)).unwrap();
        let straight = net.add_track(Length(50.0)).unwrap();
        let diverge = net.add_track(Length(50.0)).unwrap();
        let sw = net.add_connector(ConnectorKind::Switch).unwrap();
        net.attach(sw, connector::NARROW, TrackEnd::front(narrow), false).unwrap();
        net.attach(sw, connector::STRAIGHT, TrackEnd::front(straight), false).unwrap();
        net.attach(sw, connector::DIVERGE, TrackEnd::front(diverge), false).unwrap();
        (net, sw, [narrow, straight, diverge])
    }
}

// ── Tracks & couplings ────────────────────────────────────────────────────────

#[cfg(test)]
mod coupling {
    use rn_core::{ErrorKind, Length, NetworkConfig, TrackEnd};

    use crate::{NetworkError, TrackNetwork};

    #[test]
    fn couple_is_symmetric() {
        let mut net = TrackNetwork::new();
        let a = net.add_track(Length(10.0)).unwrap();
        let b = net.add_track(Length(20.0)).unwrap();
        net.couple(TrackEnd::end(a), TrackEnd::front(b), false).unwrap();

        assert_eq!(net.transition_end(TrackEnd::end(a)).unwrap(), Some(TrackEnd::front(b)));
        assert_eq!(net.transition_end(TrackEnd::front(b)).unwrap(), Some(TrackEnd::end(a)));
        assert_eq!(net.transition_end(TrackEnd::front(a)).unwrap(), None);
    }

    #[test]
    fn double_coupling_conflicts_without_force() {
        let mut net = TrackNetwork::new();
        let a = net.add_track(Length(10.0)).unwrap();
        let b = net.add_track(Length(10.0)).unwrap();
        let c = net.add_track(Length(10.0)).unwrap();
        net.couple(TrackEnd::end(a), TrackEnd::front(b), false).unwrap();

        let err = net.couple(TrackEnd::end(a), TrackEnd::front(c), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LogicConflict);
        // State untouched by the failed call.
        assert_eq!(net.transition_end(TrackEnd::end(a)).unwrap(), Some(TrackEnd::front(b)));

        net.couple(TrackEnd::end(a), TrackEnd::front(c), true).unwrap();
        assert_eq!(net.transition_end(TrackEnd::end(a)).unwrap(), Some(TrackEnd::front(c)));
        assert_eq!(net.transition_end(TrackEnd::front(b)).unwrap(), None, "old partner released");
    }

    #[test]
    fn recoupling_same_pair_is_noop() {
        let mut net = TrackNetwork::new();
        let a = net.add_track(Length(10.0)).unwrap();
        let b = net.add_track(Length(10.0)).unwrap();
        net.couple(TrackEnd::end(a), TrackEnd::front(b), false).unwrap();
        net.couple(TrackEnd::front(b), TrackEnd::end(a), false).unwrap();
    }

    #[test]
    fn self_coupling_rejected() {
        let mut net = TrackNetwork::new();
        let a = net.add_track(Length(10.0)).unwrap();
        let err = net.couple(TrackEnd::end(a), TrackEnd::end(a), true).unwrap_err();
        assert!(matches!(err, NetworkError::SelfCoupling(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // Front to own End is a legal single-track loop.
        net.couple(TrackEnd::end(a), TrackEnd::front(a), false).unwrap();
    }

    #[test]
    fn decouple_both_sides() {
        let (mut net, ids) = super::helpers::ring(3, 10.0);
        let partner = net.decouple(TrackEnd::end(ids[0])).unwrap();
        assert_eq!(partner, Some(TrackEnd::front(ids[1])));
        assert!(!net.is_coupled(TrackEnd::end(ids[0])).unwrap());
        assert!(!net.is_coupled(TrackEnd::front(ids[1])).unwrap());
        assert_eq!(net.decouple(TrackEnd::end(ids[0])).unwrap(), None);
    }

    #[test]
    fn zero_length_track_rejected() {
        let mut net = TrackNetwork::new();
        let err = net.add_track(Length(0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(net.add_track(Length(f64::NAN)).is_err());

        let mut coarse = TrackNetwork::with_config(NetworkConfig::with_epsilon(Length(0.01)));
        assert!(coarse.add_track(Length(0.005)).is_err());
        assert!(coarse.add_track(Length(0.02)).is_ok());
    }

    #[test]
    fn remove_track_releases_neighbours() {
        let (mut net, ids) = super::helpers::ring(3, 10.0);
        net.remove_track(ids[1]).unwrap();
        assert!(!net.contains_track(ids[1]));
        assert_eq!(net.track_count(), 2);
        assert!(!net.is_coupled(TrackEnd::end(ids[0])).unwrap());
        assert!(!net.is_coupled(TrackEnd::front(ids[2])).unwrap());
        assert!(matches!(net.track(ids[1]), Err(NetworkError::TrackNotFound(_))));
        // IDs are not reused.
        let fresh = net.add_track(Length(5.0)).unwrap();
        assert_ne!(fresh, ids[1]);
    }
}

// ── Connectors ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod connectors {
    use rn_core::{ConnectorId, ErrorKind, Length, TrackEnd};

    use crate::{
        connector, ConnectorKind, NetworkError, Status, SwitchObserver, SwitchStatus,
        ThreeWayStatus, TrackNetwork,
    };

    #[test]
    fn switch_routes_default_go() {
        let (net, sw, [narrow, straight, diverge]) = super::helpers::switch_yard();
        assert_eq!(net.status(sw).unwrap(), Status::Switch(SwitchStatus::Go));
        assert_eq!(
            net.transition_end(TrackEnd::front(narrow)).unwrap(),
            Some(TrackEnd::front(straight))
        );
        assert_eq!(net.transition_end(TrackEnd::front(diverge)).unwrap(), None);
    }

    #[test]
    fn set_reroutes_and_returns_previous() {
        let (mut net, sw, [narrow, straight, diverge]) = super::helpers::switch_yard();
        let prev = net.set_status(sw, SwitchStatus::Branch.into()).unwrap();
        assert_eq!(prev, SwitchStatus::Go.into());
        assert_eq!(
            net.transition_end(TrackEnd::front(narrow)).unwrap(),
            Some(TrackEnd::front(diverge))
        );
        assert_eq!(net.transition_end(TrackEnd::front(straight)).unwrap(), None);

        net.set_status(sw, SwitchStatus::Go.into()).unwrap();
        assert_eq!(
            net.transition_end(TrackEnd::front(narrow)).unwrap(),
            Some(TrackEnd::front(straight))
        );
    }

    #[test]
    fn wrong_variant_status_rejected() {
        let (mut net, sw, _) = super::helpers::switch_yard();
        let err = net.set_status(sw, ThreeWayStatus::BranchLeft.into()).unwrap_err();
        assert!(matches!(err, NetworkError::StatusMismatch { .. }));
        assert_eq!(net.status(sw).unwrap(), SwitchStatus::Go.into());
    }

    #[test]
    fn slot_bounds_checked() {
        let (net, sw, [narrow, ..]) = super::helpers::switch_yard();
        assert_eq!(net.slot(sw, connector::NARROW).unwrap(), Some(TrackEnd::front(narrow)));
        let err = net.slot(sw, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn attach_conflicts() {
        let (mut net, sw, [narrow, ..]) = super::helpers::switch_yard();
        let extra = net.add_track(Length(10.0)).unwrap();

        let err = net.attach(sw, connector::STRAIGHT, TrackEnd::front(extra), false).unwrap_err();
        assert!(matches!(err, NetworkError::SlotOccupied { .. }));
        assert_eq!(err.kind(), ErrorKind::LogicConflict);

        let other = net.add_connector(ConnectorKind::Switch).unwrap();
        let err = net.attach(other, connector::NARROW, TrackEnd::front(narrow), false).unwrap_err();
        assert!(matches!(err, NetworkError::EndInConnector { .. }));

        // Forced: the straight track is pushed out and the new end routed.
        net.attach(sw, connector::STRAIGHT, TrackEnd::front(extra), true).unwrap();
        assert_eq!(
            net.transition_end(TrackEnd::front(narrow)).unwrap(),
            Some(TrackEnd::front(extra))
        );
    }

    #[test]
    fn couple_refuses_end_in_connector() {
        let (mut net, sw, [narrow, straight, _]) = super::helpers::switch_yard();
        net.set_status(sw, SwitchStatus::Branch.into()).unwrap();
        let spur = net.add_track(Length(20.0)).unwrap();

        // The straight slot is unrouted, so its end is uncoupled but still taken.
        let err = net.couple(TrackEnd::front(straight), TrackEnd::end(spur), false).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::EndInConnector { connector: c, slot: s, .. }
                if c == sw && s == connector::STRAIGHT
        ));
        assert_eq!(err.kind(), ErrorKind::LogicConflict);
        net.set_status(sw, SwitchStatus::Go.into()).unwrap();
        assert_eq!(net.transition_end(TrackEnd::end(spur)).unwrap(), None);

        // Forced: the end leaves the switch and keeps its new partner.
        net.couple(TrackEnd::front(straight), TrackEnd::end(spur), true).unwrap();
        assert_eq!(net.slot(sw, connector::STRAIGHT).unwrap(), None);
        assert_eq!(net.transition_end(TrackEnd::front(narrow)).unwrap(), None);
        net.toggle(sw).unwrap();
        net.toggle(sw).unwrap();
        assert_eq!(
            net.transition_end(TrackEnd::end(spur)).unwrap(),
            Some(TrackEnd::front(straight))
        );
    }

    #[test]
    fn detach_unroutes() {
        let (mut net, sw, [narrow, straight, _]) = super::helpers::switch_yard();
        let end = net.detach(sw, connector::STRAIGHT).unwrap();
        assert_eq!(end, Some(TrackEnd::front(straight)));
        assert!(!net.is_coupled(TrackEnd::front(narrow)).unwrap());
        assert_eq!(net.track(straight).unwrap().end_state(rn_core::EndType::Front).slot, None);
    }

    #[test]
    fn toggle_cycles_in_fixed_order() {
        let mut net = TrackNetwork::new();
        let c = net.add_connector(ConnectorKind::ThreeWaySwitch).unwrap();
        let mut seen = vec![net.status(c).unwrap()];
        for _ in 0..3 {
            net.toggle(c).unwrap();
            seen.push(net.status(c).unwrap());
        }
        assert_eq!(
            seen,
            vec![
                ThreeWayStatus::Go.into(),
                ThreeWayStatus::BranchLeft.into(),
                ThreeWayStatus::BranchRight.into(),
                ThreeWayStatus::Go.into(),
            ]
        );
    }

    #[test]
    fn double_slip_routes_each_pair() {
        let mut net = TrackNetwork::new();
        let t: Vec<_> = (0..4).map(|_| net.add_track(Length(20.0)).unwrap()).collect();
        let c = net.add_connector(ConnectorKind::DoubleSlipSwitch).unwrap();
        for (slot, id) in t.iter().enumerate() {
            net.attach(c, slot, TrackEnd::end(*id), false).unwrap();
        }
        for status in ConnectorKind::DoubleSlipSwitch.statuses() {
            net.set_status(c, status).unwrap();
            let (a, b) = status.route();
            assert_eq!(net.transition_end(TrackEnd::end(t[a])).unwrap(), Some(TrackEnd::end(t[b])));
            let coupled =
                t.iter().filter(|id| net.is_coupled(TrackEnd::end(**id)).unwrap()).count();
            assert_eq!(coupled, 2, "only the routed pair is coupled for {status:?}");
        }
    }

    #[test]
    fn narrow_switch_needs_two_branches() {
        let mut net = TrackNetwork::new();
        assert!(matches!(
            net.add_connector(ConnectorKind::NarrowSwitch { wide: 1 }),
            Err(NetworkError::TooFewSlots(1))
        ));
        let c = net.add_connector(ConnectorKind::NarrowSwitch { wide: 5 }).unwrap();
        assert_eq!(net.connector(c).unwrap().slot_count(), 6);
        assert!(net.set_status(c, Status::Narrow(5)).is_ok());
        assert!(net.set_status(c, Status::Narrow(6)).is_err());
        assert!(net.set_status(c, Status::Narrow(0)).is_err());
    }

    #[test]
    fn observer_notified_after_routing() {
        struct Recorder(Vec<(ConnectorId, Status, Status)>);
        impl SwitchObserver for Recorder {
            fn on_status_changed(&mut self, c: ConnectorId, prev: Status, now: Status) {
                self.0.push((c, prev, now));
            }
        }

        let (mut net, sw, _) = super::helpers::switch_yard();
        let mut rec = Recorder(Vec::new());
        net.set_status_observed(sw, SwitchStatus::Branch.into(), &mut rec).unwrap();
        assert_eq!(rec.0, vec![(sw, SwitchStatus::Go.into(), SwitchStatus::Branch.into())]);
    }

    #[test]
    fn remove_connector_decouples() {
        let (mut net, sw, [narrow, ..]) = super::helpers::switch_yard();
        net.remove_connector(sw).unwrap();
        assert!(!net.is_coupled(TrackEnd::front(narrow)).unwrap());
        assert!(net.connector(sw).is_err());
        assert!(net.track(narrow).unwrap().end_state(rn_core::EndType::Front).is_open());
    }
}

// ── Placements ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod placements {
    use rn_core::{ErrorKind, Interval, Length, TrackLocation};

    use crate::TrackNetwork;

    #[test]
    fn sensor_interval_validated() {
        let mut net = TrackNetwork::new();
        let t = net.add_track(Length(100.0)).unwrap();
        let s = net.attach_sensor(t, Interval::meters(60.0, 40.0)).unwrap();
        assert_eq!(net.track(t).unwrap().sensors()[0].interval, Interval::meters(40.0, 60.0));

        let err = net.attach_sensor(t, Interval::meters(90.0, 110.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        net.detach_sensor(s).unwrap();
        assert!(net.track(t).unwrap().sensors().is_empty());
        assert_eq!(net.detach_sensor(s).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn signal_lookup() {
        let mut net = TrackNetwork::new();
        let t = net.add_track(Length(100.0)).unwrap();
        let sig = net.attach_signal(t, TrackLocation::para(Length(80.0))).unwrap();
        assert_eq!(net.signal_track(sig).unwrap(), t);
        assert!(net.attach_signal(t, TrackLocation::para(Length(120.0))).is_err());

        net.remove_track(t).unwrap();
        assert!(net.signal_track(sig).is_err());
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use std::f64::consts::FRAC_PI_2;

    use rn_core::{Angle, ErrorKind, Length, Vec3};

    use crate::{Arc, Curve, Line, NetworkError, TrackNetwork};

    #[test]
    fn line_frames() {
        let l = Line::between(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(l.length(), Length(10.0));
        let f = l.frame(Length(4.0));
        assert!((f.position.x - 4.0).abs() < 1e-12);
        assert_eq!(f.tangent, Vec3::X);
    }

    #[test]
    fn quarter_arc_frames() {
        let arc = Arc::new(Vec3::ZERO, Length(10.0), Angle::ZERO, Angle(FRAC_PI_2));
        assert!((arc.length().0 - 10.0 * FRAC_PI_2).abs() < 1e-12);
        let start = arc.frame(Length::ZERO);
        assert!(start.position.distance(Vec3::new(10.0, 0.0, 0.0)) < 1e-12);
        assert!(start.tangent.distance(Vec3::Y) < 1e-12);
        let end = arc.frame(arc.length());
        assert!(end.position.distance(Vec3::new(0.0, 10.0, 0.0)) < 1e-9);
        assert!(end.tangent.distance(-Vec3::X) < 1e-9);
    }

    #[test]
    fn curve_fixes_length_once() {
        let mut net = TrackNetwork::new();
        let t = net.add_track(Length(1.0)).unwrap();
        net.attach_curve(t, Line::new(Vec3::ZERO, Vec3::X, Length(25.0))).unwrap();
        assert_eq!(net.length(t).unwrap(), Length(25.0));

        let err = net.attach_curve(t, Line::new(Vec3::ZERO, Vec3::X, Length(5.0))).unwrap_err();
        assert!(matches!(err, NetworkError::GeometryAttached(_)));
        assert_eq!(net.length(t).unwrap(), Length(25.0));
    }

    #[test]
    fn transition_requires_geometry_and_range() {
        let mut net = TrackNetwork::new();
        let bare = net.add_track(Length(10.0)).unwrap();
        assert_eq!(net.transition(bare, Length(1.0)).unwrap_err().kind(), ErrorKind::NotFound);

        let t = net.add_track_with_curve(Line::new(Vec3::ZERO, Vec3::Y, Length(10.0))).unwrap();
        assert!(net.transition(t, Length(5.0)).is_ok());
        assert_eq!(net.transition(t, Length(11.0)).unwrap_err().kind(), ErrorKind::OutOfRange);
    }
}

// ── Ledger & overlaps ─────────────────────────────────────────────────────────

#[cfg(test)]
mod ledger {
    use rn_core::{Interval, Length, OwnerId};

    use crate::Ledger;

    const EPS: Length = Length::EPSILON;

    #[test]
    fn commit_merges_touching() {
        let mut l = Ledger::default();
        l.commit(OwnerId(1), Interval::meters(10.0, 20.0), EPS);
        l.commit(OwnerId(1), Interval::meters(40.0, 50.0), EPS);
        assert_eq!(l.intervals(OwnerId(1)).len(), 2);
        l.commit(OwnerId(1), Interval::meters(20.0, 40.0), EPS);
        assert_eq!(l.intervals(OwnerId(1)), &[Interval::meters(10.0, 50.0)]);
    }

    #[test]
    fn owners_kept_apart() {
        let mut l = Ledger::default();
        l.commit(OwnerId(1), Interval::meters(0.0, 10.0), EPS);
        l.commit(OwnerId(2), Interval::meters(5.0, 15.0), EPS);
        assert!(l.is_reserved(Some(OwnerId(1)), Interval::meters(9.0, 9.5)));
        assert!(!l.is_reserved(Some(OwnerId(1)), Interval::meters(12.0, 13.0)));
        assert!(l.is_reserved(None, Interval::meters(12.0, 13.0)));
        assert_eq!(l.owners().collect::<Vec<_>>(), vec![OwnerId(1), OwnerId(2)]);
    }

    #[test]
    fn removal() {
        let mut l = Ledger::default();
        l.commit(OwnerId(1), Interval::meters(0.0, 10.0), EPS);
        l.commit(OwnerId(1), Interval::meters(30.0, 40.0), EPS);
        let gone = l.remove_touching(OwnerId(1), Length(40.0), EPS);
        assert_eq!(gone, vec![Interval::meters(30.0, 40.0)]);
        let gone = l.remove_intersecting(OwnerId(1), Interval::meters(5.0, 6.0));
        assert_eq!(gone.len(), 1);
        assert!(l.is_empty());
    }
}

#[cfg(test)]
mod overlaps {
    use rn_core::{Interval, OwnerId};

    use crate::Overlap;

    const A: OwnerId = OwnerId(1);
    const B: OwnerId = OwnerId(2);

    #[test]
    fn partial_overlap_flags() {
        let (mut net, ids) = super::helpers::ring(4, 100.0);
        let eps = net.epsilon();
        // A: [10, 50], B: [40, 80] on the same track.
        net.ledger_mut(ids[0]).unwrap().commit(A, Interval::meters(10.0, 50.0), eps);
        net.ledger_mut(ids[0]).unwrap().commit(B, Interval::meters(40.0, 80.0), eps);

        let ov = net.overlaps(A);
        assert_eq!(
            ov,
            vec![Overlap {
                for_id: A,
                with_id: B,
                for_near: false,
                for_far: true,
                with_near: true,
                with_far: false,
            }]
        );
    }

    #[test]
    fn overlaps_are_symmetric() {
        let (mut net, ids) = super::helpers::ring(4, 100.0);
        let eps = net.epsilon();
        net.ledger_mut(ids[1]).unwrap().commit(A, Interval::meters(20.0, 30.0), eps);
        net.ledger_mut(ids[1]).unwrap().commit(B, Interval::meters(0.0, 60.0), eps);

        let a = net.overlaps(A);
        let b = net.overlaps(B);
        assert_eq!(a.len(), 1);
        assert_eq!(b, vec![a[0].mirrored()]);
        assert!(a[0].for_near && a[0].for_far && !a[0].with_near && !a[0].with_far);
    }

    #[test]
    fn seams_are_not_ends() {
        let (mut net, ids) = super::helpers::ring(4, 100.0);
        let eps = net.epsilon();
        // A spans the seam between track 0 (End) and track 1 (Front).
        net.ledger_mut(ids[0]).unwrap().commit(A, Interval::meters(90.0, 100.0), eps);
        net.ledger_mut(ids[1]).unwrap().commit(A, Interval::meters(0.0, 10.0), eps);
        // B covers the seam region on track 1 only.
        net.ledger_mut(ids[1]).unwrap().commit(B, Interval::meters(0.0, 5.0), eps);

        let ov = net.overlaps(A);
        assert_eq!(ov.len(), 1);
        assert!(!ov[0].for_near, "A's piece start at the seam is not a real end");
        assert!(ov[0].with_far);

        let tracks = net.reservation_tracks(ids[1], A).unwrap();
        assert_eq!(tracks, vec![ids[0], ids[1]]);
        assert_eq!(net.overlaps_from(ids[0], A).unwrap(), ov);
    }

    #[test]
    fn clear_everywhere() {
        let (mut net, ids) = super::helpers::ring(3, 50.0);
        let eps = net.epsilon();
        for id in &ids {
            net.ledger_mut(*id).unwrap().commit(A, Interval::meters(0.0, 50.0), eps);
        }
        assert_eq!(net.clear_reservations(A), 3);
        assert!(ids.iter().all(|id| net.ledger(*id).unwrap().is_empty()));
    }
}

// ── Randomised topology ───────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rn_core::TrackEnd;

    use crate::ConnectorKind;

    #[test]
    fn couplings_stay_symmetric_under_switching() {
        let mut rng = SmallRng::seed_from_u64(7);
        let (mut net, sw, tracks) = super::helpers::switch_yard();
        let three = net.add_connector(ConnectorKind::ThreeWaySwitch).unwrap();
        for (slot, t) in tracks.iter().enumerate() {
            net.attach(three, slot, TrackEnd::end(*t), false).unwrap();
        }
        for _ in 0..200 {
            if rng.gen_bool(0.5) {
                net.toggle(sw).unwrap();
            } else {
                net.toggle(three).unwrap();
            }
            for t in &tracks {
                for end in [TrackEnd::front(*t), TrackEnd::end(*t)] {
                    if let Some(other) = net.transition_end(end).unwrap() {
                        assert_eq!(net.transition_end(other).unwrap(), Some(end));
                    }
                }
            }
        }
    }
}
