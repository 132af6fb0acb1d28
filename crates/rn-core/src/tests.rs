//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{OwnerId, SignalId, TrackId};

    #[test]
    fn index_roundtrip() {
        let id = TrackId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TrackId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(TrackId::INVALID.0, u32::MAX);
        assert_eq!(OwnerId::INVALID.0, u32::MAX);
        assert!(!SignalId::default().is_valid());
        assert!(OwnerId(3).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(TrackId(7).to_string(), "TrackId(7)");
    }
}

#[cfg(test)]
mod units {
    use crate::{FormatConfig, Interval, Length, LengthUnit};

    #[test]
    fn length_arithmetic() {
        let a = Length::meters(10.0);
        let b = Length::meters(2.5);
        assert_eq!(a + b, Length(12.5));
        assert_eq!(a - b, Length(7.5));
        assert_eq!(-a, Length(-10.0));
        assert_eq!(a * 2.0, Length(20.0));
        assert_eq!(a / b, 4.0);
        let total: Length = [a, b, b].into_iter().sum();
        assert_eq!(total, Length(15.0));
    }

    #[test]
    fn approx_eq_uses_tolerance() {
        let eps = Length::EPSILON;
        assert!(Length(1.0).approx_eq(Length(1.0 + 1e-9), eps));
        assert!(!Length(1.0).approx_eq(Length(1.001), eps));
    }

    #[test]
    fn default_display_is_meters() {
        assert_eq!(Length(1.5).to_string(), "1.500m");
    }

    #[test]
    fn explicit_format_config() {
        let cfg = FormatConfig { unit: LengthUnit::Kilometer, precision: 1 };
        assert_eq!(Length(2_500.0).display_with(cfg).to_string(), "2.5km");
        let cfg = FormatConfig { unit: LengthUnit::Centimeter, precision: 0 };
        assert_eq!(Length(0.42).display_with(cfg).to_string(), "42cm");
    }

    #[test]
    fn interval_normalize_and_clip() {
        let iv = Interval::meters(10.0, -5.0).normalized();
        assert_eq!(iv, Interval::meters(-5.0, 10.0));
        assert_eq!(iv.clip(Length(0.0), Length(100.0)), Some(Interval::meters(0.0, 10.0)));
        assert_eq!(iv.clip(Length(20.0), Length(30.0)), None);
        assert_eq!(iv.length(), Length(15.0));
    }

    #[test]
    fn interval_intersection_is_closed() {
        let a = Interval::meters(0.0, 10.0);
        assert!(a.intersects(Interval::meters(10.0, 20.0)));
        assert!(!a.intersects(Interval::meters(10.5, 20.0)));
        assert!(a.touches(Interval::meters(10.0 + 1e-9, 20.0), Length::EPSILON));
        assert!(a.contains(Length(0.0)));
        assert!(!a.contains(Length(-0.1)));
    }
}

#[cfg(test)]
mod ends {
    use crate::{EndType, Length, Orientation, TrackEnd, TrackId, TrackLocation};

    #[test]
    fn opposite_ends() {
        assert_eq!(EndType::Front.opposite(), EndType::End);
        let e = TrackEnd::front(TrackId(1));
        assert_eq!(e.opposite(), TrackEnd::end(TrackId(1)));
    }

    #[test]
    fn orientation_algebra() {
        assert_eq!(!Orientation::Para, Orientation::Anti);
        assert_eq!(Orientation::Anti.compose(Orientation::Anti), Orientation::Para);
        assert_eq!(Orientation::Para.compose(Orientation::Anti), Orientation::Anti);
        assert_eq!(Orientation::Para.forward_end(), EndType::End);
        assert_eq!(EndType::Front.exit_orientation(), Orientation::Anti);
    }

    #[test]
    fn parse_roundtrip() {
        assert_eq!("anti".parse::<Orientation>().unwrap(), Orientation::Anti);
        assert_eq!("front".parse::<EndType>().unwrap(), EndType::Front);
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn track_location_approx_eq() {
        let a = TrackLocation::para(Length(5.0));
        assert!(a.approx_eq(&TrackLocation::para(Length(5.0 + 1e-9)), Length::EPSILON));
        assert!(!a.approx_eq(&TrackLocation::anti(Length(5.0)), Length::EPSILON));
    }
}

#[cfg(test)]
mod geo {
    use crate::{Frame, Vec3};

    #[test]
    fn vector_basics() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.norm(), 5.0);
        assert!((v.normalized().norm() - 1.0).abs() < 1e-12);
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn frame_reversal() {
        let f = Frame::new(Vec3::new(1.0, 2.0, 0.0), Vec3::X);
        let r = f.reversed();
        assert_eq!(r.tangent, -Vec3::X);
        assert!(r.reversed().approx_eq(&f, 1e-12));
        assert!(!r.approx_eq(&f, 1e-6));
    }
}

#[cfg(test)]
mod config {
    use crate::{Length, NetworkConfig};

    #[test]
    fn default_epsilon() {
        assert_eq!(NetworkConfig::default().epsilon_length, Length::EPSILON);
        assert_eq!(NetworkConfig::with_epsilon(Length(1e-3)).epsilon_length, Length(1e-3));
    }
}
