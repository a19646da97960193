//! Unit tests for rp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, TrainId};

    #[test]
    fn index_roundtrip() {
        let id = StationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(TrainId(0) < TrainId(1));
        assert!(StationId(100) > StationId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StationId::INVALID.0, u32::MAX);
        assert_eq!(TrainId::default(), TrainId::INVALID);
    }

    #[test]
    fn train_display_is_one_based() {
        assert_eq!(TrainId(0).to_string(), "T1");
        assert_eq!(TrainId(9).to_string(), "T10");
        assert_eq!(TrainId(4).number(), 5);
    }

    #[test]
    fn station_range() {
        let ids: Vec<_> = StationId::range(3).collect();
        assert_eq!(ids, vec![StationId(0), StationId(1), StationId(2)]);
    }
}

#[cfg(test)]
mod grid {
    use crate::GridPoint;

    #[test]
    fn manhattan_is_symmetric() {
        let a = GridPoint::new(1, 7);
        let b = GridPoint::new(4, 3);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn display() {
        assert_eq!(GridPoint::new(2, 5).to_string(), "(2, 5)");
    }
}

#[cfg(test)]
mod turn {
    use crate::Turn;

    #[test]
    fn turn_arithmetic() {
        let t = Turn(10);
        assert_eq!(t + 5, Turn(15));
        assert_eq!(t.next(), Turn(11));
        assert_eq!(Turn::ZERO.next(), Turn(1));
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, PlannerConfig};

    #[test]
    fn default_is_valid() {
        let c = PlannerConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.max_routes, PlannerConfig::DEFAULT_MAX_ROUTES);
        assert_eq!(c.max_route_len, None);
        assert_eq!(c.max_enumeration_steps, PlannerConfig::DEFAULT_MAX_ENUMERATION_STEPS);
    }

    #[test]
    fn zero_ceilings_rejected() {
        let c = PlannerConfig { max_routes: 0, ..Default::default() };
        assert_eq!(c.validate(), Err(ConfigError::Zero("max_routes")));

        let c = PlannerConfig { max_route_len: Some(0), ..Default::default() };
        assert_eq!(c.validate(), Err(ConfigError::Zero("max_route_len")));

        let c = PlannerConfig { max_enumeration_steps: 0, ..Default::default() };
        assert_eq!(c.validate(), Err(ConfigError::Zero("max_enumeration_steps")));

        let c = PlannerConfig { max_turns: Some(0), ..Default::default() };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod errors {
    use crate::{ArgumentError, GridPoint, ValidationError};

    #[test]
    fn messages_name_the_offender() {
        let e = ValidationError::UnknownStation("zeta".into());
        assert!(e.to_string().contains("zeta"));

        let e = ValidationError::DuplicateCoordinates {
            pos:    GridPoint::new(1, 1),
            first:  "a".into(),
            second: "b".into(),
        };
        assert_eq!(e.to_string(), "two stations exist at the same coordinates (1, 1): a and b");

        let e = ArgumentError::InvalidTrainCount("-3".into());
        assert_eq!(e.to_string(), "invalid number of trains: -3");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_roundtrip {
    use crate::{GridPoint, StationId, Turn};

    #[test]
    fn core_types_roundtrip_json() {
        let json = serde_json::to_string(&(StationId(3), GridPoint::new(1, 2), Turn(7))).unwrap();
        let back: (StationId, GridPoint, Turn) = serde_json::from_str(&json).unwrap();
        assert_eq!(back, (StationId(3), GridPoint::new(1, 2), Turn(7)));
    }
}
