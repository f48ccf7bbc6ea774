//! Unit tests for inv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AlienId, CityId};

    #[test]
    fn index_roundtrip() {
        let id = CityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CityId::from_index(42), id);
    }

    #[test]
    fn from_index_past_u32_is_invalid() {
        assert_eq!(AlienId::from_index(u32::MAX as usize + 1), AlienId::INVALID);
        assert!(!AlienId::INVALID.is_valid());
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(CityId::default(), CityId::INVALID);
        assert_eq!(AlienId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AlienId(7).to_string(), "alien#7");
        assert_eq!(CityId::INVALID.to_string(), "city#invalid");
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("SOUTH".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!("EaSt".parse::<Direction>().unwrap(), Direction::East);
    }

    #[test]
    fn unknown_direction_rejected() {
        assert!("up".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn slots_follow_all_order() {
        for (i, d) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(Direction::West.to_string(), "west");
    }
}

#[cfg(test)]
mod step {
    use crate::{DEFAULT_MAX_STEPS, InvasionConfig, Step};

    #[test]
    fn step_arithmetic() {
        let s = Step(10);
        assert_eq!(s + 5, Step(15));
        assert_eq!(s.offset(3), Step(13));
        assert_eq!(Step(15) - Step(10), 5u64);
    }

    #[test]
    fn advance() {
        let mut s = Step::PLACEMENT;
        s.advance();
        assert_eq!(s, Step(2));
        assert_eq!(s.to_string(), "S2");
    }

    #[test]
    fn default_config() {
        let cfg = InvasionConfig::default();
        assert_eq!(cfg.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(InvasionConfig::new(9).seed, 9);
    }

    #[test]
    fn exhaustion_threshold_is_inclusive() {
        let cfg = InvasionConfig { max_steps: 3, seed: 0 };
        assert!(!cfg.is_exhausted(2));
        assert!(cfg.is_exhausted(3));
        assert!(cfg.is_exhausted(4));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: Vec<u64> = (0..8).map(|_| r1.random()).collect();
        let b: Vec<u64> = (0..8).map(|_| r2.random()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
