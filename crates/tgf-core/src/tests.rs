//! Unit tests for tgf-core primitives.

#[cfg(test)]
mod beaming {
    use crate::BeamingType;

    #[test]
    fn gaussian_aliases_resolve_identically() {
        for s in ["gaussian", "Gaussian", "normal", "Normal"] {
            assert_eq!(BeamingType::from_config(s), Some(BeamingType::Gaussian), "{s}");
        }
    }

    #[test]
    fn uniform_is_distinct() {
        assert_eq!(BeamingType::from_config("Uniform"), Some(BeamingType::Uniform));
        assert_eq!(BeamingType::from_config("uniform"), Some(BeamingType::Uniform));
        assert_ne!(
            BeamingType::from_config("uniform"),
            BeamingType::from_config("gaussian")
        );
    }

    #[test]
    fn unrecognized_resolves_to_none() {
        assert_eq!(BeamingType::from_config("isotropic"), None);
        assert_eq!(BeamingType::from_config(""), None);
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("normal".parse::<BeamingType>().unwrap(), BeamingType::Gaussian);
        assert!("isotropic".parse::<BeamingType>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(BeamingType::Uniform.to_string(), "Uniform");
        assert_eq!(BeamingType::Gaussian.to_string(), "Gaussian");
    }
}

#[cfg(test)]
mod ids {
    use crate::RunId;

    #[test]
    fn generated_ids_are_positive() {
        assert!(RunId::generate().0 > 0);
    }

    #[test]
    fn consecutive_generations_differ() {
        // The salt alone makes same-microsecond collisions a 1-in-2^20 event.
        let a = RunId::generate();
        let b = RunId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_bare_integer() {
        assert_eq!(RunId(42).to_string(), "42");
    }
}

#[cfg(test)]
mod settings {
    use crate::{BeamingType, SourceSettings};

    #[test]
    fn default_scenario_validates() {
        let s = SourceSettings::default();
        s.validate().unwrap();
        assert_eq!(s.beaming_type(), Some(BeamingType::Uniform));
    }

    #[test]
    fn out_of_range_opening_angle_rejected() {
        let s = SourceSettings { opening_angle_deg: 270.0, ..Default::default() };
        assert!(s.validate().is_err());
        let s = SourceSettings { opening_angle_deg: f64::NAN, ..Default::default() };
        assert!(s.validate().is_err());
    }

    #[test]
    fn non_positive_record_altitude_rejected() {
        let s = SourceSettings { record_altitude_m: 0.0, ..Default::default() };
        assert!(s.validate().is_err());
    }

    #[test]
    fn unrecognized_beaming_is_not_a_validation_error() {
        // The mode stays unresolved; the run may still proceed (the raw
        // string only feeds the output file name).
        let s = SourceSettings { beaming: "pancake".to_owned(), ..Default::default() };
        assert_eq!(s.beaming_type(), None);
        s.validate().unwrap();
    }
}
