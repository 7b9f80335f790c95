//! Tests for the config module

#[cfg(test)]
mod tests {
    use crate::config::TourConfig;
    use crate::constants::{crypto, sequence};
    use crate::error::Error;
    use std::fs;

    #[test]
    fn defaults_match_constants() {
        let config = TourConfig::default();
        assert!(config.skip.is_empty());
        assert_eq!(config.sequence.prefix, sequence::DEFAULT_PREFIX);
        assert_eq!(config.sequence.start, sequence::DEFAULT_START);
        assert_eq!(config.sequence.end, sequence::DEFAULT_END);
        assert_eq!(config.sequence.max_len, sequence::MAX_SEQUENCE_LEN);
        assert_eq!(config.crypto.iterations, crypto::DEFAULT_ITERATIONS);
        assert_eq!(config.random.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_partial_yaml() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("showcase.yaml"),
            "skip: [random]\nsequence:\n  start: -2\n  end: 2\nrandom:\n  seed: 7\n",
        )
        .unwrap();

        let config = TourConfig::load(None, tmp.path()).unwrap();
        assert_eq!(config.skip, vec!["random".to_string()]);
        assert_eq!(config.sequence.start, -2);
        assert_eq!(config.sequence.end, 2);
        assert_eq!(config.sequence.prefix, sequence::DEFAULT_PREFIX);
        assert_eq!(config.random.seed, Some(7));
    }

    #[test]
    fn json_takes_precedence_over_yaml() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("showcase.json"), r#"{"crypto": {"iterations": 10}}"#)
            .unwrap();
        fs::write(tmp.path().join("showcase.yaml"), "crypto:\n  iterations: 20\n").unwrap();

        let config = TourConfig::load(None, tmp.path()).unwrap();
        assert_eq!(config.crypto.iterations, 10);
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(TourConfig::load(None, tmp.path()).unwrap(), TourConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("custom.yml");
        assert!(matches!(
            TourConfig::load(Some(path.as_path()), tmp.path()),
            Err(Error::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn explicit_file_with_unknown_extension_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("showcase.toml");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            TourConfig::load(Some(path.as_path()), tmp.path()),
            Err(Error::ConfigFormatError { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("showcase.json");
        fs::write(&path, r#"{"sequence": {"begin": 1}}"#).unwrap();
        assert!(matches!(
            TourConfig::load(Some(path.as_path()), tmp.path()),
            Err(Error::JsonError(_))
        ));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = TourConfig::default();
        config.crypto.iterations = 0;
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));

        let mut config = TourConfig::default();
        config.crypto.key_len = crypto::MAX_KEY_LEN + 1;
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));

        let mut config = TourConfig::default();
        config.sequence.max_len = 0;
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }
}
