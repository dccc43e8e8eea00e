#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;
    use std::time::Duration;

    #[test]
    fn test_default_configuration_is_valid() {
        let config = Configuration::init();
        assert!(config.validate().is_ok());
        assert!(config.tls.enabled);
        assert_eq!(config.tls.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_default_configuration_survives_toml() {
        let config = Configuration::init();
        let serialized = toml::to_string(&config).unwrap();
        let parsed = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(parsed.server.bind_address, config.server.bind_address);
        assert_eq!(parsed.tls.cert_file, config.tls.cert_file);
        assert_eq!(parsed.tls.allowed_cns, config.tls.allowed_cns);
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let data = br#"
log_level = "debug"

[server]
bind_address = "127.0.0.1:9443"

[tls]
enabled = false
"#;
        let config = Configuration::load(data).unwrap();
        assert!(!config.tls.enabled);
        assert!(config.tls.allowed_cns.is_empty());
        assert_eq!(config.tls.debounce(), Duration::from_millis(500));
        assert!(!config.sentry_config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debounce_override() {
        let mut config = Configuration::init();
        config.tls.debounce_ms = Some(1200);
        assert_eq!(config.tls.debounce(), Duration::from_millis(1200));
    }

    #[test]
    fn test_certificate_paths_follow_tls_section() {
        let config = Configuration::init();
        let paths = config.tls.certificate_paths();
        assert_eq!(paths.cert_path, std::path::PathBuf::from("certs/server.pem"));
        assert_eq!(paths.key_path, std::path::PathBuf::from("certs/server.key"));
        assert_eq!(paths.ca_path, std::path::PathBuf::from("certs/ca.pem"));
    }

    #[test]
    fn test_validate_rejects_empty_tls_path() {
        let mut config = Configuration::init();
        config.tls.ca_file = String::new();
        match config.validate() {
            Err(ConfigurationError::Validation(message)) => assert!(message.contains("tls.ca_file")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_ignores_paths_when_tls_disabled() {
        let mut config = Configuration::init();
        config.tls.enabled = false;
        config.tls.cert_file = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("verbose");
        assert!(matches!(config.validate(), Err(ConfigurationError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_bad_bind_address() {
        let mut config = Configuration::init();
        config.server.bind_address = String::from("localhost");
        assert!(matches!(config.validate(), Err(ConfigurationError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_zero_debounce() {
        let mut config = Configuration::init();
        config.tls.debounce_ms = Some(0);
        assert!(matches!(config.validate(), Err(ConfigurationError::Validation(_))));
    }

    #[test]
    fn test_load_file_missing() {
        let result = Configuration::load_file("/nonexistent/certwatch/config.toml");
        assert!(matches!(result, Err(ConfigurationError::IOError(_))));
    }

    #[test]
    fn test_load_file_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();
        let result = Configuration::load_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
    }

    #[test]
    fn test_load_from_file_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        assert!(Configuration::load_from_file(path, false).is_err());
        assert!(!std::path::Path::new(path).exists());

        assert!(Configuration::load_from_file(path, true).is_err());
        assert!(std::path::Path::new(path).exists());

        let config = Configuration::load_from_file(path, false).unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:8443");
    }
}
