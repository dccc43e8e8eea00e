use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::server_config::ServerConfig;
use crate::config::structs::tls_config::TlsConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            server: ServerConfig {
                bind_address: String::from("0.0.0.0:8443"),
                threads: Some(available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1)),
                keep_alive: Some(60),
                request_timeout: Some(15),
                disconnect_timeout: Some(15),
            },
            tls: TlsConfig {
                enabled: true,
                cert_file: String::from("certs/server.pem"),
                key_file: String::from("certs/server.key"),
                ca_file: String::from("certs/ca.pem"),
                allowed_cns: vec![String::from("dashboard-client")],
                debounce_ms: Some(500),
            },
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        return Err(CustomError::new(&format!("could not serialize default configuration: {}", e)));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and restart, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[ERROR] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::Validation(format!("unknown log level '{}'", self.log_level)));
        }
        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::Validation(format!("invalid bind address '{}'", self.server.bind_address)));
        }
        if self.tls.enabled {
            let check_map = [
                ("tls.cert_file", &self.tls.cert_file),
                ("tls.key_file", &self.tls.key_file),
                ("tls.ca_file", &self.tls.ca_file),
            ];
            for (name, value) in check_map {
                if value.trim().is_empty() {
                    return Err(ConfigurationError::Validation(format!("{} is required when tls.enabled is true", name)));
                }
            }
            if self.tls.debounce_ms == Some(0) {
                return Err(ConfigurationError::Validation(String::from("tls.debounce_ms must be greater than zero")));
            }
        }
        Ok(())
    }
}
