use serde::{Deserialize, Serialize};
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::server_config::ServerConfig;
use crate::config::structs::tls_config::TlsConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub server: ServerConfig,
    pub tls: TlsConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig,
}
