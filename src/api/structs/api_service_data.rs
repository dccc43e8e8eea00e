//! Shared data context for API request handlers.

use crate::config::structs::configuration::Configuration;
use crate::ssl::structs::certificate_manager::CertificateManager;
use std::sync::Arc;

/// Shared application data available to all API request handlers.
///
/// `certificate_manager` is `None` when the server runs without mutual TLS.
#[derive(Debug)]
pub struct ApiServiceData {
    pub certificate_manager: Option<Arc<CertificateManager>>,
    pub config: Arc<Configuration>,
}
