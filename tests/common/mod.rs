#![allow(dead_code)]
use certwatch::ssl::ssl::crypto_provider;
use certwatch::ssl::structs::certificate_generator::{CertificateGenerator, GeneratedCertificate};
use certwatch::ssl::structs::certificate_paths::CertificatePaths;
use rustls::pki_types::{CertificateDer, ServerName};
use rustls::{ClientConfig, ClientConnection, RootCertStore, ServerConfig, ServerConnection};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const CLIENT_CN: &str = "dashboard-client";

/// A CA, a server certificate it issued and the files they were written to.
pub struct TestMaterial {
    pub dir: TempDir,
    pub paths: CertificatePaths,
    pub generator: CertificateGenerator,
    pub server: GeneratedCertificate,
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn create_authority(common_name: &str) -> CertificateGenerator {
    CertificateGenerator::new(common_name).expect("Failed to create CA")
}

pub fn create_server_certificate(generator: &CertificateGenerator) -> GeneratedCertificate {
    generator
        .server_certificate(vec!["localhost".to_string()])
        .expect("Failed to create server certificate")
}

pub fn create_material() -> TestMaterial {
    let dir = create_temp_dir();
    let generator = create_authority("Integration Test CA");
    let server = create_server_certificate(&generator);
    let paths = CertificatePaths::new(
        dir.path().join("server.pem"),
        dir.path().join("server.key"),
        dir.path().join("ca.pem"),
    );
    std::fs::write(&paths.cert_path, &server.cert_pem).unwrap();
    std::fs::write(&paths.key_path, &server.key_pem).unwrap();
    std::fs::write(&paths.ca_path, &generator.authority().cert_pem).unwrap();
    TestMaterial {
        dir,
        paths,
        generator,
        server,
    }
}

/// Replaces `path` the way rotation tooling does: write a sibling file, then
/// rename it over the target.
pub fn write_atomic(path: &Path, contents: &str) {
    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    let staging = path.with_file_name(format!(".{}.staging", file_name));
    std::fs::write(&staging, contents).unwrap();
    std::fs::rename(&staging, path).unwrap();
}

pub fn pem_to_der(pem: &str) -> Vec<CertificateDer<'static>> {
    rustls_pemfile::certs(&mut pem.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

pub fn client_config(trusted_ca_pem: &str, client: &GeneratedCertificate) -> Arc<ClientConfig> {
    let mut roots = RootCertStore::empty();
    for cert in pem_to_der(trusted_ca_pem) {
        roots.add(cert).unwrap();
    }
    let key = rustls_pemfile::private_key(&mut client.key_pem.as_bytes())
        .unwrap()
        .unwrap();
    let config = ClientConfig::builder_with_provider(crypto_provider())
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_root_certificates(roots)
        .with_client_auth_cert(pem_to_der(&client.cert_pem), key)
        .unwrap();
    Arc::new(config)
}

/// Runs a full in-memory handshake and returns the certificate chain the
/// client was shown.
pub fn handshake(
    server_config: Arc<ServerConfig>,
    client_config: Arc<ClientConfig>,
) -> Result<Vec<CertificateDer<'static>>, rustls::Error> {
    let server_name = ServerName::try_from("localhost").unwrap();
    let mut client = ClientConnection::new(client_config, server_name)?;
    let mut server = ServerConnection::new(server_config)?;

    for _ in 0..16 {
        let mut buffer = Vec::new();
        while client.wants_write() {
            client.write_tls(&mut buffer).unwrap();
        }
        let mut incoming = buffer.as_slice();
        while !incoming.is_empty() {
            server.read_tls(&mut incoming).unwrap();
        }
        server.process_new_packets()?;

        let mut buffer = Vec::new();
        while server.wants_write() {
            server.write_tls(&mut buffer).unwrap();
        }
        let mut incoming = buffer.as_slice();
        while !incoming.is_empty() {
            client.read_tls(&mut incoming).unwrap();
        }
        client.process_new_packets()?;

        if !client.is_handshaking() && !server.is_handshaking() {
            let presented = client
                .peer_certificates()
                .map(|certs| certs.iter().map(|cert| cert.clone().into_owned()).collect())
                .unwrap_or_default();
            return Ok(presented);
        }
    }
    Err(rustls::Error::General("handshake did not complete".to_string()))
}

/// Polls `condition` until it holds or `timeout` passes.
pub async fn wait_until<F: Fn() -> bool>(condition: F, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    condition()
}
