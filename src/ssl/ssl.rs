use crate::common::structs::custom_error::CustomError;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_generator::CertificateGenerator;
use crate::ssl::structs::certificate_manager::CertificateManager;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::dynamic_client_verifier::DynamicClientVerifier;
use log::{debug, info};
use rustls::RootCertStore;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::server::WebPkiClientVerifier;
use rustls::server::danger::ClientCertVerifier;
use rustls::sign::CertifiedKey;
use std::path::Path;
use std::sync::Arc;

pub fn crypto_provider() -> Arc<CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}

fn read_file(path: &Path) -> Result<Vec<u8>, CertificateError> {
    std::fs::read(path)
        .map_err(|e| CertificateError::ReadError(format!("{}: {}", path.display(), e)))
}

fn parse_certificates(path: &Path, data: &[u8]) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let mut reader = data;
    rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::ParseError(format!("{}: {}", path.display(), e)))
}

pub fn load_certificate_chain(path: &Path) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let data = read_file(path)?;
    let certs = parse_certificates(path, &data)?;
    if certs.is_empty() {
        return Err(CertificateError::ParseError(format!(
            "{}: no certificates found in file",
            path.display()
        )));
    }
    Ok(certs)
}

/// Reads the first private key of the file, PKCS#8, PKCS#1 or SEC1.
pub fn load_private_key(path: &Path) -> Result<PrivateKeyDer<'static>, CertificateError> {
    let data = read_file(path)?;
    let mut reader = data.as_slice();
    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| CertificateError::ParseError(format!("{}: {}", path.display(), e)))?
        .ok_or_else(|| {
            CertificateError::ParseError(format!("{}: no private key found in file", path.display()))
        })
}

/// Parses a CA bundle into a trust pool. The raw certificates are returned
/// alongside so callers can see exactly what the bundle contained.
pub fn load_trust_pool(
    path: &Path,
) -> Result<(Arc<RootCertStore>, Vec<CertificateDer<'static>>), CertificateError> {
    let data = read_file(path)?;
    let certs = parse_certificates(path, &data)?;
    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(certs.iter().cloned());
    debug!(
        "[CERTIFICATE] CA bundle {}: {} accepted, {} ignored",
        path.display(),
        added,
        ignored
    );
    if roots.is_empty() {
        return Err(CertificateError::EmptyTrustPool(path.display().to_string()));
    }
    Ok((Arc::new(roots), certs))
}

pub fn build_certified_key(
    chain: Vec<CertificateDer<'static>>,
    key: &PrivateKeyDer<'static>,
    key_path: &Path,
) -> Result<Arc<CertifiedKey>, CertificateError> {
    let signing_key = rustls::crypto::ring::sign::any_supported_type(key)
        .map_err(|e| CertificateError::ParseError(format!("{}: {}", key_path.display(), e)))?;
    let certified_key = CertifiedKey::new(chain, signing_key);
    certified_key.keys_match().map_err(|e| {
        CertificateError::ParseError(format!(
            "{}: key does not match certificate: {}",
            key_path.display(),
            e
        ))
    })?;
    Ok(Arc::new(certified_key))
}

pub fn build_client_verifier(
    roots: Arc<RootCertStore>,
    ca_path: &Path,
) -> Result<Arc<dyn ClientCertVerifier>, CertificateError> {
    WebPkiClientVerifier::builder_with_provider(roots, crypto_provider())
        .build()
        .map_err(|e| CertificateError::ParseError(format!("{}: {}", ca_path.display(), e)))
}

/// Subject Common Name of a DER certificate, if it has one.
pub fn common_name(cert: &CertificateDer<'_>) -> Option<String> {
    let (_, parsed) = x509_parser::parse_x509_certificate(cert.as_ref()).ok()?;
    parsed
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(str::to_string)
}

/// Server config requiring client certificates, with both the presented
/// certificate and the accepted issuers pulled from the manager per handshake.
pub fn create_server_config(
    manager: &CertificateManager,
    allowed_cns: Vec<String>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    let store = manager.store();
    let verifier = Arc::new(DynamicClientVerifier::new(Arc::clone(&store), allowed_cns));
    let resolver = Arc::new(DynamicCertificateResolver::new(store));
    Ok(rustls::ServerConfig::builder_with_provider(crypto_provider())
        .with_safe_default_protocol_versions()?
        .with_client_cert_verifier(verifier)
        .with_cert_resolver(resolver))
}

/// Writes a development CA, a server certificate for `domain` and a client
/// certificate for `client_cn` into `dir`. Only meant for local testing.
pub fn create_selfsigned(dir: &Path, domain: &str, client_cn: &str) -> Result<(), CustomError> {
    info!("[CERTGEN] Generating a development CA, server and client certificate in {}", dir.display());
    let generate_error = |e: rcgen::Error| CustomError::new(&format!("certificate generation failed: {e}"));

    let generator = CertificateGenerator::new("certwatch development CA").map_err(generate_error)?;
    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.insert(0, domain.to_string());
    }
    let server = generator.server_certificate(subject_alt_names).map_err(generate_error)?;
    let client = generator.client_certificate(client_cn).map_err(generate_error)?;

    std::fs::create_dir_all(dir)
        .map_err(|e| CustomError::new(&format!("could not create {}: {e}", dir.display())))?;
    let files = [
        ("ca.pem", &generator.authority().cert_pem),
        ("ca.key", &generator.authority().key_pem),
        ("server.pem", &server.cert_pem),
        ("server.key", &server.key_pem),
        ("client.pem", &client.cert_pem),
        ("client.key", &client.key_pem),
    ];
    for (name, contents) in files {
        let path = dir.join(name);
        std::fs::write(&path, contents)
            .map_err(|e| CustomError::new(&format!("could not write {}: {e}", path.display())))?;
        info!("[CERTGEN] The file {} has been generated", path.display());
    }

    info!("[CERTGEN] Client certificate CN is '{}', use these files only for development", client_cn);
    Ok(())
}
