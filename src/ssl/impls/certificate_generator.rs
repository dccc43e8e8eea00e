use crate::ssl::structs::certificate_generator::{CertificateGenerator, GeneratedCertificate};
use rcgen::{
    BasicConstraints,
    CertificateParams,
    DnType,
    ExtendedKeyUsagePurpose,
    IsCa,
    Issuer,
    KeyPair,
    KeyUsagePurpose
};

impl std::fmt::Debug for CertificateGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateGenerator").finish_non_exhaustive()
    }
}

impl CertificateGenerator {
    /// Creates a fresh self-signed certificate authority.
    pub fn new(ca_common_name: &str) -> Result<Self, rcgen::Error> {
        let key_pair = KeyPair::generate()?;
        let mut params = CertificateParams::new(Vec::<String>::new())?;
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        params.key_usages = vec![
            KeyUsagePurpose::KeyCertSign,
            KeyUsagePurpose::CrlSign,
            KeyUsagePurpose::DigitalSignature,
        ];
        params.distinguished_name.push(DnType::CommonName, ca_common_name);
        let cert = params.self_signed(&key_pair)?;
        let authority = GeneratedCertificate {
            cert_pem: cert.pem(),
            key_pem: key_pair.serialize_pem(),
        };
        let issuer = Issuer::from_ca_cert_pem(&authority.cert_pem, key_pair)?;
        Ok(Self { authority, issuer })
    }

    pub fn authority(&self) -> &GeneratedCertificate {
        &self.authority
    }

    pub fn server_certificate(&self, subject_alt_names: Vec<String>) -> Result<GeneratedCertificate, rcgen::Error> {
        let common_name = subject_alt_names
            .first()
            .cloned()
            .unwrap_or_else(|| String::from("localhost"));
        self.sign(subject_alt_names, &common_name, ExtendedKeyUsagePurpose::ServerAuth)
    }

    pub fn client_certificate(&self, common_name: &str) -> Result<GeneratedCertificate, rcgen::Error> {
        self.sign(Vec::new(), common_name, ExtendedKeyUsagePurpose::ClientAuth)
    }

    fn sign(
        &self,
        subject_alt_names: Vec<String>,
        common_name: &str,
        usage: ExtendedKeyUsagePurpose,
    ) -> Result<GeneratedCertificate, rcgen::Error> {
        let key_pair = KeyPair::generate()?;
        let mut params = CertificateParams::new(subject_alt_names)?;
        params.distinguished_name.push(DnType::CommonName, common_name);
        params.key_usages = vec![KeyUsagePurpose::DigitalSignature];
        params.extended_key_usages = vec![usage];
        let cert = params.signed_by(&key_pair, &self.issuer)?;
        Ok(GeneratedCertificate {
            cert_pem: cert.pem(),
            key_pem: key_pair.serialize_pem(),
        })
    }
}
