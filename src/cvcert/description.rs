use rasn::types::{Ia5String, OctetString, Utf8String};

use super::errors::Error;
use super::types::CvcResult;
use crate::asn1::CertificateDescription as Asn1CertificateDescription;
use crate::asn1::oid::{HTML_FORMAT_OID_STR, PDF_FORMAT_OID_STR, PLAIN_FORMAT_OID_STR};

/// Terms of usage of a certificate description.
///
/// The representation is fully determined by the description type OID:
/// plain text and HTML arrive as strings, PDF as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermsOfUsage {
    Plain(String),
    Html(String),
    Pdf(Vec<u8>),
}

impl TermsOfUsage {
    /// MIME type of this terms of usage representation
    pub fn mime_type(&self) -> &'static str {
        match self {
            TermsOfUsage::Plain(_) => "text/plain",
            TermsOfUsage::Html(_) => "text/html",
            TermsOfUsage::Pdf(_) => "application/pdf",
        }
    }
}

/// Human readable description of a terminal certificate (TR-03110-4 2.2.6)
///
/// Keeps the DER encoding it was created from: the description digest in
/// the certificate extensions is computed over exactly these bytes, so
/// they must never be re-serialized for comparison.
#[derive(Debug, Clone)]
pub struct CertificateDescription {
    inner: Asn1CertificateDescription,
    terms_of_usage: TermsOfUsage,
    encoded: Vec<u8>,
}

impl CertificateDescription {
    /// Decode a certificate description from DER format
    pub fn from_der(data: &[u8]) -> CvcResult<Self> {
        let inner: Asn1CertificateDescription = rasn::der::decode(data)?;

        let description_type = inner.description_type.to_string();
        let terms_of_usage = match description_type.as_str() {
            PLAIN_FORMAT_OID_STR => {
                let text: Utf8String = rasn::der::decode(inner.terms_of_usage.as_bytes())?;
                TermsOfUsage::Plain(text)
            }
            HTML_FORMAT_OID_STR => {
                let html: Ia5String = rasn::der::decode(inner.terms_of_usage.as_bytes())?;
                TermsOfUsage::Html(html.to_string())
            }
            PDF_FORMAT_OID_STR => {
                let pdf: OctetString = rasn::der::decode(inner.terms_of_usage.as_bytes())?;
                TermsOfUsage::Pdf(pdf.to_vec())
            }
            _ => return Err(Error::UnknownOid(description_type)),
        };

        Ok(Self {
            inner,
            terms_of_usage,
            encoded: data.to_vec(),
        })
    }

    /// Decode a certificate description from hex encoded DER
    pub fn from_hex(hex_data: impl AsRef<str>) -> CvcResult<Self> {
        let data = hex::decode(hex_data.as_ref())?;
        Self::from_der(&data)
    }

    /// The DER encoding this description was created from
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }

    /// Description type object identifier
    pub fn description_type(&self) -> String {
        self.inner.description_type.to_string()
    }

    /// Name of the certificate issuer
    pub fn issuer_name(&self) -> &str {
        &self.inner.issuer_name
    }

    /// URL of the certificate issuer
    pub fn issuer_url(&self) -> Option<String> {
        self.inner
            .issuer_url
            .as_ref()
            .map(|url| String::from_utf8_lossy(url.as_bytes()).into_owned())
    }

    /// Name of the certificate subject
    pub fn subject_name(&self) -> &str {
        &self.inner.subject_name
    }

    /// URL of the certificate subject
    pub fn subject_url(&self) -> Option<String> {
        self.inner
            .subject_url
            .as_ref()
            .map(|url| String::from_utf8_lossy(url.as_bytes()).into_owned())
    }

    /// Redirect URL for the browser after authentication
    pub fn redirect_url(&self) -> Option<String> {
        self.inner
            .redirect_url
            .as_ref()
            .map(|url| String::from_utf8_lossy(url.as_bytes()).into_owned())
    }

    /// Hash values of admissible X.509 certificates of the remote terminal
    pub fn comm_certificates(&self) -> Vec<Vec<u8>> {
        match &self.inner.comm_certificates {
            Some(certs) => certs.to_vec().into_iter().map(|c| c.to_vec()).collect(),
            None => Vec::new(),
        }
    }

    /// The terms of usage in their type-determined representation
    pub fn terms_of_usage(&self) -> &TermsOfUsage {
        &self.terms_of_usage
    }

    /// MIME type of the terms of usage
    pub fn mime_type(&self) -> &'static str {
        self.terms_of_usage.mime_type()
    }

    /// The terms of usage as bytes.
    ///
    /// Serves the raw bytes for the PDF representation and the UTF-8
    /// encoding of the text for the plain and HTML representations.
    pub fn terms_of_usage_bytes(&self) -> Vec<u8> {
        match &self.terms_of_usage {
            TermsOfUsage::Plain(text) | TermsOfUsage::Html(text) => text.as_bytes().to_vec(),
            TermsOfUsage::Pdf(bytes) => bytes.clone(),
        }
    }
}

impl PartialEq for CertificateDescription {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for CertificateDescription {}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_decode_plain_description() {
        let wire = Asn1CertificateDescription::new_plain_terms(
            "Test Issuer",
            "Test Subject",
            "terms of usage",
        );
        let encoded = wire.to_der().unwrap();

        let description = CertificateDescription::from_der(&encoded).unwrap();

        assert_eq!(description.issuer_name(), "Test Issuer");
        assert_eq!(description.subject_name(), "Test Subject");
        assert_eq!(description.issuer_url(), None);
        assert_eq!(description.mime_type(), "text/plain");
        assert_eq!(
            description.terms_of_usage(),
            &TermsOfUsage::Plain("terms of usage".to_string())
        );
        assert_eq!(description.terms_of_usage_bytes(), b"terms of usage");
        assert_eq!(description.as_bytes(), encoded.as_slice());
    }

    #[test]
    fn test_decode_pdf_description() {
        // "%PDF-" magic
        let pdf_bytes = hex!("255044462D").to_vec();
        let wire = Asn1CertificateDescription::new_pdf_terms(
            "Issuer",
            "Subject",
            OctetString::from(pdf_bytes.clone()),
        );
        let encoded = wire.to_der().unwrap();

        let description = CertificateDescription::from_der(&encoded).unwrap();

        assert_eq!(description.mime_type(), "application/pdf");
        assert_eq!(description.terms_of_usage_bytes(), pdf_bytes);
    }

    #[test]
    fn test_unknown_description_type_is_rejected() {
        // re-tag a plain description with an OID outside the known formats
        let mut wire =
            Asn1CertificateDescription::new_plain_terms("Issuer", "Subject", "terms");
        const BOGUS_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 3, 1, 9];
        wire.description_type = rasn::types::ObjectIdentifier::new_unchecked(BOGUS_OID.into());
        let encoded = wire.to_der().unwrap();

        assert!(matches!(
            CertificateDescription::from_der(&encoded),
            Err(Error::UnknownOid(_))
        ));
    }

    #[test]
    fn test_decode_optional_fields() {
        use rasn::types::PrintableString;

        let issuer_url = PrintableString::try_from("https://issuer.example".to_string()).unwrap();
        let redirect_url =
            PrintableString::try_from("https://service.example/done".to_string()).unwrap();
        let comm_cert = OctetString::copy_from_slice(&[0xCC; 32]);

        let wire = Asn1CertificateDescription::new_plain_terms("Issuer", "Subject", "terms")
            .with_issuer_url(issuer_url)
            .with_redirect_url(redirect_url)
            .with_comm_certs(vec![comm_cert]);
        let encoded = wire.to_der().unwrap();

        let description = CertificateDescription::from_der(&encoded).unwrap();

        assert_eq!(
            description.issuer_url().as_deref(),
            Some("https://issuer.example")
        );
        assert_eq!(description.subject_url(), None);
        assert_eq!(
            description.redirect_url().as_deref(),
            Some("https://service.example/done")
        );
        assert_eq!(description.comm_certificates(), vec![vec![0xCC; 32]]);
    }

    #[test]
    fn test_description_equality_is_byte_wise() {
        let a = Asn1CertificateDescription::new_plain_terms("I", "S", "terms")
            .to_der()
            .unwrap();
        let b = Asn1CertificateDescription::new_plain_terms("I", "S", "other terms")
            .to_der()
            .unwrap();

        let first = CertificateDescription::from_der(&a).unwrap();
        let second = CertificateDescription::from_hex(hex::encode(&a)).unwrap();
        let third = CertificateDescription::from_der(&b).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
