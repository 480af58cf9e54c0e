mod chain;
mod chat;
mod crypto;
mod description;
mod errors;
mod holder_ref;
mod types;
mod verifier;

// public reexports
pub use chain::CvCertificateChain;
pub use chat::Chat;
pub use crypto::SecurityProtocol;
pub use description::{CertificateDescription, TermsOfUsage};
pub use errors::Error;
pub use holder_ref::PublicKeyReference;
pub use types::{AccessRight, DataGroup, Date, Role, SpecialFunction, TerminalType};
pub use verifier::{check_validity_period, verify_description_binding};

use rasn::der::decode as der_decode;
use std::ops::Range;
use types::CvcResult;

use crate::asn1::{CertificateExtensions, CvCertificate as Asn1CvCertificate, CvPublicKey};

/// A Card Verifiable Certificate according to TR-03110-3
///
/// Decoding interprets the body elements eagerly, so a successfully
/// constructed certificate always carries a defined holder role and valid
/// calendar dates. The DER input and the verbatim body TLV are retained:
/// signature and description checks must run over the bytes the issuer
/// signed, not over a re-encoding.
#[derive(Debug, Clone)]
pub struct CvCertificate {
    inner: Asn1CvCertificate,
    encoded: Vec<u8>,
    raw_body: Vec<u8>,
    car: PublicKeyReference,
    chr: PublicKeyReference,
    chat: Chat,
    effective_date: Date,
    expiration_date: Date,
}

impl CvCertificate {
    /// Decode a CV certificate from DER format
    pub fn from_der(data: &[u8]) -> CvcResult<Self> {
        if data.is_empty() {
            return Err(Error::InvalidData("Empty certificate data".to_string()));
        }
        let inner: Asn1CvCertificate = der_decode(data)?;
        let raw_body = body_bytes(data)?.to_vec();

        let car = PublicKeyReference::from_bytes(inner.body.car.as_ref())?;
        let chr = PublicKeyReference::from_bytes(inner.body.chr.as_ref())?;
        let chat = Chat::from_template(&inner.body.chat)?;
        let effective_date = Date::from_bcd(&inner.body.effective_date)?;
        let expiration_date = Date::from_bcd(&inner.body.expiration_date)?;

        Ok(Self {
            inner,
            encoded: data.to_vec(),
            raw_body,
            car,
            chr,
            chat,
            effective_date,
            expiration_date,
        })
    }

    /// Decode a CV certificate from hex string
    pub fn from_hex(hex_data: impl AsRef<str>) -> CvcResult<Self> {
        let data = hex::decode(hex_data.as_ref())?;
        Self::from_der(&data)
    }

    /// Returns the certificate profile identifier
    pub fn profile_id(&self) -> &[u8] {
        self.inner.body.profile_id.as_ref()
    }

    /// Returns the certification authority reference
    pub fn car(&self) -> &PublicKeyReference {
        &self.car
    }

    /// Returns the certificate holder reference
    pub fn chr(&self) -> &PublicKeyReference {
        &self.chr
    }

    /// Returns the certificate holder authorization template
    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    /// Returns the public key of this certificate
    pub fn public_key(&self) -> &CvPublicKey {
        &self.inner.body.public_key
    }

    /// Get the date from which this certificate is effective
    pub fn effective_date(&self) -> &Date {
        &self.effective_date
    }

    /// Returns the expiration date of this certificate
    pub fn expiration_date(&self) -> &Date {
        &self.expiration_date
    }

    /// Returns the extensions of this certificate
    pub fn extensions(&self) -> Option<&CertificateExtensions> {
        self.inner.body.extensions.as_ref()
    }

    /// Returns the signature of this certificate as byte slice
    pub fn signature(&self) -> &[u8] {
        self.inner.signature.as_ref()
    }

    /// Returns the verbatim body TLV bytes as found in the input
    pub fn raw_body(&self) -> &[u8] {
        &self.raw_body
    }

    /// Returns the DER encoding this certificate was decoded from
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }

    /// Returns the hex representation of the certificate
    pub fn to_hex(&self) -> String {
        hex::encode(&self.encoded)
    }

    /// Check if this certificate is self-signed
    pub fn is_self_signed(&self) -> bool {
        self.car == self.chr
    }

    /// Check if this certificate is issued by the given certificate authority
    pub fn is_issued_by(&self, car: &PublicKeyReference) -> bool {
        &self.car == car
    }

    /// Check if this certificate has domain parameters (CVCA characteristic)
    pub fn has_domain_parameters(&self) -> bool {
        let key = self.public_key();
        key.prime.is_some()
            && key.a.is_some()
            && key.b.is_some()
            && key.generator.is_some()
            && key.order.is_some()
            && key.cofactor.is_some()
    }

    /// Validate the certificate structure according to TR-03110-3
    ///
    /// - Self-signed CVCA certificates SHALL contain domain parameters
    /// - Linked CVCA certificates MAY contain domain parameters
    /// - DV and Terminal certificates MUST NOT contain domain parameters
    pub fn validate_structure(&self) -> CvcResult<()> {
        let has_domain_params = self.has_domain_parameters();

        match self.chat.role() {
            Role::Cvca => {
                if self.is_self_signed() && !has_domain_params {
                    return Err(Error::InvalidData(
                        "Self-signed CVCA certificate must contain domain parameters".to_string(),
                    ));
                }
            }
            role => {
                if has_domain_params {
                    return Err(Error::InvalidData(format!(
                        "DV/Terminal certificate must not contain domain parameters. Role: {role:?}",
                    )));
                }
            }
        }
        Ok(())
    }
}

impl PartialEq for CvCertificate {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for CvCertificate {}

impl CvPublicKey {
    /// Get the security protocol of this public key
    pub fn security_protocol(&self) -> CvcResult<SecurityProtocol> {
        SecurityProtocol::from_oid(&self.oid.to_string())
    }
}

// Certificate and body tags of the CV certificate TLV structure
const TAG_CVC: u16 = 0x7F21;
const TAG_BODY: u16 = 0x7F4E;

/// Slice the verbatim body TLV (tag 0x7F4E) out of an encoded certificate
fn body_bytes(data: &[u8]) -> CvcResult<&[u8]> {
    let (tag, _, value) = read_tlv(data, 0)?;
    if tag != TAG_CVC {
        return Err(Error::InvalidData(format!(
            "Expected certificate tag 0x7F21, found 0x{tag:04X}",
        )));
    }

    let (tag, span, _) = read_tlv(data, value.start)?;
    if tag != TAG_BODY {
        return Err(Error::InvalidData(format!(
            "Expected certificate body tag 0x7F4E, found 0x{tag:04X}",
        )));
    }
    Ok(&data[span])
}

/// Read a BER-TLV header at the given offset.
///
/// Returns the tag, the span of the complete TLV object and the span of
/// its value. Tag numbers of the certificate structure fit in two bytes;
/// longer tags and indefinite lengths are rejected.
fn read_tlv(data: &[u8], offset: usize) -> CvcResult<(u16, Range<usize>, Range<usize>)> {
    let truncated = || Error::InvalidData("Truncated TLV object".to_string());

    let mut cursor = offset;
    let first = *data.get(cursor).ok_or_else(truncated)?;
    cursor += 1;

    let mut tag = first as u16;
    if first & 0x1F == 0x1F {
        let second = *data.get(cursor).ok_or_else(truncated)?;
        cursor += 1;
        if second & 0x80 != 0 {
            return Err(Error::InvalidData(
                "TLV tag numbers above two bytes are not supported".to_string(),
            ));
        }
        tag = (tag << 8) | second as u16;
    }

    let length_byte = *data.get(cursor).ok_or_else(truncated)?;
    cursor += 1;
    let length = if length_byte & 0x80 == 0 {
        length_byte as usize
    } else {
        let count = (length_byte & 0x7F) as usize;
        if count == 0 || count > 2 {
            return Err(Error::InvalidData(format!(
                "Unsupported TLV length encoding: 0x{length_byte:02X}",
            )));
        }
        let mut length = 0usize;
        for _ in 0..count {
            let byte = *data.get(cursor).ok_or_else(truncated)?;
            cursor += 1;
            length = (length << 8) | byte as usize;
        }
        length
    };

    let end = cursor + length;
    if end > data.len() {
        return Err(Error::InvalidData(format!(
            "TLV length {length} exceeds available data",
        )));
    }
    Ok((tag, offset..end, cursor..end))
}
