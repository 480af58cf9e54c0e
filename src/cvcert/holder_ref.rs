use std::fmt;

use super::errors::Error;
use super::types::CvcResult;

/// A public key reference used as CAR and CHR in CV certificates
/// (TR-03110-3 A.6.1)
///
/// The reference is a US-ASCII string of 8 to 16 characters consisting of
/// the country code (2 characters), the holder mnemonic (up to 9
/// characters) and the sequence number (5 characters). It is kept exactly
/// as received; accessors are read-only views into the original bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKeyReference {
    reference: Vec<u8>,
}

impl PublicKeyReference {
    /// Create a reference from the raw bytes of a CAR or CHR element
    pub fn from_bytes(reference: impl Into<Vec<u8>>) -> CvcResult<Self> {
        let reference = reference.into();
        if reference.len() < 7 {
            return Err(Error::InvalidData(format!(
                "Public key reference too short: {} bytes",
                reference.len(),
            )));
        }
        Ok(Self { reference })
    }

    /// Create a reference from its string form
    pub fn from_string(reference: impl AsRef<str>) -> CvcResult<Self> {
        Self::from_bytes(reference.as_ref().as_bytes())
    }

    /// ISO 3166-1 country code, the first two characters
    pub fn country_code(&self) -> String {
        String::from_utf8_lossy(&self.reference[..2]).to_string()
    }

    /// Holder mnemonic between country code and sequence number
    pub fn holder_mnemonic(&self) -> String {
        let end = self.reference.len() - 5;
        String::from_utf8_lossy(&self.reference[2..end]).to_string()
    }

    /// Sequence number, the last five characters
    pub fn sequence_number(&self) -> String {
        let start = self.reference.len() - 5;
        String::from_utf8_lossy(&self.reference[start..]).to_string()
    }

    /// The reference exactly as received
    pub fn as_bytes(&self) -> &[u8] {
        &self.reference
    }

    /// Hex encoding of the raw reference
    pub fn to_hex(&self) -> String {
        hex::encode(&self.reference)
    }
}

impl fmt::Display for PublicKeyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fields() {
        let car = PublicKeyReference::from_string("DECVCAeID00102").unwrap();

        assert_eq!(car.country_code(), "DE");
        assert_eq!(car.holder_mnemonic(), "CVCAeID");
        assert_eq!(car.sequence_number(), "00102");
        assert_eq!(car.to_string(), "DECVCAeID00102");
    }

    #[test]
    fn test_reference_without_mnemonic() {
        // 7 characters: country code and sequence number only
        let car = PublicKeyReference::from_string("DE00001").unwrap();

        assert_eq!(car.country_code(), "DE");
        assert_eq!(car.holder_mnemonic(), "");
        assert_eq!(car.sequence_number(), "00001");
    }

    #[test]
    fn test_reference_too_short() {
        assert!(PublicKeyReference::from_string("DE0001").is_err());
        assert!(PublicKeyReference::from_bytes(Vec::new()).is_err());
    }

    #[test]
    fn test_reference_equality_is_byte_wise() {
        let a = PublicKeyReference::from_string("DETESTA00001").unwrap();
        let b = PublicKeyReference::from_bytes(b"DETESTA00001".to_vec()).unwrap();
        let c = PublicKeyReference::from_string("DETESTA00002").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_reference_hex() {
        let r = PublicKeyReference::from_string("DE00001").unwrap();
        assert_eq!(r.to_hex(), hex::encode(b"DE00001"));
    }
}
