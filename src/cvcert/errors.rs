use rasn::error::{DecodeError, EncodeError};
use thiserror::Error;

use super::holder_ref::PublicKeyReference;
use super::types::Date;

/// Error types for CV certificate decoding and trust evaluation
#[derive(Error, Debug)]
pub enum Error {
    #[error("ASN.1 decoding error: {0}")]
    Asn1Decode(DecodeError),

    #[error("ASN.1 encoding error: {0}")]
    Asn1Encode(EncodeError),

    #[error("Hex decoding error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Cryptographic error: {0}")]
    Crypto(#[from] crate::crypto::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown object identifier: {0}")]
    UnknownOid(String),

    #[error("Undefined certificate holder role for OID {0}")]
    UndefinedRole(String),

    #[error("Certificate is not valid before {0}")]
    NotYetValid(Date),

    #[error("Certificate expired on {0}")]
    Expired(Date),

    #[error("Certificate description does not match the hash in the certificate")]
    DescriptionBindingMismatch,

    #[error("Malformed certificate chain: cannot find a CHR for the CAR ({0})")]
    BrokenChainLink(PublicKeyReference),

    #[error("Cyclic CAR/CHR reference in certificate set")]
    CyclicChainReference,
}

// rasn 0.18's DecodeError/EncodeError do not implement std::error::Error, so
// thiserror's `#[from]` (which generates a `source()` requiring that bound)
// cannot be used. These manual impls reproduce exactly the `From` conversions
// `#[from]` would have generated, preserving `?` behavior.
impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Asn1Decode(err)
    }
}

impl From<EncodeError> for Error {
    fn from(err: EncodeError) -> Self {
        Error::Asn1Encode(err)
    }
}
