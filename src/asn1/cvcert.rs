use rasn::prelude::{
    Any, AsnType, Decode, Decoder, Encode, ObjectIdentifier as Oid, OctetString, SequenceOf,
};

/// Certificate Holder Authorization Template, outer application tag 0x4C
///
/// The discretionary data octets are one byte for inspection systems and
/// signature terminals and five bytes for authentication terminals. Their
/// interpretation lives in [`crate::cvcert::Chat`].
#[derive(Debug, Clone, PartialEq, Eq, Decode, Encode, AsnType)]
#[rasn(tag(application, 0x4C))]
pub struct ChatTemplate {
    /// terminal type object identifier
    pub oid: Oid,
    /// discretionary data holding role and access right bits
    #[rasn(tag(application, 0x13))]
    pub template: OctetString,
}

/// Public key of a CV certificate, application tag 0x7F49
///
/// Only the object identifier is interpreted by this crate. The context
/// tagged parameters are all optional so that both ECDSA keys (with or
/// without domain parameters) and RSA keys decode.
#[derive(Debug, Clone, Decode, Encode, AsnType)]
#[rasn(tag(application, 0x49))]
pub struct CvPublicKey {
    /// terminal authentication algorithm object identifier
    pub oid: Oid,
    #[rasn(tag(context, 1))]
    /// prime modulus (composite modulus for RSA keys)
    pub prime: Option<OctetString>,
    #[rasn(tag(context, 2))]
    /// first coefficient (public exponent for RSA keys)
    pub a: Option<OctetString>,
    #[rasn(tag(context, 3))]
    /// second coefficient
    pub b: Option<OctetString>,
    #[rasn(tag(context, 4))]
    /// base point
    pub generator: Option<OctetString>,
    #[rasn(tag(context, 5))]
    /// order of the base point
    pub order: Option<OctetString>,
    #[rasn(tag(context, 6))]
    /// public point
    pub public_point: Option<OctetString>,
    #[rasn(tag(context, 7))]
    /// cofactor
    pub cofactor: Option<OctetString>,
}

/// Certificate extensions, application tag 0x65
#[derive(Debug, Clone, Decode, Encode, AsnType)]
#[rasn(tag(application, 0x05))]
#[rasn(delegate)]
pub struct CertificateExtensions(pub SequenceOf<Any>);

/// A single discretionary data template inside the extensions,
/// application tag 0x73
///
/// The description extension carries the hash of the certificate
/// description in the first context tagged object.
#[derive(Debug, Clone, Decode, Encode, AsnType)]
#[rasn(tag(application, 0x13))]
pub struct ExtensionTemplate {
    /// extension object identifier
    pub oid: Oid,
    #[rasn(tag(context, 0))]
    /// first hash value
    pub hash: Option<OctetString>,
    #[rasn(tag(context, 1))]
    /// second hash value
    pub second_hash: Option<OctetString>,
}

/// Card Verifiable Certificate Body, application tag 0x7F4E
#[derive(Debug, Clone, Decode, Encode, AsnType)]
#[rasn(tag(application, 0x4E))]
pub struct CvCertificateBody {
    /// certificate profile identifier
    #[rasn(tag(application, 0x29))]
    pub profile_id: OctetString,
    #[rasn(tag(application, 0x02))]
    /// certification authority reference
    pub car: OctetString,
    /// public key value and domain parameters
    pub public_key: CvPublicKey,
    #[rasn(tag(application, 0x20))]
    /// certificate holder reference
    pub chr: OctetString,
    /// certificate holder authorization template
    pub chat: ChatTemplate,
    /// certificate effective date, unpacked BCD YYMMDD
    #[rasn(tag(application, 0x25), size(6))]
    pub effective_date: OctetString,
    /// certificate expiration date, unpacked BCD YYMMDD
    #[rasn(tag(application, 0x24), size(6))]
    pub expiration_date: OctetString,
    /// certificate extensions
    pub extensions: Option<CertificateExtensions>,
}

/// Card Verifiable Certificate, application tag 0x7F21
#[derive(Debug, Clone, Decode, Encode, AsnType)]
#[rasn(tag(application, 0x21))]
pub struct CvCertificate {
    /// CV certificate body
    pub body: CvCertificateBody,
    /// CV certificate signature
    #[rasn(tag(application, 0x37))]
    pub signature: OctetString,
}
