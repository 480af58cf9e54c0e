//! Known object identifiers of BSI TR-03110 certificate structures.

// Terminal type OIDs carried in the CHAT (TR-03110-3 C.4)
pub const ID_IS_OID_STR: &str = "0.4.0.127.0.7.3.1.2.1";
pub const ID_AT_OID_STR: &str = "0.4.0.127.0.7.3.1.2.2";
pub const ID_ST_OID_STR: &str = "0.4.0.127.0.7.3.1.2.3";
pub const ID_IS_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 2, 1];
pub const ID_AT_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 2, 2];
pub const ID_ST_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 2, 3];

// Certificate extensions (TR-03110-3 C.3.2)
pub const DESCRIPTION_OID_STR: &str = "0.4.0.127.0.7.3.1.3.1";
pub const SECTOR_OID_STR: &str = "0.4.0.127.0.7.3.1.3.2";
pub const DESCRIPTION_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 3, 1];
pub const SECTOR_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 3, 2];

// Terms of usage formats of the certificate description (TR-03110-4 2.2.6)
pub const PLAIN_FORMAT_OID_STR: &str = "0.4.0.127.0.7.3.1.3.1.1";
pub const HTML_FORMAT_OID_STR: &str = "0.4.0.127.0.7.3.1.3.1.2";
pub const PDF_FORMAT_OID_STR: &str = "0.4.0.127.0.7.3.1.3.1.3";
pub const PLAIN_FORMAT_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 3, 1, 1];
pub const HTML_FORMAT_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 3, 1, 2];
pub const PDF_FORMAT_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 3, 1, 3, 1, 3];

// Terminal authentication signature algorithms (TR-03110-3 A.2.1.1)
pub const RSA_SHA1_OID_STR: &str = "0.4.0.127.0.7.2.2.2.1.1";
pub const RSA_SHA256_OID_STR: &str = "0.4.0.127.0.7.2.2.2.1.2";
pub const RSA_PSS_SHA1_OID_STR: &str = "0.4.0.127.0.7.2.2.2.1.3";
pub const RSA_PSS_SHA256_OID_STR: &str = "0.4.0.127.0.7.2.2.2.1.4";
pub const RSA_SHA512_OID_STR: &str = "0.4.0.127.0.7.2.2.2.1.5";
pub const RSA_PSS_SHA512_OID_STR: &str = "0.4.0.127.0.7.2.2.2.1.6";
pub const ECDSA_SHA1_OID_STR: &str = "0.4.0.127.0.7.2.2.2.2.1";
pub const ECDSA_SHA224_OID_STR: &str = "0.4.0.127.0.7.2.2.2.2.2";
pub const ECDSA_SHA256_OID_STR: &str = "0.4.0.127.0.7.2.2.2.2.3";
pub const ECDSA_SHA384_OID_STR: &str = "0.4.0.127.0.7.2.2.2.2.4";
pub const ECDSA_SHA512_OID_STR: &str = "0.4.0.127.0.7.2.2.2.2.5";
pub const RSA_SHA1_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 1];
pub const RSA_SHA256_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 2];
pub const RSA_PSS_SHA1_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 3];
pub const RSA_PSS_SHA256_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 4];
pub const RSA_SHA512_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 5];
pub const RSA_PSS_SHA512_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 6];
pub const ECDSA_SHA1_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 1];
pub const ECDSA_SHA224_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 2];
pub const ECDSA_SHA256_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 3];
pub const ECDSA_SHA384_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 4];
pub const ECDSA_SHA512_OID: &[u32] = &[0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 5];
