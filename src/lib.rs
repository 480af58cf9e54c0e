//! Trust chain engine for card verifiable certificates (BSI TR-03110).
//!
//! This crate decodes and evaluates the certificate material a remote
//! terminal presents during Extended Access Control:
//!
//! * the Certificate Holder Authorization Template (CHAT) with its role
//!   and access rights,
//! * card verifiable certificates and their human readable descriptions,
//! * certificate chains from the terminal certificate up to a CVCA root.
//!
//! All certificate bytes originate from an untrusted terminal. Every
//! decode and verification surface returns a [`cvcert::Error`] instead of
//! panicking, so a malformed certificate can never take down an
//! authentication session.

pub mod asn1;
pub mod crypto;
pub mod cvcert;
