use tracing::debug;

use super::CvCertificate;
use super::description::CertificateDescription;
use super::errors::Error;
use super::types::{CvcResult, Date};
use crate::asn1::ExtensionTemplate;
use crate::asn1::oid::DESCRIPTION_OID_STR;

/// Check that a certificate is valid on the given date.
///
/// The validity period is inclusive on both ends, so a certificate whose
/// effective and expiration date both equal `now` passes.
pub fn check_validity_period(certificate: &CvCertificate, now: &Date) -> CvcResult<()> {
    if now < certificate.effective_date() {
        return Err(Error::NotYetValid(certificate.effective_date().clone()));
    }
    if now > certificate.expiration_date() {
        return Err(Error::Expired(certificate.expiration_date().clone()));
    }
    Ok(())
}

/// Check that a certificate description matches the hash embedded in the
/// certificate extensions.
///
/// The digest algorithm is selected from the terminal authentication OID
/// of the certificate public key and computed over the description bytes
/// exactly as received. A certificate without a description extension, or
/// with a description extension that carries no hash object, passes: the
/// binding is verified only if the certificate claims one.
pub fn verify_description_binding(
    certificate: &CvCertificate,
    description: &CertificateDescription,
) -> CvcResult<()> {
    let Some(extensions) = certificate.extensions() else {
        debug!("Certificate carries no extensions, nothing to verify");
        return Ok(());
    };

    for object in &extensions.0 {
        let template: ExtensionTemplate = match rasn::der::decode(object.as_bytes()) {
            Ok(template) => template,
            Err(err) => {
                debug!("Skipping unreadable certificate extension: {err}");
                continue;
            }
        };
        if template.oid.to_string() != DESCRIPTION_OID_STR {
            continue;
        }

        let Some(expected) = template.hash else {
            debug!("Description extension without a hash object, nothing to verify");
            return Ok(());
        };

        let protocol = certificate.public_key().security_protocol()?;
        let digest = protocol.hash_algorithm().hash(description.as_bytes())?;

        if digest.as_slice() != expected.as_ref() {
            return Err(Error::DescriptionBindingMismatch);
        }
        debug!(
            "Certificate description digest ({}) verified",
            protocol.hash_algorithm(),
        );
        return Ok(());
    }

    debug!("No description extension present, nothing to verify");
    Ok(())
}
