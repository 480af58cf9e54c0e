use tracing::debug;

use super::CvCertificate;
use super::errors::Error;
use super::holder_ref::PublicKeyReference;
use super::types::{CvcResult, Role};

/// A set of CV certificates classified by holder role.
///
/// Certificates are bucketed into CVCA, DV and terminal certificates when
/// they are added; the flat list keeps the insertion order. The chain
/// imposes no synchronization, each authentication session owns its own
/// instance.
///
/// See BSI TR-03110-3, section 2 and appendix C.
#[derive(Debug, Clone, Default)]
pub struct CvCertificateChain {
    certs: Vec<CvCertificate>,
    cvca_certs: Vec<CvCertificate>,
    dv_certs: Vec<CvCertificate>,
    terminal_certs: Vec<CvCertificate>,
}

impl CvCertificateChain {
    /// Create an empty certificate chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chain from a collection of certificates
    pub fn from_certificates(certificates: impl IntoIterator<Item = CvCertificate>) -> Self {
        let mut chain = Self::new();
        chain.add_certificates(certificates);
        chain
    }

    /// Add a certificate to the chain, classifying it by its CHAT role.
    ///
    /// A certificate that is already present (byte for byte) is ignored.
    pub fn add_certificate(&mut self, certificate: CvCertificate) {
        if self.contains(&certificate) {
            debug!(
                "Ignoring duplicate certificate (CHR {})",
                certificate.chr(),
            );
            return;
        }

        match certificate.chat().role() {
            Role::Cvca => self.cvca_certs.push(certificate.clone()),
            role if role.is_document_verifier() => self.dv_certs.push(certificate.clone()),
            _ => self.terminal_certs.push(certificate.clone()),
        }
        self.certs.push(certificate);
    }

    /// Add a collection of certificates to the chain
    pub fn add_certificates(&mut self, certificates: impl IntoIterator<Item = CvCertificate>) {
        for certificate in certificates {
            self.add_certificate(certificate);
        }
    }

    /// Check if the chain contains the given certificate (byte equality)
    pub fn contains(&self, certificate: &CvCertificate) -> bool {
        self.certs.iter().any(|c| c == certificate)
    }

    /// Returns all certificates in insertion order
    pub fn certificates(&self) -> &[CvCertificate] {
        &self.certs
    }

    /// Returns the certificates of the Country Verifying CAs (CVCA)
    pub fn cvca_certificates(&self) -> &[CvCertificate] {
        &self.cvca_certs
    }

    /// Returns the certificates of the Document Verifiers (DV)
    pub fn dv_certificates(&self) -> &[CvCertificate] {
        &self.dv_certs
    }

    /// Returns the certificates of the terminals
    pub fn terminal_certificates(&self) -> &[CvCertificate] {
        &self.terminal_certs
    }

    /// Verify the CAR/CHR references of the chain.
    ///
    /// 1. The CAR of every terminal certificate must refer to the CHR of
    ///    a DV certificate.
    /// 2. The CAR of every DV certificate must refer to the CHR of a
    ///    CVCA certificate.
    /// 3. The CAR of every CVCA certificate must resolve within the CVCA
    ///    certificates; a lone root is therefore self-referencing, link
    ///    certificates refer to the previous root.
    ///
    /// Every authority certificate needs at least one matching holder;
    /// the first certificate without one fails the whole chain.
    pub fn verify(&self) -> CvcResult<()> {
        Self::verify_references(&self.terminal_certs, &self.dv_certs)?;
        Self::verify_references(&self.dv_certs, &self.cvca_certs)?;
        Self::verify_references(&self.cvca_certs, &self.cvca_certs)?;
        debug!(
            "Verified certificate chain references ({} certificates)",
            self.certs.len(),
        );
        Ok(())
    }

    fn verify_references(
        authorities: &[CvCertificate],
        holders: &[CvCertificate],
    ) -> CvcResult<()> {
        for authority in authorities {
            if !holders.iter().any(|holder| holder.chr() == authority.car()) {
                return Err(Error::BrokenChainLink(authority.car().clone()));
            }
        }
        Ok(())
    }

    /// Build the chain starting from the given CAR.
    ///
    /// Collects every certificate whose CAR equals the reference, then
    /// follows the collected CHRs downwards. The walk keeps a list of the
    /// certificates already collected: reaching one of them again through
    /// a loop of distinct certificates fails with
    /// [`Error::CyclicChainReference`], so adversarially crafted
    /// reference cycles terminate instead of recursing forever. A
    /// self-referencing root simply ends its branch.
    pub fn chain_from_car(&self, car: &PublicKeyReference) -> CvcResult<Self> {
        let mut collected: Vec<CvCertificate> = Vec::new();
        let mut pending = vec![car.clone()];

        while let Some(reference) = pending.pop() {
            for certificate in self.certs.iter().filter(|c| c.car() == &reference) {
                if collected.contains(certificate) {
                    return Err(Error::CyclicChainReference);
                }
                collected.push(certificate.clone());

                if certificate.chr() != certificate.car() {
                    pending.push(certificate.chr().clone());
                }
            }
        }

        Ok(Self::from_certificates(collected))
    }

    /// Build the chain starting from a raw CAR byte sequence
    pub fn chain_from_car_bytes(&self, car: &[u8]) -> CvcResult<Self> {
        self.chain_from_car(&PublicKeyReference::from_bytes(car)?)
    }
}
