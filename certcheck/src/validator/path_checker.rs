//! Interface for single-step checks performed on each certificate in a certification path

use alloc::collections::BTreeSet;
use alloc::format;

use der::asn1::ObjectIdentifier;
use x509_cert::Certificate;

use crate::util::error::*;
use crate::util::logging::*;
use crate::util::pdv_utilities::subject_to_string;

/// `ObjectIdentifierSet` is a typedef for a set of ObjectIdentifier values.
pub type ObjectIdentifierSet = BTreeSet<ObjectIdentifier>;

/// Order in which the certificates in a certification path are presented to a checker.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TraversalDirection {
    /// From the target certificate towards the trust anchor
    Forward,
    /// From the certificate issued by the trust anchor towards the target certificate
    Reverse,
}

/// The [`CertPathChecker`] trait defines the interface for checks that inspect one certificate at a
/// time as a certification path is processed.
///
/// A checker is initialized via [`init`](CertPathChecker::init) before the first certificate of a
/// path is presented, then [`check`](CertPathChecker::check) is called once per certificate.
pub trait CertPathChecker {
    /// Prepares the checker to process a path in the given direction.
    fn init(&mut self, direction: TraversalDirection) -> Result<()>;

    /// Returns true if the checker supports [`TraversalDirection::Forward`].
    fn is_forward_checking_supported(&self) -> bool;

    /// Returns the critical extensions the checker processes, or None if it processes none.
    fn supported_extensions(&self) -> Option<&ObjectIdentifierSet>;

    /// Checks `cert`, removing any critical extensions it resolves from `unresolved_crit_exts`.
    fn check(
        &mut self,
        cert: &Certificate,
        unresolved_crit_exts: &mut ObjectIdentifierSet,
    ) -> Result<()>;
}

/// `critical_extensions` returns the set of critical extension OIDs present in `cert`.
pub fn critical_extensions(cert: &Certificate) -> ObjectIdentifierSet {
    let mut crit_exts = ObjectIdentifierSet::new();
    if let Some(exts) = &cert.tbs_certificate.extensions {
        for ext in exts {
            if ext.critical {
                crit_exts.insert(ext.extn_id);
            }
        }
    }
    crit_exts
}

/// `check_chain` initializes `checker` and presents each certificate in `chain` to it.
///
/// The `chain` is ordered with the target certificate first and the certificate issued by the trust
/// anchor last. [`TraversalDirection::Forward`] presents certificates in that order and
/// [`TraversalDirection::Reverse`] presents them in the opposite order. Processing stops at the first
/// failure, which is returned unchanged.
pub fn check_chain(
    checker: &mut dyn CertPathChecker,
    chain: &[Certificate],
    direction: TraversalDirection,
) -> Result<()> {
    if direction == TraversalDirection::Forward && !checker.is_forward_checking_supported() {
        log_message(
            &PeLogLevels::PeError,
            "Checker does not support forward traversal",
        );
        return Err(Error::PathValidation(PathValidationStatus::Misconfiguration));
    }
    checker.init(direction)?;

    let mut check_one = |cert: &Certificate| -> Result<()> {
        let mut unresolved_crit_exts = critical_extensions(cert);
        if let Err(e) = checker.check(cert, &mut unresolved_crit_exts) {
            log_message(
                &PeLogLevels::PeInfo,
                format!(
                    "Certificate issued to {} failed check: {}",
                    subject_to_string(cert),
                    e
                )
                .as_str(),
            );
            return Err(e);
        }
        Ok(())
    };

    match direction {
        TraversalDirection::Forward => chain.iter().try_for_each(&mut check_one),
        TraversalDirection::Reverse => chain.iter().rev().try_for_each(&mut check_one),
    }
}
