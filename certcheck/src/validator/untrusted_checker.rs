//! Certification path step that rejects certificates reported by a distrust source

use alloc::format;

use x509_cert::Certificate;

use crate::environment::pki_environment::PkiEnvironment;
use crate::util::error::*;
use crate::util::logging::*;
use crate::util::pdv_utilities::subject_to_string;
use crate::validator::path_checker::*;

/// [`UntrustedChecker`] consults the [`DistrustSource`](crate::DistrustSource) objects registered
/// with a [`PkiEnvironment`] and fails when any of them reports a certificate as distrusted.
///
/// Each call to [`check`](CertPathChecker::check) inspects exactly one certificate and no state is
/// carried from one certificate to the next, so the checker works in either traversal direction.
/// It resolves no extensions.
pub struct UntrustedChecker<'a> {
    pe: &'a PkiEnvironment,
    direction: Option<TraversalDirection>,
}

impl<'a> UntrustedChecker<'a> {
    /// Creates a new, uninitialized [`UntrustedChecker`]
    pub fn new(pe: &'a PkiEnvironment) -> Self {
        UntrustedChecker {
            pe,
            direction: None,
        }
    }

    /// Returns the direction passed to the most recent init call, if any
    pub fn direction(&self) -> Option<TraversalDirection> {
        self.direction
    }
}

impl CertPathChecker for UntrustedChecker<'_> {
    fn init(&mut self, direction: TraversalDirection) -> Result<()> {
        self.direction = Some(direction);
        Ok(())
    }

    fn is_forward_checking_supported(&self) -> bool {
        true
    }

    fn supported_extensions(&self) -> Option<&ObjectIdentifierSet> {
        None
    }

    fn check(
        &mut self,
        cert: &Certificate,
        _unresolved_crit_exts: &mut ObjectIdentifierSet,
    ) -> Result<()> {
        if self.direction.is_none() {
            return Err(Error::NotInitialized);
        }

        let subject = subject_to_string(cert);
        if self.pe.is_distrusted(cert) {
            log_message(
                &PeLogLevels::PeError,
                format!("Untrusted certificate: {}", subject).as_str(),
            );
            return Err(Error::UntrustedCertificate(subject));
        }

        log_message(
            &PeLogLevels::PeDebug,
            format!("UntrustedChecker: {} is not distrusted", subject).as_str(),
        );
        Ok(())
    }
}
