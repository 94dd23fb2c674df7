//! The pki_environment_traits module features trait definitions and type definitions that are used
//! by [`PkiEnvironment`](crate::PkiEnvironment) to supply the lookups that certificate checking
//! depends upon but does not implement.

use der::asn1::ObjectIdentifier;
use x509_cert::anchor::TrustAnchorChoice;
use x509_cert::Certificate;

/// `IsNonceExtension` implementations take the identifier of an extension and return true if the
/// extension is an OCSP nonce extension.
pub type IsNonceExtension = fn(&ObjectIdentifier) -> bool;

/// The [`TrustAnchorClassifier`] trait enables trait objects to report whether a trust anchor is
/// one of the roots bundled with the platform, i.e., a hard-coded list, a system store accessed
/// via FFI, etc.
pub trait TrustAnchorClassifier {
    /// is_recognized_root returns true if the presented trust anchor is a recognized platform root.
    fn is_recognized_root(&self, anchor: &TrustAnchorChoice) -> bool;
}

/// The [`DistrustSource`] trait enables trait objects to report whether a certificate has been
/// explicitly distrusted, i.e., appears on a blocklist.
pub trait DistrustSource {
    /// is_distrusted returns true if the presented certificate must not be relied upon.
    fn is_distrusted(&self, cert: &Certificate) -> bool;
}
