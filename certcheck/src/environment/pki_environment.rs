//! PkiEnvironment aggregates a set of function pointers and trait objects that supply the lookups
//! used when checking certificates and preparing OCSP requests.
//!
//! The sample below illustrates preparation of a PkiEnvironment object with a distrust source.
//! ```
//! use certcheck::*;
//! use x509_cert::Certificate;
//!
//! struct NothingIsDistrusted;
//! impl DistrustSource for NothingIsDistrusted {
//!     fn is_distrusted(&self, _cert: &Certificate) -> bool {
//!         false
//!     }
//! }
//!
//! // the default PkiEnvironment uses `is_ocsp_nonce_extension` to recognize nonce extensions
//! let mut pe = PkiEnvironment::default();
//! pe.add_distrust_source(Box::new(NothingIsDistrusted));
//! assert!(pe.is_nonce_extension(&PKIX_OCSP_NONCE));
//! ```
//!
//! Components are handed a reference to a [`PkiEnvironment`] when they are constructed and consult
//! it rather than reaching for global state.

use alloc::boxed::Box;
use alloc::{vec, vec::Vec};

use der::asn1::ObjectIdentifier;
use x509_cert::anchor::TrustAnchorChoice;
use x509_cert::Certificate;

use crate::environment::pki_environment_traits::*;
use crate::util::pdv_alg_oids::PKIX_OCSP_NONCE;

/// `is_ocsp_nonce_extension` returns true if the given OID is id-pkix-ocsp-nonce.
pub fn is_ocsp_nonce_extension(oid: &ObjectIdentifier) -> bool {
    *oid == PKIX_OCSP_NONCE
}

/// [`PkiEnvironment`] provides a switchboard of callback functions and trait objects that allow
/// support to vary on different platforms or to be tailored for specific use cases.
pub struct PkiEnvironment {
    /// List of trait objects that classify trust anchors
    #[cfg(feature = "std")]
    trust_anchor_classifiers: Vec<Box<(dyn TrustAnchorClassifier + Send + Sync)>>,
    #[cfg(not(feature = "std"))]
    trust_anchor_classifiers: Vec<Box<(dyn TrustAnchorClassifier)>>,

    /// List of trait objects that report distrusted certificates
    #[cfg(feature = "std")]
    distrust_sources: Vec<Box<(dyn DistrustSource + Send + Sync)>>,
    #[cfg(not(feature = "std"))]
    distrust_sources: Vec<Box<(dyn DistrustSource)>>,

    /// List of functions that recognize nonce extensions
    nonce_matchers: Vec<IsNonceExtension>,
}

impl Default for PkiEnvironment {
    /// PkiEnvironment::default returns a new [`PkiEnvironment`] with empty callback vectors for each
    /// type of callback except `nonce_matchers`, which features the [`is_ocsp_nonce_extension`] function.
    fn default() -> Self {
        PkiEnvironment {
            trust_anchor_classifiers: vec![],
            distrust_sources: vec![],
            nonce_matchers: vec![is_ocsp_nonce_extension],
        }
    }
}

impl PkiEnvironment {
    /// PkiEnvironment::new returns a new [`PkiEnvironment`] with empty callback vectors for each type of callback
    pub fn new() -> PkiEnvironment {
        PkiEnvironment {
            trust_anchor_classifiers: vec![],
            distrust_sources: vec![],
            nonce_matchers: vec![],
        }
    }

    /// clear_all_callbacks clears the contents of all function pointer and trait object vectors
    /// associated with an instance of [`PkiEnvironment`].
    pub fn clear_all_callbacks(&mut self) {
        self.clear_trust_anchor_classifiers();
        self.clear_distrust_sources();
        self.clear_nonce_matchers();
    }

    /// add_trust_anchor_classifier adds a [`TrustAnchorClassifier`] object to the list used by is_recognized_root.
    #[cfg(feature = "std")]
    pub fn add_trust_anchor_classifier(&mut self, c: Box<(dyn TrustAnchorClassifier + Send + Sync)>) {
        self.trust_anchor_classifiers.push(c);
    }

    /// add_trust_anchor_classifier adds a [`TrustAnchorClassifier`] object to the list used by is_recognized_root.
    #[cfg(not(feature = "std"))]
    pub fn add_trust_anchor_classifier(&mut self, c: Box<(dyn TrustAnchorClassifier)>) {
        self.trust_anchor_classifiers.push(c);
    }

    /// clear_trust_anchor_classifiers clears the list of [`TrustAnchorClassifier`] objects used by is_recognized_root.
    pub fn clear_trust_anchor_classifiers(&mut self) {
        self.trust_anchor_classifiers.clear();
    }

    /// is_recognized_root returns true if any registered [`TrustAnchorClassifier`] recognizes the
    /// trust anchor as a platform root and false otherwise, including when none are registered.
    pub fn is_recognized_root(&self, anchor: &TrustAnchorChoice) -> bool {
        self.trust_anchor_classifiers
            .iter()
            .any(|c| c.is_recognized_root(anchor))
    }

    /// add_distrust_source adds a [`DistrustSource`] object to the list used by is_distrusted.
    #[cfg(feature = "std")]
    pub fn add_distrust_source(&mut self, c: Box<(dyn DistrustSource + Send + Sync)>) {
        self.distrust_sources.push(c);
    }

    /// add_distrust_source adds a [`DistrustSource`] object to the list used by is_distrusted.
    #[cfg(not(feature = "std"))]
    pub fn add_distrust_source(&mut self, c: Box<(dyn DistrustSource)>) {
        self.distrust_sources.push(c);
    }

    /// clear_distrust_sources clears the list of [`DistrustSource`] objects used by is_distrusted.
    pub fn clear_distrust_sources(&mut self) {
        self.distrust_sources.clear();
    }

    /// is_distrusted returns true if any registered [`DistrustSource`] reports the certificate as
    /// distrusted and false otherwise, including when none are registered.
    pub fn is_distrusted(&self, cert: &Certificate) -> bool {
        self.distrust_sources.iter().any(|s| s.is_distrusted(cert))
    }

    /// add_nonce_matcher adds an [`IsNonceExtension`] callback to the list used by is_nonce_extension.
    pub fn add_nonce_matcher(&mut self, c: IsNonceExtension) {
        self.nonce_matchers.push(c);
    }

    /// clear_nonce_matchers clears the list of [`IsNonceExtension`] callbacks used by is_nonce_extension.
    pub fn clear_nonce_matchers(&mut self) {
        self.nonce_matchers.clear();
    }

    /// is_nonce_extension iterates over nonce_matchers and returns true if any recognizes the OID.
    pub fn is_nonce_extension(&self, oid: &ObjectIdentifier) -> bool {
        self.nonce_matchers.iter().any(|f| f(oid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::Decode;

    struct EverythingIsDistrusted;
    impl DistrustSource for EverythingIsDistrusted {
        fn is_distrusted(&self, _cert: &Certificate) -> bool {
            true
        }
    }

    struct NoRoots;
    impl TrustAnchorClassifier for NoRoots {
        fn is_recognized_root(&self, _anchor: &TrustAnchorChoice) -> bool {
            false
        }
    }

    struct AllRoots;
    impl TrustAnchorClassifier for AllRoots {
        fn is_recognized_root(&self, _anchor: &TrustAnchorChoice) -> bool {
            true
        }
    }

    fn is_made_up_nonce(oid: &ObjectIdentifier) -> bool {
        *oid == ObjectIdentifier::new_unwrap("1.2.3.4")
    }

    #[test]
    fn nonce_matchers() {
        let made_up = ObjectIdentifier::new_unwrap("1.2.3.4");

        let mut pe = PkiEnvironment::default();
        assert!(pe.is_nonce_extension(&PKIX_OCSP_NONCE));
        assert!(!pe.is_nonce_extension(&made_up));

        pe.add_nonce_matcher(is_made_up_nonce);
        assert!(pe.is_nonce_extension(&made_up));

        pe.clear_nonce_matchers();
        assert!(!pe.is_nonce_extension(&PKIX_OCSP_NONCE));

        let pe = PkiEnvironment::new();
        assert!(!pe.is_nonce_extension(&PKIX_OCSP_NONCE));
    }

    #[test]
    fn oracles_aggregate() {
        let cert =
            Certificate::from_der(include_bytes!("../../tests/examples/ServerCert.der")).unwrap();
        let ta = TrustAnchorChoice::Certificate(
            Certificate::from_der(include_bytes!("../../tests/examples/TestRoot.der")).unwrap(),
        );

        let mut pe = PkiEnvironment::new();
        assert!(!pe.is_distrusted(&cert));
        assert!(!pe.is_recognized_root(&ta));

        pe.add_distrust_source(Box::new(EverythingIsDistrusted));
        pe.add_trust_anchor_classifier(Box::new(NoRoots));
        assert!(pe.is_distrusted(&cert));
        assert!(!pe.is_recognized_root(&ta));

        pe.add_trust_anchor_classifier(Box::new(AllRoots));
        assert!(pe.is_recognized_root(&ta));

        pe.clear_all_callbacks();
        assert!(!pe.is_distrusted(&cert));
        assert!(!pe.is_recognized_root(&ta));
    }
}
