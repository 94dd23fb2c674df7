//! Parameters describing a single algorithm constraints check
//!
//! An algorithm constraints evaluator decides whether the key(s) and algorithms used by a
//! certificate, CRL or OCSP response are acceptable. The evaluator is not part of this crate. This
//! module supplies the context it evaluates against: which key(s) are being checked, for which
//! usage [`Variant`], chaining to which trust anchor and at what date.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use spki::SubjectPublicKeyInfoOwned;
use x509_cert::anchor::TrustAnchorChoice;
use x509_cert::Certificate;

use crate::environment::pki_environment::PkiEnvironment;
use crate::util::error::*;
use crate::util::pdv_utilities::subject_to_string;
use crate::util::time_of_interest::TimeOfInterest;
use crate::validator::path_settings::CertificationPathSettings;

/// Usage context under which a certificate or key is evaluated.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// No particular usage
    #[default]
    #[serde(rename = "generic")]
    Generic,
    /// Code signing
    #[serde(rename = "code signing")]
    CodeSigning,
    /// Signed cryptographic provider
    #[serde(rename = "jce signing")]
    JceSigning,
    /// Browser plugin code signing
    #[serde(rename = "plugin code signing")]
    PluginCodeSigning,
    /// TLS client authentication
    #[serde(rename = "tls client")]
    TlsClient,
    /// TLS server authentication
    #[serde(rename = "tls server")]
    TlsServer,
    /// Time stamping authority
    #[serde(rename = "tsa server")]
    TsaServer,
}

impl Variant {
    /// Returns the string form of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Generic => "generic",
            Variant::CodeSigning => "code signing",
            Variant::JceSigning => "jce signing",
            Variant::PluginCodeSigning => "plugin code signing",
            Variant::TlsClient => "tls client",
            Variant::TlsServer => "tls server",
            Variant::TsaServer => "tsa server",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "generic" => Ok(Variant::Generic),
            "code signing" => Ok(Variant::CodeSigning),
            "jce signing" => Ok(Variant::JceSigning),
            "plugin code signing" => Ok(Variant::PluginCodeSigning),
            "tls client" => Ok(Variant::TlsClient),
            "tls server" => Ok(Variant::TlsServer),
            "tsa server" => Ok(Variant::TsaServer),
            _ => Err(Error::Unrecognized),
        }
    }
}

/// The [`ConstraintsParameters`] trait is the read-only view consumed by algorithm constraints
/// evaluators. Implementations are immutable values.
pub trait ConstraintsParameters {
    /// Returns true if the trust anchor is a recognized platform root. Always false when there is
    /// no trust anchor.
    fn anchor_is_platform_ca(&self) -> bool;

    /// Returns the key(s) being checked, which may be empty.
    fn keys(&self) -> Vec<&SubjectPublicKeyInfoOwned>;

    /// Returns the reference date, if any.
    fn date(&self) -> Option<TimeOfInterest>;

    /// Returns the usage variant.
    fn variant(&self) -> Variant;

    /// Returns a fragment to append to constraint violation messages.
    fn extended_exception_msg(&self) -> String;
}

/// [`CertPathConstraintsParameters`] describes a constraints check performed while processing a
/// certification path. It is built either from a certificate, in which case the key is the
/// certificate's subject public key, or from a bare key, for example when checking the signer of a
/// CRL or OCSP response. There is no way to build one that names a certificate but checks some other
/// key.
#[derive(Clone)]
pub struct CertPathConstraintsParameters<'a> {
    pe: &'a PkiEnvironment,
    key: Option<&'a SubjectPublicKeyInfoOwned>,
    variant: Variant,
    anchor: Option<&'a TrustAnchorChoice>,
    date: Option<TimeOfInterest>,
    certificate: Option<&'a Certificate>,
}

impl<'a> CertPathConstraintsParameters<'a> {
    /// Prepares parameters for checking `cert`. The generic variant is used when `variant` is None.
    pub fn from_certificate(
        pe: &'a PkiEnvironment,
        cert: &'a Certificate,
        variant: Option<Variant>,
        anchor: Option<&'a TrustAnchorChoice>,
        date: Option<TimeOfInterest>,
    ) -> Self {
        CertPathConstraintsParameters {
            pe,
            key: Some(&cert.tbs_certificate.subject_public_key_info),
            variant: variant.unwrap_or_default(),
            anchor,
            date,
            certificate: Some(cert),
        }
    }

    /// Prepares parameters for checking a key that is not accompanied by a certificate. The key set
    /// is empty when `key` is None. No date is associated with these parameters.
    pub fn from_key(
        pe: &'a PkiEnvironment,
        key: Option<&'a SubjectPublicKeyInfoOwned>,
        variant: Option<Variant>,
        anchor: Option<&'a TrustAnchorChoice>,
    ) -> Self {
        CertPathConstraintsParameters {
            pe,
            key,
            variant: variant.unwrap_or_default(),
            anchor,
            date: None,
            certificate: None,
        }
    }

    /// Prepares parameters for checking `cert` using the variant and time of interest from `cps`.
    pub fn from_settings(
        pe: &'a PkiEnvironment,
        cps: &CertificationPathSettings,
        cert: &'a Certificate,
        anchor: Option<&'a TrustAnchorChoice>,
    ) -> Result<Self> {
        let date = TimeOfInterest::from_setting(cps.time_of_interest)?;
        Ok(Self::from_certificate(
            pe,
            cert,
            Some(cps.variant),
            anchor,
            date,
        ))
    }

    /// Returns the certificate being checked, if any
    pub fn certificate(&self) -> Option<&'a Certificate> {
        self.certificate
    }

    /// Returns the trust anchor, if any
    pub fn trust_anchor(&self) -> Option<&'a TrustAnchorChoice> {
        self.anchor
    }
}

impl ConstraintsParameters for CertPathConstraintsParameters<'_> {
    fn anchor_is_platform_ca(&self) -> bool {
        match self.anchor {
            Some(anchor) => self.pe.is_recognized_root(anchor),
            None => false,
        }
    }

    fn keys(&self) -> Vec<&SubjectPublicKeyInfoOwned> {
        self.key.into_iter().collect()
    }

    fn date(&self) -> Option<TimeOfInterest> {
        self.date
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    fn extended_exception_msg(&self) -> String {
        match self.certificate {
            Some(cert) => format!(" used with certificate: {}", subject_to_string(cert)),
            None => ".".to_string(),
        }
    }
}

impl fmt::Display for CertPathConstraintsParameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ Variant: {}", self.variant)?;
        if let Some(cert) = self.certificate {
            write!(f, "\n  Certificate: {}", subject_to_string(cert))?;
        }
        if self.anchor.is_some() {
            write!(f, "\n  Has trust anchor")?;
        }
        if let Some(date) = self.date {
            write!(f, "\n  Date: {}", date)?;
        }
        write!(f, " ]")
    }
}

#[test]
fn variant_test() {
    for v in [
        Variant::Generic,
        Variant::CodeSigning,
        Variant::JceSigning,
        Variant::PluginCodeSigning,
        Variant::TlsClient,
        Variant::TlsServer,
        Variant::TsaServer,
    ] {
        assert_eq!(v, Variant::from_str(v.as_str()).unwrap());
    }
    assert_eq!("tls server", Variant::TlsServer.to_string());
    assert_eq!(Variant::Generic, Variant::default());
    assert_eq!(Err(Error::Unrecognized), Variant::from_str("TLS Server"));
}
