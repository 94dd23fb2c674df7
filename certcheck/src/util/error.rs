//! Error types

use alloc::string::String;
use core::fmt;

/// Result type
pub type Result<T> = core::result::Result<T, Error>;

/// Status codes recorded for a certificate checking pass
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum PathValidationStatus {
    /// MissingTrustAnchor occurs when a certification path has no trust anchor.
    MissingTrustAnchor,
    /// NoPathsFound occurs when the certification path builder fails to find any candidate paths.
    NoPathsFound,
    /// A configuration error was detected. See textual log output for more details.
    Misconfiguration,
}

/// Error type
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// PathValidationError encountered
    PathValidation(PathValidationStatus),
    /// A certificate was flagged by a distrust source. The value is the subject name of the
    /// certificate.
    UntrustedCertificate(String),
    /// A certification path checker was used before it was initialized.
    NotInitialized,
    /// Unrecognized occurs when an error conditions does not match anything else here.
    Unrecognized,
    /// An artifact did not conform to length requirements
    LengthError,
    /// An artifact could not be parsed
    ParseError,
    /// Asn1Error is used to propagate encoding and decoding errors from the der crate.
    Asn1Error(der::Error),
    /// Error encapsulates an error derived from [std::io::ErrorKind]
    #[cfg(feature = "std")]
    StdIoError(std::io::ErrorKind),
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Asn1Error(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::StdIoError(err.kind())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for PathValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathValidationStatus::MissingTrustAnchor => write!(f, "MissingTrustAnchor"),
            PathValidationStatus::NoPathsFound => write!(f, "NoPathsFound"),
            PathValidationStatus::Misconfiguration => write!(f, "Misconfiguration"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PathValidation(err) => write!(f, "PathValidationError: {}", err),
            Error::UntrustedCertificate(subject) => write!(f, "Untrusted certificate: {}", subject),
            Error::NotInitialized => write!(f, "NotInitialized"),
            Error::Unrecognized => write!(f, "Unrecognized"),
            Error::LengthError => write!(f, "LengthError"),
            Error::ParseError => write!(f, "ParseError"),
            Error::Asn1Error(err) => write!(f, "Asn1Error: {}", err),
            #[cfg(feature = "std")]
            Error::StdIoError(err) => write!(f, "StdError: {:?}", err),
        }
    }
}

#[test]
fn error_test() {
    use alloc::format;
    use alloc::string::ToString;

    let _s = format!("{}", PathValidationStatus::MissingTrustAnchor);
    let _s = format!("{}", PathValidationStatus::NoPathsFound);
    let _s = format!("{}", PathValidationStatus::Misconfiguration);
    assert_eq!(
        "MissingTrustAnchor",
        format!("{}", PathValidationStatus::MissingTrustAnchor)
    );

    let _s = format!("{}", Error::Unrecognized);
    let _s = format!("{}", Error::LengthError);
    let _s = format!("{}", Error::ParseError);
    let _s = format!("{}", Error::NotInitialized);
    assert_eq!(
        "PathValidationError: NoPathsFound",
        format!(
            "{}",
            Error::PathValidation(PathValidationStatus::NoPathsFound)
        )
    );
    assert_eq!(
        "Untrusted certificate: CN=Bad Actor",
        format!("{}", Error::UntrustedCertificate("CN=Bad Actor".to_string()))
    );
    let e: Error = der::Error::from(der::ErrorKind::Failed).into();
    assert!(matches!(e, Error::Asn1Error(_)));
}
