//! Structures and functions related to configuring certificate checking operations

use serde::{Deserialize, Serialize};

use crate::validator::constraints_parameters::Variant;

#[cfg(feature = "std")]
use std::path::Path;

#[cfg(feature = "std")]
use crate::util::error::*;
#[cfg(feature = "std")]
use crate::util::logging::*;

/// `CertificationPathSettings` collects values that govern certificate checking operations. It is
/// typically deserialized from a JSON file via [`read_settings`].
///
/// Fields absent from the serialized form take their default values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationPathSettings {
    /// Time to use when checking certificates expressed as the number of seconds since the Unix
    /// epoch. Zero indicates no time of interest.
    pub time_of_interest: u64,

    /// Usage variant applied when a caller does not provide one.
    pub variant: Variant,

    /// Indicates whether OCSP requests prepared by tools should carry a nonce when none was
    /// provided by the user.
    pub require_nonce: bool,
}

impl CertificationPathSettings {
    /// Creates a new [`CertificationPathSettings`] with default values
    pub fn new() -> Self {
        Self::default()
    }
}

/// `read_settings` takes a path to a JSON file containing serialized [`CertificationPathSettings`]
/// and returns the deserialized value. When no path is given, default settings are returned.
#[cfg(feature = "std")]
pub fn read_settings(fname: Option<&str>) -> Result<CertificationPathSettings> {
    if let Some(fname) = fname {
        let json = std::fs::read(Path::new(fname))?;
        return match serde_json::from_slice(&json) {
            Ok(cps) => Ok(cps),
            Err(e) => {
                log_message(
                    &PeLogLevels::PeError,
                    alloc::format!("Failed to parse settings from {}: {}", fname, e).as_str(),
                );
                Err(Error::ParseError)
            }
        };
    }
    Ok(CertificationPathSettings::new())
}

#[test]
fn default_settings_test() {
    let cps = CertificationPathSettings::default();
    assert_eq!(0, cps.time_of_interest);
    assert_eq!(Variant::Generic, cps.variant);
    assert!(!cps.require_nonce);
}

#[cfg(feature = "std")]
#[test]
fn deserialize_settings_test() {
    let cps: CertificationPathSettings =
        serde_json::from_str(r#"{"time_of_interest": 1700000000, "variant": "tls server"}"#)
            .unwrap();
    assert_eq!(1700000000, cps.time_of_interest);
    assert_eq!(Variant::TlsServer, cps.variant);
    assert!(!cps.require_nonce);

    let json = serde_json::to_string(&cps).unwrap();
    assert!(json.contains("\"tls server\""));

    let r: serde_json::Result<CertificationPathSettings> =
        serde_json::from_str(r#"{"variant": "tls teapot"}"#);
    assert!(r.is_err());
}

#[cfg(feature = "std")]
#[test]
fn read_settings_test() {
    assert_eq!(CertificationPathSettings::default(), read_settings(None).unwrap());
    assert_eq!(
        Err(Error::StdIoError(std::io::ErrorKind::NotFound)),
        read_settings(Some("tests/examples/does_not_exist.json"))
    );
    let cps = read_settings(Some("tests/examples/settings.json")).unwrap();
    assert_eq!(Variant::CodeSigning, cps.variant);
    assert!(cps.require_nonce);
}
