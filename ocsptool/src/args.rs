//! Arguments for the ocsptool utility

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Prepares DER-encoded OCSP requests
#[derive(Parser, Debug, Serialize, Deserialize, Default)]
#[command(arg_required_else_help(true))]
#[clap(author, version, about, long_about = None)]
pub struct OcsptoolArgs {
    /// Full path and filename of a binary DER-encoded or PEM-encoded certificate whose status is
    /// to be requested. May be repeated to request status for several certificates issued by the
    /// same CA, in which case requests appear in the order given.
    #[clap(short, long, required = true, help_heading = "REQUEST")]
    pub target: Vec<String>,

    /// Full path and filename of a binary DER-encoded or PEM-encoded certificate of the CA that
    /// issued the target certificate(s).
    #[clap(short, long, help_heading = "REQUEST")]
    pub issuer: String,

    /// Nonce value, expressed as ASCII hex, to include in the request. When absent, a random
    /// 32-byte nonce is generated if the settings file requires a nonce.
    #[clap(short, long, help_heading = "REQUEST")]
    pub nonce: Option<String>,

    /// Flag that indicates no nonce should be included even if the settings file requires one.
    #[clap(long, conflicts_with = "nonce", help_heading = "REQUEST")]
    pub no_nonce: bool,

    /// Full path and filename of JSON-formatted certification path settings.
    #[clap(short, long, help_heading = "COMMON OPTIONS")]
    pub settings: Option<String>,

    /// Full path and filename to receive the binary DER-encoded request. When absent, the request
    /// is written to stdout as ASCII hex.
    #[clap(short, long, help_heading = "COMMON OPTIONS")]
    pub output: Option<String>,

    /// Full path and filename of YAML-formatted configuration file for log4rs logging mechanism.
    /// See <https://docs.rs/log4rs/latest/log4rs/> for details.
    #[clap(short, long, help_heading = "COMMON OPTIONS")]
    pub logging_config: Option<String>,
}
