#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod args;
mod ocsp_utils;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::args::*;
use crate::ocsp_utils::*;

/// Configures log4rs using the file named by the logging_config argument or, absent that, a
/// console logger writing to stderr so that stdout carries only the request.
fn configure_logging(args: &OcsptoolArgs) {
    if let Some(logging_config) = &args.logging_config {
        if let Err(e) = log4rs::init_file(logging_config, Default::default()) {
            eprintln!(
                "ERROR: failed to configure logging using {} with {:?}. Continuing without logging.",
                logging_config, e
            );
        } else {
            return;
        }
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();
    match Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
    {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!(
                    "ERROR: failed to configure logging for stderr with {:?}. Continuing without logging.",
                    e
                );
            }
        }
        Err(e) => {
            eprintln!(
                "ERROR: failed to prepare default logging configuration with {:?}. Continuing without logging",
                e
            );
        }
    }
}

/// Point of entry for ocsptool application.
fn main() -> ExitCode {
    let args = OcsptoolArgs::parse();
    configure_logging(&args);
    debug!("ocsptool start");

    let r = prepare_request(&args).and_then(|(enc_req, _nonce)| write_request(&args, &enc_req));
    debug!("ocsptool end");
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to prepare OCSP request: {}", e);
            ExitCode::FAILURE
        }
    }
}
