//! Result and failure carriers for certification path building

pub mod failure_report;

pub use crate::builder::failure_report::*;
