//! Checks and context objects used while processing a certification path

pub mod constraints_parameters;
pub mod path_checker;
pub mod path_settings;
pub mod untrusted_checker;

pub use crate::{
    validator::constraints_parameters::*, validator::path_checker::*,
    validator::path_settings::*, validator::untrusted_checker::*,
};
