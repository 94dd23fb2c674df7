//! Carriers describing the outcome of a certification path building attempt
//!
//! A path builder explores sets of candidate issuer certificates. Each candidate it attempts either
//! leads to a further set of candidates, fails, or completes a path. [`FailureReport`] records
//! those attempts in the order the builder made them so that a failed build can be explained
//! after the fact. Reports are immutable once built.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use x509_cert::Certificate;

use crate::util::error::*;
use crate::util::pdv_utilities::{buffer_to_hex, subject_to_string};

/// Outcome of attempting a candidate certificate
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NextHop {
    /// The candidate was accepted and the builder moved on to the set at the given index
    Follow(usize),
    /// The candidate was rejected with the given error
    Fail(Error),
    /// The candidate completed a path to a trust anchor
    Succeed,
}

impl fmt::Display for NextHop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextHop::Follow(index) => write!(f, "follow set {}", index),
            NextHop::Fail(e) => write!(f, "failed: {}", e),
            NextHop::Succeed => write!(f, "succeeded"),
        }
    }
}

/// A single candidate certificate attempted by a path builder
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attempt {
    /// Subject name of the candidate certificate
    pub subject: String,
    /// Serial number of the candidate certificate as upper case hex
    pub serial: String,
    /// What happened when the candidate was attempted
    pub outcome: NextHop,
}

impl Attempt {
    /// Creates an [`Attempt`] for `cert`
    pub fn new(cert: &Certificate, outcome: NextHop) -> Self {
        Attempt {
            subject: subject_to_string(cert),
            serial: buffer_to_hex(cert.tbs_certificate.serial_number.as_bytes()),
            outcome,
        }
    }
}

/// [`FailureReport`] is an ordered list of candidate sets, each holding the attempts made from it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FailureReport {
    sets: Vec<Vec<Attempt>>,
}

impl FailureReport {
    /// Returns the candidate sets in the order the builder explored them
    pub fn sets(&self) -> &[Vec<Attempt>] {
        &self.sets
    }

    /// Returns true if no attempts were recorded
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(|s| s.is_empty())
    }

    /// Returns every attempt made for a certificate with the given subject name, in order
    pub fn attempts_for(&self, subject: &str) -> Vec<&Attempt> {
        self.sets
            .iter()
            .flatten()
            .filter(|a| a.subject == subject)
            .collect()
    }

    /// Returns true if any attempt completed a path
    pub fn succeeded(&self) -> bool {
        self.sets
            .iter()
            .flatten()
            .any(|a| a.outcome == NextHop::Succeed)
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, set) in self.sets.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Set {}:", i)?;
            for attempt in set {
                write!(
                    f,
                    "\n  {} (serial {}): {}",
                    attempt.subject, attempt.serial, attempt.outcome
                )?;
            }
        }
        Ok(())
    }
}

/// [`FailureReportBuilder`] accumulates attempts as a path builder runs and produces a [`FailureReport`].
#[derive(Default)]
pub struct FailureReportBuilder {
    sets: Vec<Vec<Attempt>>,
}

impl FailureReportBuilder {
    /// Creates an empty [`FailureReportBuilder`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new candidate set and returns its index
    pub fn begin_set(&mut self) -> usize {
        self.sets.push(Vec::new());
        self.sets.len() - 1
    }

    /// Records an attempt in the current candidate set, starting the first set if necessary
    pub fn record(&mut self, cert: &Certificate, outcome: NextHop) {
        if self.sets.is_empty() {
            self.begin_set();
        }
        let last = self.sets.len() - 1;
        self.sets[last].push(Attempt::new(cert, outcome));
    }

    /// Produces the report. Fails with [`Error::LengthError`] if an attempt refers to a set that
    /// was never started.
    pub fn build(self) -> Result<FailureReport> {
        let num_sets = self.sets.len();
        for attempt in self.sets.iter().flatten() {
            if let NextHop::Follow(index) = attempt.outcome {
                if index >= num_sets {
                    crate::log_message(
                        &crate::PeLogLevels::PeError,
                        format!(
                            "Attempt for {} refers to missing set {}",
                            attempt.subject, index
                        )
                        .as_str(),
                    );
                    return Err(Error::LengthError);
                }
            }
        }
        Ok(FailureReport { sets: self.sets })
    }
}

/// [`PathBuildFailure`] is returned by a path builder that could not find a valid path
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathBuildFailure {
    /// Overall reason for the failure
    pub status: PathValidationStatus,
    /// Attempts made before giving up
    pub report: FailureReport,
}

impl fmt::Display for PathBuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path building failed: {}", self.status)?;
        if !self.report.is_empty() {
            write!(f, "\n{}", self.report)?;
        }
        Ok(())
    }
}

/// [`PathBuildResult`] is returned by a path builder that found a valid path
#[derive(Clone, Debug)]
pub struct PathBuildResult {
    /// Certificates in the path, target first
    pub path: Vec<Certificate>,
    /// Attempts made while building the path
    pub report: FailureReport,
}
