//! Reference time used when checking a certificate or key against constraints

use core::{cmp::Ordering, fmt, time::Duration};

/// Time of interest for a checking operation, i.e., the validity check time or the timestamp of a
/// signed artifact.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct TimeOfInterest(pub der::DateTime);

impl fmt::Display for TimeOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TimeOfInterest {
    /// Make [`TimeOfInterest`] where checks are disabled
    pub fn disabled() -> Self {
        TimeOfInterest(
            der::DateTime::from_unix_duration(Duration::ZERO)
                // NOTE(safety): only values before 1970 or values after 9999 would be throwing errors
                .expect("Could not create a DateTime from Unix Epoch"),
        )
    }

    /// Should time checks be disabled?
    pub fn is_disabled(&self) -> bool {
        self.0.unix_duration() == Duration::ZERO
    }

    /// Create a [`TimeOfInterest`] from Unix epoch
    pub fn from_unix_secs(v: u64) -> der::Result<Self> {
        Ok(Self(der::DateTime::from_unix_duration(
            Duration::from_secs(v),
        )?))
    }

    /// Return Unix epoch (in seconds) for this value
    pub fn as_unix_secs(&self) -> u64 {
        self.0.unix_duration().as_secs()
    }

    /// Returns None for 0, else a [`TimeOfInterest`] for the given number of seconds since the
    /// Unix epoch.
    pub fn from_setting(v: u64) -> der::Result<Option<Self>> {
        if 0 == v {
            Ok(None)
        } else {
            Ok(Some(Self::from_unix_secs(v)?))
        }
    }
}

impl Default for TimeOfInterest {
    fn default() -> Self {
        Self::disabled()
    }
}

impl PartialEq<x509_cert::time::Time> for TimeOfInterest {
    fn eq(&self, other: &x509_cert::time::Time) -> bool {
        self.0.eq(&other.to_date_time())
    }
}

impl PartialOrd<x509_cert::time::Time> for TimeOfInterest {
    fn partial_cmp(&self, other: &x509_cert::time::Time) -> Option<Ordering> {
        self.0.partial_cmp(&other.to_date_time())
    }
}

#[test]
fn time_of_interest_test() {
    let toi = TimeOfInterest::from_unix_secs(1_700_000_000).unwrap();
    assert_eq!(1_700_000_000, toi.as_unix_secs());
    assert!(!toi.is_disabled());
    assert!(TimeOfInterest::disabled().is_disabled());
    assert!(TimeOfInterest::from_setting(0).unwrap().is_none());
    assert_eq!(Some(toi), TimeOfInterest::from_setting(1_700_000_000).unwrap());
}
