//! Test Data Builders
//!
//! Builders let a test state only the fields it cares about and take the
//! standard values for everything else.

use core_kernel::{Amount, Identity};
use domain_policy::PolicyTerms;

use crate::fixtures::{STANDARD_COVERAGE, STANDARD_DURATION_SECS, STANDARD_PREMIUM};

/// Builder for policy terms
#[derive(Debug, Clone)]
pub struct PolicyTermsBuilder {
    holder: Identity,
    premium: Amount,
    coverage: Amount,
    duration_secs: u64,
}

impl PolicyTermsBuilder {
    /// Starts from the standard terms for `holder`
    pub fn new(holder: Identity) -> Self {
        Self {
            holder,
            premium: Amount::from(STANDARD_PREMIUM),
            coverage: Amount::from(STANDARD_COVERAGE),
            duration_secs: STANDARD_DURATION_SECS,
        }
    }

    /// Sets the premium
    pub fn premium(mut self, premium: impl Into<Amount>) -> Self {
        self.premium = premium.into();
        self
    }

    /// Sets the coverage
    pub fn coverage(mut self, coverage: impl Into<Amount>) -> Self {
        self.coverage = coverage.into();
        self
    }

    /// Sets the duration
    pub fn duration_secs(mut self, duration_secs: u64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Builds the terms
    pub fn build(self) -> PolicyTerms {
        PolicyTerms::new(self.holder, self.premium, self.coverage, self.duration_secs)
    }
}
