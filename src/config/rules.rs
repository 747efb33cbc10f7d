//! Fixed business rules for benefit payout eligibility.
//!
//! The rules are constants of the system rather than external configuration.
//! They are grouped in [`EligibilityRules`] so a change touches one place.

use chrono::{Months, NaiveDate};

/// The constant inputs of the classification rules.
///
/// # Example
///
/// ```
/// use benefit_eligibility::config::EligibilityRules;
///
/// let rules = EligibilityRules::STANDARD;
/// assert!(rules.is_denylisted("TEST HR"));
/// assert!(!rules.is_denylisted("test hr"));
/// assert_eq!(rules.tenure_window_months, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityRules {
    /// Employment status marking a retired employee.
    pub retired_status: &'static str,
    /// Position marking an intern.
    pub intern_position: &'static str,
    /// Internal names reserved for test and service accounts.
    pub denylist: &'static [&'static str],
    /// Calendar months an employee must have been hired before the reference date.
    pub tenure_window_months: u32,
}

impl EligibilityRules {
    /// The rule set used for every payout run.
    ///
    /// "퇴직" is the retired marker written in the 재직상태 column of the
    /// source rosters. "Jake.Kim" and "Jae.Kim" are both kept; each may be a
    /// real identifier.
    pub const STANDARD: EligibilityRules = EligibilityRules {
        retired_status: "퇴직",
        intern_position: "Intern",
        denylist: &["Jake.Kim", "Jae.Kim", "TEST HR"],
        tenure_window_months: 3,
    };

    /// Returns true if the internal name is reserved (exact, case-sensitive match).
    pub fn is_denylisted(&self, internal_name: &str) -> bool {
        self.denylist.contains(&internal_name)
    }

    /// Returns the earliest hire date that still counts as a recent hire.
    ///
    /// The window is a calendar-month offset: days past the end of the target
    /// month clamp to its last day, so 2025-05-31 yields 2025-02-28.
    /// Returns `None` when the offset leaves the representable date range.
    ///
    /// # Example
    ///
    /// ```
    /// use benefit_eligibility::config::EligibilityRules;
    /// use chrono::NaiveDate;
    ///
    /// let reference = NaiveDate::from_ymd_opt(2025, 4, 3).unwrap();
    /// assert_eq!(
    ///     EligibilityRules::STANDARD.tenure_threshold(reference),
    ///     NaiveDate::from_ymd_opt(2025, 1, 3)
    /// );
    /// ```
    pub fn tenure_threshold(&self, reference_date: NaiveDate) -> Option<NaiveDate> {
        reference_date.checked_sub_months(Months::new(self.tenure_window_months))
    }
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self::STANDARD
    }
}
