//! Disposition model.
//!
//! A disposition is the single outcome assigned to each roster row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classification outcome for one employee.
///
/// Exactly one disposition is assigned per record and it is never revisited.
///
/// # Example
///
/// ```
/// use benefit_eligibility::models::Disposition;
///
/// assert_eq!(Disposition::NeedsReview.label(), "확인필요");
/// assert!(Disposition::NeedsReview.is_retained());
/// assert!(!Disposition::Excluded.is_retained());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// The employee receives the payout.
    Eligible,
    /// Status data looks stale; a person should confirm before paying.
    NeedsReview,
    /// The employee does not receive the payout and is dropped from output.
    Excluded,
}

impl Disposition {
    /// Returns the label written to the exported table.
    pub fn label(self) -> &'static str {
        match self {
            Disposition::Eligible => "대상",
            Disposition::NeedsReview => "확인필요",
            Disposition::Excluded => "제외",
        }
    }

    /// Returns true if rows with this disposition appear in the output.
    pub fn is_retained(self) -> bool {
        !matches!(self, Disposition::Excluded)
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
