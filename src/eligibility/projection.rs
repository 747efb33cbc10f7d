//! Output projection.
//!
//! Drops excluded rows and keeps the five export columns, preserving the
//! input order of what remains.

use crate::models::{ClassifiedRecord, Disposition, EmployeeRecord};

/// Keeps eligible and needs-review rows, projected to the output fields.
///
/// The filter is stable: retained rows keep their relative input order.
///
/// # Example
///
/// ```
/// use benefit_eligibility::eligibility::project_retained;
/// use benefit_eligibility::models::{Disposition, EmployeeRecord};
///
/// let rows = vec![
///     (EmployeeRecord { employee_id: Some("1".into()), ..Default::default() }, Disposition::Excluded),
///     (EmployeeRecord { employee_id: Some("2".into()), ..Default::default() }, Disposition::NeedsReview),
/// ];
///
/// let retained = project_retained(rows);
/// assert_eq!(retained.len(), 1);
/// assert_eq!(retained[0].employee_id.as_deref(), Some("2"));
/// ```
pub fn project_retained<I>(classified: I) -> Vec<ClassifiedRecord>
where
    I: IntoIterator<Item = (EmployeeRecord, Disposition)>,
{
    classified
        .into_iter()
        .filter(|(_, disposition)| disposition.is_retained())
        .map(|(record, disposition)| ClassifiedRecord::project(record, disposition))
        .collect()
}
