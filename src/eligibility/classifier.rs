//! Per-row eligibility classification.
//!
//! Rules are evaluated in a fixed priority order and the first match wins:
//!
//! 1. Retired status → [`Disposition::Excluded`]
//! 2. Termination date before the reference date → [`Disposition::NeedsReview`]
//! 3. Denylisted name, intern, duplicated name, or recent/unknown hire →
//!    [`Disposition::Excluded`]; otherwise [`Disposition::Eligible`]

use chrono::NaiveDate;

use crate::config::EligibilityRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{Disposition, EmployeeRecord};

use super::NameFrequencyTable;

/// The batch-wide inputs shared by every row of one run.
///
/// # Example
///
/// ```
/// use benefit_eligibility::eligibility::ClassificationContext;
/// use chrono::NaiveDate;
///
/// let context = ClassificationContext::new(NaiveDate::from_ymd_opt(2025, 4, 3).unwrap()).unwrap();
/// assert_eq!(context.tenure_threshold(), NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationContext {
    rules: EligibilityRules,
    reference_date: NaiveDate,
    tenure_threshold: NaiveDate,
}

impl ClassificationContext {
    /// Creates a context for the standard rule set.
    pub fn new(reference_date: NaiveDate) -> EngineResult<Self> {
        Self::with_rules(reference_date, EligibilityRules::STANDARD)
    }

    /// Creates a context for an explicit rule set.
    ///
    /// Fails only if the tenure threshold falls outside chrono's date range.
    pub fn with_rules(reference_date: NaiveDate, rules: EligibilityRules) -> EngineResult<Self> {
        let tenure_threshold = rules
            .tenure_threshold(reference_date)
            .ok_or(EngineError::InvalidReferenceDate {
                date: reference_date,
            })?;

        Ok(Self {
            rules,
            reference_date,
            tenure_threshold,
        })
    }

    /// Returns the reference date of the run.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Returns the earliest hire date that counts as a recent hire.
    pub fn tenure_threshold(&self) -> NaiveDate {
        self.tenure_threshold
    }

    /// Returns the rule constants in effect.
    pub fn rules(&self) -> &EligibilityRules {
        &self.rules
    }
}

/// Assigns exactly one disposition to a record.
///
/// # Examples
///
/// ```
/// use benefit_eligibility::eligibility::{classify_record, ClassificationContext, NameFrequencyTable};
/// use benefit_eligibility::models::{Disposition, EmployeeRecord};
/// use chrono::NaiveDate;
///
/// let context = ClassificationContext::new(NaiveDate::from_ymd_opt(2025, 4, 3).unwrap()).unwrap();
/// let frequencies = NameFrequencyTable::from_names(["Alice.Lee"]);
///
/// let record = EmployeeRecord {
///     internal_name: Some("Alice.Lee".to_string()),
///     employment_status: Some("재직".to_string()),
///     position: Some("Engineer".to_string()),
///     hire_date: NaiveDate::from_ymd_opt(2024, 9, 1),
///     ..Default::default()
/// };
///
/// assert_eq!(classify_record(&record, &context, &frequencies), Disposition::Eligible);
/// ```
pub fn classify_record(
    record: &EmployeeRecord,
    context: &ClassificationContext,
    frequencies: &NameFrequencyTable,
) -> Disposition {
    if is_retired(record, context) {
        return Disposition::Excluded;
    }

    if is_pending_termination(record, context) {
        return Disposition::NeedsReview;
    }

    if is_excluded(record, context, frequencies) {
        Disposition::Excluded
    } else {
        Disposition::Eligible
    }
}

fn is_retired(record: &EmployeeRecord, context: &ClassificationContext) -> bool {
    record.employment_status.as_deref() == Some(context.rules.retired_status)
}

fn is_pending_termination(record: &EmployeeRecord, context: &ClassificationContext) -> bool {
    record
        .termination_date
        .is_some_and(|date| date < context.reference_date)
}

fn is_excluded(
    record: &EmployeeRecord,
    context: &ClassificationContext,
    frequencies: &NameFrequencyTable,
) -> bool {
    let rules = &context.rules;
    let internal_name = record.internal_name.as_deref();

    let denylisted = internal_name.is_some_and(|name| rules.is_denylisted(name));
    let intern = record.position.as_deref() == Some(rules.intern_position);
    let duplicated = internal_name.is_some_and(|name| frequencies.is_duplicated(name));

    denylisted || intern || duplicated || is_recent_hire(record, context)
}

/// A missing hire date counts as not tenured; the threshold itself is inclusive.
fn is_recent_hire(record: &EmployeeRecord, context: &ClassificationContext) -> bool {
    match record.hire_date {
        None => true,
        Some(hire_date) => hire_date >= context.tenure_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn context() -> ClassificationContext {
        ClassificationContext::new(date(2025, 4, 3)).unwrap()
    }

    /// A record that passes every rule against a 2025-04-03 reference date.
    fn clean_record(name: &str) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: Some("1001".to_string()),
            full_name: Some("이지은".to_string()),
            internal_name: Some(name.to_string()),
            english_name: Some(name.to_string()),
            employment_status: Some("재직".to_string()),
            position: Some("Engineer".to_string()),
            hire_date: Some(date(2024, 9, 1)),
            termination_date: None,
        }
    }

    fn classify(record: &EmployeeRecord) -> Disposition {
        let frequencies = NameFrequencyTable::from_names(record.english_name.clone());
        classify_record(record, &context(), &frequencies)
    }

    #[test]
    fn test_clean_record_is_eligible() {
        assert_eq!(classify(&clean_record("Alice.Lee")), Disposition::Eligible);
    }

    #[test]
    fn test_retired_is_excluded_even_with_past_termination() {
        let mut record = clean_record("Alice.Lee");
        record.employment_status = Some("퇴직".to_string());
        record.termination_date = Some(date(2025, 3, 1));

        assert_eq!(classify(&record), Disposition::Excluded);
    }

    #[test]
    fn test_retired_marker_is_exact() {
        let mut record = clean_record("Alice.Lee");
        record.employment_status = Some("퇴직 예정".to_string());
        assert_eq!(classify(&record), Disposition::Eligible);
    }

    #[test]
    fn test_past_termination_needs_review() {
        let mut record = clean_record("Alice.Lee");
        record.termination_date = Some(date(2025, 3, 1));
        assert_eq!(classify(&record), Disposition::NeedsReview);
    }

    #[test]
    fn test_past_termination_beats_composite_exclusions() {
        let mut record = clean_record("TEST HR");
        record.position = Some("Intern".to_string());
        record.hire_date = None;
        record.termination_date = Some(date(2025, 4, 2));

        assert_eq!(classify(&record), Disposition::NeedsReview);
    }

    #[test]
    fn test_termination_on_reference_date_is_not_pending() {
        let mut record = clean_record("Alice.Lee");
        record.termination_date = Some(date(2025, 4, 3));
        assert_eq!(classify(&record), Disposition::Eligible);
    }

    #[test]
    fn test_future_termination_is_ignored() {
        let mut record = clean_record("Alice.Lee");
        record.termination_date = Some(date(2025, 12, 31));
        assert_eq!(classify(&record), Disposition::Eligible);
    }

    #[test]
    fn test_denylisted_names_are_excluded() {
        for name in ["Jake.Kim", "Jae.Kim", "TEST HR"] {
            assert_eq!(classify(&clean_record(name)), Disposition::Excluded, "{name}");
        }
    }

    #[test]
    fn test_intern_is_excluded() {
        let mut record = clean_record("Alice.Lee");
        record.position = Some("Intern".to_string());
        assert_eq!(classify(&record), Disposition::Excluded);
    }

    #[test]
    fn test_intern_marker_is_exact() {
        let mut record = clean_record("Alice.Lee");
        record.position = Some("intern".to_string());
        assert_eq!(classify(&record), Disposition::Eligible);
    }

    #[test]
    fn test_duplicated_name_is_excluded() {
        let record = clean_record("Alice.Lee");
        let frequencies = NameFrequencyTable::from_names(["Alice.Lee", "Alice.Lee"]);
        assert_eq!(
            classify_record(&record, &context(), &frequencies),
            Disposition::Excluded
        );
    }

    #[test]
    fn test_duplicate_lookup_uses_internal_name_against_english_counts() {
        let mut record = clean_record("Alice.Lee");
        record.english_name = Some("Alice Lee".to_string());

        // Counts are keyed by english name; the internal name is the lookup key.
        let frequencies = NameFrequencyTable::from_names(["Alice Lee", "Alice Lee"]);
        assert_eq!(
            classify_record(&record, &context(), &frequencies),
            Disposition::Eligible
        );

        let frequencies = NameFrequencyTable::from_names(["Alice.Lee", "Alice.Lee"]);
        assert_eq!(
            classify_record(&record, &context(), &frequencies),
            Disposition::Excluded
        );
    }

    #[test]
    fn test_missing_internal_name_is_not_a_duplicate() {
        let mut record = clean_record("Alice.Lee");
        record.internal_name = None;
        let frequencies = NameFrequencyTable::from_names(["Alice.Lee", "Alice.Lee"]);
        assert_eq!(
            classify_record(&record, &context(), &frequencies),
            Disposition::Eligible
        );
    }

    #[test]
    fn test_missing_hire_date_is_excluded() {
        let mut record = clean_record("Alice.Lee");
        record.hire_date = None;
        assert_eq!(classify(&record), Disposition::Excluded);
    }

    #[test]
    fn test_hire_on_threshold_is_excluded() {
        let mut record = clean_record("Alice.Lee");
        record.hire_date = Some(date(2025, 1, 3));
        assert_eq!(classify(&record), Disposition::Excluded);
    }

    #[test]
    fn test_hire_day_before_threshold_is_eligible() {
        let mut record = clean_record("Alice.Lee");
        record.hire_date = Some(date(2025, 1, 2));
        assert_eq!(classify(&record), Disposition::Eligible);
    }

    #[test]
    fn test_threshold_clamps_at_month_end() {
        let context = ClassificationContext::new(date(2025, 5, 31)).unwrap();
        let frequencies = NameFrequencyTable::default();

        let mut record = clean_record("Alice.Lee");
        record.hire_date = Some(date(2025, 2, 28));
        assert_eq!(
            classify_record(&record, &context, &frequencies),
            Disposition::Excluded
        );

        record.hire_date = Some(date(2025, 2, 27));
        assert_eq!(
            classify_record(&record, &context, &frequencies),
            Disposition::Eligible
        );
    }

    #[test]
    fn test_context_rejects_unrepresentable_threshold() {
        let result = ClassificationContext::new(NaiveDate::MIN);
        assert!(matches!(
            result,
            Err(EngineError::InvalidReferenceDate { .. })
        ));
    }

    fn arbitrary_day() -> impl Strategy<Value = Option<NaiveDate>> {
        prop::option::of((2023i32..2027, 1u32..13, 1u32..29).prop_map(|(y, m, d)| date(y, m, d)))
    }

    fn arbitrary_record() -> impl Strategy<Value = EmployeeRecord> {
        let name = prop::option::of(prop::sample::select(vec![
            "Alice.Lee", "Min.Park", "TEST HR", "Jake.Kim", "Jae.Kim",
        ]));
        let status = prop::option::of(prop::sample::select(vec!["재직", "휴직", "퇴직"]));
        let position = prop::option::of(prop::sample::select(vec!["Engineer", "Intern", "Manager"]));
        (name, status, position, arbitrary_day(), arbitrary_day()).prop_map(
            |(name, status, position, hire_date, termination_date)| EmployeeRecord {
                employee_id: Some("1".to_string()),
                full_name: Some("임의".to_string()),
                internal_name: name.map(str::to_string),
                english_name: name.map(str::to_string),
                employment_status: status.map(str::to_string),
                position: position.map(str::to_string),
                hire_date,
                termination_date,
            },
        )
    }

    fn arbitrary_frequencies() -> impl Strategy<Value = NameFrequencyTable> {
        prop::collection::vec(
            prop::sample::select(vec!["Alice.Lee", "Min.Park", "TEST HR"]),
            0..6,
        )
        .prop_map(NameFrequencyTable::from_names)
    }

    proptest! {
        #[test]
        fn prop_retired_is_always_excluded(
            mut record in arbitrary_record(),
            frequencies in arbitrary_frequencies(),
        ) {
            record.employment_status = Some("퇴직".to_string());
            prop_assert_eq!(
                classify_record(&record, &context(), &frequencies),
                Disposition::Excluded
            );
        }

        #[test]
        fn prop_past_termination_always_needs_review(
            mut record in arbitrary_record(),
            frequencies in arbitrary_frequencies(),
            days_before in 1i64..2000,
        ) {
            prop_assume!(record.employment_status.as_deref() != Some("퇴직"));
            record.termination_date = Some(date(2025, 4, 3) - chrono::Duration::days(days_before));
            prop_assert_eq!(
                classify_record(&record, &context(), &frequencies),
                Disposition::NeedsReview
            );
        }

        #[test]
        fn prop_duplicates_are_excluded_together(
            mut first in arbitrary_record(),
            mut second in arbitrary_record(),
        ) {
            for record in [&mut first, &mut second] {
                record.employment_status = Some("재직".to_string());
                record.termination_date = None;
                record.internal_name = Some("Min.Park".to_string());
            }
            let frequencies = NameFrequencyTable::from_names(["Min.Park", "Min.Park"]);

            prop_assert_eq!(classify_record(&first, &context(), &frequencies), Disposition::Excluded);
            prop_assert_eq!(classify_record(&second, &context(), &frequencies), Disposition::Excluded);
        }
    }
}
