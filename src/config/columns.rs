//! Column keys of the employee roster.
//!
//! Input tables are matched against these exact header strings. Frequency
//! counting reads [`ENGLISH_NAME`] while identity checks read
//! [`INTERNAL_NAME`]; the two columns are deliberately distinct.

/// Employee number, passed through to the output.
pub const EMPLOYEE_ID: &str = "사번";

/// Display name, passed through to the output.
pub const FULL_NAME: &str = "이름";

/// Company-internal name used for denylist and duplicate checks.
pub const INTERNAL_NAME: &str = "회사 내 이름";

/// English name whose frequencies drive duplicate detection.
pub const ENGLISH_NAME: &str = "영문이름";

/// Employment status (e.g. "재직", "퇴직").
pub const EMPLOYMENT_STATUS: &str = "재직상태";

/// Job position.
pub const POSITION: &str = "직위";

/// Hire date.
pub const HIRE_DATE: &str = "입사일";

/// Termination date.
pub const TERMINATION_DATE: &str = "퇴직일";

/// Disposition column appended to the output table.
pub const DISPOSITION: &str = "지급대상여부";

/// Every column the classifier needs, in roster order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    EMPLOYEE_ID,
    FULL_NAME,
    INTERNAL_NAME,
    ENGLISH_NAME,
    EMPLOYMENT_STATUS,
    POSITION,
    HIRE_DATE,
    TERMINATION_DATE,
];

/// Columns coerced to dates by the normalizer.
pub const DATE_COLUMNS: [&str; 2] = [TERMINATION_DATE, HIRE_DATE];

/// Header of the exported table.
pub const OUTPUT_COLUMNS: [&str; 5] = [
    EMPLOYEE_ID,
    FULL_NAME,
    INTERNAL_NAME,
    HIRE_DATE,
    DISPOSITION,
];
