//! Employee records and the validated inputs that address or create them.
//!
//! Records are immutable once built. Inputs that reach the upstream
//! directory (`EmployeeId`, `NewEmployee`) can only be obtained through
//! validating constructors, so an adapter never sees a blank id or a
//! non-positive salary.

use std::fmt;

use thiserror::Error;

/// Validation failures for employee inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeValidationError {
    /// Identifier is empty once trimmed.
    #[error("employee id must not be empty")]
    EmptyId,
    /// Name is empty once trimmed.
    #[error("employee name must not be empty")]
    EmptyName,
    /// Salary is zero or negative.
    #[error("employee salary must be greater than zero")]
    NonPositiveSalary,
    /// Age is zero or negative.
    #[error("employee age must be greater than zero")]
    NonPositiveAge,
    /// Age does not fit the supported range.
    #[error("employee age must be at most {max}")]
    AgeOutOfRange { max: u32 },
}

/// Opaque employee identifier.
///
/// The upstream directory emits numeric and textual ids; both are held as
/// text and never used arithmetically.
///
/// # Examples
/// ```
/// use employee_gateway::domain::EmployeeId;
///
/// let id = EmployeeId::new("42").expect("valid id");
/// assert_eq!(id.as_str(), "42");
/// assert!(EmployeeId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Validate and wrap an identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, EmployeeValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyId);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Employee record as held by the upstream directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    salary: u64,
    age: u32,
    profile_image: Option<String>,
}

impl Employee {
    /// Build a record without a profile image.
    pub fn new(id: EmployeeId, name: impl Into<String>, salary: u64, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            age,
            profile_image: None,
        }
    }

    /// Attach a profile image reference; blank references are dropped.
    #[must_use]
    pub fn with_profile_image(mut self, profile_image: Option<String>) -> Self {
        self.profile_image = profile_image.filter(|image| !image.trim().is_empty());
        self
    }

    /// Upstream identifier.
    #[must_use]
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Salary in whole currency units.
    #[must_use]
    pub fn salary(&self) -> u64 {
        self.salary
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Optional profile image reference.
    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    /// Whether the name contains `needle_lowercase`, ignoring case.
    ///
    /// The needle must already be lowercase so repeated checks over a
    /// collection fold it once.
    #[must_use]
    pub fn name_contains_lowercase(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
    }
}

/// Creation payload submitted to the upstream directory.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `salary` and `age` are strictly positive.
///
/// # Examples
/// ```
/// use employee_gateway::domain::{EmployeeValidationError, NewEmployee};
///
/// let employee = NewEmployee::try_new("Raj", 70_000, 30).expect("valid input");
/// assert_eq!(employee.salary(), 70_000);
/// assert_eq!(
///     NewEmployee::try_new("Raj", 0, 30),
///     Err(EmployeeValidationError::NonPositiveSalary)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    name: String,
    salary: u64,
    age: u32,
}

impl NewEmployee {
    /// Validate raw creation input.
    ///
    /// Salary and age are accepted as signed integers so that negative
    /// values supplied by clients surface as validation failures.
    pub fn try_new(
        name: impl Into<String>,
        salary: i64,
        age: i64,
    ) -> Result<Self, EmployeeValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }
        let salary = u64::try_from(salary)
            .ok()
            .filter(|value| *value > 0)
            .ok_or(EmployeeValidationError::NonPositiveSalary)?;
        if age <= 0 {
            return Err(EmployeeValidationError::NonPositiveAge);
        }
        let age = u32::try_from(age)
            .map_err(|_| EmployeeValidationError::AgeOutOfRange { max: u32::MAX })?;
        Ok(Self { name, salary, age })
    }

    /// Submitted name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Submitted salary.
    #[must_use]
    pub fn salary(&self) -> u64 {
        self.salary
    }

    /// Submitted age.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn employee_id_rejects_blank_values(#[case] raw: &str) {
        assert_eq!(EmployeeId::new(raw), Err(EmployeeValidationError::EmptyId));
    }

    #[rstest]
    #[case::blank_name("  ", 1, 1, EmployeeValidationError::EmptyName)]
    #[case::zero_salary("Raj", 0, 30, EmployeeValidationError::NonPositiveSalary)]
    #[case::negative_salary("Raj", -5, 30, EmployeeValidationError::NonPositiveSalary)]
    #[case::zero_age("Raj", 70_000, 0, EmployeeValidationError::NonPositiveAge)]
    #[case::negative_age("Raj", 70_000, -1, EmployeeValidationError::NonPositiveAge)]
    #[case::huge_age(
        "Raj",
        70_000,
        i64::from(u32::MAX) + 1,
        EmployeeValidationError::AgeOutOfRange { max: u32::MAX }
    )]
    fn new_employee_rejects_invalid_input(
        #[case] name: &str,
        #[case] salary: i64,
        #[case] age: i64,
        #[case] expected: EmployeeValidationError,
    ) {
        assert_eq!(NewEmployee::try_new(name, salary, age), Err(expected));
    }

    #[rstest]
    fn new_employee_keeps_submitted_values() {
        let employee = NewEmployee::try_new("Chaitanya", 80_000, 25).expect("valid input");
        assert_eq!(employee.name(), "Chaitanya");
        assert_eq!(employee.salary(), 80_000);
        assert_eq!(employee.age(), 25);
    }

    #[rstest]
    #[case("ra", true)]
    #[case("RAJ", false)]
    #[case("hul", true)]
    #[case("x", false)]
    fn name_match_ignores_case(#[case] needle: &str, #[case] expected: bool) {
        let id = EmployeeId::new("1").expect("id");
        let employee = Employee::new(id, "Rahul", 60_000, 40);
        assert_eq!(
            employee.name_contains_lowercase(&needle.to_lowercase()),
            expected
        );
    }

    #[rstest]
    fn blank_profile_image_is_dropped() {
        let id = EmployeeId::new("1").expect("id");
        let employee = Employee::new(id, "Raj", 1, 1).with_profile_image(Some(" ".to_owned()));
        assert!(employee.profile_image().is_none());
    }
}
