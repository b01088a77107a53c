//! DTOs for the upstream employee directory's JSON envelopes.
//!
//! The directory wraps every payload as `{status, data}`. Numeric fields may
//! arrive as JSON numbers or numeric strings, and `id` may be either, so the
//! record DTO normalises both before mapping into domain records.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Employee, EmployeeId, NewEmployee};

#[derive(Debug, Deserialize)]
pub(super) struct CollectionEnvelopeDto {
    #[serde(default)]
    pub(super) status: String,
    #[serde(default)]
    pub(super) data: Option<Vec<EmployeeRecordDto>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ItemEnvelopeDto {
    #[serde(default)]
    pub(super) status: String,
    #[serde(default)]
    pub(super) data: Value,
}

#[derive(Debug, Deserialize)]
pub(super) struct EmployeeRecordDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub(super) id: String,
    #[serde(alias = "name")]
    pub(super) employee_name: String,
    #[serde(alias = "salary", deserialize_with = "deserialize_u64")]
    pub(super) employee_salary: u64,
    #[serde(alias = "age", deserialize_with = "deserialize_u32")]
    pub(super) employee_age: u32,
    #[serde(default)]
    pub(super) profile_image: Option<String>,
}

/// Creation payload sent to the directory.
#[derive(Debug, Serialize)]
pub(super) struct CreateEmployeeDto<'a> {
    pub(super) employee_name: &'a str,
    pub(super) employee_salary: u64,
    pub(super) employee_age: u32,
}

impl<'a> From<&'a NewEmployee> for CreateEmployeeDto<'a> {
    fn from(employee: &'a NewEmployee) -> Self {
        Self {
            employee_name: employee.name(),
            employee_salary: employee.salary(),
            employee_age: employee.age(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(number) => Ok(number.to_string()),
        NumberOrText::Text(text) => Ok(text),
    }
}

fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(number) => number
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("expected unsigned integer, got {number}"))),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| de::Error::custom(format!("expected numeric string, got {text:?}"))),
    }
}

fn deserialize_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_u64(deserializer)?;
    u32::try_from(value).map_err(|_| de::Error::custom(format!("value {value} out of range")))
}

impl CollectionEnvelopeDto {
    pub(super) fn into_domain_employees(self) -> Result<Vec<Employee>, String> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(EmployeeRecordDto::into_domain_employee)
            .collect()
    }
}

impl ItemEnvelopeDto {
    /// Decode the record, or `None` when `data` is null, absent or `{}`.
    pub(super) fn into_domain_employee(self) -> Result<Option<Employee>, String> {
        let is_empty = match &self.data {
            Value::Null => true,
            Value::Object(fields) => fields.is_empty(),
            _ => false,
        };
        if is_empty {
            return Ok(None);
        }
        let record: EmployeeRecordDto = serde_json::from_value(self.data)
            .map_err(|error| format!("invalid employee record: {error}"))?;
        record.into_domain_employee().map(Some)
    }
}

impl EmployeeRecordDto {
    fn into_domain_employee(self) -> Result<Employee, String> {
        let id = EmployeeId::new(self.id)
            .map_err(|error| format!("employee record {:?}: {error}", self.employee_name))?;
        Ok(Employee::new(
            id,
            self.employee_name,
            self.employee_salary,
            self.employee_age,
        )
        .with_profile_image(self.profile_image))
    }
}
