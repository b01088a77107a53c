//! Reqwest-backed employee directory adapter.
//!
//! This adapter owns transport details only: request construction, timeout
//! and HTTP status mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, header};
use tracing::{debug, info, warn};

use super::dto::{CollectionEnvelopeDto, CreateEmployeeDto, ItemEnvelopeDto};
use super::endpoints::EmployeeApiEndpoints;
use crate::domain::ports::{
    EmployeeCollection, EmployeeDirectory, EmployeeDirectoryError, EmployeeItem,
};
use crate::domain::{Employee, EmployeeId, NewEmployee};

/// Status and body of one upstream exchange.
struct RawResponse {
    status: StatusCode,
    body: Vec<u8>,
}

/// Employee directory adapter performing one HTTP exchange per operation.
pub struct EmployeeApiHttpSource {
    client: Client,
    endpoints: EmployeeApiEndpoints,
}

impl EmployeeApiHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let source = EmployeeApiHttpSource::new(endpoints, Duration::from_secs(10));
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoints: EmployeeApiEndpoints, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoints })
    }

    async fn exchange(&self, request: RequestBuilder) -> Result<RawResponse, reqwest::Error> {
        let response = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[async_trait]
impl EmployeeDirectory for EmployeeApiHttpSource {
    async fn fetch_all(&self) -> Result<EmployeeCollection, EmployeeDirectoryError> {
        let url = self.endpoints.list_url().clone();
        debug!(%url, "fetching all employees from directory");
        let response = self
            .exchange(self.client.get(url.clone()))
            .await
            .map_err(|error| log_transport_error(error, url.as_str()))?;

        if response.status != StatusCode::OK {
            warn!(%url, status = response.status.as_u16(), "employee list request failed");
            return Err(map_status_error(response.status, &response.body));
        }

        let (status, employees) = parse_collection(&response.body)?;
        info!(%url, count = employees.len(), "fetched employees from directory");
        Ok(EmployeeCollection { status, employees })
    }

    async fn fetch_by_id(&self, id: &EmployeeId) -> Result<EmployeeItem, EmployeeDirectoryError> {
        let url = self.endpoints.item_url(id);
        debug!(%url, %id, "fetching employee from directory");
        let response = self
            .exchange(self.client.get(url.clone()))
            .await
            .map_err(|error| log_transport_error(error, url.as_str()))?;

        match response.status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                info!(%url, %id, "employee not found in directory");
                return Err(EmployeeDirectoryError::not_found(id.as_str()));
            }
            status => {
                warn!(%url, %id, status = status.as_u16(), "employee lookup failed");
                return Err(map_status_error(status, &response.body));
            }
        }

        let (status, employee) = parse_item(&response.body)?;
        let employee = employee.ok_or_else(|| {
            info!(%url, %id, "directory returned an empty employee payload");
            EmployeeDirectoryError::not_found(id.as_str())
        })?;
        Ok(EmployeeItem { status, employee })
    }

    async fn create(&self, employee: &NewEmployee) -> Result<EmployeeItem, EmployeeDirectoryError> {
        let url = self.endpoints.create_url().clone();
        debug!(%url, name = employee.name(), "creating employee in directory");
        let request = self
            .client
            .post(url.clone())
            .json(&CreateEmployeeDto::from(employee));
        let response = self
            .exchange(request)
            .await
            .map_err(|error| log_transport_error(error, url.as_str()))?;

        if response.status != StatusCode::CREATED {
            warn!(%url, status = response.status.as_u16(), "employee creation rejected");
            return Err(EmployeeDirectoryError::creation(status_message(
                response.status,
                &response.body,
            )));
        }

        let (status, created) = parse_item(&response.body)?;
        let created = created.ok_or_else(|| {
            warn!(%url, "directory accepted creation without returning a record");
            EmployeeDirectoryError::creation("directory returned no employee record")
        })?;
        info!(%url, id = %created.id(), "created employee in directory");
        Ok(EmployeeItem {
            status,
            employee: created,
        })
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeDirectoryError> {
        let url = self.endpoints.delete_url(id);
        debug!(%url, %id, "deleting employee from directory");
        let response = self
            .exchange(self.client.delete(url.clone()))
            .await
            .map_err(|error| {
                warn!(%url, %id, %error, "employee deletion transport failed");
                EmployeeDirectoryError::deletion(error.to_string())
            })?;

        match response.status {
            status if status.is_success() => {
                info!(%url, %id, "deleted employee from directory");
                Ok(())
            }
            StatusCode::NOT_FOUND => Err(EmployeeDirectoryError::not_found(id.as_str())),
            status => {
                warn!(%url, %id, status = status.as_u16(), "employee deletion failed");
                Err(EmployeeDirectoryError::deletion(status_message(
                    status,
                    &response.body,
                )))
            }
        }
    }
}

fn parse_collection(body: &[u8]) -> Result<(String, Vec<Employee>), EmployeeDirectoryError> {
    let decoded: CollectionEnvelopeDto = serde_json::from_slice(body).map_err(|error| {
        EmployeeDirectoryError::decode(format!("invalid employee list payload: {error}"))
    })?;
    let status = decoded.status.clone();
    let employees = decoded
        .into_domain_employees()
        .map_err(EmployeeDirectoryError::decode)?;
    Ok((status, employees))
}

fn parse_item(body: &[u8]) -> Result<(String, Option<Employee>), EmployeeDirectoryError> {
    let decoded: ItemEnvelopeDto = serde_json::from_slice(body).map_err(|error| {
        EmployeeDirectoryError::decode(format!("invalid employee payload: {error}"))
    })?;
    let status = decoded.status.clone();
    let employee = decoded
        .into_domain_employee()
        .map_err(EmployeeDirectoryError::decode)?;
    Ok((status, employee))
}

fn log_transport_error(error: reqwest::Error, url: &str) -> EmployeeDirectoryError {
    warn!(url, %error, timeout = error.is_timeout(), "employee directory unreachable");
    map_transport_error(error)
}

fn map_transport_error(error: reqwest::Error) -> EmployeeDirectoryError {
    if error.is_timeout() {
        EmployeeDirectoryError::transport(format!("request timed out: {error}"))
    } else {
        EmployeeDirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> EmployeeDirectoryError {
    EmployeeDirectoryError::status(status.as_u16(), body_preview(body))
}

fn status_message(status: StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn status_error_carries_code_and_compacted_body() {
        let error = map_status_error(
            StatusCode::TOO_MANY_REQUESTS,
            b"{\n  \"message\": \"Too Many Attempts.\"\n}",
        );
        assert_eq!(
            error,
            EmployeeDirectoryError::Status {
                status: 429,
                message: "{ \"message\": \"Too Many Attempts.\" }".to_owned(),
            }
        );
    }

    #[rstest]
    #[case(b"" as &[u8], "status 500")]
    #[case(b"oops", "status 500: oops")]
    fn status_message_omits_empty_body(#[case] body: &[u8], #[case] expected: &str) {
        assert_eq!(
            status_message(StatusCode::INTERNAL_SERVER_ERROR, body),
            expected
        );
    }

    #[rstest]
    fn body_preview_truncates_long_bodies() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[rstest]
    fn parse_collection_reports_decode_errors() {
        let error = parse_collection(b"<html>").expect_err("not json");
        assert!(matches!(error, EmployeeDirectoryError::Decode { .. }));
    }

    #[rstest]
    fn parse_item_keeps_upstream_status() {
        let body = br#"{"status":"success","data":{"id":7,"employee_name":"Raj",
            "employee_salary":70000,"employee_age":30,"profile_image":""}}"#;
        let (status, employee) = parse_item(body).expect("item decodes");
        assert_eq!(status, "success");
        assert_eq!(employee.map(|e| e.name().to_owned()), Some("Raj".to_owned()));
    }
}
