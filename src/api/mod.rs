//! Thin client over the upstream ERP REST API.
//!
//! Endpoints answer JSON shaped either as a bare array or as an envelope
//! `{ "Data": [...] }`; `decode_rows` accepts both. Date parameters are always
//! serialized as `YYYY-MM-DD` strings. Requests are single-shot: no automatic
//! retries, no timeouts beyond what the HTTP client itself applies.

pub mod approvals;
pub mod identity;
pub mod reports;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// GET a list endpoint and decode its rows.
    pub(crate) async fn get_rows<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, AppError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ApiStatus(status.as_u16(), path.to_string()));
        }
        let value: Value = response.json().await?;
        decode_rows(value)
    }

    /// GET a detail endpoint; the API returns the record as a one-row list.
    pub(crate) async fn get_one<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, AppError> {
        let mut rows = self.get_rows(path, query).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.swap_remove(0)))
        }
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ApiStatus(status.as_u16(), path.to_string()));
        }
        Ok(())
    }
}

/// Unwrap either a bare JSON array or a `{ "Data": [...] }` envelope.
fn decode_rows<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, AppError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("Data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                return Err(AppError::Decode(format!(
                    "expected Data to be an array, got {other}"
                )));
            }
        },
        other => {
            return Err(AppError::Decode(format!(
                "expected an array or envelope, got {other}"
            )));
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| AppError::Decode(e.to_string())))
        .collect()
}

/// Undocumented business rule carried over from the source system: an unset
/// "from" date queries from the books-opening epoch. Applied at request time
/// only, never written back into stored filter state.
pub const EPOCH_FROM_DATE: &str = "1900-04-01";

pub fn from_date_or_epoch(date: &Option<String>) -> String {
    match date.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => EPOCH_FROM_DATE.to_string(),
    }
}

pub fn to_date_or_today(date: &Option<String>) -> String {
    match date.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::decode_rows;

    #[test]
    fn a_bare_array_decodes() {
        let rows: Vec<i64> = decode_rows(json!([1, 2, 3])).unwrap();
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn a_data_envelope_decodes() {
        let rows: Vec<i64> = decode_rows(json!({ "Data": [4, 5] })).unwrap();
        assert_eq!(rows, vec![4, 5]);
    }

    #[test]
    fn a_null_or_missing_data_field_is_an_empty_set() {
        let rows: Vec<i64> = decode_rows(json!({ "Data": null })).unwrap();
        assert!(rows.is_empty());
        let rows: Vec<i64> = decode_rows(json!({ "Count": 0 })).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn a_scalar_payload_is_a_decode_error() {
        let result: Result<Vec<i64>, _> = decode_rows(json!("nope"));
        assert!(result.is_err());
        let result: Result<Vec<i64>, _> = decode_rows(json!({ "Data": "nope" }));
        assert!(result.is_err());
    }
}
