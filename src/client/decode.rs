//! Response decoding.
//!
//! Decoding is a pure function of the raw response, so decoding the same
//! response twice yields identical results. A success status with a body
//! that fails to parse is a `SchemaMismatch` (contract drift), never a
//! silent default. Non-success statuses get a two-tier treatment: the
//! structured JSON error body when it parses, the raw text otherwise.

use serde::de::DeserializeOwned;

use super::descriptor::OperationDescriptor;
use super::transport::RawResponse;
use crate::{Error, Result};

/// Decode a response into the operation's declared success type.
pub(crate) fn decode<T: DeserializeOwned>(
    descriptor: &OperationDescriptor,
    response: &RawResponse,
) -> Result<T> {
    let status = response.status.as_u16();
    if !descriptor.is_success(status) {
        return Err(api_error(descriptor, response));
    }

    serde_json::from_slice(&response.body).map_err(|source| Error::SchemaMismatch {
        operation: descriptor.name,
        source,
    })
}

/// Decode a response whose success carries no payload (delete/cancel).
///
/// The body is ignored on success; the status check and error handling
/// match [`decode`].
pub(crate) fn decode_empty(
    descriptor: &OperationDescriptor,
    response: &RawResponse,
) -> Result<()> {
    let status = response.status.as_u16();
    if !descriptor.is_success(status) {
        return Err(api_error(descriptor, response));
    }
    Ok(())
}

fn api_error(descriptor: &OperationDescriptor, response: &RawResponse) -> Error {
    let status = response.status.as_u16();
    match serde_json::from_slice::<serde_json::Value>(&response.body) {
        Ok(body) => Error::Api {
            operation: descriptor.name,
            status,
            body: Some(body),
            raw: None,
        },
        Err(_) => Error::Api {
            operation: descriptor.name,
            status,
            body: None,
            raw: Some(String::from_utf8_lossy(&response.body).into_owned()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde::Deserialize;
    use serde_json::json;

    static GET_ACCOUNT: OperationDescriptor =
        OperationDescriptor::get("get_account", "/account/{id}");

    #[derive(Debug, Deserialize, PartialEq)]
    struct Account {
        id: String,
        name: String,
    }

    #[test]
    fn test_success_decodes_declared_schema() {
        let response = RawResponse::new(
            StatusCode::OK,
            json!({"id": "acc-1", "name": "Operating"}).to_string(),
        );
        let account: Account = decode(&GET_ACCOUNT, &response).unwrap();
        assert_eq!(account.id, "acc-1");
        assert_eq!(account.name, "Operating");
    }

    #[test]
    fn test_schema_drift_is_reported_not_coerced() {
        // Status 200 but the body violates the declared schema.
        let response = RawResponse::new(StatusCode::OK, json!({"unexpected": true}).to_string());
        let result: Result<Account> = decode(&GET_ACCOUNT, &response);
        assert!(matches!(
            result,
            Err(Error::SchemaMismatch {
                operation: "get_account",
                ..
            })
        ));
    }

    #[test]
    fn test_structured_error_body() {
        let response = RawResponse::new(StatusCode::NOT_FOUND, r#"{"error":"not_found"}"#);
        let result: Result<Account> = decode(&GET_ACCOUNT, &response);
        match result {
            Err(Error::Api {
                status, body, raw, ..
            }) => {
                assert_eq!(status, 404);
                assert_eq!(body, Some(json!({"error": "not_found"})));
                assert_eq!(raw, None);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_raw_fallback_for_unstructured_error() {
        let response = RawResponse::new(StatusCode::BAD_GATEWAY, "upstream exploded");
        let result: Result<Account> = decode(&GET_ACCOUNT, &response);
        match result {
            Err(Error::Api {
                status, body, raw, ..
            }) => {
                assert_eq!(status, 502);
                assert_eq!(body, None);
                assert_eq!(raw.as_deref(), Some("upstream exploded"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_is_idempotent() {
        let response = RawResponse::new(StatusCode::NOT_FOUND, r#"{"error":"not_found"}"#);
        let first: Result<Account> = decode(&GET_ACCOUNT, &response);
        let second: Result<Account> = decode(&GET_ACCOUNT, &response);
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }

    #[test]
    fn test_decode_empty() {
        static DELETE_CUSTOMER: OperationDescriptor =
            OperationDescriptor::delete("delete_customer", "/customer/{id}");
        let response = RawResponse::new(StatusCode::NO_CONTENT, "");
        assert!(decode_empty(&DELETE_CUSTOMER, &response).is_ok());

        let response = RawResponse::new(StatusCode::CONFLICT, r#"{"error":"in_use"}"#);
        assert!(matches!(
            decode_empty(&DELETE_CUSTOMER, &response),
            Err(Error::Api { status: 409, .. })
        ));
    }
}
