//! Operation descriptors and the request builder.
//!
//! Every endpoint is described once by a static [`OperationDescriptor`]
//! (method, path template, auth requirement, success statuses). The
//! request builder turns a descriptor plus per-call values into a ready
//! [`RequestContext`], failing fast before any network I/O when arguments
//! or credentials are unusable.

use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::credentials::Credential;
use super::transport::RequestContext;
use crate::{Error, Result};

/// Whether an operation can run without a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// Building fails with `MissingCredential` when no credential resolves.
    Required,
    /// The request is sent unauthenticated when no credential resolves.
    Optional,
}

/// Immutable description of one API operation.
///
/// Descriptors are defined as `const` statics next to the facade that uses
/// them and never mutated; they are the schema-driven layer the typed
/// facades are built on.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    /// Operation name carried through every error for diagnostics.
    pub name: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template with `{name}` placeholders, e.g. `/account/{id}`.
    pub path: &'static str,
    /// Whether a credential must be present.
    pub auth: AuthRequirement,
    /// Status codes decoded as success.
    pub success: &'static [u16],
    /// Whether the operation carries a JSON request body.
    pub has_body: bool,
}

impl OperationDescriptor {
    /// A GET operation expecting 200.
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::GET,
            path,
            auth: AuthRequirement::Required,
            success: &[200],
            has_body: false,
        }
    }

    /// A POST operation with a JSON body, expecting 200 or 201.
    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::POST,
            path,
            auth: AuthRequirement::Required,
            success: &[200, 201],
            has_body: true,
        }
    }

    /// A POST operation without a body, expecting 200 or 204.
    pub const fn post_empty(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::POST,
            path,
            auth: AuthRequirement::Required,
            success: &[200, 204],
            has_body: false,
        }
    }

    /// A PUT operation with a JSON body, expecting 200.
    pub const fn put(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::PUT,
            path,
            auth: AuthRequirement::Required,
            success: &[200],
            has_body: true,
        }
    }

    /// A DELETE operation expecting 200 or 204.
    pub const fn delete(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::DELETE,
            path,
            auth: AuthRequirement::Required,
            success: &[200, 204],
            has_body: false,
        }
    }

    /// Mark the operation as callable without a credential.
    pub const fn auth_optional(mut self) -> Self {
        self.auth = AuthRequirement::Optional;
        self
    }

    /// Returns `true` when `status` is in the declared success set.
    pub fn is_success(&self, status: u16) -> bool {
        self.success.contains(&status)
    }
}

/// Assemble a [`RequestContext`] for one call.
///
/// The credential is a snapshot taken here; rotating the client credential
/// afterwards does not affect this request.
pub(crate) fn build_request<Q, B>(
    descriptor: &'static OperationDescriptor,
    base_url: &Url,
    path_params: &[(&str, &str)],
    query: Option<&Q>,
    body: Option<&B>,
    credential: Option<&Credential>,
    cancel: CancellationToken,
) -> Result<RequestContext>
where
    Q: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    let path = substitute_path(descriptor.path, path_params)?;
    let mut url = Url::parse(&format!(
        "{}{}",
        base_url.as_str().trim_end_matches('/'),
        path
    ))
    .map_err(|e| Error::InvalidRequest(format!("invalid request URL: {e}")))?;

    if let Some(query) = query {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| Error::InvalidRequest(format!("unserializable query: {e}")))?;
        if !encoded.is_empty() {
            url.set_query(Some(&encoded));
        }
    }

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, "application/json".parse().expect("static header"));

    match (descriptor.auth, credential) {
        (_, Some(credential)) => {
            headers.insert(AUTHORIZATION, credential.header_value()?);
        }
        (AuthRequirement::Required, None) => {
            return Err(Error::MissingCredential {
                operation: descriptor.name,
            });
        }
        (AuthRequirement::Optional, None) => {}
    }

    let body = match (descriptor.has_body, body) {
        (true, Some(body)) => {
            headers.insert(CONTENT_TYPE, "application/json".parse().expect("static header"));
            Some(serde_json::to_vec(body).map_err(|e| {
                Error::InvalidRequest(format!("unserializable request body: {e}"))
            })?)
        }
        (true, None) => {
            return Err(Error::InvalidRequest(format!(
                "operation {} requires a request body",
                descriptor.name
            )))
        }
        (false, Some(_)) => {
            return Err(Error::InvalidRequest(format!(
                "operation {} does not take a request body",
                descriptor.name
            )))
        }
        (false, None) => None,
    };

    Ok(RequestContext {
        operation: descriptor.name,
        method: descriptor.method.clone(),
        url,
        headers,
        body,
        cancel,
    })
}

/// Substitute `{name}` placeholders in a path template.
///
/// Values must be non-empty URL-safe tokens; anything else is rejected
/// before it can corrupt the request path.
fn substitute_path(template: &str, params: &[(&str, &str)]) -> Result<String> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        resolved.push_str(&rest[..open]);
        let close = rest[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| Error::InvalidRequest(format!("malformed path template: {template}")))?;
        let name = &rest[open + 1..close];

        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| Error::InvalidRequest(format!("missing path parameter: {name}")))?;
        if !is_valid_token(value) {
            return Err(Error::InvalidRequest(format!(
                "invalid value for path parameter {name}: {value:?}"
            )));
        }

        resolved.push_str(value);
        rest = &rest[close + 1..];
    }
    resolved.push_str(rest);
    Ok(resolved)
}

fn is_valid_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    static GET_ACCOUNT: OperationDescriptor =
        OperationDescriptor::get("get_account", "/account/{id}");
    static LIST_ACCOUNTS: OperationDescriptor =
        OperationDescriptor::get("list_accounts", "/accounts");

    #[derive(Serialize)]
    struct Filters {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
    }

    fn build_simple(
        descriptor: &'static OperationDescriptor,
        path_params: &[(&str, &str)],
        query: Option<&Filters>,
    ) -> Result<RequestContext> {
        build_request::<Filters, ()>(
            descriptor,
            &Url::parse("https://api.mercury.com/api/v1").unwrap(),
            path_params,
            query,
            None,
            Some(&Credential::bearer("token")),
            CancellationToken::new(),
        )
    }

    #[test]
    fn test_path_substitution() {
        let ctx = build_simple(&GET_ACCOUNT, &[("id", "acc-123")], None).unwrap();
        assert_eq!(ctx.url.as_str(), "https://api.mercury.com/api/v1/account/acc-123");
    }

    #[test]
    fn test_missing_path_param() {
        let result = build_simple(&GET_ACCOUNT, &[], None);
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_malformed_path_value_rejected() {
        for bad in ["", "a/b", "a b", "a?b"] {
            let result = build_simple(&GET_ACCOUNT, &[("id", bad)], None);
            assert!(
                matches!(result, Err(Error::InvalidRequest(_))),
                "value {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_absent_query_params_not_serialized() {
        let filters = Filters {
            limit: Some(10),
            start_after: None,
        };
        let ctx = build_simple(&LIST_ACCOUNTS, &[], Some(&filters)).unwrap();
        assert_eq!(ctx.url.query(), Some("limit=10"));

        let all_absent = Filters {
            limit: None,
            start_after: None,
        };
        let ctx = build_simple(&LIST_ACCOUNTS, &[], Some(&all_absent)).unwrap();
        assert_eq!(ctx.url.query(), None);
    }

    #[test]
    fn test_missing_credential_fails_before_io() {
        let result = build_request::<(), ()>(
            &LIST_ACCOUNTS,
            &Url::parse("https://api.mercury.com/api/v1").unwrap(),
            &[],
            None,
            None,
            None,
            CancellationToken::new(),
        );
        assert!(matches!(
            result,
            Err(Error::MissingCredential {
                operation: "list_accounts"
            })
        ));
    }

    #[test]
    fn test_auth_optional_without_credential() {
        static PUBLIC: OperationDescriptor =
            OperationDescriptor::get("public_status", "/status").auth_optional();
        let ctx = build_request::<(), ()>(
            &PUBLIC,
            &Url::parse("https://api.mercury.com/api/v1").unwrap(),
            &[],
            None,
            None,
            None,
            CancellationToken::new(),
        )
        .unwrap();
        assert!(!ctx.headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_credential_header_injected() {
        let ctx = build_simple(&LIST_ACCOUNTS, &[], None).unwrap();
        assert_eq!(
            ctx.headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer token"
        );
    }
}
