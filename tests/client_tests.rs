//! End-to-end tests over an in-memory transport.
//!
//! These exercise the full pipeline (descriptor, request builder, decoder,
//! pagination walker, facades) without touching the network: a stub
//! transport records every dispatched request and replays canned responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use mercury_bank::api::TransactionFilter;
use mercury_bank::client::{RawResponse, RequestContext, Transport};
use mercury_bank::{
    AccountId, ClientConfig, Credential, Error, MercuryClient, Result, StaticCredential,
    TransactionId,
};
use reqwest::StatusCode;
use serde_json::json;
use tokio_util::sync::CancellationToken;

struct StubTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<RequestContext>>,
}

impl StubTransport {
    fn new(responses: Vec<RawResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn request(&self, index: usize) -> RequestContext {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, context: &RequestContext) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(context.clone());
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned response left for request");
        Ok(response)
    }
}

fn client_with(responses: Vec<RawResponse>) -> (MercuryClient, Arc<StubTransport>) {
    let transport = StubTransport::new(responses);
    let client = MercuryClient::with_transport(
        transport.clone(),
        Arc::new(StaticCredential::new(Credential::bearer("test-token"))),
        ClientConfig::default(),
    );
    (client, transport)
}

fn ok(body: serde_json::Value) -> RawResponse {
    RawResponse::new(StatusCode::OK, body.to_string())
}

fn account_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Account {id}"),
        "kind": "checking",
        "status": "active",
        "routingNumber": "084106768",
        "accountNumber": "9800010617",
        "availableBalance": "100.00",
        "currentBalance": "100.00",
        "legalBusinessName": "Acme Inc",
        "createdAt": "2024-03-01T12:00:00Z"
    })
}

fn transaction_json(id: &str, amount: &str) -> serde_json::Value {
    json!({
        "id": id,
        "amount": amount.parse::<f64>().unwrap(),
        "status": "sent",
        "createdAt": "2024-05-02T09:30:00Z"
    })
}

#[tokio::test]
async fn two_page_account_walk_uses_exactly_two_fetches() {
    let (client, transport) = client_with(vec![
        ok(json!({"accounts": [account_json("a1")], "nextCursor": "c1"})),
        ok(json!({"accounts": [account_json("a2")]})),
    ]);

    let accounts = client.accounts().list(None).await.unwrap();
    let ids: Vec<_> = accounts.iter().map(|a| a.id.as_str().to_string()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
    assert_eq!(transport.request_count(), 2);

    // First fetch carries only the limit; the continuation carries the
    // server-supplied cursor.
    assert_eq!(transport.request(0).url.query(), Some("limit=100"));
    assert_eq!(
        transport.request(1).url.query(),
        Some("limit=100&start_after=c1")
    );
}

#[tokio::test]
async fn walk_yields_same_items_regardless_of_page_size() {
    let (small, _) = client_with(vec![
        ok(json!({"accounts": [account_json("a1"), account_json("a2")]})),
        ok(json!({"accounts": [account_json("a3")]})),
    ]);
    let (large, _) = client_with(vec![
        ok(json!({"accounts": [account_json("a1"), account_json("a2"), account_json("a3")]})),
        ok(json!({"accounts": []})),
    ]);

    let ids = |accounts: Vec<mercury_bank::models::Account>| {
        accounts
            .into_iter()
            .map(|a| a.id.as_str().to_string())
            .collect::<Vec<_>>()
    };

    let from_small = ids(small.accounts().list(Some(2)).await.unwrap());
    let from_large = ids(large.accounts().list(Some(3)).await.unwrap());
    assert_eq!(from_small, from_large);
    assert_eq!(from_small, vec!["a1", "a2", "a3"]);
}

#[tokio::test]
async fn repeated_cursor_surfaces_pagination_stall() {
    let (client, _) = client_with(vec![
        ok(json!({"accounts": [account_json("a1")], "nextCursor": "X"})),
        ok(json!({"accounts": [], "nextCursor": "X"})),
    ]);

    let mut stream = client.accounts().list_stream(None);
    assert_eq!(
        stream.try_next().await.unwrap().unwrap().id.as_str(),
        "a1"
    );
    let err = stream.try_next().await.unwrap_err();
    assert!(matches!(
        err,
        Error::PaginationStall { operation: "list_accounts", ref cursor } if cursor == "X"
    ));
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn contract_drift_on_success_is_schema_mismatch() {
    let (client, _) = client_with(vec![ok(json!({"unexpected": true}))]);

    let err = client
        .accounts()
        .get(&AccountId::from("a1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::SchemaMismatch { operation: "get_account", .. }
    ));
}

#[tokio::test]
async fn structured_error_body_is_preserved() {
    let (client, _) = client_with(vec![RawResponse::new(
        StatusCode::NOT_FOUND,
        json!({"error": "not_found"}).to_string(),
    )]);

    let err = client
        .accounts()
        .get(&AccountId::from("missing"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    match err {
        Error::Api {
            operation,
            status,
            body,
            raw,
        } => {
            assert_eq!(operation, "get_account");
            assert_eq!(status, 404);
            assert_eq!(body, Some(json!({"error": "not_found"})));
            assert!(raw.is_none());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_raw() {
    let (client, _) = client_with(vec![RawResponse::new(
        StatusCode::BAD_GATEWAY,
        "upstream connect error",
    )]);

    let err = client
        .accounts()
        .get(&AccountId::from("a1"))
        .await
        .unwrap_err();
    match err {
        Error::Api {
            status, body, raw, ..
        } => {
            assert_eq!(status, 502);
            assert!(body.is_none());
            assert_eq!(raw.as_deref(), Some("upstream connect error"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn single_transaction_resolves_by_id_alone() {
    let (client, transport) = client_with(vec![ok(transaction_json("t1", "-100.50"))]);

    let txn = client
        .transactions()
        .get(&TransactionId::from("t1"))
        .await
        .unwrap();
    assert_eq!(txn.id.as_str(), "t1");
    assert_eq!(txn.amount, "-100.50".parse().unwrap());
    // No account segment: the transaction is addressed directly.
    assert_eq!(transport.request(0).url.path(), "/api/v1/transaction/t1");
}

#[tokio::test]
async fn org_wide_transaction_walk_spans_accounts() {
    let (client, transport) = client_with(vec![
        ok(json!({
            "transactions": [transaction_json("t1", "-100.50")],
            "nextCursor": "c1"
        })),
        ok(json!({"transactions": [transaction_json("t2", "75.00")]})),
    ]);

    let transactions = client.transactions().list(None).await.unwrap();
    let ids: Vec<_> = transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2"]);

    // The walk runs against the organization-wide collection.
    assert_eq!(transport.request(0).url.path(), "/api/v1/transactions");
    assert_eq!(
        transport.request(1).url.query(),
        Some("limit=100&start_after=c1")
    );
}

#[tokio::test]
async fn for_account_page_stays_account_scoped() {
    let (client, transport) = client_with(vec![ok(json!({
        "transactions": [transaction_json("t3", "-12.00")]
    }))]);

    let query = mercury_bank::api::TransactionQuery {
        limit: Some(10),
        ..Default::default()
    };
    let transactions = client
        .transactions()
        .for_account(&AccountId::from("a1"), &query)
        .await
        .unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(
        transport.request(0).url.path(),
        "/api/v1/account/a1/transactions"
    );
    assert_eq!(transport.request(0).url.query(), Some("limit=10"));
}

#[tokio::test]
async fn missing_credential_fails_without_dispatch() {
    let transport = StubTransport::new(vec![]);
    let client = MercuryClient::with_transport(
        transport.clone(),
        Arc::new(StaticCredential::absent()),
        ClientConfig::default(),
    );

    let err = client
        .accounts()
        .get(&AccountId::from("a1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingCredential { operation: "get_account" }
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn cancelled_scope_fails_without_dispatch() {
    let (client, transport) = client_with(vec![]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client
        .scoped(cancel)
        .accounts()
        .get(&AccountId::from("a1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn rotated_credential_applies_to_subsequent_requests() {
    let (client, transport) = client_with(vec![
        ok(account_json("a1")),
        ok(account_json("a1")),
    ]);
    let id = AccountId::from("a1");

    client.accounts().get(&id).await.unwrap();
    client.rotate_credential(Credential::bearer("rotated-token"));
    client.accounts().get(&id).await.unwrap();

    let auth = |index: usize| {
        transport.request(index).headers[reqwest::header::AUTHORIZATION]
            .to_str()
            .unwrap()
            .to_string()
    };
    assert_eq!(auth(0), "Bearer test-token");
    assert_eq!(auth(1), "Bearer rotated-token");
}

#[tokio::test]
async fn invalid_date_range_fails_before_dispatch() {
    let (client, transport) = client_with(vec![]);
    let filter = TransactionFilter {
        start: Some(chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        end: Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        ..Default::default()
    };

    let err = client.transactions().list(Some(filter)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn transaction_filter_fields_reach_the_query_string() {
    let (client, transport) = client_with(vec![ok(json!({"transactions": []}))]);
    let filter = TransactionFilter {
        account_id: Some(AccountId::from("a1")),
        start: Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        search: Some("hosting".into()),
        ..Default::default()
    };

    let transactions = client.transactions().list(Some(filter)).await.unwrap();
    assert!(transactions.is_empty());

    let query = transport.request(0).url.query().unwrap().to_string();
    assert!(query.contains("limit=100"), "query was {query}");
    assert!(query.contains("accountId=a1"), "query was {query}");
    assert!(query.contains("start=2024-01-01"), "query was {query}");
    assert!(query.contains("search=hosting"), "query was {query}");
    // Absent filter fields never appear in the query string.
    assert!(!query.contains("end"), "query was {query}");
    assert!(!query.contains("status"), "query was {query}");
}

#[tokio::test]
async fn treasury_transactions_page_with_cursor_parameter() {
    let (client, transport) = client_with(vec![
        ok(json!({"transactions": [{"id": "tt1", "amount": "5.00", "kind": "interest", "status": "settled", "createdAt": "2024-04-01T00:00:00Z"}], "nextCursor": "c9"})),
        ok(json!({"transactions": []})),
    ]);

    let transactions = client
        .treasury()
        .transactions(&mercury_bank::TreasuryAccountId::from("tr1"), None)
        .await
        .unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].id, "tt1");

    // This endpoint pages with `cursor`, not `start_after`.
    assert_eq!(
        transport.request(1).url.query(),
        Some("limit=100&cursor=c9")
    );
}

#[tokio::test]
async fn delete_customer_accepts_empty_body() {
    let (client, transport) = client_with(vec![RawResponse::new(StatusCode::NO_CONTENT, "")]);

    client
        .customers()
        .delete(&mercury_bank::CustomerId::from("cus-1"))
        .await
        .unwrap();
    assert_eq!(transport.request(0).method, reqwest::Method::DELETE);
    assert_eq!(transport.request(0).url.path(), "/api/v1/customer/cus-1");
}

#[tokio::test]
async fn create_invoice_sends_json_body() {
    let (client, transport) = client_with(vec![ok(json!({
        "id": "inv-1",
        "customerId": "cus-1",
        "status": "draft",
        "totalAmount": "250.00",
        "dueDate": "2024-07-01"
    }))]);

    let request = mercury_bank::models::InvoiceCreateRequest {
        customer_id: mercury_bank::CustomerId::from("cus-1"),
        invoice_number: None,
        due_date: chrono::NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        line_items: vec![mercury_bank::models::LineItem {
            description: "Consulting".into(),
            quantity: "1".parse().unwrap(),
            unit_price: "250.00".parse().unwrap(),
        }],
        memo: None,
    };
    let invoice = client.invoices().create(&request).await.unwrap();
    assert_eq!(invoice.id.as_str(), "inv-1");

    let body: serde_json::Value =
        serde_json::from_slice(transport.request(0).body.as_deref().unwrap()).unwrap();
    assert_eq!(body["customerId"], "cus-1");
    assert_eq!(body["dueDate"], "2024-07-01");
    // Absent optional fields are omitted from the payload entirely.
    assert!(body.get("invoiceNumber").is_none());
    assert!(body.get("memo").is_none());
}

#[tokio::test]
async fn error_from_facade_preserves_operation_name() {
    let (client, _) = client_with(vec![RawResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "boom"}).to_string(),
    )]);

    let err = client.organization().get().await.unwrap_err();
    match err {
        Error::Api { operation, .. } => assert_eq!(operation, "get_organization"),
        other => panic!("expected Api error, got {other:?}"),
    }
}
