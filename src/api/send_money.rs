//! Send-money service for outgoing payments.

use std::sync::Arc;

use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{AccountId, ApprovalRequestId, SendMoneyApproval, SendMoneyRequest};
use crate::Result;

static REQUEST_SEND_MONEY: OperationDescriptor =
    OperationDescriptor::post("request_send_money", "/account/{id}/request-send-money");
static GET_APPROVAL: OperationDescriptor = OperationDescriptor::get(
    "get_send_money_approval",
    "/account/{id}/send-money-approval/{approval_id}",
);

/// Service for initiating and tracking outgoing payments.
pub struct SendMoneyService {
    inner: Arc<ClientInner>,
}

impl SendMoneyService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Request an outgoing payment from an account.
    ///
    /// The payment enters the approval flow; the returned approval carries
    /// its current status.
    pub async fn request(
        &self,
        account_id: &AccountId,
        request: &SendMoneyRequest,
    ) -> Result<SendMoneyApproval> {
        self.inner
            .post(&REQUEST_SEND_MONEY, &[("id", account_id.as_str())], request)
            .await
    }

    /// Get the current state of a payment approval.
    pub async fn approval(
        &self,
        account_id: &AccountId,
        approval_id: &ApprovalRequestId,
    ) -> Result<SendMoneyApproval> {
        self.inner
            .get(
                &GET_APPROVAL,
                &[
                    ("id", account_id.as_str()),
                    ("approval_id", approval_id.as_str()),
                ],
            )
            .await
    }
}
