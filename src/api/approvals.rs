//! Endpoints backing the approval inbox pages.

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::models::ctc::CtcDetail;
use crate::models::inbox::{ApprovalAction, ApprovalPayload, InboxItem};
use crate::models::pay_revision::PayRevisionDetail;
use crate::models::vendor_payment::VendorPaymentDetail;

pub async fn ctc_inbox(api: &ApiClient, role_id: i64) -> Result<Vec<InboxItem>, AppError> {
    api.get_rows("payroll/ctc/pending", &[("RoleId", role_id.to_string())])
        .await
}

pub async fn ctc_detail(api: &ApiClient, refno: &str) -> Result<Option<CtcDetail>, AppError> {
    api.get_one("payroll/ctc/detail", &[("TransactionRefno", refno.to_string())])
        .await
}

pub async fn pay_revision_inbox(api: &ApiClient, role_id: i64) -> Result<Vec<InboxItem>, AppError> {
    api.get_rows("payroll/pay-revision/pending", &[("RoleId", role_id.to_string())])
        .await
}

pub async fn pay_revision_detail(
    api: &ApiClient,
    refno: &str,
) -> Result<Option<PayRevisionDetail>, AppError> {
    api.get_one(
        "payroll/pay-revision/detail",
        &[("TransactionRefno", refno.to_string())],
    )
    .await
}

pub async fn vendor_payment_inbox(
    api: &ApiClient,
    role_id: i64,
) -> Result<Vec<InboxItem>, AppError> {
    api.get_rows("accounts/vendor-payment/pending", &[("RoleId", role_id.to_string())])
        .await
}

pub async fn vendor_payment_detail(
    api: &ApiClient,
    refno: &str,
) -> Result<Option<VendorPaymentDetail>, AppError> {
    api.get_one(
        "accounts/vendor-payment/detail",
        &[("TransactionRefno", refno.to_string())],
    )
    .await
}

/// Status-list lookup: which actions apply to this record for this role at
/// this amount. The answer is authoritative; the client renders it as-is.
pub async fn status_actions(
    api: &ApiClient,
    moid: i64,
    role_id: i64,
    amount: f64,
) -> Result<Vec<ApprovalAction>, AppError> {
    api.get_rows(
        "workflow/status-list",
        &[
            ("Moid", moid.to_string()),
            ("RoleId", role_id.to_string()),
            ("Amount", format!("{amount:.2}")),
        ],
    )
    .await
}

pub async fn submit_ctc_action(api: &ApiClient, payload: &ApprovalPayload) -> Result<(), AppError> {
    api.post_json("payroll/ctc/action", payload).await
}

pub async fn submit_pay_revision_action(
    api: &ApiClient,
    payload: &ApprovalPayload,
) -> Result<(), AppError> {
    api.post_json("payroll/pay-revision/action", payload).await
}

pub async fn submit_vendor_payment_action(
    api: &ApiClient,
    payload: &ApprovalPayload,
) -> Result<(), AppError> {
    api.post_json("accounts/vendor-payment/action", payload).await
}
