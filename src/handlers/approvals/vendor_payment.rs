//! Vendor payment verification inbox.
//!
//! This page disables the send-back path, so return-type actions coming back
//! from the status-list lookup are dropped before rendering.

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::{ApiClient, approvals};
use crate::auth::csrf;
use crate::auth::session::{current_user, flash};
use crate::errors::{AppError, render};
use crate::handlers::see_other;
use crate::models::ApprovalDetail;
use crate::models::inbox::{ApprovalPayload, without_return_actions};
use crate::models::remarks::update_remarks_history;
use crate::store::Store;
use crate::store::approval::validate_submission;
use crate::templates_structs::common::{PageContext, StatCard};
use crate::templates_structs::inbox::{
    InboxConfig, VendorPaymentDetailView, VendorPaymentPageTemplate, action_views, entries,
    remarks_views,
};

use super::{ActionForm, InboxQuery};

const PAGE_PATH: &str = "/approvals/vendor-payments";

fn config() -> InboxConfig {
    InboxConfig {
        title: "Vendor Payment Verification",
        subtitle: "Payment vouchers awaiting verification",
        accent: "accent-amber",
        page_path: PAGE_PATH,
        submit_path: "/approvals/vendor-payments/submit",
        needs_verified: false,
        verify_label: "",
    }
}

pub async fn page(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
    query: web::Query<InboxQuery>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;

    let need_inbox =
        query.retry.is_some() || store.with(user.uid, |s| s.vendor_payment.inbox.is_idle());
    if need_inbox {
        store.with(user.uid, |s| s.vendor_payment.inbox_loading());
        match approvals::vendor_payment_inbox(&api, user.role_id).await {
            Ok(items) => store.with(user.uid, |s| s.vendor_payment.inbox_loaded(items)),
            Err(e) => {
                log::warn!("Vendor payment inbox fetch failed: {e}");
                store.with(user.uid, |s| {
                    s.vendor_payment
                        .inbox_failed("Could not load pending vouchers".into());
                });
            }
        }
    }

    if let Some(refno) = query.selected.as_deref() {
        let already_shown = store.with(user.uid, |s| {
            s.vendor_payment.selected.as_deref() == Some(refno)
                && s.vendor_payment.detail.ready().is_some()
        });
        if !already_shown {
            let generation = store.with(user.uid, |s| s.vendor_payment.select(refno));
            match approvals::vendor_payment_detail(&api, refno).await {
                Ok(Some(detail)) => {
                    match approvals::status_actions(&api, detail.moid(), user.role_id, detail.amount())
                        .await
                    {
                        Ok(actions) => {
                            let actions = without_return_actions(actions);
                            store.with(user.uid, |s| {
                                s.vendor_payment.detail_resolved(generation, detail, actions);
                            });
                        }
                        Err(e) => {
                            log::warn!("Vendor payment status-list fetch failed: {e}");
                            store.with(user.uid, |s| {
                                s.vendor_payment.detail_failed(
                                    generation,
                                    "Could not load the applicable actions".into(),
                                );
                            });
                        }
                    }
                }
                Ok(None) => {
                    store.with(user.uid, |s| {
                        s.vendor_payment
                            .detail_failed(generation, "Voucher not found".into());
                    });
                }
                Err(e) => {
                    log::warn!("Vendor payment detail fetch failed: {e}");
                    store.with(user.uid, |s| {
                        s.vendor_payment
                            .detail_failed(generation, "Could not load the voucher detail".into());
                    });
                }
            }
        }
    }

    let ctx = PageContext::build(&session, PAGE_PATH)?;
    let tmpl = store.with(user.uid, |s| {
        let slice = &s.vendor_payment;
        let detail = slice.detail.ready();
        let mut stats = vec![StatCard {
            label: "Pending".into(),
            value: slice.items().len().to_string(),
        }];
        if let Some(d) = detail {
            stats.push(StatCard {
                label: "Net Payable".into(),
                value: crate::money::inr(d.net_payable()),
            });
        }
        VendorPaymentPageTemplate {
            ctx,
            cfg: config(),
            stats,
            entries: entries(slice.items(), slice.selected.as_deref()),
            inbox_error: slice.inbox.error().map(String::from),
            selected_refno: slice.selected.clone(),
            detail: detail.map(VendorPaymentDetailView::from_detail),
            detail_error: slice.detail.error().map(String::from),
            remarks: detail
                .map(|d| remarks_views(d.remarks_history()))
                .unwrap_or_default(),
            actions: action_views(&slice.actions),
        }
    });

    render(tmpl)
}

pub async fn submit(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
    form: web::Form<ActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = current_user(&session)?;

    let snapshot = store.with(user.uid, |s| {
        s.vendor_payment
            .detail
            .ready()
            .map(|d| (d.refno().to_string(), d.remarks_history().to_string()))
    });

    if let Err(message) = validate_submission(snapshot.is_some(), &form.comment, false, false) {
        flash(&session, &message);
        let back = match &snapshot {
            Some((refno, _)) => format!("{PAGE_PATH}?selected={refno}"),
            None => PAGE_PATH.to_string(),
        };
        return Ok(see_other(&back));
    }
    let Some((refno, existing_remarks)) = snapshot else {
        return Ok(see_other(PAGE_PATH));
    };

    let payload = ApprovalPayload {
        refno: refno.clone(),
        status_value: form.action_value,
        remarks: update_remarks_history(
            &existing_remarks,
            &user.role_name,
            &user.username,
            form.comment.trim(),
        ),
        action_by: user.uid,
        role_id: user.role_id,
    };

    match approvals::submit_vendor_payment_action(&api, &payload).await {
        Ok(()) => {
            log::info!(
                "Vendor payment action {} on {} by {} ({})",
                form.action_value,
                refno,
                user.username,
                user.role_name
            );
            store.with(user.uid, |s| {
                s.vendor_payment.clear_selection();
                s.vendor_payment.inbox_loading();
            });
            match approvals::vendor_payment_inbox(&api, user.role_id).await {
                Ok(items) => store.with(user.uid, |s| s.vendor_payment.inbox_loaded(items)),
                Err(e) => {
                    log::warn!("Vendor payment inbox refresh failed: {e}");
                    store.with(user.uid, |s| {
                        s.vendor_payment
                            .inbox_failed("Could not reload pending vouchers".into());
                    });
                }
            }
            flash(&session, "Action submitted");
            Ok(see_other(PAGE_PATH))
        }
        Err(e) => {
            log::error!("Vendor payment submission failed: {e}");
            flash(&session, "Submission failed — the voucher was left unchanged");
            Ok(see_other(&format!("{PAGE_PATH}?selected={refno}")))
        }
    }
}
