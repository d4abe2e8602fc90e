//! View models for the approval inbox pages. Everything here is pure
//! presentation: formatted strings, flags and callbacks targets, no I/O.

use askama::Template;

use crate::models::ctc::{CtcDetail, group_heads, net_annual};
use crate::models::inbox::{ApprovalAction, InboxItem};
use crate::models::pay_revision::{self, PayRevisionDetail};
use crate::models::remarks::{RemarkEntry, parse_trail};
use crate::models::vendor_payment::VendorPaymentDetail;
use crate::money;

use super::common::{PageContext, StatCard};

/// Static configuration for one inbox page: labels, accent, flags, targets.
pub struct InboxConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: &'static str,
    pub page_path: &'static str,
    pub submit_path: &'static str,
    pub needs_verified: bool,
    pub verify_label: &'static str,
}

/// One row of the left-panel pending list.
pub struct InboxEntryView {
    pub refno: String,
    pub subject_id: String,
    pub subject_name: String,
    pub month_year: String,
    pub category: String,
    pub amount: String,
    pub selected: bool,
}

pub fn entries(items: &[InboxItem], selected: Option<&str>) -> Vec<InboxEntryView> {
    items
        .iter()
        .map(|item| InboxEntryView {
            refno: item.refno.clone(),
            subject_id: item.subject_id.clone(),
            subject_name: item.subject_name.clone(),
            month_year: item.month_year.clone(),
            category: item.category.clone(),
            amount: money::inr_opt(item.amount),
            selected: selected == Some(item.refno.as_str()),
        })
        .collect()
}

pub struct ActionView {
    pub label: String,
    pub value: i64,
    pub enabled: bool,
    pub style: &'static str,
}

/// Render the server-driven action set generically; nothing is hardcoded
/// beyond a style class derived from the action type.
pub fn action_views(actions: &[ApprovalAction]) -> Vec<ActionView> {
    actions
        .iter()
        .map(|a| ActionView {
            label: a.label.clone(),
            value: a.value,
            enabled: a.enabled,
            style: match a.action_type.to_ascii_lowercase().as_str() {
                "approve" | "verify" => "btn-ok",
                "reject" => "btn-bad",
                _ => "btn-muted",
            },
        })
        .collect()
}

pub fn remarks_views(trail: &str) -> Vec<RemarkEntry> {
    parse_trail(trail)
}

// ---------------------------------------------------------------------------
// CTC verification
// ---------------------------------------------------------------------------

pub struct CtcHeadView {
    pub name: String,
    pub monthly: String,
    pub annual: String,
}

pub struct CtcSectionView {
    pub label: String,
    pub rows: Vec<CtcHeadView>,
    pub monthly_total: String,
    pub annual_total: String,
}

pub struct CtcDetailView {
    pub employee_id: String,
    pub employee_name: String,
    pub designation: String,
    pub month_year: String,
    pub sections: Vec<CtcSectionView>,
    pub net_annual: String,
}

impl CtcDetailView {
    pub fn from_detail(detail: &CtcDetail) -> Self {
        let sections = group_heads(&detail.heads);
        let net = net_annual(&sections);
        CtcDetailView {
            employee_id: detail.employee_id.clone(),
            employee_name: detail.employee_name.clone(),
            designation: detail.designation.clone(),
            month_year: detail.month_year.clone(),
            sections: sections
                .into_iter()
                .map(|s| CtcSectionView {
                    label: s.label,
                    monthly_total: money::inr(s.monthly_total),
                    annual_total: money::inr(s.annual_total),
                    rows: s
                        .rows
                        .into_iter()
                        .map(|h| CtcHeadView {
                            name: h.head_name,
                            monthly: money::inr_opt(h.monthly),
                            annual: money::inr_opt(h.annual),
                        })
                        .collect(),
                })
                .collect(),
            net_annual: money::inr(net),
        }
    }
}

#[derive(Template)]
#[template(path = "approvals/ctc.html")]
pub struct CtcPageTemplate {
    pub ctx: PageContext,
    pub cfg: InboxConfig,
    pub stats: Vec<StatCard>,
    pub entries: Vec<InboxEntryView>,
    pub inbox_error: Option<String>,
    pub selected_refno: Option<String>,
    pub detail: Option<CtcDetailView>,
    pub detail_error: Option<String>,
    pub remarks: Vec<RemarkEntry>,
    pub actions: Vec<ActionView>,
}

// ---------------------------------------------------------------------------
// Labour pay revision
// ---------------------------------------------------------------------------

pub struct PayRevisionRowView {
    pub component: String,
    pub current: String,
    pub revised: String,
    pub difference: String,
}

pub struct PayRevisionDetailView {
    pub labour_id: String,
    pub labour_name: String,
    pub trade: String,
    pub effective_from: String,
    pub rows: Vec<PayRevisionRowView>,
    pub current_total: String,
    pub revised_total: String,
    pub difference_total: String,
}

impl PayRevisionDetailView {
    pub fn from_detail(detail: &PayRevisionDetail) -> Self {
        let totals = pay_revision::totals(&detail.components);
        PayRevisionDetailView {
            labour_id: detail.labour_id.clone(),
            labour_name: detail.labour_name.clone(),
            trade: detail.trade.clone(),
            effective_from: detail.effective_from.clone(),
            rows: detail
                .components
                .iter()
                .map(|r| PayRevisionRowView {
                    component: r.component.clone(),
                    current: money::inr_opt(r.current),
                    revised: money::inr_opt(r.revised),
                    difference: money::inr(r.difference()),
                })
                .collect(),
            current_total: money::inr(totals.current),
            revised_total: money::inr(totals.revised),
            difference_total: money::inr(totals.difference),
        }
    }
}

#[derive(Template)]
#[template(path = "approvals/pay_revision.html")]
pub struct PayRevisionPageTemplate {
    pub ctx: PageContext,
    pub cfg: InboxConfig,
    pub stats: Vec<StatCard>,
    pub entries: Vec<InboxEntryView>,
    pub inbox_error: Option<String>,
    pub selected_refno: Option<String>,
    pub detail: Option<PayRevisionDetailView>,
    pub detail_error: Option<String>,
    pub remarks: Vec<RemarkEntry>,
    pub actions: Vec<ActionView>,
}

// ---------------------------------------------------------------------------
// Vendor payment verification
// ---------------------------------------------------------------------------

pub struct PaymentLineView {
    pub description: String,
    pub amount: String,
}

pub struct VendorPaymentDetailView {
    pub vendor_code: String,
    pub vendor_name: String,
    pub invoice_no: String,
    pub invoice_date: String,
    pub lines: Vec<PaymentLineView>,
    pub deductions: Vec<PaymentLineView>,
    pub gross: String,
    pub total_deductions: String,
    pub net_payable: String,
}

impl VendorPaymentDetailView {
    pub fn from_detail(detail: &VendorPaymentDetail) -> Self {
        let line_views = |lines: &[crate::models::vendor_payment::PaymentLine]| -> Vec<PaymentLineView> {
            lines
                .iter()
                .map(|l| PaymentLineView {
                    description: l.description.clone(),
                    amount: money::inr_opt(l.amount),
                })
                .collect()
        };
        VendorPaymentDetailView {
            vendor_code: detail.vendor_code.clone(),
            vendor_name: detail.vendor_name.clone(),
            invoice_no: detail.invoice_no.clone(),
            invoice_date: detail.invoice_date.clone(),
            lines: line_views(&detail.lines),
            deductions: line_views(&detail.deductions),
            gross: money::inr(detail.gross()),
            total_deductions: money::inr(detail.total_deductions()),
            net_payable: money::inr(detail.net_payable()),
        }
    }
}

#[derive(Template)]
#[template(path = "approvals/vendor_payment.html")]
pub struct VendorPaymentPageTemplate {
    pub ctx: PageContext,
    pub cfg: InboxConfig,
    pub stats: Vec<StatCard>,
    pub entries: Vec<InboxEntryView>,
    pub inbox_error: Option<String>,
    pub selected_refno: Option<String>,
    pub detail: Option<VendorPaymentDetailView>,
    pub detail_error: Option<String>,
    pub remarks: Vec<RemarkEntry>,
    pub actions: Vec<ActionView>,
}
