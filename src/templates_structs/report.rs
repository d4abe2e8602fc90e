//! View models for the report pages.

use askama::Template;

use crate::models::cost_center::CostCenter;
use crate::models::daily_issue::DailyIssueRow;
use crate::models::indent::{self, IndentRow};
use crate::models::interest::InterestRow;
use crate::models::stock::{MovementKind, StockDetailRow, StockSummaryRow};
use crate::money;
use crate::store::stock::DrillState;

use super::common::{PageContext, StatCard};

pub struct CostCenterOption {
    pub code: String,
    pub name: String,
    pub selected: bool,
}

pub fn cost_center_options(centers: &[CostCenter], selected: Option<&str>) -> Vec<CostCenterOption> {
    centers
        .iter()
        .map(|cc| CostCenterOption {
            code: cc.code.clone(),
            name: cc.name.clone(),
            selected: selected == Some(cc.code.as_str()),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Accrued interest
// ---------------------------------------------------------------------------

pub struct InterestRowView {
    pub cost_center: String,
    pub deposit_refno: String,
    pub institution: String,
    pub principal: String,
    pub rate_pct: String,
    pub days: i64,
    pub accrued: String,
    pub as_on: String,
}

pub fn interest_rows(rows: &[InterestRow]) -> Vec<InterestRowView> {
    rows.iter()
        .map(|r| InterestRowView {
            cost_center: r.cost_center.clone(),
            deposit_refno: r.deposit_refno.clone(),
            institution: r.institution.clone(),
            principal: money::inr_opt(r.principal),
            rate_pct: money::qty(r.rate_pct),
            days: r.days.unwrap_or(0),
            accrued: money::inr_opt(r.accrued),
            as_on: r.as_on.clone(),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "reports/interest.html")]
pub struct InterestPageTemplate {
    pub ctx: PageContext,
    pub cost_centers: Vec<CostCenterOption>,
    pub from_date: String,
    pub to_date: String,
    pub stats: Vec<StatCard>,
    pub rows: Vec<InterestRowView>,
    pub loaded: bool,
    pub error: Option<String>,
    pub can_export: bool,
}

/// Print-friendly rendition of the accrued interest report; the browser's
/// print-to-PDF produces the downloadable document.
#[derive(Template)]
#[template(path = "reports/interest_print.html")]
pub struct InterestPrintTemplate {
    pub cost_center: String,
    pub from_date: String,
    pub to_date: String,
    pub generated_on: String,
    pub rows: Vec<InterestRowView>,
    pub total_principal: String,
    pub total_accrued: String,
}

// ---------------------------------------------------------------------------
// Daily issued items
// ---------------------------------------------------------------------------

pub struct DailyIssueRowView {
    pub item_code: String,
    pub item_name: String,
    pub uom: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
    pub issued_to: String,
}

pub fn daily_issue_rows(rows: &[DailyIssueRow]) -> Vec<DailyIssueRowView> {
    rows.iter()
        .map(|r| DailyIssueRowView {
            item_code: r.item_code.clone(),
            item_name: r.item_name.clone(),
            uom: r.uom.clone(),
            quantity: money::qty(r.quantity),
            rate: money::inr_opt(r.rate),
            amount: money::inr_opt(r.amount),
            issued_to: r.issued_to.clone(),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "reports/daily_issue.html")]
pub struct DailyIssuePageTemplate {
    pub ctx: PageContext,
    pub cost_centers: Vec<CostCenterOption>,
    pub issue_date: String,
    pub stats: Vec<StatCard>,
    pub rows: Vec<DailyIssueRowView>,
    pub loaded: bool,
    pub error: Option<String>,
    pub can_export: bool,
}

// ---------------------------------------------------------------------------
// Stock reconciliation
// ---------------------------------------------------------------------------

pub struct MoveCellView {
    pub qty: String,
    /// Drill-down target; only set for strictly positive quantities.
    pub link: Option<String>,
}

pub struct StockDetailRowView {
    pub item_code: String,
    pub item_name: String,
    pub uom: String,
    pub basic_price: String,
    pub cells: Vec<MoveCellView>,
    pub balance: String,
    pub balance_amount: String,
}

pub fn stock_detail_rows(rows: &[StockDetailRow]) -> Vec<StockDetailRowView> {
    rows.iter()
        .map(|row| StockDetailRowView {
            item_code: row.item_code.trim().to_string(),
            item_name: row.item_name.clone(),
            uom: row.uom.clone(),
            basic_price: money::inr_opt(row.basic_price),
            cells: MovementKind::ALL
                .into_iter()
                .map(|kind| {
                    let quantity = row.quantity_for(kind);
                    MoveCellView {
                        qty: money::qty(Some(quantity)),
                        link: if crate::models::stock::is_drillable(quantity) {
                            Some(format!(
                                "/reports/stock/movements?item={}&movement={}",
                                row.item_code.trim(),
                                kind.as_key()
                            ))
                        } else {
                            None
                        },
                    }
                })
                .collect(),
            balance: money::qty(Some(row.balance())),
            balance_amount: money::inr(row.balance_amount()),
        })
        .collect()
}

pub struct StockSummaryRowView {
    pub group_name: String,
    pub item_count: i64,
    pub received_amount: String,
    pub issued_amount: String,
    pub balance_amount: String,
}

pub fn stock_summary_rows(rows: &[StockSummaryRow]) -> Vec<StockSummaryRowView> {
    rows.iter()
        .map(|r| StockSummaryRowView {
            group_name: r.group_name.clone(),
            item_count: r.item_count,
            received_amount: money::inr_opt(r.received_amount),
            issued_amount: money::inr_opt(r.issued_amount),
            balance_amount: money::inr_opt(r.balance_amount),
        })
        .collect()
}

pub struct DrillView {
    pub item_code: String,
    pub item_name: String,
    pub movement: &'static str,
    pub rows: Vec<DrillRowView>,
}

pub struct DrillRowView {
    pub doc_refno: String,
    pub doc_date: String,
    pub party: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
}

pub fn drill_view(drill: &DrillState) -> DrillView {
    DrillView {
        item_code: drill.item_code.clone(),
        item_name: drill.item_name.clone(),
        movement: drill.kind.label(),
        rows: drill
            .rows
            .iter()
            .map(|r| DrillRowView {
                doc_refno: r.doc_refno.clone(),
                doc_date: r.doc_date.clone(),
                party: r.party.clone(),
                quantity: money::qty(r.quantity),
                rate: money::inr_opt(r.rate),
                amount: money::inr_opt(r.amount),
            })
            .collect(),
    }
}

#[derive(Template)]
#[template(path = "reports/stock.html")]
pub struct StockPageTemplate {
    pub ctx: PageContext,
    pub store_status: String,
    pub cost_centers: Vec<CostCenterOption>,
    pub from_date: String,
    pub to_date: String,
    pub mode_is_detail: bool,
    pub movement_labels: Vec<&'static str>,
    pub stats: Vec<StatCard>,
    pub detail_rows: Vec<StockDetailRowView>,
    pub summary_rows: Vec<StockSummaryRowView>,
    pub drill: Option<DrillView>,
    pub loaded: bool,
    pub error: Option<String>,
    pub can_export: bool,
}

// ---------------------------------------------------------------------------
// Indents
// ---------------------------------------------------------------------------

pub struct IndentRowView {
    pub indent_no: String,
    pub indent_date: String,
    pub department: String,
    pub status: String,
    pub badge: &'static str,
    pub item_count: i64,
    pub value: String,
}

pub fn indent_rows(rows: &[IndentRow]) -> Vec<IndentRowView> {
    rows.iter()
        .map(|r| IndentRowView {
            indent_no: r.indent_no.clone(),
            indent_date: r.indent_date.clone(),
            department: r.department.clone(),
            status: r.status.clone(),
            badge: indent::status_badge(&r.status),
            item_count: r.item_count,
            value: money::inr_opt(r.value),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "reports/indents.html")]
pub struct IndentsPageTemplate {
    pub ctx: PageContext,
    pub cost_centers: Vec<CostCenterOption>,
    pub status: String,
    pub from_date: String,
    pub to_date: String,
    pub stats: Vec<StatCard>,
    pub rows: Vec<IndentRowView>,
    pub loaded: bool,
    pub error: Option<String>,
    pub can_export: bool,
}
