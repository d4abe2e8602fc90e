//! Endpoints backing the report pages. Date filters are defaulted here, at
//! request time, so blank values never leak back into stored filter state.

use crate::api::{ApiClient, from_date_or_epoch, to_date_or_today};
use crate::errors::AppError;
use crate::models::cost_center::CostCenter;
use crate::models::daily_issue::{DailyIssueFilter, DailyIssueRow};
use crate::models::indent::{IndentFilter, IndentRow};
use crate::models::interest::{InterestFilter, InterestRow};
use crate::models::stock::{MovementKind, StockDetailRow, StockFilter, StockMovementRow, StockSummaryRow};

/// Cost center dropdown options, optionally scoped by store status.
pub async fn cost_centers(
    api: &ApiClient,
    store_status: Option<&str>,
) -> Result<Vec<CostCenter>, AppError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(status) = store_status {
        query.push(("StoreStatus", status.to_string()));
    }
    api.get_rows("masters/cost-centers", &query).await
}

pub async fn accrued_interest(
    api: &ApiClient,
    filters: &InterestFilter,
) -> Result<Vec<InterestRow>, AppError> {
    api.get_rows(
        "finance/accrued-interest",
        &[
            ("CCode", filters.cost_center.clone().unwrap_or_default()),
            ("FromDate", from_date_or_epoch(&filters.from_date)),
            ("ToDate", to_date_or_today(&filters.to_date)),
        ],
    )
    .await
}

pub async fn daily_issues(
    api: &ApiClient,
    filters: &DailyIssueFilter,
) -> Result<Vec<DailyIssueRow>, AppError> {
    api.get_rows(
        "stores/daily-issues",
        &[
            ("CCode", filters.cost_center.clone().unwrap_or_default()),
            ("IssueDate", to_date_or_today(&filters.issue_date)),
        ],
    )
    .await
}

pub async fn stock_detail(
    api: &ApiClient,
    filters: &StockFilter,
) -> Result<Vec<StockDetailRow>, AppError> {
    api.get_rows(
        "stores/stock-reconciliation/detail",
        &[
            ("CCode", filters.cost_center.clone().unwrap_or_default()),
            ("FromDate", from_date_or_epoch(&filters.from_date)),
            ("ToDate", to_date_or_today(&filters.to_date)),
        ],
    )
    .await
}

pub async fn stock_summary(
    api: &ApiClient,
    filters: &StockFilter,
) -> Result<Vec<StockSummaryRow>, AppError> {
    api.get_rows(
        "stores/stock-reconciliation/summary",
        &[
            ("StoreStatus", filters.store_status.clone().unwrap_or_default()),
            ("FromDate", from_date_or_epoch(&filters.from_date)),
            ("ToDate", to_date_or_today(&filters.to_date)),
        ],
    )
    .await
}

/// Drill-down into the documents behind one movement cell. Item codes from
/// upstream have been seen with stray padding, so the key is trimmed before
/// use.
pub async fn stock_movements(
    api: &ApiClient,
    filters: &StockFilter,
    item_code: &str,
    kind: MovementKind,
) -> Result<Vec<StockMovementRow>, AppError> {
    api.get_rows(
        "stores/stock-reconciliation/movements",
        &[
            ("CCode", filters.cost_center.clone().unwrap_or_default()),
            ("ItemCode", item_code.trim().to_string()),
            ("Movement", kind.as_key().to_string()),
            ("FromDate", from_date_or_epoch(&filters.from_date)),
            ("ToDate", to_date_or_today(&filters.to_date)),
        ],
    )
    .await
}

pub async fn indents(api: &ApiClient, filters: &IndentFilter) -> Result<Vec<IndentRow>, AppError> {
    let mut query = vec![
        ("CCode", filters.cost_center.clone().unwrap_or_default()),
        ("FromDate", from_date_or_epoch(&filters.from_date)),
        ("ToDate", to_date_or_today(&filters.to_date)),
    ];
    if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
        query.push(("Status", status.to_string()));
    }
    api.get_rows("stores/indents", &query).await
}
