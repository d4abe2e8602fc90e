//! Stock reconciliation report, with Detail and Summary modes and per-cell
//! movement drill-down.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, from_date_or_epoch, reports, to_date_or_today};
use crate::auth::csrf;
use crate::auth::session::{current_user, flash};
use crate::errors::{AppError, render};
use crate::export::{export_filename, write_csv};
use crate::handlers::reports::{clean, csv_response};
use crate::handlers::see_other;
use crate::models::stock::{self, MovementKind, StockMode};
use crate::store::Store;
use crate::store::stock::{DrillState, StockRows};
use crate::templates_structs::common::{PageContext, StatCard};
use crate::templates_structs::report::{
    StockPageTemplate, cost_center_options, drill_view, stock_detail_rows, stock_summary_rows,
};

const PAGE_PATH: &str = "/reports/stock";

pub async fn page(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let ctx = PageContext::build(&session, PAGE_PATH)?;

    // The cost center dropdown is scoped by the chosen store status; reload
    // the options whenever the page renders with a status set.
    let status = store.with(user.uid, |s| s.stock.filters.store_status.clone());
    if let Some(status) = status.as_deref() {
        match reports::cost_centers(&api, Some(status)).await {
            Ok(centers) => store.with(user.uid, |s| s.stock.cost_centers_loaded(centers)),
            Err(e) => log::warn!("Cost center lookup failed: {e}"),
        }
    }

    let tmpl = store.with(user.uid, |s| {
        let slice = &s.stock;
        let mode_is_detail = slice.filters.mode == StockMode::Detail;
        let stats = match slice.filters.mode {
            StockMode::Detail => {
                let totals = stock::detail_totals(slice.detail_rows());
                vec![
                    StatCard {
                        label: "Items".into(),
                        value: slice.detail_rows().len().to_string(),
                    },
                    StatCard {
                        label: "Balance Qty".into(),
                        value: crate::money::qty(Some(totals.balance_qty)),
                    },
                    StatCard {
                        label: "Balance Amount".into(),
                        value: crate::money::inr(totals.balance_amount),
                    },
                ]
            }
            StockMode::Summary => {
                let totals = stock::summary_totals(slice.summary_rows());
                vec![
                    StatCard {
                        label: "Groups".into(),
                        value: slice.summary_rows().len().to_string(),
                    },
                    StatCard {
                        label: "Received Amount".into(),
                        value: crate::money::inr(totals.received_amount),
                    },
                    StatCard {
                        label: "Issued Amount".into(),
                        value: crate::money::inr(totals.issued_amount),
                    },
                    StatCard {
                        label: "Balance Amount".into(),
                        value: crate::money::inr(totals.balance_amount),
                    },
                ]
            }
        };
        StockPageTemplate {
            store_status: slice.filters.store_status.clone().unwrap_or_default(),
            cost_centers: cost_center_options(
                &slice.cost_centers,
                slice.filters.cost_center.as_deref(),
            ),
            from_date: slice.filters.from_date.clone().unwrap_or_default(),
            to_date: slice.filters.to_date.clone().unwrap_or_default(),
            mode_is_detail,
            movement_labels: MovementKind::ALL.iter().map(|k| k.label()).collect(),
            stats,
            detail_rows: stock_detail_rows(slice.detail_rows()),
            summary_rows: stock_summary_rows(slice.summary_rows()),
            drill: slice.drill.as_ref().map(drill_view),
            loaded: slice.rows.is_some(),
            error: slice.error.clone(),
            can_export: slice.rows.as_ref().is_some_and(|r| !r.is_empty()),
            ctx,
        }
    });

    render(tmpl)
}

#[derive(Deserialize)]
pub struct StockForm {
    pub csrf_token: String,
    pub store_status: Option<String>,
    pub cost_center: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub mode: Option<String>,
}

pub async fn view(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
    form: web::Form<StockForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = current_user(&session)?;

    let form = form.into_inner();
    let mode = form
        .mode
        .as_deref()
        .and_then(StockMode::parse)
        .unwrap_or_default();

    let filters = store.with(user.uid, |s| {
        // Changing the status prerequisite clears the dependent cost center.
        s.stock.set_store_status(clean(form.store_status));
        if let Some(cc) = clean(form.cost_center) {
            s.stock.filters.cost_center = Some(cc);
        }
        s.stock.filters.from_date = clean(form.from_date);
        s.stock.filters.to_date = clean(form.to_date);
        s.stock.filters.mode = mode;
        s.stock.filters.clone()
    });

    if let Err(message) = filters.validate() {
        flash(&session, &message);
        return Ok(see_other(PAGE_PATH));
    }

    let fetched = match mode {
        StockMode::Detail => reports::stock_detail(&api, &filters)
            .await
            .map(StockRows::Detail),
        StockMode::Summary => reports::stock_summary(&api, &filters)
            .await
            .map(StockRows::Summary),
    };

    match fetched {
        Ok(rows) => store.with(user.uid, |s| s.stock.view_resolved(rows)),
        Err(e) => {
            log::warn!("Stock reconciliation fetch failed: {e}");
            store.with(user.uid, |s| {
                s.stock.view_failed("Could not fetch the report".into());
            });
            flash(&session, "Could not fetch the report");
        }
    }

    Ok(see_other(PAGE_PATH))
}

#[derive(Deserialize)]
pub struct ResetForm {
    pub csrf_token: String,
}

pub async fn reset(
    store: web::Data<Store>,
    session: Session,
    form: web::Form<ResetForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = current_user(&session)?;
    store.with(user.uid, |s| s.stock.reset(user.cost_center.clone()));
    Ok(see_other(PAGE_PATH))
}

#[derive(Deserialize)]
pub struct MovementQuery {
    pub item: String,
    pub movement: String,
}

/// Drill into the documents behind one movement cell of the Detail report.
pub async fn movements(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
    query: web::Query<MovementQuery>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;

    let Some(kind) = MovementKind::parse(&query.movement) else {
        flash(&session, "Unknown movement column");
        return Ok(see_other(PAGE_PATH));
    };
    let item_code = query.item.trim().to_string();

    let target = store.with(user.uid, |s| {
        s.stock
            .detail_rows()
            .iter()
            .find(|r| r.item_code.trim() == item_code)
            .map(|r| (r.item_name.clone(), r.quantity_for(kind)))
    });
    let Some((item_name, quantity)) = target else {
        flash(&session, "Run the detail report before drilling down");
        return Ok(see_other(PAGE_PATH));
    };
    // Zero and negative cells are not drill-down targets.
    if !stock::is_drillable(quantity) {
        flash(&session, "No documents behind an empty cell");
        return Ok(see_other(PAGE_PATH));
    }

    let filters = store.with(user.uid, |s| s.stock.filters.clone());
    match reports::stock_movements(&api, &filters, &item_code, kind).await {
        Ok(rows) => {
            store.with(user.uid, |s| {
                s.stock.drill_resolved(DrillState {
                    item_code,
                    item_name,
                    kind,
                    rows,
                });
            });
        }
        Err(e) => {
            log::warn!("Stock movement drill-down failed: {e}");
            flash(&session, "Could not fetch the movement documents");
        }
    }

    Ok(see_other(PAGE_PATH))
}

pub async fn close_drill(
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    store.with(user.uid, |s| s.stock.clear_drill());
    Ok(see_other(PAGE_PATH))
}

const DETAIL_HEADER: &[&str] = &[
    "Item Code",
    "Item Name",
    "UOM",
    "Basic Price",
    "Received (Central)",
    "Received (Other CC)",
    "Purchased at CC",
    "Transferred (Central)",
    "Transferred (Other CC)",
    "Consumed",
    "Lost",
    "Scrapped",
    "Balance",
    "Balance Amount",
];

const SUMMARY_HEADER: &[&str] = &[
    "Group",
    "Items",
    "Received Amount",
    "Issued Amount",
    "Balance Amount",
];

pub async fn export_csv(
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;

    let (mode, filters, detail, summary) = store.with(user.uid, |s| {
        (
            s.stock.filters.mode,
            s.stock.filters.clone(),
            stock_detail_rows(s.stock.detail_rows()),
            stock_summary_rows(s.stock.summary_rows()),
        )
    });

    // Column set and row shape follow the mode variant.
    let (header, rows): (&[&str], Vec<Vec<String>>) = match mode {
        StockMode::Detail => (
            DETAIL_HEADER,
            detail
                .into_iter()
                .map(|r| {
                    let mut cols = vec![r.item_code, r.item_name, r.uom, r.basic_price];
                    cols.extend(r.cells.into_iter().map(|c| c.qty));
                    cols.push(r.balance);
                    cols.push(r.balance_amount);
                    cols
                })
                .collect(),
        ),
        StockMode::Summary => (
            SUMMARY_HEADER,
            summary
                .into_iter()
                .map(|r| {
                    vec![
                        r.group_name,
                        r.item_count.to_string(),
                        r.received_amount,
                        r.issued_amount,
                        r.balance_amount,
                    ]
                })
                .collect(),
        ),
    };

    if rows.is_empty() {
        flash(&session, "Nothing to export");
        return Ok(see_other(PAGE_PATH));
    }

    match write_csv(header, &rows) {
        Ok(body) => {
            let scope = match mode {
                StockMode::Detail => filters.cost_center.clone().unwrap_or_default(),
                StockMode::Summary => filters.store_status.clone().unwrap_or_default(),
            };
            let filename = export_filename(
                "stock-reconciliation",
                &[
                    mode.as_str(),
                    &scope,
                    &from_date_or_epoch(&filters.from_date),
                    &to_date_or_today(&filters.to_date),
                ],
                "csv",
            );
            Ok(csv_response(&filename, body))
        }
        Err(e) => {
            log::error!("CSV export failed: {e}");
            flash(&session, "Export failed — the data on screen is unchanged");
            Ok(see_other(PAGE_PATH))
        }
    }
}
