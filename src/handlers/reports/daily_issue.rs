//! Daily issued items report.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, reports, to_date_or_today};
use crate::auth::csrf;
use crate::auth::session::{current_user, flash};
use crate::errors::{AppError, render};
use crate::export::{export_filename, write_csv};
use crate::handlers::reports::{clean, csv_response};
use crate::handlers::see_other;
use crate::models::daily_issue::{self, DailyIssueFilter};
use crate::store::Store;
use crate::templates_structs::common::{PageContext, StatCard};
use crate::templates_structs::report::{
    DailyIssuePageTemplate, cost_center_options, daily_issue_rows,
};

const PAGE_PATH: &str = "/reports/daily-issues";

pub async fn page(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let ctx = PageContext::build(&session, PAGE_PATH)?;

    let centers = match reports::cost_centers(&api, None).await {
        Ok(centers) => centers,
        Err(e) => {
            log::warn!("Cost center lookup failed: {e}");
            Vec::new()
        }
    };

    let tmpl = store.with(user.uid, |s| {
        let slice = &s.daily_issue;
        let totals = daily_issue::totals(&slice.rows);
        DailyIssuePageTemplate {
            cost_centers: cost_center_options(&centers, slice.filters.cost_center.as_deref()),
            issue_date: slice.filters.issue_date.clone().unwrap_or_default(),
            stats: vec![
                StatCard {
                    label: "Items Issued".into(),
                    value: slice.rows.len().to_string(),
                },
                StatCard {
                    label: "Total Quantity".into(),
                    value: crate::money::qty(Some(totals.quantity)),
                },
                StatCard {
                    label: "Total Amount".into(),
                    value: crate::money::inr(totals.amount),
                },
            ],
            rows: daily_issue_rows(&slice.rows),
            loaded: slice.loaded,
            error: slice.error.clone(),
            can_export: slice.has_rows(),
            ctx,
        }
    });

    render(tmpl)
}

#[derive(Deserialize)]
pub struct DailyIssueForm {
    pub csrf_token: String,
    pub cost_center: Option<String>,
    pub issue_date: Option<String>,
}

pub async fn view(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
    form: web::Form<DailyIssueForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = current_user(&session)?;

    let form = form.into_inner();
    let filters = DailyIssueFilter {
        cost_center: clean(form.cost_center),
        issue_date: clean(form.issue_date),
    };
    store.with(user.uid, |s| s.daily_issue.filters = filters.clone());

    if let Err(message) = filters.validate() {
        flash(&session, &message);
        return Ok(see_other(PAGE_PATH));
    }

    match reports::daily_issues(&api, &filters).await {
        Ok(rows) => store.with(user.uid, |s| s.daily_issue.view_resolved(rows)),
        Err(e) => {
            log::warn!("Daily issues fetch failed: {e}");
            store.with(user.uid, |s| {
                s.daily_issue.view_failed("Could not fetch the report".into());
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
    store.with(user.uid, |s| {
        s.daily_issue.reset();
        s.daily_issue.filters.cost_center = user.cost_center.clone();
    });
    Ok(see_other(PAGE_PATH))
}

const CSV_HEADER: &[&str] = &[
    "Item Code",
    "Item Name",
    "UOM",
    "Quantity",
    "Rate",
    "Amount",
    "Issued To",
];

pub async fn export_csv(
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;

    let (views, filters) = store.with(user.uid, |s| {
        (daily_issue_rows(&s.daily_issue.rows), s.daily_issue.filters.clone())
    });
    if views.is_empty() {
        flash(&session, "Nothing to export");
        return Ok(see_other(PAGE_PATH));
    }

    let rows: Vec<Vec<String>> = views
        .into_iter()
        .map(|r| {
            vec![
                r.item_code,
                r.item_name,
                r.uom,
                r.quantity,
                r.rate,
                r.amount,
                r.issued_to,
            ]
        })
        .collect();

    match write_csv(CSV_HEADER, &rows) {
        Ok(body) => {
            let filename = export_filename(
                "daily-issues",
                &[
                    filters.cost_center.as_deref().unwrap_or(""),
                    &to_date_or_today(&filters.issue_date),
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
