//! Indents report.

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
use crate::models::indent::{self, IndentFilter};
use crate::store::Store;
use crate::templates_structs::common::{PageContext, StatCard};
use crate::templates_structs::report::{IndentsPageTemplate, cost_center_options, indent_rows};

const PAGE_PATH: &str = "/reports/indents";

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
        let slice = &s.indents;
        let totals = indent::totals(&slice.rows);
        IndentsPageTemplate {
            cost_centers: cost_center_options(&centers, slice.filters.cost_center.as_deref()),
            status: slice.filters.status.clone().unwrap_or_default(),
            from_date: slice.filters.from_date.clone().unwrap_or_default(),
            to_date: slice.filters.to_date.clone().unwrap_or_default(),
            stats: vec![
                StatCard {
                    label: "Indents".into(),
                    value: totals.count.to_string(),
                },
                StatCard {
                    label: "Total Value".into(),
                    value: crate::money::inr(totals.value),
                },
            ],
            rows: indent_rows(&slice.rows),
            loaded: slice.loaded,
            error: slice.error.clone(),
            can_export: slice.has_rows(),
            ctx,
        }
    });

    render(tmpl)
}

#[derive(Deserialize)]
pub struct IndentForm {
    pub csrf_token: String,
    pub cost_center: Option<String>,
    pub status: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

pub async fn view(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
    form: web::Form<IndentForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = current_user(&session)?;

    let form = form.into_inner();
    let filters = IndentFilter {
        cost_center: clean(form.cost_center),
        status: clean(form.status),
        from_date: clean(form.from_date),
        to_date: clean(form.to_date),
    };
    store.with(user.uid, |s| s.indents.filters = filters.clone());

    if let Err(message) = filters.validate() {
        flash(&session, &message);
        return Ok(see_other(PAGE_PATH));
    }

    match reports::indents(&api, &filters).await {
        Ok(rows) => store.with(user.uid, |s| s.indents.view_resolved(rows)),
        Err(e) => {
            log::warn!("Indent report fetch failed: {e}");
            store.with(user.uid, |s| {
                s.indents.view_failed("Could not fetch the report".into());
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
        s.indents.reset();
        s.indents.filters.cost_center = user.cost_center.clone();
    });
    Ok(see_other(PAGE_PATH))
}

const CSV_HEADER: &[&str] = &[
    "Indent No",
    "Indent Date",
    "Department",
    "Status",
    "Items",
    "Value",
];

pub async fn export_csv(
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;

    let (views, filters) = store.with(user.uid, |s| {
        (indent_rows(&s.indents.rows), s.indents.filters.clone())
    });
    if views.is_empty() {
        flash(&session, "Nothing to export");
        return Ok(see_other(PAGE_PATH));
    }

    let rows: Vec<Vec<String>> = views
        .into_iter()
        .map(|r| {
            vec![
                r.indent_no,
                r.indent_date,
                r.department,
                r.status,
                r.item_count.to_string(),
                r.value,
            ]
        })
        .collect();

    match write_csv(CSV_HEADER, &rows) {
        Ok(body) => {
            let filename = export_filename(
                "indents",
                &[
                    filters.cost_center.as_deref().unwrap_or(""),
                    filters.status.as_deref().unwrap_or("all"),
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
