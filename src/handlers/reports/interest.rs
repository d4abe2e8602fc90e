//! Accrued interest report.

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
use crate::models::interest::{self, InterestFilter};
use crate::store::Store;
use crate::templates_structs::common::{PageContext, StatCard};
use crate::templates_structs::report::{
    InterestPageTemplate, InterestPrintTemplate, cost_center_options, interest_rows,
};

const PAGE_PATH: &str = "/reports/accrued-interest";

pub async fn page(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let ctx = PageContext::build(&session, PAGE_PATH)?;

    // Reference data for the filter dropdown; a failure here degrades to an
    // empty dropdown rather than killing the page.
    let centers = match reports::cost_centers(&api, None).await {
        Ok(centers) => centers,
        Err(e) => {
            log::warn!("Cost center lookup failed: {e}");
            Vec::new()
        }
    };

    let tmpl = store.with(user.uid, |s| {
        let slice = &s.interest;
        let totals = interest::totals(&slice.rows);
        InterestPageTemplate {
            cost_centers: cost_center_options(&centers, slice.filters.cost_center.as_deref()),
            from_date: slice.filters.from_date.clone().unwrap_or_default(),
            to_date: slice.filters.to_date.clone().unwrap_or_default(),
            stats: vec![
                StatCard {
                    label: "Deposits".into(),
                    value: slice.rows.len().to_string(),
                },
                StatCard {
                    label: "Total Principal".into(),
                    value: crate::money::inr(totals.principal),
                },
                StatCard {
                    label: "Accrued Interest".into(),
                    value: crate::money::inr(totals.accrued),
                },
            ],
            rows: interest_rows(&slice.rows),
            loaded: slice.loaded,
            error: slice.error.clone(),
            can_export: slice.has_rows(),
            ctx,
        }
    });

    render(tmpl)
}

#[derive(Deserialize)]
pub struct InterestForm {
    pub csrf_token: String,
    pub cost_center: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

pub async fn view(
    api: web::Data<ApiClient>,
    store: web::Data<Store>,
    session: Session,
    form: web::Form<InterestForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user = current_user(&session)?;

    let form = form.into_inner();
    let filters = InterestFilter {
        cost_center: clean(form.cost_center),
        from_date: clean(form.from_date),
        to_date: clean(form.to_date),
    };
    store.with(user.uid, |s| s.interest.filters = filters.clone());

    // Missing required filters warn and fetch nothing; rows already on
    // screen stay as they are.
    if let Err(message) = filters.validate() {
        flash(&session, &message);
        return Ok(see_other(PAGE_PATH));
    }

    match reports::accrued_interest(&api, &filters).await {
        Ok(rows) => store.with(user.uid, |s| s.interest.view_resolved(rows)),
        Err(e) => {
            log::warn!("Accrued interest fetch failed: {e}");
            store.with(user.uid, |s| {
                s.interest.view_failed("Could not fetch the report".into());
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
        s.interest.reset();
        s.interest.filters.cost_center = user.cost_center.clone();
    });
    Ok(see_other(PAGE_PATH))
}

const CSV_HEADER: &[&str] = &[
    "Cost Center",
    "Deposit Refno",
    "Institution",
    "Principal",
    "Rate %",
    "Days",
    "Accrued",
    "As On",
];

pub async fn export_csv(
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;

    let (views, filters) = store.with(user.uid, |s| {
        (interest_rows(&s.interest.rows), s.interest.filters.clone())
    });
    if views.is_empty() {
        flash(&session, "Nothing to export");
        return Ok(see_other(PAGE_PATH));
    }

    let rows: Vec<Vec<String>> = views
        .into_iter()
        .map(|r| {
            vec![
                r.cost_center,
                r.deposit_refno,
                r.institution,
                r.principal,
                r.rate_pct,
                r.days.to_string(),
                r.accrued,
                r.as_on,
            ]
        })
        .collect();

    match write_csv(CSV_HEADER, &rows) {
        Ok(body) => {
            let filename = export_filename(
                "accrued-interest",
                &[
                    filters.cost_center.as_deref().unwrap_or(""),
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

/// Print-friendly document export; print this page to PDF for filing.
pub async fn print(
    store: web::Data<Store>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;

    let tmpl = store.with(user.uid, |s| {
        let slice = &s.interest;
        let totals = interest::totals(&slice.rows);
        InterestPrintTemplate {
            cost_center: slice.filters.cost_center.clone().unwrap_or_default(),
            from_date: from_date_or_epoch(&slice.filters.from_date),
            to_date: to_date_or_today(&slice.filters.to_date),
            generated_on: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            rows: interest_rows(&slice.rows),
            total_principal: crate::money::inr(totals.principal),
            total_accrued: crate::money::inr(totals.accrued),
        }
    });

    render(tmpl)
}
