use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::{ApiClient, approvals};
use crate::auth::session::current_user;
use crate::errors::{AppError, render};
use crate::templates_structs::common::PageContext;
use crate::templates_structs::dashboard::{DashboardCard, DashboardTemplate};

/// Landing page: one card per approval module with its pending count.
pub async fn index(
    api: web::Data<ApiClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let ctx = PageContext::build(&session, "/dashboard")?;

    let count = |result: Result<Vec<_>, AppError>| match result {
        Ok(items) => items.len().to_string(),
        Err(e) => {
            log::warn!("Dashboard count unavailable: {e}");
            "—".to_string()
        }
    };

    let cards = vec![
        DashboardCard {
            label: "CTC Verification",
            href: "/approvals/ctc",
            count: count(approvals::ctc_inbox(&api, user.role_id).await),
        },
        DashboardCard {
            label: "Labour Pay Revision",
            href: "/approvals/pay-revision",
            count: count(approvals::pay_revision_inbox(&api, user.role_id).await),
        },
        DashboardCard {
            label: "Vendor Payments",
            href: "/approvals/vendor-payments",
            count: count(approvals::vendor_payment_inbox(&api, user.role_id).await),
        },
    ];

    render(DashboardTemplate { ctx, cards })
}
