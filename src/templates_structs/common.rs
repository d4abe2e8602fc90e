use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{current_user, take_flash};
use crate::errors::AppError;

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.username`, `ctx.nav_links`, etc.
pub struct PageContext {
    pub username: String,
    pub role_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub nav_links: Vec<NavLink>,
}

const NAV: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/approvals/ctc", "CTC Verification"),
    ("/approvals/pay-revision", "Pay Revision"),
    ("/approvals/vendor-payments", "Vendor Payments"),
    ("/reports/accrued-interest", "Accrued Interest"),
    ("/reports/daily-issues", "Daily Issues"),
    ("/reports/stock", "Stock Reconciliation"),
    ("/reports/indents", "Indents"),
];

impl PageContext {
    pub fn build(session: &Session, current_path: &str) -> Result<Self, AppError> {
        let user = current_user(session)?;
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let nav_links = NAV
            .iter()
            .map(|(href, label)| NavLink {
                href,
                label,
                active: *href == current_path,
            })
            .collect();
        Ok(PageContext {
            username: user.username,
            role_name: user.role_name,
            flash,
            csrf_token,
            nav_links,
        })
    }
}

/// A small headline figure rendered as a card above a table.
pub struct StatCard {
    pub label: String,
    pub value: String,
}
