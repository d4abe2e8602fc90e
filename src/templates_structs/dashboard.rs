use askama::Template;

use super::common::PageContext;

pub struct DashboardCard {
    pub label: &'static str,
    pub href: &'static str,
    /// Pending count, or a dash when the inbox endpoint was unreachable.
    pub count: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub cards: Vec<DashboardCard>,
}
