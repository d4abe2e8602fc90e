//! Report filter validation, request-time date defaults and row totals.

mod common;

use chrono::NaiveDate;

use erpdesk::api::{EPOCH_FROM_DATE, from_date_or_epoch, to_date_or_today};
use erpdesk::models::daily_issue::{self, DailyIssueFilter};
use erpdesk::models::indent::{self, IndentFilter, status_badge};
use erpdesk::models::interest::{self, InterestFilter};

// ============================================================================
// DATE DEFAULTS
// ============================================================================

#[test]
fn a_chosen_from_date_passes_through() {
    assert_eq!(
        from_date_or_epoch(&Some("2026-04-01".to_string())),
        "2026-04-01"
    );
}

#[test]
fn a_blank_from_date_falls_back_to_the_opening_epoch() {
    assert_eq!(from_date_or_epoch(&None), EPOCH_FROM_DATE);
    assert_eq!(from_date_or_epoch(&Some("   ".to_string())), EPOCH_FROM_DATE);
}

#[test]
fn a_chosen_to_date_passes_through() {
    assert_eq!(to_date_or_today(&Some("2026-06-30".to_string())), "2026-06-30");
}

#[test]
fn a_blank_to_date_defaults_to_a_real_calendar_day() {
    let today = to_date_or_today(&None);
    assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
}

// ============================================================================
// FILTER VALIDATION
// ============================================================================

#[test]
fn interest_report_requires_a_cost_center() {
    let mut filter = InterestFilter::default();
    assert_eq!(
        filter.validate(),
        Err("Select a cost center before viewing the report".to_string())
    );

    filter.cost_center = Some("CC01".to_string());
    assert_eq!(filter.validate(), Ok(()));
}

#[test]
fn interest_dates_are_optional() {
    let filter = InterestFilter {
        cost_center: Some("CC01".to_string()),
        from_date: None,
        to_date: None,
    };
    assert_eq!(filter.validate(), Ok(()));
}

#[test]
fn daily_issues_require_both_cost_center_and_date() {
    let mut filter = DailyIssueFilter::default();
    assert_eq!(
        filter.validate(),
        Err("Select a cost center before viewing the report".to_string())
    );

    filter.cost_center = Some("CC01".to_string());
    assert_eq!(
        filter.validate(),
        Err("Pick an issue date before viewing the report".to_string())
    );

    filter.issue_date = Some("2026-05-12".to_string());
    assert_eq!(filter.validate(), Ok(()));
}

#[test]
fn indents_require_a_cost_center_only() {
    let mut filter = IndentFilter::default();
    assert!(filter.validate().is_err());

    filter.cost_center = Some("CC02".to_string());
    assert_eq!(filter.validate(), Ok(()));
}

// ============================================================================
// TOTALS AND BADGES
// ============================================================================

#[test]
fn interest_totals_sum_principal_and_accrued() {
    let rows = vec![
        common::interest_row("FD-001", 500000.0, 9000.0),
        common::interest_row("FD-002", 250000.0, 4500.0),
    ];
    let t = interest::totals(&rows);
    assert_eq!(t.principal, 750000.0);
    assert_eq!(t.accrued, 13500.0);
}

#[test]
fn daily_issue_totals_sum_quantity_and_amount() {
    let rows = vec![
        common::daily_issue_row("ITM-001", 10.0, 1250.0),
        common::daily_issue_row("ITM-002", 4.0, 640.0),
    ];
    let t = daily_issue::totals(&rows);
    assert_eq!(t.quantity, 14.0);
    assert_eq!(t.amount, 1890.0);
}

#[test]
fn indent_totals_count_rows_and_sum_values() {
    let rows = vec![
        common::indent_row("IND/2026/0101", "Pending", 42000.0),
        common::indent_row("IND/2026/0102", "Approved", 18000.0),
    ];
    let t = indent::totals(&rows);
    assert_eq!(t.count, 2);
    assert_eq!(t.value, 60000.0);
}

#[test]
fn status_badges_map_by_state() {
    assert_eq!(status_badge("Approved"), "badge-ok");
    assert_eq!(status_badge("issued"), "badge-ok");
    assert_eq!(status_badge("Pending"), "badge-warn");
    assert_eq!(status_badge("PARTIAL"), "badge-warn");
    assert_eq!(status_badge("Rejected"), "badge-bad");
    assert_eq!(status_badge("Draft"), "badge-muted");
}
