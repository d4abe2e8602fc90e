//! State slice behavior: inbox loading, selection generations, report rows.

mod common;

use erpdesk::models::ctc::CtcDetail;
use erpdesk::models::interest::{InterestFilter, InterestRow};
use erpdesk::store::approval::ApprovalSlice;
use erpdesk::store::report::ReportSlice;
use erpdesk::store::stock::{DrillState, StockRows, StockSlice};
use erpdesk::models::cost_center::CostCenter;
use erpdesk::models::stock::MovementKind;

fn cc(code: &str, name: &str) -> CostCenter {
    CostCenter {
        code: code.to_string(),
        name: name.to_string(),
    }
}

// ============================================================================
// APPROVAL SLICE
// ============================================================================

#[test]
fn approval_slice_starts_idle() {
    let slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    assert!(slice.inbox.is_idle());
    assert!(slice.selected.is_none());
    assert!(slice.detail.is_idle());
    assert!(slice.actions.is_empty());
}

#[test]
fn inbox_load_replaces_items() {
    let mut slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    slice.inbox_loading();
    assert!(slice.inbox.is_loading());
    assert!(slice.items().is_empty());

    slice.inbox_loaded(vec![
        common::inbox_item("CTC/2026/0001", "A. Sharma", Some(840000.0)),
        common::inbox_item("CTC/2026/0002", "B. Verma", Some(910000.0)),
    ]);
    assert_eq!(slice.items().len(), 2);
}

#[test]
fn inbox_failure_records_the_error() {
    let mut slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    slice.inbox_failed("upstream returned 502".to_string());
    assert_eq!(slice.inbox.error(), Some("upstream returned 502"));
    assert!(slice.items().is_empty());
}

#[test]
fn select_marks_detail_loading_and_clears_actions() {
    let mut slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    slice.inbox_loaded(vec![common::inbox_item("CTC/2026/0001", "A. Sharma", None)]);

    let generation = slice.select("CTC/2026/0001");
    assert!(slice.detail.is_loading());
    assert_eq!(slice.selected.as_deref(), Some("CTC/2026/0001"));
    assert!(slice.actions.is_empty());
    assert!(generation > 0);
}

#[test]
fn selected_item_follows_the_selection() {
    let mut slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    slice.inbox_loaded(vec![
        common::inbox_item("CTC/2026/0001", "A. Sharma", None),
        common::inbox_item("CTC/2026/0002", "B. Verma", None),
    ]);
    slice.select("CTC/2026/0002");

    let item = slice.selected_item().expect("selected item should resolve");
    assert_eq!(item.subject_name, "B. Verma");
}

#[test]
fn stale_resolution_is_discarded_when_it_arrives_last() {
    let mut slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    let first = slice.select("CTC/2026/0001");
    let second = slice.select("CTC/2026/0002");

    // Second fetch lands first.
    let detail_b = common::ctc_detail("CTC/2026/0002", vec![]);
    assert!(slice.detail_resolved(second, detail_b, vec![common::action("approve", "Approve", 5)]));

    // First fetch arrives late and must be dropped.
    let detail_a = common::ctc_detail("CTC/2026/0001", vec![]);
    assert!(!slice.detail_resolved(first, detail_a, vec![]));

    let shown = slice.detail.ready().expect("detail should stay resolved");
    assert_eq!(shown.refno, "CTC/2026/0002");
    assert_eq!(slice.actions.len(), 1);
}

#[test]
fn stale_resolution_is_discarded_when_it_arrives_first() {
    let mut slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    let first = slice.select("CTC/2026/0001");
    let second = slice.select("CTC/2026/0002");

    // First (superseded) fetch lands while the second is still in flight.
    let detail_a = common::ctc_detail("CTC/2026/0001", vec![]);
    assert!(!slice.detail_resolved(first, detail_a, vec![]));
    assert!(slice.detail.is_loading());

    let detail_b = common::ctc_detail("CTC/2026/0002", vec![]);
    assert!(slice.detail_resolved(second, detail_b, vec![]));
    let shown = slice.detail.ready().expect("detail should resolve");
    assert_eq!(shown.refno, "CTC/2026/0002");
}

#[test]
fn stale_failure_does_not_clobber_the_current_detail() {
    let mut slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    let first = slice.select("CTC/2026/0001");
    let second = slice.select("CTC/2026/0002");

    let detail_b = common::ctc_detail("CTC/2026/0002", vec![]);
    assert!(slice.detail_resolved(second, detail_b, vec![]));
    assert!(!slice.detail_failed(first, "timed out".to_string()));
    assert!(slice.detail.ready().is_some());
}

#[test]
fn clear_selection_supersedes_in_flight_fetches() {
    let mut slice: ApprovalSlice<CtcDetail> = ApprovalSlice::default();
    let generation = slice.select("CTC/2026/0001");
    slice.clear_selection();

    let detail = common::ctc_detail("CTC/2026/0001", vec![]);
    assert!(!slice.detail_resolved(generation, detail, vec![]));
    assert!(slice.selected.is_none());
    assert!(slice.detail.is_idle());
}

// ============================================================================
// REPORT SLICE
// ============================================================================

#[test]
fn view_resolved_replaces_rows_and_clears_errors() {
    let mut slice: ReportSlice<InterestFilter, InterestRow> = ReportSlice::default();
    slice.view_failed("upstream down".to_string());

    slice.view_resolved(vec![common::interest_row("FD-001", 500000.0, 9000.0)]);
    assert!(slice.loaded);
    assert!(slice.error.is_none());
    assert_eq!(slice.rows.len(), 1);
}

#[test]
fn view_failure_keeps_previous_rows_on_screen() {
    let mut slice: ReportSlice<InterestFilter, InterestRow> = ReportSlice::default();
    slice.view_resolved(vec![
        common::interest_row("FD-001", 500000.0, 9000.0),
        common::interest_row("FD-002", 250000.0, 4500.0),
    ]);

    slice.view_failed("upstream returned 502".to_string());
    assert_eq!(slice.rows.len(), 2);
    assert_eq!(slice.error.as_deref(), Some("upstream returned 502"));
    assert!(slice.loaded);
}

#[test]
fn reset_returns_to_defaults() {
    let mut slice: ReportSlice<InterestFilter, InterestRow> = ReportSlice::default();
    slice.filters.cost_center = Some("CC01".to_string());
    slice.view_resolved(vec![common::interest_row("FD-001", 500000.0, 9000.0)]);

    slice.reset();
    assert_eq!(slice.filters, InterestFilter::default());
    assert!(slice.rows.is_empty());
    assert!(!slice.loaded);
    assert!(slice.error.is_none());
}

#[test]
fn reset_then_view_behaves_like_a_fresh_slice() {
    let mut first: ReportSlice<InterestFilter, InterestRow> = ReportSlice::default();
    let mut second: ReportSlice<InterestFilter, InterestRow> = ReportSlice::default();

    first.filters.cost_center = Some("CC09".to_string());
    first.view_failed("bad filters".to_string());
    first.reset();

    first.view_resolved(vec![common::interest_row("FD-003", 100000.0, 1800.0)]);
    second.view_resolved(vec![common::interest_row("FD-003", 100000.0, 1800.0)]);

    assert_eq!(first.filters, second.filters);
    assert_eq!(first.rows.len(), second.rows.len());
    assert_eq!(first.error, second.error);
}

// ============================================================================
// STOCK SLICE
// ============================================================================

#[test]
fn changing_store_status_clears_dependent_cost_centers() {
    let mut slice = StockSlice::default();
    slice.set_store_status(Some("Active".to_string()));
    slice.cost_centers_loaded(vec![cc("CC01", "Central Store"), cc("CC02", "Site Store")]);
    slice.filters.cost_center = Some("CC01".to_string());

    slice.set_store_status(Some("Closed".to_string()));
    assert!(slice.filters.cost_center.is_none());
    assert!(slice.cost_centers.is_empty());
}

#[test]
fn reapplying_the_same_store_status_keeps_the_selection() {
    let mut slice = StockSlice::default();
    slice.set_store_status(Some("Active".to_string()));
    slice.cost_centers_loaded(vec![cc("CC01", "Central Store")]);
    slice.filters.cost_center = Some("CC01".to_string());

    slice.set_store_status(Some("Active".to_string()));
    assert_eq!(slice.filters.cost_center.as_deref(), Some("CC01"));
    assert_eq!(slice.cost_centers.len(), 1);
}

#[test]
fn a_fresh_view_closes_any_open_drill_down() {
    let mut slice = StockSlice::default();
    slice.view_resolved(StockRows::Detail(vec![common::stock_detail_row("ITM-001")]));
    slice.drill_resolved(DrillState {
        item_code: "ITM-001".to_string(),
        item_name: "Hex Bolt M10".to_string(),
        kind: MovementKind::Consumed,
        rows: vec![],
    });
    assert!(slice.drill.is_some());

    slice.view_resolved(StockRows::Detail(vec![]));
    assert!(slice.drill.is_none());
}

#[test]
fn stock_view_failure_keeps_previous_rows() {
    let mut slice = StockSlice::default();
    slice.view_resolved(StockRows::Summary(vec![common::stock_summary_row(
        "Consumables",
        50000.0,
        30000.0,
        20000.0,
    )]));

    slice.view_failed("upstream returned 500".to_string());
    assert_eq!(slice.summary_rows().len(), 1);
    assert!(slice.error.is_some());
}

#[test]
fn row_accessors_are_empty_for_the_other_mode() {
    let mut slice = StockSlice::default();
    slice.view_resolved(StockRows::Detail(vec![common::stock_detail_row("ITM-001")]));
    assert_eq!(slice.detail_rows().len(), 1);
    assert!(slice.summary_rows().is_empty());
}

#[test]
fn stock_reset_keeps_the_default_cost_center() {
    let mut slice = StockSlice::default();
    slice.set_store_status(Some("Active".to_string()));
    slice.view_resolved(StockRows::Detail(vec![common::stock_detail_row("ITM-001")]));
    slice.view_failed("noise".to_string());

    slice.reset(Some("CC01".to_string()));
    assert_eq!(slice.filters.cost_center.as_deref(), Some("CC01"));
    assert!(slice.filters.store_status.is_none());
    assert!(slice.rows.is_none());
    assert!(slice.error.is_none());
    assert!(slice.drill.is_none());
}
