//! Stock reconciliation arithmetic, mode validation and drill-down rules.

mod common;

use erpdesk::models::stock::{
    MovementKind, StockFilter, StockMode, detail_totals, is_drillable, summary_totals,
};

// ============================================================================
// BALANCE ARITHMETIC
// ============================================================================

#[test]
fn balance_is_inward_minus_outward() {
    let row = common::stock_detail_row("ITM-001");
    // (100 + 20 + 30) - (10 + 5 + 60 + 2 + 3)
    assert_eq!(row.balance(), 70.0);
}

#[test]
fn missing_movements_count_as_zero() {
    let row = erpdesk::models::stock::StockDetailRow {
        item_code: "ITM-002".to_string(),
        item_name: "Gasket".to_string(),
        received_central: Some(40.0),
        consumed: Some(15.0),
        ..Default::default()
    };
    assert_eq!(row.balance(), 25.0);
    assert_eq!(row.balance_amount(), 0.0);
}

#[test]
fn balance_amount_is_priced_at_the_basic_rate() {
    let row = common::stock_detail_row("ITM-001");
    assert_eq!(row.balance_amount(), 70.0 * 12.5);
}

#[test]
fn quantity_for_reads_the_matching_column() {
    let row = common::stock_detail_row("ITM-001");
    assert_eq!(row.quantity_for(MovementKind::ReceivedCentral), 100.0);
    assert_eq!(row.quantity_for(MovementKind::Consumed), 60.0);
    assert_eq!(row.quantity_for(MovementKind::Scrapped), 3.0);
}

#[test]
fn detail_totals_accumulate_across_rows() {
    let rows = vec![common::stock_detail_row("ITM-001"), common::stock_detail_row("ITM-002")];
    let t = detail_totals(&rows);
    assert_eq!(t.balance_qty, 140.0);
    assert_eq!(t.balance_amount, 2.0 * 70.0 * 12.5);
}

#[test]
fn summary_totals_accumulate_across_groups() {
    let rows = vec![
        common::stock_summary_row("Consumables", 50000.0, 30000.0, 20000.0),
        common::stock_summary_row("Spares", 10000.0, 4000.0, 6000.0),
    ];
    let t = summary_totals(&rows);
    assert_eq!(t.received_amount, 60000.0);
    assert_eq!(t.issued_amount, 34000.0);
    assert_eq!(t.balance_amount, 26000.0);
}

// ============================================================================
// MODE AND FILTERS
// ============================================================================

#[test]
fn the_default_mode_is_detail() {
    assert_eq!(StockMode::default(), StockMode::Detail);
}

#[test]
fn mode_strings_round_trip() {
    assert_eq!(StockMode::parse("Detail"), Some(StockMode::Detail));
    assert_eq!(StockMode::parse("Summary"), Some(StockMode::Summary));
    assert_eq!(StockMode::parse("summary"), None);
    assert_eq!(StockMode::Summary.as_str(), "Summary");
}

#[test]
fn detail_mode_demands_a_cost_center() {
    let mut filter = StockFilter {
        store_status: Some("Active".to_string()),
        ..Default::default()
    };
    assert!(filter.validate().is_err());

    filter.cost_center = Some("CC01".to_string());
    assert_eq!(filter.validate(), Ok(()));
}

#[test]
fn summary_mode_demands_a_store_status() {
    let mut filter = StockFilter {
        mode: StockMode::Summary,
        cost_center: Some("CC01".to_string()),
        ..Default::default()
    };
    assert!(filter.validate().is_err());

    filter.store_status = Some("Active".to_string());
    assert_eq!(filter.validate(), Ok(()));
}

#[test]
fn whitespace_selections_do_not_satisfy_validation() {
    let filter = StockFilter {
        cost_center: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(filter.validate().is_err());
}

// ============================================================================
// DRILL-DOWN
// ============================================================================

#[test]
fn movement_keys_round_trip_for_every_column() {
    for kind in MovementKind::ALL {
        assert_eq!(MovementKind::parse(kind.as_key()), Some(kind));
    }
    assert_eq!(MovementKind::parse("melted"), None);
}

#[test]
fn only_positive_quantities_open_a_drill_down() {
    assert!(is_drillable(0.5));
    assert!(!is_drillable(0.0));
    assert!(!is_drillable(-4.0));
}
