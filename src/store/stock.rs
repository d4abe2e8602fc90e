//! State slice for the stock reconciliation page.
//!
//! Unlike the generic report slice, the fetched rows are a tagged variant:
//! Detail and Summary modes carry different schemas, so the rows enum switches
//! with the mode instead of sharing one row type.

use crate::models::cost_center::CostCenter;
use crate::models::stock::{MovementKind, StockDetailRow, StockFilter, StockMovementRow, StockSummaryRow};

#[derive(Debug, Clone)]
pub enum StockRows {
    Detail(Vec<StockDetailRow>),
    Summary(Vec<StockSummaryRow>),
}

impl StockRows {
    pub fn is_empty(&self) -> bool {
        match self {
            StockRows::Detail(rows) => rows.is_empty(),
            StockRows::Summary(rows) => rows.is_empty(),
        }
    }
}

/// A resolved drill-down for one item cell of the Detail report.
#[derive(Debug, Clone)]
pub struct DrillState {
    pub item_code: String,
    pub item_name: String,
    pub kind: MovementKind,
    pub rows: Vec<StockMovementRow>,
}

#[derive(Debug, Default)]
pub struct StockSlice {
    pub filters: StockFilter,
    pub cost_centers: Vec<CostCenter>,
    pub rows: Option<StockRows>,
    pub error: Option<String>,
    pub drill: Option<DrillState>,
}

impl StockSlice {
    /// Change the store status prerequisite. The cost center dropdown depends
    /// on it, so the dependent selection and its options are cleared.
    pub fn set_store_status(&mut self, status: Option<String>) {
        if self.filters.store_status != status {
            self.filters.store_status = status;
            self.filters.cost_center = None;
            self.cost_centers.clear();
        }
    }

    pub fn cost_centers_loaded(&mut self, centers: Vec<CostCenter>) {
        self.cost_centers = centers;
    }

    pub fn view_resolved(&mut self, rows: StockRows) {
        self.rows = Some(rows);
        self.error = None;
        self.drill = None;
    }

    /// Record a failure without disturbing previously displayed rows.
    pub fn view_failed(&mut self, error: String) {
        self.error = Some(error);
    }

    pub fn drill_resolved(&mut self, drill: DrillState) {
        self.drill = Some(drill);
    }

    pub fn clear_drill(&mut self) {
        self.drill = None;
    }

    /// Back to default filters (plus the caller-supplied default cost center),
    /// discarding fetched data, errors and any open drill-down.
    pub fn reset(&mut self, default_cost_center: Option<String>) {
        *self = StockSlice::default();
        self.filters.cost_center = default_cost_center;
    }

    pub fn detail_rows(&self) -> &[StockDetailRow] {
        match &self.rows {
            Some(StockRows::Detail(rows)) => rows,
            _ => &[],
        }
    }

    pub fn summary_rows(&self) -> &[StockSummaryRow] {
        match &self.rows {
            Some(StockRows::Summary(rows)) => rows,
            _ => &[],
        }
    }
}
