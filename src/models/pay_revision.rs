use serde::Deserialize;

use super::ApprovalDetail;

/// Labour pay revision record: current vs revised wage components.
#[derive(Debug, Clone, Deserialize)]
pub struct PayRevisionDetail {
    #[serde(rename = "Moid")]
    pub moid: i64,
    #[serde(rename = "TransactionRefno")]
    pub refno: String,
    #[serde(rename = "LabourId")]
    pub labour_id: String,
    #[serde(rename = "LabourName")]
    pub labour_name: String,
    #[serde(rename = "Trade", default)]
    pub trade: String,
    #[serde(rename = "EffectiveFrom", default)]
    pub effective_from: String,
    #[serde(rename = "RemarksHistory", default)]
    pub remarks_history: String,
    #[serde(rename = "Components", default)]
    pub components: Vec<PayRevisionRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayRevisionRow {
    #[serde(rename = "Component")]
    pub component: String,
    #[serde(rename = "Current", default)]
    pub current: Option<f64>,
    #[serde(rename = "Revised", default)]
    pub revised: Option<f64>,
}

impl PayRevisionRow {
    pub fn difference(&self) -> f64 {
        self.revised.unwrap_or(0.0) - self.current.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayRevisionTotals {
    pub current: f64,
    pub revised: f64,
    pub difference: f64,
}

pub fn totals(components: &[PayRevisionRow]) -> PayRevisionTotals {
    let mut t = PayRevisionTotals::default();
    for row in components {
        t.current += row.current.unwrap_or(0.0);
        t.revised += row.revised.unwrap_or(0.0);
    }
    t.difference = t.revised - t.current;
    t
}

impl ApprovalDetail for PayRevisionDetail {
    fn moid(&self) -> i64 {
        self.moid
    }

    fn refno(&self) -> &str {
        &self.refno
    }

    fn amount(&self) -> f64 {
        totals(&self.components).revised
    }

    fn remarks_history(&self) -> &str {
        &self.remarks_history
    }
}
