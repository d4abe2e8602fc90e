use serde::Deserialize;

/// Filters for the accrued interest report. Blank dates stay blank here;
/// request-time defaulting happens in the API layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestFilter {
    pub cost_center: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl InterestFilter {
    /// Cost center is the one mandatory filter on this report.
    pub fn validate(&self) -> Result<(), String> {
        match &self.cost_center {
            Some(cc) if !cc.trim().is_empty() => Ok(()),
            _ => Err("Select a cost center before viewing the report".into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterestRow {
    #[serde(rename = "CCode")]
    pub cost_center: String,
    #[serde(rename = "DepositRefno")]
    pub deposit_refno: String,
    #[serde(rename = "Institution", default)]
    pub institution: String,
    #[serde(rename = "Principal", default)]
    pub principal: Option<f64>,
    #[serde(rename = "RatePct", default)]
    pub rate_pct: Option<f64>,
    #[serde(rename = "Days", default)]
    pub days: Option<i64>,
    #[serde(rename = "Accrued", default)]
    pub accrued: Option<f64>,
    #[serde(rename = "AsOn", default)]
    pub as_on: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InterestTotals {
    pub principal: f64,
    pub accrued: f64,
}

/// Recomputed from the displayed rows after every successful fetch.
pub fn totals(rows: &[InterestRow]) -> InterestTotals {
    let mut t = InterestTotals::default();
    for row in rows {
        t.principal += row.principal.unwrap_or(0.0);
        t.accrued += row.accrued.unwrap_or(0.0);
    }
    t
}
