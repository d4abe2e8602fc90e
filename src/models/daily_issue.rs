use serde::Deserialize;

/// Filters for the daily issued items report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyIssueFilter {
    pub cost_center: Option<String>,
    pub issue_date: Option<String>,
}

impl DailyIssueFilter {
    pub fn validate(&self) -> Result<(), String> {
        if self
            .cost_center
            .as_deref()
            .is_none_or(|cc| cc.trim().is_empty())
        {
            return Err("Select a cost center before viewing the report".into());
        }
        if self
            .issue_date
            .as_deref()
            .is_none_or(|d| d.trim().is_empty())
        {
            return Err("Pick an issue date before viewing the report".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyIssueRow {
    #[serde(rename = "ItemCode")]
    pub item_code: String,
    #[serde(rename = "ItemName")]
    pub item_name: String,
    #[serde(rename = "Uom", default)]
    pub uom: String,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<f64>,
    #[serde(rename = "Rate", default)]
    pub rate: Option<f64>,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
    #[serde(rename = "IssuedTo", default)]
    pub issued_to: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyIssueTotals {
    pub quantity: f64,
    pub amount: f64,
}

pub fn totals(rows: &[DailyIssueRow]) -> DailyIssueTotals {
    let mut t = DailyIssueTotals::default();
    for row in rows {
        t.quantity += row.quantity.unwrap_or(0.0);
        t.amount += row.amount.unwrap_or(0.0);
    }
    t
}
