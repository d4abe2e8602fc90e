use serde::Deserialize;

/// Filters for the indents report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndentFilter {
    pub cost_center: Option<String>,
    pub status: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl IndentFilter {
    pub fn validate(&self) -> Result<(), String> {
        match &self.cost_center {
            Some(cc) if !cc.trim().is_empty() => Ok(()),
            _ => Err("Select a cost center before viewing indents".into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndentRow {
    #[serde(rename = "IndentNo")]
    pub indent_no: String,
    #[serde(rename = "IndentDate", default)]
    pub indent_date: String,
    #[serde(rename = "Department", default)]
    pub department: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "ItemCount", default)]
    pub item_count: i64,
    #[serde(rename = "Value", default)]
    pub value: Option<f64>,
}

/// Map an upstream status code to a badge style class.
pub fn status_badge(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "approved" | "issued" => "badge-ok",
        "pending" | "partial" => "badge-warn",
        "rejected" | "cancelled" => "badge-bad",
        _ => "badge-muted",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndentTotals {
    pub count: usize,
    pub value: f64,
}

pub fn totals(rows: &[IndentRow]) -> IndentTotals {
    IndentTotals {
        count: rows.len(),
        value: rows.iter().map(|r| r.value.unwrap_or(0.0)).sum(),
    }
}
