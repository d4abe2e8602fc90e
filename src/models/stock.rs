use serde::Deserialize;

/// Report mode is a variant, not a flag: Detail and Summary carry different
/// column sets, validation rules and aggregate formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockMode {
    #[default]
    Detail,
    Summary,
}

impl StockMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StockMode::Detail => "Detail",
            StockMode::Summary => "Summary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Detail" => Some(StockMode::Detail),
            "Summary" => Some(StockMode::Summary),
            _ => None,
        }
    }
}

/// Filters for the stock reconciliation report. The cost center dropdown is
/// scoped by store status, so changing the status clears the selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockFilter {
    pub store_status: Option<String>,
    pub cost_center: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub mode: StockMode,
}

impl StockFilter {
    pub fn validate(&self) -> Result<(), String> {
        match self.mode {
            // Detail runs against one store, so the cost center is mandatory.
            StockMode::Detail => match &self.cost_center {
                Some(cc) if !cc.trim().is_empty() => Ok(()),
                _ => Err("Select a cost center before viewing the detail report".into()),
            },
            // Summary aggregates across stores and only needs the status scope.
            StockMode::Summary => match &self.store_status {
                Some(s) if !s.trim().is_empty() => Ok(()),
                _ => Err("Select a store status before viewing the summary report".into()),
            },
        }
    }
}

/// One item row of the Detail reconciliation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockDetailRow {
    #[serde(rename = "ItemCode")]
    pub item_code: String,
    #[serde(rename = "ItemName")]
    pub item_name: String,
    #[serde(rename = "Uom", default)]
    pub uom: String,
    #[serde(rename = "BasicPrice", default)]
    pub basic_price: Option<f64>,
    #[serde(rename = "ReceivedCentral", default)]
    pub received_central: Option<f64>,
    #[serde(rename = "ReceivedOtherCC", default)]
    pub received_other_cc: Option<f64>,
    #[serde(rename = "PurchasedAtCC", default)]
    pub purchased_at_cc: Option<f64>,
    #[serde(rename = "TransferredCentral", default)]
    pub transferred_central: Option<f64>,
    #[serde(rename = "TransferredOtherCC", default)]
    pub transferred_other_cc: Option<f64>,
    #[serde(rename = "Consumed", default)]
    pub consumed: Option<f64>,
    #[serde(rename = "Lost", default)]
    pub lost: Option<f64>,
    #[serde(rename = "Scrapped", default)]
    pub scrapped: Option<f64>,
}

impl StockDetailRow {
    /// Balance = inward movements minus outward movements.
    pub fn balance(&self) -> f64 {
        let inward = self.received_central.unwrap_or(0.0)
            + self.received_other_cc.unwrap_or(0.0)
            + self.purchased_at_cc.unwrap_or(0.0);
        let outward = self.transferred_central.unwrap_or(0.0)
            + self.transferred_other_cc.unwrap_or(0.0)
            + self.consumed.unwrap_or(0.0)
            + self.lost.unwrap_or(0.0)
            + self.scrapped.unwrap_or(0.0);
        inward - outward
    }

    pub fn balance_amount(&self) -> f64 {
        self.balance() * self.basic_price.unwrap_or(0.0)
    }

    pub fn quantity_for(&self, kind: MovementKind) -> f64 {
        let q = match kind {
            MovementKind::ReceivedCentral => self.received_central,
            MovementKind::ReceivedOtherCc => self.received_other_cc,
            MovementKind::PurchasedAtCc => self.purchased_at_cc,
            MovementKind::TransferredCentral => self.transferred_central,
            MovementKind::TransferredOtherCc => self.transferred_other_cc,
            MovementKind::Consumed => self.consumed,
            MovementKind::Lost => self.lost,
            MovementKind::Scrapped => self.scrapped,
        };
        q.unwrap_or(0.0)
    }
}

/// One group row of the Summary reconciliation.
#[derive(Debug, Clone, Deserialize)]
pub struct StockSummaryRow {
    #[serde(rename = "GroupName")]
    pub group_name: String,
    #[serde(rename = "ItemCount", default)]
    pub item_count: i64,
    #[serde(rename = "ReceivedAmount", default)]
    pub received_amount: Option<f64>,
    #[serde(rename = "IssuedAmount", default)]
    pub issued_amount: Option<f64>,
    #[serde(rename = "BalanceAmount", default)]
    pub balance_amount: Option<f64>,
}

/// Movement categories behind the clickable Detail columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    ReceivedCentral,
    ReceivedOtherCc,
    PurchasedAtCc,
    TransferredCentral,
    TransferredOtherCc,
    Consumed,
    Lost,
    Scrapped,
}

impl MovementKind {
    pub const ALL: [MovementKind; 8] = [
        MovementKind::ReceivedCentral,
        MovementKind::ReceivedOtherCc,
        MovementKind::PurchasedAtCc,
        MovementKind::TransferredCentral,
        MovementKind::TransferredOtherCc,
        MovementKind::Consumed,
        MovementKind::Lost,
        MovementKind::Scrapped,
    ];

    /// Stable key used in drill-down query strings.
    pub fn as_key(self) -> &'static str {
        match self {
            MovementKind::ReceivedCentral => "received-central",
            MovementKind::ReceivedOtherCc => "received-other-cc",
            MovementKind::PurchasedAtCc => "purchased-at-cc",
            MovementKind::TransferredCentral => "transferred-central",
            MovementKind::TransferredOtherCc => "transferred-other-cc",
            MovementKind::Consumed => "consumed",
            MovementKind::Lost => "lost",
            MovementKind::Scrapped => "scrapped",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        MovementKind::ALL.into_iter().find(|k| k.as_key() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            MovementKind::ReceivedCentral => "Received (Central)",
            MovementKind::ReceivedOtherCc => "Received (Other CC)",
            MovementKind::PurchasedAtCc => "Purchased at CC",
            MovementKind::TransferredCentral => "Transferred (Central)",
            MovementKind::TransferredOtherCc => "Transferred (Other CC)",
            MovementKind::Consumed => "Consumed",
            MovementKind::Lost => "Lost",
            MovementKind::Scrapped => "Scrapped",
        }
    }
}

/// Only strictly positive quantities open a drill-down; zero and negative
/// cells render as plain text.
pub fn is_drillable(quantity: f64) -> bool {
    quantity > 0.0
}

/// One document row of a movement drill-down.
#[derive(Debug, Clone, Deserialize)]
pub struct StockMovementRow {
    #[serde(rename = "DocRefno")]
    pub doc_refno: String,
    #[serde(rename = "DocDate", default)]
    pub doc_date: String,
    #[serde(rename = "Party", default)]
    pub party: String,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<f64>,
    #[serde(rename = "Rate", default)]
    pub rate: Option<f64>,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StockDetailTotals {
    pub balance_qty: f64,
    pub balance_amount: f64,
}

pub fn detail_totals(rows: &[StockDetailRow]) -> StockDetailTotals {
    let mut t = StockDetailTotals::default();
    for row in rows {
        t.balance_qty += row.balance();
        t.balance_amount += row.balance_amount();
    }
    t
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StockSummaryTotals {
    pub received_amount: f64,
    pub issued_amount: f64,
    pub balance_amount: f64,
}

pub fn summary_totals(rows: &[StockSummaryRow]) -> StockSummaryTotals {
    let mut t = StockSummaryTotals::default();
    for row in rows {
        t.received_amount += row.received_amount.unwrap_or(0.0);
        t.issued_amount += row.issued_amount.unwrap_or(0.0);
        t.balance_amount += row.balance_amount.unwrap_or(0.0);
    }
    t
}
