use serde::Deserialize;

use super::ApprovalDetail;

/// Vendor payment record: invoice lines less deductions gives net payable.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorPaymentDetail {
    #[serde(rename = "Moid")]
    pub moid: i64,
    #[serde(rename = "TransactionRefno")]
    pub refno: String,
    #[serde(rename = "VendorCode")]
    pub vendor_code: String,
    #[serde(rename = "VendorName")]
    pub vendor_name: String,
    #[serde(rename = "InvoiceNo", default)]
    pub invoice_no: String,
    #[serde(rename = "InvoiceDate", default)]
    pub invoice_date: String,
    #[serde(rename = "RemarksHistory", default)]
    pub remarks_history: String,
    #[serde(rename = "Lines", default)]
    pub lines: Vec<PaymentLine>,
    #[serde(rename = "Deductions", default)]
    pub deductions: Vec<PaymentLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLine {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
}

fn sum(lines: &[PaymentLine]) -> f64 {
    lines.iter().map(|l| l.amount.unwrap_or(0.0)).sum()
}

impl VendorPaymentDetail {
    pub fn gross(&self) -> f64 {
        sum(&self.lines)
    }

    pub fn total_deductions(&self) -> f64 {
        sum(&self.deductions)
    }

    pub fn net_payable(&self) -> f64 {
        self.gross() - self.total_deductions()
    }
}

impl ApprovalDetail for VendorPaymentDetail {
    fn moid(&self) -> i64 {
        self.moid
    }

    fn refno(&self) -> &str {
        &self.refno
    }

    fn amount(&self) -> f64 {
        self.net_payable()
    }

    fn remarks_history(&self) -> &str {
        &self.remarks_history
    }
}
