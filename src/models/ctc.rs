use serde::Deserialize;

use super::ApprovalDetail;

/// Full CTC record for one employee-month, fetched by reference number.
#[derive(Debug, Clone, Deserialize)]
pub struct CtcDetail {
    #[serde(rename = "Moid")]
    pub moid: i64,
    #[serde(rename = "TransactionRefno")]
    pub refno: String,
    #[serde(rename = "EmployeeId")]
    pub employee_id: String,
    #[serde(rename = "EmployeeName")]
    pub employee_name: String,
    #[serde(rename = "Designation", default)]
    pub designation: String,
    #[serde(rename = "MonthYear", default)]
    pub month_year: String,
    #[serde(rename = "RemarksHistory", default)]
    pub remarks_history: String,
    #[serde(rename = "Heads", default)]
    pub heads: Vec<CtcHead>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CtcHead {
    #[serde(rename = "HeadName")]
    pub head_name: String,
    /// Grouping label from payroll masters: Earnings, Deductions, Benefits.
    #[serde(rename = "HeadGroup")]
    pub head_group: String,
    #[serde(rename = "Monthly", default)]
    pub monthly: Option<f64>,
    #[serde(rename = "Annual", default)]
    pub annual: Option<f64>,
}

/// One rendered section of the head breakdown, with its own subtotals.
#[derive(Debug, Clone)]
pub struct CtcSection {
    pub label: String,
    pub rows: Vec<CtcHead>,
    pub monthly_total: f64,
    pub annual_total: f64,
}

impl CtcSection {
    fn is_deduction(&self) -> bool {
        self.label.eq_ignore_ascii_case("deductions")
    }
}

/// Group pay-head rows into sections in first-seen order, preserving the
/// ordering the payroll master defines.
pub fn group_heads(heads: &[CtcHead]) -> Vec<CtcSection> {
    let mut sections: Vec<CtcSection> = Vec::new();
    for head in heads {
        let idx = match sections.iter().position(|s| s.label == head.head_group) {
            Some(i) => i,
            None => {
                sections.push(CtcSection {
                    label: head.head_group.clone(),
                    rows: Vec::new(),
                    monthly_total: 0.0,
                    annual_total: 0.0,
                });
                sections.len() - 1
            }
        };
        let section = &mut sections[idx];
        section.monthly_total += head.monthly.unwrap_or(0.0);
        section.annual_total += head.annual.unwrap_or(0.0);
        section.rows.push(head.clone());
    }
    sections
}

/// Net annual CTC: earnings and benefits add, deductions subtract.
pub fn net_annual(sections: &[CtcSection]) -> f64 {
    sections.iter().fold(0.0, |acc, s| {
        if s.is_deduction() {
            acc - s.annual_total
        } else {
            acc + s.annual_total
        }
    })
}

impl ApprovalDetail for CtcDetail {
    fn moid(&self) -> i64 {
        self.moid
    }

    fn refno(&self) -> &str {
        &self.refno
    }

    fn amount(&self) -> f64 {
        net_annual(&group_heads(&self.heads))
    }

    fn remarks_history(&self) -> &str {
        &self.remarks_history
    }
}
