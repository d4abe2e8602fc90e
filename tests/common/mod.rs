//! Shared fixtures for the integration tests.
//!
//! Builders return fully-populated records with predictable values so each
//! test only spells out the fields it cares about.

#![allow(dead_code)]

use erpdesk::models::ctc::{CtcDetail, CtcHead};
use erpdesk::models::daily_issue::DailyIssueRow;
use erpdesk::models::inbox::{ApprovalAction, InboxItem};
use erpdesk::models::indent::IndentRow;
use erpdesk::models::interest::InterestRow;
use erpdesk::models::pay_revision::{PayRevisionDetail, PayRevisionRow};
use erpdesk::models::stock::{StockDetailRow, StockSummaryRow};
use erpdesk::models::vendor_payment::{PaymentLine, VendorPaymentDetail};

pub fn inbox_item(refno: &str, subject: &str, amount: Option<f64>) -> InboxItem {
    InboxItem {
        refno: refno.to_string(),
        subject_id: "EMP-001".to_string(),
        subject_name: subject.to_string(),
        month_year: "Apr-2026".to_string(),
        category: "Regular".to_string(),
        amount,
    }
}

pub fn action(action_type: &str, label: &str, value: i64) -> ApprovalAction {
    ApprovalAction {
        action_type: action_type.to_string(),
        label: label.to_string(),
        value,
        enabled: true,
    }
}

pub fn ctc_head(name: &str, group: &str, monthly: f64, annual: f64) -> CtcHead {
    CtcHead {
        head_name: name.to_string(),
        head_group: group.to_string(),
        monthly: Some(monthly),
        annual: Some(annual),
    }
}

pub fn ctc_detail(refno: &str, heads: Vec<CtcHead>) -> CtcDetail {
    CtcDetail {
        moid: 410,
        refno: refno.to_string(),
        employee_id: "EMP-001".to_string(),
        employee_name: "A. Sharma".to_string(),
        designation: "Engineer".to_string(),
        month_year: "Apr-2026".to_string(),
        remarks_history: String::new(),
        heads,
    }
}

pub fn pay_revision_detail(components: Vec<PayRevisionRow>) -> PayRevisionDetail {
    PayRevisionDetail {
        moid: 420,
        refno: "PR/2026/0007".to_string(),
        labour_id: "LAB-042".to_string(),
        labour_name: "R. Kumar".to_string(),
        trade: "Fitter".to_string(),
        effective_from: "2026-04-01".to_string(),
        remarks_history: String::new(),
        components,
    }
}

pub fn pay_component(component: &str, current: f64, revised: f64) -> PayRevisionRow {
    PayRevisionRow {
        component: component.to_string(),
        current: Some(current),
        revised: Some(revised),
    }
}

pub fn payment_line(description: &str, amount: f64) -> PaymentLine {
    PaymentLine {
        description: description.to_string(),
        amount: Some(amount),
    }
}

pub fn vendor_payment_detail(
    lines: Vec<PaymentLine>,
    deductions: Vec<PaymentLine>,
) -> VendorPaymentDetail {
    VendorPaymentDetail {
        moid: 430,
        refno: "VP/2026/0019".to_string(),
        vendor_code: "V-1001".to_string(),
        vendor_name: "Acme Supplies".to_string(),
        invoice_no: "INV-88".to_string(),
        invoice_date: "2026-04-10".to_string(),
        remarks_history: String::new(),
        lines,
        deductions,
    }
}

pub fn stock_detail_row(item_code: &str) -> StockDetailRow {
    StockDetailRow {
        item_code: item_code.to_string(),
        item_name: "Hex Bolt M10".to_string(),
        uom: "NOS".to_string(),
        basic_price: Some(12.5),
        received_central: Some(100.0),
        received_other_cc: Some(20.0),
        purchased_at_cc: Some(30.0),
        transferred_central: Some(10.0),
        transferred_other_cc: Some(5.0),
        consumed: Some(60.0),
        lost: Some(2.0),
        scrapped: Some(3.0),
    }
}

pub fn stock_summary_row(group: &str, received: f64, issued: f64, balance: f64) -> StockSummaryRow {
    StockSummaryRow {
        group_name: group.to_string(),
        item_count: 4,
        received_amount: Some(received),
        issued_amount: Some(issued),
        balance_amount: Some(balance),
    }
}

pub fn interest_row(deposit_refno: &str, principal: f64, accrued: f64) -> InterestRow {
    InterestRow {
        cost_center: "CC01".to_string(),
        deposit_refno: deposit_refno.to_string(),
        institution: "State Bank".to_string(),
        principal: Some(principal),
        rate_pct: Some(7.25),
        days: Some(90),
        accrued: Some(accrued),
        as_on: "2026-06-30".to_string(),
    }
}

pub fn daily_issue_row(item_code: &str, quantity: f64, amount: f64) -> DailyIssueRow {
    DailyIssueRow {
        item_code: item_code.to_string(),
        item_name: "Welding Rod".to_string(),
        uom: "KG".to_string(),
        quantity: Some(quantity),
        rate: Some(amount / quantity),
        amount: Some(amount),
        issued_to: "Maintenance".to_string(),
    }
}

pub fn indent_row(indent_no: &str, status: &str, value: f64) -> IndentRow {
    IndentRow {
        indent_no: indent_no.to_string(),
        indent_date: "2026-05-12".to_string(),
        department: "Stores".to_string(),
        status: status.to_string(),
        item_count: 3,
        value: Some(value),
    }
}
