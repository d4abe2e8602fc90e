//! Per-feature page state, server-side.
//!
//! Each feature owns a slice: an explicit state struct with loading flag,
//! error, data and filters, mutated only through its reducer methods. One
//! `Store` instance lives for the application lifetime; slices are keyed by
//! user id so concurrent users never share state.

pub mod approval;
pub mod fetch;
pub mod report;
pub mod stock;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::ctc::CtcDetail;
use crate::models::daily_issue::{DailyIssueFilter, DailyIssueRow};
use crate::models::indent::{IndentFilter, IndentRow};
use crate::models::interest::{InterestFilter, InterestRow};
use crate::models::pay_revision::PayRevisionDetail;
use crate::models::vendor_payment::VendorPaymentDetail;

/// All page state for one signed-in user.
#[derive(Default)]
pub struct UserState {
    pub ctc: approval::ApprovalSlice<CtcDetail>,
    pub pay_revision: approval::ApprovalSlice<PayRevisionDetail>,
    pub vendor_payment: approval::ApprovalSlice<VendorPaymentDetail>,
    pub interest: report::ReportSlice<InterestFilter, InterestRow>,
    pub daily_issue: report::ReportSlice<DailyIssueFilter, DailyIssueRow>,
    pub stock: stock::StockSlice,
    pub indents: report::ReportSlice<IndentFilter, IndentRow>,
}

#[derive(Default)]
pub struct Store {
    users: Mutex<HashMap<i64, UserState>>,
}

impl Store {
    /// Run a closure against one user's state, creating it on first touch.
    pub fn with<R>(&self, uid: i64, f: impl FnOnce(&mut UserState) -> R) -> R {
        let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        f(users.entry(uid).or_default())
    }
}
