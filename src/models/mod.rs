pub mod cost_center;
pub mod ctc;
pub mod daily_issue;
pub mod inbox;
pub mod indent;
pub mod interest;
pub mod pay_revision;
pub mod remarks;
pub mod stock;
pub mod vendor_payment;

/// Common surface of the three approval detail records. The action-set lookup
/// is keyed on the module id and amount carried here, not on the list summary.
pub trait ApprovalDetail {
    fn moid(&self) -> i64;
    fn refno(&self) -> &str;
    fn amount(&self) -> f64;
    fn remarks_history(&self) -> &str;
}
