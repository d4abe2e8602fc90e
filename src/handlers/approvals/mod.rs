pub mod ctc;
pub mod pay_revision;
pub mod vendor_payment;

use serde::Deserialize;

/// Query parameters shared by all inbox pages: the selected reference number
/// and an explicit, user-initiated retry of the pending list.
#[derive(Deserialize)]
pub struct InboxQuery {
    pub selected: Option<String>,
    pub retry: Option<String>,
}

/// Form posted by the action buttons.
#[derive(Deserialize)]
pub struct ActionForm {
    pub csrf_token: String,
    pub action_value: i64,
    pub comment: String,
    /// Checkbox; present only when ticked.
    pub verified: Option<String>,
}
