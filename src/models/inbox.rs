use serde::{Deserialize, Serialize};

/// One pending approval record surfaced to a role.
#[derive(Debug, Clone, Deserialize)]
pub struct InboxItem {
    #[serde(rename = "TransactionRefno")]
    pub refno: String,
    #[serde(rename = "SubjectId")]
    pub subject_id: String,
    #[serde(rename = "SubjectName")]
    pub subject_name: String,
    #[serde(rename = "MonthYear", default)]
    pub month_year: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
}

/// An available approval action from the status-list lookup.
///
/// The set is server-driven, keyed by (moid, role id, amount); the client
/// renders whatever comes back and never invents entries.
#[derive(Debug, Clone, Deserialize)]
pub struct ApprovalAction {
    #[serde(rename = "ActionType")]
    pub action_type: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Value")]
    pub value: i64,
    #[serde(rename = "Enabled", default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

impl ApprovalAction {
    /// Send-back actions are filtered out on pages that disable that path.
    pub fn is_return(&self) -> bool {
        let t = self.action_type.to_ascii_lowercase();
        t == "return" || t == "sendback" || t == "send_back"
    }
}

pub fn without_return_actions(actions: Vec<ApprovalAction>) -> Vec<ApprovalAction> {
    actions.into_iter().filter(|a| !a.is_return()).collect()
}

/// Body posted once per approval decision. Composed at submit time; there is
/// no retry state beyond the single request/response.
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalPayload {
    #[serde(rename = "TransactionRefno")]
    pub refno: String,
    #[serde(rename = "StatusValue")]
    pub status_value: i64,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "ActionBy")]
    pub action_by: i64,
    #[serde(rename = "RoleId")]
    pub role_id: i64,
}
