use serde::Deserialize;

/// Cost center master row used to populate report filter dropdowns.
#[derive(Debug, Clone, Deserialize)]
pub struct CostCenter {
    #[serde(rename = "CCode")]
    pub code: String,
    #[serde(rename = "CCName")]
    pub name: String,
}
