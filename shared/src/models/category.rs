//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "category_name")]
    pub name: String,
    /// Business key used to filter products
    pub category_number: i64,
}
