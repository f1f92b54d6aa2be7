//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_number: i64,
    /// Internal (kitchen) display name
    #[serde(rename = "product_name_int")]
    pub name: String,
    pub category_number: i64,
    /// Option group offered for this product, if any
    #[serde(default)]
    pub option_group_number: Option<i64>,
}

/// Selectable product option (e.g. "no onions", "extra cheese")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: i64,
    #[serde(rename = "option_details")]
    pub details: String,
    #[serde(default)]
    pub option_group_number: Option<i64>,
    #[serde(default)]
    pub option_number: Option<i64>,
}

/// Option display name returned by the batch lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionName {
    pub id: i64,
    pub option_details: String,
}
