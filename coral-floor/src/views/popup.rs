//! Confirmation popup view

use serde::Serialize;
use shared::models::TableNumber;

/// Action bound to the popup's confirm control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PopupKind {
    RemoveLine { order_id: i64 },
    ClearTable { table_number: TableNumber },
    DiscardTable { table_number: TableNumber },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupView {
    pub kind: PopupKind,
    pub message: String,
}

impl PopupView {
    pub fn remove_line(order_id: i64, product_name: &str, table_number: &TableNumber) -> Self {
        Self {
            kind: PopupKind::RemoveLine { order_id },
            message: format!(
                "Delete product \"{}\" from table {}?",
                product_name, table_number
            ),
        }
    }

    pub fn clear_table(table_number: &TableNumber) -> Self {
        Self {
            kind: PopupKind::ClearTable {
                table_number: table_number.clone(),
            },
            message: format!("Delete all records from table {}?", table_number),
        }
    }

    pub fn discard_table(table_number: &TableNumber) -> Self {
        Self {
            kind: PopupKind::DiscardTable {
                table_number: table_number.clone(),
            },
            message: format!("Discard all orders of table {}?", table_number),
        }
    }
}
