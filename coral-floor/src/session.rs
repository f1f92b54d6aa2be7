//! Floor session
//!
//! Transient selection state of one floor tablet. Reference data (tables,
//! product names) is cached here per load; orders always come from the
//! server.

use serde::Serialize;
use shared::models::{
    DiningTable, NewOrderLine, OptionSet, OrderLine, OrderStatus, PrintItem, Product,
    TableLocation, TableNumber, UNKNOWN_PRODUCT,
};
use std::collections::HashMap;

use crate::{FloorError, FloorResult};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    /// Tables from the last successful load, all locations
    pub tables: Vec<DiningTable>,
    /// Full product list keyed by product number, for name fallback
    pub reference_products: HashMap<i64, Product>,
    /// Location shown on the board
    pub location: TableLocation,
    pub selected_table: Option<TableNumber>,
    pub selected_category: Option<i64>,
    pub selected_product: Option<Product>,
    pub selected_options: OptionSet,
    pub comment: String,
    /// Ticket staged for the next `POST /print_order`
    pub staged_print: Option<StagedTicket>,
}

/// Pending lines read for one table, kept with the table they came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagedTicket {
    pub table_number: TableNumber,
    pub items: Vec<PrintItem>,
}

impl StagedTicket {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Session {
    pub fn new(location: TableLocation) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }

    /// Tables of one location, in server order
    pub fn tables_at(&self, location: TableLocation) -> Vec<DiningTable> {
        self.tables
            .iter()
            .filter(|t| t.location == location)
            .cloned()
            .collect()
    }

    /// Start a fresh option selection
    pub fn reset_options(&mut self) {
        self.selected_options.clear();
    }

    /// Display name for a line: its own name, the catalog name, or a placeholder
    pub fn product_name(&self, line: &OrderLine) -> String {
        line.product_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.reference_products
                    .get(&line.product_number)
                    .map(|p| p.name.clone())
            })
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string())
    }

    /// Build the `POST /orders` body from the current selection
    pub fn pending_order(&self) -> FloorResult<NewOrderLine> {
        let table_number = self
            .selected_table
            .clone()
            .ok_or(FloorError::NoTableSelected)?;
        let product = self
            .selected_product
            .as_ref()
            .ok_or(FloorError::NoProductSelected)?;
        let category_number = self
            .selected_category
            .ok_or(FloorError::NoCategorySelected)?;

        Ok(NewOrderLine {
            product_number: product.product_number,
            category_number,
            option_number: self.selected_options.to_wire(),
            option_text: self.comment.clone(),
            table_number,
            status: OrderStatus::Pending,
        })
    }
}
