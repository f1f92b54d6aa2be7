//! Order line lists: the table modal, the pending preview and the print ticket

use serde::Serialize;
use shared::models::{NO_COMMENT, OrderLine, PrintItem, TableNumber};
use std::collections::HashSet;

use crate::OptionNames;
use crate::session::Session;

/// Shown when a table has no open lines
pub const EMPTY_ORDER_LIST: &str = "List is empty";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRowView {
    pub order_id: i64,
    pub product_number: i64,
    pub product_name: String,
    /// Resolved option names, or "No option"
    pub options: String,
    /// Comment, or "No comment"
    pub comment: String,
    /// Stepper value, display only
    pub quantity: u32,
    /// Removed or discarded locally, kept until the next fetch
    pub hidden: bool,
}

impl OrderRowView {
    pub fn from_line(line: &OrderLine, names: &OptionNames, session: &Session) -> Self {
        Self {
            order_id: line.id,
            product_number: line.product_number,
            product_name: session.product_name(line),
            options: names.label_for(&line.option_number),
            comment: line.comment().unwrap_or(NO_COMMENT).to_string(),
            quantity: 1,
            hidden: false,
        }
    }

    pub fn to_print_item(&self) -> PrintItem {
        PrintItem {
            id: self.order_id,
            product_name: self.product_name.clone(),
            option_details: self.options.clone(),
            option_text: self.comment.clone(),
            product_number: self.product_number,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderListView {
    pub table_number: Option<TableNumber>,
    pub title: String,
    pub rows: Vec<OrderRowView>,
    pub empty_message: Option<String>,
    /// Time the first open line was created (`HH:MM:SS`)
    pub opened_at: Option<String>,
}

impl OrderListView {
    /// Header-only view shown while the lines load
    pub fn titled(title: impl Into<String>, table_number: &TableNumber) -> Self {
        Self {
            table_number: Some(table_number.clone()),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Open lines of a table, for the table modal
    pub fn open_lines(
        table_number: &TableNumber,
        lines: &[OrderLine],
        names: &OptionNames,
        session: &Session,
    ) -> Self {
        let mut view = Self::titled(format!("Table: {}", table_number), table_number);
        if lines.is_empty() {
            view.empty_message = Some(EMPTY_ORDER_LIST.to_string());
            return view;
        }

        view.opened_at = lines[0]
            .created_at()
            .map(|t| t.format("%H:%M:%S").to_string());
        view.rows = lines
            .iter()
            .map(|line| OrderRowView::from_line(line, names, session))
            .collect();
        view
    }

    /// Pending lines, one row per line id
    pub fn pending_lines(
        title: impl Into<String>,
        table_number: &TableNumber,
        lines: &[OrderLine],
        names: &OptionNames,
        session: &Session,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut view = Self::titled(title, table_number);
        view.rows = lines
            .iter()
            .filter(|line| seen.insert(line.id))
            .map(|line| OrderRowView::from_line(line, names, session))
            .collect();
        view
    }

    /// Ticket items for every visible row
    pub fn print_items(&self) -> Vec<PrintItem> {
        self.visible_rows().map(OrderRowView::to_print_item).collect()
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &OrderRowView> {
        self.rows.iter().filter(|r| !r.hidden)
    }

    pub fn row(&self, order_id: i64) -> Option<&OrderRowView> {
        self.rows.iter().find(|r| r.order_id == order_id)
    }

    pub fn row_mut(&mut self, order_id: i64) -> Option<&mut OrderRowView> {
        self.rows.iter_mut().find(|r| r.order_id == order_id)
    }

    /// Hide a row; false if the list has no such line
    pub fn hide_row(&mut self, order_id: i64) -> bool {
        match self.row_mut(order_id) {
            Some(row) => {
                row.hidden = true;
                true
            }
            None => false,
        }
    }

    /// Drop all rows, keeping the header
    pub fn clear(&mut self) {
        self.rows.clear();
        self.opened_at = None;
        self.empty_message = None;
    }
}
