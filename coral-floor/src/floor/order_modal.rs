//! Order Modal

use super::*;
use crate::OptionNames;
use crate::views::{ModalId, PopupKind};
use coral_client::OrderQuery;
use shared::models::{OrderLine, OrderStatus};

impl FloorController {
    /// Select a table and show its open lines
    pub async fn open_table(&self, table_number: &TableNumber) -> FloorResult<()> {
        let (token, ()) = self
            .begin(Widget::Orders, |state| {
                state.session.selected_table = Some(table_number.clone());
                state.modals.show(ModalId::Table);
                state.orders.title = format!("Table: {}", table_number);
                state.orders.table_number = Some(table_number.clone());
            })
            .await;

        let lines = self
            .api
            .orders(&OrderQuery::for_table(table_number, OrderStatus::Open))
            .await
            .inspect_err(|e| {
                tracing::error!(table = %table_number, error = %e, "Failed to fetch open lines");
            })?;
        let names = self.resolve_option_names(&lines).await?;

        let view = {
            let state = self.state.read().await;
            OrderListView::open_lines(table_number, &lines, &names, &state.session)
        };
        if self
            .commit(Widget::Orders, token, |state| state.orders = view)
            .await
        {
            tracing::info!(table = %table_number, lines = lines.len(), "Table opened");
        }
        Ok(())
    }

    /// One batch lookup for every option id referenced by `lines`
    pub async fn resolve_option_names(&self, lines: &[OrderLine]) -> FloorResult<OptionNames> {
        let ids = OptionNames::collect_ids(lines);
        if ids.is_empty() {
            return Ok(OptionNames::default());
        }

        let names = self.api.option_names(&ids).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to resolve option names");
        })?;
        let names = OptionNames::from(names);
        if names.len() < ids.len() {
            tracing::debug!(
                requested = ids.len(),
                resolved = names.len(),
                "Some option ids did not resolve"
            );
        }
        Ok(names)
    }

    /// First step of line removal: ask for confirmation
    pub async fn request_remove_line(&self, order_id: i64) -> FloorResult<()> {
        let popup = {
            let state = self.state.read().await;
            let row = state
                .orders
                .row(order_id)
                .ok_or(FloorError::UnknownOrderLine(order_id))?;
            let table_number = state
                .orders
                .table_number
                .as_ref()
                .ok_or(FloorError::NoTableSelected)?;
            PopupView::remove_line(order_id, &row.product_name, table_number)
        };
        self.open_popup(popup).await;
        Ok(())
    }

    /// Remove one line (`POST /remove_order/{id}`)
    ///
    /// The row stays in the list, hidden, until the next fetch.
    pub async fn remove_line(&self, order_id: i64) -> FloorResult<()> {
        if let Err(e) = self.api.remove_order(order_id).await {
            let message = e.server_message().unwrap_or_else(|| e.to_string());
            tracing::error!(order_id, error = %message, "Failed to remove order line");
            return Err(e.into());
        }

        let mut state = self.state.write().await;
        state.orders.hide_row(order_id);
        if matches!(
            state.popup,
            Some(PopupView { kind: PopupKind::RemoveLine { order_id: id }, .. }) if id == order_id
        ) {
            state.popup = None;
        }
        tracing::info!(order_id, "Order line removed");
        Ok(())
    }

    /// Set the stepper value of a row, at least 1
    pub async fn set_quantity(&self, order_id: i64, quantity: u32) -> FloorResult<u32> {
        let quantity = quantity.max(1);
        let mut state = self.state.write().await;
        let state = &mut *state;
        let mut found = false;
        for list in [&mut state.orders, &mut state.preview, &mut state.print] {
            if let Some(row) = list.row_mut(order_id) {
                row.quantity = quantity;
                found = true;
            }
        }
        if !found {
            return Err(FloorError::UnknownOrderLine(order_id));
        }
        Ok(quantity)
    }

    /// Hide the table modal
    pub async fn close_table(&self) {
        self.state.write().await.modals.hide(ModalId::Table);
    }
}
