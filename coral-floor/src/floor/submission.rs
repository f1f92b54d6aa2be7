//! Order Submission

use super::*;
use crate::session::StagedTicket;
use crate::views::ModalId;
use coral_client::OrderQuery;
use shared::models::{BulkTransition, OrderStatus, PrintOrderRequest};

/// Header of the pending preview
pub const PREVIEW_TITLE_PREFIX: &str = "Adding order:";
/// Header of the print ticket modal
pub const PRINT_TITLE_PREFIX: &str = "Print order for the table:";

impl FloorController {
    /// Post the current selection as a pending line (`POST /orders`)
    ///
    /// On failure the option and product steps stay open for a retry.
    pub async fn confirm_selection(&self) -> FloorResult<()> {
        let order = self.state.read().await.session.pending_order()?;

        match self.api.create_order(&order).await {
            Ok(reply) => {
                tracing::info!(
                    table = %order.table_number,
                    product_number = order.product_number,
                    options = %order.option_number,
                    message = reply.message.as_deref().unwrap_or_default(),
                    "Order line added"
                );
                let mut state = self.state.write().await;
                state.modals.hide_all(&[ModalId::Option, ModalId::Product]);
                state.session.reset_options();
                state.session.comment.clear();
                state.catalog.clear_option_selection();
                state.catalog.comment.clear();
                Ok(())
            }
            Err(e) => {
                let message = e.server_message().unwrap_or_else(|| e.to_string());
                tracing::error!(table = %order.table_number, error = %message, "Failed to add order line");
                Err(e.into())
            }
        }
    }

    /// Move every line of a table at once
    ///
    /// - `Close`: clears the order list, hides the preview
    /// - `Discard`: clears the order list, hides preview, categories and the table modal
    /// - `Promote`: hides print, preview and categories, then reopens the table
    ///
    /// A failed discard also raises an alert.
    pub async fn bulk_transition(
        &self,
        table_number: &TableNumber,
        transition: BulkTransition,
    ) -> FloorResult<()> {
        if let Err(e) = self.api.bulk_transition(transition, table_number).await {
            tracing::error!(table = %table_number, transition = %transition, error = %e, "Bulk transition failed");
            if transition == BulkTransition::Discard {
                self.state.write().await.alert = Some(DISCARD_FAILED_ALERT.to_string());
            }
            return Err(e.into());
        }
        tracing::info!(
            table = %table_number,
            transition = %transition,
            status = %transition.target_status(),
            "Bulk transition applied"
        );

        match transition {
            BulkTransition::Close => {
                let mut state = self.state.write().await;
                state.orders.clear();
                state.modals.hide(ModalId::Preview);
            }
            BulkTransition::Discard => {
                let mut state = self.state.write().await;
                state.orders.clear();
                state
                    .modals
                    .hide_all(&[ModalId::Preview, ModalId::Category, ModalId::Table]);
            }
            BulkTransition::Promote => {
                self.state
                    .write()
                    .await
                    .modals
                    .hide_all(&[ModalId::Print, ModalId::Preview, ModalId::Category]);
                self.open_table(table_number).await?;
            }
        }
        Ok(())
    }

    /// Stage the pending lines of the selected table and open the print modal
    pub async fn build_print_set(&self) -> FloorResult<()> {
        let table_number = self.selected_table().await?;
        let title = format!("{} {}", PRINT_TITLE_PREFIX, table_number);
        self.stage_pending(ModalId::Print, title, table_number).await
    }

    /// Stage the pending lines of the selected table and open the preview
    pub async fn build_preview_set(&self) -> FloorResult<()> {
        let table_number = self.selected_table().await?;
        let title = format!("{} {}", PREVIEW_TITLE_PREFIX, table_number);
        self.stage_pending(ModalId::Preview, title, table_number).await
    }

    /// Fetch pending lines, render them into the print or preview list and
    /// replace the staged ticket. The modal opens even with no lines.
    ///
    /// Print and preview share [`Widget::Staging`], so only the latest
    /// staging of either kind lands.
    async fn stage_pending(
        &self,
        modal: ModalId,
        title: String,
        table_number: TableNumber,
    ) -> FloorResult<()> {
        let (token, ()) = self.begin(Widget::Staging, |_| ()).await;

        let lines = self
            .api
            .orders(&OrderQuery::for_table(&table_number, OrderStatus::Pending))
            .await
            .inspect_err(|e| {
                tracing::error!(table = %table_number, error = %e, "Failed to fetch pending lines");
            })?;
        let names = self.resolve_option_names(&lines).await?;

        let view = {
            let state = self.state.read().await;
            OrderListView::pending_lines(title, &table_number, &lines, &names, &state.session)
        };
        let ticket = StagedTicket {
            table_number: table_number.clone(),
            items: view.print_items(),
        };
        let count = ticket.items.len();

        if self
            .commit(Widget::Staging, token, |state| {
                match modal {
                    ModalId::Preview => state.preview = view,
                    _ => state.print = view,
                }
                state.session.staged_print = Some(ticket);
                state.modals.show(modal);
            })
            .await
        {
            tracing::info!(table = %table_number, lines = count, "Pending lines staged");
        }
        Ok(())
    }

    /// Discard one pending line from the preview (`POST /discard_order/{id}`)
    pub async fn discard_preview_line(&self, order_id: i64) -> FloorResult<()> {
        self.api.discard_order(order_id).await.inspect_err(|e| {
            tracing::error!(order_id, error = %e, "Failed to discard order line");
        })?;

        let mut state = self.state.write().await;
        state.preview.hide_row(order_id);
        if let Some(ticket) = state.session.staged_print.as_mut() {
            ticket.items.retain(|item| item.id != order_id);
        }
        tracing::info!(order_id, "Pending line discarded");
        Ok(())
    }

    /// Send the staged ticket (`POST /print_order`) for the table it was
    /// staged from; returns that table
    pub async fn confirm_print(&self) -> FloorResult<TableNumber> {
        let request = {
            let state = self.state.read().await;
            let ticket = state
                .session
                .staged_print
                .clone()
                .ok_or(FloorError::NothingStaged)?;
            PrintOrderRequest {
                table_number: ticket.table_number,
                orders: ticket.items,
            }
        };

        let reply = self.api.print_order(&request).await.inspect_err(|e| {
            tracing::error!(table = %request.table_number, error = %e, "Failed to print order");
        })?;
        tracing::info!(
            table = %request.table_number,
            lines = request.orders.len(),
            message = reply.message.as_deref().unwrap_or_default(),
            "Order printed"
        );
        self.state.write().await.modals.hide(ModalId::Print);
        Ok(request.table_number)
    }

    /// Print, then promote the printed table's pending lines to open
    pub async fn confirm_print_and_open(&self) -> FloorResult<()> {
        let table_number = self.confirm_print().await?;
        self.bulk_transition(&table_number, BulkTransition::Promote)
            .await
    }
}
