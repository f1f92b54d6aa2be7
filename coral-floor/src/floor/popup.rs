//! Popup Coordinator
//!
//! A single confirmation popup at a time. Opening one while another is
//! visible replaces it; the replaced popup counts as cancelled.

use super::*;
use crate::views::PopupKind;
use shared::models::BulkTransition;

/// Alert for table actions without a selected table
pub const NO_TABLE_ALERT: &str = "Select a table first.";
/// Alert for a failed discard of a whole table
pub const DISCARD_FAILED_ALERT: &str = "Could not discard the orders. Please try again.";

impl FloorController {
    /// Show `popup`, replacing any visible one
    pub async fn open_popup(&self, popup: PopupView) {
        let mut state = self.state.write().await;
        if let Some(previous) = state.popup.replace(popup) {
            tracing::debug!(replaced = ?previous.kind, "Popup replaced, dropping the previous one");
        }
    }

    /// Ask before closing every line of the selected table
    pub async fn request_clear_table(&self) -> FloorResult<()> {
        let table_number = self.guard_selected_table().await?;
        self.open_popup(PopupView::clear_table(&table_number)).await;
        Ok(())
    }

    /// Ask before discarding every line of the selected table
    pub async fn request_discard_table(&self) -> FloorResult<()> {
        let table_number = self.guard_selected_table().await?;
        self.open_popup(PopupView::discard_table(&table_number)).await;
        Ok(())
    }

    /// Run the action bound to the visible popup
    pub async fn confirm_popup(&self) -> FloorResult<()> {
        let Some(popup) = self.state.read().await.popup.clone() else {
            tracing::debug!("Confirm without a visible popup, ignoring");
            return Ok(());
        };

        match popup.kind {
            // Stays visible if the removal fails
            PopupKind::RemoveLine { order_id } => self.remove_line(order_id).await,
            PopupKind::ClearTable { table_number } => {
                self.state.write().await.popup = None;
                self.bulk_transition(&table_number, BulkTransition::Close)
                    .await
            }
            PopupKind::DiscardTable { table_number } => {
                self.state.write().await.popup = None;
                self.bulk_transition(&table_number, BulkTransition::Discard)
                    .await
            }
        }
    }

    pub async fn cancel_popup(&self) {
        self.state.write().await.popup = None;
    }

    pub async fn dismiss_alert(&self) {
        self.state.write().await.alert = None;
    }

    /// Selected table, raising the alert when there is none
    async fn guard_selected_table(&self) -> FloorResult<TableNumber> {
        let mut state = self.state.write().await;
        match state.session.selected_table.clone() {
            Some(table_number) => Ok(table_number),
            None => {
                tracing::warn!("Table action without a selected table");
                state.alert = Some(NO_TABLE_ALERT.to_string());
                Err(FloorError::NoTableSelected)
            }
        }
    }
}
