//! UI event routing
//!
//! The frontend sends one [`UiEvent`] per user action instead of wiring
//! callbacks per render.

use super::*;
use serde::Deserialize;

/// 界面事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    // ========== Table Board ==========
    LoadTables,
    SwitchLocation { location: TableLocation },

    // ========== Order Modal ==========
    SelectTable { table_number: TableNumber },
    CloseTable,
    RequestRemoveLine { order_id: i64 },
    SetQuantity { order_id: i64, quantity: u32 },

    // ========== Catalog Browser ==========
    StartBrowse,
    SelectCategory { category_number: i64 },
    SelectProduct { product_number: i64 },
    ToggleOption { option_id: i64 },
    SetComment { text: String },
    AddMore,
    BackToCategories,

    // ========== Order Submission ==========
    ConfirmSelection,
    ShowPreview,
    ShowPrint,
    DiscardPreviewLine { order_id: i64 },
    ConfirmPrint,
    ConfirmPrintAndOpen,

    // ========== Popups ==========
    RequestClearTable,
    RequestDiscardTable,
    ConfirmPopup,
    CancelPopup,
    DismissAlert,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::LoadTables => "load_tables",
            UiEvent::SwitchLocation { .. } => "switch_location",
            UiEvent::SelectTable { .. } => "select_table",
            UiEvent::CloseTable => "close_table",
            UiEvent::RequestRemoveLine { .. } => "request_remove_line",
            UiEvent::SetQuantity { .. } => "set_quantity",
            UiEvent::StartBrowse => "start_browse",
            UiEvent::SelectCategory { .. } => "select_category",
            UiEvent::SelectProduct { .. } => "select_product",
            UiEvent::ToggleOption { .. } => "toggle_option",
            UiEvent::SetComment { .. } => "set_comment",
            UiEvent::AddMore => "add_more",
            UiEvent::BackToCategories => "back_to_categories",
            UiEvent::ConfirmSelection => "confirm_selection",
            UiEvent::ShowPreview => "show_preview",
            UiEvent::ShowPrint => "show_print",
            UiEvent::DiscardPreviewLine { .. } => "discard_preview_line",
            UiEvent::ConfirmPrint => "confirm_print",
            UiEvent::ConfirmPrintAndOpen => "confirm_print_and_open",
            UiEvent::RequestClearTable => "request_clear_table",
            UiEvent::RequestDiscardTable => "request_discard_table",
            UiEvent::ConfirmPopup => "confirm_popup",
            UiEvent::CancelPopup => "cancel_popup",
            UiEvent::DismissAlert => "dismiss_alert",
        }
    }
}

impl FloorController {
    /// Route one UI event to its handler
    ///
    /// Failures are logged here and returned; the state keeps whatever the
    /// handler already applied.
    pub async fn dispatch(&self, event: UiEvent) -> FloorResult<()> {
        let name = event.name();
        tracing::debug!(event = name, "Dispatching UI event");

        let result = match event {
            UiEvent::LoadTables => self.load_tables().await,
            UiEvent::SwitchLocation { location } => self.switch_location(location).await,
            UiEvent::SelectTable { table_number } => self.open_table(&table_number).await,
            UiEvent::CloseTable => {
                self.close_table().await;
                Ok(())
            }
            UiEvent::RequestRemoveLine { order_id } => self.request_remove_line(order_id).await,
            UiEvent::SetQuantity { order_id, quantity } => {
                self.set_quantity(order_id, quantity).await.map(|_| ())
            }
            UiEvent::StartBrowse => self.start_browse().await,
            UiEvent::SelectCategory { category_number } => {
                self.select_category(category_number).await
            }
            UiEvent::SelectProduct { product_number } => self.select_product(product_number).await,
            UiEvent::ToggleOption { option_id } => {
                self.toggle_option(option_id).await;
                Ok(())
            }
            UiEvent::SetComment { text } => {
                self.set_comment(text).await;
                Ok(())
            }
            UiEvent::AddMore => {
                self.add_more().await;
                Ok(())
            }
            UiEvent::BackToCategories => {
                self.back_to_categories().await;
                Ok(())
            }
            UiEvent::ConfirmSelection => self.confirm_selection().await,
            UiEvent::ShowPreview => self.build_preview_set().await,
            UiEvent::ShowPrint => self.build_print_set().await,
            UiEvent::DiscardPreviewLine { order_id } => self.discard_preview_line(order_id).await,
            UiEvent::ConfirmPrint => self.confirm_print().await.map(|_| ()),
            UiEvent::ConfirmPrintAndOpen => self.confirm_print_and_open().await,
            UiEvent::RequestClearTable => self.request_clear_table().await,
            UiEvent::RequestDiscardTable => self.request_discard_table().await,
            UiEvent::ConfirmPopup => self.confirm_popup().await,
            UiEvent::CancelPopup => {
                self.cancel_popup().await;
                Ok(())
            }
            UiEvent::DismissAlert => {
                self.dismiss_alert().await;
                Ok(())
            }
        };

        if let Err(e) = &result {
            tracing::warn!(event = name, error = %e, "UI event failed");
        }
        result
    }
}
