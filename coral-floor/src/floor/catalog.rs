//! Catalog Browser

use super::*;
use crate::views::{ModalId, PRODUCT_STEP_TITLE};

impl FloorController {
    /// Open the category step; starts a new option selection
    pub async fn start_browse(&self) -> FloorResult<()> {
        let (token, ()) = self
            .begin(Widget::Categories, |state| {
                state.session.reset_options();
                state.catalog.clear_option_selection();
                state.modals.show(ModalId::Category);
            })
            .await;

        let categories = self.api.categories().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to load categories");
        })?;
        self.commit(Widget::Categories, token, |state| {
            state.catalog.set_categories(&categories);
        })
        .await;
        Ok(())
    }

    /// Pick a category and list its products
    pub async fn select_category(&self, category_number: i64) -> FloorResult<()> {
        let (token, ()) = self
            .begin(Widget::Products, |state| {
                state.session.selected_category = Some(category_number);
                state.session.reset_options();
                state.catalog.clear_option_selection();
                state.catalog.products_title = PRODUCT_STEP_TITLE.to_string();
                state.modals.show(ModalId::Product);
            })
            .await;

        let products = self.api.products(category_number).await.inspect_err(|e| {
            tracing::error!(category_number, error = %e, "Failed to load products");
        })?;
        self.commit(Widget::Products, token, |state| {
            state.catalog.set_products(&products);
        })
        .await;
        Ok(())
    }

    /// Pick a product and show its option group plus the comment field
    ///
    /// Options belong to one product's group, so the selection starts over.
    pub async fn select_product(&self, product_number: i64) -> FloorResult<()> {
        let (token, product) = self
            .begin(Widget::Options, |state| {
                let product = state
                    .catalog
                    .product(product_number)
                    .map(|b| b.to_product())
                    .or_else(|| state.session.reference_products.get(&product_number).cloned())?;

                state.session.selected_product = Some(product.clone());
                state.session.reset_options();
                state.session.comment.clear();
                state.catalog.comment.clear();
                state.catalog.options.clear();
                state.modals.show(ModalId::Option);
                Some(product)
            })
            .await;
        let product = product.ok_or(FloorError::UnknownProduct(product_number))?;

        let Some(group) = product.option_group_number else {
            tracing::debug!(product_number, "Product has no option group");
            return Ok(());
        };

        let options = self.api.product_options(group).await.inspect_err(|e| {
            tracing::error!(option_group = group, error = %e, "Failed to load product options");
        })?;
        self.commit(Widget::Options, token, |state| {
            state.catalog.set_options(&options);
        })
        .await;
        Ok(())
    }

    /// Flip one option; returns whether it is now selected
    pub async fn toggle_option(&self, option_id: i64) -> bool {
        let mut state = self.state.write().await;
        let selected = state.session.selected_options.toggle(option_id);
        state.catalog.set_option_selected(option_id, selected);
        tracing::debug!(option_id, selected, "Option toggled");
        selected
    }

    /// Store the comment text, read at confirmation
    pub async fn set_comment(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = self.state.write().await;
        state.catalog.comment = text.clone();
        state.session.comment = text;
    }

    /// From the preview, go back to picking categories
    pub async fn add_more(&self) {
        let mut state = self.state.write().await;
        state.modals.hide_all(&[ModalId::Preview, ModalId::Product]);
        state.modals.show(ModalId::Category);
    }

    /// Leave the product step
    pub async fn back_to_categories(&self) {
        self.state.write().await.modals.hide(ModalId::Product);
    }
}
