//! Table Board

use super::*;
use coral_client::OrderQuery;
use shared::models::OrderStatus;
use std::collections::{HashMap, HashSet};

impl FloorController {
    /// Fetch all tables, cache them and render the active location
    pub async fn load_tables(&self) -> FloorResult<()> {
        let tables = self.api.tables().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to load tables, keeping last board");
        })?;
        tracing::info!(count = tables.len(), "Tables loaded");

        let location = {
            let mut state = self.state.write().await;
            state.session.tables = tables;
            state.session.location
        };
        self.render_board(location).await
    }

    /// Fetch the full product list used for product name fallback
    pub async fn load_reference_products(&self) -> FloorResult<()> {
        let products = self.api.reference_products().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to load reference products");
        })?;

        let by_number: HashMap<_, _> = products
            .into_iter()
            .map(|p| (p.product_number, p))
            .collect();
        tracing::debug!(count = by_number.len(), "Reference products loaded");
        self.state.write().await.session.reference_products = by_number;
        Ok(())
    }

    /// Render the cached tables of `location`
    ///
    /// Tables with at least one open line are highlighted. If the open
    /// line lookup fails the board is still drawn, just without highlights.
    pub async fn render_board(&self, location: TableLocation) -> FloorResult<()> {
        let (token, tables) = self
            .begin(Widget::Board, |state| {
                state.session.location = location;
                state.session.tables_at(location)
            })
            .await;

        if tables.is_empty() {
            self.commit(Widget::Board, token, |state| {
                state.board = BoardView::empty(location);
            })
            .await;
            return Ok(());
        }

        let open_tables: HashSet<TableNumber> =
            match self.api.orders(&OrderQuery::by_status(OrderStatus::Open)).await {
                Ok(lines) => lines.into_iter().map(|l| l.table_number).collect(),
                Err(e) => {
                    tracing::warn!(error = %e, "Open order lookup failed, rendering without highlights");
                    HashSet::new()
                }
            };

        let view = BoardView::build(location, &tables, &open_tables);
        if self
            .commit(Widget::Board, token, |state| state.board = view)
            .await
        {
            tracing::debug!(
                location = %location,
                tables = tables.len(),
                open = open_tables.len(),
                "Board rendered"
            );
        }
        Ok(())
    }

    /// Show another floor area
    pub async fn switch_location(&self, location: TableLocation) -> FloorResult<()> {
        tracing::info!(location = %location, "Switching location");
        self.render_board(location).await
    }

    /// Highlight one table after a "new order" push, without a full render
    pub async fn refresh_highlight(&self, table_number: &TableNumber) -> bool {
        let mut state = self.state.write().await;
        let found = state.board.highlight(table_number);
        if found {
            tracing::info!(table = %table_number, "Table highlighted");
        } else {
            tracing::debug!(table = %table_number, "No tile for pushed table, ignoring");
        }
        found
    }
}
