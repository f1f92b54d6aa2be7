//! FloorController - 楼面控制器
//!
//! One controller per tablet. It owns the [`FloorState`] behind an async
//! `RwLock` and reaches the restaurant API through [`PosApi`]. The impl is
//! split by component:
//!
//! - `board`: Table Board
//! - `order_modal`: Order Modal
//! - `catalog`: Catalog Browser
//! - `submission`: Order Submission
//! - `popup`: Popup Coordinator
//! - `push`: push channel listener
//! - `events`: [`UiEvent`] routing
//!
//! Handlers never hold the lock across a network call. A fetching handler
//! takes a [`RequestToken`] first and [`FloorController::commit`]s its
//! result only if no newer request for the same widget started meanwhile.

mod board;
mod catalog;
mod events;
mod order_modal;
mod popup;
mod push;
mod submission;

pub use events::UiEvent;
pub use popup::{DISCARD_FAILED_ALERT, NO_TABLE_ALERT};
pub use submission::{PREVIEW_TITLE_PREFIX, PRINT_TITLE_PREFIX};

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use coral_client::PosApi;
use shared::models::{TableLocation, TableNumber};

use crate::sequencer::{RequestToken, Sequencers, Widget};
use crate::session::Session;
use crate::views::{BoardView, CatalogView, ModalSet, OrderListView, PopupView};
use crate::{FloorError, FloorResult};

/// Everything a frontend renders, plus the session behind it
#[derive(Debug, Clone, Default, Serialize)]
pub struct FloorState {
    pub session: Session,
    pub board: BoardView,
    /// Table modal (open lines)
    pub orders: OrderListView,
    pub catalog: CatalogView,
    /// Pending lines before printing
    pub preview: OrderListView,
    pub print: OrderListView,
    pub modals: ModalSet,
    /// At most one confirmation popup
    pub popup: Option<PopupView>,
    /// Alert dialog text
    pub alert: Option<String>,
    #[serde(skip)]
    sequencers: Sequencers,
}

impl FloorState {
    pub fn new(location: TableLocation) -> Self {
        Self {
            session: Session::new(location),
            board: BoardView::empty(location),
            ..Default::default()
        }
    }
}

/// 楼面控制器
#[derive(Clone)]
pub struct FloorController {
    api: Arc<dyn PosApi>,
    state: Arc<RwLock<FloorState>>,
}

impl FloorController {
    /// Controller starting on the inside location
    pub fn new(api: Arc<dyn PosApi>) -> Self {
        Self::with_location(api, TableLocation::Inside)
    }

    pub fn with_location(api: Arc<dyn PosApi>, location: TableLocation) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(FloorState::new(location))),
        }
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> FloorState {
        self.state.read().await.clone()
    }

    /// Selected table, or [`FloorError::NoTableSelected`]
    pub async fn selected_table(&self) -> FloorResult<TableNumber> {
        self.state
            .read()
            .await
            .session
            .selected_table
            .clone()
            .ok_or(FloorError::NoTableSelected)
    }

    // ========== Request sequencing ==========

    /// Apply `f` under the write lock and issue a token for `widget`
    async fn begin<T>(
        &self,
        widget: Widget,
        f: impl FnOnce(&mut FloorState) -> T,
    ) -> (RequestToken, T) {
        let mut state = self.state.write().await;
        let token = state.sequencers.issue(widget);
        (token, f(&mut state))
    }

    /// Apply a response if `token` is still current; false if it was dropped
    async fn commit(
        &self,
        widget: Widget,
        token: RequestToken,
        apply: impl FnOnce(&mut FloorState),
    ) -> bool {
        let mut state = self.state.write().await;
        if !state.sequencers.is_current(widget, token) {
            tracing::debug!(widget = ?widget, "Dropping stale response");
            return false;
        }
        apply(&mut state);
        true
    }
}
