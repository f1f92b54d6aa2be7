//! 视图模型 - what a frontend renders
//!
//! Plain serializable structs. The controller replaces or patches them;
//! nothing here talks to the network.

pub mod board;
pub mod catalog;
pub mod modal;
pub mod orders;
pub mod popup;

pub use board::{BoardView, EMPTY_BOARD, TableKey, TableTile};
pub use catalog::{CatalogView, CategoryButton, OptionButton, PRODUCT_STEP_TITLE, ProductButton};
pub use modal::{ModalId, ModalSet};
pub use orders::{EMPTY_ORDER_LIST, OrderListView, OrderRowView};
pub use popup::{PopupKind, PopupView};
