//! Coral Floor - 餐厅楼面控制器
//!
//! Headless controller behind the floor tablet UI. It keeps one explicit
//! [`Session`] plus typed view-models that a frontend renders:
//!
//! - **Table Board**: floor plan tiles, highlighted while a table has open lines
//! - **Order Modal**: open lines of the selected table
//! - **Catalog Browser**: category, product and option cascade
//! - **Order Submission**: new lines, whole-table transitions, printing
//! - **Popup Coordinator**: confirmation dialogs
//!
//! All network access goes through [`coral_client::PosApi`], so the
//! controller runs the same against the HTTP client or an in-memory fake.

pub mod config;
pub mod error;
pub mod floor;
pub mod logger;
pub mod options;
pub mod sequencer;
pub mod session;
pub mod views;

pub use config::FloorConfig;
pub use error::{FloorError, FloorResult};
pub use floor::{FloorController, FloorState, UiEvent};
pub use options::OptionNames;
pub use sequencer::{RequestSequencer, RequestToken, Sequencers, Widget};
pub use session::{Session, StagedTicket};
