//! # Walletdeck
//!
//! A terminal console for a custodial wallet platform.
//!
//! ## Features
//! - Wallet list with pagination and adjustable page size
//! - Wallet creation on a chosen network
//! - Address detail with paginated per-currency balances
//! - Test-network faucet requests
//! - Asset transfers with a transaction-link receipt
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod action;
pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod paging;
pub mod routes;
pub mod select;
pub mod ui;

// Re-export commonly used types
pub use action::{ActionStatus, AsyncAction};
pub use app::{AppActor, AppState};
pub use config::Config;
pub use messages::{ApiCommand, ApiResponse, RenderState, UiEvent};
pub use models::{Address, Network, TransferForm, TransferReceipt, Wallet};
pub use network::{ApiClient, NetworkActor};
pub use paging::ListPager;
pub use routes::Route;
pub use select::SingleSelect;
