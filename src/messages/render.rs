//! Render state - snapshot sent from App layer to UI for drawing
//!
//! The UI is a pure function of this structure; everything it shows is
//! recomputed by the app layer per update (page slices included).

use crate::messages::ui_events::{InputMode, KeyContext, ScreenKind, TransferField};
use crate::models::{Network, TransferForm, Wallet};

/// Page-level load phase: `Loading -> {Failed | Ready}`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PhaseView {
    #[default]
    Loading,
    Failed(String),
    Ready,
}

/// Wallet list (home) screen
#[derive(Debug, Clone, Default)]
pub struct WalletListView {
    pub phase: PhaseView,
    pub page_wallets: Vec<Wallet>,
    pub total_wallets: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub per_page: usize,
    pub selected_row: usize,

    pub networks: Vec<Network>,
    pub selected_network: Option<Network>,
    pub select_open: bool,
    pub select_highlight: usize,

    pub creating: bool,
    pub create_error: Option<String>,
}

/// Single wallet screen: summary plus an address-id jump input
#[derive(Debug, Clone, Default)]
pub struct WalletDetailView {
    pub wallet_id: String,
    pub network: Option<Network>,
    pub address_input: String,
    pub editing: bool,
}

/// Address detail screen
#[derive(Debug, Clone, Default)]
pub struct AddressDetailView {
    pub phase: PhaseView,
    pub wallet_id: String,
    pub address_id: String,
    pub network: String,

    pub page_balances: Vec<(String, String)>,
    pub total_balances: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub per_page: usize,

    /// Post-mutation re-fetch in flight (distinct from the faucet's
    /// own pending indicator)
    pub refreshing: bool,
    pub refresh_error: Option<String>,

    pub faucet_pending: bool,
    pub faucet_error: Option<String>,
    pub faucet_notice: Option<String>,

    pub transfer_pending: bool,
    pub transfer_error: Option<String>,
    pub transaction_link: Option<String>,
    pub form: TransferForm,
    pub focused_field: TransferField,
    pub editing: bool,
    pub form_submittable: bool,
}

/// The screen being shown
#[derive(Debug, Clone)]
pub enum ScreenView {
    WalletList(WalletListView),
    WalletDetail(WalletDetailView),
    AddressDetail(AddressDetailView),
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Canonical path of the current route, shown in the header
    pub route_path: String,
    pub screen: ScreenView,
    pub show_help: bool,
    /// Latest activity line for the status bar
    pub activity: Option<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            route_path: "/wallets".to_string(),
            screen: ScreenView::WalletList(WalletListView::default()),
            show_help: false,
            activity: None,
        }
    }
}

impl RenderState {
    /// Context the key mapper needs
    pub fn key_context(&self) -> KeyContext {
        let (screen, input_mode, select_open) = match &self.screen {
            ScreenView::WalletList(v) => (ScreenKind::WalletList, InputMode::Normal, v.select_open),
            ScreenView::WalletDetail(v) => (
                ScreenKind::WalletDetail,
                if v.editing {
                    InputMode::Editing
                } else {
                    InputMode::Normal
                },
                false,
            ),
            ScreenView::AddressDetail(v) => (
                ScreenKind::AddressDetail,
                if v.editing {
                    InputMode::Editing
                } else {
                    InputMode::Normal
                },
                false,
            ),
        };
        KeyContext {
            screen,
            input_mode,
            show_help: self.show_help,
            select_open,
        }
    }
}
