//! Wallet list controller - the home screen
//!
//! Composes the entry fetch, a pager over the wallet collection, the
//! network picker, and the creation action. Creation navigates to the
//! new wallet's detail route; the in-memory collection is not updated
//! (the list is re-fetched on every visit).

use crate::action::{ActionStatus, AsyncAction};
use crate::app::{Effects, IdGen};
use crate::constants::WALLETS_PER_PAGE_OPTIONS;
use crate::messages::render::{PhaseView, WalletListView};
use crate::messages::{ApiCommand, ApiResponse, UiEvent};
use crate::models::{Network, Wallet};
use crate::paging::ListPager;
use crate::routes::Route;
use crate::select::SingleSelect;

pub struct WalletListPage {
    load: AsyncAction<Vec<Wallet>>,
    pager: ListPager,
    network: SingleSelect<Network>,
    create: AsyncAction<Wallet>,
    selected_row: usize,
    select_open: bool,
}

impl WalletListPage {
    /// Build the page and its entry fetch
    pub fn enter(ids: &mut IdGen) -> (Self, ApiCommand) {
        let mut load = AsyncAction::new();
        let id = ids.next();
        load.begin(id);
        let page = WalletListPage {
            load,
            pager: ListPager::new(WALLETS_PER_PAGE_OPTIONS),
            network: SingleSelect::new(Network::ALL.to_vec()),
            create: AsyncAction::new(),
            selected_row: 0,
            select_open: false,
        };
        (page, ApiCommand::ListWallets { id })
    }

    fn wallets(&self) -> &[Wallet] {
        self.load.result().map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_ready(&self) -> bool {
        self.load.status() == ActionStatus::Succeeded
    }

    fn page_len(&self) -> usize {
        self.pager.paginate(self.wallets()).items.len()
    }

    fn clamp_row(&mut self) {
        let len = self.page_len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }

    pub fn handle_event(&mut self, event: UiEvent, ids: &mut IdGen) -> Effects {
        // The picker popup owns navigation keys while open
        if self.select_open {
            match event {
                UiEvent::NextRow => self.network.highlight_next(),
                UiEvent::PrevRow => self.network.highlight_prev(),
                UiEvent::Activate => {
                    self.network.select_highlighted();
                    self.select_open = false;
                }
                UiEvent::CancelNetworkSelect => self.select_open = false,
                _ => {}
            }
            return Effects::none();
        }

        if !self.is_ready() {
            return Effects::none();
        }

        let total = self.wallets().len();
        match event {
            UiEvent::NextRow => {
                let len = self.page_len();
                if len > 0 {
                    self.selected_row = (self.selected_row + 1) % len;
                }
            }
            UiEvent::PrevRow => {
                let len = self.page_len();
                if len > 0 {
                    self.selected_row = self.selected_row.checked_sub(1).unwrap_or(len - 1);
                }
            }
            UiEvent::NextPage => {
                self.pager.next_page(total);
                self.clamp_row();
            }
            UiEvent::PrevPage => {
                self.pager.prev_page(total);
                self.clamp_row();
            }
            UiEvent::CyclePageSize => {
                self.pager.cycle_per_page(total);
                self.selected_row = 0;
            }
            UiEvent::OpenNetworkSelect => self.select_open = true,
            UiEvent::CreateWallet => return self.create_wallet(ids),
            UiEvent::Activate => {
                let page = self.pager.paginate(self.wallets());
                if let Some(wallet) = page.items.get(self.selected_row) {
                    return Effects::goto(Route::Wallet {
                        wallet_id: wallet.id.clone(),
                    })
                    .with_hint(wallet.network);
                }
            }
            _ => {}
        }
        Effects::none()
    }

    /// Issue the creation request. Gated on a selected network and no
    /// creation already in flight.
    fn create_wallet(&mut self, ids: &mut IdGen) -> Effects {
        if self.create.is_pending() {
            return Effects::none();
        }
        let Some(network) = self.network.selected().copied() else {
            return Effects::none();
        };
        let id = ids.next();
        self.create.begin(id);
        Effects::command(ApiCommand::CreateWallet { id, network })
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Effects {
        match response {
            ApiResponse::Wallets { id, result } => {
                if self.load.owns(id) && self.load.settle(id, result) {
                    self.pager.clamp(self.wallets().len());
                    self.clamp_row();
                }
                Effects::none()
            }
            ApiResponse::WalletCreated { id, result } => {
                if !self.create.owns(id) || !self.create.settle(id, result) {
                    return Effects::none();
                }
                match self.create.result() {
                    Some(wallet) => {
                        let note =
                            format!("Created wallet {} on {}", wallet.id, wallet.network);
                        Effects::goto(Route::Wallet {
                            wallet_id: wallet.id.clone(),
                        })
                        .with_hint(wallet.network)
                        .with_note(note)
                    }
                    // failure stays inline; the form and page survive
                    None => Effects::none(),
                }
            }
            _ => Effects::none(),
        }
    }

    pub fn view(&self) -> WalletListView {
        let phase = match self.load.status() {
            ActionStatus::Succeeded => PhaseView::Ready,
            ActionStatus::Failed => PhaseView::Failed(
                self.load
                    .error()
                    .unwrap_or("Failed to load wallets. Please try again later.")
                    .to_string(),
            ),
            _ => PhaseView::Loading,
        };
        let wallets = self.wallets();
        let page = self.pager.paginate(wallets);
        WalletListView {
            phase,
            page_wallets: page.items.to_vec(),
            total_wallets: wallets.len(),
            current_page: self.pager.page(),
            total_pages: page.total_pages,
            per_page: self.pager.per_page(),
            selected_row: self.selected_row,
            networks: self.network.options().to_vec(),
            selected_network: self.network.selected().copied(),
            select_open: self.select_open,
            select_highlight: self.network.highlighted(),
            creating: self.create.is_pending(),
            create_error: self.create.error().map(str::to_string),
        }
    }
}
