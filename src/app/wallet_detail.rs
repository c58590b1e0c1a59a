//! Wallet detail screen
//!
//! The platform contract exposes no address-enumeration call, so this
//! screen is a summary plus a jump input: enter an address id to open
//! its detail page.

use crate::app::{Effects, IdGen};
use crate::messages::render::WalletDetailView;
use crate::messages::UiEvent;
use crate::models::Network;
use crate::routes::Route;

pub struct WalletDetailPage {
    wallet_id: String,
    /// Known when arriving from the list or a fresh creation; unknown
    /// after back-navigation
    network: Option<Network>,
    address_input: String,
    editing: bool,
}

impl WalletDetailPage {
    pub fn enter(wallet_id: String, network: Option<Network>) -> Self {
        WalletDetailPage {
            wallet_id,
            network,
            address_input: String::new(),
            editing: false,
        }
    }

    pub fn handle_event(&mut self, event: UiEvent, _ids: &mut IdGen) -> Effects {
        match event {
            UiEvent::StartEditing => self.editing = true,
            UiEvent::StopEditing => self.editing = false,
            UiEvent::CharInput(c) => {
                if self.editing {
                    self.address_input.push(c);
                }
            }
            UiEvent::Backspace => {
                if self.editing {
                    self.address_input.pop();
                }
            }
            UiEvent::Activate => {
                let address_id = self.address_input.trim();
                if !address_id.is_empty() {
                    return Effects::goto(Route::Address {
                        wallet_id: self.wallet_id.clone(),
                        address_id: address_id.to_string(),
                    });
                }
                self.editing = true;
            }
            _ => {}
        }
        Effects::none()
    }

    pub fn view(&self) -> WalletDetailView {
        WalletDetailView {
            wallet_id: self.wallet_id.clone(),
            network: self.network,
            address_input: self.address_input.clone(),
            editing: self.editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_does_not_navigate() {
        let mut ids = IdGen::new();
        let mut page = WalletDetailPage::enter("w_1".into(), Some(Network::BaseSepolia));
        let fx = page.handle_event(UiEvent::Activate, &mut ids);
        assert!(fx.goto.is_none());
    }

    #[test]
    fn typed_address_id_routes_to_address_page() {
        let mut ids = IdGen::new();
        let mut page = WalletDetailPage::enter("w_1".into(), None);
        page.handle_event(UiEvent::StartEditing, &mut ids);
        for c in "a_42".chars() {
            page.handle_event(UiEvent::CharInput(c), &mut ids);
        }
        let fx = page.handle_event(UiEvent::Activate, &mut ids);
        assert_eq!(
            fx.goto.map(|r| r.path()),
            Some("/wallets/w_1/addresses/a_42".to_string())
        );
    }
}
