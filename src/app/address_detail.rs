//! Address detail controller
//!
//! One page-level load plus three independent machines inside Ready:
//! the faucet action, the transfer action, and a pager over the
//! balances table. Any successful mutation triggers exactly one
//! unconditional re-fetch of the address, carried by a dedicated
//! refresh action with its own indicator. Faucet and transfer are
//! mutually exclusive per address; pagination stays interactive
//! throughout.

use crate::action::{ActionStatus, AsyncAction};
use crate::app::{Effects, IdGen};
use crate::constants::BALANCES_PER_PAGE_OPTIONS;
use crate::messages::render::{AddressDetailView, PhaseView};
use crate::messages::ui_events::TransferField;
use crate::messages::{ApiCommand, ApiResponse, UiEvent};
use crate::models::{Address, TransferForm, TransferReceipt};
use crate::paging::ListPager;

pub struct AddressDetailPage {
    wallet_id: String,
    address_id: String,

    load: AsyncAction<Address>,
    refresh: AsyncAction<Address>,
    /// Latest known address data; replaced wholesale by fetches, never
    /// mutated optimistically
    address: Option<Address>,

    pager: ListPager,

    faucet: AsyncAction<()>,
    faucet_notice: Option<String>,

    transfer: AsyncAction<TransferReceipt>,
    form: TransferForm,
    focused: TransferField,
    editing: bool,
}

impl AddressDetailPage {
    /// Build the page and its entry fetch
    pub fn enter(ids: &mut IdGen, wallet_id: String, address_id: String) -> (Self, ApiCommand) {
        let mut load = AsyncAction::new();
        let id = ids.next();
        load.begin(id);
        let command = ApiCommand::GetAddress {
            id,
            wallet_id: wallet_id.clone(),
            address_id: address_id.clone(),
        };
        let page = AddressDetailPage {
            wallet_id,
            address_id,
            load,
            refresh: AsyncAction::new(),
            address: None,
            pager: ListPager::new(BALANCES_PER_PAGE_OPTIONS),
            faucet: AsyncAction::new(),
            faucet_notice: None,
            transfer: AsyncAction::new(),
            form: TransferForm::default(),
            focused: TransferField::default(),
            editing: false,
        };
        (page, command)
    }

    fn is_ready(&self) -> bool {
        self.address.is_some()
    }

    fn balance_count(&self) -> usize {
        self.address.as_ref().map(|a| a.balances.len()).unwrap_or(0)
    }

    /// Faucet and transfer are serialized against each other (and
    /// against an in-flight refresh) so a mutation never reads state
    /// mid-update.
    fn mutation_in_flight(&self) -> bool {
        self.faucet.is_pending() || self.transfer.is_pending() || self.refresh.is_pending()
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focused {
            TransferField::Destination => &mut self.form.destination_address,
            TransferField::Amount => &mut self.form.amount,
            TransferField::Asset => &mut self.form.asset,
        }
    }

    pub fn handle_event(&mut self, event: UiEvent, ids: &mut IdGen) -> Effects {
        if !self.is_ready() {
            return Effects::none();
        }

        let total = self.balance_count();
        match event {
            UiEvent::NextPage => self.pager.next_page(total),
            UiEvent::PrevPage => self.pager.prev_page(total),
            UiEvent::CyclePageSize => self.pager.cycle_per_page(total),
            UiEvent::StartEditing => self.editing = true,
            UiEvent::StopEditing => self.editing = false,
            UiEvent::NextField => self.focused = self.focused.next(),
            UiEvent::CharInput(c) => {
                if self.editing {
                    self.field_mut().push(c);
                }
            }
            UiEvent::Backspace => {
                if self.editing {
                    self.field_mut().pop();
                }
            }
            UiEvent::RequestFaucet => return self.request_faucet(ids),
            UiEvent::SubmitTransfer => return self.submit_transfer(ids),
            _ => {}
        }
        Effects::none()
    }

    fn request_faucet(&mut self, ids: &mut IdGen) -> Effects {
        if self.mutation_in_flight() {
            return Effects::none();
        }
        self.faucet_notice = None;
        let id = ids.next();
        self.faucet.begin(id);
        Effects::command(ApiCommand::RequestFaucet {
            id,
            wallet_id: self.wallet_id.clone(),
            address_id: self.address_id.clone(),
        })
    }

    fn submit_transfer(&mut self, ids: &mut IdGen) -> Effects {
        if self.mutation_in_flight() || !self.form.is_submittable() {
            return Effects::none();
        }
        self.editing = false;
        let id = ids.next();
        self.transfer.begin(id);
        Effects::command(ApiCommand::CreateTransfer {
            id,
            wallet_id: self.wallet_id.clone(),
            address_id: self.address_id.clone(),
            transfer: self.form.clone(),
        })
    }

    /// Kick off the unconditional post-mutation re-fetch
    fn start_refresh(&mut self, ids: &mut IdGen) -> ApiCommand {
        let id = ids.next();
        self.refresh.begin(id);
        ApiCommand::GetAddress {
            id,
            wallet_id: self.wallet_id.clone(),
            address_id: self.address_id.clone(),
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse, ids: &mut IdGen) -> Effects {
        match response {
            ApiResponse::Address { id, result } => {
                if self.load.owns(id) {
                    if self.load.settle(id, result) {
                        self.address = self.load.result().cloned();
                        self.pager.clamp(self.balance_count());
                    }
                } else if self.refresh.owns(id) {
                    if self.refresh.settle(id, result) {
                        // failure keeps the balances we already have
                        if let Some(address) = self.refresh.result() {
                            self.address = Some(address.clone());
                            self.pager.clamp(self.balance_count());
                        }
                    }
                }
                Effects::none()
            }
            ApiResponse::FaucetDone { id, result } => {
                if !self.faucet.owns(id) || !self.faucet.settle(id, result) {
                    return Effects::none();
                }
                if self.faucet.status() == ActionStatus::Succeeded {
                    self.faucet_notice = Some("Faucet request successful!".to_string());
                    Effects::command(self.start_refresh(ids))
                        .with_note(format!("Faucet credited address {}", self.address_id))
                } else {
                    Effects::none()
                }
            }
            ApiResponse::TransferCreated { id, result } => {
                if !self.transfer.owns(id) || !self.transfer.settle(id, result) {
                    return Effects::none();
                }
                if self.transfer.status() == ActionStatus::Succeeded {
                    // success is the only thing that clears the form
                    self.form.reset();
                    self.focused = TransferField::default();
                    Effects::command(self.start_refresh(ids))
                        .with_note(format!("Transfer submitted from {}", self.address_id))
                } else {
                    Effects::none()
                }
            }
            _ => Effects::none(),
        }
    }

    pub fn view(&self) -> AddressDetailView {
        let phase = match self.load.status() {
            ActionStatus::Succeeded => PhaseView::Ready,
            ActionStatus::Failed => PhaseView::Failed(
                self.load
                    .error()
                    .unwrap_or("Error fetching address data")
                    .to_string(),
            ),
            _ => PhaseView::Loading,
        };
        let rows = self
            .address
            .as_ref()
            .map(|a| a.balance_rows())
            .unwrap_or_default();
        let page = self.pager.paginate(&rows);
        AddressDetailView {
            phase,
            wallet_id: self.wallet_id.clone(),
            address_id: self.address_id.clone(),
            network: self
                .address
                .as_ref()
                .map(|a| a.network.clone())
                .unwrap_or_default(),
            page_balances: page.items.to_vec(),
            total_balances: rows.len(),
            current_page: self.pager.page(),
            total_pages: page.total_pages,
            per_page: self.pager.per_page(),
            refreshing: self.refresh.is_pending(),
            refresh_error: self.refresh.error().map(str::to_string),
            faucet_pending: self.faucet.is_pending(),
            faucet_error: self.faucet.error().map(str::to_string),
            faucet_notice: self.faucet_notice.clone(),
            transfer_pending: self.transfer.is_pending(),
            transfer_error: self.transfer.error().map(str::to_string),
            transaction_link: self
                .transfer
                .result()
                .map(|r| r.transaction_link.clone()),
            form: self.form.clone(),
            focused_field: self.focused,
            editing: self.editing,
            form_submittable: self.form.is_submittable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn address(balances: &[(&str, &str)]) -> Address {
        Address {
            id: "a_1".into(),
            wallet_id: "w_1".into(),
            network: "base-sepolia".into(),
            balances: balances
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn ready_page(ids: &mut IdGen, addr: Address) -> AddressDetailPage {
        let (mut page, cmd) = AddressDetailPage::enter(ids, "w_1".into(), "a_1".into());
        let id = cmd.id().unwrap();
        page.handle_response(
            ApiResponse::Address {
                id,
                result: Ok(addr),
            },
            ids,
        );
        page
    }

    fn fill_form(page: &mut AddressDetailPage, ids: &mut IdGen, dest: &str, amount: &str, asset: &str) {
        page.handle_event(UiEvent::StartEditing, ids);
        for c in dest.chars() {
            page.handle_event(UiEvent::CharInput(c), ids);
        }
        page.handle_event(UiEvent::NextField, ids);
        for c in amount.chars() {
            page.handle_event(UiEvent::CharInput(c), ids);
        }
        page.handle_event(UiEvent::NextField, ids);
        for c in asset.chars() {
            page.handle_event(UiEvent::CharInput(c), ids);
        }
        page.handle_event(UiEvent::StopEditing, ids);
    }

    #[test]
    fn missing_address_is_a_page_error() {
        let mut ids = IdGen::new();
        let (mut page, cmd) = AddressDetailPage::enter(&mut ids, "w_1".into(), "a_9".into());
        page.handle_response(
            ApiResponse::Address {
                id: cmd.id().unwrap(),
                result: Err("Address not found".into()),
            },
            &mut ids,
        );
        assert_eq!(page.view().phase, PhaseView::Failed("Address not found".into()));
    }

    #[test]
    fn faucet_success_refetches_exactly_once_even_when_unchanged() {
        let mut ids = IdGen::new();
        let addr = address(&[("eth", "1.0")]);
        let mut page = ready_page(&mut ids, addr.clone());

        let fx = page.handle_event(UiEvent::RequestFaucet, &mut ids);
        let faucet_id = fx.command.unwrap().id().unwrap();

        let fx = page.handle_response(
            ApiResponse::FaucetDone {
                id: faucet_id,
                result: Ok(()),
            },
            &mut ids,
        );
        // exactly one follow-up fetch, carried by the refresh indicator
        let refresh_cmd = fx.command.expect("re-fetch must be issued");
        assert!(matches!(refresh_cmd, ApiCommand::GetAddress { .. }));
        assert!(page.view().refreshing);
        assert!(!page.view().faucet_pending);

        // balances unchanged: the re-fetch still happened, nothing more follows
        let fx = page.handle_response(
            ApiResponse::Address {
                id: refresh_cmd.id().unwrap(),
                result: Ok(addr),
            },
            &mut ids,
        );
        assert!(fx.command.is_none());
        assert!(!page.view().refreshing);
    }

    #[test]
    fn faucet_failure_keeps_balances_and_shows_error() {
        let mut ids = IdGen::new();
        let mut page = ready_page(&mut ids, address(&[("eth", "1.0")]));

        let fx = page.handle_event(UiEvent::RequestFaucet, &mut ids);
        let id = fx.command.unwrap().id().unwrap();
        let fx = page.handle_response(
            ApiResponse::FaucetDone {
                id,
                result: Err("Failed to request faucet".into()),
            },
            &mut ids,
        );
        assert!(fx.command.is_none());
        let view = page.view();
        assert_eq!(view.faucet_error.as_deref(), Some("Failed to request faucet"));
        assert_eq!(view.page_balances, vec![("eth".to_string(), "1.0".to_string())]);
    }

    #[test]
    fn failed_transfer_keeps_the_form_populated() {
        let mut ids = IdGen::new();
        let mut page = ready_page(&mut ids, address(&[("eth", "1.0")]));
        fill_form(&mut page, &mut ids, "0xdead", "0.000001", "eth");

        let fx = page.handle_event(UiEvent::SubmitTransfer, &mut ids);
        let id = fx.command.unwrap().id().unwrap();
        page.handle_response(
            ApiResponse::TransferCreated {
                id,
                result: Err("insufficient funds".into()),
            },
            &mut ids,
        );

        let view = page.view();
        assert_eq!(view.transfer_error.as_deref(), Some("insufficient funds"));
        assert_eq!(view.form.destination_address, "0xdead");
        assert_eq!(view.form.amount, "0.000001");
        assert_eq!(view.form.asset, "eth");
    }

    #[test]
    fn successful_transfer_resets_form_and_refetches() {
        let mut ids = IdGen::new();
        let mut page = ready_page(&mut ids, address(&[("eth", "1.0")]));
        fill_form(&mut page, &mut ids, "0xdead", "0.5", "eth");

        let fx = page.handle_event(UiEvent::SubmitTransfer, &mut ids);
        let id = fx.command.unwrap().id().unwrap();
        let fx = page.handle_response(
            ApiResponse::TransferCreated {
                id,
                result: Ok(TransferReceipt {
                    transaction_link: "https://sepolia.basescan.org/tx/0xbeef".into(),
                }),
            },
            &mut ids,
        );
        assert!(matches!(fx.command, Some(ApiCommand::GetAddress { .. })));

        let view = page.view();
        assert_eq!(view.form, TransferForm::default());
        assert_eq!(
            view.transaction_link.as_deref(),
            Some("https://sepolia.basescan.org/tx/0xbeef")
        );
    }

    #[test]
    fn transfer_with_invalid_amount_is_not_submitted() {
        let mut ids = IdGen::new();
        let mut page = ready_page(&mut ids, address(&[("eth", "1.0")]));
        fill_form(&mut page, &mut ids, "0xdead", "1.2.3", "eth");
        let fx = page.handle_event(UiEvent::SubmitTransfer, &mut ids);
        assert!(fx.command.is_none());
    }

    #[test]
    fn mutations_are_mutually_exclusive() {
        let mut ids = IdGen::new();
        let mut page = ready_page(&mut ids, address(&[("eth", "1.0")]));
        fill_form(&mut page, &mut ids, "0xdead", "0.5", "eth");

        let fx = page.handle_event(UiEvent::RequestFaucet, &mut ids);
        assert!(fx.command.is_some());

        // faucet pending: transfer rejected, second faucet rejected
        assert!(page.handle_event(UiEvent::SubmitTransfer, &mut ids).command.is_none());
        assert!(page.handle_event(UiEvent::RequestFaucet, &mut ids).command.is_none());

        // pagination stays interactive while the faucet is pending
        page.handle_event(UiEvent::CyclePageSize, &mut ids);
        assert_eq!(page.view().per_page, 10);
    }

    #[test]
    fn refresh_failure_preserves_previous_balances() {
        let mut ids = IdGen::new();
        let mut page = ready_page(&mut ids, address(&[("eth", "2.5")]));

        let fx = page.handle_event(UiEvent::RequestFaucet, &mut ids);
        let id = fx.command.unwrap().id().unwrap();
        let fx = page.handle_response(
            ApiResponse::FaucetDone { id, result: Ok(()) },
            &mut ids,
        );
        let refresh_id = fx.command.unwrap().id().unwrap();
        page.handle_response(
            ApiResponse::Address {
                id: refresh_id,
                result: Err("connection reset".into()),
            },
            &mut ids,
        );

        let view = page.view();
        assert_eq!(view.phase, PhaseView::Ready);
        assert_eq!(view.page_balances, vec![("eth".to_string(), "2.5".to_string())]);
        assert_eq!(view.refresh_error.as_deref(), Some("connection reset"));
    }

    #[test]
    fn balances_paginate_in_symbol_order() {
        let mut ids = IdGen::new();
        let pairs: Vec<(String, String)> = (0..12)
            .map(|i| (format!("tok{:02}", i), format!("{i}")))
            .collect();
        let borrowed: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let mut page = ready_page(&mut ids, address(&borrowed));

        let view = page.view();
        assert_eq!(view.per_page, 5);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page_balances[0].0, "tok00");

        page.handle_event(UiEvent::NextPage, &mut ids);
        page.handle_event(UiEvent::NextPage, &mut ids);
        let view = page.view();
        assert_eq!(view.page_balances.len(), 2);
        assert_eq!(view.page_balances[0].0, "tok10");
    }
}
