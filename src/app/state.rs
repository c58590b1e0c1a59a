//! Application state - routing and screen controllers
//!
//! Owns the current route, the controller behind it, and a back stack.
//! Navigation replaces the controller wholesale; responses addressed
//! to a dropped controller find no pending id and are discarded.

use chrono::Local;
use tracing::{debug, info};

use crate::app::address_detail::AddressDetailPage;
use crate::app::wallet_detail::WalletDetailPage;
use crate::app::wallet_list::WalletListPage;
use crate::app::{Effects, IdGen};
use crate::messages::render::{RenderState, ScreenView};
use crate::messages::{ApiCommand, ApiResponse, UiEvent};
use crate::models::Network;
use crate::routes::Route;

pub enum Screen {
    WalletList(WalletListPage),
    WalletDetail(WalletDetailPage),
    AddressDetail(AddressDetailPage),
}

pub struct AppState {
    route: Route,
    screen: Screen,
    back_stack: Vec<Route>,
    ids: IdGen,
    show_help: bool,
    /// Timestamped lines, newest last
    activity: Vec<String>,
    /// Network of the wallet currently in view, when a previous screen
    /// told us
    network_hint: Option<Network>,
    pub should_quit: bool,
}

impl AppState {
    /// Start on the wallet list; returns its entry fetch
    pub fn new() -> (Self, ApiCommand) {
        let mut ids = IdGen::new();
        let (page, command) = WalletListPage::enter(&mut ids);
        let state = AppState {
            route: Route::Wallets,
            screen: Screen::WalletList(page),
            back_stack: Vec::new(),
            ids,
            show_help: false,
            activity: Vec::new(),
            network_hint: None,
            should_quit: false,
        };
        (state, command)
    }

    fn note(&mut self, line: &str) {
        info!(activity = line, "activity");
        self.activity
            .push(format!("{} {}", Local::now().format("%H:%M:%S"), line));
    }

    /// Build the controller for a route and return its entry fetch
    fn build_screen(&mut self, route: &Route) -> (Screen, Option<ApiCommand>) {
        match route {
            Route::Wallets => {
                let (page, command) = WalletListPage::enter(&mut self.ids);
                (Screen::WalletList(page), Some(command))
            }
            Route::Wallet { wallet_id } => {
                let page = WalletDetailPage::enter(wallet_id.clone(), self.network_hint);
                (Screen::WalletDetail(page), None)
            }
            Route::Address {
                wallet_id,
                address_id,
            } => {
                let (page, command) = AddressDetailPage::enter(
                    &mut self.ids,
                    wallet_id.clone(),
                    address_id.clone(),
                );
                (Screen::AddressDetail(page), Some(command))
            }
        }
    }

    /// Replace the current screen, pushing the old route onto the back
    /// stack
    fn navigate(&mut self, route: Route) -> Option<ApiCommand> {
        debug!(from = %self.route, to = %route, "navigate");
        let (screen, command) = self.build_screen(&route);
        self.back_stack.push(std::mem::replace(&mut self.route, route));
        self.screen = screen;
        command
    }

    /// Pop the back stack; no-op at the root
    fn back(&mut self) -> Option<ApiCommand> {
        let previous = self.back_stack.pop()?;
        debug!(from = %self.route, to = %previous, "back");
        // Leaving a wallet forgets its network until told again
        if matches!(previous, Route::Wallets) {
            self.network_hint = None;
        }
        let (screen, command) = self.build_screen(&previous);
        self.route = previous;
        self.screen = screen;
        command
    }

    /// Rebuild the current screen from scratch, re-running its entry
    /// fetch
    fn reload(&mut self) -> Option<ApiCommand> {
        let route = self.route.clone();
        let (screen, command) = self.build_screen(&route);
        self.screen = screen;
        command
    }

    fn apply_effects(&mut self, fx: Effects) -> Vec<ApiCommand> {
        let mut commands = Vec::new();
        if let Some(command) = fx.command {
            commands.push(command);
        }
        if let Some(network) = fx.network_hint {
            self.network_hint = Some(network);
        }
        if let Some(note) = fx.note {
            self.note(&note);
        }
        if let Some(route) = fx.goto {
            if let Some(command) = self.navigate(route) {
                commands.push(command);
            }
        }
        commands
    }

    /// Process a user event; returns the network commands to dispatch
    pub fn handle_ui_event(&mut self, event: UiEvent) -> Vec<ApiCommand> {
        match event {
            UiEvent::Quit => {
                self.should_quit = true;
                return Vec::new();
            }
            UiEvent::ToggleHelp => {
                self.show_help = !self.show_help;
                return Vec::new();
            }
            UiEvent::CloseHelp => {
                self.show_help = false;
                return Vec::new();
            }
            UiEvent::Back => {
                return self.back().into_iter().collect();
            }
            UiEvent::Reload => {
                return self.reload().into_iter().collect();
            }
            _ => {}
        }

        let fx = match &mut self.screen {
            Screen::WalletList(page) => page.handle_event(event, &mut self.ids),
            Screen::WalletDetail(page) => page.handle_event(event, &mut self.ids),
            Screen::AddressDetail(page) => page.handle_event(event, &mut self.ids),
        };
        self.apply_effects(fx)
    }

    /// Route a network response to the current screen. Responses for a
    /// screen that has been navigated away from settle nothing.
    pub fn handle_api_response(&mut self, response: ApiResponse) -> Vec<ApiCommand> {
        debug!(request_id = response.id(), "api response");
        let fx = match &mut self.screen {
            Screen::WalletList(page) => page.handle_response(response),
            Screen::WalletDetail(_) => Effects::none(),
            Screen::AddressDetail(page) => page.handle_response(response, &mut self.ids),
        };
        self.apply_effects(fx)
    }

    /// Snapshot for the UI loop
    pub fn to_render_state(&self) -> RenderState {
        let screen = match &self.screen {
            Screen::WalletList(page) => ScreenView::WalletList(page.view()),
            Screen::WalletDetail(page) => ScreenView::WalletDetail(page.view()),
            Screen::AddressDetail(page) => ScreenView::AddressDetail(page.view()),
        };
        RenderState {
            route_path: self.route.path(),
            screen,
            show_help: self.show_help,
            activity: self.activity.last().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wallet;

    fn ready_state() -> AppState {
        let (mut state, cmd) = AppState::new();
        let id = cmd.id().unwrap();
        state.handle_api_response(ApiResponse::Wallets {
            id,
            result: Ok(vec![Wallet {
                id: "w_1".into(),
                network: Network::BaseSepolia,
            }]),
        });
        state
    }

    #[test]
    fn starts_on_the_wallet_list() {
        let (state, cmd) = AppState::new();
        assert!(matches!(cmd, ApiCommand::ListWallets { .. }));
        assert_eq!(state.to_render_state().route_path, "/wallets");
    }

    #[test]
    fn wallet_creation_lands_on_the_new_wallet() {
        let mut state = ready_state();
        state.handle_ui_event(UiEvent::OpenNetworkSelect);
        state.handle_ui_event(UiEvent::Activate);
        let commands = state.handle_ui_event(UiEvent::CreateWallet);
        let id = commands[0].id().unwrap();

        state.handle_api_response(ApiResponse::WalletCreated {
            id,
            result: Ok(Wallet {
                id: "w_123".into(),
                network: Network::BaseSepolia,
            }),
        });
        let render = state.to_render_state();
        assert_eq!(render.route_path, "/wallets/w_123");
        assert!(render.activity.unwrap().contains("w_123"));
    }

    #[test]
    fn back_returns_to_the_list_and_refetches() {
        let mut state = ready_state();
        let commands = state.handle_ui_event(UiEvent::Activate);
        assert!(commands.is_empty());
        assert_eq!(state.to_render_state().route_path, "/wallets/w_1");

        let commands = state.handle_ui_event(UiEvent::Back);
        assert_eq!(state.to_render_state().route_path, "/wallets");
        assert!(matches!(commands[0], ApiCommand::ListWallets { .. }));
    }

    #[test]
    fn back_at_the_root_is_a_no_op() {
        let mut state = ready_state();
        let commands = state.handle_ui_event(UiEvent::Back);
        assert!(commands.is_empty());
        assert_eq!(state.to_render_state().route_path, "/wallets");
    }

    #[test]
    fn response_after_navigation_is_dropped() {
        let mut state = ready_state();
        // open w_1's detail, then come back; the re-entry fetch is in
        // flight
        state.handle_ui_event(UiEvent::Activate);
        let commands = state.handle_ui_event(UiEvent::Back);
        let refetch_id = commands[0].id().unwrap();

        // an answer to the original (pre-navigation) fetch
        state.handle_api_response(ApiResponse::Wallets {
            id: 1,
            result: Ok(Vec::new()),
        });
        let render = state.to_render_state();
        match render.screen {
            ScreenView::WalletList(view) => {
                assert_eq!(view.phase, crate::messages::render::PhaseView::Loading)
            }
            _ => panic!("expected wallet list"),
        }

        // the current fetch still settles normally
        state.handle_api_response(ApiResponse::Wallets {
            id: refetch_id,
            result: Ok(Vec::new()),
        });
        match state.to_render_state().screen {
            ScreenView::WalletList(view) => {
                assert_eq!(view.phase, crate::messages::render::PhaseView::Ready)
            }
            _ => panic!("expected wallet list"),
        }
    }

    #[test]
    fn reload_reissues_the_entry_fetch() {
        let mut state = ready_state();
        let commands = state.handle_ui_event(UiEvent::Reload);
        assert!(matches!(commands[0], ApiCommand::ListWallets { .. }));
    }

    #[test]
    fn quit_sets_the_flag() {
        let mut state = ready_state();
        state.handle_ui_event(UiEvent::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn help_toggles() {
        let mut state = ready_state();
        assert!(!state.to_render_state().show_help);
        state.handle_ui_event(UiEvent::ToggleHelp);
        assert!(state.to_render_state().show_help);
        state.handle_ui_event(UiEvent::CloseHelp);
        assert!(!state.to_render_state().show_help);
    }
}
