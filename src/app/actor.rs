//! App actor - the async heart of the application
//!
//! Receives UI events and network responses over channels, feeds them
//! through the state machine, dispatches the commands it emits, and
//! publishes a fresh render snapshot after every update.

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::AppState;
use crate::messages::{ApiCommand, ApiResponse, RenderState, UiEvent};

pub struct AppActor {
    state: AppState,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    net_rx: mpsc::UnboundedReceiver<ApiResponse>,
    net_tx: mpsc::UnboundedSender<ApiCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        net_rx: mpsc::UnboundedReceiver<ApiResponse>,
        net_tx: mpsc::UnboundedSender<ApiCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> (Self, ApiCommand) {
        let (state, entry) = AppState::new();
        let actor = AppActor {
            state,
            ui_rx,
            net_rx,
            net_tx,
            render_tx,
        };
        (actor, entry)
    }

    pub async fn run(mut self, entry: ApiCommand) {
        info!("app actor started");
        self.dispatch(vec![entry]);
        self.publish();

        loop {
            tokio::select! {
                event = self.ui_rx.recv() => {
                    let Some(event) = event else { break };
                    let commands = self.state.handle_ui_event(event);
                    self.dispatch(commands);
                    if self.state.should_quit {
                        break;
                    }
                    self.publish();
                }
                response = self.net_rx.recv() => {
                    let Some(response) = response else { break };
                    let commands = self.state.handle_api_response(response);
                    self.dispatch(commands);
                    self.publish();
                }
            }
        }

        let _ = self.net_tx.send(ApiCommand::Shutdown);
        info!("app actor stopped");
    }

    fn dispatch(&self, commands: Vec<ApiCommand>) {
        for command in commands {
            if self.net_tx.send(command).is_err() {
                error!("network actor is gone");
            }
        }
    }

    fn publish(&self) {
        // the UI loop exiting first is a normal shutdown order
        let _ = self.render_tx.send(self.state.to_render_state());
    }
}
