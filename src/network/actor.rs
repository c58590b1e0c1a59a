//! Network actor - runs platform calls in the Tokio runtime
//!
//! Each command becomes one spawned task so slow calls never block the
//! command loop. Tasks report back over the response channel with the
//! originating request id; the app layer decides what is still
//! relevant.

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::info;

use crate::messages::{ApiCommand, ApiResponse};
use crate::network::client::ApiClient;

pub struct NetworkActor {
    api: ApiClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(api: ApiClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<ApiCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(ApiCommand::Shutdown) | None => break,
                        Some(cmd) => self.spawn(cmd),
                    }
                }

                Some(_result) = self.active_requests.join_next() => {
                    // completed task, nothing to clean up
                }
            }
        }
        info!("network actor stopped");
    }

    fn spawn(&mut self, cmd: ApiCommand) {
        let api = self.api.clone();
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            let response = match cmd {
                ApiCommand::ListWallets { id } => {
                    info!(id, "listing wallets");
                    let result = api.list_wallets().await.map_err(|e| e.to_string());
                    ApiResponse::Wallets { id, result }
                }
                ApiCommand::CreateWallet { id, network } => {
                    info!(id, %network, "creating wallet");
                    let result = api.create_wallet(network).await.map_err(|e| e.to_string());
                    ApiResponse::WalletCreated { id, result }
                }
                ApiCommand::GetAddress {
                    id,
                    wallet_id,
                    address_id,
                } => {
                    info!(id, %wallet_id, %address_id, "fetching address");
                    let result = api
                        .get_address(&wallet_id, &address_id)
                        .await
                        .map_err(|e| e.to_string());
                    ApiResponse::Address { id, result }
                }
                ApiCommand::RequestFaucet {
                    id,
                    wallet_id,
                    address_id,
                } => {
                    info!(id, %wallet_id, %address_id, "requesting faucet");
                    let result = api
                        .request_faucet(&wallet_id, &address_id)
                        .await
                        .map_err(|e| e.to_string());
                    ApiResponse::FaucetDone { id, result }
                }
                ApiCommand::CreateTransfer {
                    id,
                    wallet_id,
                    address_id,
                    transfer,
                } => {
                    info!(id, %wallet_id, %address_id, "creating transfer");
                    let result = api
                        .create_transfer(&wallet_id, &address_id, &transfer)
                        .await
                        .map_err(|e| e.to_string());
                    ApiResponse::TransferCreated { id, result }
                }
                ApiCommand::Shutdown => unreachable!("handled by the command loop"),
            };
            info!(id = response.id(), "request completed");
            let _ = response_tx.send(response);
        });
    }
}
