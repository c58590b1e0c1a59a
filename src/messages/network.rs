//! Network messages - communication between App and Network layers
//!
//! Each command is exactly one HTTP round trip against the wallet
//! platform; each response carries the originating request id so the
//! app layer can drop outcomes that no longer have a pending run.

use crate::models::{Address, Network, TransferForm, TransferReceipt, Wallet};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum ApiCommand {
    /// Fetch the full wallet collection
    ListWallets { id: u64 },
    /// Create a wallet on the given network
    CreateWallet { id: u64, network: Network },
    /// Fetch an address with its balances
    GetAddress {
        id: u64,
        wallet_id: String,
        address_id: String,
    },
    /// Ask the test-network faucet to credit the address
    RequestFaucet {
        id: u64,
        wallet_id: String,
        address_id: String,
    },
    /// Submit an asset transfer from the address
    CreateTransfer {
        id: u64,
        wallet_id: String,
        address_id: String,
        transfer: TransferForm,
    },
    /// Shutdown the network actor
    Shutdown,
}

impl ApiCommand {
    /// Request id, if the command expects a response
    pub fn id(&self) -> Option<u64> {
        match self {
            ApiCommand::ListWallets { id }
            | ApiCommand::CreateWallet { id, .. }
            | ApiCommand::GetAddress { id, .. }
            | ApiCommand::RequestFaucet { id, .. }
            | ApiCommand::CreateTransfer { id, .. } => Some(*id),
            ApiCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer.
///
/// Failures arrive as human-readable messages; the network layer has
/// already preferred the platform's `error` body field over generic
/// fallbacks.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    Wallets {
        id: u64,
        result: Result<Vec<Wallet>, String>,
    },
    WalletCreated {
        id: u64,
        result: Result<Wallet, String>,
    },
    Address {
        id: u64,
        result: Result<Address, String>,
    },
    FaucetDone {
        id: u64,
        result: Result<(), String>,
    },
    TransferCreated {
        id: u64,
        result: Result<TransferReceipt, String>,
    },
}

impl ApiResponse {
    /// Get the request id from the response
    pub fn id(&self) -> u64 {
        match self {
            ApiResponse::Wallets { id, .. }
            | ApiResponse::WalletCreated { id, .. }
            | ApiResponse::Address { id, .. }
            | ApiResponse::FaucetDone { id, .. }
            | ApiResponse::TransferCreated { id, .. } => *id,
        }
    }
}
