use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Blockchain networks supported by the wallet platform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    BaseSepolia,
    BaseMainnet,
}

impl Network {
    /// All supported networks, in display order
    pub const ALL: &'static [Network] = &[Network::BaseSepolia, Network::BaseMainnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::BaseSepolia => "base-sepolia",
            Network::BaseMainnet => "base-mainnet",
        }
    }

    /// True for networks with a faucet (test networks only)
    pub fn has_faucet(&self) -> bool {
        matches!(self, Network::BaseSepolia)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A custodial wallet as returned by the platform
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    pub network: Network,
}

/// A funds-holding address with per-currency balances.
///
/// `balances` maps currency symbol to a decimal amount kept as a string;
/// amounts may exceed any fixed-width numeric type. The BTreeMap keeps
/// enumeration order deterministic across render passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    #[serde(rename = "walletId")]
    pub wallet_id: String,
    pub network: String,
    pub balances: BTreeMap<String, String>,
}

impl Address {
    /// Balances as an ordered sequence of (currency, amount) pairs
    pub fn balance_rows(&self) -> Vec<(String, String)> {
        self.balances
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Transfer form fields; ephemeral, reset to empty on success only
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TransferForm {
    pub destination_address: String,
    pub amount: String,
    pub asset: String,
}

impl TransferForm {
    /// Client-side precondition for submission: all fields present and
    /// the amount is a well-formed non-negative decimal.
    pub fn is_submittable(&self) -> bool {
        !self.destination_address.is_empty()
            && !self.asset.is_empty()
            && is_valid_amount(&self.amount)
    }

    pub fn reset(&mut self) {
        *self = TransferForm::default();
    }
}

/// Receipt for a submitted transfer
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TransferReceipt {
    #[serde(rename = "transactionLink")]
    pub transaction_link: String,
}

/// Validate an asset amount as arbitrary-precision decimal text.
///
/// Accepts digits with at most one decimal point and at least one digit
/// somewhere. Signs are rejected, which makes negatives impossible by
/// construction. Floats are deliberately not involved.
pub fn is_valid_amount(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in text.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}
