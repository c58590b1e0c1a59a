//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Page-size choices for the wallet list
pub const WALLETS_PER_PAGE_OPTIONS: &[usize] = &[10, 20, 50, 100];

/// Page-size choices for the balances table
pub const BALANCES_PER_PAGE_OPTIONS: &[usize] = &[5, 10, 20, 50];

/// Default base URL of the wallet-platform API
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Environment variable overriding the configured base URL
pub const API_URL_ENV: &str = "WALLETDECK_API_URL";

/// Application name
pub const APP_NAME: &str = "Walletdeck";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
