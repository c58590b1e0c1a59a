//! Typed HTTP client for the wallet platform
//!
//! Five operations, all JSON. Error bodies carry a human message in an
//! `error` field; when the platform omits it, each operation falls back
//! to its own generic message so the screens always have something to
//! show.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::models::{Address, Network, TransferForm, TransferReceipt, Wallet};
use crate::network::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shape of the platform's error bodies
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the platform root, e.g. `http://localhost:3000/api`
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        ApiClient { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the body of `response`, decoding `T` on success and the
    /// platform's error message otherwise
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from_reqwest)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| fallback.to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn list_wallets(&self) -> Result<Vec<Wallet>, ApiError> {
        let response = self
            .client
            .get(self.url("/wallets"))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        Self::read_json(response, "Failed to load wallets. Please try again later.").await
    }

    pub async fn create_wallet(&self, network: Network) -> Result<Wallet, ApiError> {
        let response = self
            .client
            .post(self.url("/wallets"))
            .json(&json!({ "networkId": network.as_str() }))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        Self::read_json(response, "Failed to create wallet").await
    }

    pub async fn get_address(
        &self,
        wallet_id: &str,
        address_id: &str,
    ) -> Result<Address, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/wallets/{}/addresses/{}", wallet_id, address_id)))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        Self::read_json(response, "Error fetching address data").await
    }

    /// Credit the address from the test-network faucet. The platform
    /// returns the faucet transaction; the screens only need the
    /// outcome, so the body is decoded and discarded.
    pub async fn request_faucet(
        &self,
        wallet_id: &str,
        address_id: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/wallets/{}/addresses/{}", wallet_id, address_id)))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        Self::read_json::<serde_json::Value>(response, "Failed to request faucet").await?;
        Ok(())
    }

    pub async fn create_transfer(
        &self,
        wallet_id: &str,
        address_id: &str,
        transfer: &TransferForm,
    ) -> Result<TransferReceipt, ApiError> {
        let response = self
            .client
            .post(self.url(&format!(
                "/wallets/{}/addresses/{}/transfers",
                wallet_id, address_id
            )))
            .json(transfer)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        Self::read_json(response, "Failed to create transfer").await
    }
}
