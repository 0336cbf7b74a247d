use reqwest::Client;
use serde::Deserialize;

use super::TokenSource;
use crate::error::{FetchError, Result};

/// One element of the Streme tokens response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenRecord {
    #[serde(default)]
    pub contract_address: String,

    #[serde(rename = "marketData", default)]
    pub market_data: Option<MarketDataRecord>,

    #[serde(default)]
    pub staking: Option<StakingRecord>,
}

/// Every field is optional; absent stays absent, never zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataRecord {
    pub market_cap: Option<f64>,
    pub price: Option<f64>,
    #[serde(rename = "priceChange24h")]
    pub price_change_24h: Option<f64>,
    #[serde(rename = "volume24h")]
    pub volume_24h: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StakingRecord {
    pub supply: Option<f64>,
}

/// Pick the record for `address` (case-insensitive), else the first one.
/// Returns None only for an empty list.
pub fn select_record(records: Vec<TokenRecord>, address: &str) -> Option<TokenRecord> {
    let pos = records
        .iter()
        .position(|r| r.contract_address.eq_ignore_ascii_case(address))
        .unwrap_or(0);
    records.into_iter().nth(pos)
}

/// HTTP client for the Streme tokens endpoint.
#[derive(Debug, Clone)]
pub struct StremeClient {
    client: Client,
    base_url: String,
}

impl StremeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}?address={address}` and decode the record list.
    pub async fn get_tokens(&self, address: &str) -> Result<Vec<TokenRecord>> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("address", address)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FetchError::Http {
                status: resp.status().as_u16(),
            });
        }

        // Decode separately so a bad body is a parse error, not a transport one
        let body = resp.text().await?;
        let records: Vec<TokenRecord> = serde_json::from_str(&body)?;
        Ok(records)
    }
}

impl TokenSource for StremeClient {
    async fn fetch_tokens(&self, address: &str) -> Result<Vec<TokenRecord>> {
        self.get_tokens(address).await
    }
}
