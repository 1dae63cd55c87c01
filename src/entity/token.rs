use serde::{Deserialize, Serialize};

use crate::api::models::{empty_as_none, option_string_or_float};
use crate::entity::ApiError;

/// A single tradable asset as served by the listing backend.
///
/// Rank is never stored here: it is derived from the position of the token
/// in the sequence the backend returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,
    #[serde(default, with = "option_string_or_float")]
    pub price: Option<f64>,
    #[serde(default, with = "option_string_or_float")]
    pub market_cap: Option<f64>,
    #[serde(default, with = "option_string_or_float")]
    pub volume_24h: Option<f64>,
    #[serde(default, with = "option_string_or_float")]
    pub price_change_24h: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub telegram: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
}

impl Token {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.id.trim().is_empty() {
            return Err(ApiError::InvalidResponse("Empty token id".into()));
        }
        if self.name.trim().is_empty() {
            return Err(ApiError::InvalidResponse(format!(
                "Empty name for token {}",
                self.id
            )));
        }
        if self.symbol.trim().is_empty() {
            return Err(ApiError::InvalidResponse(format!(
                "Empty symbol for token {}",
                self.id
            )));
        }

        let amounts = [
            ("price", self.price),
            ("market cap", self.market_cap),
            ("volume", self.volume_24h),
        ];
        for (field, value) in amounts {
            let Some(value) = value else { continue };
            if !value.is_finite() || value < 0.0 {
                return Err(ApiError::InvalidResponse(format!(
                    "Invalid {} for token {}: {}",
                    field, self.id, value
                )));
            }
        }

        if self.price_change_24h.is_some_and(|change| !change.is_finite()) {
            return Err(ApiError::InvalidResponse(format!(
                "Invalid price change for token {}",
                self.id
            )));
        }
        Ok(())
    }

    /// DexScreener page for the token's on-chain address, if it has one.
    pub fn explorer_url(&self) -> Option<String> {
        self.address.as_deref().map(crate::utils::explorer_url)
    }

    pub fn path(&self) -> String {
        format!("/token/{}", self.id)
    }
}
