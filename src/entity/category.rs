use serde::{Deserialize, Serialize};

use crate::api::models::string_or_float;
use crate::entity::ApiError;

/// A named grouping of tokens with aggregate market statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub token_count: u64,
    #[serde(with = "string_or_float")]
    pub total_market_cap: f64,
    #[serde(with = "string_or_float")]
    pub total_volume_24h: f64,
}

impl Category {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.id.trim().is_empty() {
            return Err(ApiError::InvalidResponse("Empty category id".into()));
        }
        if self.name.trim().is_empty() {
            return Err(ApiError::InvalidResponse(format!(
                "Empty name for category {}",
                self.id
            )));
        }
        if !self.total_market_cap.is_finite() || self.total_market_cap < 0.0 {
            return Err(ApiError::InvalidResponse(format!(
                "Invalid market cap for category {}: {}",
                self.id, self.total_market_cap
            )));
        }
        if !self.total_volume_24h.is_finite() || self.total_volume_24h < 0.0 {
            return Err(ApiError::InvalidResponse(format!(
                "Invalid volume for category {}: {}",
                self.id, self.total_volume_24h
            )));
        }
        Ok(())
    }

    /// Client-side route of the category page.
    pub fn path(&self) -> String {
        format!("/category/{}", self.id)
    }
}
