use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend-side ordering of a token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "market_cap")]
    MarketCap,
    #[serde(rename = "volume_24h")]
    Volume24h,
    #[serde(rename = "price_change_24h")]
    PriceChange24h,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [
        SortKey::MarketCap,
        SortKey::Volume24h,
        SortKey::PriceChange24h,
    ];

    /// Value sent as the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketCap => "market_cap",
            Self::Volume24h => "volume_24h",
            Self::PriceChange24h => "price_change_24h",
        }
    }

    /// Caption of the sort control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MarketCap => "Market Cap",
            Self::Volume24h => "Volume 24h",
            Self::PriceChange24h => "24h Change",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "market_cap" | "mcap" => Ok(Self::MarketCap),
            "volume_24h" | "volume" => Ok(Self::Volume24h),
            "price_change_24h" | "change" => Ok(Self::PriceChange24h),
            other => Err(format!(
                "Unknown sort key '{}', expected one of: market_cap, volume_24h, price_change_24h",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names_and_aliases() {
        assert_eq!("market_cap".parse::<SortKey>(), Ok(SortKey::MarketCap));
        assert_eq!("VOLUME_24H".parse::<SortKey>(), Ok(SortKey::Volume24h));
        assert_eq!("change".parse::<SortKey>(), Ok(SortKey::PriceChange24h));
        assert!("holders".parse::<SortKey>().is_err());
    }

    #[test]
    fn serializes_to_query_values() {
        let json = serde_json::to_string(&SortKey::PriceChange24h).unwrap();
        assert_eq!(json, "\"price_change_24h\"");
        assert_eq!(SortKey::default().to_string(), "market_cap");
    }
}
