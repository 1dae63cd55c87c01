use reqwest::Url;

use crate::entity::ApiError;

/// Address of the listing backend, validated once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".into()));
        }

        Ok(Self { base_url: url })
    }

    /// Resolves path segments against the base URL, keeping any path prefix
    /// the base already carries.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_segments() {
        let config = ApiConfig::new("http://localhost:8000").unwrap();
        assert_eq!(
            config.endpoint(&["api", "categories"]).as_str(),
            "http://localhost:8000/api/categories"
        );
    }

    #[test]
    fn endpoint_keeps_prefix_and_encodes_ids() {
        let config = ApiConfig::new("https://example.com/backend/").unwrap();
        assert_eq!(
            config.endpoint(&["api", "tokens", "dog wif/hat"]).as_str(),
            "https://example.com/backend/api/tokens/dog%20wif%2Fhat"
        );
    }

    #[test]
    fn rejects_unusable_urls() {
        assert!(matches!(
            ApiConfig::new("localhost:8000"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(ApiConfig::new("ftp://example.com").is_err());
        assert!(ApiConfig::new("not a url").is_err());
    }
}
