use serde::Deserialize;
use url::Url;

use crate::shared::DomainError;

pub const DEFAULT_CHECKIN_ENDPOINT: &str = "/api/user/check_in";

/// Connection parameters for one account.
///
/// Deserialized from the JSON config file and immutable afterwards. Unknown
/// fields are rejected so that a typo in an optional field fails loudly
/// instead of silently falling back to a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountConfig {
    pub base_url: String,
    pub user_id: String,
    pub access_token: String,
    #[serde(default = "default_checkin_endpoint")]
    pub checkin_endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    #[serde(default = "default_retry_delay_seconds")]
    pub retry_delay_seconds: f64,
    /// Substrings of an API failure message that mean "already checked in
    /// today". The upstream wording varies per deployment, so the list is a
    /// configuration point rather than a hardcoded constant.
    #[serde(default = "default_already_markers")]
    pub already_markers: Vec<String>,
}

fn default_checkin_endpoint() -> String {
    DEFAULT_CHECKIN_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_delay_seconds() -> f64 {
    1.0
}

fn default_already_markers() -> Vec<String> {
    ["已签到", "already", "重复", "duplicate"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl AccountConfig {
    /// Validate field values that serde alone cannot reject.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.base_url.trim().is_empty() {
            return Err(DomainError::MissingField("base_url"));
        }
        if self.user_id.trim().is_empty() {
            return Err(DomainError::MissingField("user_id"));
        }
        if self.access_token.trim().is_empty() {
            return Err(DomainError::MissingField("access_token"));
        }
        if self.timeout_seconds == 0 {
            return Err(DomainError::Validation(
                "timeout_seconds must be positive".to_string(),
            ));
        }
        if self.retry_count == 0 {
            return Err(DomainError::Validation(
                "retry_count must be positive".to_string(),
            ));
        }
        if !self.retry_delay_seconds.is_finite() || self.retry_delay_seconds < 0.0 {
            return Err(DomainError::Validation(
                "retry_delay_seconds must be a non-negative number".to_string(),
            ));
        }
        self.checkin_url()?;
        Ok(())
    }

    /// Resolve the check-in endpoint against the base URL.
    ///
    /// Standard URL-join semantics: an absolute endpoint replaces the base
    /// path, a relative one is appended.
    pub fn checkin_url(&self) -> Result<Url, DomainError> {
        let base = Url::parse(&self.base_url).map_err(|source| DomainError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;
        base.join(&self.checkin_endpoint)
            .map_err(|source| DomainError::InvalidUrl {
                url: format!("{}{}", self.base_url, self.checkin_endpoint),
                source,
            })
    }
}
