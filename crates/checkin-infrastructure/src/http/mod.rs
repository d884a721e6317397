mod check_in;

pub use check_in::run_check_in;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use std::time::Duration;
use url::Url;

use checkin_domain::AccountConfig;

pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

/// HTTP client bound to one account.
///
/// Built once per account; the same client (and connection pool) serves
/// every attempt of that account's check-in.
pub struct CheckInClient {
    pub(super) client: Client,
    pub(super) checkin_url: Url,
    pub(super) retry_count: u32,
    pub(super) retry_delay: Duration,
}

impl CheckInClient {
    pub fn new(account: &AccountConfig) -> Result<Self> {
        let checkin_url = account
            .checkin_url()
            .context("Failed to resolve check-in URL")?;

        let retry_delay = Duration::try_from_secs_f64(account.retry_delay_seconds)
            .context("retry_delay_seconds is not a valid duration")?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(build_headers(account)?)
            .timeout(Duration::from_secs(account.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            checkin_url,
            retry_count: account.retry_count,
            retry_delay,
        })
    }
}

/// Browser-like headers the upstream panel expects, plus the credentials.
fn build_headers(account: &AccountConfig) -> Result<header::HeaderMap> {
    let mut headers = header::HeaderMap::new();

    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", account.access_token))
            .context("access_token is not a valid header value")?,
    );
    headers.insert(
        header::HeaderName::from_static("veloera-user"),
        header::HeaderValue::from_str(&account.user_id)
            .context("user_id is not a valid header value")?,
    );

    let origin = account.base_url.trim_end_matches('/');
    headers.insert(
        header::ORIGIN,
        header::HeaderValue::from_str(origin).context("base_url is not a valid header value")?,
    );
    headers.insert(
        header::REFERER,
        header::HeaderValue::from_str(&format!("{}/personal", origin))
            .context("base_url is not a valid header value")?,
    );

    // Body is always empty.
    headers.insert(
        header::CONTENT_LENGTH,
        header::HeaderValue::from_static("0"),
    );

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> AccountConfig {
        serde_json::from_value(serde_json::json!({
            "base_url": "https://example.com",
            "user_id": "42",
            "access_token": "tok"
        }))
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = CheckInClient::new(&account());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_rejects_bad_token() {
        let mut acc = account();
        acc.access_token = "line\nbreak".to_string();
        assert!(CheckInClient::new(&acc).is_err());
    }

    #[test]
    fn test_headers_carry_credentials() {
        let headers = build_headers(&account()).unwrap();
        assert_eq!(headers["authorization"], "Bearer tok");
        assert_eq!(headers["veloera-user"], "42");
        assert_eq!(headers["origin"], "https://example.com");
        assert_eq!(headers["referer"], "https://example.com/personal");
        assert_eq!(headers["content-length"], "0");
    }
}
