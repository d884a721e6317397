use anyhow::{Context, Result};
use log::{error, info, warn};
use reqwest::StatusCode;

use checkin_domain::check_in::{quota_to_megabytes, CheckInOutcome};
use checkin_domain::AccountConfig;

use super::CheckInClient;

/// Run the check-in operation for one account.
///
/// Never fails to the caller: every failure mode, including not being able
/// to build the client at all, is folded into a `Failed` or `Unauthorized`
/// outcome.
pub async fn run_check_in(account: &AccountConfig) -> CheckInOutcome {
    match CheckInClient::new(account) {
        Ok(client) => client.execute_check_in(account).await,
        Err(e) => {
            error!("[{}] Cannot build HTTP client: {:#}", account.user_id, e);
            CheckInOutcome::failed(format!("cannot build HTTP client: {:#}", e))
        }
    }
}

impl CheckInClient {
    /// Execute check-in with bounded retries.
    ///
    /// Network errors and unexpected HTTP statuses are retried after
    /// `retry_delay`; 401 and any 200 response are terminal.
    pub async fn execute_check_in(&self, account: &AccountConfig) -> CheckInOutcome {
        for attempt in 1..=self.retry_count {
            info!(
                "[{}] Check-in attempt {}/{}",
                account.user_id, attempt, self.retry_count
            );

            match self.attempt_once(account).await {
                Ok(Some(outcome)) => return outcome,
                Ok(None) => {}
                Err(e) => error!("[{}] Network error: {:#}", account.user_id, e),
            }

            if attempt < self.retry_count && !self.retry_delay.is_zero() {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        CheckInOutcome::failed("retries exhausted")
    }

    /// One POST to the check-in endpoint.
    ///
    /// `Ok(Some(_))` is a terminal classification, `Ok(None)` an unexpected
    /// HTTP status worth retrying, `Err` a network-layer failure.
    async fn attempt_once(&self, account: &AccountConfig) -> Result<Option<CheckInOutcome>> {
        let response = self
            .client
            .post(self.checkin_url.clone())
            .send()
            .await
            .context("Failed to send check-in request")?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Authentication will not succeed on retry.
            return Ok(Some(CheckInOutcome::unauthorized(
                "token or user id invalid/expired",
            )));
        }

        if status == StatusCode::OK {
            let body = response
                .text()
                .await
                .context("Failed to read response body")?;
            return Ok(Some(classify_body(&body, &account.already_markers)));
        }

        warn!("[{}] HTTP {}", account.user_id, status);
        Ok(None)
    }
}

/// Interpret a 200 response body. Always terminal: a malformed or rejecting
/// 200 is an API-level verdict, not a transient fault.
fn classify_body(body: &str, already_markers: &[String]) -> CheckInOutcome {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return CheckInOutcome::failed("response not JSON"),
    };

    let success = value["success"].as_bool().unwrap_or(false);
    let message = value["message"].as_str().unwrap_or("no message");

    if !success
        && already_markers
            .iter()
            .any(|marker| !marker.is_empty() && message.contains(marker.as_str()))
    {
        return CheckInOutcome::already_checked(message);
    }

    if success {
        let quota = value["data"]["quota"].as_f64().unwrap_or(0.0);
        let quota_mb = quota_to_megabytes(quota);
        let data = value.get("data").filter(|d| !d.is_null()).cloned();
        return CheckInOutcome::success(
            format!("{} | remaining quota: {:.2} MB", message, quota_mb),
            data,
        );
    }

    CheckInOutcome::failed(format!("API returned failure: {}", message))
}
