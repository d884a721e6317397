use serde::{Deserialize, Serialize};

/// Classification of one completed check-in operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInStatus {
    Success,
    Failed,
    AlreadyChecked,
    Unauthorized,
}

impl CheckInStatus {
    /// `Success` and `AlreadyChecked` both mean "no further action needed
    /// today" and count as success for the batch exit code.
    pub fn is_effective_success(&self) -> bool {
        matches!(self, CheckInStatus::Success | CheckInStatus::AlreadyChecked)
    }
}

/// Outcome of one check-in operation for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInOutcome {
    pub status: CheckInStatus,
    pub message: String,
    /// Raw `data` payload from the API, present only on success.
    pub data: Option<serde_json::Value>,
}

impl CheckInOutcome {
    pub fn success(message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self {
            status: CheckInStatus::Success,
            message: message.into(),
            data,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CheckInStatus::Failed,
            message: message.into(),
            data: None,
        }
    }

    pub fn already_checked(message: impl Into<String>) -> Self {
        Self {
            status: CheckInStatus::AlreadyChecked,
            message: message.into(),
            data: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: CheckInStatus::Unauthorized,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_effective_success(&self) -> bool {
        self.status.is_effective_success()
    }
}

/// The API reports quota in bytes; humans read it in megabytes.
pub fn quota_to_megabytes(quota_bytes: f64) -> f64 {
    quota_bytes / (1024.0 * 1024.0)
}
