//! Batch runner: sequential execution over the account list and exit-code
//! aggregation.

use log::{error, info};

use checkin_domain::{AccountConfig, CheckInOutcome, CheckInStatus};
use checkin_infrastructure::http::run_check_in;

/// Aggregated outcome of one batch run.
#[derive(Debug)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub outcomes: Vec<(String, CheckInOutcome)>,
}

impl BatchSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            succeeded: 0,
            outcomes: Vec::with_capacity(total),
        }
    }

    pub fn record(&mut self, user_id: &str, outcome: CheckInOutcome) {
        if outcome.is_effective_success() {
            self.succeeded += 1;
        }
        self.outcomes.push((user_id.to_string(), outcome));
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }
}

/// Check in every account in input order. One account's failure never
/// prevents the next from being attempted.
pub async fn run_all(accounts: &[AccountConfig]) -> BatchSummary {
    let mut summary = BatchSummary::new(accounts.len());

    for account in accounts {
        info!("{}", "-".repeat(30));

        let outcome = run_check_in(account).await;

        match outcome.status {
            CheckInStatus::Success => {
                info!("✅ [{}] {}", account.user_id, outcome.message);
            }
            CheckInStatus::AlreadyChecked => {
                info!("🆗 [{}] {}", account.user_id, outcome.message);
            }
            CheckInStatus::Failed | CheckInStatus::Unauthorized => {
                error!("❌ [{}] {}", account.user_id, outcome.message);
            }
        }

        summary.record(&account.user_id, outcome);
    }

    summary
}
