use std::process::ExitCode;

use log::{error, info};

use checkin_app::{config, runner};
use checkin_infrastructure::logging::init_logger;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    info!("🚀 Veloera check-in starting");

    let path = config::config_path();
    let accounts = match config::load_accounts(&path) {
        Ok(accounts) => accounts,
        Err(e) => {
            error!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Loaded {} account(s) from {}", accounts.len(), path.display());

    let summary = runner::run_all(&accounts).await;

    info!("{}", "=".repeat(30));
    if summary.all_succeeded() {
        info!("🎉 All {} account(s) checked in", summary.total);
        ExitCode::SUCCESS
    } else {
        error!(
            "⚠️ {} of {} account(s) failed check-in",
            summary.total - summary.succeeded,
            summary.total
        );
        ExitCode::FAILURE
    }
}
