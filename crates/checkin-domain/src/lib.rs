// Domain layer - Pure value types and validation
// No dependencies on infrastructure or presentation layers

pub mod account;
pub mod check_in;
pub mod shared;

// Re-exports for convenience
pub use account::AccountConfig;
pub use check_in::{CheckInOutcome, CheckInStatus};
pub use shared::DomainError;
