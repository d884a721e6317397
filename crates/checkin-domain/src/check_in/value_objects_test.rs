use super::value_objects::*;

#[test]
fn test_success_and_already_checked_are_effective_success() {
    assert!(CheckInStatus::Success.is_effective_success());
    assert!(CheckInStatus::AlreadyChecked.is_effective_success());
    assert!(!CheckInStatus::Failed.is_effective_success());
    assert!(!CheckInStatus::Unauthorized.is_effective_success());
}

#[test]
fn test_success_outcome_carries_data() {
    let data = serde_json::json!({"quota": 2097152});
    let outcome = CheckInOutcome::success("OK", Some(data.clone()));

    assert_eq!(outcome.status, CheckInStatus::Success);
    assert_eq!(outcome.message, "OK");
    assert_eq!(outcome.data, Some(data));
    assert!(outcome.is_effective_success());
}

#[test]
fn test_failed_outcome_has_no_data() {
    let outcome = CheckInOutcome::failed("retries exhausted");

    assert_eq!(outcome.status, CheckInStatus::Failed);
    assert!(outcome.data.is_none());
    assert!(!outcome.is_effective_success());
}

#[test]
fn test_quota_to_megabytes() {
    assert_eq!(quota_to_megabytes(2_097_152.0), 2.0);
    assert_eq!(quota_to_megabytes(0.0), 0.0);
    // 1.5 MB worth of bytes
    assert!((quota_to_megabytes(1_572_864.0) - 1.5).abs() < f64::EPSILON);
}

#[test]
fn test_status_serializes_snake_case() {
    let json = serde_json::to_string(&CheckInStatus::AlreadyChecked).unwrap();
    assert_eq!(json, "\"already_checked\"");
}
