mod value_objects;

#[cfg(test)]
mod value_objects_test;

pub use value_objects::{quota_to_megabytes, CheckInOutcome, CheckInStatus};
