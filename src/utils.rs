//! Small shared helpers.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::primitives::Timestamp;

/// The current wall-clock time as milliseconds since the Unix epoch.
pub fn current_time_millis() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the Unix epoch")
        .as_millis() as Timestamp
}
