//! # Time Utilities
//!
//! Wall-clock helpers for expiring stored values, using chrono.
//!
//! Expiry instants are expressed in milliseconds since the Unix epoch so they
//! can be written into JSON next to the value they guard.

use chrono::{DateTime, Duration, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    now_utc().timestamp_millis()
}

/// Expiry instant (ms since epoch) `hours` after `now`.
pub fn expiry_after_hours(now: DateTime<Utc>, hours: u32) -> i64 {
    (now + Duration::hours(i64::from(hours))).timestamp_millis()
}

/// Whether an expiry instant has passed at `now`.
///
/// The boundary instant itself still counts as valid.
pub fn is_expired(expiry_millis: i64, now: DateTime<Utc>) -> bool {
    now.timestamp_millis() > expiry_millis
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expiry_after_hours() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let expiry = expiry_after_hours(now, 24);
        assert_eq!(expiry - now.timestamp_millis(), 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_is_expired() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let expiry = expiry_after_hours(now, 1);

        assert!(!is_expired(expiry, now));
        assert!(!is_expired(expiry, now + Duration::hours(1)));
        assert!(is_expired(expiry, now + Duration::minutes(61)));
    }
}
