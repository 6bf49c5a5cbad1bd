use chrono::{DateTime, SecondsFormat, Utc};

/// Current wall-clock time in whole unix seconds.
pub fn current_unix_secs() -> i64 {
    Utc::now().timestamp()
}

/// Render a unix-seconds timestamp as RFC 3339 for dashboard display.
pub fn unix_to_rfc3339(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
