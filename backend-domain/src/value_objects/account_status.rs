// Account status value object

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Disconnected,
}

impl AccountStatus {
    /// A record is disconnected once its snapshot is strictly older than the
    /// freshness window; exactly `window_seconds` old still counts as active.
    pub fn classify(now: i64, last_seen_at: i64, window_seconds: i64) -> Self {
        if now - last_seen_at > window_seconds {
            AccountStatus::Disconnected
        } else {
            AccountStatus::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Disconnected => "disconnected",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_boundary_is_inclusive() {
        assert_eq!(AccountStatus::classify(1_060, 1_000, 60), AccountStatus::Active);
        assert_eq!(
            AccountStatus::classify(1_061, 1_000, 60),
            AccountStatus::Disconnected
        );
    }

    #[test]
    fn future_timestamps_count_as_active() {
        assert_eq!(AccountStatus::classify(1_000, 1_030, 60), AccountStatus::Active);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&AccountStatus::Disconnected).expect("serialize");
        assert_eq!(json, "\"disconnected\"");
        assert_eq!(AccountStatus::Active.as_str(), "active");
    }
}
