// Runtime configuration snapshot handed to the application layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub freshness_window_seconds: i64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}
