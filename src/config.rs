#[derive(Clone)]
pub struct AppConfig {
    pub fraud_base_url: String,
    pub payments_base_url: String,
    pub vat_base_url: String,
    pub gateway_timeout_ms: u64,
    pub fraud_check_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            fraud_base_url: std::env::var("FRAUD_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            payments_base_url: std::env::var("PAYMENTS_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            vat_base_url: std::env::var("VAT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            gateway_timeout_ms: std::env::var("GATEWAY_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
            fraud_check_enabled: std::env::var("FRAUD_CHECK_ENABLED")
                .map(|s| s != "false")
                .unwrap_or(true),
        }
    }
}
