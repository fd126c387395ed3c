use crate::gateways::{DownstreamError, FraudCheck};
use serde::Deserialize;
use std::time::Duration;

const SERVICE: &str = "fraud-check";

pub struct FraudCheckClient {
    pub base_url: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Deserialize)]
struct BlacklistStatus {
    blacklisted: String,
}

#[async_trait::async_trait]
impl FraudCheck for FraudCheckClient {
    async fn is_blacklisted(&self, card_number: &str) -> Result<bool, DownstreamError> {
        let url = format!("{}/blacklisted-cards/{}", self.base_url, card_number);

        let resp = self
            .client
            .get(url)
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(|source| DownstreamError::Transport {
                service: SERVICE,
                source,
            })?;

        if !resp.status().is_success() {
            return Err(DownstreamError::Status {
                service: SERVICE,
                status: resp.status(),
            });
        }

        let body: BlacklistStatus =
            resp.json().await.map_err(|e| DownstreamError::Malformed {
                service: SERVICE,
                detail: e.to_string(),
            })?;

        parse_flag(&body.blacklisted)
    }
}

// The downstream transmits the flag as a string-typed boolean.
fn parse_flag(raw: &str) -> Result<bool, DownstreamError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(DownstreamError::Malformed {
            service: SERVICE,
            detail: format!("blacklisted flag is neither true nor false: {other:?}"),
        }),
    }
}
