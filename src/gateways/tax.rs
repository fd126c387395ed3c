use crate::gateways::{DownstreamError, TaxLookup};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

const SERVICE: &str = "vat";

pub struct TaxClient {
    pub base_url: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Deserialize)]
struct VatResponse {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl TaxClient {
    async fn fetch(&self, amount: Decimal) -> Result<Decimal, DownstreamError> {
        let resp = self
            .client
            .get(format!("{}/vat", self.base_url))
            .query(&[("amount", amount.to_string())])
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

        let parsed: VatResponse =
            resp.json().await.map_err(|e| DownstreamError::Malformed {
                service: SERVICE,
                detail: e.to_string(),
            })?;

        Ok(parsed.amount)
    }
}

#[async_trait::async_trait]
impl TaxLookup for TaxClient {
    async fn vat_for(&self, amount: Decimal) -> Decimal {
        match self.fetch(amount).await {
            Ok(tax) => tax,
            Err(err) => {
                tracing::warn!("vat lookup degraded to zero: {err}");
                Decimal::ZERO
            }
        }
    }
}
