use crate::domain::booking::CreditCard;
use crate::gateways::{ChargeReceipt, DownstreamError, PaymentGateway, PaymentOutcome};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SERVICE: &str = "payments";

pub struct PaymentClient {
    pub base_url: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChargeRequest<'a> {
    credit_card_number: &'a str,
    credit_card_expiry: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChargeResponse {
    payment_id: String,
    payment_response_status: PaymentOutcome,
}

#[async_trait::async_trait]
impl PaymentGateway for PaymentClient {
    async fn charge(
        &self,
        amount: Decimal,
        card: &CreditCard,
    ) -> Result<ChargeReceipt, DownstreamError> {
        let body = ChargeRequest {
            credit_card_number: &card.number,
            credit_card_expiry: card.expiry,
            amount,
        };

        let resp = self
            .client
            .post(format!("{}/payments", self.base_url))
            .json(&body)
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

        let parsed: ChargeResponse =
            resp.json().await.map_err(|e| DownstreamError::Malformed {
                service: SERVICE,
                detail: e.to_string(),
            })?;

        Ok(ChargeReceipt {
            payment_id: parsed.payment_id,
            outcome: parsed.payment_response_status,
        })
    }
}
