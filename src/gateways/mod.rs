use crate::domain::booking::CreditCard;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod fraud;
pub mod mock;
pub mod payment;
pub mod tax;

/// A downstream call that could not produce a usable answer. Business
/// outcomes (a declined charge, a blacklisted card) are not errors.
#[derive(Debug, Error)]
pub enum DownstreamError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} returned HTTP {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("{service} returned a malformed payload: {detail}")]
    Malformed {
        service: &'static str,
        detail: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOutcome {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeReceipt {
    pub payment_id: String,
    pub outcome: PaymentOutcome,
}

#[async_trait::async_trait]
pub trait FraudCheck: Send + Sync {
    async fn is_blacklisted(&self, card_number: &str) -> Result<bool, DownstreamError>;
}

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(
        &self,
        amount: Decimal,
        card: &CreditCard,
    ) -> Result<ChargeReceipt, DownstreamError>;
}

/// Tax is a non-critical enrichment, so the result shape is deliberately not
/// a `Result`: implementations resolve every failure to zero themselves.
#[async_trait::async_trait]
pub trait TaxLookup: Send + Sync {
    async fn vat_for(&self, amount: Decimal) -> Decimal;
}
