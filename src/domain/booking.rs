use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub number: String,
    pub expiry: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayment {
    pub booking_reference: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub card: CreditCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingResponseStatus {
    Success,
    Rejected,
    SuspectedFraud,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    pub status: BookingResponseStatus,
}

impl BookingResponse {
    /// A suspected-fraud response never carries a payment id: the charge was
    /// never attempted.
    pub fn suspected_fraud(booking_reference: String) -> Self {
        Self {
            booking_reference,
            payment_id: None,
            status: BookingResponseStatus::SuspectedFraud,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_of_flight: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Invoice {
    pub fn priced(cost_of_flight: Decimal, tax: Decimal) -> Self {
        Self {
            cost_of_flight,
            tax,
            total: cost_of_flight + tax,
        }
    }
}
