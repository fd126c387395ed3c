use crate::config::AppConfig;
use crate::domain::booking::{BookingPayment, BookingResponse, BookingResponseStatus, Invoice};
use crate::gateways::fraud::FraudCheckClient;
use crate::gateways::payment::PaymentClient;
use crate::gateways::tax::TaxClient;
use crate::gateways::{DownstreamError, FraudCheck, PaymentGateway, PaymentOutcome, TaxLookup};
use crate::service::flight_costs::{FlightCostSource, UnknownFlight};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Downstream(#[from] DownstreamError),
    #[error(transparent)]
    UnknownFlight(#[from] UnknownFlight),
}

#[derive(Clone)]
pub struct BookingService {
    fraud: Option<Arc<dyn FraudCheck>>,
    payments: Arc<dyn PaymentGateway>,
    taxes: Arc<dyn TaxLookup>,
    costs: Arc<dyn FlightCostSource>,
}

impl BookingService {
    pub fn new(
        payments: Arc<dyn PaymentGateway>,
        taxes: Arc<dyn TaxLookup>,
        costs: Arc<dyn FlightCostSource>,
    ) -> Self {
        Self {
            fraud: None,
            payments,
            taxes,
            costs,
        }
    }

    /// Wiring a fraud checker is an explicit choice: without one, every card
    /// is treated as chargeable.
    pub fn with_fraud_check(mut self, fraud: Arc<dyn FraudCheck>) -> Self {
        self.fraud = Some(fraud);
        self
    }

    pub fn from_config(cfg: &AppConfig, costs: Arc<dyn FlightCostSource>) -> Self {
        let client = reqwest::Client::new();

        let service = BookingService::new(
            Arc::new(PaymentClient {
                base_url: cfg.payments_base_url.clone(),
                timeout_ms: cfg.gateway_timeout_ms,
                client: client.clone(),
            }),
            Arc::new(TaxClient {
                base_url: cfg.vat_base_url.clone(),
                timeout_ms: cfg.gateway_timeout_ms,
                client: client.clone(),
            }),
            costs,
        );

        if cfg.fraud_check_enabled {
            service.with_fraud_check(Arc::new(FraudCheckClient {
                base_url: cfg.fraud_base_url.clone(),
                timeout_ms: cfg.gateway_timeout_ms,
                client,
            }))
        } else {
            service
        }
    }

    pub async fn pay_for_booking(
        &self,
        payment: BookingPayment,
    ) -> Result<BookingResponse, BookingError> {
        if let Some(fraud) = &self.fraud {
            if fraud.is_blacklisted(&payment.card.number).await? {
                tracing::debug!(
                    booking = %payment.booking_reference,
                    "card blacklisted, charge skipped"
                );
                return Ok(BookingResponse::suspected_fraud(payment.booking_reference));
            }
        }

        let receipt = self.payments.charge(payment.amount, &payment.card).await?;

        let status = match receipt.outcome {
            PaymentOutcome::Success => BookingResponseStatus::Success,
            PaymentOutcome::Failed => BookingResponseStatus::Rejected,
        };

        Ok(BookingResponse {
            booking_reference: payment.booking_reference,
            payment_id: Some(receipt.payment_id),
            status,
        })
    }

    pub async fn generate_invoice(&self, booking_reference: &str) -> Result<Invoice, BookingError> {
        let cost_of_flight = self.costs.cost_of_flight(booking_reference).await?;
        let tax = self.taxes.vat_for(cost_of_flight).await;
        Ok(Invoice::priced(cost_of_flight, tax))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::CreditCard;
    use crate::gateways::mock::{
        MockChargeBehavior, MockFraudCheck, MockPaymentGateway, MockTaxLookup,
    };
    use crate::service::flight_costs::FlightCostTable;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn payment() -> BookingPayment {
        BookingPayment {
            booking_reference: "1111".to_string(),
            amount: dec!(20.55),
            card: CreditCard {
                number: "1234-1234-1234-1234".to_string(),
                expiry: NaiveDate::from_ymd_opt(2018, 2, 1).unwrap(),
            },
        }
    }

    fn service(payments: Arc<MockPaymentGateway>) -> BookingService {
        BookingService::new(
            payments,
            Arc::new(MockTaxLookup { tax: dec!(20) }),
            Arc::new(FlightCostTable::new().with_cost("1234", dec!(100))),
        )
    }

    #[tokio::test]
    async fn maps_gateway_success_onto_success_response() {
        let payments = Arc::new(MockPaymentGateway::new("2222", MockChargeBehavior::Approve));

        let response = service(payments.clone())
            .with_fraud_check(Arc::new(MockFraudCheck { blacklisted: false }))
            .pay_for_booking(payment())
            .await
            .unwrap();

        assert_eq!(
            response,
            BookingResponse {
                booking_reference: "1111".to_string(),
                payment_id: Some("2222".to_string()),
                status: BookingResponseStatus::Success,
            }
        );
        assert_eq!(payments.charge_count(), 1);
    }

    #[tokio::test]
    async fn maps_gateway_decline_onto_rejected_with_payment_id() {
        let payments = Arc::new(MockPaymentGateway::new("7777", MockChargeBehavior::Decline));

        let response = service(payments).pay_for_booking(payment()).await.unwrap();

        assert_eq!(response.status, BookingResponseStatus::Rejected);
        assert_eq!(response.payment_id, Some("7777".to_string()));
    }

    #[tokio::test]
    async fn blacklisted_card_short_circuits_before_the_gateway() {
        let payments = Arc::new(MockPaymentGateway::new("2222", MockChargeBehavior::Approve));

        let response = service(payments.clone())
            .with_fraud_check(Arc::new(MockFraudCheck { blacklisted: true }))
            .pay_for_booking(payment())
            .await
            .unwrap();

        assert_eq!(response.status, BookingResponseStatus::SuspectedFraud);
        assert_eq!(response.payment_id, None);
        assert_eq!(payments.charge_count(), 0);
    }

    #[tokio::test]
    async fn charges_without_a_fraud_check_when_none_is_wired() {
        let payments = Arc::new(MockPaymentGateway::new("2222", MockChargeBehavior::Approve));

        let response = service(payments.clone()).pay_for_booking(payment()).await.unwrap();

        assert_eq!(response.status, BookingResponseStatus::Success);
        assert_eq!(payments.charge_count(), 1);
    }

    #[tokio::test]
    async fn gateway_outage_propagates_instead_of_fabricating_a_response() {
        let payments = Arc::new(MockPaymentGateway::new("2222", MockChargeBehavior::Unavailable));

        let err = service(payments).pay_for_booking(payment()).await.unwrap_err();

        assert!(matches!(err, BookingError::Downstream(_)));
    }

    #[tokio::test]
    async fn invoice_combines_cost_and_tax() {
        let payments = Arc::new(MockPaymentGateway::new("2222", MockChargeBehavior::Approve));

        let invoice = service(payments).generate_invoice("1234").await.unwrap();

        assert_eq!(invoice, Invoice::priced(dec!(100), dec!(20)));
        assert_eq!(invoice.total, dec!(120));
    }

    #[tokio::test]
    async fn invoice_for_unknown_booking_fails() {
        let payments = Arc::new(MockPaymentGateway::new("2222", MockChargeBehavior::Approve));

        let err = service(payments).generate_invoice("no-such-ref").await.unwrap_err();

        assert!(matches!(err, BookingError::UnknownFlight(_)));
    }

    #[tokio::test]
    async fn zero_tax_flows_through_to_the_total() {
        let payments = Arc::new(MockPaymentGateway::new("2222", MockChargeBehavior::Approve));
        let service = BookingService::new(
            payments,
            Arc::new(MockTaxLookup { tax: Decimal::ZERO }),
            Arc::new(FlightCostTable::new().with_cost("1234", dec!(100))),
        );

        let invoice = service.generate_invoice("1234").await.unwrap();

        assert_eq!(invoice.tax, Decimal::ZERO);
        assert_eq!(invoice.total, invoice.cost_of_flight);
    }
}
