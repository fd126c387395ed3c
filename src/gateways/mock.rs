use crate::domain::booking::CreditCard;
use crate::gateways::{
    ChargeReceipt, DownstreamError, FraudCheck, PaymentGateway, PaymentOutcome, TaxLookup,
};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockFraudCheck {
    pub blacklisted: bool,
}

#[async_trait::async_trait]
impl FraudCheck for MockFraudCheck {
    async fn is_blacklisted(&self, _card_number: &str) -> Result<bool, DownstreamError> {
        Ok(self.blacklisted)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MockChargeBehavior {
    Approve,
    Decline,
    Unavailable,
}

pub struct MockPaymentGateway {
    pub payment_id: String,
    pub behavior: MockChargeBehavior,
    charges: AtomicUsize,
}

impl MockPaymentGateway {
    pub fn new(payment_id: &str, behavior: MockChargeBehavior) -> Self {
        Self {
            payment_id: payment_id.to_string(),
            behavior,
            charges: AtomicUsize::new(0),
        }
    }

    pub fn charge_count(&self) -> usize {
        self.charges.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(
        &self,
        _amount: Decimal,
        _card: &CreditCard,
    ) -> Result<ChargeReceipt, DownstreamError> {
        self.charges.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockChargeBehavior::Approve => Ok(ChargeReceipt {
                payment_id: self.payment_id.clone(),
                outcome: PaymentOutcome::Success,
            }),
            MockChargeBehavior::Decline => Ok(ChargeReceipt {
                payment_id: self.payment_id.clone(),
                outcome: PaymentOutcome::Failed,
            }),
            MockChargeBehavior::Unavailable => Err(DownstreamError::Status {
                service: "payments",
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }),
        }
    }
}

pub struct MockTaxLookup {
    pub tax: Decimal,
}

#[async_trait::async_trait]
impl TaxLookup for MockTaxLookup {
    async fn vat_for(&self, _amount: Decimal) -> Decimal {
        self.tax
    }
}
