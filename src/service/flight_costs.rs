use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no cost of flight on record for booking {0}")]
pub struct UnknownFlight(pub String);

/// Resolves the base cost of the flight behind a booking reference.
#[async_trait::async_trait]
pub trait FlightCostSource: Send + Sync {
    async fn cost_of_flight(&self, booking_reference: &str) -> Result<Decimal, UnknownFlight>;
}

#[derive(Debug, Default)]
pub struct FlightCostTable {
    costs: HashMap<String, Decimal>,
}

impl FlightCostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cost(mut self, booking_reference: &str, cost: Decimal) -> Self {
        self.costs.insert(booking_reference.to_string(), cost);
        self
    }
}

#[async_trait::async_trait]
impl FlightCostSource for FlightCostTable {
    async fn cost_of_flight(&self, booking_reference: &str) -> Result<Decimal, UnknownFlight> {
        self.costs
            .get(booking_reference)
            .copied()
            .ok_or_else(|| UnknownFlight(booking_reference.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn resolves_known_booking_and_rejects_unknown() {
        let table = FlightCostTable::new().with_cost("1234", dec!(100));

        assert_eq!(table.cost_of_flight("1234").await.unwrap(), dec!(100));
        assert_eq!(
            table.cost_of_flight("9999").await.unwrap_err(),
            UnknownFlight("9999".to_string())
        );
    }
}
