pub mod config;
pub mod domain {
    pub mod booking;
}
pub mod gateways;
pub mod service {
    pub mod booking_service;
    pub mod flight_costs;
}
