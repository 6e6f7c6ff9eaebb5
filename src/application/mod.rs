//! Application layer wiring gateways to the host's order-payments service.
//!
//! `CheckoutService` composes one gateway with one order-payments
//! implementation; `GatewayRegistry` selects gateways by provider name at
//! composition time.

pub mod checkout;
pub mod registry;
