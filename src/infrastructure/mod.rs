//! Reference implementations of the payment contracts.
//!
//! Neither talks to a real provider or a database; they exist so the
//! contracts can be wired, exercised and tested end to end.

pub mod in_memory;
pub mod stub_gateway;
