//! Provider-agnostic payment contracts.
//!
//! Value types passed across the boundary between a payment-gateway adapter
//! and a host order service, plus the two capability traits in [`ports`].
//! Nothing here performs I/O.

pub mod order;
pub mod ports;
pub mod session;
pub mod state;
pub mod webhook;

pub use order::OrderSnapshot;
pub use ports::{
    OrderPayments, OrderPaymentsHandle, PaymentGateway, PaymentGatewayBox, PaymentGatewayFactory,
    WebhookRequest,
};
pub use session::CreateSessionResult;
pub use state::PaymentState;
pub use webhook::WebhookResult;
