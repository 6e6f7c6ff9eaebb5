use serde::{Deserialize, Serialize};

/// Outcome of processing one inbound webhook delivery.
///
/// A payload the gateway does not recognize is reported as `handled = false`,
/// not as an error, so the endpoint can still acknowledge receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebhookResult {
    handled: bool,
    order_number: Option<String>,
}

impl WebhookResult {
    pub fn new(handled: bool, order_number: Option<String>) -> Self {
        Self {
            handled,
            order_number,
        }
    }

    /// A recognized and processed delivery for `order_number`.
    pub fn handled(order_number: impl Into<String>) -> Self {
        Self::new(true, Some(order_number.into()))
    }

    /// A delivery that was acknowledged but not acted on.
    pub fn ignored() -> Self {
        Self::new(false, None)
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn order_number(&self) -> Option<&str> {
        self.order_number.as_deref()
    }
}
