use serde::{Deserialize, Serialize};

/// Point-in-time view of an order, as needed to start a payment session.
///
/// The amount is held in the smallest currency unit (`1299` is 12.99 GBP) and
/// is never rescaled. None of the fields are validated here: a non-negative
/// amount, a real ISO 4217 code and absolute URLs are the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderSnapshot {
    order_number: String,
    amount_minor: i64,
    currency: String,
    customer_email: String,
    success_url: String,
    cancel_url: String,
}

impl OrderSnapshot {
    pub fn new(
        order_number: impl Into<String>,
        amount_minor: i64,
        currency: impl Into<String>,
        customer_email: impl Into<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            amount_minor,
            currency: currency.into(),
            customer_email: customer_email.into(),
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }

    /// Order identifier, stable across retries.
    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Where the customer lands after completing payment.
    pub fn success_url(&self) -> &str {
        &self.success_url
    }

    /// Where the customer lands after abandoning payment.
    pub fn cancel_url(&self) -> &str {
        &self.cancel_url
    }
}
