use serde::{Deserialize, Serialize};

/// Outcome of starting, or reusing, a payment session with a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateSessionResult {
    redirect_url: String,
    provider_ref: String,
}

impl CreateSessionResult {
    pub fn new(redirect_url: impl Into<String>, provider_ref: impl Into<String>) -> Self {
        Self {
            redirect_url: redirect_url.into(),
            provider_ref: provider_ref.into(),
        }
    }

    /// Absolute URL the customer must be sent to.
    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    /// Opaque provider identifier for the session, used to correlate webhooks.
    pub fn provider_ref(&self) -> &str {
        &self.provider_ref
    }
}
