use super::order::OrderSnapshot;
use super::session::CreateSessionResult;
use super::state::PaymentState;
use super::webhook::WebhookResult;
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Inbound webhook delivery as handed over by the host HTTP stack.
pub type WebhookRequest = http::Request<Bytes>;

/// What a payment-provider adapter exposes to the host application.
///
/// One implementation per provider. Every call takes a cancellation token;
/// implementations should stop promptly once it fires.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Starts a payment session for `order`, or returns the one the provider
    /// already holds for it.
    async fn create_or_reuse_session(
        &self,
        order: &OrderSnapshot,
        cancel: &CancellationToken,
    ) -> Result<CreateSessionResult>;

    /// Processes one webhook delivery.
    ///
    /// Unrecognized payloads should come back as [`WebhookResult::ignored`]
    /// rather than an error. Signature checks, parsing and replay protection
    /// are all up to the implementation.
    async fn handle_webhook(
        &self,
        request: WebhookRequest,
        cancel: &CancellationToken,
    ) -> Result<WebhookResult>;
}

/// What the host application exposes so gateways can report payment changes.
///
/// Transition legality, ordering and deduplication are the implementation's
/// concern: callers may repeat a state or send an older one.
#[async_trait]
pub trait OrderPayments: Send + Sync {
    async fn set_state(
        &self,
        order_number: &str,
        state: PaymentState,
        provider_ref: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<()>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type OrderPaymentsHandle = Arc<dyn OrderPayments>;
pub type PaymentGatewayFactory = Box<dyn Fn() -> PaymentGatewayBox + Send + Sync>;
