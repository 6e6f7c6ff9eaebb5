use crate::config::GatewayConfig;
use crate::domain::order::OrderSnapshot;
use crate::domain::ports::{OrderPaymentsHandle, PaymentGateway, WebhookRequest};
use crate::domain::session::CreateSessionResult;
use crate::domain::state::PaymentState;
use crate::domain::webhook::WebhookResult;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Webhook body understood by [`StubGateway`].
#[derive(Debug, Deserialize)]
struct StubEvent {
    #[serde(rename = "type")]
    event_type: String,
    order_number: Option<String>,
    provider_ref: Option<String>,
}

fn state_for_event(event_type: &str) -> Option<PaymentState> {
    let state = match event_type {
        "payment.pending" => PaymentState::Pending,
        "payment.processing" => PaymentState::Processing,
        "payment.succeeded" => PaymentState::Succeeded,
        "payment.failed" => PaymentState::Failed,
        "payment.refunded" => PaymentState::Refunded,
        "payment.partially_refunded" => PaymentState::PartiallyRefunded,
        _ => return None,
    };
    Some(state)
}

/// A deterministic gateway that never leaves the process.
///
/// Sessions are minted from a counter and cached per order number, so a second
/// checkout for the same order returns the first session. Webhooks are plain
/// JSON bodies (`{"type": "payment.succeeded", "order_number": "..."}`) and
/// recognized events are forwarded to the injected order-payments service.
pub struct StubGateway {
    config: GatewayConfig,
    payments: OrderPaymentsHandle,
    sessions: RwLock<HashMap<String, CreateSessionResult>>,
    next_ref: AtomicU64,
}

impl StubGateway {
    pub fn new(config: GatewayConfig, payments: OrderPaymentsHandle) -> Self {
        Self {
            config,
            payments,
            sessions: RwLock::new(HashMap::new()),
            next_ref: AtomicU64::new(1),
        }
    }

    /// Session previously created for `order_number`, if any.
    pub async fn session(&self, order_number: &str) -> Option<CreateSessionResult> {
        let sessions = self.sessions.read().await;
        sessions.get(order_number).cloned()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_or_reuse_session(
        &self,
        order: &OrderSnapshot,
        cancel: &CancellationToken,
    ) -> Result<CreateSessionResult> {
        let mut sessions = self.sessions.write().await;
        if cancel.is_cancelled() {
            return Err(PaymentError::Cancelled);
        }

        if let Some(existing) = sessions.get(order.order_number()) {
            debug!(order_number = order.order_number(), "reusing payment session");
            return Ok(existing.clone());
        }

        let n = self.next_ref.fetch_add(1, Ordering::Relaxed);
        let provider_ref = format!("{}_{:06}", self.config.ref_prefix, n);
        let redirect_url = self.config.redirect_url(&provider_ref);
        let session = CreateSessionResult::new(redirect_url, provider_ref);
        sessions.insert(order.order_number().to_string(), session.clone());

        debug!(
            order_number = order.order_number(),
            provider_ref = session.provider_ref(),
            "created payment session"
        );
        Ok(session)
    }

    async fn handle_webhook(
        &self,
        request: WebhookRequest,
        cancel: &CancellationToken,
    ) -> Result<WebhookResult> {
        if cancel.is_cancelled() {
            return Err(PaymentError::Cancelled);
        }

        if *request.method() != http::Method::POST {
            debug!(method = %request.method(), "ignoring non-POST webhook");
            return Ok(WebhookResult::ignored());
        }

        let event: StubEvent = match serde_json::from_slice(request.body()) {
            Ok(event) => event,
            Err(e) => {
                debug!(error = %e, "ignoring unparseable webhook body");
                return Ok(WebhookResult::ignored());
            }
        };

        let Some(order_number) = event.order_number else {
            debug!(event_type = %event.event_type, "ignoring webhook without order number");
            return Ok(WebhookResult::ignored());
        };

        let Some(state) = state_for_event(&event.event_type) else {
            debug!(
                event_type = %event.event_type,
                %order_number,
                "ignoring unknown webhook event"
            );
            return Ok(WebhookResult::new(false, Some(order_number)));
        };

        let provider_ref = match event.provider_ref {
            Some(provider_ref) => Some(provider_ref),
            None => self
                .session(&order_number)
                .await
                .map(|session| session.provider_ref().to_string()),
        };

        self.payments
            .set_state(&order_number, state, provider_ref.as_deref(), cancel)
            .await?;

        Ok(WebhookResult::handled(order_number))
    }
}
