use crate::domain::order::OrderSnapshot;
use crate::domain::ports::{OrderPaymentsHandle, PaymentGatewayBox, WebhookRequest};
use crate::domain::session::CreateSessionResult;
use crate::domain::state::PaymentState;
use crate::domain::webhook::WebhookResult;
use crate::error::Result;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Entry point the host calls for checkout and webhook traffic.
///
/// `CheckoutService` owns one gateway and a handle to the host's
/// order-payments service. The two never reference each other through it;
/// it only sequences the calls.
pub struct CheckoutService {
    gateway: PaymentGatewayBox,
    payments: OrderPaymentsHandle,
}

impl CheckoutService {
    /// Creates a new `CheckoutService`.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The provider adapter sessions are opened with.
    /// * `payments` - The host service that records payment states.
    pub fn new(gateway: PaymentGatewayBox, payments: OrderPaymentsHandle) -> Self {
        Self { gateway, payments }
    }

    /// Opens (or reuses) a payment session and marks the order `Pending`.
    ///
    /// The state is only written once the gateway has answered, so a failed or
    /// cancelled session request leaves the order untouched.
    #[instrument(skip(self, order, cancel), fields(order_number = order.order_number()))]
    pub async fn start_checkout(
        &self,
        order: &OrderSnapshot,
        cancel: &CancellationToken,
    ) -> Result<CreateSessionResult> {
        let session = self.gateway.create_or_reuse_session(order, cancel).await?;

        self.payments
            .set_state(
                order.order_number(),
                PaymentState::Pending,
                Some(session.provider_ref()),
                cancel,
            )
            .await?;

        info!(provider_ref = session.provider_ref(), "checkout started");
        Ok(session)
    }

    /// Hands a webhook delivery to the gateway.
    #[instrument(skip_all, fields(method = %request.method(), uri = %request.uri()))]
    pub async fn receive_webhook(
        &self,
        request: WebhookRequest,
        cancel: &CancellationToken,
    ) -> Result<WebhookResult> {
        let result = self.gateway.handle_webhook(request, cancel).await?;

        if result.is_handled() {
            info!(order_number = ?result.order_number(), "webhook handled");
        } else {
            debug!(order_number = ?result.order_number(), "webhook acknowledged without action");
        }
        Ok(result)
    }

    /// Starts checkout for each order in turn, keyed by order number.
    ///
    /// Unreadable rows and failed checkouts are logged and skipped. Stops at
    /// the first row seen after `cancel` fires.
    pub async fn start_checkouts<I>(
        &self,
        orders: I,
        cancel: &CancellationToken,
    ) -> HashMap<String, CreateSessionResult>
    where
        I: IntoIterator<Item = Result<OrderSnapshot>>,
    {
        let mut sessions = HashMap::new();
        for order_result in orders {
            if cancel.is_cancelled() {
                warn!("cancelled, skipping remaining orders");
                break;
            }
            match order_result {
                Ok(order) => match self.start_checkout(&order, cancel).await {
                    Ok(session) => {
                        sessions.insert(order.order_number().to_string(), session);
                    }
                    Err(e) => {
                        warn!(
                            order_number = order.order_number(),
                            error = %e,
                            "error starting checkout"
                        );
                    }
                },
                Err(e) => warn!(error = %e, "error reading order"),
            }
        }
        sessions
    }

    /// Hands each delivery to the gateway in turn and returns how many were
    /// handled.
    ///
    /// Failures are logged and skipped. Stops at the first delivery seen after
    /// `cancel` fires.
    pub async fn receive_webhooks<I>(&self, requests: I, cancel: &CancellationToken) -> usize
    where
        I: IntoIterator<Item = Result<WebhookRequest>>,
    {
        let mut handled = 0;
        for request_result in requests {
            if cancel.is_cancelled() {
                warn!("cancelled, skipping remaining webhooks");
                break;
            }
            match request_result {
                Ok(request) => match self.receive_webhook(request, cancel).await {
                    Ok(result) if result.is_handled() => handled += 1,
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "error handling webhook"),
                },
                Err(e) => warn!(error = %e, "error reading webhook"),
            }
        }
        handled
    }
}
