use crate::domain::ports::{PaymentGateway, PaymentGatewayBox};
use crate::error::{PaymentError, Result};
use std::collections::HashMap;

/// Gateways keyed by provider name, chosen at wiring time.
#[derive(Default)]
pub struct GatewayRegistry {
    gateways: HashMap<String, PaymentGatewayBox>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `gateway` under `provider`, replacing any previous entry.
    pub fn register(&mut self, provider: impl Into<String>, gateway: PaymentGatewayBox) {
        let provider = provider.into();
        tracing::info!(%provider, "registering payment gateway");
        self.gateways.insert(provider, gateway);
    }

    pub fn unregister(&mut self, provider: &str) -> Option<PaymentGatewayBox> {
        self.gateways.remove(provider)
    }

    pub fn gateway(&self, provider: &str) -> Result<&dyn PaymentGateway> {
        self.gateways
            .get(provider)
            .map(|gateway| gateway.as_ref())
            .ok_or_else(|| PaymentError::UnknownProvider(provider.to_string()))
    }

    /// Registered provider names, sorted.
    pub fn providers(&self) -> Vec<String> {
        let mut providers: Vec<String> = self.gateways.keys().cloned().collect();
        providers.sort();
        providers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use crate::domain::order::OrderSnapshot;
    use crate::infrastructure::in_memory::InMemoryOrderPayments;
    use crate::infrastructure::stub_gateway::StubGateway;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    fn stub(prefix: &str) -> PaymentGatewayBox {
        let config = GatewayConfig::default().with_ref_prefix(prefix);
        Box::new(StubGateway::new(config, Arc::new(InMemoryOrderPayments::new())))
    }

    #[tokio::test]
    async fn test_dispatch_by_provider() {
        let mut registry = GatewayRegistry::new();
        registry.register("alpha", stub("al"));
        registry.register("beta", stub("be"));

        let order = OrderSnapshot::new("ORD-001", 500, "USD", "a@b.c", "s", "c");
        let cancel = CancellationToken::new();

        let session = registry
            .gateway("beta")
            .unwrap()
            .create_or_reuse_session(&order, &cancel)
            .await
            .unwrap();
        assert_eq!(session.provider_ref(), "be_000001");
        assert_eq!(registry.providers(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_unknown_provider() {
        let mut registry = GatewayRegistry::new();
        registry.register("alpha", stub("al"));
        assert!(registry.unregister("alpha").is_some());

        assert!(matches!(
            registry.gateway("alpha"),
            Err(PaymentError::UnknownProvider(name)) if name == "alpha"
        ));
    }
}
