use payment_contracts::application::registry::GatewayRegistry;
use payment_contracts::config::GatewayConfig;
use payment_contracts::domain::ports::{PaymentGatewayBox, PaymentGatewayFactory};
use payment_contracts::infrastructure::in_memory::InMemoryOrderPayments;
use payment_contracts::infrastructure::stub_gateway::StubGateway;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

mod common;

fn stub_factory(prefix: &'static str) -> PaymentGatewayFactory {
    Box::new(move || {
        let config = GatewayConfig::default().with_ref_prefix(prefix);
        Box::new(StubGateway::new(config, Arc::new(InMemoryOrderPayments::new())))
            as PaymentGatewayBox
    })
}

#[tokio::test]
async fn test_factory_instantiation() {
    let factory = stub_factory("cs");

    // Each call builds an independent gateway
    let first = factory();
    let second = factory();
    let order = common::sample_order("ORD-001");
    let cancel = CancellationToken::new();

    let a = first.create_or_reuse_session(&order, &cancel).await.unwrap();
    let b = second.create_or_reuse_session(&order, &cancel).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.provider_ref(), "cs_000001");
}

#[tokio::test]
async fn test_factory_in_task() {
    let factory = stub_factory("pp");

    let handle = tokio::spawn(async move {
        let gateway = factory();
        gateway
            .create_or_reuse_session(&common::sample_order("ORD-002"), &CancellationToken::new())
            .await
            .unwrap()
    });

    let session = handle.await.unwrap();
    assert_eq!(session.provider_ref(), "pp_000001");
}

#[tokio::test]
async fn test_registry_from_factories() {
    let mut registry = GatewayRegistry::new();
    for (name, prefix) in [("stripe", "cs"), ("paypal", "pp")] {
        let factory = stub_factory(prefix);
        registry.register(name, factory());
    }

    assert_eq!(registry.providers(), vec!["paypal", "stripe"]);
    let session = registry
        .gateway("paypal")
        .unwrap()
        .create_or_reuse_session(&common::sample_order("ORD-003"), &CancellationToken::new())
        .await
        .unwrap();
    assert!(session.redirect_url().ends_with("/pp_000001"));
}
