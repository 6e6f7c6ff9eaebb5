use crate::domain::ports::OrderPayments;
use crate::domain::state::PaymentState;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Payment status held for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRecord {
    /// Most recently reported state.
    pub state: PaymentState,
    /// Last provider reference seen for the order, if any.
    pub provider_ref: Option<String>,
    /// Every state reported, oldest first.
    pub history: Vec<PaymentState>,
}

/// A thread-safe in-memory order-payments service.
///
/// Uses `Arc<RwLock<HashMap<String, PaymentRecord>>>` so clones share state.
/// Orders are created on their first `set_state`. Last write wins: repeated
/// and regressing states are accepted and appended to the record's history.
#[derive(Default, Clone)]
pub struct InMemoryOrderPayments {
    records: Arc<RwLock<HashMap<String, PaymentRecord>>>,
}

impl InMemoryOrderPayments {
    /// Creates a new, empty in-memory order-payments service.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn state(&self, order_number: &str) -> Option<PaymentState> {
        let records = self.records.read().await;
        records.get(order_number).map(|record| record.state)
    }

    pub async fn record(&self, order_number: &str) -> Option<PaymentRecord> {
        let records = self.records.read().await;
        records.get(order_number).cloned()
    }

    /// All records, sorted by order number.
    pub async fn records(&self) -> Vec<(String, PaymentRecord)> {
        let records = self.records.read().await;
        let mut all: Vec<_> = records
            .iter()
            .map(|(order, record)| (order.clone(), record.clone()))
            .collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }
}

#[async_trait]
impl OrderPayments for InMemoryOrderPayments {
    async fn set_state(
        &self,
        order_number: &str,
        state: PaymentState,
        provider_ref: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let mut records = self.records.write().await;
        // Checked under the lock so a cancelled call never mutates.
        if cancel.is_cancelled() {
            return Err(PaymentError::Cancelled);
        }

        let record = records
            .entry(order_number.to_string())
            .or_insert_with(|| PaymentRecord {
                state,
                provider_ref: None,
                history: Vec::new(),
            });
        record.state = state;
        record.history.push(state);
        if let Some(provider_ref) = provider_ref {
            record.provider_ref = Some(provider_ref.to_string());
        }

        tracing::debug!(order_number, %state, "payment state recorded");
        Ok(())
    }
}
