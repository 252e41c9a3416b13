use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
    Mutex,
};

use chrono::Utc;

use crate::{
    db_types::Paise,
    traits::{GatewayOrder, GatewayOrderRequest, PaymentGateway, PaymentGatewayError},
};

/// An in-memory payment gateway. It hands out sequential gateway order ids (`order_test_1`, `order_test_2`, ...) and
/// remembers every request it was sent. It can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct FakeGateway {
    next_id: Arc<AtomicU64>,
    offline: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<GatewayOrderRequest>>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<GatewayOrderRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl PaymentGateway for FakeGateway {
    async fn create_order(&self, request: GatewayOrderRequest) -> Result<GatewayOrder, PaymentGatewayError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(PaymentGatewayError::Unavailable("The fake gateway is offline".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        Ok(GatewayOrder {
            id: format!("order_test_{id}"),
            entity: "order".into(),
            amount: request.amount,
            amount_paid: Paise::default(),
            amount_due: request.amount,
            currency: request.currency,
            receipt: Some(request.receipt),
            status: "created".into(),
            attempts: 0,
            created_at: Utc::now().timestamp(),
        })
    }
}
