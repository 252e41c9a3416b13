//! Plugs the Razorpay REST client into the engine as its [`PaymentGateway`].
use log::*;
use razorpay_tools::{NewRazorpayOrder, RazorpayApi, RazorpayApiError, RazorpayOrder};
use socify_engine::traits::{GatewayOrder, GatewayOrderRequest, PaymentGateway, PaymentGatewayError};

#[derive(Clone)]
pub struct RazorpayGateway {
    api: RazorpayApi,
}

impl RazorpayGateway {
    pub fn new(api: RazorpayApi) -> Self {
        Self { api }
    }
}

impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: GatewayOrderRequest) -> Result<GatewayOrder, PaymentGatewayError> {
        let order = NewRazorpayOrder::new(request.amount, request.currency, request.receipt);
        let result = self.api.create_order(order).await.map_err(|e| {
            debug!("💳️ Razorpay order creation failed. {e}");
            gateway_error(e)
        })?;
        Ok(gateway_order(result))
    }
}

pub fn gateway_error(e: RazorpayApiError) -> PaymentGatewayError {
    match e {
        RazorpayApiError::Initialization(_) | RazorpayApiError::RestResponseError(_) => {
            PaymentGatewayError::Unavailable(e.to_string())
        },
        RazorpayApiError::JsonError(_) | RazorpayApiError::QueryError { .. } | RazorpayApiError::InvalidAmount(_) => {
            PaymentGatewayError::Rejected(e.to_string())
        },
    }
}

pub fn gateway_order(order: RazorpayOrder) -> GatewayOrder {
    GatewayOrder {
        id: order.id,
        entity: order.entity,
        amount: order.amount,
        amount_paid: order.amount_paid,
        amount_due: order.amount_due,
        currency: order.currency,
        receipt: order.receipt,
        status: order.status,
        attempts: order.attempts,
        created_at: order.created_at,
    }
}
