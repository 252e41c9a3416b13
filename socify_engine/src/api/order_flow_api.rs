use std::fmt::Debug;

use log::*;
use socify_common::Secret;

use crate::{
    api::{
        errors::OrderFlowError,
        order_objects::{CreateOrderRequest, OrderCreated, OrderDetails, PaymentVerified, VerifyPaymentRequest},
    },
    db_types::{NewOrder, NewTransaction, OrderStatusType},
    helpers::{payment_signature::verify_signature, ValidationErrors},
    traits::{
        GatewayOrderRequest,
        OrderManagement,
        PaymentCompletion,
        PaymentGateway,
        ProductManagement,
        SocialGraphManagement,
    },
};

/// `OrderFlowApi` is the primary API for handling order intake and payment verification.
///
/// Order intake saves a `pending` order and asks the payment gateway to open a matching remote order. Payment
/// verification checks the gateway's callback signature and then, in one atomic step, completes the order and records
/// the transaction.
pub struct OrderFlowApi<B, G> {
    db: B,
    gateway: G,
    key_secret: Secret<String>,
}

impl<B, G> Debug for OrderFlowApi<B, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B, G> OrderFlowApi<B, G> {
    /// `key_secret` is the gateway API key secret. Payment callbacks are signed with it.
    pub fn new(db: B, gateway: G, key_secret: Secret<String>) -> Self {
        Self { db, gateway, key_secret }
    }
}

impl<B, G> OrderFlowApi<B, G>
where
    B: OrderManagement + ProductManagement + SocialGraphManagement,
    G: PaymentGateway,
{
    /// Creates a new pending order for `quantity` units of a product, and a matching order on the payment gateway.
    ///
    /// The order amount is fixed, in rupees, from the product's price at the time of the call. The gateway is asked for
    /// the same amount in paise. If the gateway call fails, the local order is marked as `failed` and a
    /// [`OrderFlowError::GatewayError`] is returned.
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderCreated, OrderFlowError> {
        let (product_id, quantity, user_id) = request.validate()?;
        let product = self.db.fetch_product(product_id).await?.ok_or(OrderFlowError::ProductNotFound(product_id))?;
        if self.db.fetch_user(user_id).await?.is_none() {
            return Err(OrderFlowError::UserNotFound(user_id));
        }
        let too_large = || ValidationErrors::single("quantity", "Quantity is too large");
        let amount = product.price.checked_mul(quantity).ok_or_else(too_large)?;
        let gateway_amount = amount.to_paise().ok_or_else(too_large)?;
        let order = self.db.insert_order(NewOrder::new(product_id, user_id, quantity, amount)).await?;
        debug!("🔄️📦️ Order #{} created for {quantity} x {} ({amount})", order.id, product.name);
        let gateway_request = GatewayOrderRequest {
            amount: gateway_amount,
            currency: order.currency.clone(),
            receipt: order.receipt(),
        };
        let gateway_order = match self.gateway.create_order(gateway_request).await {
            Ok(o) => o,
            Err(e) => {
                warn!("🔄️📦️ Gateway order for order #{} could not be created. {e}", order.id);
                if let Err(e2) = self.db.mark_order_failed(order.id).await {
                    error!("🔄️📦️ Order #{} could not be marked as failed. It is still pending. {e2}", order.id);
                }
                return Err(e.into());
            },
        };
        let order = self.db.set_gateway_order_id(order.id, &gateway_order.id).await?;
        info!("🔄️📦️ Order #{} is awaiting payment on gateway order {}", order.id, gateway_order.id);
        Ok(OrderCreated { gateway_order, order })
    }

    /// Verifies a payment callback and, if it is genuine, completes the order.
    ///
    /// * An invalid signature is rejected before storage is touched. The order stays `pending`.
    /// * If the order is already linked to a different gateway order, the callback is rejected.
    /// * If the order is already completed by this same payment, the original transaction is returned and nothing is
    ///   written. Any other non-pending order gives [`OrderFlowError::OrderNotPending`].
    pub async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<PaymentVerified, OrderFlowError> {
        let callback = request.validate()?;
        let order_id = callback.order_id;
        if !verify_signature(
            self.key_secret.reveal(),
            &callback.gateway_order_id,
            &callback.gateway_payment_id,
            &callback.signature,
        ) {
            warn!("🔐️ Invalid signature on payment callback for order #{order_id}");
            return Err(OrderFlowError::InvalidSignature);
        }
        trace!("🔐️ Payment {} carries a valid signature", callback.gateway_payment_id);
        let order = self.db.fetch_order(order_id).await?.ok_or(OrderFlowError::OrderNotFound(order_id))?;
        if let Some(expected) = order.gateway_order_id.as_ref() {
            if *expected != callback.gateway_order_id {
                warn!(
                    "🔄️💰️ Payment callback for order #{order_id} names gateway order {}, but the order belongs to \
                     {expected}",
                    callback.gateway_order_id
                );
                return Err(OrderFlowError::GatewayOrderMismatch {
                    order_id,
                    expected: expected.clone(),
                    received: callback.gateway_order_id,
                });
            }
        }
        let payment_id = callback.gateway_payment_id.clone();
        let new_tx = NewTransaction::new(order_id, callback.gateway_payment_id, callback.gateway_order_id);
        match self.db.complete_order(new_tx).await? {
            PaymentCompletion::Recorded { order, transaction } => {
                info!("🔄️💰️ Order #{order_id} has been paid by {payment_id}");
                Ok(PaymentVerified { order, transaction, replayed: false })
            },
            PaymentCompletion::NotPending { order, transaction: Some(transaction) }
                if order.status == OrderStatusType::Completed && transaction.gateway_payment_id == payment_id =>
            {
                debug!("🔄️💰️ Payment {payment_id} for order #{order_id} was already recorded");
                Ok(PaymentVerified { order, transaction, replayed: true })
            },
            PaymentCompletion::NotPending { order, .. } => {
                warn!("🔄️💰️ Payment {payment_id} arrived for order #{order_id}, which is {}", order.status);
                Err(OrderFlowError::OrderNotPending(order_id))
            },
        }
    }

    /// Fetches an order, along with the transaction that paid for it, if any.
    pub async fn fetch_order_details(&self, order_id: i64) -> Result<OrderDetails, OrderFlowError> {
        let order = self.db.fetch_order(order_id).await?.ok_or(OrderFlowError::OrderNotFound(order_id))?;
        let transaction = self.db.fetch_transaction_for_order(order_id).await?;
        Ok(OrderDetails { order, transaction })
    }
}
