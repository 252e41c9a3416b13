//! # Payment callback signatures
//!
//! When a customer completes a payment, the gateway hands the client three values: its own order id, the payment id,
//! and a signature. The signature is an HMAC-SHA256 over the message
//!
//! ```text
//!    {gateway_order_id}|{gateway_payment_id}
//! ```
//!
//! keyed with the merchant's API key secret, and encoded as lower-case hexadecimal. Since only the gateway and the
//! merchant know the key secret, a matching signature proves that the payment callback came from the gateway.
//!
//! Both functions here are pure: they never touch storage.
use hmac::{Hmac, Mac};
use log::trace;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 digests are 32 bytes long.
const DIGEST_LENGTH: usize = 32;

#[derive(Debug, Clone, Error)]
#[error("Could not initialise the signature MAC. {0}")]
pub struct PaymentSignatureError(String);

pub fn signature_message(gateway_order_id: &str, gateway_payment_id: &str) -> String {
    format!("{gateway_order_id}|{gateway_payment_id}")
}

fn mac_for(secret: &str, gateway_order_id: &str, gateway_payment_id: &str) -> Result<HmacSha256, PaymentSignatureError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| PaymentSignatureError(e.to_string()))?;
    mac.update(signature_message(gateway_order_id, gateway_payment_id).as_bytes());
    Ok(mac)
}

/// Calculates the hex-encoded signature the gateway would produce for the given order and payment ids.
pub fn calculate_signature(
    secret: &str,
    gateway_order_id: &str,
    gateway_payment_id: &str,
) -> Result<String, PaymentSignatureError> {
    let mac = mac_for(secret, gateway_order_id, gateway_payment_id)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks `signature` against the expected digest for the given ids. The comparison is constant-time.
///
/// The signature must be exactly the lower-case hex digest. Upper-case digits, surrounding whitespace or the wrong
/// length are a mismatch.
pub fn verify_signature(secret: &str, gateway_order_id: &str, gateway_payment_id: &str, signature: &str) -> bool {
    if !is_lower_hex_digest(signature) {
        trace!("🔐️ Signature for {gateway_order_id} is not a lower-case hex digest");
        return false;
    }
    let Ok(provided) = hex::decode(signature) else {
        return false;
    };
    match mac_for(secret, gateway_order_id, gateway_payment_id) {
        Ok(mac) => mac.verify_slice(&provided).is_ok(),
        Err(e) => {
            trace!("🔐️ {e}");
            false
        },
    }
}

fn is_lower_hex_digest(signature: &str) -> bool {
    signature.len() == 2 * DIGEST_LENGTH && signature.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
