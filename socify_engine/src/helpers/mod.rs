pub mod passwords;
pub mod payment_signature;
pub mod validation;

pub use passwords::{hash_password, verify_password, PasswordError};
pub use payment_signature::{calculate_signature, verify_signature, PaymentSignatureError};
pub use validation::{is_valid_email, normalize_email, FieldError, ValidationErrors};
