mod paise;
mod rupees;

pub mod helpers;
pub mod op;
mod secret;

pub use paise::{Paise, INR_CURRENCY_CODE, PAISE_PER_RUPEE};
pub use rupees::Rupees;
pub use secret::Secret;
