use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sqlx::Type;

use crate::{op, Paise, PAISE_PER_RUPEE};

//--------------------------------------        Rupees        ---------------------------------------------------------
/// A whole number of rupees. Product prices and order amounts are held, stored and returned in this major unit; only
/// the amount sent to the payment gateway is converted to [`Paise`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Type, Ord, PartialOrd, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct Rupees(i64);

op!(Rupees => Add::add, Sub::sub);

impl From<i64> for Rupees {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for Rupees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-₹{}", self.0.unsigned_abs())
        } else {
            write!(f, "₹{}", self.0)
        }
    }
}

impl Rupees {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Multiplies the amount by `rhs`, returning `None` on overflow.
    pub fn checked_mul(self, rhs: i64) -> Option<Self> {
        self.0.checked_mul(rhs).map(Self)
    }

    /// The same amount in paise, or `None` if it does not fit.
    pub fn to_paise(self) -> Option<Paise> {
        self.0.checked_mul(PAISE_PER_RUPEE).map(Paise::from)
    }
}
