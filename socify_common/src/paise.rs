use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sqlx::Type;

use crate::op;

pub const INR_CURRENCY_CODE: &str = "INR";

/// The number of paise in one rupee. The gateway expects all amounts in this minor unit.
pub const PAISE_PER_RUPEE: i64 = 100;

//--------------------------------------        Paise         ---------------------------------------------------------
/// An amount of money in minor currency units (paise). This is the unit the payment gateway charges in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Type, Ord, PartialOrd, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct Paise(i64);

op!(Paise => Add::add, Sub::sub);
op!(assign Paise => AddAssign::add_assign, SubAssign::sub_assign);
op!(neg Paise);

impl From<i64> for Paise {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for Paise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_rupee = PAISE_PER_RUPEE.unsigned_abs();
        write!(f, "{sign}₹{}.{:02}", abs / per_rupee, abs % per_rupee)
    }
}

impl Paise {
    pub fn value(&self) -> i64 {
        self.0
    }
}
