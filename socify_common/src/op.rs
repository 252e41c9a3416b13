/// Forwards operator traits on a single-field money type to the integer it wraps.
///
/// * `op!(Paise => Add::add, Sub::sub)` gives `Paise + Paise -> Paise` and friends.
/// * `op!(assign Paise => SubAssign::sub_assign)` gives the compound-assignment forms.
/// * `op!(neg Paise)` gives unary minus.
#[macro_export]
macro_rules! op {
    ($newtype:ident => $($trait_name:ident :: $method:ident),+ $(,)?) => {
        $(
            impl core::ops::$trait_name for $newtype {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Self(core::ops::$trait_name::$method(self.0, rhs.0))
                }
            }
        )+
    };

    (assign $newtype:ident => $($trait_name:ident :: $method:ident),+ $(,)?) => {
        $(
            impl core::ops::$trait_name for $newtype {
                fn $method(&mut self, rhs: Self) {
                    core::ops::$trait_name::$method(&mut self.0, rhs.0)
                }
            }
        )+
    };

    (neg $newtype:ident) => {
        impl core::ops::Neg for $newtype {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    };
}
