use soroban_sdk::Env;

use crate::{error::VaultResult, math_error};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> VaultResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> VaultResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> VaultResult<Self>;
}

macro_rules! checked_op {
    ($name:ident, $checked:ident, $t:ty) => {
        #[track_caller]
        #[inline(always)]
        fn $name(self, rhs: $t, env: &Env) -> VaultResult<$t> {
            self.$checked(rhs).ok_or_else(math_error!(env))
        }
    };
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            checked_op!(safe_add, checked_add, $t);
            checked_op!(safe_sub, checked_sub, $t);
            checked_op!(safe_mul, checked_mul, $t);
        }
    };
}

checked_impl!(i128);
