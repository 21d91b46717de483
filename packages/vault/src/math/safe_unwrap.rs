use soroban_sdk::{log, panic_with_error, Env};

use crate::error::ErrorCode;

/// Aborts the invocation with the contained error code. Used where a host
/// interface fixes the signature and a `Result` cannot be returned.
pub trait SafeUnwrap {
    type Item;

    fn safe_unwrap(self, env: &Env) -> Self::Item;
}

impl<T> SafeUnwrap for Result<T, ErrorCode> {
    type Item = T;

    #[track_caller]
    #[inline(always)]
    fn safe_unwrap(self, env: &Env) -> T {
        match self {
            Ok(v) => v,
            Err(error_code) => {
                log!(env, "Unwrap error {} thrown at line {}", error_code as u32, line!());
                panic_with_error!(env, error_code);
            }
        }
    }
}
