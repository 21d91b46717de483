/// Returns `Ok(())` when `$assert` holds, otherwise logs the failure location
/// (and the optional formatted context) and returns `Err($err)`.
///
/// `$env` must be a `&Env`.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if $assert {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                ::soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if $assert {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                ::soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                ::soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

#[macro_export]
macro_rules! math_error {
    ($env:expr) => {{
        || {
            ::soroban_sdk::log!($env, "Math error thrown at line {}", line!());
            $crate::error::ErrorCode::ArithmeticOverflow
        }
    }};
}

#[macro_export]
macro_rules! safe_increment {
    ($env:expr, $struct:expr, $value:expr) => {{
        $struct = $struct.checked_add($value).ok_or_else($crate::math_error!($env))?
    }};
}

#[macro_export]
macro_rules! safe_decrement {
    ($env:expr, $struct:expr, $value:expr) => {{
        $struct = $struct.checked_sub($value).ok_or_else($crate::math_error!($env))?
    }};
}
