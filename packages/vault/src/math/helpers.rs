use soroban_sdk::Env;

use crate::{error::VaultResult, math_error};

use super::{bn::U256, casting::Cast};

/// `floor(value * numerator / denominator)`, computed through a 256-bit
/// intermediate product so only the final quotient has to fit in a `u128`.
/// A quotient that does not fit is an arithmetic overflow.
pub fn get_proportion_u128(
    env: &Env,
    value: u128,
    numerator: u128,
    denominator: u128
) -> VaultResult<u128> {
    if numerator == denominator && denominator != 0 {
        return Ok(value);
    }

    let proportional_value = U256::from(value)
        .checked_mul(U256::from(numerator))
        .ok_or_else(math_error!(env))?
        .checked_div(U256::from(denominator))
        .ok_or_else(math_error!(env))?;

    proportional_value.try_to_u128(env).map_err(|_| math_error!(env)())
}

/// Signed wrapper over [`get_proportion_u128`]. Every argument must be
/// non-negative; a negative input is reported as a casting failure, a result
/// past `i128::MAX` as an arithmetic overflow.
pub fn get_proportion_i128(
    env: &Env,
    value: i128,
    numerator: i128,
    denominator: i128
) -> VaultResult<i128> {
    get_proportion_u128(
        env,
        value.cast::<u128>(env)?,
        numerator.cast::<u128>(env)?,
        denominator.cast::<u128>(env)?
    )?
        .cast::<i128>(env)
        .map_err(|_| math_error!(env)())
}
