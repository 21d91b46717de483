use soroban_sdk::Env;
use vault::{
    error::{ErrorCode, VaultResult},
    math::{helpers::get_proportion_i128, safe_math::SafeMath},
    validate,
};

use crate::{math::vesting::vested_rewards, storage::StakingPool};

/// Base asset backing all outstanding shares at `now`:
/// `principal_baseline + vested_rewards - period_withdrawals`.
pub fn pool_value(env: &Env, pool: &StakingPool, now: u64) -> VaultResult<i128> {
    let vested = vested_rewards(env, pool.schedule.as_ref(), now)?;

    let value = pool.principal_baseline
        .safe_add(vested, env)?
        .safe_sub(pool.period_withdrawals, env)?;

    validate!(
        env,
        value >= 0,
        ErrorCode::ArithmeticOverflow,
        "Invariant violated: withdrawals exceed pool principal plus vested rewards, pool value {}",
        value
    )?;

    Ok(value)
}

/// Shares received for `base_amount`, rounded down. 1:1 while no shares exist.
pub fn to_staked_token(
    env: &Env,
    pool: &StakingPool,
    base_amount: i128,
    now: u64
) -> VaultResult<i128> {
    if pool.total_shares == 0 {
        return Ok(base_amount);
    }

    let value = pool_value(env, pool, now)?;
    get_proportion_i128(env, base_amount, pool.total_shares, value)
}

/// Base asset redeemable for `share_amount`, rounded down. 1:1 while no shares exist.
pub fn to_base_token(
    env: &Env,
    pool: &StakingPool,
    share_amount: i128,
    now: u64
) -> VaultResult<i128> {
    if pool.total_shares == 0 {
        return Ok(share_amount);
    }

    let value = pool_value(env, pool, now)?;
    get_proportion_i128(env, share_amount, value, pool.total_shares)
}
