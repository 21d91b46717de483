use soroban_sdk::Env;
use vault::{
    error::{ErrorCode, VaultResult},
    safe_decrement,
    safe_increment,
    validate,
};

use crate::{
    math::exchange_rate::{to_base_token, to_staked_token},
    storage::StakingPool,
};

/// Settles a deposit of `amount` base asset against the pool and returns the
/// number of shares to mint. The caller moves the tokens.
pub fn add_stake(env: &Env, pool: &mut StakingPool, amount: i128, now: u64) -> VaultResult<i128> {
    validate!(
        env,
        amount > 0,
        ErrorCode::InvalidAmount,
        "Stake: Add stake: amount must be positive: {}",
        amount
    )?;

    let n_shares = to_staked_token(env, pool, amount, now)?;

    validate!(
        env,
        n_shares > 0,
        ErrorCode::StakeTooSmall,
        "Stake: Add stake: {} would mint no shares",
        amount
    )?;

    safe_increment!(env, pool.total_shares, n_shares);
    safe_increment!(env, pool.principal_baseline, amount);

    Ok(n_shares)
}

/// Settles a withdrawal of `n_shares` held by a staker with `shares_owned` and
/// returns the base asset owed. The payout is booked against the current
/// period so the principal baseline stays untouched.
pub fn remove_stake(
    env: &Env,
    pool: &mut StakingPool,
    n_shares: i128,
    shares_owned: i128,
    now: u64
) -> VaultResult<i128> {
    validate!(
        env,
        n_shares > 0,
        ErrorCode::InvalidAmount,
        "Stake: Remove stake: amount must be positive: {}",
        n_shares
    )?;

    validate!(
        env,
        n_shares <= shares_owned,
        ErrorCode::InsufficientStake,
        "Cannot remove stake for more tokens than owned: {} > {}",
        n_shares,
        shares_owned
    )?;

    let amount = to_base_token(env, pool, n_shares, now)?;

    validate!(
        env,
        amount > 0,
        ErrorCode::StakeTooSmall,
        "Stake: Remove stake: {} shares are worth nothing",
        n_shares
    )?;

    safe_decrement!(env, pool.total_shares, n_shares);
    safe_increment!(env, pool.period_withdrawals, amount);

    Ok(amount)
}

/// Retires shares without paying anything out; the remaining holders absorb
/// their value.
pub fn retire_shares(env: &Env, pool: &mut StakingPool, n_shares: i128) -> VaultResult {
    validate!(
        env,
        n_shares <= pool.total_shares,
        ErrorCode::InsufficientStake,
        "Stake: Retire shares: {} exceeds supply {}",
        n_shares,
        pool.total_shares
    )?;

    safe_decrement!(env, pool.total_shares, n_shares);

    Ok(())
}
