use soroban_sdk::{log, Env};
use vault::{
    error::{ErrorCode, VaultResult},
    validate,
};

use crate::{
    math::{
        exchange_rate::pool_value,
        vesting::{is_vesting, total_rewards, validate_schedule},
    },
    storage::{RewardSchedule, StakingPool},
};

/// Installs a new reward schedule starting at `now` and returns the amount of
/// base asset the funder owes. The value vested under the previous schedule is
/// folded into the principal baseline and the period's withdrawals are reset.
pub fn fund_staking_rewards(
    env: &Env,
    pool: &mut StakingPool,
    total_epochs: u32,
    epoch_length: u64,
    rewards_per_epoch: i128,
    now: u64
) -> VaultResult<i128> {
    validate_schedule(env, total_epochs, epoch_length, rewards_per_epoch)?;

    validate!(
        env,
        !is_vesting(pool.schedule.as_ref(), now),
        ErrorCode::RewardsStillVesting,
        "Rewards: Fund: current schedule is still vesting"
    )?;

    let schedule = RewardSchedule {
        start_time: now,
        epoch_length,
        total_epochs,
        rewards_per_epoch,
    };
    let rewards = total_rewards(env, &schedule)?;
    let settled_value = pool_value(env, pool, now)?;

    log!(
        env,
        "Rewards: Fund: settling pool value {} before new schedule of {}",
        settled_value,
        rewards
    );

    pool.principal_baseline = settled_value;
    pool.period_withdrawals = 0;
    pool.schedule = Some(schedule);

    Ok(rewards)
}
