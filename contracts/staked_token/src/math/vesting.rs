use soroban_sdk::Env;
use vault::{
    constants::{MAX_EPOCH_LENGTH, MAX_REWARDS_DURATION, MIN_EPOCH_LENGTH},
    error::{ErrorCode, VaultResult},
    math::safe_math::SafeMath,
    validate,
};

use crate::storage::RewardSchedule;

pub fn validate_schedule(
    env: &Env,
    total_epochs: u32,
    epoch_length: u64,
    rewards_per_epoch: i128
) -> VaultResult {
    validate!(
        env,
        epoch_length >= MIN_EPOCH_LENGTH,
        ErrorCode::InvalidEpochLength,
        "Sanity check: minimum epoch length is 1 second"
    )?;

    validate!(
        env,
        epoch_length <= MAX_EPOCH_LENGTH,
        ErrorCode::InvalidEpochLength,
        "Sanity check: can only set epoch length up to 1 day"
    )?;

    validate!(
        env,
        total_epochs > 0,
        ErrorCode::InvalidSchedule,
        "Sanity check: must fund at least one epoch"
    )?;

    // u32 epochs times a one day epoch cannot overflow a u64
    let duration = u64::from(total_epochs) * epoch_length;
    validate!(
        env,
        duration <= MAX_REWARDS_DURATION,
        ErrorCode::InvalidSchedule,
        "Sanity check: can only setup 180 days of rewards at a time"
    )?;

    validate!(
        env,
        rewards_per_epoch >= 0,
        ErrorCode::InvalidAmount,
        "rewards per epoch cannot be negative: {}",
        rewards_per_epoch
    )?;

    Ok(())
}

/// Whole epochs since `start_time`, clamped to `total_epochs`. A `now` before
/// the start counts as zero elapsed time.
pub fn elapsed_epochs(schedule: &RewardSchedule, now: u64) -> u32 {
    let elapsed_seconds = now.saturating_sub(schedule.start_time);
    let epochs = elapsed_seconds.checked_div(schedule.epoch_length).unwrap_or(0);

    u32::try_from(epochs).map_or(schedule.total_epochs, |epochs| epochs.min(schedule.total_epochs))
}

pub fn remaining_epochs(schedule: &RewardSchedule, now: u64) -> u32 {
    schedule.total_epochs - elapsed_epochs(schedule, now)
}

pub fn is_vesting(schedule: Option<&RewardSchedule>, now: u64) -> bool {
    match schedule {
        Some(schedule) => elapsed_epochs(schedule, now) < schedule.total_epochs,
        None => false,
    }
}

pub fn total_rewards(env: &Env, schedule: &RewardSchedule) -> VaultResult<i128> {
    schedule.rewards_per_epoch.safe_mul(i128::from(schedule.total_epochs), env)
}

pub fn vested_rewards(env: &Env, schedule: Option<&RewardSchedule>, now: u64) -> VaultResult<i128> {
    match schedule {
        Some(schedule) =>
            schedule.rewards_per_epoch.safe_mul(i128::from(elapsed_epochs(schedule, now)), env),
        None => Ok(0),
    }
}

/// Seconds left in the current epoch, or 0 once nothing is vesting.
pub fn seconds_until_next_vest(schedule: Option<&RewardSchedule>, now: u64) -> u64 {
    match schedule {
        Some(schedule) if is_vesting(Some(schedule), now) => {
            let elapsed_seconds = now.saturating_sub(schedule.start_time);
            elapsed_seconds
                .checked_rem(schedule.epoch_length)
                .map_or(0, |into_epoch| schedule.epoch_length - into_epoch)
        }
        _ => 0,
    }
}
