use soroban_sdk::{Address, Env, String};
use vault::error::ErrorCode;

use crate::storage::{Config, RewardSchedule, StakingPool};

pub trait StakedTokenTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        base_token: Address,
        decimals: u32,
        name: String,
        symbol: String
    ) -> Result<(), ErrorCode>;

    fn set_admin(env: Env, new_admin: Address) -> Result<(), ErrorCode>;

    /// Starts a new reward schedule at the current ledger time and pulls
    /// `total_epochs * rewards_per_epoch` of the base asset from `sender`.
    fn fund_staking_rewards(
        env: Env,
        sender: Address,
        total_epochs: u32,
        epoch_length: u64,
        rewards_per_epoch: i128
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    /// Deposits `amount` of the base asset and returns the shares minted.
    fn add_stake(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode>;

    /// Burns `shares` and returns the base asset paid out.
    fn remove_stake(env: Env, sender: Address, shares: i128) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn to_staked_token(env: Env, base_amount: i128) -> Result<i128, ErrorCode>;

    fn to_base_token(env: Env, share_amount: i128) -> Result<i128, ErrorCode>;

    fn is_vesting_rewards_now(env: Env) -> Result<bool, ErrorCode>;

    fn vested_rewards(env: Env) -> Result<i128, ErrorCode>;

    fn total_rewards(env: Env) -> Result<i128, ErrorCode>;

    fn seconds_until_next_vest(env: Env) -> Result<u64, ErrorCode>;

    fn get_elapsed_epochs(env: Env) -> Result<u32, ErrorCode>;

    fn get_remaining_epochs(env: Env) -> Result<u32, ErrorCode>;

    fn get_rewards_funded_epochs(env: Env) -> Result<u32, ErrorCode>;

    fn get_rewards_epoch_length(env: Env) -> Result<u64, ErrorCode>;

    fn get_rewards_per_epoch(env: Env) -> Result<i128, ErrorCode>;

    fn get_rewards_period_start_time(env: Env) -> Result<u64, ErrorCode>;

    fn get_staking_pool_size(env: Env) -> Result<i128, ErrorCode>;

    fn get_pool_deposits(env: Env) -> Result<i128, ErrorCode>;

    fn get_period_withdrawals_total(env: Env) -> Result<i128, ErrorCode>;

    fn total_supply(env: Env) -> Result<i128, ErrorCode>;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn query_pool(env: Env) -> Result<StakingPool, ErrorCode>;

    fn query_schedule(env: Env) -> Result<Option<RewardSchedule>, ErrorCode>;
}
