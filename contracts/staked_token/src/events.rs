use soroban_sdk::{Address, Env, Symbol};

pub struct StakedTokenEvents {}

impl StakedTokenEvents {
    /// Emitted once the vault is configured
    ///
    /// - topics - `["initialization", admin: Address]`
    /// - data - `[base_token: Address]`
    pub fn initialization(env: &Env, admin: Address, base_token: Address) {
        let topics = (Symbol::new(env, "initialization"), admin);
        env.events().publish(topics, base_token);
    }

    // Stake Events

    /// Emitted when a staker deposits the base asset
    ///
    /// - topics - `["add_stake", staker: Address]`
    /// - data - `[ts: u64, base_amount: i128, shares_minted: i128, total_shares_after: i128]`
    pub fn add_stake(
        env: &Env,
        staker: Address,
        ts: u64,
        base_amount: i128,
        shares_minted: i128,
        total_shares_after: i128
    ) {
        let topics = (Symbol::new(env, "add_stake"), staker);
        env.events().publish(topics, (ts, base_amount, shares_minted, total_shares_after));
    }

    /// Emitted when a staker redeems shares
    ///
    /// - topics - `["remove_stake", staker: Address]`
    /// - data - `[ts: u64, shares_burned: i128, base_amount: i128, total_shares_after: i128]`
    pub fn remove_stake(
        env: &Env,
        staker: Address,
        ts: u64,
        shares_burned: i128,
        base_amount: i128,
        total_shares_after: i128
    ) {
        let topics = (Symbol::new(env, "remove_stake"), staker);
        env.events().publish(topics, (ts, shares_burned, base_amount, total_shares_after));
    }

    // Rewards Events

    /// Emitted when a new reward schedule starts vesting
    ///
    /// - topics - `["fund_staking_rewards", funder: Address]`
    /// - data - `[start_time: u64, total_epochs: u32, epoch_length: u64, rewards_per_epoch: i128, total_rewards: i128]`
    pub fn fund_staking_rewards(
        env: &Env,
        funder: Address,
        start_time: u64,
        total_epochs: u32,
        epoch_length: u64,
        rewards_per_epoch: i128,
        total_rewards: i128
    ) {
        let topics = (Symbol::new(env, "fund_staking_rewards"), funder);
        env.events().publish(topics, (
            start_time,
            total_epochs,
            epoch_length,
            rewards_per_epoch,
            total_rewards,
        ));
    }
}
