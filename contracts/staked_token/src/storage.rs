use soroban_sdk::{contracttype, Address, Env};
use vault::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::{ErrorCode, VaultResult},
};

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    Pool,
    Balance(Address),
    Allowance(AllowanceDataKey),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// May fund reward schedules and hand the role over
    pub admin: Address,
    /// The deposited asset; any SEP-41 token contract
    pub base_token: Address,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> VaultResult<Config> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ErrorCode::NotInitialized)
}

// ################################################################
//                          Staking Pool
// ################################################################

/// Immutable parameters of one funded reward stream. How much of it has
/// vested is derived from the ledger time on every read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSchedule {
    pub start_time: u64,
    pub epoch_length: u64,
    pub total_epochs: u32,
    pub rewards_per_epoch: i128,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakingPool {
    /// Outstanding supply of the share token
    pub total_shares: i128,
    /// Pool value as of the last deposit or the start of the current schedule
    pub principal_baseline: i128,
    /// Base asset paid out since the current schedule started
    pub period_withdrawals: i128,
    pub schedule: Option<RewardSchedule>,
}

pub fn save_pool(env: &Env, pool: &StakingPool) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn get_pool(env: &Env) -> VaultResult<StakingPool> {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(ErrorCode::NotInitialized)
}
