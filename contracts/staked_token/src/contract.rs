use soroban_sdk::{contract, contractimpl, contractmeta, log, token, token::TokenInterface, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};
use vault::{
    constants::MAX_DECIMALS,
    error::{ErrorCode, VaultResult},
    math::safe_unwrap::SafeUnwrap,
    validate,
};

use crate::{
    allowance::{read_allowance, spend_allowance, write_allowance},
    balance::{read_balance, receive_balance, spend_balance},
    controller,
    events::StakedTokenEvents,
    math::{exchange_rate, vesting},
    staked_token::StakedTokenTrait,
    storage::{
        bump_instance,
        get_config,
        get_pool,
        is_initialized,
        save_config,
        save_pool,
        set_initialized,
        Config,
        RewardSchedule,
        StakingPool,
    },
};

contractmeta!(
    key = "Description",
    val = "Share token over a staked asset with epoch-vested staking rewards"
);

fn check_nonnegative_amount(env: &Env, amount: i128) -> VaultResult {
    validate!(env, amount >= 0, ErrorCode::InvalidAmount, "negative amount is not allowed: {}", amount)
}

fn read_schedule(env: &Env) -> VaultResult<Option<RewardSchedule>> {
    Ok(get_pool(env)?.schedule)
}

#[contract]
pub struct StakedToken;

#[contractimpl]
/// Staking vault whose own token is the share ledger over the deposited base asset
impl StakedTokenTrait for StakedToken {
    fn initialize(
        env: Env,
        admin: Address,
        base_token: Address,
        decimals: u32,
        name: String,
        symbol: String
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Staked Token: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }

        validate!(
            &env,
            decimals <= MAX_DECIMALS,
            ErrorCode::InvalidDecimals,
            "Staked Token: Initialize: decimals must not be greater than 18"
        )?;

        set_initialized(&env);
        bump_instance(&env);

        save_config(&env, &Config {
            admin: admin.clone(),
            base_token: base_token.clone(),
        });
        save_pool(&env, &StakingPool::default());

        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: decimals,
            name,
            symbol,
        });

        StakedTokenEvents::initialization(&env, admin, base_token);

        Ok(())
    }

    fn set_admin(env: Env, new_admin: Address) -> Result<(), ErrorCode> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();

        bump_instance(&env);

        let previous_admin = config.admin;
        config.admin = new_admin.clone();
        save_config(&env, &config);

        TokenUtils::new(&env).events().set_admin(previous_admin, new_admin);

        Ok(())
    }

    fn fund_staking_rewards(
        env: Env,
        sender: Address,
        total_epochs: u32,
        epoch_length: u64,
        rewards_per_epoch: i128
    ) -> Result<(), ErrorCode> {
        sender.require_auth();

        bump_instance(&env);

        let config = get_config(&env)?;
        validate!(
            &env,
            sender == config.admin,
            ErrorCode::NotAuthorized,
            "Staked Token: Fund rewards: only the admin may fund rewards"
        )?;

        let now = env.ledger().timestamp();
        let mut pool = get_pool(&env)?;

        let rewards = controller::rewards::fund_staking_rewards(
            &env,
            &mut pool,
            total_epochs,
            epoch_length,
            rewards_per_epoch,
            now
        )?;

        if rewards > 0 {
            controller::token::receive(&env, &config.base_token, &sender, rewards)?;
        }

        save_pool(&env, &pool);

        StakedTokenEvents::fund_staking_rewards(
            &env,
            sender,
            now,
            total_epochs,
            epoch_length,
            rewards_per_epoch,
            rewards
        );

        Ok(())
    }

    fn add_stake(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();

        bump_instance(&env);

        let config = get_config(&env)?;
        let mut pool = get_pool(&env)?;
        let now = env.ledger().timestamp();

        let shares = controller::stake::add_stake(&env, &mut pool, amount, now)?;

        controller::token::receive(&env, &config.base_token, &sender, amount)?;
        receive_balance(&env, &sender, shares)?;
        save_pool(&env, &pool);

        TokenUtils::new(&env).events().mint(env.current_contract_address(), sender.clone(), shares);
        StakedTokenEvents::add_stake(&env, sender, now, amount, shares, pool.total_shares);

        Ok(shares)
    }

    fn remove_stake(env: Env, sender: Address, shares: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();

        bump_instance(&env);

        let config = get_config(&env)?;
        let mut pool = get_pool(&env)?;
        let now = env.ledger().timestamp();
        let shares_owned = read_balance(&env, &sender);

        let amount = controller::stake::remove_stake(&env, &mut pool, shares, shares_owned, now)?;

        spend_balance(&env, &sender, shares)?;
        controller::token::send(&env, &config.base_token, &sender, amount)?;
        save_pool(&env, &pool);

        TokenUtils::new(&env).events().burn(sender.clone(), shares);
        StakedTokenEvents::remove_stake(&env, sender, now, shares, amount, pool.total_shares);

        Ok(amount)
    }

    fn to_staked_token(env: Env, base_amount: i128) -> Result<i128, ErrorCode> {
        check_nonnegative_amount(&env, base_amount)?;
        let pool = get_pool(&env)?;
        exchange_rate::to_staked_token(&env, &pool, base_amount, env.ledger().timestamp())
    }

    fn to_base_token(env: Env, share_amount: i128) -> Result<i128, ErrorCode> {
        check_nonnegative_amount(&env, share_amount)?;
        let pool = get_pool(&env)?;
        exchange_rate::to_base_token(&env, &pool, share_amount, env.ledger().timestamp())
    }

    fn is_vesting_rewards_now(env: Env) -> Result<bool, ErrorCode> {
        let schedule = read_schedule(&env)?;
        Ok(vesting::is_vesting(schedule.as_ref(), env.ledger().timestamp()))
    }

    fn vested_rewards(env: Env) -> Result<i128, ErrorCode> {
        let schedule = read_schedule(&env)?;
        vesting::vested_rewards(&env, schedule.as_ref(), env.ledger().timestamp())
    }

    fn total_rewards(env: Env) -> Result<i128, ErrorCode> {
        match read_schedule(&env)? {
            Some(schedule) => vesting::total_rewards(&env, &schedule),
            None => Ok(0),
        }
    }

    fn seconds_until_next_vest(env: Env) -> Result<u64, ErrorCode> {
        let schedule = read_schedule(&env)?;
        Ok(vesting::seconds_until_next_vest(schedule.as_ref(), env.ledger().timestamp()))
    }

    fn get_elapsed_epochs(env: Env) -> Result<u32, ErrorCode> {
        let now = env.ledger().timestamp();
        Ok(read_schedule(&env)?.map_or(0, |schedule| vesting::elapsed_epochs(&schedule, now)))
    }

    fn get_remaining_epochs(env: Env) -> Result<u32, ErrorCode> {
        let now = env.ledger().timestamp();
        Ok(read_schedule(&env)?.map_or(0, |schedule| vesting::remaining_epochs(&schedule, now)))
    }

    fn get_rewards_funded_epochs(env: Env) -> Result<u32, ErrorCode> {
        Ok(read_schedule(&env)?.map_or(0, |schedule| schedule.total_epochs))
    }

    fn get_rewards_epoch_length(env: Env) -> Result<u64, ErrorCode> {
        Ok(read_schedule(&env)?.map_or(0, |schedule| schedule.epoch_length))
    }

    fn get_rewards_per_epoch(env: Env) -> Result<i128, ErrorCode> {
        Ok(read_schedule(&env)?.map_or(0, |schedule| schedule.rewards_per_epoch))
    }

    fn get_rewards_period_start_time(env: Env) -> Result<u64, ErrorCode> {
        Ok(read_schedule(&env)?.map_or(0, |schedule| schedule.start_time))
    }

    fn get_staking_pool_size(env: Env) -> Result<i128, ErrorCode> {
        let pool = get_pool(&env)?;
        exchange_rate::pool_value(&env, &pool, env.ledger().timestamp())
    }

    fn get_pool_deposits(env: Env) -> Result<i128, ErrorCode> {
        Ok(get_pool(&env)?.principal_baseline)
    }

    fn get_period_withdrawals_total(env: Env) -> Result<i128, ErrorCode> {
        Ok(get_pool(&env)?.period_withdrawals)
    }

    fn total_supply(env: Env) -> Result<i128, ErrorCode> {
        Ok(get_pool(&env)?.total_shares)
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        Ok(get_config(&env)?.admin)
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        get_config(&env)
    }

    fn query_pool(env: Env) -> Result<StakingPool, ErrorCode> {
        get_pool(&env)
    }

    fn query_schedule(env: Env) -> Result<Option<RewardSchedule>, ErrorCode> {
        read_schedule(&env)
    }
}

#[contractimpl]
impl token::TokenInterface for StakedToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        check_nonnegative_amount(&env, amount).safe_unwrap(&env);
        from.require_auth();

        bump_instance(&env);

        write_allowance(&env, &from, &spender, amount, expiration_ledger).safe_unwrap(&env);
        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount).safe_unwrap(&env);
        from.require_auth();

        bump_instance(&env);

        spend_balance(&env, &from, amount).safe_unwrap(&env);
        receive_balance(&env, &to, amount).safe_unwrap(&env);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount).safe_unwrap(&env);
        spender.require_auth();

        bump_instance(&env);

        spend_allowance(&env, &from, &spender, amount).safe_unwrap(&env);
        spend_balance(&env, &from, amount).safe_unwrap(&env);
        receive_balance(&env, &to, amount).safe_unwrap(&env);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        check_nonnegative_amount(&env, amount).safe_unwrap(&env);
        from.require_auth();

        bump_instance(&env);

        spend_balance(&env, &from, amount).safe_unwrap(&env);
        retire(&env, amount).safe_unwrap(&env);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        check_nonnegative_amount(&env, amount).safe_unwrap(&env);
        spender.require_auth();

        bump_instance(&env);

        spend_allowance(&env, &from, &spender, amount).safe_unwrap(&env);
        spend_balance(&env, &from, amount).safe_unwrap(&env);
        retire(&env, amount).safe_unwrap(&env);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}

/// Burned shares leave the supply while their base asset stays in the pool.
fn retire(env: &Env, amount: i128) -> VaultResult {
    let mut pool = get_pool(env)?;
    controller::stake::retire_shares(env, &mut pool, amount)?;
    save_pool(env, &pool);
    Ok(())
}
