use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address, Env, IntoVal, Symbol};
use test_case::test_case;

use super::setup::{
    deploy_staked_token_contract, deploy_token_contract, jump_to, last_event, units, ONE_DAY, ONE_HOUR,
    START,
};
use crate::{contract::StakedTokenClient, storage::RewardSchedule, ErrorCode};

const REWARDS_PER_EPOCH: i128 = 6_900_000_000;

struct Fixture<'a> {
    env: Env,
    admin: Address,
    staked_token: StakedTokenClient<'a>,
}

fn funded_admin<'a>(funds: i128) -> Fixture<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (base_token, base_token_admin) = deploy_token_contract(&env, &admin);
    let staked_token = deploy_staked_token_contract(&env, &admin, &base_token.address);

    jump_to(&env, START);
    if funds > 0 {
        base_token_admin.mint(&admin, &funds);
    }

    Fixture {
        env,
        admin,
        staked_token,
    }
}

#[test_case(30, 0, ErrorCode::InvalidEpochLength ; "zero epoch length")]
#[test_case(30, ONE_DAY + 1, ErrorCode::InvalidEpochLength ; "epoch longer than a day")]
#[test_case(181, ONE_DAY, ErrorCode::InvalidSchedule ; "more than 180 days")]
#[test_case(0, ONE_HOUR, ErrorCode::InvalidSchedule ; "no epochs")]
fn fund_rejects_invalid_schedule(total_epochs: u32, epoch_length: u64, expected: ErrorCode) {
    let fixture = funded_admin(units(1_000));

    assert_eq!(
        fixture.staked_token.try_fund_staking_rewards(&fixture.admin, &total_epochs, &epoch_length, &1),
        Err(Ok(expected))
    );
    assert_eq!(fixture.staked_token.query_schedule(), None);
}

#[test]
fn fund_accepts_180_one_day_epochs() {
    let fixture = funded_admin(units(1_000));

    fixture.staked_token.fund_staking_rewards(&fixture.admin, &180, &ONE_DAY, &1);

    assert_eq!(fixture.staked_token.total_rewards(), 180);
    assert_eq!(fixture.staked_token.get_rewards_funded_epochs(), 180);
}

#[test]
fn fund_rejects_negative_rewards() {
    let fixture = funded_admin(units(1_000));

    assert_eq!(
        fixture.staked_token.try_fund_staking_rewards(&fixture.admin, &30, &ONE_HOUR, &-1),
        Err(Ok(ErrorCode::InvalidAmount))
    );
}

#[test]
fn only_admin_may_fund() {
    let fixture = funded_admin(units(1_000));
    let intruder = Address::generate(&fixture.env);

    assert_eq!(
        fixture.staked_token.try_fund_staking_rewards(&intruder, &30, &ONE_HOUR, &REWARDS_PER_EPOCH),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(fixture.staked_token.query_schedule(), None);
}

#[test]
fn funding_requires_the_full_amount() {
    let fixture = funded_admin(29 * REWARDS_PER_EPOCH);

    assert_eq!(
        fixture.staked_token.try_fund_staking_rewards(&fixture.admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH),
        Err(Ok(ErrorCode::InsufficientBalanceOrAllowance))
    );
    assert_eq!(fixture.staked_token.query_schedule(), None);
    assert!(!fixture.staked_token.is_vesting_rewards_now());
}

#[test]
fn zero_reward_schedule_moves_no_tokens() {
    let fixture = funded_admin(0);

    fixture.staked_token.fund_staking_rewards(&fixture.admin, &30, &ONE_HOUR, &0);

    assert!(fixture.staked_token.is_vesting_rewards_now());
    assert_eq!(fixture.staked_token.total_rewards(), 0);
}

#[test]
fn schedule_accessors_follow_the_clock() {
    let fixture = funded_admin(30 * REWARDS_PER_EPOCH);
    let env = &fixture.env;
    let staked_token = &fixture.staked_token;

    staked_token.fund_staking_rewards(&fixture.admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH);

    assert_eq!(
        staked_token.query_schedule(),
        Some(RewardSchedule {
            start_time: START,
            epoch_length: ONE_HOUR,
            total_epochs: 30,
            rewards_per_epoch: REWARDS_PER_EPOCH,
        })
    );
    assert_eq!(staked_token.get_rewards_period_start_time(), START);
    assert_eq!(staked_token.get_rewards_epoch_length(), ONE_HOUR);
    assert_eq!(staked_token.get_rewards_per_epoch(), REWARDS_PER_EPOCH);
    assert_eq!(staked_token.get_rewards_funded_epochs(), 30);
    assert_eq!(staked_token.total_rewards(), 30 * REWARDS_PER_EPOCH);

    jump_to(env, START + 2 * ONE_HOUR + 600);
    assert!(staked_token.is_vesting_rewards_now());
    assert_eq!(staked_token.get_elapsed_epochs(), 2);
    assert_eq!(staked_token.get_remaining_epochs(), 28);
    assert_eq!(staked_token.vested_rewards(), 2 * REWARDS_PER_EPOCH);
    assert_eq!(staked_token.seconds_until_next_vest(), ONE_HOUR - 600);

    jump_to(env, START + 45 * ONE_HOUR);
    assert!(!staked_token.is_vesting_rewards_now());
    assert_eq!(staked_token.get_elapsed_epochs(), 30);
    assert_eq!(staked_token.get_remaining_epochs(), 0);
    assert_eq!(staked_token.seconds_until_next_vest(), 0);
    assert_eq!(staked_token.vested_rewards(), 30 * REWARDS_PER_EPOCH);
}

#[test]
fn cannot_refund_while_vesting() {
    let fixture = funded_admin(60 * REWARDS_PER_EPOCH);
    let staked_token = &fixture.staked_token;

    staked_token.fund_staking_rewards(&fixture.admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH);

    jump_to(&fixture.env, START + 30 * ONE_HOUR - 1);
    assert_eq!(
        staked_token.try_fund_staking_rewards(&fixture.admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH),
        Err(Ok(ErrorCode::RewardsStillVesting))
    );

    jump_to(&fixture.env, START + 30 * ONE_HOUR);
    staked_token.fund_staking_rewards(&fixture.admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH);
    assert_eq!(staked_token.get_rewards_period_start_time(), START + 30 * ONE_HOUR);
}

#[test]
fn refunding_resets_the_period() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (base_token, base_token_admin) = deploy_token_contract(&env, &admin);
    let staked_token = deploy_staked_token_contract(&env, &admin, &base_token.address);

    jump_to(&env, START);
    base_token_admin.mint(&admin, &(60 * REWARDS_PER_EPOCH));
    base_token_admin.mint(&user, &units(100));
    staked_token.fund_staking_rewards(&admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH);
    let shares = staked_token.add_stake(&user, &units(100));

    jump_to(&env, START + 12 * ONE_HOUR);
    staked_token.remove_stake(&user, &(shares / 4));
    assert!(staked_token.get_period_withdrawals_total() > 0);

    jump_to(&env, START + 31 * ONE_HOUR);
    let pool_size = staked_token.get_staking_pool_size();
    let share_value = staked_token.to_base_token(&units(1));

    staked_token.fund_staking_rewards(&admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH);

    assert_eq!(staked_token.vested_rewards(), 0);
    assert_eq!(staked_token.get_period_withdrawals_total(), 0);
    assert_eq!(staked_token.get_pool_deposits(), staked_token.get_staking_pool_size());
    assert_eq!(staked_token.get_staking_pool_size(), pool_size);
    assert_eq!(staked_token.to_base_token(&units(1)), share_value);
    assert_eq!(
        base_token.balance(&staked_token.address),
        pool_size + 30 * REWARDS_PER_EPOCH
    );
}

#[test]
fn exchange_rate_falls_while_vesting() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (base_token, base_token_admin) = deploy_token_contract(&env, &admin);
    let staked_token = deploy_staked_token_contract(&env, &admin, &base_token.address);

    jump_to(&env, START);
    base_token_admin.mint(&admin, &(30 * REWARDS_PER_EPOCH));
    base_token_admin.mint(&user, &units(1));
    staked_token.add_stake(&user, &units(1));
    staked_token.fund_staking_rewards(&admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH);

    assert_eq!(staked_token.to_staked_token(&units(1)), units(1));

    let mut previous = units(1);
    for epoch in 1..=30 {
        jump_to(&env, START + epoch * ONE_HOUR);
        let shares = staked_token.to_staked_token(&units(1));
        assert!(shares < previous);
        previous = shares;
    }
    for epoch in 31..=40 {
        jump_to(&env, START + epoch * ONE_HOUR);
        assert_eq!(staked_token.to_staked_token(&units(1)), previous);
    }
}

#[test]
fn funding_publishes_the_schedule() {
    let fixture = funded_admin(30 * REWARDS_PER_EPOCH);
    let env = &fixture.env;

    fixture.staked_token.fund_staking_rewards(&fixture.admin, &30, &ONE_HOUR, &REWARDS_PER_EPOCH);

    let (contract, topics, data) = last_event(env);
    assert_eq!(contract, fixture.staked_token.address);
    assert_eq!(
        topics,
        (Symbol::new(env, "fund_staking_rewards"), fixture.admin.clone()).into_val(env)
    );
    let data: (u64, u32, u64, i128, i128) = data.into_val(env);
    assert_eq!(data, (START, 30, ONE_HOUR, REWARDS_PER_EPOCH, 30 * REWARDS_PER_EPOCH));
}
