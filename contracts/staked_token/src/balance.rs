use soroban_sdk::{log, Address, Env};
use vault::{
    constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD},
    error::{ErrorCode, VaultResult},
    math::safe_math::SafeMath,
};

use crate::storage::DataKey;

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) -> VaultResult {
    let balance = read_balance(env, addr);
    write_balance(env, addr, balance.safe_add(amount, env)?);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) -> VaultResult {
    let balance = read_balance(env, addr);
    if balance < amount {
        log!(env, "Balance: Spend: insufficient balance {} < {}", balance, amount);
        return Err(ErrorCode::InsufficientBalanceOrAllowance);
    }
    write_balance(env, addr, balance - amount);
    Ok(())
}
