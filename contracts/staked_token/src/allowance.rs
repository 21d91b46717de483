use soroban_sdk::{log, Address, Env};
use vault::error::{ErrorCode, VaultResult};

use crate::storage::{AllowanceDataKey, AllowanceValue, DataKey};

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger < env.ledger().sequence() =>
            AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            },
        Some(allowance) => allowance,
        None =>
            AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32
) -> VaultResult {
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        log!(env, "Allowance: expiration ledger {} is before {}", expiration_ledger, sequence);
        return Err(ErrorCode::InvalidExpirationLedger);
    }

    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().temporary().set(&key, &AllowanceValue { amount, expiration_ledger });

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }

    Ok(())
}

pub fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) -> VaultResult {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        log!(env, "Allowance: insufficient allowance {} < {}", allowance.amount, amount);
        return Err(ErrorCode::InsufficientBalanceOrAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger
        )?;
    }
    Ok(())
}
