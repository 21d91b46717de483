use soroban_sdk::{log, token, Address, Env};
use vault::error::{ErrorCode, VaultResult};

/// Pulls `amount` of the base asset from `from` into the vault.
pub fn receive(env: &Env, base_token: &Address, from: &Address, amount: i128) -> VaultResult {
    let client = token::TokenClient::new(env, base_token);

    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Token: Receive: transfer of {} from staker failed", amount);
            Err(ErrorCode::InsufficientBalanceOrAllowance)
        }
    }
}

/// Pays `amount` of the base asset out of the vault to `to`.
pub fn send(env: &Env, base_token: &Address, to: &Address, amount: i128) -> VaultResult {
    let client = token::TokenClient::new(env, base_token);

    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Token: Send: vault could not pay out {}", amount);
            Err(ErrorCode::InsufficientBalanceOrAllowance)
        }
    }
}
