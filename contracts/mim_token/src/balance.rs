use soroban_sdk::{Address, Env};

use crate::errors::TokenError;
use crate::types::DataKey;

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub(crate) fn receive_balance(env: &Env, addr: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, addr);
    let updated = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
    write_balance(env, addr, updated);
    Ok(())
}

pub(crate) fn spend_balance(env: &Env, addr: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, addr);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, addr, balance - amount);
    Ok(())
}

pub(crate) fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub(crate) fn change_total_supply(env: &Env, delta: i128) -> Result<(), TokenError> {
    let updated = read_total_supply(env)
        .checked_add(delta)
        .ok_or(TokenError::Overflow)?;
    env.storage().instance().set(&DataKey::TotalSupply, &updated);
    Ok(())
}
