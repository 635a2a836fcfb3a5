use soroban_sdk::{Address, Env};

use crate::errors::TokenError;
use crate::types::{AllowanceDataKey, AllowanceValue, DataKey};

fn key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    })
}

/// Current allowance; anything past its expiration ledger reads as zero.
pub(crate) fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    match env
        .storage()
        .temporary()
        .get::<_, AllowanceValue>(&key(from, spender))
    {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub(crate) fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    let ledger = env.ledger().sequence();
    if amount > 0 && expiration_ledger < ledger {
        return Err(TokenError::InvalidExpiration);
    }

    let key = key(from, spender);
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - ledger;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

pub(crate) fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
