//! Role registry: who may vote and who may raise requests.

use soroban_sdk::{log, Address, Env};

use crate::errors::CompanyError;
use crate::storage::{has_persistent, write_persistent};
use crate::types::{Config, DataKey};
use crate::voting_power;

pub(crate) fn is_stake_holder(env: &Env, account: &Address) -> bool {
    has_persistent(env, &DataKey::StakeHolder(account.clone()))
}

pub(crate) fn is_employee(env: &Env, account: &Address) -> bool {
    has_persistent(env, &DataKey::Employee(account.clone()))
}

/// Eligibility is checked against the live balance, once. The flag stays set
/// even if the holder later transfers every token away.
pub(crate) fn register_stake_holder(
    env: &Env,
    config: &Config,
    account: &Address,
) -> Result<(), CompanyError> {
    if voting_power::holdings(env, config, account) == 0 {
        return Err(CompanyError::NotEligible);
    }

    write_persistent(env, &DataKey::StakeHolder(account.clone()), &true);
    log!(env, "stake holder registered", account.clone());
    Ok(())
}

pub(crate) fn register_employee(env: &Env, account: &Address) -> Result<(), CompanyError> {
    if is_employee(env, account) {
        return Err(CompanyError::AlreadyRegistered);
    }

    write_persistent(env, &DataKey::Employee(account.clone()), &true);
    log!(env, "employee registered", account.clone());
    Ok(())
}
