use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

use crate::errors::CompanyError;
use crate::types::{Config, DataKey};

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Requests and votes are audit records, keep them around for a month.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Every entry point that needs the config goes through here, which also
/// keeps the instance alive.
pub(crate) fn read_config(env: &Env) -> Result<Config, CompanyError> {
    let config: Config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(CompanyError::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

pub(crate) fn write_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Reads a persistent entry, pushing its expiry out when it exists.
pub(crate) fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        extend_persistent(env, key);
    }
    value
}

pub(crate) fn has_persistent(env: &Env, key: &DataKey) -> bool {
    let present = env.storage().persistent().has(key);
    if present {
        extend_persistent(env, key);
    }
    present
}

/// Writes a persistent entry and pushes its expiry out.
pub(crate) fn write_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    extend_persistent(env, key);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
