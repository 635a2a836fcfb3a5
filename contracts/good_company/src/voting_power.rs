//! Adapter over the ownership token.
//!
//! Voting weight is always read at a request's snapshot ledger through the
//! token's checkpoint history. The live balance is only consulted when a
//! stake holder registers.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::Config;

/// The slice of the ownership token this contract depends on. Delegation
/// bookkeeping stays entirely inside the token.
#[allow(dead_code)]
#[contractclient(name = "OwnershipTokenClient")]
pub trait OwnershipToken {
    fn balance(env: Env, id: Address) -> u32;
    fn delegates(env: Env, account: Address) -> Option<Address>;
    fn get_past_votes(env: Env, account: Address, ledger: u32) -> u32;
}

/// Delegated weight of `account` at the end of `ledger`.
pub(crate) fn weight_at(env: &Env, config: &Config, account: &Address, ledger: u32) -> u32 {
    OwnershipTokenClient::new(env, &config.ownership_token).get_past_votes(account, &ledger)
}

/// Ownership tokens currently held by `account`, regardless of delegation.
pub(crate) fn holdings(env: &Env, config: &Config, account: &Address) -> u32 {
    OwnershipTokenClient::new(env, &config.ownership_token).balance(account)
}

pub(crate) fn delegate_of(env: &Env, config: &Config, account: &Address) -> Option<Address> {
    OwnershipTokenClient::new(env, &config.ownership_token).delegates(account)
}
