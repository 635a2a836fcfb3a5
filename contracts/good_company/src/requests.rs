//! Request store: the only place request records are read or written.

use soroban_sdk::{log, xdr::ToXdr, Address, Bytes, BytesN, Env, String};

use crate::errors::CompanyError;
use crate::events::{RequestCancelled, RequestCreated};
use crate::lifecycle;
use crate::storage::{has_persistent, read_persistent, write_persistent};
use crate::types::{Config, DataKey, Request};

/// Request ids hash everything the creator submitted together with the
/// creation ledger, so the same submission twice in one ledger collides.
pub(crate) fn request_id(
    env: &Env,
    creator: &Address,
    target: &Address,
    amount: i128,
    description: &String,
    ledger: u32,
) -> BytesN<32> {
    let mut payload = Bytes::new(env);
    payload.append(&creator.clone().to_xdr(env));
    payload.append(&target.clone().to_xdr(env));
    payload.append(&amount.to_xdr(env));
    payload.append(&description.clone().to_xdr(env));
    payload.append(&ledger.to_xdr(env));
    env.crypto().sha256(&payload).to_bytes()
}

pub(crate) fn load(env: &Env, id: &BytesN<32>) -> Result<Request, CompanyError> {
    read_persistent(env, &DataKey::Request(id.clone())).ok_or(CompanyError::RequestNotFound)
}

pub(crate) fn save(env: &Env, request: &Request) {
    write_persistent(env, &DataKey::Request(request.id.clone()), request);
}

pub(crate) fn count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RequestCount)
        .unwrap_or(0u32)
}

pub(crate) fn id_at(env: &Env, index: u32) -> Result<BytesN<32>, CompanyError> {
    read_persistent(env, &DataKey::RequestIdAt(index)).ok_or(CompanyError::RequestNotFound)
}

pub(crate) fn create(
    env: &Env,
    config: &Config,
    creator: Address,
    target: Address,
    amount: i128,
    description: String,
) -> Result<BytesN<32>, CompanyError> {
    if amount <= 0 {
        return Err(CompanyError::InvalidAmount);
    }

    let created_ledger = env.ledger().sequence();
    let snapshot_ledger = created_ledger
        .checked_add(config.voting_delay)
        .ok_or(CompanyError::Overflow)?;
    let deadline_ledger = snapshot_ledger
        .checked_add(config.voting_period)
        .ok_or(CompanyError::Overflow)?;

    let id = request_id(env, &creator, &target, amount, &description, created_ledger);
    if has_persistent(env, &DataKey::Request(id.clone())) {
        return Err(CompanyError::RequestAlreadyExists);
    }

    let request = Request {
        id: id.clone(),
        creator: creator.clone(),
        target: target.clone(),
        amount,
        description,
        created_ledger,
        snapshot_ledger,
        deadline_ledger,
        positive_weight: 0,
        negative_weight: 0,
        cancelled: false,
        executed: false,
    };
    save(env, &request);

    let index = count(env);
    write_persistent(env, &DataKey::RequestIdAt(index), &id);
    env.storage()
        .instance()
        .set(&DataKey::RequestCount, &(index + 1));

    log!(env, "request created", id, creator, snapshot_ledger, deadline_ledger);
    RequestCreated {
        id: id.clone(),
        creator,
        target,
        amount,
    }
    .publish(env);

    Ok(id)
}

pub(crate) fn cancel(env: &Env, caller: &Address, id: &BytesN<32>) -> Result<(), CompanyError> {
    let mut request = load(env, id)?;

    if request.creator != *caller {
        return Err(CompanyError::NotCreator);
    }

    let state = lifecycle::state_at(&request, env.ledger().sequence());
    if !lifecycle::is_cancellable(state) {
        return Err(CompanyError::InvalidState);
    }

    request.cancelled = true;
    save(env, &request);

    log!(env, "request cancelled", id.clone());
    RequestCancelled { id: id.clone() }.publish(env);
    Ok(())
}
