//! Vote tally: one vote per (request, voter), weight fixed at the snapshot.

use soroban_sdk::{log, Address, BytesN, Env};

use crate::errors::CompanyError;
use crate::events::VoteCast;
use crate::lifecycle;
use crate::requests;
use crate::roles;
use crate::storage::{has_persistent, read_persistent, write_persistent};
use crate::types::{Config, DataKey, RequestState, Vote};
use crate::voting_power;

pub(crate) fn has_voted(env: &Env, id: &BytesN<32>, voter: &Address) -> bool {
    has_persistent(env, &DataKey::Vote(id.clone(), voter.clone()))
}

pub(crate) fn get_vote(env: &Env, id: &BytesN<32>, voter: &Address) -> Option<Vote> {
    read_persistent(env, &DataKey::Vote(id.clone(), voter.clone()))
}

/// Records a vote and returns the weight it carried.
///
/// Checks run in a fixed order: request state, voter role, delegated
/// weight at the snapshot, then the duplicate check.
pub(crate) fn cast(
    env: &Env,
    config: &Config,
    voter: Address,
    id: &BytesN<32>,
    support: bool,
) -> Result<u32, CompanyError> {
    let mut request = requests::load(env, id)?;
    let ledger = env.ledger().sequence();

    if lifecycle::state_at(&request, ledger) != RequestState::Active {
        return Err(CompanyError::ProposalNotActive);
    }

    if !roles::is_stake_holder(env, &voter) {
        return Err(CompanyError::NotStakeHolder);
    }

    let weight = voting_power::weight_at(env, config, &voter, request.snapshot_ledger);
    if weight == 0 {
        return Err(CompanyError::NoDelegation);
    }

    if has_voted(env, id, &voter) {
        return Err(CompanyError::AlreadyVoted);
    }

    if support {
        request.positive_weight = request
            .positive_weight
            .checked_add(weight)
            .ok_or(CompanyError::Overflow)?;
    } else {
        request.negative_weight = request
            .negative_weight
            .checked_add(weight)
            .ok_or(CompanyError::Overflow)?;
    }
    requests::save(env, &request);

    let vote = Vote {
        request_id: id.clone(),
        voter: voter.clone(),
        support,
        weight,
        cast_ledger: ledger,
    };
    write_persistent(env, &DataKey::Vote(id.clone(), voter.clone()), &vote);

    log!(env, "vote cast", id.clone(), voter.clone(), support, weight);
    VoteCast {
        id: id.clone(),
        voter,
        support,
        weight,
    }
    .publish(env);

    Ok(weight)
}
