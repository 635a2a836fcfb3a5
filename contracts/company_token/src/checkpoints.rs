//! Per-ledger vote history.
//!
//! A history is stored as one persistent entry per checkpoint plus a count,
//! in ascending ledger order with at most one checkpoint per ledger. Lookups
//! at ledger N answer with the value in force when N opened: every change
//! made before N is visible, nothing made during N is.

use soroban_sdk::Env;

use crate::errors::NftError;
use crate::storage::{read_persistent, write_persistent};
use crate::types::{Checkpoint, DataKey, History};

pub(crate) fn len(env: &Env, history: &History) -> u32 {
    read_persistent(env, &DataKey::CheckpointCount(history.clone())).unwrap_or(0)
}

fn at(env: &Env, history: &History, index: u32) -> Option<Checkpoint> {
    read_persistent(env, &DataKey::Checkpoint(history.clone(), index))
}

fn last(env: &Env, history: &History, len: u32) -> Option<Checkpoint> {
    len.checked_sub(1).and_then(|index| at(env, history, index))
}

pub(crate) fn latest(env: &Env, history: &History) -> u32 {
    last(env, history, len(env, history))
        .map(|c| c.votes)
        .unwrap_or(0)
}

/// Value recorded by the last checkpoint strictly before `ledger`, 0 when the
/// history starts later.
pub(crate) fn value_at(env: &Env, history: &History, ledger: u32) -> u32 {
    let len = len(env, history);
    // Most lookups are for a recent ledger.
    match last(env, history, len) {
        None => return 0,
        Some(c) if c.ledger < ledger => return c.votes,
        Some(_) => {}
    }

    // Lower bound: first index whose ledger is not before the query. The
    // last checkpoint is already known not to be.
    let mut low = 0u32;
    let mut high = len - 1;
    while low < high {
        let mid = low + (high - low) / 2;
        if at(env, history, mid).map_or(false, |c| c.ledger < ledger) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    match low.checked_sub(1) {
        Some(index) => at(env, history, index).map(|c| c.votes).unwrap_or(0),
        None => 0,
    }
}

/// Applies `delta` to the latest value and records the result at the current
/// ledger. Returns `(previous, new)`.
pub(crate) fn write(env: &Env, history: &History, delta: Delta) -> Result<(u32, u32), NftError> {
    let ledger = env.ledger().sequence();
    let len = len(env, history);
    let last = last(env, history, len);

    let previous = last.map(|c| c.votes).unwrap_or(0);
    let new = match delta {
        Delta::Add(amount) => previous.checked_add(amount),
        Delta::Sub(amount) => previous.checked_sub(amount),
    }
    .ok_or(NftError::Overflow)?;

    let index = match last {
        Some(c) if c.ledger == ledger => len - 1,
        _ => {
            write_persistent(env, &DataKey::CheckpointCount(history.clone()), &(len + 1));
            len
        }
    };
    write_persistent(
        env,
        &DataKey::Checkpoint(history.clone(), index),
        &Checkpoint { ledger, votes: new },
    );

    Ok((previous, new))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Delta {
    Add(u32),
    Sub(u32),
}
