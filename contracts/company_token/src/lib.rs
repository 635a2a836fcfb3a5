//! Company ownership token.
//!
//! One token per share of ownership. Holders delegate their votes (to
//! themselves or to someone else) and every change of delegated votes is
//! checkpointed per ledger, so governance can read voting weight as of any
//! past ledger.
#![no_std]

mod checkpoints;
mod contract;
mod errors;
mod events;
mod storage;
mod types;

pub use contract::{CompanyToken, CompanyTokenClient};
pub use errors::NftError;
pub use types::Checkpoint;

#[cfg(test)]
mod test;
