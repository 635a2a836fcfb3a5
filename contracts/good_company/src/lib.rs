//! Employee funding requests voted on by ownership-token holders.
//!
//! Employees raise requests against the company treasury. Stake holders vote
//! with the weight delegated to them at each request's snapshot ledger, and a
//! request that closes with more weight for than against can be executed
//! once, paying the requested amount to its target.
#![no_std]

mod company;
mod errors;
mod events;
mod execution;
mod lifecycle;
mod requests;
mod roles;
mod storage;
mod tally;
mod types;
mod voting_power;

pub use company::{GoodCompany, GoodCompanyClient};
pub use errors::CompanyError;
pub use events::{RequestCancelled, RequestCreated, RequestExecuted, VoteCast};
pub use types::{Config, Request, RequestState, Vote};
pub use voting_power::{OwnershipToken, OwnershipTokenClient};
