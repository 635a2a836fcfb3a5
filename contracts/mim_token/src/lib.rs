//! Mim token: the fungible token the company treasury is held in.
#![no_std]

mod allowance;
mod balance;
mod contract;
mod errors;
mod events;
mod types;

pub use contract::{MimToken, MimTokenClient};
pub use errors::TokenError;
