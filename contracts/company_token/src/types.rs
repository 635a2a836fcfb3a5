use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Metadata,
    NextTokenId,
    Owner(u32),
    Approved(u32),
    Balance(Address),
    Delegate(Address),
    CheckpointCount(History),
    Checkpoint(History, u32),
}

/// A vote history: the votes delegated to one account, or the total supply.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum History {
    Votes(Address),
    Supply,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    pub name: String,
    pub symbol: String,
}

/// Value of a history from the end of `ledger` onwards.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub ledger: u32,
    pub votes: u32,
}
