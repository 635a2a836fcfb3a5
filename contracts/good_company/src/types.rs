use soroban_sdk::{contracttype, Address, BytesN, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    StakeHolder(Address),
    Employee(Address),
    RequestCount,
    RequestIdAt(u32),
    Request(BytesN<32>),
    Vote(BytesN<32>, Address),
}

/// Deployment parameters, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub ownership_token: Address,
    pub treasury: Address,
    /// Ledgers between creation and the voting snapshot.
    pub voting_delay: u32,
    /// Ledgers the vote stays open after the snapshot.
    pub voting_period: u32,
}

/// A funding request raised by an employee.
///
/// There is no stored state field: the state is derived from the ledger
/// sequence, the tallies and the two terminal flags.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub id: BytesN<32>,
    pub creator: Address,
    pub target: Address,
    pub amount: i128,
    pub description: String,
    pub created_ledger: u32,
    pub snapshot_ledger: u32,
    pub deadline_ledger: u32,
    pub positive_weight: u32,
    pub negative_weight: u32,
    pub cancelled: bool,
    pub executed: bool,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RequestState {
    Pending = 0,
    Active = 1,
    Cancelled = 2,
    Defeated = 3,
    Succeeded = 4,
    Executed = 5,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub request_id: BytesN<32>,
    pub voter: Address,
    pub support: bool,
    pub weight: u32,
    pub cast_ledger: u32,
}
