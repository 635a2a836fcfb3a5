use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CompanyError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotEligible = 3,
    AlreadyRegistered = 4,
    NotAnEmployee = 5,
    NotStakeHolder = 6,
    NotCreator = 7,
    InvalidState = 8,
    ProposalNotActive = 9,
    NoDelegation = 10,
    AlreadyVoted = 11,
    NotSuccessful = 12,
    InsufficientTreasuryBalance = 13,
    RequestNotFound = 14,
    RequestAlreadyExists = 15,
    InvalidAmount = 16,
    InvalidVotingPeriod = 17,
    Overflow = 18,
}
