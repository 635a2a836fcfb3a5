use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    TokenNotFound = 3,
    NotOwnerNorApproved = 4,
    IncorrectOwner = 5,
    FutureLookup = 6,
    Overflow = 7,
}
