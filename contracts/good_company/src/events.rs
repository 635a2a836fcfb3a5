use soroban_sdk::{contractevent, Address, BytesN};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestCreated {
    #[topic]
    pub id: BytesN<32>,
    pub creator: Address,
    pub target: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    #[topic]
    pub id: BytesN<32>,
    #[topic]
    pub voter: Address,
    pub support: bool,
    pub weight: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestCancelled {
    #[topic]
    pub id: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestExecuted {
    #[topic]
    pub id: BytesN<32>,
    pub target: Address,
    pub amount: i128,
}
