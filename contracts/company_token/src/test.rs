#![cfg(test)]

use super::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

fn setup(env: &Env) -> (CompanyTokenClient<'_>, Address) {
    env.mock_all_auths();
    let contract_id = env.register(CompanyToken, ());
    let client = CompanyTokenClient::new(env, &contract_id);

    let admin = Address::generate(env);
    client.initialize(
        &admin,
        &String::from_str(env, "Company NFT"),
        &String::from_str(env, "CNFT"),
    );
    (client, admin)
}

#[test]
fn test_initialize_metadata() {
    let env = Env::default();
    let (client, _) = setup(&env);

    assert_eq!(client.name(), String::from_str(&env, "Company NFT"));
    assert_eq!(client.symbol(), String::from_str(&env, "CNFT"));
    assert_eq!(client.total_supply(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_initialize_twice() {
    let env = Env::default();
    let (client, admin) = setup(&env);

    client.initialize(
        &admin,
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "AGN"),
    );
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let other = Address::generate(&env);

    assert_eq!(client.mint(&owner), 0);
    assert_eq!(client.mint(&other), 1);

    assert_eq!(client.balance(&owner), 1);
    assert_eq!(client.owner_of(&1), other);
    assert_eq!(client.total_supply(), 2);
    assert!(client.exists(&0));
}

#[test]
fn test_burn_by_owner() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let token_id = client.mint(&owner);

    client.burn(&owner, &token_id);

    assert!(!client.exists(&token_id));
    assert_eq!(client.balance(&owner), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_burn_by_stranger() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);
    let token_id = client.mint(&owner);

    client.burn(&stranger, &token_id);
}

#[test]
fn test_burn_by_approved_operator() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let operator = Address::generate(&env);
    let token_id = client.mint(&owner);

    client.approve(&owner, &operator, &token_id);
    assert_eq!(client.get_approved(&token_id), Some(operator.clone()));

    client.burn(&operator, &token_id);
    assert!(!client.exists(&token_id));
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_transfer_from_without_approval() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);
    let token_id = client.mint(&owner);

    client.transfer_from(&stranger, &owner, &stranger, &token_id);
}

#[test]
fn test_transfer_by_owner() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let receiver = Address::generate(&env);
    let token_id = client.mint(&owner);

    client.transfer(&owner, &receiver, &token_id);

    assert_eq!(client.owner_of(&token_id), receiver);
    assert_eq!(client.balance(&owner), 0);
    assert_eq!(client.balance(&receiver), 1);
}

#[test]
fn test_transfer_clears_approval() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let operator = Address::generate(&env);
    let receiver = Address::generate(&env);
    let token_id = client.mint(&owner);

    client.approve(&owner, &operator, &token_id);
    client.transfer_from(&operator, &owner, &receiver, &token_id);

    assert_eq!(client.owner_of(&token_id), receiver);
    assert_eq!(client.get_approved(&token_id), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")]
fn test_transfer_not_owned() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let other = Address::generate(&env);
    let token_id = client.mint(&owner);

    client.transfer(&other, &owner, &token_id);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_transfer_burned_token() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let owner = Address::generate(&env);
    let receiver = Address::generate(&env);
    let token_id = client.mint(&owner);
    client.burn(&owner, &token_id);

    client.transfer(&owner, &receiver, &token_id);
}

#[test]
fn test_votes_need_delegation() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let holder = Address::generate(&env);
    client.mint(&holder);
    client.mint(&holder);

    assert_eq!(client.delegates(&holder), None);
    assert_eq!(client.get_votes(&holder), 0);

    client.delegate(&holder, &holder);

    assert_eq!(client.delegates(&holder), Some(holder.clone()));
    assert_eq!(client.get_votes(&holder), 2);
}

#[test]
fn test_mint_after_delegation_adds_votes() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let holder = Address::generate(&env);
    client.delegate(&holder, &holder);
    client.mint(&holder);
    client.mint(&holder);
    client.mint(&holder);

    assert_eq!(client.get_votes(&holder), 3);
}

#[test]
fn test_redelegation_moves_votes() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let holder = Address::generate(&env);
    let representative = Address::generate(&env);
    client.mint(&holder);
    client.mint(&holder);

    client.delegate(&holder, &holder);
    client.delegate(&holder, &representative);

    assert_eq!(client.get_votes(&holder), 0);
    assert_eq!(client.get_votes(&representative), 2);
    // Delegating does not move ownership.
    assert_eq!(client.balance(&representative), 0);
}

#[test]
fn test_past_votes_follow_ledger_history() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    env.ledger().set_sequence_number(10);
    client.delegate(&alice, &alice);
    client.delegate(&bob, &bob);
    let token_id = client.mint(&alice);
    client.mint(&alice);

    env.ledger().set_sequence_number(20);
    client.transfer(&alice, &bob, &token_id);

    env.ledger().set_sequence_number(30);

    assert_eq!(client.get_past_votes(&alice, &10), 0);
    assert_eq!(client.get_past_votes(&alice, &11), 2);
    assert_eq!(client.get_past_votes(&alice, &20), 2);
    assert_eq!(client.get_past_votes(&alice, &21), 1);
    assert_eq!(client.get_past_votes(&bob, &20), 0);
    assert_eq!(client.get_past_votes(&bob, &21), 1);
    assert_eq!(client.get_past_total_supply(&15), 2);
    assert_eq!(client.get_past_total_supply(&10), 0);
}

#[test]
fn test_past_votes_ignore_changes_in_the_same_ledger() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.delegate(&alice, &alice);
    client.delegate(&bob, &bob);

    env.ledger().set_sequence_number(10);
    let token_id = client.mint(&alice);
    client.mint(&alice);

    env.ledger().set_sequence_number(11);
    assert_eq!(client.get_past_votes(&alice, &11), 2);

    client.transfer(&alice, &bob, &token_id);
    assert_eq!(client.get_votes(&alice), 1);
    assert_eq!(client.get_votes(&bob), 1);

    // Lookups for the current ledger still see it as it opened.
    assert_eq!(client.get_past_votes(&alice, &11), 2);
    assert_eq!(client.get_past_votes(&bob, &11), 0);

    env.ledger().set_sequence_number(12);
    assert_eq!(client.get_past_votes(&alice, &12), 1);
    assert_eq!(client.get_past_votes(&bob, &12), 1);
}

#[test]
fn test_long_vote_history() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.delegate(&alice, &alice);
    client.delegate(&bob, &bob);

    env.ledger().set_sequence_number(100);
    let token_id = client.mint(&alice);

    // The token changes hands once per ledger from 101 to 300.
    let mut holder = alice.clone();
    let mut other = bob.clone();
    for ledger in 101..=300u32 {
        env.ledger().set_sequence_number(ledger);
        client.transfer(&holder, &other, &token_id);
        core::mem::swap(&mut holder, &mut other);
    }

    env.ledger().set_sequence_number(301);
    assert_eq!(client.get_past_votes(&alice, &101), 1);
    assert_eq!(client.get_past_votes(&bob, &101), 0);
    assert_eq!(client.get_past_votes(&alice, &102), 0);
    assert_eq!(client.get_past_votes(&bob, &102), 1);
    assert_eq!(client.get_past_votes(&alice, &200), 0);
    assert_eq!(client.get_past_votes(&alice, &201), 1);
    assert_eq!(client.get_past_votes(&alice, &301), 1);
    assert_eq!(client.get_past_votes(&bob, &301), 0);
    assert_eq!(client.owner_of(&token_id), alice);
    assert_eq!(client.get_past_total_supply(&301), 1);
}

#[test]
fn test_reads_keep_records_alive() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    env.ledger().set_sequence_number(10);
    client.delegate(&alice, &alice);
    let token_id = client.mint(&alice);

    // Forty days with nothing but reads, five days at a time.
    for _ in 0..8 {
        env.ledger()
            .set_sequence_number(env.ledger().sequence() + 5 * 17_280);
        assert_eq!(client.get_votes(&alice), 1);
        assert_eq!(client.balance(&alice), 1);
        assert_eq!(client.owner_of(&token_id), alice);
        assert_eq!(client.delegates(&alice), Some(alice.clone()));
    }

    client.transfer(&alice, &bob, &token_id);
    assert_eq!(client.get_votes(&alice), 0);
    assert_eq!(client.balance(&bob), 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #6)")]
fn test_past_votes_future_ledger() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let holder = Address::generate(&env);
    env.ledger().set_sequence_number(10);

    client.get_past_votes(&holder, &11);
}
