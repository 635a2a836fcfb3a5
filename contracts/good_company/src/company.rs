use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String};

use crate::errors::CompanyError;
use crate::execution;
use crate::lifecycle;
use crate::requests;
use crate::roles;
use crate::storage::{bump_instance, is_initialized, read_config, write_config};
use crate::tally;
use crate::types::{Config, Request, RequestState, Vote};
use crate::voting_power;

#[contract]
pub struct GoodCompany;

#[contractimpl]
impl GoodCompany {
    /// Binds the contract to its ownership token and treasury token and fixes
    /// the voting window. Nothing here can be changed afterwards.
    pub fn initialize(
        env: Env,
        admin: Address,
        ownership_token: Address,
        treasury: Address,
        voting_delay: u32,
        voting_period: u32,
    ) -> Result<(), CompanyError> {
        if is_initialized(&env) {
            return Err(CompanyError::AlreadyInitialized);
        }

        if voting_period == 0 {
            return Err(CompanyError::InvalidVotingPeriod);
        }

        admin.require_auth();

        write_config(
            &env,
            &Config {
                admin,
                ownership_token,
                treasury,
                voting_delay,
                voting_period,
            },
        );
        log!(&env, "company initialized", voting_delay, voting_period);
        Ok(())
    }

    pub fn register_stake_holder(env: Env, stake_holder: Address) -> Result<(), CompanyError> {
        let config = Self::require_admin(&env)?;
        roles::register_stake_holder(&env, &config, &stake_holder)
    }

    pub fn register_employee(env: Env, employee: Address) -> Result<(), CompanyError> {
        Self::require_admin(&env)?;
        roles::register_employee(&env, &employee)
    }

    pub fn is_stake_holder(env: Env, account: Address) -> bool {
        bump_instance(&env);
        roles::is_stake_holder(&env, &account)
    }

    pub fn is_employee(env: Env, account: Address) -> bool {
        bump_instance(&env);
        roles::is_employee(&env, &account)
    }

    /// Raises a funding request. Voting opens `voting_delay` ledgers from now
    /// and stays open for `voting_period` ledgers.
    pub fn create_request(
        env: Env,
        creator: Address,
        target: Address,
        amount: i128,
        description: String,
    ) -> Result<BytesN<32>, CompanyError> {
        let config = read_config(&env)?;
        creator.require_auth();

        if !roles::is_employee(&env, &creator) {
            return Err(CompanyError::NotAnEmployee);
        }

        requests::create(&env, &config, creator, target, amount, description)
    }

    pub fn cancel_request(env: Env, caller: Address, id: BytesN<32>) -> Result<(), CompanyError> {
        read_config(&env)?;
        caller.require_auth();
        requests::cancel(&env, &caller, &id)
    }

    pub fn cast_vote(
        env: Env,
        voter: Address,
        id: BytesN<32>,
        support: bool,
    ) -> Result<u32, CompanyError> {
        let config = read_config(&env)?;
        voter.require_auth();
        tally::cast(&env, &config, voter, &id, support)
    }

    pub fn execute_request(env: Env, id: BytesN<32>) -> Result<(), CompanyError> {
        let config = read_config(&env)?;
        execution::execute(&env, &config, &id)
    }

    pub fn get_request_state(env: Env, id: BytesN<32>) -> Result<RequestState, CompanyError> {
        bump_instance(&env);
        let request = requests::load(&env, &id)?;
        Ok(lifecycle::state_at(&request, env.ledger().sequence()))
    }

    pub fn get_request(env: Env, id: BytesN<32>) -> Result<Request, CompanyError> {
        bump_instance(&env);
        requests::load(&env, &id)
    }

    /// Returns `(positive_weight, negative_weight)`.
    pub fn get_request_votes(env: Env, id: BytesN<32>) -> Result<(u32, u32), CompanyError> {
        bump_instance(&env);
        let request = requests::load(&env, &id)?;
        Ok((request.positive_weight, request.negative_weight))
    }

    pub fn request_snapshot(env: Env, id: BytesN<32>) -> Result<u32, CompanyError> {
        bump_instance(&env);
        Ok(requests::load(&env, &id)?.snapshot_ledger)
    }

    pub fn request_deadline(env: Env, id: BytesN<32>) -> Result<u32, CompanyError> {
        bump_instance(&env);
        Ok(requests::load(&env, &id)?.deadline_ledger)
    }

    pub fn request_count(env: Env) -> u32 {
        bump_instance(&env);
        requests::count(&env)
    }

    pub fn request_id_at(env: Env, index: u32) -> Result<BytesN<32>, CompanyError> {
        bump_instance(&env);
        requests::id_at(&env, index)
    }

    pub fn has_voted(env: Env, id: BytesN<32>, account: Address) -> bool {
        bump_instance(&env);
        tally::has_voted(&env, &id, &account)
    }

    pub fn get_vote(env: Env, id: BytesN<32>, account: Address) -> Option<Vote> {
        bump_instance(&env);
        tally::get_vote(&env, &id, &account)
    }

    /// Delegated weight `account` can vote with on request `id`. The weight
    /// is not fixed before the snapshot ledger.
    pub fn get_voting_weight(
        env: Env,
        id: BytesN<32>,
        account: Address,
    ) -> Result<u32, CompanyError> {
        let config = read_config(&env)?;
        let request = requests::load(&env, &id)?;
        if env.ledger().sequence() < request.snapshot_ledger {
            return Err(CompanyError::ProposalNotActive);
        }
        Ok(voting_power::weight_at(
            &env,
            &config,
            &account,
            request.snapshot_ledger,
        ))
    }

    pub fn voting_delegate(env: Env, account: Address) -> Result<Option<Address>, CompanyError> {
        let config = read_config(&env)?;
        Ok(voting_power::delegate_of(&env, &config, &account))
    }

    pub fn treasury_balance(env: Env) -> Result<i128, CompanyError> {
        let config = read_config(&env)?;
        Ok(execution::treasury_balance(&env, &config))
    }

    pub fn voting_delay(env: Env) -> Result<u32, CompanyError> {
        Ok(read_config(&env)?.voting_delay)
    }

    pub fn voting_period(env: Env) -> Result<u32, CompanyError> {
        Ok(read_config(&env)?.voting_period)
    }

    pub fn admin(env: Env) -> Result<Address, CompanyError> {
        Ok(read_config(&env)?.admin)
    }

    pub fn ownership_token(env: Env) -> Result<Address, CompanyError> {
        Ok(read_config(&env)?.ownership_token)
    }

    pub fn treasury(env: Env) -> Result<Address, CompanyError> {
        Ok(read_config(&env)?.treasury)
    }

    fn require_admin(env: &Env) -> Result<Config, CompanyError> {
        let config = read_config(env)?;
        config.admin.require_auth();
        Ok(config)
    }
}
