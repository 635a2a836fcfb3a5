use soroban_sdk::{log, token, BytesN, Env};

use crate::errors::CompanyError;
use crate::events::RequestExecuted;
use crate::lifecycle;
use crate::requests;
use crate::types::{Config, RequestState};

pub(crate) fn treasury_balance(env: &Env, config: &Config) -> i128 {
    token::Client::new(env, &config.treasury).balance(&env.current_contract_address())
}

/// Pays out a succeeded request from the treasury.
///
/// The balance is checked before the transfer so a short treasury surfaces
/// as `InsufficientTreasuryBalance` and the request stays `Succeeded`.
pub(crate) fn execute(env: &Env, config: &Config, id: &BytesN<32>) -> Result<(), CompanyError> {
    let mut request = requests::load(env, id)?;

    if lifecycle::state_at(&request, env.ledger().sequence()) != RequestState::Succeeded {
        return Err(CompanyError::NotSuccessful);
    }

    if treasury_balance(env, config) < request.amount {
        return Err(CompanyError::InsufficientTreasuryBalance);
    }

    // A failed transfer traps and rolls back the whole invocation.
    token::Client::new(env, &config.treasury).transfer(
        &env.current_contract_address(),
        &request.target,
        &request.amount,
    );

    request.executed = true;
    requests::save(env, &request);

    log!(env, "request executed", id.clone(), request.target.clone(), request.amount);
    RequestExecuted {
        id: id.clone(),
        target: request.target,
        amount: request.amount,
    }
    .publish(env);

    Ok(())
}
