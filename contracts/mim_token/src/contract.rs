use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    change_total_supply, read_balance, read_total_supply, receive_balance, spend_balance,
};
use crate::errors::TokenError;
use crate::events::{Approve, Burn, Mint, Transfer};
use crate::types::{DataKey, Metadata};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contract]
pub struct MimToken;

#[contractimpl]
impl MimToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(TokenError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(
            &DataKey::Metadata,
            &Metadata {
                decimal,
                name,
                symbol,
            },
        );
        bump_instance(&env);
        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        check_nonnegative_amount(amount)?;
        let admin = read_admin(&env)?;
        admin.require_auth();
        bump_instance(&env);

        receive_balance(&env, &to, amount)?;
        change_total_supply(&env, amount)?;

        log!(&env, "minted", to.clone(), amount);
        Mint { to, amount }.publish(&env);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        bump_instance(&env);

        write_allowance(&env, &from, &spender, amount, expiration_ledger)?;

        Approve {
            from,
            spender,
            amount,
            expiration_ledger,
        }
        .publish(&env);
        Ok(())
    }

    /// Raises a live allowance by `amount`, keeping its expiration ledger.
    pub fn increase_allowance(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        bump_instance(&env);

        let current = read_allowance(&env, &from, &spender);
        if current.amount == 0 {
            return Err(TokenError::InsufficientAllowance);
        }
        let amount = current
            .amount
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        write_allowance(&env, &from, &spender, amount, current.expiration_ledger)?;

        Approve {
            from,
            spender,
            amount,
            expiration_ledger: current.expiration_ledger,
        }
        .publish(&env);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        bump_instance(&env);

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        log!(&env, "transferred", from.clone(), to.clone(), amount);
        Transfer { from, to, amount }.publish(&env);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        bump_instance(&env);

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        Transfer { from, to, amount }.publish(&env);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        bump_instance(&env);

        spend_balance(&env, &from, amount)?;
        change_total_supply(&env, -amount)?;

        log!(&env, "burned", from.clone(), amount);
        Burn { from, amount }.publish(&env);
        Ok(())
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        bump_instance(&env);

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        change_total_supply(&env, -amount)?;

        Burn { from, amount }.publish(&env);
        Ok(())
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(read_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.symbol)
    }
}

fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

fn read_admin(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TokenError::NotInitialized)
}

fn read_metadata(env: &Env) -> Result<Metadata, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(TokenError::NotInitialized)
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
