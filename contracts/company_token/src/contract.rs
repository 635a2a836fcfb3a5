use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::checkpoints::{self, Delta};
use crate::errors::NftError;
use crate::events::{Approval, Burn, DelegateChanged, DelegateVotesChanged, Mint, Transfer};
use crate::storage::{bump_instance, read_persistent, write_persistent};
use crate::types::{DataKey, History, Metadata};

#[contract]
pub struct CompanyToken;

#[contractimpl]
impl CompanyToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), NftError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(NftError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::Metadata, &Metadata { name, symbol });
        env.storage().instance().set(&DataKey::NextTokenId, &0u32);
        bump_instance(&env);
        Ok(())
    }

    /// Mints the next token id to `to`. The vote it carries goes to whoever
    /// `to` delegates to, or nowhere.
    pub fn mint(env: Env, to: Address) -> Result<u32, NftError> {
        let admin = read_admin(&env)?;
        admin.require_auth();

        let token_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(0u32);
        let next = token_id.checked_add(1).ok_or(NftError::Overflow)?;
        env.storage().instance().set(&DataKey::NextTokenId, &next);
        bump_instance(&env);

        write_persistent(&env, &DataKey::Owner(token_id), &to);
        change_balance(&env, &to, Delta::Add(1))?;
        change_supply(&env, Delta::Add(1))?;
        move_votes(&env, None, delegate_of(&env, &to), 1)?;

        log!(&env, "minted", to.clone(), token_id);
        Mint { to, token_id }.publish(&env);
        Ok(token_id)
    }

    pub fn burn(env: Env, caller: Address, token_id: u32) -> Result<(), NftError> {
        caller.require_auth();
        let owner = read_owner(&env, token_id)?;
        if !is_owner_or_approved(&env, &caller, &owner, token_id) {
            return Err(NftError::NotOwnerNorApproved);
        }

        env.storage().persistent().remove(&DataKey::Owner(token_id));
        env.storage().persistent().remove(&DataKey::Approved(token_id));
        change_balance(&env, &owner, Delta::Sub(1))?;
        change_supply(&env, Delta::Sub(1))?;
        move_votes(&env, delegate_of(&env, &owner), None, 1)?;

        log!(&env, "burned", owner.clone(), token_id);
        Burn {
            from: owner,
            token_id,
        }
        .publish(&env);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), NftError> {
        from.require_auth();
        let owner = read_owner(&env, token_id)?;
        if owner != from {
            return Err(NftError::IncorrectOwner);
        }
        move_token(&env, from, to, token_id)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), NftError> {
        spender.require_auth();
        let owner = read_owner(&env, token_id)?;
        if !is_owner_or_approved(&env, &spender, &owner, token_id) {
            return Err(NftError::NotOwnerNorApproved);
        }
        if owner != from {
            return Err(NftError::IncorrectOwner);
        }
        move_token(&env, from, to, token_id)
    }

    /// Lets `operator` transfer or burn `token_id` until the token moves.
    pub fn approve(
        env: Env,
        owner: Address,
        operator: Address,
        token_id: u32,
    ) -> Result<(), NftError> {
        owner.require_auth();
        if read_owner(&env, token_id)? != owner {
            return Err(NftError::NotOwnerNorApproved);
        }

        write_persistent(&env, &DataKey::Approved(token_id), &operator);
        Approval {
            owner,
            operator,
            token_id,
        }
        .publish(&env);
        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u32) -> Result<Option<Address>, NftError> {
        read_owner(&env, token_id)?;
        Ok(env.storage().persistent().get(&DataKey::Approved(token_id)))
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, NftError> {
        bump_instance(&env);
        read_owner(&env, token_id)
    }

    pub fn exists(env: Env, token_id: u32) -> bool {
        env.storage().persistent().has(&DataKey::Owner(token_id))
    }

    pub fn balance(env: Env, id: Address) -> u32 {
        bump_instance(&env);
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> u32 {
        checkpoints::latest(&env, &History::Supply)
    }

    pub fn name(env: Env) -> Result<String, NftError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, NftError> {
        Ok(read_metadata(&env)?.symbol)
    }

    /// Points all of `account`'s current and future votes at `delegatee`.
    pub fn delegate(env: Env, account: Address, delegatee: Address) -> Result<(), NftError> {
        account.require_auth();

        let previous = delegate_of(&env, &account);
        write_persistent(&env, &DataKey::Delegate(account.clone()), &delegatee);

        let held = read_balance(&env, &account);
        move_votes(&env, previous.clone(), Some(delegatee.clone()), held)?;

        log!(&env, "delegated", account.clone(), delegatee.clone());
        DelegateChanged {
            delegator: account,
            from_delegate: previous,
            to_delegate: delegatee,
        }
        .publish(&env);
        Ok(())
    }

    pub fn delegates(env: Env, account: Address) -> Option<Address> {
        bump_instance(&env);
        delegate_of(&env, &account)
    }

    pub fn get_votes(env: Env, account: Address) -> u32 {
        bump_instance(&env);
        checkpoints::latest(&env, &History::Votes(account))
    }

    /// Votes delegated to `account` when `ledger` opened. Changes made during
    /// `ledger` itself only show up from the next ledger on, so the answer for
    /// the current ledger can no longer change.
    pub fn get_past_votes(env: Env, account: Address, ledger: u32) -> Result<u32, NftError> {
        require_past(&env, ledger)?;
        bump_instance(&env);
        Ok(checkpoints::value_at(&env, &History::Votes(account), ledger))
    }

    pub fn get_past_total_supply(env: Env, ledger: u32) -> Result<u32, NftError> {
        require_past(&env, ledger)?;
        bump_instance(&env);
        Ok(checkpoints::value_at(&env, &History::Supply, ledger))
    }
}

fn require_past(env: &Env, ledger: u32) -> Result<(), NftError> {
    if ledger > env.ledger().sequence() {
        return Err(NftError::FutureLookup);
    }
    Ok(())
}

fn move_token(env: &Env, from: Address, to: Address, token_id: u32) -> Result<(), NftError> {
    env.storage().persistent().remove(&DataKey::Approved(token_id));
    write_persistent(env, &DataKey::Owner(token_id), &to);
    change_balance(env, &from, Delta::Sub(1))?;
    change_balance(env, &to, Delta::Add(1))?;
    move_votes(env, delegate_of(env, &from), delegate_of(env, &to), 1)?;

    log!(env, "transferred", from.clone(), to.clone(), token_id);
    Transfer { from, to, token_id }.publish(env);
    Ok(())
}

fn move_votes(
    env: &Env,
    from: Option<Address>,
    to: Option<Address>,
    amount: u32,
) -> Result<(), NftError> {
    if amount == 0 || from == to {
        return Ok(());
    }

    if let Some(delegate) = from {
        write_votes(env, delegate, Delta::Sub(amount))?;
    }
    if let Some(delegate) = to {
        write_votes(env, delegate, Delta::Add(amount))?;
    }
    Ok(())
}

fn write_votes(env: &Env, delegate: Address, delta: Delta) -> Result<(), NftError> {
    let (previous_votes, new_votes) =
        checkpoints::write(env, &History::Votes(delegate.clone()), delta)?;

    DelegateVotesChanged {
        delegate,
        previous_votes,
        new_votes,
    }
    .publish(env);
    Ok(())
}

fn change_supply(env: &Env, delta: Delta) -> Result<(), NftError> {
    checkpoints::write(env, &History::Supply, delta)?;
    Ok(())
}

fn change_balance(env: &Env, account: &Address, delta: Delta) -> Result<(), NftError> {
    let current = read_balance(env, account);
    let updated = match delta {
        Delta::Add(amount) => current.checked_add(amount),
        Delta::Sub(amount) => current.checked_sub(amount),
    }
    .ok_or(NftError::Overflow)?;
    write_persistent(env, &DataKey::Balance(account.clone()), &updated);
    Ok(())
}

fn is_owner_or_approved(env: &Env, spender: &Address, owner: &Address, token_id: u32) -> bool {
    if spender == owner {
        return true;
    }
    env.storage()
        .persistent()
        .get::<_, Address>(&DataKey::Approved(token_id))
        .map(|approved| approved == *spender)
        .unwrap_or(false)
}

fn read_balance(env: &Env, account: &Address) -> u32 {
    read_persistent(env, &DataKey::Balance(account.clone())).unwrap_or(0u32)
}

fn delegate_of(env: &Env, account: &Address) -> Option<Address> {
    read_persistent(env, &DataKey::Delegate(account.clone()))
}

fn read_owner(env: &Env, token_id: u32) -> Result<Address, NftError> {
    read_persistent(env, &DataKey::Owner(token_id)).ok_or(NftError::TokenNotFound)
}

fn read_admin(env: &Env) -> Result<Address, NftError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(NftError::NotInitialized)
}

fn read_metadata(env: &Env) -> Result<Metadata, NftError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(NftError::NotInitialized)
}
