//! Single-owner access gate.
//!
//! The owner is kept in instance storage next to the rest of the contract
//! configuration. Callers are expected to have run `require_auth()` on the
//! address they pass in; this module only decides whether that address holds
//! the role.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::CommonError;

// ── Storage Keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");

// ── Validation ───────────────────────────────────────────────────────────────

/// Rejects identities that can never exercise the role.
///
/// Soroban addresses are never null, so the only malformed candidate is the
/// running contract itself.
fn validate_candidate(env: &Env, candidate: &Address) -> Result<(), CommonError> {
    if *candidate == env.current_contract_address() {
        return Err(CommonError::InvalidAddress);
    }
    Ok(())
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Records the initial owner. Only callable internally from `initialize`.
pub fn init_owner(env: &Env, owner: &Address) -> Result<(), CommonError> {
    validate_candidate(env, owner)?;
    env.storage().instance().set(&OWNER, owner);
    Ok(())
}

/// Returns the current owner, if one has been recorded.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Pure predicate: does `caller` hold the owner role right now?
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}

/// Guard used before any owner-only mutation.
///
/// # Errors
/// `NotInitialized` if no owner was ever set, `AccessDenied` if `caller`
/// is someone else.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), CommonError> {
    let owner = get_owner(env).ok_or(CommonError::NotInitialized)?;
    if owner != *caller {
        return Err(CommonError::AccessDenied);
    }
    Ok(())
}

/// Hands the role to `new_owner` in a single step and returns the previous
/// owner so the caller can publish the transfer.
///
/// The caller must have already been authenticated via `require_auth()`.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<Address, CommonError> {
    require_owner(env, caller)?;
    validate_candidate(env, new_owner)?;

    env.storage().instance().set(&OWNER, new_owner);

    Ok(caller.clone())
}
