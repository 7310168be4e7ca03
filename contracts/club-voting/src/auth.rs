//! Admin capture and authorization checks.
//!
//! The registry has a single privileged identity, fixed when the contract is
//! constructed. Every mutating entry point other than `vote` goes through
//! [`require_admin`].

use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;

/// Record the admin. Called once, from the contract constructor.
pub fn initialize_admin(env: &Env, admin: &Address) {
    storage::set_admin(env, admin);
}

/// Get the contract admin address
pub fn get_admin(env: &Env) -> Result<Address, VotingError> {
    storage::get_admin(env).ok_or(VotingError::NotInitialized)
}

/// Verify the caller's identity, then require that it is the admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();

    let admin = get_admin(env)?;
    if *caller == admin {
        Ok(())
    } else {
        Err(VotingError::Unauthorized)
    }
}
