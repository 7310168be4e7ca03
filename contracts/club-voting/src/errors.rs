//! Error codes returned by the club voting registry.
//!
//! A failed call aborts the invocation, so no partial write is ever
//! committed alongside one of these errors.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the registry admin
    Unauthorized = 1,

    /// Voting is switched off for this election
    ElectionNotActive = 2,

    /// Caller already has a ballot recorded for this election
    AlreadyVoted = 3,

    /// Ledger time is past `start + duration`
    ElectionEnded = 4,

    /// Key to delete or look up does not exist
    NotFound = 5,

    /// No admin has been recorded
    NotInitialized = 6,
}
