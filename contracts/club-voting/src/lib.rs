#![no_std]
//! # Club Voting Registry
//!
//! On-ledger registry for club elections. The admin captured at deployment
//! manages candidate rosters and election windows per `(club, position)`;
//! any authenticated address may cast one vote per `(club, position)` while
//! the window is open.
//!
//! ## Modules
//!
//! - `registry` - the contract entry points
//! - `auth` - admin capture and checks
//! - `storage` - persisted keys and typed accessors
//! - `types` - composite keys and query results
//! - `events` - contract events
//! - `errors` - the contract error codes

mod auth;
mod errors;
mod events;
mod registry;
mod storage;
mod types;

pub use errors::VotingError;
pub use events::{
    AdminInitialized, BallotCast, CandidateAdded, CandidateDeleted, DurationSet, ElectionClosed,
    ElectionStarted,
};
pub use registry::{ClubVotingContract, ClubVotingContractClient};
pub use storage::DataKey;
pub use types::{ElectionInfo, ElectionKey};
