//! Contract events published on every successful state change.
//!
//! Per-election events carry `(club, position)` as topics after the fixed
//! event name so indexers can follow a single election.

use soroban_sdk::{contractevent, Address, String};

#[contractevent(topics = ["init"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminInitialized {
    pub admin: Address,
}

#[contractevent(topics = ["cand_add"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateAdded {
    #[topic]
    pub club: String,
    #[topic]
    pub position: String,
    pub name: String,
    /// Roster slot assigned to the candidate
    pub index: u32,
}

#[contractevent(topics = ["cand_del"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateDeleted {
    #[topic]
    pub club: String,
    #[topic]
    pub position: String,
    pub name: String,
}

#[contractevent(topics = ["duration"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DurationSet {
    #[topic]
    pub club: String,
    #[topic]
    pub position: String,
    pub start: u64,
    pub duration: u64,
}

#[contractevent(topics = ["started"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionStarted {
    #[topic]
    pub club: String,
    #[topic]
    pub position: String,
    pub start: u64,
}

#[contractevent(topics = ["ended"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionClosed {
    #[topic]
    pub club: String,
    #[topic]
    pub position: String,
    pub timestamp: u64,
}

#[contractevent(topics = ["voted"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotCast {
    #[topic]
    pub club: String,
    #[topic]
    pub position: String,
    pub voter: Address,
    pub candidate: String,
}
