use soroban_sdk::{contracttype, String};

/// Identifies one election lifecycle: a position within a club.
///
/// Used as the leading component of every per-election storage key. Keys are
/// serialised by the host as structured values, so a club or position name
/// containing any separator character cannot alias another election.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionKey {
    pub club: String,
    pub position: String,
}

impl ElectionKey {
    pub fn new(club: String, position: String) -> Self {
        Self { club, position }
    }
}

/// Snapshot of an election window. Absent fields read as zero / inactive.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionInfo {
    /// Ledger timestamp (seconds) the current window opened at
    pub start: u64,
    /// Window length in seconds
    pub duration: u64,
    /// Whether ballots are currently accepted
    pub active: bool,
}
