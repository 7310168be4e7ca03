use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::ElectionKey;

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// ~5s per ledger, so one day is 17,280 ledgers.
const DAY_IN_LEDGERS: u32 = 17_280;

// The admin, the roster, tallies and ballots are kept for the life of the
// registry. Entries are topped back up to a year once less than
// `LIFETIME_THRESHOLD` ledgers remain; the host clamps to the network maximum.
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 365 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 365 * DAY_IN_LEDGERS;
const LIFETIME_THRESHOLD: u32 = 335 * DAY_IN_LEDGERS;

/// Storage keys
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address captured at deployment, immutable afterwards
    Admin,
    /// (election, candidate name) -> u64 vote tally
    CandidateVotes(ElectionKey, String),
    /// (election, roster index) -> candidate name
    CandidateList(ElectionKey, u32),
    /// election -> u32 next roster index, equal to roster size
    CandidateCount(ElectionKey),
    /// election -> u64 ledger timestamp the window opened at
    ElectionStart(ElectionKey),
    /// election -> u64 window length in seconds
    ElectionDuration(ElectionKey),
    /// election -> bool voting switch
    ElectionActive(ElectionKey),
    /// (election, voter) -> bool ballot marker, write-once
    Voter(ElectionKey, Address),
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn bump_if_present(env: &Env, key: &DataKey) {
    if env.storage().persistent().has(key) {
        bump_persistent(env, key);
    }
}

/// Keep the contract instance, and with it the admin, alive. Called by every
/// state-changing entry point.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn write_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance(env);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

// ── Candidate roster ─────────────────────────────────────────────────────────

pub fn get_candidate_count(env: &Env, election: &ElectionKey) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::CandidateCount(election.clone()))
        .unwrap_or(0)
}

pub fn get_candidate(env: &Env, election: &ElectionKey, index: u32) -> Option<String> {
    env.storage()
        .persistent()
        .get(&DataKey::CandidateList(election.clone(), index))
}

/// Appends `name` at the next free roster index and returns that index.
pub fn push_candidate(env: &Env, election: &ElectionKey, name: &String) -> u32 {
    let index = get_candidate_count(env, election);
    write_persistent(env, &DataKey::CandidateList(election.clone(), index), name);
    write_persistent(env, &DataKey::CandidateCount(election.clone()), &(index + 1));
    index
}

// ── Tallies ──────────────────────────────────────────────────────────────────

pub fn get_votes(env: &Env, election: &ElectionKey, name: &String) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::CandidateVotes(election.clone(), name.clone()))
        .unwrap_or(0)
}

pub fn set_votes(env: &Env, election: &ElectionKey, name: &String, votes: u64) {
    write_persistent(
        env,
        &DataKey::CandidateVotes(election.clone(), name.clone()),
        &votes,
    );
}

/// Removes a tally. Returns `false` when there was nothing to remove.
pub fn remove_votes(env: &Env, election: &ElectionKey, name: &String) -> bool {
    let key = DataKey::CandidateVotes(election.clone(), name.clone());
    if !env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().remove(&key);
    true
}

// ── Election window ──────────────────────────────────────────────────────────

pub fn get_start(env: &Env, election: &ElectionKey) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ElectionStart(election.clone()))
        .unwrap_or(0)
}

pub fn set_start(env: &Env, election: &ElectionKey, start: u64) {
    write_persistent(env, &DataKey::ElectionStart(election.clone()), &start);
}

pub fn get_duration(env: &Env, election: &ElectionKey) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ElectionDuration(election.clone()))
        .unwrap_or(0)
}

pub fn set_duration(env: &Env, election: &ElectionKey, duration: u64) {
    write_persistent(env, &DataKey::ElectionDuration(election.clone()), &duration);
}

pub fn is_active(env: &Env, election: &ElectionKey) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::ElectionActive(election.clone()))
        .unwrap_or(false)
}

pub fn set_active(env: &Env, election: &ElectionKey, active: bool) {
    write_persistent(env, &DataKey::ElectionActive(election.clone()), &active);
}

/// Extend every per-election entry that exists, so a window that is still
/// being voted in cannot lapse between admin writes.
pub fn bump_election(env: &Env, election: &ElectionKey) {
    bump_if_present(env, &DataKey::ElectionActive(election.clone()));
    bump_if_present(env, &DataKey::ElectionStart(election.clone()));
    bump_if_present(env, &DataKey::ElectionDuration(election.clone()));
    bump_if_present(env, &DataKey::CandidateCount(election.clone()));
}

/// Last timestamp (inclusive) at which a ballot is accepted.
pub fn window_end(env: &Env, election: &ElectionKey) -> u64 {
    get_start(env, election).saturating_add(get_duration(env, election))
}

// ── Ballots ──────────────────────────────────────────────────────────────────

pub fn has_voted(env: &Env, election: &ElectionKey, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(election.clone(), voter.clone()))
}

pub fn mark_voted(env: &Env, election: &ElectionKey, voter: &Address) {
    write_persistent(env, &DataKey::Voter(election.clone(), voter.clone()), &true);
}
