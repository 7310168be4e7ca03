use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::{
    auth,
    errors::VotingError,
    events::{
        AdminInitialized, BallotCast, CandidateAdded, CandidateDeleted, DurationSet,
        ElectionClosed, ElectionStarted,
    },
    storage,
    types::{ElectionInfo, ElectionKey},
};

#[contract]
pub struct ClubVotingContract;

#[contractimpl]
impl ClubVotingContract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Capture the admin. Runs exactly once, at deployment.
    pub fn __constructor(env: Env, admin: Address) {
        auth::initialize_admin(&env, &admin);

        AdminInitialized { admin }.publish(&env);
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        auth::get_admin(&env)
    }

    // ── Candidate roster ─────────────────────────────────────────────────────

    /// Append `name` to the roster of `(club, position)` and reset its tally
    /// to zero.
    ///
    /// Names are not deduplicated: adding the same name twice takes two roster
    /// slots that share one tally.
    pub fn add_candidate(
        env: Env,
        caller: Address,
        club: String,
        name: String,
        position: String,
    ) -> Result<u32, VotingError> {
        auth::require_admin(&env, &caller)?;
        storage::extend_instance(&env);

        let election = ElectionKey::new(club, position);
        let index = storage::push_candidate(&env, &election, &name);
        storage::set_votes(&env, &election, &name, 0);

        log!(&env, "candidate added", name, index);
        CandidateAdded {
            club: election.club,
            position: election.position,
            name,
            index,
        }
        .publish(&env);

        Ok(index)
    }

    /// Remove the vote tally of `name`.
    ///
    /// The roster entry and candidate count are left in place; a later vote
    /// for the same name starts a fresh tally. Fails with `NotFound` when no
    /// tally exists.
    pub fn delete_candidate(
        env: Env,
        caller: Address,
        club: String,
        name: String,
        position: String,
    ) -> Result<(), VotingError> {
        auth::require_admin(&env, &caller)?;
        storage::extend_instance(&env);

        let election = ElectionKey::new(club, position);
        if !storage::remove_votes(&env, &election, &name) {
            return Err(VotingError::NotFound);
        }

        CandidateDeleted {
            club: election.club,
            position: election.position,
            name,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_candidate_count(env: Env, club: String, position: String) -> u32 {
        storage::get_candidate_count(&env, &ElectionKey::new(club, position))
    }

    pub fn get_candidate(
        env: Env,
        club: String,
        position: String,
        index: u32,
    ) -> Result<String, VotingError> {
        storage::get_candidate(&env, &ElectionKey::new(club, position), index)
            .ok_or(VotingError::NotFound)
    }

    /// Full roster in index order, including names whose tally was deleted.
    pub fn get_candidates(env: Env, club: String, position: String) -> Vec<String> {
        let election = ElectionKey::new(club, position);
        let mut names = Vec::new(&env);
        for index in 0..storage::get_candidate_count(&env, &election) {
            if let Some(name) = storage::get_candidate(&env, &election, index) {
                names.push_back(name);
            }
        }
        names
    }

    // ── Election lifecycle ───────────────────────────────────────────────────

    /// Set the window length and (re)open the window at the current ledger
    /// time. Calling this mid-election discards the previous window.
    pub fn set_election_duration(
        env: Env,
        caller: Address,
        club: String,
        position: String,
        duration_seconds: u64,
    ) -> Result<(), VotingError> {
        auth::require_admin(&env, &caller)?;
        storage::extend_instance(&env);

        let election = ElectionKey::new(club, position);
        let now = env.ledger().timestamp();
        storage::set_duration(&env, &election, duration_seconds);
        storage::set_start(&env, &election, now);
        storage::set_active(&env, &election, true);

        DurationSet {
            club: election.club,
            position: election.position,
            start: now,
            duration: duration_seconds,
        }
        .publish(&env);

        Ok(())
    }

    /// Open the window at the current ledger time, keeping the stored
    /// duration (zero if never set).
    pub fn start_election(
        env: Env,
        caller: Address,
        club: String,
        position: String,
    ) -> Result<(), VotingError> {
        auth::require_admin(&env, &caller)?;
        storage::extend_instance(&env);

        let election = ElectionKey::new(club, position);
        let now = env.ledger().timestamp();
        storage::set_start(&env, &election, now);
        storage::set_active(&env, &election, true);

        ElectionStarted {
            club: election.club,
            position: election.position,
            start: now,
        }
        .publish(&env);

        Ok(())
    }

    pub fn end_election(
        env: Env,
        caller: Address,
        club: String,
        position: String,
    ) -> Result<(), VotingError> {
        auth::require_admin(&env, &caller)?;
        storage::extend_instance(&env);

        let election = ElectionKey::new(club, position);
        storage::set_active(&env, &election, false);

        ElectionClosed {
            club: election.club,
            position: election.position,
            timestamp: env.ledger().timestamp(),
        }
        .publish(&env);

        Ok(())
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Record one ballot from `voter` for `candidate_name`.
    ///
    /// Checked in order: the election is active, `voter` has not voted for
    /// this `(club, position)`, and the ledger time is within
    /// `[start, start + duration]`. The candidate does not have to be on the
    /// roster; an unknown name gets a new tally.
    pub fn vote(
        env: Env,
        voter: Address,
        club: String,
        candidate_name: String,
        position: String,
    ) -> Result<(), VotingError> {
        voter.require_auth();

        let election = ElectionKey::new(club, position);

        if !storage::is_active(&env, &election) {
            return Err(VotingError::ElectionNotActive);
        }

        if storage::has_voted(&env, &election, &voter) {
            return Err(VotingError::AlreadyVoted);
        }

        let now = env.ledger().timestamp();
        if now > storage::window_end(&env, &election) {
            return Err(VotingError::ElectionEnded);
        }

        let votes = storage::get_votes(&env, &election, &candidate_name) + 1;
        storage::set_votes(&env, &election, &candidate_name, votes);
        storage::mark_voted(&env, &election, &voter);
        storage::bump_election(&env, &election);
        storage::extend_instance(&env);

        log!(&env, "ballot recorded", voter, candidate_name, votes);
        BallotCast {
            club: election.club,
            position: election.position,
            voter,
            candidate: candidate_name,
        }
        .publish(&env);

        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Current tally; a candidate nobody has voted for reads as zero.
    pub fn get_candidate_votes(
        env: Env,
        club: String,
        candidate_name: String,
        position: String,
    ) -> u64 {
        storage::get_votes(&env, &ElectionKey::new(club, position), &candidate_name)
    }

    pub fn is_election_active(env: Env, club: String, position: String) -> bool {
        storage::is_active(&env, &ElectionKey::new(club, position))
    }

    pub fn get_election_info(env: Env, club: String, position: String) -> ElectionInfo {
        let election = ElectionKey::new(club, position);
        ElectionInfo {
            start: storage::get_start(&env, &election),
            duration: storage::get_duration(&env, &election),
            active: storage::is_active(&env, &election),
        }
    }

    pub fn has_voted(env: Env, club: String, position: String, voter: Address) -> bool {
        storage::has_voted(&env, &ElectionKey::new(club, position), &voter)
    }

    /// Seconds until the window closes; zero once closed or switched off.
    pub fn get_time_remaining(env: Env, club: String, position: String) -> u64 {
        let election = ElectionKey::new(club, position);
        if !storage::is_active(&env, &election) {
            return 0;
        }
        storage::window_end(&env, &election).saturating_sub(env.ledger().timestamp())
    }
}
