use thiserror::Error;

/// everything that can go wrong in the core.
///
/// ruin (bankroll depletion) is deliberately absent: a busted session is an
/// expected outcome of the modeled process and is recorded as data on the
/// session itself, not raised as a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// invalid probability law, payout schedule, or tuning parameter.
    /// fatal at model construction, never retried.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// a policy staked a negative amount or more than the current bankroll.
    /// treated as a programming error in the policy and surfaced immediately
    /// rather than silently clamped.
    #[error("invalid bet in session {session} round {round}: {reason}")]
    InvalidBet {
        session: usize,
        round: usize,
        reason: String,
    },

    /// a comparison was requested on a sample too small to test.
    /// recoverable by the caller: run more sessions.
    #[error("insufficient data in {set}: have {have} sessions, need {need}")]
    InsufficientData {
        set: String,
        have: usize,
        need: usize,
    },
}
