//! # Match Outcome
//!
//! An in-memory record of the outcome of a multiplayer match: who won, who
//! lost, who tied, and where each participant placed.
//!
//! A match-reporting subsystem constructs a [`MatchOutcome`] as results come
//! in and hands it off when the match finishes. The record tracks three
//! things per match:
//!
//! - the participant ids, in the order they were first reported
//! - a result classification per participant (win, loss, tie, ...)
//! - a numeric placement per participant (1 for 1st, 2 for 2nd, ...)
//!
//! Lookups are total: asking about a participant that was never reported
//! returns the unset sentinels ([`ParticipantResult::Unset`] and
//! [`PLACEMENT_UNSET`]) rather than failing.
//!
//! ## Core Modules
//!
//! - [`outcome`]: the outcome record, result classifications, and raw-code
//!   conversions
//!
//! ## Example
//!
//! ```
//! use match_outcome::{MatchOutcome, ParticipantResult, PLACEMENT_UNSET};
//!
//! let mut outcome = MatchOutcome::new();
//! outcome.set_participant_result("p_1", ParticipantResult::Win, 1);
//! outcome.set_participant_result("p_2", ParticipantResult::Loss, 2);
//!
//! assert_eq!(outcome.result_for("p_1"), ParticipantResult::Win);
//! assert_eq!(outcome.placement_for("p_2"), 2);
//! assert_eq!(outcome.result_for("p_3"), ParticipantResult::Unset);
//! assert_eq!(outcome.placement_for("p_3"), PLACEMENT_UNSET);
//! ```

/// Match outcome records and result classifications.
pub mod outcome;
pub use outcome::{
    MatchOutcome, OutcomeError, OutcomeResult, PLACEMENT_UNSET, ParticipantResult,
};
