//! Match outcome records: per-participant results and placement rankings.
//!
//! This module implements:
//! - The [`MatchOutcome`] record aggregating a result classification and a
//!   placement for each participant, in first-insertion order
//! - The [`ParticipantResult`] classification and its raw integer codes
//! - Sentinel-based lookups that default instead of failing
//!
//! ## Example
//!
//! ```
//! use match_outcome::outcome::{MatchOutcome, ParticipantResult};
//!
//! let mut outcome = MatchOutcome::new();
//! outcome.set_participant_result("p_1", ParticipantResult::Tie, 1);
//! outcome.set_participant_result("p_2", ParticipantResult::Tie, 1);
//!
//! assert_eq!(outcome.participant_ids(), ["p_1", "p_2"]);
//! assert_eq!(
//!     outcome.participants_with_result(ParticipantResult::Tie),
//!     vec!["p_1", "p_2"],
//! );
//! ```

pub mod errors;
pub mod models;

pub use errors::{OutcomeError, OutcomeResult};
pub use models::{MatchOutcome, PLACEMENT_UNSET, ParticipantResult};
