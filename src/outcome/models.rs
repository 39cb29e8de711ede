//! Match outcome data models.

use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

use super::errors::{OutcomeError, OutcomeResult};

/// Placement value meaning "no placement recorded" for a participant.
pub const PLACEMENT_UNSET: i32 = -1;

/// Coarse result classification for a single participant.
///
/// The discriminants are the raw codes the surrounding reporting layer moves
/// these values around as; see [`ParticipantResult::code`] and
/// [`ParticipantResult::from_code`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ParticipantResult {
    /// No result has been recorded
    #[default]
    Unset = -1,
    /// A result was reported, but the participant neither won, lost nor tied
    None = 0,
    /// The participant won the match
    Win = 1,
    /// The participant lost the match
    Loss = 2,
    /// The participant tied with at least one other participant
    Tie = 3,
}

impl ParticipantResult {
    /// Raw integer code for this classification
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Map a raw integer code back to a result classification
    pub fn from_code(code: i32) -> OutcomeResult<Self> {
        match code {
            -1 => Ok(Self::Unset),
            0 => Ok(Self::None),
            1 => Ok(Self::Win),
            2 => Ok(Self::Loss),
            3 => Ok(Self::Tie),
            unknown => Err(OutcomeError::UnknownResultCode(unknown)),
        }
    }
}

impl fmt::Display for ParticipantResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Unset => "Unset",
            Self::None => "None",
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Tie => "Tie",
        };
        write!(f, "{repr}")
    }
}

impl From<ParticipantResult> for i32 {
    fn from(result: ParticipantResult) -> Self {
        result.code()
    }
}

impl TryFrom<i32> for ParticipantResult {
    type Error = OutcomeError;

    fn try_from(code: i32) -> OutcomeResult<Self> {
        Self::from_code(code)
    }
}

/// The outcome of a multiplayer match: per-participant result classifications
/// and placements (1 for 1st, 2 for 2nd, ...).
///
/// Participant ids are tracked in the order they were first reported, and
/// each id appears exactly once no matter how often its data is updated.
/// Lookups for ids that were never reported return the unset sentinels
/// instead of failing.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchOutcome {
    participant_ids: Vec<String>,
    placements: HashMap<String, i32>,
    results: HashMap<String, ParticipantResult>,
}

impl MatchOutcome {
    /// Create an empty outcome with no participants
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result for a given participant: whether they won, lost or
    /// tied and, optionally, their placement.
    ///
    /// A first-time id is appended to the participant order; an id seen
    /// before keeps its original position. Both stored fields are overwritten
    /// unconditionally. Use [`PLACEMENT_UNSET`] (or 0) for no placement,
    /// 1 for 1st, 2 for 2nd, etc.
    pub fn set_participant_result(
        &mut self,
        participant_id: &str,
        result: ParticipantResult,
        placement: i32,
    ) {
        if self.participant_ids.iter().any(|id| id == participant_id) {
            debug!("participant {participant_id} already has a recorded outcome, overwriting");
        } else {
            self.participant_ids.push(participant_id.to_string());
        }
        self.placements.insert(participant_id.to_string(), placement);
        self.results.insert(participant_id.to_string(), result);
    }

    /// Sets the result for a participant that has no placement.
    ///
    /// Equivalent to [`Self::set_participant_result`] with
    /// [`PLACEMENT_UNSET`]: any placement previously stored for this
    /// participant is reset to the sentinel, not preserved.
    pub fn set_result(&mut self, participant_id: &str, result: ParticipantResult) {
        self.set_participant_result(participant_id, result, PLACEMENT_UNSET);
    }

    /// Sets the placement for a participant without classifying their result.
    ///
    /// Equivalent to [`Self::set_participant_result`] with
    /// [`ParticipantResult::Unset`]: any result previously stored for this
    /// participant is reset to the sentinel, not preserved.
    pub fn set_placement(&mut self, participant_id: &str, placement: i32) {
        self.set_participant_result(participant_id, ParticipantResult::Unset, placement);
    }

    /// Participant ids in first-insertion order
    pub fn participant_ids(&self) -> &[String] {
        &self.participant_ids
    }

    /// Returns the result recorded for the given participant id, or
    /// [`ParticipantResult::Unset`] if the id is unknown.
    pub fn result_for(&self, participant_id: &str) -> ParticipantResult {
        self.results
            .get(participant_id)
            .copied()
            .unwrap_or(ParticipantResult::Unset)
    }

    /// Returns the placement recorded for the given participant id, or
    /// [`PLACEMENT_UNSET`] if the id is unknown.
    pub fn placement_for(&self, participant_id: &str) -> i32 {
        self.placements
            .get(participant_id)
            .copied()
            .unwrap_or(PLACEMENT_UNSET)
    }

    /// Number of participants recorded in this outcome
    pub fn len(&self) -> usize {
        self.participant_ids.len()
    }

    /// Whether any participant has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.participant_ids.is_empty()
    }

    /// Participant ids whose recorded result equals `result`, in insertion
    /// order.
    pub fn participants_with_result(&self, result: ParticipantResult) -> Vec<&str> {
        self.participant_ids
            .iter()
            .filter(|id| self.result_for(id) == result)
            .map(String::as_str)
            .collect()
    }

    /// Participant ids holding a positive placement, best placement first.
    ///
    /// Participants sharing a placement keep their insertion order relative
    /// to each other. Placements are returned as stored: nothing requires
    /// them to be unique or contiguous. Ids with an unset (or 0) placement
    /// are excluded.
    pub fn ranked_participants(&self) -> Vec<&str> {
        let mut ranked: Vec<&str> = self
            .participant_ids
            .iter()
            .filter(|id| self.placement_for(id) >= 1)
            .map(String::as_str)
            .collect();
        ranked.sort_by_key(|id| self.placement_for(id));
        ranked
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[MatchOutcome")?;
        for participant_id in &self.participant_ids {
            write!(
                f,
                " {}->({},{})",
                participant_id,
                self.result_for(participant_id),
                self.placement_for(participant_id)
            )?;
        }
        write!(f, "]")
    }
}
