//! The assignment engine: orchestrates a pairing run and serves the two
//! read paths.
//!
//! RULES:
//!   - The engine owns the store and the RNG; callers own policy
//!     (who may trigger a run, who may see the full mapping).
//!   - A run's delete + insert + status flip commit together or not at
//!     all. A failed run leaves the previous committed pairing intact.
//!   - Re-running an already-assigned event is allowed and fully
//!     replaces the previous pairing; refusing that is caller policy.

use crate::{
    assignment::{AssignmentDetail, AssignmentRow, SantaView},
    error::{ExchangeError, ExchangeResult},
    event::EventStatus,
    numbering::draw_numbers,
    pairing::derange,
    rng::{ExchangeRng, ShuffleSource},
    store::ExchangeStore,
    types::ParticipantId,
};
use uuid::Uuid;

pub struct ExchangeEngine {
    pub store: ExchangeStore,
    rng: ExchangeRng,
}

impl ExchangeEngine {
    /// Engine with an entropy-seeded RNG, for production runs.
    pub fn new(store: ExchangeStore) -> Self {
        Self {
            store,
            rng: ExchangeRng::from_entropy(),
        }
    }

    /// Engine with a fixed seed. The same seed over the same participant
    /// set reproduces the same pairing (participants are read in id
    /// order), which is how support replays a run.
    pub fn with_seed(store: ExchangeStore, seed: u64) -> Self {
        Self {
            store,
            rng: ExchangeRng::from_seed(seed),
        }
    }

    /// Generate and persist a fresh pairing for the event. Returns the
    /// number of assignments written.
    pub fn run_assignment(&mut self, event_id: &str) -> ExchangeResult<usize> {
        run_assignment_with(&mut self.store, &mut self.rng, event_id)
    }

    /// A participant's own assignment: masked receiver number plus the
    /// receiver's wishlist. `None` when they have no assignment in this
    /// event (joined after the run, or never joined).
    pub fn assignment_for(
        &self,
        event_id: &str,
        participant_id: &str,
    ) -> ExchangeResult<Option<SantaView>> {
        self.store.assignment_for_santa(event_id, participant_id)
    }

    /// The full mapping for the event, both parties resolved, ordered by
    /// receiver number. Intended for administrators; authorization is
    /// enforced by the caller.
    pub fn all_assignments(&self, event_id: &str) -> ExchangeResult<Vec<AssignmentDetail>> {
        self.store.assignments_for_event(event_id)
    }
}

/// One assignment pass with an explicit shuffle source. The engine
/// methods delegate here; tests drive it directly with degenerate
/// sources.
pub fn run_assignment_with(
    store: &mut ExchangeStore,
    rng: &mut impl ShuffleSource,
    event_id: &str,
) -> ExchangeResult<usize> {
    let event = store
        .find_event(event_id)?
        .ok_or_else(|| ExchangeError::EventNotFound {
            event_id: event_id.to_string(),
        })?;

    let participants = store.participants_for_event(event_id)?;
    if participants.len() < 2 {
        return Err(ExchangeError::InsufficientParticipants {
            count: participants.len(),
        });
    }

    let santa_ids: Vec<ParticipantId> = participants
        .iter()
        .map(|p| p.participant_id.clone())
        .collect();
    let receiver_ids = derange(&santa_ids, rng)?;
    let numbers = draw_numbers(santa_ids.len(), rng);

    let rows: Vec<AssignmentRow> = santa_ids
        .iter()
        .zip(receiver_ids.iter())
        .zip(numbers.iter())
        .map(|((santa_id, receiver_id), number)| AssignmentRow {
            assignment_id: Uuid::new_v4().to_string(),
            event_id: event.event_id.clone(),
            santa_id: santa_id.clone(),
            receiver_id: receiver_id.clone(),
            receiver_number: *number,
        })
        .collect();

    store.replace_assignments(event_id, &rows, EventStatus::Assigned)?;
    log::info!("event={event_id}: committed {} assignments", rows.len());
    Ok(rows.len())
}
