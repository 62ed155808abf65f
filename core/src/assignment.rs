//! Assignment rows and the two read-path views built from them.

use crate::types::{EventId, ParticipantId};
use serde::{Deserialize, Serialize};

/// One persisted santa → receiver pairing. Rows are created in bulk
/// inside a single transaction and never mutated afterwards; a re-run
/// replaces the event's whole row set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub assignment_id: String,
    pub event_id: EventId,
    pub santa_id: ParticipantId,
    pub receiver_id: ParticipantId,
    pub receiver_number: u32,
}

/// What a santa may see of their own assignment: the masked receiver
/// number and the receiver's wishlist. Deliberately carries no receiver
/// identity fields, so this path cannot leak id, name, or email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SantaView {
    pub receiver_number: u32,
    pub wish: String,
    pub wish_link: Option<String>,
}

/// The administrator's view of one pairing: both parties in full, plus
/// the receiver's wishlist and masked number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDetail {
    pub santa_id: ParticipantId,
    pub santa_name: String,
    pub santa_email: String,
    pub receiver_id: ParticipantId,
    pub receiver_name: String,
    pub receiver_email: String,
    pub receiver_number: u32,
    pub wish: String,
    pub wish_link: Option<String>,
}
