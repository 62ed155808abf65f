use crate::types::{EventId, ParticipantId};
use serde::{Deserialize, Serialize};

/// A registered participant as stored. Registration and profile editing
/// are owned by the surrounding application; the engine only reads these
/// rows. A participant belongs to at most one event at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub participant_id: ParticipantId,
    pub name: String,
    pub email: String,
    pub wish: String,
    pub wish_link: Option<String>,
    pub event_id: Option<EventId>,
}
