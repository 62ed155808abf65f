//! Shared primitive types used across the exchange engine.

/// Identifier for a gift-exchange event.
pub type EventId = String;

/// Identifier for a registered participant.
pub type ParticipantId = String;
