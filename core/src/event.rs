//! Gift-exchange events and their lifecycle.
//!
//! The engine mutates only `status`, flipping it to `assigned` when a
//! pairing run commits. Everything else on the record is owned by the
//! surrounding application.

use crate::types::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: EventId,
    pub name: String,
    pub budget: f64,
    pub deadline: Option<DateTime<Utc>>,
    pub status: EventStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    Open,
    Closed,
    Assigned,
}

impl EventStatus {
    /// Stable string form, used for the TEXT status column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Assigned => "assigned",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "draft" => Some(Self::Draft),
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "assigned" => Some(Self::Assigned),
            _ => None,
        }
    }
}
