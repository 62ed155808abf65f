//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! The engine calls store methods, it never executes SQL directly.

use crate::{
    assignment::{AssignmentDetail, AssignmentRow, SantaView},
    error::ExchangeResult,
    event::{EventRecord, EventStatus},
    participant::ParticipantRecord,
};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

pub struct ExchangeStore {
    conn: Connection,
}

impl ExchangeStore {
    /// Open (or create) the exchange database at `path`.
    pub fn open(path: &str) -> ExchangeResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ExchangeResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> ExchangeResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_exchange.sql"))?;
        Ok(())
    }

    // ── Event ──────────────────────────────────────────────────

    pub fn insert_event(&self, event: &EventRecord) -> ExchangeResult<()> {
        self.conn.execute(
            "INSERT INTO event (event_id, name, budget, deadline, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &event.event_id,
                &event.name,
                event.budget,
                event.deadline.map(|d| d.to_rfc3339()),
                event.status.as_str(),
            ],
        )?;
        Ok(())
    }

    pub fn find_event(&self, event_id: &str) -> ExchangeResult<Option<EventRecord>> {
        self.conn
            .query_row(
                "SELECT event_id, name, budget, deadline, status
                 FROM event WHERE event_id = ?1",
                params![event_id],
                event_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn set_event_status(&self, event_id: &str, status: EventStatus) -> ExchangeResult<()> {
        self.conn.execute(
            "UPDATE event SET status = ?1 WHERE event_id = ?2",
            params![status.as_str(), event_id],
        )?;
        Ok(())
    }

    // ── Participant ────────────────────────────────────────────

    pub fn insert_participant(&self, p: &ParticipantRecord) -> ExchangeResult<()> {
        self.conn.execute(
            "INSERT INTO participant (participant_id, name, email, wish, wish_link, event_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &p.participant_id,
                &p.name,
                &p.email,
                &p.wish,
                p.wish_link.as_deref(),
                p.event_id.as_deref(),
            ],
        )?;
        Ok(())
    }

    /// Link a participant to an event. A participant belongs to at most
    /// one event, so this overwrites any previous membership.
    pub fn join_event(&self, participant_id: &str, event_id: &str) -> ExchangeResult<()> {
        self.conn.execute(
            "UPDATE participant SET event_id = ?1 WHERE participant_id = ?2",
            params![event_id, participant_id],
        )?;
        Ok(())
    }

    pub fn leave_event(&self, participant_id: &str) -> ExchangeResult<()> {
        self.conn.execute(
            "UPDATE participant SET event_id = NULL WHERE participant_id = ?1",
            params![participant_id],
        )?;
        Ok(())
    }

    /// Participants linked to an event, ordered by id so that a fixed
    /// RNG seed reproduces the same pairing.
    pub fn participants_for_event(&self, event_id: &str) -> ExchangeResult<Vec<ParticipantRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT participant_id, name, email, wish, wish_link, event_id
             FROM participant WHERE event_id = ?1
             ORDER BY participant_id ASC",
        )?;
        let rows = stmt.query_map(params![event_id], |row| {
            Ok(ParticipantRecord {
                participant_id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                wish: row.get(3)?,
                wish_link: row.get(4)?,
                event_id: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ── Assignment ─────────────────────────────────────────────

    /// Replace the event's assignment set and flip its status, as one
    /// transaction: delete prior rows, bulk-insert the new ones, update
    /// the status, commit. Commit is the only path to visibility;
    /// dropping the transaction on any earlier failure rolls every step
    /// back, leaving prior rows and the old status untouched.
    pub fn replace_assignments(
        &mut self,
        event_id: &str,
        rows: &[AssignmentRow],
        status: EventStatus,
    ) -> ExchangeResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM assignment WHERE event_id = ?1",
            params![event_id],
        )?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO assignment
                     (assignment_id, event_id, santa_id, receiver_id, receiver_number)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(params![
                    &row.assignment_id,
                    &row.event_id,
                    &row.santa_id,
                    &row.receiver_id,
                    row.receiver_number,
                ])?;
            }
        }
        tx.execute(
            "UPDATE event SET status = ?1 WHERE event_id = ?2",
            params![status.as_str(), event_id],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// A participant's outgoing assignment, masked: receiver number and
    /// wishlist only. None when the participant has no assignment in the
    /// event, which is a normal result rather than an error.
    pub fn assignment_for_santa(
        &self,
        event_id: &str,
        participant_id: &str,
    ) -> ExchangeResult<Option<SantaView>> {
        self.conn
            .query_row(
                "SELECT a.receiver_number, r.wish, r.wish_link
                 FROM assignment a
                 JOIN participant r ON a.receiver_id = r.participant_id
                 WHERE a.event_id = ?1 AND a.santa_id = ?2",
                params![event_id, participant_id],
                |row| {
                    Ok(SantaView {
                        receiver_number: row.get::<_, i64>(0)? as u32,
                        wish: row.get(1)?,
                        wish_link: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Every assignment for the event with both parties resolved,
    /// ordered ascending by receiver number. Administrator consumption;
    /// access control is the caller's concern.
    pub fn assignments_for_event(&self, event_id: &str) -> ExchangeResult<Vec<AssignmentDetail>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.participant_id, s.name, s.email,
                    r.participant_id, r.name, r.email,
                    a.receiver_number, r.wish, r.wish_link
             FROM assignment a
             JOIN participant s ON a.santa_id = s.participant_id
             JOIN participant r ON a.receiver_id = r.participant_id
             WHERE a.event_id = ?1
             ORDER BY a.receiver_number ASC",
        )?;
        let rows = stmt.query_map(params![event_id], |row| {
            Ok(AssignmentDetail {
                santa_id: row.get(0)?,
                santa_name: row.get(1)?,
                santa_email: row.get(2)?,
                receiver_id: row.get(3)?,
                receiver_name: row.get(4)?,
                receiver_email: row.get(5)?,
                receiver_number: row.get::<_, i64>(6)? as u32,
                wish: row.get(7)?,
                wish_link: row.get(8)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ── Test / summary helpers ─────────────────────────────────

    pub fn assignment_count(&self, event_id: &str) -> ExchangeResult<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM assignment WHERE event_id = ?1",
                params![event_id],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    /// Raw assignment rows for an event, ordered by receiver number.
    /// Invariant checks in tests read these directly.
    pub fn assignment_rows(&self, event_id: &str) -> ExchangeResult<Vec<AssignmentRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT assignment_id, event_id, santa_id, receiver_id, receiver_number
             FROM assignment WHERE event_id = ?1
             ORDER BY receiver_number ASC",
        )?;
        let rows = stmt.query_map(params![event_id], |row| {
            Ok(AssignmentRow {
                assignment_id: row.get(0)?,
                event_id: row.get(1)?,
                santa_id: row.get(2)?,
                receiver_id: row.get(3)?,
                receiver_number: row.get::<_, i64>(4)? as u32,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn event_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<EventRecord> {
    let deadline: Option<String> = row.get(3)?;
    let status_text: String = row.get(4)?;
    let status = EventStatus::parse(&status_text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            format!("unknown event status '{status_text}'").into(),
        )
    })?;
    Ok(EventRecord {
        event_id: row.get(0)?,
        name: row.get(1)?,
        budget: row.get(2)?,
        deadline: deadline.and_then(|d| {
            DateTime::parse_from_rfc3339(&d)
                .ok()
                .map(|d| d.with_timezone(&Utc))
        }),
        status,
    })
}
