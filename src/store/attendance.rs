use std::collections::HashSet;

use chrono::NaiveDate;
use itertools::Itertools;
use tracing::debug;

use super::{strict, DataStore, WritePolicy};
use crate::error::Result;
use crate::model::{AttendanceRecord, AttendanceStatus, PlayerId};

impl DataStore {
    /// Upsert a batch of attendance keyed by `(player_id, date)`.
    ///
    /// Any stored record sharing a key with the batch is dropped, then the
    /// batch is appended. If the batch repeats a key only its last occurrence
    /// is kept (strict stores reject such a batch instead).
    pub fn mark_attendance(&mut self, records: Vec<AttendanceRecord>) -> Result<()> {
        if self.policy == WritePolicy::Strict {
            strict::check_attendance_batch(self, &records)?;
        }

        let submitted = records.len();
        let incoming = keep_last_per_key(records);
        let before = self.attendance.len();
        {
            let keys: HashSet<(&PlayerId, NaiveDate)> =
                incoming.iter().map(AttendanceRecord::key).collect();
            self.attendance.retain(|r| !keys.contains(&r.key()));
        }
        let replaced = before - self.attendance.len();

        debug!(
            submitted,
            kept = incoming.len(),
            replaced,
            "marking attendance"
        );
        self.attendance.extend(incoming);
        Ok(())
    }

    /// All records for one player, in stored order.
    pub fn attendance_for_player(&self, player_id: &PlayerId) -> Vec<&AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|r| &r.player_id == player_id)
            .collect()
    }

    /// All records dated `date`, in stored order.
    pub fn attendance_on(&self, date: NaiveDate) -> Vec<&AttendanceRecord> {
        self.attendance.iter().filter(|r| r.date == date).collect()
    }

    /// Attendance percentage computed from history rather than the stored
    /// `Player::attendance_rate`.
    ///
    /// Present and Late count as attended, Absent as missed; Excused days are
    /// left out. Returns `None` when there is nothing to count.
    pub fn derived_attendance_rate(&self, player_id: &PlayerId) -> Option<u8> {
        let counts = self
            .attendance
            .iter()
            .filter(|r| &r.player_id == player_id)
            .map(|r| r.status)
            .counts();
        let count = |status| counts.get(&status).copied().unwrap_or(0);

        let attended = count(AttendanceStatus::Present) + count(AttendanceStatus::Late);
        let total = attended + count(AttendanceStatus::Absent);
        if total == 0 {
            return None;
        }
        Some((attended as f64 * 100.0 / total as f64).round() as u8)
    }
}

/// Drop earlier duplicates of a `(player_id, date)` key, keeping the order of
/// the surviving records.
fn keep_last_per_key(records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    let mut kept: Vec<AttendanceRecord> = records
        .into_iter()
        .rev()
        .unique_by(|r| (r.player_id.clone(), r.date))
        .collect();
    kept.reverse();
    kept
}
