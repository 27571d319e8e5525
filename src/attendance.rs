use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::model::{AttendanceRecord, AttendanceStatus, PlayerId, TeamId};
use crate::store::DataStore;

/// One attendance-taking session: a team's roster on a single day.
///
/// Everyone starts as Present. The sheet is saved as a single
/// [`DataStore::mark_attendance`] batch, so re-taking attendance for the same
/// day replaces the earlier session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceSheet {
    team_id: TeamId,
    date: NaiveDate,
    entries: Vec<(PlayerId, AttendanceStatus)>,
}

impl AttendanceSheet {
    pub fn open(store: &DataStore, team_id: &TeamId, date: NaiveDate) -> Self {
        let entries = store
            .players_by_team(team_id)
            .into_iter()
            .map(|p| (p.id.clone(), AttendanceStatus::Present))
            .collect();
        Self {
            team_id: team_id.clone(),
            date,
            entries,
        }
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn entries(&self) -> &[(PlayerId, AttendanceStatus)] {
        &self.entries
    }

    /// True when the team has nobody to mark.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn status(&self, player_id: &PlayerId) -> Option<AttendanceStatus> {
        self.entries
            .iter()
            .find(|(id, _)| id == player_id)
            .map(|(_, status)| *status)
    }

    /// Advance a player along Present → Absent → Late → Present and return
    /// the new status. `None` if the player is not on this sheet.
    pub fn toggle(&mut self, player_id: &PlayerId) -> Option<AttendanceStatus> {
        let (_, status) = self.entries.iter_mut().find(|(id, _)| id == player_id)?;
        *status = status.cycle();
        Some(*status)
    }

    /// Set a status directly, e.g. Excused. Returns false if the player is not
    /// on this sheet.
    pub fn set(&mut self, player_id: &PlayerId, status: AttendanceStatus) -> bool {
        match self.entries.iter_mut().find(|(id, _)| id == player_id) {
            Some(entry) => {
                entry.1 = status;
                true
            }
            None => false,
        }
    }

    /// Mark everyone Present again.
    pub fn reset(&mut self) {
        for (_, status) in &mut self.entries {
            *status = AttendanceStatus::Present;
        }
    }

    /// The batch to upsert, in roster order. Record ids are `{player_id}-{date}`.
    pub fn into_records(self) -> Vec<AttendanceRecord> {
        let Self {
            team_id,
            date,
            entries,
        } = self;
        entries
            .into_iter()
            .map(|(player_id, status)| AttendanceRecord {
                id: format!("{player_id}-{date}").into(),
                player_id,
                team_id: team_id.clone(),
                date,
                status,
            })
            .collect()
    }

    pub fn save(self, store: &mut DataStore) -> Result<()> {
        debug!(
            team_id = %self.team_id,
            date = %self.date,
            players = self.entries.len(),
            "saving attendance sheet"
        );
        store.mark_attendance(self.into_records())
    }
}
