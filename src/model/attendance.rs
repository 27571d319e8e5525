use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{AttendanceId, PlayerId, TeamId};

/// A dated presence marker for one player.
///
/// `team_id` duplicates the player's team at the time of marking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// The upsert key: one record per player per day.
    pub fn key(&self) -> (&PlayerId, NaiveDate) {
        (&self.player_id, self.date)
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    /// Next status in the attendance-taker tap cycle.
    ///
    /// Excused is never reached by tapping and falls back to Present.
    pub fn cycle(self) -> Self {
        match self {
            Self::Present => Self::Absent,
            Self::Absent => Self::Late,
            Self::Late | Self::Excused => Self::Present,
        }
    }
}
