use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{PlayerId, TeamId};

/// A student on a team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub name: String,
    pub grade: String,
    pub position: String,
    /// Primary parent contact number.
    pub contact_parent: String,
    pub dob: Option<NaiveDate>,
    pub joined_date: NaiveDate,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub performance_notes: Option<String>,
    pub medical_notes: Option<String>,
    /// Displayed attendance percentage. Stored as entered, never recomputed
    /// from attendance history.
    pub attendance_rate: u8,
    pub status: PlayerStatus,
}

impl Player {
    /// A blank roster entry for `team_id`, as the add-player form starts out.
    pub fn blank(id: PlayerId, team_id: TeamId, joined_date: NaiveDate) -> Self {
        Self {
            id,
            team_id,
            name: String::new(),
            grade: String::new(),
            position: "Member".to_string(),
            contact_parent: String::new(),
            dob: None,
            joined_date,
            emergency_contact_name: String::new(),
            emergency_contact_phone: String::new(),
            performance_notes: None,
            medical_notes: None,
            attendance_rate: 100,
            status: PlayerStatus::Active,
        }
    }
}

/// Availability of a player.
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
pub enum PlayerStatus {
    #[default]
    Active,
    Injured,
    Inactive,
}
