use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::common::{EventId, TeamId};

/// A dated practice, match or meeting for a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: EventId,
    pub team_id: TeamId,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
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
pub enum EventKind {
    #[default]
    Practice,
    Match,
    Meeting,
}
