use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::TeamId;

/// A school sports team or activity group with an assigned coach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub category: TeamCategory,
    pub coach_name: String,
    pub coach_joined_date: Option<NaiveDate>,
    pub icon: String,
    pub next_practice: Option<String>,
}

/// Whether a team is a competitive sport or an extracurricular activity.
#[derive(
    Debug,
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
pub enum TeamCategory {
    Sports,
    Activity,
}
