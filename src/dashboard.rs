//! Aggregates shown on the management and parent dashboards.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{
    AttendanceRecord, AttendanceStatus, Player, PlayerStatus, Role, ScheduleEvent, Team, TeamId,
    User,
};
use crate::store::DataStore;

/// Number of teams in the attendance ranking chart.
pub const RANKING_LIMIT: usize = 5;
/// Number of recent attendance records on the parent dashboard.
pub const RECENT_ATTENDANCE_LIMIT: usize = 5;

/// Headline counters for the management dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_players: usize,
    pub active_teams: usize,
    /// Present check-ins dated today.
    pub attendance_today: usize,
    /// Events dated today or later.
    pub upcoming_events: usize,
}

impl DashboardStats {
    pub fn compute(store: &DataStore, today: NaiveDate) -> Self {
        Self {
            total_players: store.players().len(),
            active_teams: store.teams().len(),
            attendance_today: store
                .attendance_on(today)
                .iter()
                .filter(|r| r.status == AttendanceStatus::Present)
                .count(),
            upcoming_events: store.schedule().iter().filter(|e| e.date >= today).count(),
        }
    }
}

/// Mean stored attendance rate of one team's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamAttendance {
    pub team_id: TeamId,
    pub name: String,
    pub attendance: u8,
}

/// Teams ranked by the rounded mean of their players' stored attendance rate,
/// best first, at most `limit` entries. Empty teams rank at 0; ties keep team order.
pub fn attendance_by_team(store: &DataStore, limit: usize) -> Vec<TeamAttendance> {
    store
        .teams()
        .iter()
        .map(|team| {
            let rates: Vec<u32> = store
                .players_by_team(&team.id)
                .iter()
                .map(|p| u32::from(p.attendance_rate))
                .collect();
            let mean = rates.iter().sum::<u32>() as f64 / rates.len().max(1) as f64;
            TeamAttendance {
                team_id: team.id.clone(),
                name: team.name.clone(),
                attendance: mean.round() as u8,
            }
        })
        .sorted_by(|a, b| b.attendance.cmp(&a.attendance))
        .take(limit)
        .collect()
}

/// Player counts per status, in `Active, Injured, Inactive` order.
pub fn status_distribution(store: &DataStore) -> Vec<(PlayerStatus, usize)> {
    let counts = store.players().iter().map(|p| p.status).counts();
    PlayerStatus::iter()
        .map(|status| (status, counts.get(&status).copied().unwrap_or(0)))
        .collect()
}

/// Events ordered by date, optionally limited to one team. Same-day events
/// keep insertion order.
pub fn sorted_schedule<'a>(
    store: &'a DataStore,
    team_id: Option<&TeamId>,
) -> Vec<&'a ScheduleEvent> {
    let events = match team_id {
        Some(team_id) => store.events_by_team(team_id),
        None => store.schedule().iter().collect(),
    };
    events.into_iter().sorted_by_key(|e| e.date).collect()
}

/// What a parent sees about their linked child.
#[derive(Debug, Clone, Serialize)]
pub struct ParentSummary<'a> {
    pub child: &'a Player,
    pub team: Option<&'a Team>,
    /// Newest first.
    pub recent_attendance: Vec<&'a AttendanceRecord>,
    pub next_event: Option<&'a ScheduleEvent>,
}

/// The parent dashboard for `user`. `None` unless `user` is a parent linked
/// to a player present in the store.
pub fn parent_summary<'a>(
    store: &'a DataStore,
    user: &User,
    today: NaiveDate,
) -> Option<ParentSummary<'a>> {
    if user.role != Role::Parent {
        return None;
    }
    let child = store.player(user.linked_player_id.as_ref()?)?;

    let recent_attendance = store
        .attendance_for_player(&child.id)
        .into_iter()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .take(RECENT_ATTENDANCE_LIMIT)
        .collect();

    let next_event = store
        .events_by_team(&child.team_id)
        .into_iter()
        .filter(|e| e.date >= today)
        .min_by_key(|e| e.date);

    Some(ParentSummary {
        child,
        team: store.team(&child.team_id),
        recent_attendance,
        next_event,
    })
}
