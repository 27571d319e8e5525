//! Role rules deciding which views and actions a user is offered.
//!
//! These only hide views and actions. The store itself does not check who is calling.

use serde::Serialize;

use crate::model::{Role, Team, TeamId, User};

/// A top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum NavItem {
    Dashboard,
    Teams,
    Schedule,
    Admin,
}

impl NavItem {
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Teams => "/teams",
            Self::Schedule => "/schedule",
            Self::Admin => "/admin",
        }
    }
}

fn is_management(user: &User) -> bool {
    matches!(user.role, Role::Principal | Role::MasterInCharge)
}

fn coaches(user: &User, team_id: &TeamId) -> bool {
    user.role == Role::Coach && user.assigned_team_id.as_ref() == Some(team_id)
}

/// Add, edit and remove players on `team_id`'s roster.
pub fn can_edit_roster(user: &User, team_id: &TeamId) -> bool {
    is_management(user) || coaches(user, team_id)
}

/// Add events to `team_id`'s schedule. The all-teams calendar is read-only,
/// so there is no variant of this without a team.
pub fn can_manage_schedule(user: &User, team_id: &TeamId) -> bool {
    can_edit_roster(user, team_id)
}

/// Open an attendance session, export or import the roster for `team_id`.
pub fn can_take_attendance(user: &User, team_id: &TeamId) -> bool {
    is_management(user) || user.role == Role::Admin || coaches(user, team_id)
}

/// Edit team details such as the coach name and joined date.
pub fn can_edit_team_details(user: &User) -> bool {
    matches!(user.role, Role::Admin | Role::MasterInCharge)
}

/// Teams listed on the Teams page. Coaches only see their own team.
pub fn visible_teams<'a>(user: &User, teams: &'a [Team]) -> Vec<&'a Team> {
    match user.role {
        Role::Coach => teams
            .iter()
            .filter(|t| user.assigned_team_id.as_ref() == Some(&t.id))
            .collect(),
        _ => teams.iter().collect(),
    }
}

pub fn navigation(user: &User) -> Vec<NavItem> {
    let mut items = vec![NavItem::Dashboard];
    if user.role != Role::Parent {
        items.push(NavItem::Teams);
    }
    items.push(NavItem::Schedule);
    if user.role == Role::Admin {
        items.push(NavItem::Admin);
    }
    items
}
