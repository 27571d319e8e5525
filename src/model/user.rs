use serde::{Deserialize, Serialize};

use super::common::{PlayerId, TeamId, UserId};

/// A dashboard account. Roles only decide which views and actions are offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    /// Set for coaches.
    pub assigned_team_id: Option<TeamId>,
    /// Set for parents.
    pub linked_player_id: Option<PlayerId>,
    pub avatar_url: Option<String>,
}

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
pub enum Role {
    Principal,
    #[serde(rename = "Master In-Charge")]
    #[strum(serialize = "Master In-Charge")]
    MasterInCharge,
    Coach,
    Admin,
    Parent,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_role_display_matches_wire_form() {
        assert_eq!(Role::MasterInCharge.to_string(), "Master In-Charge");
        assert_eq!(Role::from_str("Master In-Charge").unwrap(), Role::MasterInCharge);
        assert_eq!(
            serde_json::to_string(&Role::MasterInCharge).unwrap(),
            "\"Master In-Charge\""
        );
        assert!(Role::from_str("Janitor").is_err());
    }
}
