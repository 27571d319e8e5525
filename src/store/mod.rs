mod attendance;
mod strict;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::fixtures;
use crate::model::{AttendanceRecord, Player, PlayerId, ScheduleEvent, Team, TeamId};

/// How the store treats malformed writes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WritePolicy {
    /// Store everything as given. Unknown ids are silent no-ops and no field
    /// or reference is checked. Mutations always return `Ok(())`.
    #[default]
    Permissive,
    /// Reject writes with unknown ids, duplicate ids, dangling references or
    /// out-of-range fields. A rejected write leaves the store untouched.
    Strict,
}

/// An owned copy of all four collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub schedule: Vec<ScheduleEvent>,
    pub attendance: Vec<AttendanceRecord>,
}

/// The single source of truth for teams, rosters, schedule and attendance.
///
/// Every collection keeps insertion order. Readers borrow the current
/// contents; each mutation takes `&mut self`, so no reader observes a
/// half-applied write.
///
/// # Examples
///
/// ```
/// use team_roster::{DataStore, TeamId};
///
/// let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let store = DataStore::seeded(today);
/// let rugby = store.players_by_team(&TeamId::from("t1"));
/// assert_eq!(rugby.len(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    teams: Vec<Team>,
    players: Vec<Player>,
    schedule: Vec<ScheduleEvent>,
    attendance: Vec<AttendanceRecord>,
    policy: WritePolicy,
}

impl DataStore {
    /// An empty permissive store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A permissive store holding the demo fixtures, dated relative to `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        Self::from_snapshot(fixtures::seed(today))
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            teams: snapshot.teams,
            players: snapshot.players,
            schedule: snapshot.schedule,
            attendance: snapshot.attendance,
            policy: WritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            teams: self.teams.clone(),
            players: self.players.clone(),
            schedule: self.schedule.clone(),
            attendance: self.attendance.clone(),
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn schedule(&self) -> &[ScheduleEvent] {
        &self.schedule
    }

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    pub fn team(&self, team_id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == team_id)
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == player_id)
    }

    /// Players whose `team_id` matches, in roster order. Unknown teams yield
    /// an empty list.
    pub fn players_by_team(&self, team_id: &TeamId) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| &p.team_id == team_id)
            .collect()
    }

    /// Events whose `team_id` matches, in insertion order.
    pub fn events_by_team(&self, team_id: &TeamId) -> Vec<&ScheduleEvent> {
        self.schedule
            .iter()
            .filter(|e| &e.team_id == team_id)
            .collect()
    }

    /// Append a player. The caller supplies the id.
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.policy == WritePolicy::Strict {
            strict::check_new_player(self, &player)?;
        }
        debug!(player_id = %player.id, team_id = %player.team_id, "adding player");
        self.players.push(player);
        Ok(())
    }

    /// Replace every player carrying `player.id`.
    pub fn update_player(&mut self, player: Player) -> Result<()> {
        if self.policy == WritePolicy::Strict {
            strict::check_player_update(self, &player)?;
        }
        let mut replaced = 0;
        for existing in self.players.iter_mut().filter(|p| p.id == player.id) {
            *existing = player.clone();
            replaced += 1;
        }
        debug!(player_id = %player.id, replaced, "updated player");
        Ok(())
    }

    /// Remove every player carrying `player_id`. Attendance history is kept.
    pub fn delete_player(&mut self, player_id: &PlayerId) -> Result<()> {
        if self.policy == WritePolicy::Strict && self.player(player_id).is_none() {
            return Err(strict::not_found("player", player_id.as_str()));
        }
        let before = self.players.len();
        self.players.retain(|p| &p.id != player_id);
        debug!(
            %player_id,
            removed = before - self.players.len(),
            "deleted player"
        );
        Ok(())
    }

    /// Replace the team carrying `team.id`.
    pub fn update_team(&mut self, team: Team) -> Result<()> {
        if self.policy == WritePolicy::Strict && self.team(&team.id).is_none() {
            return Err(strict::not_found("team", team.id.as_str()));
        }
        let mut replaced = 0;
        for existing in self.teams.iter_mut().filter(|t| t.id == team.id) {
            *existing = team.clone();
            replaced += 1;
        }
        debug!(team_id = %team.id, replaced, "updated team");
        Ok(())
    }

    /// Append a schedule event. The caller supplies the id.
    pub fn add_event(&mut self, event: ScheduleEvent) -> Result<()> {
        if self.policy == WritePolicy::Strict {
            strict::check_new_event(self, &event)?;
        }
        debug!(event_id = %event.id, team_id = %event.team_id, date = %event.date, "adding event");
        self.schedule.push(event);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::error::RosterError;
    use crate::model::{EventKind, PlayerStatus, TeamCategory};

    pub(crate) fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub(crate) fn team(id: &str, name: &str) -> Team {
        Team {
            id: id.into(),
            name: name.to_string(),
            category: TeamCategory::Sports,
            coach_name: format!("Coach {name}"),
            coach_joined_date: None,
            icon: String::new(),
            next_practice: None,
        }
    }

    pub(crate) fn player(id: &str, team_id: &str) -> Player {
        let mut player = Player::blank(id.into(), team_id.into(), date("2023-01-10"));
        player.name = format!("Student {id}");
        player.grade = "10".to_string();
        player
    }

    pub(crate) fn two_team_store() -> DataStore {
        DataStore::from_snapshot(Snapshot {
            teams: vec![team("t1", "Rugby"), team("t2", "Cricket")],
            ..Snapshot::default()
        })
    }

    #[test]
    fn test_players_by_team_after_add() {
        let mut store = two_team_store();
        store.add_player(player("p9", "t1")).unwrap();

        let t1 = store.players_by_team(&"t1".into());
        assert_eq!(t1.len(), 1);
        assert_eq!(t1[0].id.as_str(), "p9");
        assert!(store.players_by_team(&"t2".into()).is_empty());
        assert!(store.players_by_team(&"nope".into()).is_empty());
    }

    #[test]
    fn test_players_by_team_includes_each_member_once() {
        let mut store = two_team_store();
        for (id, team) in [("a", "t2"), ("b", "t1"), ("c", "t2"), ("d", "t1")] {
            store.add_player(player(id, team)).unwrap();
        }
        let ids: Vec<&str> = store
            .players_by_team(&"t1".into())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["b", "d"]);
        assert_eq!(
            store.players_by_team(&"t1".into()),
            store.players_by_team(&"t1".into())
        );
    }

    #[test]
    fn test_events_by_team_is_repeatable() {
        let store = DataStore::seeded(date("2024-03-01"));
        let first = store.events_by_team(&"t2".into());
        let second = store.events_by_team(&"t2".into());
        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
        assert!(store.events_by_team(&"t9".into()).is_empty());
    }

    #[test]
    fn test_add_player_accepts_duplicate_id_when_permissive() {
        let mut store = two_team_store();
        store.add_player(player("p1", "t1")).unwrap();
        store.add_player(player("p1", "ghost-team")).unwrap();
        assert_eq!(store.players().len(), 2);
    }

    #[test]
    fn test_update_player_replaces_in_place() {
        let mut store = two_team_store();
        store.add_player(player("p1", "t1")).unwrap();
        store.add_player(player("p2", "t1")).unwrap();

        let mut changed = player("p1", "t1");
        changed.status = PlayerStatus::Injured;
        changed.attendance_rate = 55;
        store.update_player(changed.clone()).unwrap();

        assert_eq!(store.players()[0], changed);
        assert_eq!(store.players()[1].id.as_str(), "p2");
    }

    #[test]
    fn test_update_missing_player_is_noop() {
        let mut store = two_team_store();
        store.add_player(player("p1", "t1")).unwrap();
        let before = store.players().to_vec();
        store.update_player(player("ghost", "t1")).unwrap();
        assert_eq!(store.players(), before.as_slice());
    }

    #[test]
    fn test_delete_missing_player_is_noop() {
        let mut store = DataStore::seeded(date("2024-03-01"));
        let before = store.players().to_vec();
        store.delete_player(&"ghost-id".into()).unwrap();
        assert_eq!(store.players(), before.as_slice());
    }

    #[test]
    fn test_delete_player_keeps_attendance() {
        let mut store = DataStore::seeded(date("2024-03-01"));
        let child: PlayerId = "p-t1-1".into();
        let history = store.attendance_for_player(&child).len();
        assert!(history > 0);

        store.delete_player(&child).unwrap();
        assert!(store.player(&child).is_none());
        assert_eq!(store.players_by_team(&"t1".into()).len(), 11);
        assert_eq!(store.attendance_for_player(&child).len(), history);
    }

    #[test]
    fn test_update_team_replaces_and_ignores_unknown() {
        let mut store = two_team_store();
        let mut rugby = team("t1", "Rugby");
        rugby.coach_name = "Mr. Silva".to_string();
        rugby.coach_joined_date = Some(date("2020-01-15"));
        store.update_team(rugby.clone()).unwrap();
        assert_eq!(store.team(&"t1".into()), Some(&rugby));

        let before = store.teams().to_vec();
        store.update_team(team("ghost", "Nobody")).unwrap();
        assert_eq!(store.teams(), before.as_slice());
    }

    #[test]
    fn test_strict_rejections_leave_store_untouched() {
        let mut store = two_team_store().with_policy(WritePolicy::Strict);
        store.add_player(player("p1", "t1")).unwrap();
        let before = store.snapshot();

        assert!(matches!(
            store.add_player(player("p1", "t1")),
            Err(RosterError::DuplicateId { kind: "player", .. })
        ));
        assert!(matches!(
            store.add_player(player("p2", "t7")),
            Err(RosterError::InvalidForeignKey { target: "team", .. })
        ));
        let mut over = player("p3", "t1");
        over.attendance_rate = 101;
        assert!(matches!(
            store.add_player(over),
            Err(RosterError::Validation(_))
        ));
        assert!(matches!(
            store.update_player(player("ghost", "t1")),
            Err(RosterError::NotFound { kind: "player", .. })
        ));
        assert!(matches!(
            store.delete_player(&"ghost".into()),
            Err(RosterError::NotFound { .. })
        ));
        assert!(matches!(
            store.update_team(team("ghost", "Nobody")),
            Err(RosterError::NotFound { kind: "team", .. })
        ));

        assert_eq!(store.snapshot(), before);
    }

    fn practice(id: &str, team_id: &str, start: &str, end: &str) -> ScheduleEvent {
        ScheduleEvent {
            id: id.into(),
            team_id: team_id.into(),
            title: "Morning Practice".to_string(),
            date: date("2024-03-04"),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            location: "School Ground".to_string(),
            kind: EventKind::Practice,
        }
    }

    #[test]
    fn test_add_event_appends_without_checks() {
        let mut store = two_team_store();
        store.add_event(practice("e1", "t1", "06:00", "08:00")).unwrap();
        store.add_event(practice("e1", "ghost", "16:00", "00:00")).unwrap();
        assert_eq!(store.schedule().len(), 2);
        assert_eq!(store.events_by_team(&"t1".into()).len(), 1);
    }

    #[test]
    fn test_strict_add_event() {
        let mut store = two_team_store().with_policy(WritePolicy::Strict);
        store.add_event(practice("e1", "t1", "06:00", "08:00")).unwrap();

        assert!(matches!(
            store.add_event(practice("e1", "t2", "06:00", "08:00")),
            Err(RosterError::DuplicateId { kind: "event", .. })
        ));
        assert!(matches!(
            store.add_event(practice("e2", "ghost", "06:00", "08:00")),
            Err(RosterError::InvalidForeignKey { kind: "event", .. })
        ));
        assert!(matches!(
            store.add_event(practice("e3", "t2", "16:00", "00:00")),
            Err(RosterError::Validation(_))
        ));
        assert_eq!(store.schedule().len(), 1);
    }

    #[test]
    fn test_snapshot_roundtrips_through_json() {
        let store = DataStore::seeded(date("2024-03-01"));
        let json = serde_json::to_string(&store.snapshot()).unwrap();
        let restored = DataStore::from_snapshot(serde_json::from_str(&json).unwrap());
        assert_eq!(restored.snapshot(), store.snapshot());
    }
}
