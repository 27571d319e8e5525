use std::collections::HashSet;

use tracing::warn;

use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::{AttendanceRecord, Player, ScheduleEvent, TeamId};

pub(super) fn not_found(kind: &'static str, id: &str) -> RosterError {
    warn!(kind, id, "rejected write to missing record");
    RosterError::NotFound {
        kind,
        id: id.to_owned(),
    }
}

fn rejected(err: RosterError) -> RosterError {
    warn!(error = %err, "rejected write");
    err
}

fn require_team(store: &DataStore, kind: &'static str, team_id: &TeamId) -> Result<()> {
    if store.team(team_id).is_none() {
        return Err(rejected(RosterError::InvalidForeignKey {
            kind,
            target: "team",
            id: team_id.to_string(),
        }));
    }
    Ok(())
}

fn check_player_fields(player: &Player) -> Result<()> {
    if player.attendance_rate > 100 {
        return Err(rejected(RosterError::Validation(format!(
            "attendance rate {} for player {} is above 100",
            player.attendance_rate, player.id
        ))));
    }
    Ok(())
}

pub(super) fn check_new_player(store: &DataStore, player: &Player) -> Result<()> {
    if store.player(&player.id).is_some() {
        return Err(rejected(RosterError::DuplicateId {
            kind: "player",
            id: player.id.to_string(),
        }));
    }
    require_team(store, "player", &player.team_id)?;
    check_player_fields(player)
}

pub(super) fn check_player_update(store: &DataStore, player: &Player) -> Result<()> {
    if store.player(&player.id).is_none() {
        return Err(not_found("player", player.id.as_str()));
    }
    require_team(store, "player", &player.team_id)?;
    check_player_fields(player)
}

pub(super) fn check_new_event(store: &DataStore, event: &ScheduleEvent) -> Result<()> {
    if store.schedule().iter().any(|e| e.id == event.id) {
        return Err(rejected(RosterError::DuplicateId {
            kind: "event",
            id: event.id.to_string(),
        }));
    }
    require_team(store, "event", &event.team_id)?;
    if event.end_time < event.start_time {
        return Err(rejected(RosterError::Validation(format!(
            "event {} ends at {} before it starts at {}",
            event.id, event.end_time, event.start_time
        ))));
    }
    Ok(())
}

pub(super) fn check_attendance_batch(store: &DataStore, records: &[AttendanceRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.key()) {
            return Err(rejected(RosterError::Validation(format!(
                "batch marks player {} twice on {}",
                record.player_id, record.date
            ))));
        }
        if store.player(&record.player_id).is_none() {
            return Err(rejected(RosterError::InvalidForeignKey {
                kind: "attendance",
                target: "player",
                id: record.player_id.to_string(),
            }));
        }
        require_team(store, "attendance", &record.team_id)?;
    }
    Ok(())
}
