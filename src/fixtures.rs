//! Demo data the dashboard starts from.

use chrono::{Days, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    AttendanceRecord, AttendanceStatus, EventKind, Player, PlayerId, PlayerStatus, Role,
    ScheduleEvent, Team, TeamCategory, User,
};
use crate::store::Snapshot;

const PLAYERS_PER_TEAM: u32 = 12;
const ROSTER_SEED: u64 = 0x5c0_01;
const PLAYER_JOIN_YEAR: i32 = 2023;

/// `(id, name, category, coach, coach joined, icon)`
const TEAMS: [(&str, &str, TeamCategory, &str, (i32, u32, u32), &str); 9] = [
    ("t1", "Rugby", TeamCategory::Sports, "Mr. Silva", (2020, 1, 15), "🏉"),
    ("t2", "Cricket", TeamCategory::Sports, "Mr. Perera", (2019, 5, 20), "🏏"),
    ("t3", "Football", TeamCategory::Sports, "Mr. Fernando", (2021, 3, 10), "⚽"),
    ("t4", "Kung Fu", TeamCategory::Sports, "Master Lee", (2018, 11, 1), "🥋"),
    ("t5", "Badminton", TeamCategory::Sports, "Ms. Jayasinghe", (2022, 2, 14), "🏸"),
    ("t6", "Swimming", TeamCategory::Sports, "Mr. Dias", (2020, 8, 30), "🏊"),
    ("t7", "Chess", TeamCategory::Activity, "Mr. Karunaratne", (2015, 6, 1), "♟️"),
    ("t8", "Band", TeamCategory::Activity, "Mr. Mendis", (2017, 9, 15), "🎺"),
    ("t9", "Scouts", TeamCategory::Activity, "Mr. Alwis", (2016, 4, 22), "⚜️"),
];

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// The full demo snapshot. Event and attendance dates are relative to `today`;
/// everything else is fixed, including the pseudo-random roster fields.
pub fn seed(today: NaiveDate) -> Snapshot {
    let teams = teams();
    let players = players(&teams);
    Snapshot {
        schedule: schedule(today),
        attendance: attendance(today),
        teams,
        players,
    }
}

pub fn teams() -> Vec<Team> {
    TEAMS
        .iter()
        .map(|&(id, name, category, coach, joined, icon)| Team {
            id: id.into(),
            name: name.to_string(),
            category,
            coach_name: coach.to_string(),
            coach_joined_date: Some(ymd(joined)),
            icon: icon.to_string(),
            next_practice: None,
        })
        .collect()
}

fn phone(rng: &mut StdRng, prefix: &str) -> String {
    format!("{prefix}-{}", rng.gen_range(1_000_000..10_000_000))
}

fn players(teams: &[Team]) -> Vec<Player> {
    let mut rng = StdRng::seed_from_u64(ROSTER_SEED);
    let mut players = Vec::with_capacity(teams.len() * PLAYERS_PER_TEAM as usize);
    for team in teams {
        for i in 1..=PLAYERS_PER_TEAM {
            let captain = i == 1;
            players.push(Player {
                id: format!("p-{}-{i}", team.id).into(),
                team_id: team.id.clone(),
                name: format!("Student {}-{i}", team.id.as_str().to_uppercase()),
                grade: (10 + i % 3).to_string(),
                position: if captain { "Captain" } else { "Member" }.to_string(),
                contact_parent: phone(&mut rng, "077"),
                dob: Some(ymd((2008, 5, 15))),
                joined_date: ymd((PLAYER_JOIN_YEAR, 1, 10)),
                emergency_contact_name: "Parent Name".to_string(),
                emergency_contact_phone: phone(&mut rng, "071"),
                performance_notes: captain.then(|| {
                    "Excellent leadership skills. consistently improves time.".to_string()
                }),
                medical_notes: None,
                attendance_rate: rng.gen_range(70..100),
                status: if rng.gen_bool(0.1) {
                    PlayerStatus::Injured
                } else {
                    PlayerStatus::Active
                },
            });
        }
    }
    players
}

/// The player the demo parent account is linked to.
pub fn sample_player_id() -> PlayerId {
    "p-t1-1".into()
}

/// Demo accounts, one per role plus a second coach.
pub fn users() -> Vec<User> {
    let user = |id: &str, name: &str, role: Role, avatar: u8| User {
        id: id.into(),
        name: name.to_string(),
        role,
        assigned_team_id: None,
        linked_player_id: None,
        avatar_url: Some(format!("https://picsum.photos/100/100?random={avatar}")),
    };

    vec![
        user("u1", "Principal Mrs. Wickramasinghe", Role::Principal, 1),
        user("u2", "Master In-Charge Mr. Gamage", Role::MasterInCharge, 2),
        User {
            assigned_team_id: Some("t1".into()),
            ..user("u3", "Coach Silva (Rugby)", Role::Coach, 3)
        },
        User {
            assigned_team_id: Some("t2".into()),
            ..user("u4", "Coach Perera (Cricket)", Role::Coach, 4)
        },
        User {
            linked_player_id: Some(sample_player_id()),
            ..user("u5", "Mr. & Mrs. Perera (Parents)", Role::Parent, 6)
        },
        user("u6", "System Admin", Role::Admin, 5),
    ]
}

fn schedule(today: NaiveDate) -> Vec<ScheduleEvent> {
    let event = |id: &str, team: &str, title: &str, date, start, end, location: &str, kind| {
        ScheduleEvent {
            id: id.into(),
            team_id: team.into(),
            title: title.to_string(),
            date,
            start_time: start,
            end_time: end,
            location: location.to_string(),
            kind,
        }
    };

    vec![
        event(
            "e1",
            "t1",
            "Morning Practice",
            today,
            hm(6, 0),
            hm(8, 0),
            "School Ground",
            EventKind::Practice,
        ),
        event(
            "e2",
            "t2",
            "Net Practice",
            today + Days::new(1),
            hm(15, 0),
            hm(17, 30),
            "Main Pitch",
            EventKind::Practice,
        ),
        event(
            "e3",
            "t3",
            "Friendly Match",
            today + Days::new(2),
            hm(16, 0),
            hm(18, 0),
            "City Stadium",
            EventKind::Match,
        ),
    ]
}

fn attendance(today: NaiveDate) -> Vec<AttendanceRecord> {
    [
        ("a1", 2, AttendanceStatus::Present),
        ("a2", 5, AttendanceStatus::Present),
        ("a3", 7, AttendanceStatus::Absent),
    ]
    .into_iter()
    .map(|(id, days_ago, status)| AttendanceRecord {
        id: id.into(),
        player_id: sample_player_id(),
        team_id: "t1".into(),
        date: today - Days::new(days_ago),
        status,
    })
    .collect()
}
