use team_roster::access;
use team_roster::dashboard::{self, RANKING_LIMIT};
use team_roster::export;
use team_roster::fixtures;
use team_roster::{
    AttendanceSheet, DashboardStats, DataStore, InsightClient, InsightConfig, InsightGate, Role,
    TeamId,
};

#[tokio::main]
async fn main() -> team_roster::Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut store = DataStore::seeded(today);
    let users = fixtures::users();

    let coach = users
        .iter()
        .find(|u| u.role == Role::Coach)
        .expect("demo users include a coach");
    let team_id = coach
        .assigned_team_id
        .clone()
        .unwrap_or_else(|| TeamId::from("t1"));

    if access::can_take_attendance(coach, &team_id) {
        let mut sheet = AttendanceSheet::open(&store, &team_id, today);
        if let Some((first, _)) = sheet.entries().first().cloned() {
            sheet.toggle(&first);
        }
        sheet.save(&mut store)?;
    }

    let stats = DashboardStats::compute(&store, today);
    println!("{stats:#?}");
    for team in dashboard::attendance_by_team(&store, RANKING_LIMIT) {
        println!("{:>12} {:>3}%", team.name, team.attendance);
    }

    if let Some(team) = store.team(&team_id) {
        println!("\n{}", export::roster_file_name(team, today));
        println!("{}", export::roster_csv(store.players_by_team(&team_id)));
    }

    let gate = InsightGate::new();
    if let Some(_loading) = gate.try_begin() {
        let client = InsightClient::new(InsightConfig::from_env());
        let insight = client.summarize(&stats, store.teams()).await;
        println!("\n{insight}");
    }
    Ok(())
}
