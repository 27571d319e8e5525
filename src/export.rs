use std::borrow::Cow;

use chrono::NaiveDate;
use itertools::Itertools;

use crate::model::{Player, Team};

pub const ROSTER_HEADER: [&str; 7] = [
    "Player Name",
    "Grade",
    "Position",
    "Joined Date",
    "Parent Contact",
    "Attendance Rate %",
    "Status",
];

/// Quote a field if it contains a delimiter, quote or line break, doubling
/// inner quotes. Other fields pass through unchanged.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields.into_iter().map(escape).join(",")
}

/// Render a roster as CSV: the fixed header, then one line per player.
/// Lines are joined with `\n` and there is no trailing newline.
pub fn roster_csv<'a>(players: impl IntoIterator<Item = &'a Player>) -> String {
    let header = row(ROSTER_HEADER);
    let rows = players.into_iter().map(|p| {
        let joined = p.joined_date.to_string();
        let rate = p.attendance_rate.to_string();
        let status = p.status.to_string();
        row([
            p.name.as_str(),
            p.grade.as_str(),
            p.position.as_str(),
            joined.as_str(),
            p.contact_parent.as_str(),
            rate.as_str(),
            status.as_str(),
        ])
    });
    std::iter::once(header).chain(rows).join("\n")
}

/// Download name for a roster export, e.g. `Rugby_Roster_2024-03-10.csv`.
pub fn roster_file_name(team: &Team, date: NaiveDate) -> String {
    format!("{}_Roster_{}.csv", team.name, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlayerStatus;
    use crate::store::tests::{date, player, team};

    #[test]
    fn test_roster_csv_layout() {
        let mut a = player("a", "t1");
        a.name = "Nimal".to_string();
        a.grade = "11".to_string();
        a.contact_parent = "077-1234567".to_string();
        a.attendance_rate = 92;
        let mut b = player("b", "t1");
        b.name = "Kamal".to_string();
        b.position = "Captain".to_string();
        b.status = PlayerStatus::Injured;

        let csv = roster_csv([&a, &b]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "Player Name,Grade,Position,Joined Date,Parent Contact,Attendance Rate %,Status",
                "Nimal,11,Member,2023-01-10,077-1234567,92,Active",
                "Kamal,10,Captain,2023-01-10,,100,Injured",
            ]
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_roster_is_header_only() {
        let csv = roster_csv(std::iter::empty::<&Player>());
        assert_eq!(csv, ROSTER_HEADER.join(","));
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let mut p = player("a", "t1");
        p.name = "Perera, Nimal".to_string();
        p.position = "Wing \"Flash\"".to_string();
        let csv = roster_csv([&p]);
        let line = csv.lines().nth(1).unwrap();
        assert!(line.starts_with("\"Perera, Nimal\",10,\"Wing \"\"Flash\"\"\",2023-01-10"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            roster_file_name(&team("t1", "Rugby"), date("2024-03-10")),
            "Rugby_Roster_2024-03-10.csv"
        );
    }
}
