//! Weekly progress updates.

use serde::{Deserialize, Serialize};

/// One team's update for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    pub team_id: String,
    pub week: u32,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub blockers: Option<String>,
}

/// A team's updates, newest week first.
pub fn updates_for_team<'a>(updates: &'a [Update], team_id: &str) -> Vec<&'a Update> {
    let mut selected: Vec<&Update> = updates.iter().filter(|u| u.team_id == team_id).collect();
    selected.sort_by(|a, b| b.week.cmp(&a.week));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_updates_for_team_sorted_desc() {
        let updates: Vec<Update> = serde_json::from_value(json!([
            {"teamId": "team01", "week": 1, "summary": "kickoff"},
            {"teamId": "team02", "week": 2},
            {"teamId": "team01", "week": 3, "highlights": ["frame welded"], "blockers": "motor late"},
            {"teamId": "team01", "week": 2},
        ]))
        .unwrap();

        let weeks: Vec<u32> = updates_for_team(&updates, "team01").iter().map(|u| u.week).collect();
        assert_eq!(weeks, vec![3, 2, 1]);
        assert!(updates_for_team(&updates, "team99").is_empty());
    }
}
