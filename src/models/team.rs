//! Team roster.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display names of the four course phases, indexed by `phase - 1`.
pub const PHASE_NAMES: [&str; 4] = ["Ideation", "Conceptualization", "Building & Iteration", "Showcase"];

/// Captain comments that carry no information and are not shown.
const EMPTY_NOTES: [&str; 4] = ["no", "nothing", "n/a", "thank you"];

/// Project type of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamKind {
    Hardware,
    Software,
    #[serde(other)]
    Other,
}

/// A project team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub captain: String,
    #[serde(rename = "type")]
    pub kind: TeamKind,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_phase")]
    pub current_phase: u8,
    #[serde(default)]
    pub phase_status: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub idea_locked: bool,
    #[serde(default)]
    pub funding_needed: bool,
    /// Free-form note from the captain.
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

fn default_phase() -> u8 {
    1
}

impl Team {
    /// Name of the current phase; out-of-range phases read as the first one.
    pub fn phase_name(&self) -> &'static str {
        usize::from(self.current_phase)
            .checked_sub(1)
            .and_then(|i| PHASE_NAMES.get(i))
            .copied()
            .unwrap_or(PHASE_NAMES[0])
    }

    /// The captain's note, unless it is empty or a throwaway answer.
    pub fn captain_note(&self) -> Option<&str> {
        let note = self.comments.as_deref()?.trim();
        if note.is_empty() || EMPTY_NOTES.contains(&note.to_lowercase().as_str()) {
            None
        } else {
            Some(note)
        }
    }

    /// Up to two uppercase initials of the captain's name.
    pub fn captain_initials(&self) -> String {
        self.captain
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Roster filter by project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    All,
    Hardware,
    Software,
}

impl TeamFilter {
    /// Teams matching this filter, in roster order.
    pub fn apply<'a>(&self, teams: &'a [Team]) -> Vec<&'a Team> {
        teams
            .iter()
            .filter(|team| match self {
                TeamFilter::All => true,
                TeamFilter::Hardware => team.kind == TeamKind::Hardware,
                TeamFilter::Software => team.kind == TeamKind::Software,
            })
            .collect()
    }
}

impl FromStr for TeamFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(TeamFilter::All),
            "hardware" => Ok(TeamFilter::Hardware),
            "software" => Ok(TeamFilter::Software),
            other => Err(format!("unknown team filter '{}'", other)),
        }
    }
}

/// Headline numbers for the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RosterStats {
    pub teams: usize,
    pub hardware: usize,
    pub software: usize,
    pub students: u32,
}

impl RosterStats {
    /// Compute stats over a roster.
    pub fn from_teams(teams: &[Team]) -> Self {
        teams.iter().fold(Self::default(), |mut stats, team| {
            stats.teams += 1;
            match team.kind {
                TeamKind::Hardware => stats.hardware += 1,
                TeamKind::Software => stats.software += 1,
                TeamKind::Other => {}
            }
            stats.students += team.member_count;
            stats
        })
    }
}
