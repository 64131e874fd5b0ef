//! Named resources and where each one lives.

use std::fmt;

use crate::client::endpoints;

/// A fetchable unit of remote or static data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Teams,
    Updates,
    Quotes,
    Shoutouts,
    Polls,
    Photos,
    Comments { team_id: String },
    Upvotes { team_id: String },
}

impl Resource {
    /// Remote endpoint path.
    pub fn endpoint(&self) -> String {
        match self {
            Resource::Teams => endpoints::TEAMS.to_string(),
            Resource::Updates => endpoints::UPDATES.to_string(),
            Resource::Quotes => endpoints::QUOTES.to_string(),
            Resource::Shoutouts => endpoints::SHOUTOUTS.to_string(),
            Resource::Polls => endpoints::POLLS.to_string(),
            Resource::Photos => endpoints::PHOTOS.to_string(),
            Resource::Comments { team_id } => endpoints::team_comments(team_id),
            Resource::Upvotes { team_id } => endpoints::team_upvotes(team_id),
        }
    }

    /// Single-file snapshot equivalent, if there is one.
    ///
    /// Weekly updates are spread over several batch files and upvote tallies
    /// are never bundled, so both return `None`. Team IDs that cannot name a
    /// single file have no comments snapshot either.
    pub fn snapshot(&self) -> Option<String> {
        match self {
            Resource::Teams => Some("teams.json".to_string()),
            Resource::Quotes => Some("quotes.json".to_string()),
            Resource::Shoutouts => Some("shoutouts.json".to_string()),
            Resource::Polls => Some("polls.json".to_string()),
            Resource::Photos => Some("photos.json".to_string()),
            Resource::Comments { team_id } if is_file_stem(team_id) => Some(format!("comments/{}.json", team_id)),
            Resource::Comments { .. } => None,
            Resource::Updates | Resource::Upvotes { .. } => None,
        }
    }
}

fn is_file_stem(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Teams => f.write_str("teams"),
            Resource::Updates => f.write_str("updates"),
            Resource::Quotes => f.write_str("quotes"),
            Resource::Shoutouts => f.write_str("shoutouts"),
            Resource::Polls => f.write_str("polls"),
            Resource::Photos => f.write_str("photos"),
            Resource::Comments { team_id } => write!(f, "comments[{}]", team_id),
            Resource::Upvotes { team_id } => write!(f, "upvotes[{}]", team_id),
        }
    }
}
