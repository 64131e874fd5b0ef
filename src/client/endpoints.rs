//! Remote endpoint paths.

use url::Url;

pub const TEAMS: &str = "/api/teams";
pub const UPDATES: &str = "/api/updates";
pub const QUOTES: &str = "/api/quotes";
pub const SHOUTOUTS: &str = "/api/shoutouts";
pub const POLLS: &str = "/api/polls";
pub const PHOTOS: &str = "/api/photos";
pub const IDENTITY: &str = "/api/auth/me";

/// Percent-encode one path segment (`/` becomes `%2F`, space becomes `%20`).
fn segment(raw: &str) -> String {
    let Ok(mut scratch) = Url::parse("http://segment.invalid/") else {
        return raw.to_string();
    };
    if let Ok(mut segments) = scratch.path_segments_mut() {
        segments.clear().push(raw);
    }
    scratch.path().trim_start_matches('/').to_string()
}

pub fn team_comments(team_id: &str) -> String {
    format!("{}/{}/comments", TEAMS, segment(team_id))
}

pub fn team_upvotes(team_id: &str) -> String {
    format!("{}/{}/upvotes", TEAMS, segment(team_id))
}

pub fn poll_vote(poll_id: i64) -> String {
    format!("{}/{}/vote", POLLS, poll_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(team_comments("team01"), "/api/teams/team01/comments");
        assert_eq!(team_upvotes("a/b"), "/api/teams/a%2Fb/upvotes");
        assert_eq!(poll_vote(7), "/api/polls/7/vote");
    }

    #[test]
    fn test_space_is_percent_encoded_in_paths() {
        assert_eq!(team_comments("my team"), "/api/teams/my%20team/comments");
        assert_eq!(team_upvotes("a+b"), "/api/teams/a+b/upvotes");
    }
}
