/// The remarks trail is a single string column on the upstream record:
/// entries of the form `role : user : comment` joined by `||`.
pub const ENTRY_DELIMITER: &str = "||";
const FIELD_DELIMITER: &str = " : ";

/// Append one entry to an existing trail.
pub fn update_remarks_history(existing: &str, role: &str, user: &str, comment: &str) -> String {
    let entry = format!("{role}{FIELD_DELIMITER}{user}{FIELD_DELIMITER}{comment}");
    if existing.is_empty() {
        entry
    } else {
        format!("{existing}{ENTRY_DELIMITER}{entry}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemarkEntry {
    pub role: String,
    pub user: String,
    pub comment: String,
}

/// Split a trail back into entries for display. Malformed segments are kept
/// as comment-only entries rather than dropped.
pub fn parse_trail(trail: &str) -> Vec<RemarkEntry> {
    trail
        .split(ENTRY_DELIMITER)
        .filter(|s| !s.trim().is_empty())
        .map(|segment| {
            let mut parts = segment.splitn(3, FIELD_DELIMITER);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(role), Some(user), Some(comment)) => RemarkEntry {
                    role: role.trim().to_string(),
                    user: user.trim().to_string(),
                    comment: comment.trim().to_string(),
                },
                _ => RemarkEntry {
                    role: String::new(),
                    user: String::new(),
                    comment: segment.trim().to_string(),
                },
            }
        })
        .collect()
}
