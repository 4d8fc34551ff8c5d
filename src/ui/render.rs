// Plain-text rendering of the list and detail screens. Each screen is a
// pure function from state to a string.

use crate::directory::batch::resolve_user;
use crate::models::access::{access_granted, access_level, avatar_url, AvatarSize};
use crate::models::user::UserRecord;
use crate::ui::state::ListState;

/// Render the list screen for its current state
pub fn render_list(state: &ListState) -> String {
    match state {
        ListState::Loading => "Loading users...".to_string(),
        ListState::Failed { message } => message.clone(),
        ListState::Ready { records, .. } => {
            if records.is_empty() {
                return "No users found.".to_string();
            }

            let mut out = String::from("User Directory\n");
            out.push_str("--------------\n");
            for user in records {
                let badge = if access_granted(user.id) {
                    "Access granted"
                } else {
                    "Access denied"
                };
                out.push_str(&format!(
                    "{:>4}  {:<20}  {:<30}  {}\n",
                    user.id, user.name, user.email, badge
                ));
                out.push_str(&format!(
                    "      {}\n",
                    avatar_url(user.id, AvatarSize::Thumb)
                ));
            }
            out
        }
    }
}

/// Render the detail screen for a selected ID. Total over all IDs: a miss
/// resolves to the placeholder record.
pub fn render_detail(records: &[UserRecord], id: i64) -> String {
    let user = resolve_user(records, id);

    let banner = if access_granted(id) {
        "ACCESS GRANTED"
    } else {
        "ACCESS DENIED"
    };

    let mut out = String::from("Access Details\n");
    out.push_str("==============\n");
    out.push_str(&format!("{}\n", user.name));
    out.push_str(&format!("{}\n", user.email));
    out.push_str(&format!("[{banner}]\n"));
    out.push_str(&format!("{}\n", avatar_url(id, AvatarSize::Full)));
    out.push('\n');
    out.push_str("User Information\n");
    out.push_str(&format!("  User ID       {}\n", user.id));
    out.push_str(&format!("  Email         {}\n", user.email));
    out.push_str(&format!("  Access Level  {}\n", access_level(id)));
    out.push_str("  Last Access   Today, 10:30 AM\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FetchError;
    use crate::directory::batch::{DirectoryFetch, FetchSource};

    fn ready(count: i64) -> ListState {
        let records = (1..=count)
            .map(|id| UserRecord::new(id, &format!("User {id}"), &format!("u{id}@example.com")))
            .collect();
        ListState::Ready {
            records,
            source: FetchSource::Live,
        }
    }

    #[test]
    fn test_render_loading() {
        assert_eq!(render_list(&ListState::Loading), "Loading users...");
    }

    #[test]
    fn test_render_failed_shows_only_the_message() {
        let fallback = DirectoryFetch::fallback(&FetchError::HttpStatus { code: 404 });
        let state = ListState::Failed {
            message: fallback.error.unwrap(),
        };

        let out = render_list(&state);
        assert_eq!(out, "Error: 404");
    }

    #[test]
    fn test_render_ready_rows() {
        let out = render_list(&ready(12));

        assert_eq!(out.matches("Access").count(), 12);
        assert!(out.contains("User 1"));
        assert!(out.contains("u12@example.com"));
        // Even IDs granted, odd denied
        assert!(out.contains("   2  User 2"));
        assert!(out.lines().any(|l| l.starts_with("   2") && l.ends_with("Access granted")));
        assert!(out.lines().any(|l| l.starts_with("   3") && l.ends_with("Access denied")));
    }

    #[test]
    fn test_render_ready_includes_thumb_avatar_urls() {
        let out = render_list(&ready(2));

        assert!(out.contains("https://i.pravatar.cc/150?img=1"));
        assert!(out.contains("https://i.pravatar.cc/150?img=2"));
    }

    #[test]
    fn test_render_empty_live_batch() {
        assert_eq!(render_list(&ready(0)), "No users found.");
    }

    #[test]
    fn test_render_detail_known_user() {
        let records = vec![UserRecord::new(6, "Maintenance", "maintenance@building.com")];
        let out = render_detail(&records, 6);

        assert!(out.contains("Maintenance"));
        assert!(out.contains("[ACCESS GRANTED]"));
        assert!(out.contains("Access Level  Admin"));
        assert!(out.contains("https://i.pravatar.cc/300?img=6"));
    }

    #[test]
    fn test_render_detail_denied_user() {
        let records = vec![UserRecord::new(9, "Test User", "test@example.com")];
        let out = render_detail(&records, 9);

        assert!(out.contains("[ACCESS DENIED]"));
        assert!(out.contains("Access Level  Admin"));
    }

    #[test]
    fn test_render_detail_placeholder_for_missing_id() {
        let out = render_detail(&[], 77);

        assert!(out.contains("Unknown User"));
        assert!(out.contains("unknown@example.com"));
        assert!(out.contains("User ID       77"));
        assert!(out.contains("Access Level  Standard"));
    }
}
