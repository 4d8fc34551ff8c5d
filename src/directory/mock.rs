use crate::models::user::UserRecord;

/// Fixed fallback dataset substituted whenever the live fetch does not
/// fully succeed. Deterministic and never mutated.
pub fn mock_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(1, "John Resident", "john@door.com"),
        UserRecord::new(2, "Unknown Person", "unknown@example.com"),
        UserRecord::new(3, "Mary Johnson", "mary@door.com"),
        UserRecord::new(4, "Delivery Person", "delivery@service.com"),
        UserRecord::new(5, "Security Guard", "security@building.com"),
        UserRecord::new(6, "Maintenance", "maintenance@building.com"),
        UserRecord::new(7, "Guest Visitor", "guest@visitor.com"),
        UserRecord::new(8, "Admin User", "admin@system.com"),
        UserRecord::new(9, "Test User", "test@example.com"),
        UserRecord::new(10, "Backup User", "backup@system.com"),
        UserRecord::new(11, "Alex Manager", "alex@office.com"),
        UserRecord::new(12, "Sarah Owner", "sarah@home.com"),
        UserRecord::new(13, "David Guest", "david@guest.com"),
        UserRecord::new(14, "Lisa Cleaner", "lisa@clean.com"),
        UserRecord::new(15, "Mike Engineer", "mike@tech.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_batch_shape() {
        let users = mock_users();

        assert_eq!(users.len(), 15);
        for (i, user) in users.iter().enumerate() {
            assert_eq!(user.id, i as i64 + 1);
            assert!(user.avatar.is_empty());
        }
    }

    #[test]
    fn test_mock_batch_is_deterministic() {
        assert_eq!(mock_users(), mock_users());
    }
}
