use serde::Deserialize;

/// One directory entry as returned by the users endpoint.
///
/// Unrecognized response fields are ignored; `avatar` is optional upstream
/// and defaults to an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// User ID, unique within a loaded batch
    pub id: i64,
    /// Display name
    pub name: String,
    /// Display email, not validated
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

impl UserRecord {
    pub fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar: String::new(),
        }
    }
}
