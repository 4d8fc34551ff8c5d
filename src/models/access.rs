// Display values derived from a user ID. These are cosmetic: the
// granted/denied flag is a parity computation, not an authorization check.

use std::fmt;

/// Avatar image size variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarSize {
    /// 150px, used in list rows
    Thumb,
    /// 300px, used on the detail screen
    Full,
}

impl AvatarSize {
    fn pixels(self) -> u32 {
        match self {
            AvatarSize::Thumb => 150,
            AvatarSize::Full => 300,
        }
    }
}

/// Access level derived from the user ID
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    Admin,
    Standard,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::Admin => write!(f, "Admin"),
            AccessLevel::Standard => write!(f, "Standard"),
        }
    }
}

/// Even IDs are granted, odd IDs are denied
pub fn access_granted(id: i64) -> bool {
    id % 2 == 0
}

/// IDs divisible by 3 are Admin, everything else Standard
pub fn access_level(id: i64) -> AccessLevel {
    if id % 3 == 0 {
        AccessLevel::Admin
    } else {
        AccessLevel::Standard
    }
}

/// Build the avatar image URL for a user. Only the URL string is
/// constructed here; fetching the image is up to the caller.
pub fn avatar_url(id: i64, size: AvatarSize) -> String {
    format!("https://i.pravatar.cc/{}?img={}", size.pixels(), id)
}
