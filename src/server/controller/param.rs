use serde::Deserialize;

use crate::model::game_post::GamePostStatus;

const DEFAULT_ENTRIES: u64 = 10;
const MAX_ENTRIES: u64 = 100;
/// Highest page index whose row offset still fits in SQLite's signed 64-bit `OFFSET`.
const MAX_PAGE: u64 = i64::MAX as u64 / MAX_ENTRIES;

/// Query parameters shared by paginated endpoints. Pages are zero-indexed.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParam {
    /// Entries per page, clamped to `1..=100`.
    pub fn per_page(&self) -> u64 {
        clamp_entries(self.entries)
    }

    /// Page index, capped so `page * per_page` cannot overflow.
    pub fn page(&self) -> u64 {
        clamp_page(self.page)
    }
}

fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

fn clamp_entries(entries: u64) -> u64 {
    entries.clamp(1, MAX_ENTRIES)
}

/// Pages past the cap are empty anyway, so out-of-range requests land on an empty page.
fn clamp_page(page: u64) -> u64 {
    page.min(MAX_PAGE)
}

/// Query parameters for listing game posts.
#[derive(Debug, Clone, Deserialize)]
pub struct GamePostListParam {
    pub game_id: Option<i32>,
    pub status: Option<GamePostStatus>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl GamePostListParam {
    pub fn per_page(&self) -> u64 {
        clamp_entries(self.entries)
    }

    pub fn page(&self) -> u64 {
        clamp_page(self.page)
    }
}

/// Query parameters for listing the caller's notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationListParam {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl NotificationListParam {
    pub fn per_page(&self) -> u64 {
        clamp_entries(self.entries)
    }

    pub fn page(&self) -> u64 {
        clamp_page(self.page)
    }
}

/// Query parameters the provider appends to the OAuth callback.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackParam {
    /// CSRF state token, validated against the value stored in the session.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// Query parameters for starting a login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginParam {
    /// One-time bootstrap code that promotes the signing-in user to `SUPER_ADMIN`.
    pub code: Option<String>,
}
