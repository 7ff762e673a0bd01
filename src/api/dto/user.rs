//! DTOs for user listing.

use serde::Serialize;

use crate::domain::entities::User;

/// Individual user information.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            avatar_url: user.avatar_url,
        }
    }
}

/// Response for `GET /api/users`.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserItem>,
}
