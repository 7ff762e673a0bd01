//! User entity.

/// An author of articles and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
