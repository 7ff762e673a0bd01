//! Topic entity.

/// A subject that articles are filed under, identified by its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
