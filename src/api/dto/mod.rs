//! Data Transfer Objects for API responses.
//!
//! DTOs own the JSON shape of every response; entities are converted into
//! them with `From` impls.

pub mod article;
pub mod comment;
pub mod health;
pub mod topic;
pub mod user;
