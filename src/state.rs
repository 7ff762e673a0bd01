//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ArticleService, TopicService, UserService};
use crate::infrastructure::EndpointCatalog;
use crate::infrastructure::persistence::{
    PgArticleRepository, PgCommentRepository, PgTopicRepository, PgUserRepository,
};

pub type PgArticleService = ArticleService<PgArticleRepository, PgCommentRepository>;

/// Per-process state shared by all requests.
///
/// Cloning is cheap: every field is reference-counted. The pool is owned by
/// the caller of [`AppState::new`] and closed by it on shutdown.
#[derive(Clone)]
pub struct AppState {
    pub topic_service: Arc<TopicService<PgTopicRepository>>,
    pub article_service: Arc<PgArticleService>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub catalog: Arc<EndpointCatalog>,
    pub pool: Arc<PgPool>,
}

impl AppState {
    /// Wires repositories and services on top of an existing pool.
    pub fn new(pool: Arc<PgPool>, catalog: EndpointCatalog) -> Self {
        let topic_repository = Arc::new(PgTopicRepository::new(pool.clone()));
        let article_repository = Arc::new(PgArticleRepository::new(pool.clone()));
        let comment_repository = Arc::new(PgCommentRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));

        Self {
            topic_service: Arc::new(TopicService::new(topic_repository)),
            article_service: Arc::new(ArticleService::new(
                article_repository,
                comment_repository,
            )),
            user_service: Arc::new(UserService::new(user_repository)),
            catalog: Arc::new(catalog),
            pool,
        }
    }
}
