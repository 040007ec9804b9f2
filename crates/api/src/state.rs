//! Shared application state handed to every handler.

use std::sync::Arc;

use db::{
    models::{Article, HelpRequest, MenuItem, MenuItemReview, Organization, RecommendationRequest},
    DbPool, MemoryRepository, PgRepository, Repository,
};

use crate::auth::AuthConfig;

/// One repository per resource table.
#[derive(Clone)]
pub struct Repositories {
    pub help_requests: Arc<dyn Repository<HelpRequest>>,
    pub menu_items: Arc<dyn Repository<MenuItem>>,
    pub recommendation_requests: Arc<dyn Repository<RecommendationRequest>>,
    pub organizations: Arc<dyn Repository<Organization>>,
    pub articles: Arc<dyn Repository<Article>>,
    pub menu_item_reviews: Arc<dyn Repository<MenuItemReview>>,
}

impl Repositories {
    /// Postgres-backed repositories sharing one pool.
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            help_requests: Arc::new(PgRepository::<HelpRequest>::new(pool.clone())),
            menu_items: Arc::new(PgRepository::<MenuItem>::new(pool.clone())),
            recommendation_requests: Arc::new(PgRepository::<RecommendationRequest>::new(pool.clone())),
            organizations: Arc::new(PgRepository::<Organization>::new(pool.clone())),
            articles: Arc::new(PgRepository::<Article>::new(pool.clone())),
            menu_item_reviews: Arc::new(PgRepository::<MenuItemReview>::new(pool)),
        }
    }

    /// Empty in-process repositories; contents are lost on shutdown.
    pub fn in_memory() -> Self {
        Self {
            help_requests: Arc::new(MemoryRepository::<HelpRequest>::new()),
            menu_items: Arc::new(MemoryRepository::<MenuItem>::new()),
            recommendation_requests: Arc::new(MemoryRepository::<RecommendationRequest>::new()),
            organizations: Arc::new(MemoryRepository::<Organization>::new()),
            articles: Arc::new(MemoryRepository::<Article>::new()),
            menu_item_reviews: Arc::new(MemoryRepository::<MenuItemReview>::new()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(repos: Repositories, auth: AuthConfig) -> Self {
        Self {
            repos,
            auth: Arc::new(auth),
        }
    }
}
