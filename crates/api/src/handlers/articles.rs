use std::sync::Arc;

use chrono::NaiveDateTime;
use db::{models::Article, Repository};
use serde::Deserialize;

use super::ApiResource;
use crate::state::Repositories;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "db::timestamp::deserialize")]
    pub date_added: NaiveDateTime,
}

impl ApiResource for Article {
    const PATH: &'static str = "/api/articles";

    type Params = ArticleParams;

    fn from_params(params: ArticleParams) -> Self {
        Self {
            id: None,
            title: params.title,
            url: params.url,
            explanation: params.explanation,
            email: params.email,
            date_added: params.date_added,
        }
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>> {
        &repos.articles
    }
}
