use std::sync::Arc;

use chrono::NaiveDateTime;
use db::{models::MenuItemReview, Repository};
use serde::Deserialize;

use super::ApiResource;
use crate::state::Repositories;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReviewParams {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "db::timestamp::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl ApiResource for MenuItemReview {
    const PATH: &'static str = "/api/menuitemreview";

    type Params = MenuItemReviewParams;

    fn from_params(params: MenuItemReviewParams) -> Self {
        Self {
            id: None,
            item_id: params.item_id,
            reviewer_email: params.reviewer_email,
            stars: params.stars,
            date_reviewed: params.date_reviewed,
            comments: params.comments,
        }
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>> {
        &repos.menu_item_reviews
    }
}
