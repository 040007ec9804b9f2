use std::sync::Arc;

use chrono::NaiveDateTime;
use db::{models::RecommendationRequest, Repository};
use serde::Deserialize;

use super::ApiResource;
use crate::state::Repositories;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestParams {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "db::timestamp::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "db::timestamp::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl ApiResource for RecommendationRequest {
    const PATH: &'static str = "/api/recommendationrequests";

    type Params = RecommendationRequestParams;

    fn from_params(params: RecommendationRequestParams) -> Self {
        Self {
            id: None,
            requester_email: params.requester_email,
            professor_email: params.professor_email,
            explanation: params.explanation,
            date_requested: params.date_requested,
            date_needed: params.date_needed,
            done: params.done,
        }
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>> {
        &repos.recommendation_requests
    }
}
