use std::sync::Arc;

use chrono::NaiveDateTime;
use db::{models::HelpRequest, Repository};
use serde::Deserialize;

use super::ApiResource;
use crate::state::Repositories;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    /// ISO-8601 local date-time, e.g. `2022-01-03T00:00:00`; seconds optional.
    #[serde(deserialize_with = "db::timestamp::deserialize")]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl ApiResource for HelpRequest {
    const PATH: &'static str = "/api/helprequests";

    type Params = HelpRequestParams;

    fn from_params(params: HelpRequestParams) -> Self {
        Self {
            id: None,
            requester_email: params.requester_email,
            team_id: params.team_id,
            table_or_breakout_room: params.table_or_breakout_room,
            request_time: params.request_time,
            explanation: params.explanation,
            solved: params.solved,
        }
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>> {
        &repos.help_requests
    }
}
