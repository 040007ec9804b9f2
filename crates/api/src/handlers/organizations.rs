//! Student organizations, addressed by `orgCode` rather than a numeric id.

use std::sync::Arc;

use db::{models::Organization, Repository};
use serde::Deserialize;

use super::ApiResource;
use crate::state::Repositories;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl ApiResource for Organization {
    const PATH: &'static str = "/api/ucsborganization";
    const KEY_PARAM: &'static str = "orgCode";

    type Params = OrganizationParams;

    fn from_params(params: OrganizationParams) -> Self {
        Self {
            org_code: params.org_code,
            org_translation_short: params.org_translation_short,
            org_translation: params.org_translation,
            inactive: params.inactive,
        }
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>> {
        &repos.organizations
    }
}
