//! Dining commons menu items.
//!
//! Updates here copy the mutable fields onto the stored row instead of
//! replacing it. Every non-key field is mutable, so the stored result matches
//! what a replace would produce; the policy is kept explicit so a new
//! read-only column cannot silently change behaviour.

use std::sync::Arc;

use db::{models::MenuItem, Repository};
use serde::Deserialize;

use super::{ApiResource, UpdatePolicy};
use crate::state::Repositories;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl ApiResource for MenuItem {
    const PATH: &'static str = "/api/ucsbdiningcommonsmenuitem";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Merge;

    type Params = MenuItemParams;

    fn from_params(params: MenuItemParams) -> Self {
        Self {
            id: None,
            dining_commons_code: params.dining_commons_code,
            name: params.name,
            station: params.station,
        }
    }

    fn merge_from(self, incoming: Self) -> Self {
        Self {
            dining_commons_code: incoming.dining_commons_code,
            name: incoming.name,
            station: incoming.station,
            ..self
        }
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>> {
        &repos.menu_items
    }
}
