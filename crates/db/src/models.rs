//! Row structs that map 1-to-1 onto database tables.
//!
//! These are also the JSON shapes served by the API, so field names are
//! camelCase on the wire and snake_case in SQL.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::{PgQueryAs, Resource};

// ---------------------------------------------------------------------------
// help_requests
// ---------------------------------------------------------------------------

/// A student's request for help during a lab or section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl Resource for HelpRequest {
    type Key = i64;

    const TYPE_NAME: &'static str = "HelpRequest";
    const TABLE: &'static str = "help_requests";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "team_id",
        "table_or_breakout_room",
        "request_time",
        "explanation",
        "solved",
    ];

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn with_key(self, key: i64) -> Self {
        Self { id: Some(key), ..self }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.requester_email)
            .bind(&self.team_id)
            .bind(&self.table_or_breakout_room)
            .bind(self.request_time)
            .bind(&self.explanation)
            .bind(self.solved)
    }
}

// ---------------------------------------------------------------------------
// ucsb_dining_commons_menu_items
// ---------------------------------------------------------------------------

/// One item served at a dining commons station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Resource for MenuItem {
    type Key = i64;

    const TYPE_NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const TABLE: &'static str = "ucsb_dining_commons_menu_items";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["dining_commons_code", "name", "station"];

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn with_key(self, key: i64) -> Self {
        Self { id: Some(key), ..self }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.dining_commons_code)
            .bind(&self.name)
            .bind(&self.station)
    }
}

// ---------------------------------------------------------------------------
// recommendation_requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Resource for RecommendationRequest {
    type Key = i64;

    const TYPE_NAME: &'static str = "RecommendationRequest";
    const TABLE: &'static str = "recommendation_requests";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "professor_email",
        "explanation",
        "date_requested",
        "date_needed",
        "done",
    ];

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn with_key(self, key: i64) -> Self {
        Self { id: Some(key), ..self }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.requester_email)
            .bind(&self.professor_email)
            .bind(&self.explanation)
            .bind(self.date_requested)
            .bind(self.date_needed)
            .bind(self.done)
    }
}

// ---------------------------------------------------------------------------
// ucsb_organizations
// ---------------------------------------------------------------------------

/// A student organization, keyed by its short code (e.g. `"ACM"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Resource for Organization {
    type Key = String;

    const TYPE_NAME: &'static str = "UCSBOrganization";
    const TABLE: &'static str = "ucsb_organizations";
    const KEY_COLUMN: &'static str = "org_code";
    const COLUMNS: &'static [&'static str] =
        &["org_translation_short", "org_translation", "inactive"];

    fn key(&self) -> Option<String> {
        Some(self.org_code.clone())
    }

    fn with_key(self, key: String) -> Self {
        Self { org_code: key, ..self }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.org_translation_short)
            .bind(&self.org_translation)
            .bind(self.inactive)
    }
}

// ---------------------------------------------------------------------------
// articles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_added: NaiveDateTime,
}

impl Resource for Article {
    type Key = i64;

    const TYPE_NAME: &'static str = "Article";
    const TABLE: &'static str = "articles";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["title", "url", "explanation", "email", "date_added"];

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn with_key(self, key: i64) -> Self {
        Self { id: Some(key), ..self }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.title)
            .bind(&self.url)
            .bind(&self.explanation)
            .bind(&self.email)
            .bind(self.date_added)
    }
}

// ---------------------------------------------------------------------------
// menu_item_reviews
// ---------------------------------------------------------------------------

/// A star rating left on a menu item. `item_id` is informational only; it is
/// not a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: Option<i64>,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Resource for MenuItemReview {
    type Key = i64;

    const TYPE_NAME: &'static str = "MenuItemReview";
    const TABLE: &'static str = "menu_item_reviews";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] =
        &["item_id", "reviewer_email", "stars", "date_reviewed", "comments"];

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn with_key(self, key: i64) -> Self {
        Self { id: Some(key), ..self }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.item_id)
            .bind(&self.reviewer_email)
            .bind(self.stars)
            .bind(self.date_reviewed)
            .bind(&self.comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_request_uses_camel_case_and_local_timestamps() {
        let json = serde_json::json!({
            "id": 1,
            "requesterEmail": "student1@ucsb.edu",
            "teamId": "s23-5pm-2",
            "tableOrBreakoutRoom": "Table 7",
            "requestTime": "2025-02-10T15:00:00",
            "explanation": "Need help debugging my controller",
            "solved": false
        });

        let row: HelpRequest = serde_json::from_value(json.clone()).expect("valid help request");
        assert_eq!(row.id, Some(1));
        assert_eq!(row.team_id, "s23-5pm-2");
        assert_eq!(serde_json::to_value(&row).unwrap(), json);
    }

    #[test]
    fn body_timestamps_may_omit_seconds() {
        let row: Article = serde_json::from_value(serde_json::json!({
            "title": "First Article",
            "url": "https://example.com/first",
            "explanation": "The first article.",
            "email": "reader@ucsb.edu",
            "dateAdded": "2025-11-03T19:52"
        }))
        .expect("valid article");

        assert_eq!(serde_json::to_value(&row).unwrap()["dateAdded"], "2025-11-03T19:52:00");
    }

    #[test]
    fn missing_id_deserialises_as_unsaved_row() {
        let row: MenuItem = serde_json::from_value(serde_json::json!({
            "diningCommonsCode": "ortega",
            "name": "Cheeseburger",
            "station": "Grill"
        }))
        .expect("valid menu item");

        assert_eq!(row.key(), None);
        assert_eq!(row.with_key(4).key(), Some(4));
    }

    #[test]
    fn organization_key_is_its_code() {
        let org = Organization {
            org_code: "TT".into(),
            org_translation_short: "Theta Tau".into(),
            org_translation: "Theta Tau Engineering Frat".into(),
            inactive: false,
        };
        assert_eq!(org.key().as_deref(), Some("TT"));
        assert_eq!(org.with_key("ACM".into()).org_code, "ACM");
    }
}
