//! Tests for `OncallCalendarManager`.

use super::*;
use crate::resource::{ErrorRules, PageParams};
use crate::test_support::{MockClient, envelope, transport};
use serde_json::json;

fn calendar(id: &str) -> serde_json::Value {
    json!({ "id": id, "type": "on_call_calendar", "attributes": { "name": "Primary" } })
}

#[tokio::test]
async fn list_calendars() {
    let transport = transport(MockClient::new().respond(200, &envelope(json!([calendar("1")]))));
    let manager = OncallCalendarManager::new(&transport, ErrorRules::default());

    let calendars = manager.list(&PageParams::default()).await.unwrap();

    assert_eq!(calendars[0].id, "1");
    assert_eq!(transport.client().sent(0).url.path(), "/api/v2/on-calls");
}

#[tokio::test]
async fn get_on_date() {
    let transport = transport(MockClient::new().respond(200, &envelope(calendar("1"))));
    let manager = OncallCalendarManager::new(&transport, ErrorRules::default());

    manager.get("1", Some("2024-05-01")).await.unwrap();

    assert_eq!(
        transport.client().sent(0).url.as_str(),
        "https://uptime.test/api/v2/on-calls/1?date=2024-05-01"
    );
}

#[tokio::test]
async fn get_without_date_has_no_query() {
    let transport = transport(MockClient::new().respond(200, &envelope(calendar("1"))));
    let manager = OncallCalendarManager::new(&transport, ErrorRules::default());

    manager.get("1", None).await.unwrap();

    assert!(transport.client().sent(0).url.query().is_none());
}

#[tokio::test]
async fn missing_calendar() {
    let transport = transport(MockClient::new().respond(404, &json!({})));
    let manager = OncallCalendarManager::new(&transport, ErrorRules::default());

    let err = manager.get("1", None).await.unwrap_err();

    assert_eq!(err.to_string(), "On-call calendar not found: 1");
}
