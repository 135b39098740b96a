//! Scripted and in-memory HTTP clients shared by the API tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::{Map, Value, json};

use crate::transport::{ApiTransport, HttpClient, HttpError, HttpRequest, HttpResponse};

pub const TEST_BASE_URL: &str = "https://uptime.test/api/v2/";
pub const TEST_API_KEY: &str = "test-key";

/// Mock HTTP client replaying a queue of canned responses.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response.
    pub fn respond(self, status: u16, body: &Value) -> Self {
        let bytes = serde_json::to_vec(body).unwrap();
        self.respond_raw(status, bytes)
    }

    /// Queues a response with a raw body.
    pub fn respond_raw(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        let response = HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            http::HeaderMap::new(),
            body.into(),
        );
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queues a network failure.
    pub fn fail(self, error: HttpError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn sent(&self, index: usize) -> HttpRequest {
        self.requests()[index].clone()
    }

    pub fn sent_json(&self, index: usize) -> Value {
        let body = self.sent(index).body.expect("request has no body");
        serde_json::from_slice(&body).unwrap()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::InvalidUrl("no scripted response left".to_string())))
    }
}

/// Builds a transport over `client` pointing at [`TEST_BASE_URL`].
pub fn transport<C>(client: C) -> ApiTransport<C> {
    ApiTransport::new(client, url::Url::parse(TEST_BASE_URL).unwrap(), TEST_API_KEY).unwrap()
}

/// Wraps a payload in the `{ "data": ... }` envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

/// A complete status-monitor attribute object.
pub fn monitor_attributes() -> Value {
    json!({
        "url": "https://example.org",
        "pronounceable_name": "Example",
        "monitor_type": "status",
        "monitor_group_id": null,
        "last_checked_at": "2024-01-01T00:00:00Z",
        "status": "up",
        "verify_ssl": true,
        "check_frequency": 30,
        "call": false,
        "email": true,
        "sms": false,
        "push": true,
        "team_wait": null,
        "http_method": "get",
        "request_timeout": 30,
        "recovery_period": 180,
        "request_headers": [],
        "request_body": null,
        "paused_at": null,
        "created_at": "2023-12-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "ssl_expiration": null,
        "domain_expiration": null,
        "regions": ["us", "eu"],
        "confirmation_period": 0,
        "follow_redirects": true,
        "policy_id": null,
        "remember_cookies": true,
        "playwright_script": null,
        "maintenance_from": null,
        "maintenance_to": null,
        "maintenance_timezone": "UTC",
        "auth_username": null,
        "auth_password": null
    })
}

/// A monitor resource object with `overrides` merged into its attributes.
pub fn monitor_json(id: &str, overrides: &Value) -> Value {
    let mut attributes = monitor_attributes();
    if let (Value::Object(base), Value::Object(extra)) = (&mut attributes, overrides) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }

    json!({
        "id": id,
        "type": "monitor",
        "attributes": attributes,
        "relationships": { "policy": { "data": null } }
    })
}

/// In-memory stand-in for the monitors endpoints.
///
/// Supports GET and PATCH on `monitors/{id}`. A PATCH with `paused`
/// flips the derived `status` and `paused_at` like the real service.
#[derive(Debug, Default)]
pub struct FakeMonitorApi {
    monitors: Mutex<HashMap<String, Map<String, Value>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeMonitorApi {
    pub fn with_monitor(id: &str, overrides: &Value) -> Self {
        let api = Self::default();
        let Value::Object(attributes) = monitor_json(id, overrides)["attributes"].clone() else {
            unreachable!()
        };
        api.monitors
            .lock()
            .unwrap()
            .insert(id.to_string(), attributes);
        api
    }

    pub fn attribute(&self, id: &str, field: &str) -> Value {
        self.monitors.lock().unwrap()[id][field].clone()
    }

    /// Changes a field behind the client's back.
    pub fn set_attribute(&self, id: &str, field: &str, value: Value) {
        self.monitors
            .lock()
            .unwrap()
            .get_mut(id)
            .unwrap()
            .insert(field.to_string(), value);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn sent_json(&self, index: usize) -> Value {
        let body = self.requests()[index].body.clone().expect("request has no body");
        serde_json::from_slice(&body).unwrap()
    }

    fn respond(status: u16, body: &Value) -> HttpResponse {
        HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            http::HeaderMap::new(),
            serde_json::to_vec(body).unwrap(),
        )
    }

    fn handle(&self, req: &HttpRequest) -> HttpResponse {
        let segments: Vec<&str> = req.url.path_segments().unwrap().collect();
        let id = match segments.as_slice() {
            ["api", "v2", "monitors", id] => (*id).to_string(),
            _ => return Self::respond(404, &json!({ "errors": "Not found" })),
        };

        let mut monitors = self.monitors.lock().unwrap();
        let Some(attributes) = monitors.get_mut(&id) else {
            return Self::respond(404, &json!({ "errors": "Not found" }));
        };

        if req.method == http::Method::PATCH {
            let body: Value = serde_json::from_slice(req.body.as_deref().unwrap_or(&b"{}"[..])).unwrap();
            for (key, value) in body.as_object().unwrap() {
                if key == "paused" {
                    let paused = value.as_bool().unwrap();
                    attributes.insert(
                        "status".to_string(),
                        json!(if paused { "paused" } else { "pending" }),
                    );
                    attributes.insert(
                        "paused_at".to_string(),
                        if paused { json!("2024-02-01T00:00:00Z") } else { Value::Null },
                    );
                } else {
                    attributes.insert(key.clone(), value.clone());
                }
            }
        }

        Self::respond(
            200,
            &envelope(json!({
                "id": id,
                "type": "monitor",
                "attributes": attributes.clone(),
                "relationships": { "policy": { "data": null } }
            })),
        )
    }
}

impl HttpClient for FakeMonitorApi {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self.handle(&req);
        self.requests.lock().unwrap().push(req);
        Ok(response)
    }
}
