//! Tests for monitor attribute (de)serialisation.

use super::*;
use crate::test_support::monitor_attributes;
use serde_json::{Value, json};

fn with(overrides: &Value) -> Value {
    let mut attributes = monitor_attributes();
    for (key, value) in overrides.as_object().unwrap() {
        attributes[key] = value.clone();
    }
    attributes
}

mod decoding {
    use super::*;

    #[test]
    fn status_monitor() {
        let attributes: MonitorAttributes = serde_json::from_value(monitor_attributes()).unwrap();

        assert_eq!(attributes.url, "https://example.org");
        assert_eq!(attributes.kind, MonitorKind::Status);
        assert_eq!(attributes.status, MonitorStatus::Up);
        assert_eq!(attributes.http_method, HttpMethod::Get);
        assert_eq!(attributes.check_frequency, 30);
        assert_eq!(attributes.monitor_group_id, None);
        assert_eq!(
            attributes.regions,
            Some(vec!["us".to_string(), "eu".to_string()])
        );
    }

    #[test]
    fn variant_fields_are_read_for_their_type() {
        let attributes: MonitorAttributes = serde_json::from_value(with(&json!({
            "monitor_type": "udp",
            "port": "53",
            "required_keyword": "pong"
        })))
        .unwrap();

        assert_eq!(
            attributes.kind,
            MonitorKind::Udp {
                port: "53".to_string(),
                required_keyword: "pong".to_string()
            }
        );
    }

    #[test]
    fn other_types_variant_fields_are_ignored() {
        let attributes: MonitorAttributes = serde_json::from_value(with(&json!({
            "port": null,
            "required_keyword": null,
            "expected_status_codes": []
        })))
        .unwrap();

        assert_eq!(attributes.kind, MonitorKind::Status);
    }

    #[test]
    fn expected_status_codes() {
        let attributes: MonitorAttributes = serde_json::from_value(with(&json!({
            "monitor_type": "expected_status_code",
            "expected_status_codes": [200, 204]
        })))
        .unwrap();

        assert_eq!(
            attributes.kind,
            MonitorKind::ExpectedStatusCode {
                expected_status_codes: vec![200, 204]
            }
        );
    }

    #[test]
    fn unknown_monitor_type_is_rejected() {
        let result = serde_json::from_value::<MonitorAttributes>(with(&json!({
            "monitor_type": "carrier_pigeon"
        })));

        assert!(result.is_err());
    }

    #[test]
    fn missing_variant_field_is_rejected() {
        let result = serde_json::from_value::<MonitorAttributes>(with(&json!({
            "monitor_type": "tcp"
        })));

        assert!(result.is_err());
    }

    #[test]
    fn uppercase_http_method_is_accepted() {
        let attributes: MonitorAttributes =
            serde_json::from_value(with(&json!({ "http_method": "POST" }))).unwrap();

        assert_eq!(attributes.http_method, HttpMethod::Post);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let attributes: MonitorAttributes = serde_json::from_value(json!({
            "url": "example.org",
            "monitor_type": "ping"
        }))
        .unwrap();

        assert_eq!(attributes.kind, MonitorKind::Ping);
        assert_eq!(attributes.status, MonitorStatus::Pending);
        assert!(attributes.request_headers.is_empty());
        assert!(attributes.regions.is_none());
    }

    #[test]
    fn request_headers_keep_ids() {
        let attributes: MonitorAttributes = serde_json::from_value(with(&json!({
            "request_headers": [{ "id": "1", "name": "X-A", "value": "b" }]
        })))
        .unwrap();

        assert_eq!(attributes.request_headers[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn relationships_accept_id_or_null() {
        let with_id: MonitorRelationships =
            serde_json::from_value(json!({ "policy": { "data": "12" } })).unwrap();
        let without: MonitorRelationships =
            serde_json::from_value(json!({ "policy": { "data": null } })).unwrap();

        assert_eq!(with_id.policy.data, Some(json!("12")));
        assert_eq!(without.policy.data, None);
    }
}

mod encoding {
    use super::*;

    #[test]
    fn monitor_type_is_flattened() {
        let attributes: MonitorAttributes = serde_json::from_value(with(&json!({
            "monitor_type": "keyword",
            "required_keyword": "Welcome"
        })))
        .unwrap();

        let value = serde_json::to_value(&attributes).unwrap();

        assert_eq!(value["monitor_type"], "keyword");
        assert_eq!(value["required_keyword"], "Welcome");
        assert_eq!(value["url"], "https://example.org");
    }

    #[test]
    fn http_method_is_lowercase() {
        assert_eq!(serde_json::to_value(HttpMethod::Patch).unwrap(), "patch");
    }

    #[test]
    fn status_values() {
        for (status, text) in [
            (MonitorStatus::Paused, "paused"),
            (MonitorStatus::Pending, "pending"),
            (MonitorStatus::Maintenance, "maintenance"),
            (MonitorStatus::Up, "up"),
            (MonitorStatus::Validating, "validating"),
            (MonitorStatus::Down, "down"),
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), text);
        }
    }

    #[test]
    fn new_header_has_no_id_on_the_wire() {
        let value = serde_json::to_value(RequestHeader::new("X-A", "b")).unwrap();

        assert_eq!(value, json!({ "name": "X-A", "value": "b" }));
    }

    #[test]
    fn kind_reports_its_discriminator() {
        assert_eq!(MonitorKind::Status.monitor_type(), "status");
        assert_eq!(
            MonitorKind::KeywordAbsence {
                required_keyword: "x".to_string()
            }
            .monitor_type(),
            "keyword_absence"
        );
        assert_eq!(
            MonitorKind::Imap {
                port: "993".to_string()
            }
            .monitor_type(),
            "imap"
        );
    }
}

mod new_monitor {
    use super::*;

    #[test]
    fn only_required_fields_by_default() {
        let body = NewMonitor::new("https://example.org", MonitorKind::Status);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "url": "https://example.org", "monitor_type": "status" })
        );
    }

    #[test]
    fn set_fields_are_included() {
        let body = NewMonitor::new(
            "mail.example.org",
            MonitorKind::Smtp {
                port: "25,465".to_string(),
            },
        )
        .with_name("Mail")
        .with_check_frequency(60)
        .with_group("42");

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "url": "mail.example.org",
                "monitor_type": "smtp",
                "port": "25,465",
                "pronounceable_name": "Mail",
                "check_frequency": 60,
                "monitor_group_id": "42"
            })
        );
    }
}

mod reports {
    use super::*;

    #[test]
    fn response_times_decode() {
        let times: ResponseTimes = serde_json::from_value(json!({
            "regions": [{
                "region": "us",
                "response_times": [{ "at": "2024-01-01T00:00:00Z", "response_time": 0.25 }]
            }]
        }))
        .unwrap();

        assert_eq!(times.regions[0].region, "us");
        assert!((times.regions[0].response_times[0].response_time - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn availability_decodes() {
        let summary: AvailabilitySummary = serde_json::from_value(json!({
            "availability": 99.5,
            "total_downtime": 600,
            "number_of_incidents": 2,
            "longest_incident": 400,
            "average_incident": 300
        }))
        .unwrap();

        assert_eq!(summary.number_of_incidents, 2);
        assert_eq!(summary.average_incident, 300);
    }
}
