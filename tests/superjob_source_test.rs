use httpmock::prelude::*;
use vacancy_stats::adapters::http::build_client;
use vacancy_stats::config::{HttpSettings, SuperJobSettings};
use vacancy_stats::domain::ports::VacancySource;
use vacancy_stats::{collect_statistics, StatsError, SuperJobSource};

const SECRET: &str = "v3.r.123456.test";

fn source(server: &MockServer) -> SuperJobSource {
    let settings = SuperJobSettings {
        base_url: server.url("/2.0/vacancies"),
        secret_key: Some(SECRET.to_string()),
        ..SuperJobSettings::default()
    };
    SuperJobSource::new(build_client(&HttpSettings::default()).unwrap(), settings).unwrap()
}

fn vacancy(id: u64, currency: &str, from: u64, to: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "profession": format!("Developer {}", id),
        "currency": currency,
        "payment_from": from,
        "payment_to": to
    })
}

#[tokio::test]
async fn test_stops_when_more_is_false() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "objects": [vacancy(1, "rub", 100000, 0), vacancy(2, "rub", 0, 0)],
                "total": 3,
                "more": true
            }));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies")
            .query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "objects": [vacancy(3, "rub", 50000, 70000)],
                "total": 3,
                "more": false
            }));
    });
    let third = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies")
            .query_param("page", "2");
        then.status(200).json_body(serde_json::json!({
            "objects": [],
            "total": 3,
            "more": false
        }));
    });

    let fetched = source(&server).fetch("Python").await.unwrap();

    first.assert();
    second.assert();
    third.assert_hits(0);
    let ids: Vec<u64> = fetched.vacancies.iter().map(|v| v.id.unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(fetched.found, 3);
}

#[tokio::test]
async fn test_sends_app_id_header_and_filters() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies")
            .header("X-Api-App-Id", SECRET)
            .query_param("keyword", "c++")
            .query_param("catalogues", "48")
            .query_param("town", "Москва")
            .query_param("no_agreement", "1")
            .query_param("page", "0");
        then.status(200).json_body(serde_json::json!({
            "objects": [],
            "total": 0,
            "more": false
        }));
    });

    let fetched = source(&server).fetch("C++").await.unwrap();

    api_mock.assert();
    assert!(fetched.vacancies.is_empty());
}

#[tokio::test]
async fn test_rejected_credential_is_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies");
        then.status(403)
            .json_body(serde_json::json!({"error": {"code": 403, "message": "Invalid app id"}}));
    });

    let result = source(&server).fetch("Go").await;

    assert!(matches!(
        result,
        Err(StatsError::HttpStatus { status: 403, .. })
    ));
}

#[tokio::test]
async fn test_statistics_use_rouble_vacancies_only() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies")
            .query_param("keyword", "go");
        then.status(200).json_body(serde_json::json!({
            "objects": [
                vacancy(1, "rub", 100000, 0),
                vacancy(2, "rub", 0, 250000),
                vacancy(3, "uah", 30000, 40000),
                vacancy(4, "rub", 0, 0)
            ],
            "total": 17,
            "more": false
        }));
    });

    let languages = vec!["Go".to_string()];
    let statistics = collect_statistics(&languages, &source(&server)).await.unwrap();

    let go = statistics.get("Go").unwrap();
    assert_eq!(go.vacancies_found, 17);
    assert_eq!(go.vacancies_processed, 2);
    // (120000 + 200000) / 2
    assert_eq!(go.average_salary, 160000);
}
