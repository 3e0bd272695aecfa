//! End-to-end lookups against a mock WeatherAPI.com server.

use std::{
    io::{Read, Write},
    net::TcpListener,
    time::Duration,
};

use weather_core::{
    ErrorKind, FixedClock, LocationQuery, LookupStatus, WeatherApiProvider, WeatherProvider,
    WeatherSnapshot, WeatherWidget,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const KEY: &str = "test-key";

fn current_response(name: &str, temp_c: f64, condition: &str) -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": name,
            "region": "Ile-de-France",
            "country": "France",
            "localtime_epoch": 1_718_000_000,
            "localtime": "2024-06-10 14:13"
        },
        "current": {
            "last_updated_epoch": 1_717_999_200,
            "temp_c": temp_c,
            "temp_f": 71.6,
            "is_day": 1,
            "condition": { "text": condition, "icon": "//cdn.weatherapi.com/113.png", "code": 1000 },
            "wind_kph": 11.2,
            "humidity": 48
        }
    })
}

fn not_found_response() -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(serde_json::json!({
        "error": { "code": 1006, "message": "No matching location found." }
    }))
}

fn provider_for(server: &MockServer) -> WeatherApiProvider {
    WeatherApiProvider::with_base_url(KEY.to_string(), format!("{}/v1", server.uri()))
}

/// Base URL of a port nothing is listening on.
fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/v1")
}

/// Serves one request with `status_line` and a body shorter than its
/// `Content-Length`, then closes the connection.
fn truncated_body_base_url(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response =
            format!("HTTP/1.1 {status_line}\r\nContent-Length: 500\r\n\r\n{{\"error\":");
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    format!("http://127.0.0.1:{port}/v1")
}

#[tokio::test]
async fn provider_sends_key_and_location() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", KEY))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_response("Paris", 22.0, "Sunny")))
        .expect(1)
        .mount(&server)
        .await;

    let query = LocationQuery::try_from("Paris").unwrap();
    let snapshot = provider_for(&server).current_conditions(&query).await.unwrap();

    assert_eq!(snapshot, WeatherSnapshot::new(22.0, "Sunny", "Paris"));
}

#[tokio::test]
async fn scenario_paris_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_response("Paris", 22.0, "Sunny")))
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::with_clock(provider_for(&server), FixedClock(14));
    widget.set_location("Paris");
    let status = widget.submit().await.unwrap();

    assert!(matches!(status, LookupStatus::Succeeded(_)));
    let messages = widget.view().messages.unwrap();
    assert!(messages.temperature.contains("pleasant 22"));
    assert_eq!(messages.condition, "It's a beautiful sunny day!");
    assert_eq!(messages.location_time, "Paris During the Day");
}

#[tokio::test]
async fn scenario_blank_input_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::with_clock(provider_for(&server), FixedClock(14));
    widget.set_location("   ");
    let status = widget.submit().await.unwrap();

    assert_eq!(status, &LookupStatus::Failed(ErrorKind::EmptyInput));
    server.verify().await;
}

#[tokio::test]
async fn scenario_unknown_location_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "Nowhereland"))
        .respond_with(not_found_response())
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::with_clock(provider_for(&server), FixedClock(14));
    widget.set_location("Nowhereland");
    let status = widget.submit().await.unwrap();

    assert_eq!(status, &LookupStatus::Failed(ErrorKind::LocationNotFound));
}

#[tokio::test]
async fn scenario_transport_failure_is_network_error() {
    let provider = WeatherApiProvider::with_base_url(KEY.to_string(), closed_base_url());
    let mut widget = WeatherWidget::with_clock(provider, FixedClock(14));
    widget.set_location("Paris");

    let status = widget.submit().await.unwrap();

    assert_eq!(status, &LookupStatus::Failed(ErrorKind::NetworkError));
    let view = widget.view();
    assert!(view.input_enabled);
    assert!(!view.status.is_loading());
}

#[tokio::test]
async fn scenario_unknown_condition_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_response("Cairo", 31.0, "Hazy")))
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::with_clock(provider_for(&server), FixedClock(19));
    widget.set_location("Cairo");
    widget.submit().await.unwrap();

    let messages = widget.view().messages.unwrap();
    assert_eq!(messages.condition, "Hazy");
    assert!(messages.temperature.contains("hot"));
    assert_eq!(messages.location_time, "Cairo at Night");
}

#[tokio::test]
async fn malformed_success_body_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::with_clock(provider_for(&server), FixedClock(14));
    widget.set_location("Paris");
    let status = widget.submit().await.unwrap();

    assert_eq!(status, &LookupStatus::Failed(ErrorKind::NetworkError));
}

#[tokio::test]
async fn new_success_replaces_previous_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "Nowhereland"))
        .respond_with(not_found_response())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Oslo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_response("Oslo", -3.0, "Snow")))
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::with_clock(provider_for(&server), FixedClock(8));
    widget.set_location("Nowhereland");
    widget.submit().await.unwrap();
    widget.set_location("Oslo");
    let status = widget.submit().await.unwrap();

    assert_eq!(status, &LookupStatus::Succeeded(WeatherSnapshot::new(-3.0, "Snow", "Oslo")));
    let messages = widget.view().messages.unwrap();
    assert_eq!(messages.temperature, "It's freezing at -3°C! Bundle up!");
    assert_eq!(messages.condition, "Bundle up! It's snowing.");
}

#[tokio::test]
async fn rejected_status_wins_over_unreadable_body() {
    let provider =
        WeatherApiProvider::with_base_url(KEY.to_string(), truncated_body_base_url("400 Bad Request"));
    let mut widget = WeatherWidget::with_clock(provider, FixedClock(14));
    widget.set_location("Nowhereland");

    let status = widget.submit().await.unwrap();

    assert_eq!(status, &LookupStatus::Failed(ErrorKind::LocationNotFound));
}

#[tokio::test]
async fn unreadable_success_body_is_network_error() {
    let provider =
        WeatherApiProvider::with_base_url(KEY.to_string(), truncated_body_base_url("200 OK"));
    let mut widget = WeatherWidget::with_clock(provider, FixedClock(14));
    widget.set_location("Paris");

    let status = widget.submit().await.unwrap();

    assert_eq!(status, &LookupStatus::Failed(ErrorKind::NetworkError));
}

#[tokio::test]
async fn timed_out_submit_releases_loading() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "Slowtown"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(current_response("Slowtown", 12.0, "Cloudy"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_response("Paris", 22.0, "Sunny")))
        .mount(&server)
        .await;

    let mut widget = WeatherWidget::with_clock(provider_for(&server), FixedClock(14));
    widget.set_location("Slowtown");
    let elapsed = tokio::time::timeout(Duration::from_millis(200), widget.submit()).await;
    assert!(elapsed.is_err());

    let view = widget.view();
    assert_eq!(view.status, LookupStatus::Failed(ErrorKind::NetworkError));
    assert!(view.input_enabled);

    widget.set_location("Paris");
    let status = widget.submit().await.expect("next submission accepted");
    assert_eq!(status, &LookupStatus::Succeeded(WeatherSnapshot::new(22.0, "Sunny", "Paris")));
}
