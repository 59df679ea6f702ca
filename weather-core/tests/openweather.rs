use weather_now_core::{
    FetchError, OpenWeatherProvider, SearchSession, SubmitOutcome, WeatherProvider, WeatherView,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const PUNE: &str = r#"{
    "coord": {"lon": 73.86, "lat": 18.52},
    "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
    "main": {"temp": 300.15, "feels_like": 299.6, "temp_min": 299.0, "temp_max": 301.2, "pressure": 1012, "humidity": 40},
    "wind": {"speed": 2.57, "deg": 300},
    "dt": 1700000000,
    "sys": {"type": 1, "id": 9052, "country": "IN"},
    "name": "Pune",
    "cod": 200
}"#;

fn provider(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::builder("TEST_KEY")
        .base_url(server.uri())
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn sends_city_and_key_and_maps_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Pune"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PUNE))
        .expect(1)
        .mount(&server)
        .await;

    let snap = provider(&server).current_weather("Pune").await.expect("lookup succeeds");

    assert_eq!(snap.city_name, "Pune");
    assert_eq!(snap.country, "IN");
    assert_eq!(snap.condition, "Clear");
    assert_eq!(snap.pressure_hpa, 1012);

    let view = WeatherView::from_snapshot(&snap);
    assert_eq!(view.temperature_c, 27);
    assert_eq!(view.feels_like_c, 26);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
        )
        .mount(&server)
        .await;

    let err = provider(&server).current_weather("Pune").await.unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name": "Pune"}"#))
        .mount(&server)
        .await;

    let err = provider(&server).current_weather("Pune").await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let provider = OpenWeatherProvider::builder("TEST_KEY")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let err = provider.current_weather("Pune").await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn session_issues_one_request_per_valid_submit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Pune"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PUNE))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = SearchSession::new(provider(&server));

    session.set_input("Atlantis");
    assert!(session.submit().await.is_err());

    session.set_input("PUNE");
    let outcome = session.submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Updated));
    assert_eq!(session.input(), "");

    server.verify().await;
}

#[tokio::test]
async fn session_keeps_snapshot_when_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "Pune"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PUNE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Patna"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = SearchSession::new(provider(&server));
    session.set_input("pune");
    session.submit().await.unwrap();
    let before = session.snapshot().cloned();

    session.set_input("patna");
    let outcome = session.submit().await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed(FetchError::Status { .. })));
    assert_eq!(session.snapshot().cloned(), before);
}
