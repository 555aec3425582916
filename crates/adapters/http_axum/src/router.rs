//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use wattboard_app::ports::SensorFeed;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. When `assets_dir` is given, every other
/// path is served from it, with unknown paths falling back to its
/// `index.html` so the dashboard can handle them.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<F>(state: AppState<F>, assets_dir: Option<&Path>) -> Router
where
    F: SensorFeed + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes());

    if let Some(dir) = assets_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use std::future::Future;
    use std::sync::Arc;
    use tower::ServiceExt;
    use wattboard_app::event_bus::InProcessEventBus;
    use wattboard_app::ports::RelayGateway;
    use wattboard_app::services::relay_service::RelayService;
    use wattboard_app::services::telemetry_service::TelemetryService;
    use wattboard_app::state::DashboardState;
    use wattboard_domain::error::WattboardError;
    use wattboard_domain::relay::Load;
    use wattboard_domain::telemetry::TelemetrySample;

    struct StubGateway;
    struct StubFeed;

    impl RelayGateway for StubGateway {
        fn sync_main(&self, _on: bool) -> impl Future<Output = Result<(), WattboardError>> + Send {
            async { Ok(()) }
        }

        fn sync_load(
            &self,
            _load: Load,
            _on: bool,
        ) -> impl Future<Output = Result<(), WattboardError>> + Send {
            async { Ok(()) }
        }
    }

    impl SensorFeed for StubFeed {
        fn fetch(&self) -> impl Future<Output = Result<TelemetrySample, WattboardError>> + Send {
            async {
                Ok(TelemetrySample {
                    voltage: 229.8,
                    current: 3.1,
                    power: 684.0,
                    frequency: 50.0,
                    power_factor: Some(0.96),
                    energy: Some(12.7),
                })
            }
        }
    }

    fn test_state() -> AppState<StubFeed> {
        let event_bus = Arc::new(InProcessEventBus::new(16));
        let shared = Arc::new(DashboardState::new());
        AppState::new(
            Arc::new(RelayService::new(
                StubGateway,
                Arc::clone(&event_bus),
                Arc::clone(&shared),
            )),
            Arc::new(TelemetryService::new(
                StubFeed,
                Arc::clone(&event_bus),
                shared,
            )),
            event_bus,
        )
    }

    fn put_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state(), None);

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn should_start_with_every_relay_off() {
        let app = build(test_state(), None);

        let response = app.oneshot(get_request("/api/relays")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"main": false, "loads": [false, false, false, false]})
        );
    }

    #[tokio::test]
    async fn should_switch_main_relay() {
        let app = build(test_state(), None);

        let response = app
            .oneshot(put_json("/api/relays/main", r#"{"on": true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["main"], true);
    }

    #[tokio::test]
    async fn should_reject_load_while_main_is_off() {
        let app = build(test_state(), None);

        let response = app
            .oneshot(put_json("/api/relays/2", r#"{"on": true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "load 2 is disabled while the main relay is off"
        );
    }

    #[tokio::test]
    async fn should_switch_load_once_main_is_on() {
        let state = test_state();
        state.relay_service.set_main(true).await;
        let app = build(state, None);

        let response = app
            .oneshot(put_json("/api/relays/4", r#"{"on": true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["loads"],
            serde_json::json!([false, false, false, true])
        );
    }

    #[tokio::test]
    async fn should_reject_unknown_load() {
        let state = test_state();
        state.relay_service.set_main(true).await;
        let app = build(state, None);

        let response = app
            .oneshot(put_json("/api/relays/5", r#"{"on": true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "unknown load 5, expected 1 to 4"
        );
    }

    #[tokio::test]
    async fn should_reject_out_of_range_load_number_as_json() {
        let app = build(test_state(), None);

        let response = app
            .oneshot(put_json("/api/relays/300", r#"{"on": true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "unknown load 300, expected 1 to 4"})
        );
    }

    #[tokio::test]
    async fn should_reject_non_numeric_load_as_json() {
        let app = build(test_state(), None);

        let response = app
            .oneshot(put_json("/api/relays/abc", r#"{"on": true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "unknown load abc, expected 1 to 4"
        );
    }

    #[tokio::test]
    async fn should_reject_malformed_switch_body_as_json() {
        let state = test_state();
        let app = build(state.clone(), None);

        let response = app
            .oneshot(put_json("/api/relays/main", r#"{"on": "#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().is_some_and(|msg| !msg.is_empty()));
        assert!(!state.relay_service.panel().await.main());
    }

    #[tokio::test]
    async fn should_reject_switch_body_without_flag_as_json() {
        let app = build(test_state(), None);

        let response = app
            .oneshot(put_json("/api/relays/main", r#"{"state": "on"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn should_reject_malformed_connectivity_body_as_json() {
        let app = build(test_state(), None);

        let response = app
            .oneshot(put_json("/api/connectivity", "online"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn should_return_dashboard_with_recorded_samples() {
        let state = test_state();
        state.telemetry_service.poll_once().await;
        let app = build(state, None);

        let response = app.oneshot(get_request("/api/dashboard")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["relays"]["main"], false);
        assert_eq!(json["dashboard"]["status"], "online");
        assert_eq!(json["dashboard"]["voltage"]["points"][0]["value"], 229.8);
        assert_eq!(json["dashboard"]["table"]["rows"][0]["serial"], 1);
    }

    #[tokio::test]
    async fn should_report_browser_connectivity() {
        let state = test_state();
        let app = build(state.clone(), None);

        let response = app
            .oneshot(put_json("/api/connectivity", r#"{"online": false}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!("offline"));
        assert_eq!(
            state.telemetry_service.snapshot().await.status.label(),
            "OFFLINE \u{b7} check connection"
        );
    }

    #[tokio::test]
    async fn should_open_event_stream() {
        let app = build(test_state(), None);

        let response = app.oneshot(get_request("/api/events/stream")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/event-stream"
        );
    }

    #[tokio::test]
    async fn should_return_not_found_without_assets() {
        let app = build(test_state(), None);

        let response = app.oneshot(get_request("/index.html")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_serve_dashboard_index_for_unknown_paths() {
        let dir = std::env::temp_dir().join(format!("wattboard-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>wattboard</h1>").unwrap();
        let app = build(test_state(), Some(&dir));

        let response = app.oneshot(get_request("/some/page")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<h1>wattboard</h1>");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
