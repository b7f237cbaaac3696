//! The operator runs on the host's thread with no async runtime, so these are
//! plain `#[test]`s; the servers run on a runtime owned by the test.

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, routing::post};
use tokio::sync::mpsc;

use dcclink_api::app::{AppServices, build_app};
use dcclink_api::ServerConfig;
use dcclink_infra::InMemoryInventoryStore;
use dcclink_plugin::{OperatorResult, ReportLevel, Reporter, Scene, SceneObject, SubmitOperator};

#[derive(Default)]
struct RecordingReporter {
    reports: Vec<(ReportLevel, String)>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, level: ReportLevel, message: &str) {
        self.reports.push((level, message.to_string()));
    }
}

struct TestServer {
    base_url: String,
    // Dropping the runtime shuts the server down.
    _runtime: tokio::runtime::Runtime,
}

impl TestServer {
    fn serve(app: Router) -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("failed to build runtime");
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        runtime.spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            _runtime: runtime,
        }
    }

    fn api() -> Self {
        let config = ServerConfig {
            simulated_latency: Duration::ZERO,
            ..ServerConfig::default()
        };
        let services = Arc::new(AppServices::new(Arc::new(InMemoryInventoryStore::new()), config));
        Self::serve(build_app(services))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn scene_with_active_cube(endpoint: String) -> Scene {
    let mut scene = Scene::new();
    let mut cube = SceneObject::new("Cube");
    cube.location = [1.0, 2.0, 3.0];
    cube.rotation_euler = [0.0, 0.0, 1.5];
    scene.add_object(cube);
    scene.set_active("Cube");
    scene.server_endpoint = endpoint;
    scene
}

#[test]
fn no_active_object_cancels() {
    let scene = Scene::new();
    let mut reporter = RecordingReporter::default();

    let result = SubmitOperator::new().execute(&scene, &mut reporter);

    assert_eq!(result, OperatorResult::Cancelled);
    assert_eq!(
        reporter.reports,
        vec![(ReportLevel::Warning, "No active object selected!".to_string())]
    );
}

#[test]
fn sends_location_rotation_and_scale() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let capture = Router::new().route(
        "/transform",
        post(move |Json(body): Json<serde_json::Value>| {
            let tx = tx.clone();
            async move {
                tx.send(body).ok();
                Json(serde_json::json!({ "message": "ok" }))
            }
        }),
    );
    let srv = TestServer::serve(capture);

    let scene = scene_with_active_cube(srv.url("/transform"));
    let mut reporter = RecordingReporter::default();
    let result = SubmitOperator::new().execute(&scene, &mut reporter);

    assert_eq!(result, OperatorResult::Finished);
    assert_eq!(
        rx.try_recv().unwrap(),
        serde_json::json!({
            "location": [1.0, 2.0, 3.0],
            "rotation": [0.0, 0.0, 1.5],
            "scale": [1.0, 1.0, 1.0],
        })
    );
}

#[test]
fn accepted_by_every_transform_endpoint() {
    let srv = TestServer::api();
    let operator = SubmitOperator::new();

    for path in ["/transform", "/translation", "/rotation", "/scale"] {
        let scene = scene_with_active_cube(srv.url(path));
        let mut reporter = RecordingReporter::default();

        let result = operator.execute(&scene, &mut reporter);

        assert_eq!(result, OperatorResult::Finished);
        assert_eq!(
            reporter.reports,
            vec![(ReportLevel::Info, "Data sent successfully!".to_string())]
        );
    }
}

#[test]
fn non_200_is_reported_with_status_code() {
    let srv = TestServer::api();
    let scene = scene_with_active_cube(srv.url("/no-such-endpoint"));
    let mut reporter = RecordingReporter::default();

    let result = SubmitOperator::new().execute(&scene, &mut reporter);

    assert_eq!(result, OperatorResult::Finished);
    assert_eq!(reporter.reports, vec![(ReportLevel::Error, "Error: 404".to_string())]);
}

#[test]
fn connection_failure_is_reported() {
    let closed = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let scene = scene_with_active_cube(format!("http://{closed}/transform"));
    let mut reporter = RecordingReporter::default();

    let result = SubmitOperator::new().execute(&scene, &mut reporter);

    assert_eq!(result, OperatorResult::Finished);
    assert_eq!(reporter.reports.len(), 1);
    let (level, message) = &reporter.reports[0];
    assert_eq!(*level, ReportLevel::Error);
    assert!(message.starts_with("Connection failed: "), "{message}");
}
