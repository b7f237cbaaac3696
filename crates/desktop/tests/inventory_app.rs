use std::sync::Arc;
use std::time::Duration;

use dcclink_api::app::{AppServices, build_app};
use dcclink_api::ServerConfig;
use dcclink_desktop::{InventoryApp, InventoryClient, Notice, NoticeLevel, ViewStatus};
use dcclink_infra::SqliteInventoryStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let config = ServerConfig {
            simulated_latency: Duration::ZERO,
            database_url: "sqlite::memory:".to_string(),
            ..ServerConfig::default()
        };
        let store = SqliteInventoryStore::open(&config.database_url)
            .await
            .expect("failed to open store");
        let services = Arc::new(AppServices::new(Arc::new(store), config));
        let app = build_app(services);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn app(&self) -> InventoryApp {
        InventoryApp::new(InventoryClient::new(self.base_url.clone()))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn table(app: &InventoryApp) -> Vec<(String, i64)> {
    app.rows()
        .iter()
        .map(|row| (row.name.clone(), row.quantity))
        .collect()
}

#[tokio::test]
async fn empty_inventory_loads_as_ready() {
    let srv = TestServer::spawn().await;
    let mut app = srv.app();

    app.refresh().await;

    assert_eq!(app.status(), &ViewStatus::Ready);
    assert!(app.rows().is_empty());
    assert!(app.take_notices().is_empty());
}

#[tokio::test]
async fn add_then_refetch_shows_item() {
    let srv = TestServer::spawn().await;
    let mut app = srv.app();

    app.add_item("  Widget ", "5").await;
    app.settle().await;

    assert_eq!(app.take_notices(), vec![Notice::info("Success", "Widget added successfully.")]);
    assert_eq!(table(&app), vec![("Widget".to_string(), 5)]);
}

#[tokio::test]
async fn duplicate_add_shows_server_detail() {
    let srv = TestServer::spawn().await;
    let mut app = srv.app();

    app.add_item("Widget", "5").await;
    app.settle().await;
    app.take_notices();

    app.add_item("widget", "2").await;
    app.settle().await;

    assert_eq!(app.take_notices(), vec![Notice::warning("Error", "Item already exists.")]);
    assert_eq!(table(&app), vec![("Widget".to_string(), 5)]);
}

#[tokio::test]
async fn buy_and_return_adjust_by_one_and_clamp() {
    let srv = TestServer::spawn().await;
    let mut app = srv.app();

    app.add_item("Bolt", "1").await;
    app.modify_quantity("Bolt", 1).await;
    app.settle().await;
    assert_eq!(table(&app), vec![("Bolt".to_string(), 2)]);

    for _ in 0..3 {
        app.modify_quantity("Bolt", -1).await;
    }
    app.settle().await;
    assert_eq!(table(&app), vec![("Bolt".to_string(), 0)]);

    let notices = app.take_notices();
    assert_eq!(notices.len(), 5);
    assert!(notices.iter().all(|n| n.level == NoticeLevel::Info));
    assert_eq!(notices[1].message, "Bolt updated successfully.");
}

#[tokio::test]
async fn remove_and_unknown_names() {
    let srv = TestServer::spawn().await;
    let mut app = srv.app();

    app.add_item("Nut", "4").await;
    app.remove_item("Nut").await;
    app.settle().await;
    assert!(app.rows().is_empty());
    app.take_notices();

    app.remove_item("Nut").await;
    app.modify_quantity("Nut", 1).await;
    assert_eq!(
        app.take_notices(),
        vec![
            Notice::warning("Error", "Item not found."),
            Notice::warning("Error", "Item not found."),
        ]
    );
}

#[tokio::test]
async fn unreachable_server_is_reported() {
    let closed = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut app = InventoryApp::new(InventoryClient::new(format!("http://{closed}")));

    app.refresh().await;
    assert!(matches!(app.status(), ViewStatus::FetchFailed(_)));
    assert!(app.rows().is_empty());

    app.modify_quantity("Gear", 1).await;
    let notices = app.take_notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].title, "Fetch Error");
    assert_eq!(notices[1].level, NoticeLevel::Critical);
    assert_eq!(notices[1].title, "Error");
}
