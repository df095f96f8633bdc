//! The three services over real sockets, the order service checking the
//! other two over HTTP.

use restaurant::clients::{ExistenceCheck, HttpLookup};
use restaurant::lifecycle::{server, RestaurantSystem};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

struct Running {
    identity: String,
    catalog: String,
    order: String,
    stop: watch::Sender<bool>,
    servers: Vec<JoinHandle<anyhow::Result<()>>>,
    system: RestaurantSystem,
}

impl Running {
    async fn stop(self) {
        self.stop.send(true).unwrap();
        for server in self.servers {
            server.await.unwrap().unwrap();
        }
        self.system.shutdown().await.unwrap();
    }
}

fn url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}

/// Starts seeded services. `lookup_base` overrides where the order service
/// looks users up, to simulate an unreachable identity service.
async fn start(lookup_base: Option<String>, timeout: Duration) -> Running {
    let system = RestaurantSystem::new();
    system.seed().await.unwrap();

    let any = "127.0.0.1:0".parse().unwrap();
    let identity = server::bind(any).await.unwrap();
    let catalog = server::bind(any).await.unwrap();
    let order = server::bind(any).await.unwrap();

    let identity_url = url(identity.local_addr().unwrap());
    let catalog_url = url(catalog.local_addr().unwrap());
    let order_url = url(order.local_addr().unwrap());

    let client = HttpLookup::client_with_timeout(timeout).unwrap();
    let users: Arc<dyn ExistenceCheck> = Arc::new(HttpLookup::identity(
        client.clone(),
        lookup_base.unwrap_or_else(|| identity_url.clone()),
    ));
    let products: Arc<dyn ExistenceCheck> = Arc::new(HttpLookup::catalog(client, catalog_url.clone()));

    let (stop, shutdown) = watch::channel(false);
    let servers = vec![
        tokio::spawn(server::serve(
            "identity",
            identity,
            system.identity_router(),
            shutdown.clone(),
        )),
        tokio::spawn(server::serve(
            "catalog",
            catalog,
            system.catalog_router(),
            shutdown.clone(),
        )),
        tokio::spawn(server::serve(
            "order",
            order,
            system.order_router(users, products),
            shutdown,
        )),
    ];

    Running {
        identity: identity_url,
        catalog: catalog_url,
        order: order_url,
        stop,
        servers,
        system,
    }
}

#[tokio::test]
async fn test_order_against_seeded_services() {
    let running = start(None, Duration::from_secs(5)).await;
    let http = reqwest::Client::new();

    let response = http.get(format!("{}/order", running.order)).send().await.unwrap();
    assert_eq!(response.status(), 204);

    let response = http
        .post(format!("{}/order", running.order))
        .json(&json!({ "userID": 1, "productID": 1, "quantity": 2, "totalPrice": 31.98 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "order placed successfully");
    assert_eq!(body["order"]["id"], 1);

    let response = http.get(format!("{}/order", running.order)).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let orders: Value = response.json().await.unwrap();
    assert_eq!(
        orders,
        json!([{ "id": 1, "userID": 1, "productID": 1, "quantity": 2, "totalPrice": 31.98 }])
    );

    // Unknown user and unknown product, each a 404 with no order appended.
    let response = http
        .post(format!("{}/order", running.order))
        .json(&json!({ "userID": 99, "productID": 1, "quantity": 1, "totalPrice": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "user not found");

    let response = http
        .post(format!("{}/order", running.order))
        .json(&json!({ "userID": 2, "productID": 99, "quantity": 1, "totalPrice": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "product not found");

    let orders: Value = http
        .get(format!("{}/order", running.order))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orders.as_array().map(Vec::len), Some(1));

    running.stop().await;
}

#[tokio::test]
async fn test_register_login_and_catalog_over_http() {
    let running = start(None, Duration::from_secs(5)).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/register", running.identity))
        .json(&json!({ "username": "admin", "password": "admin123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);

    let response = http
        .post(format!("{}/register", running.identity))
        .json(&json!({ "username": "carol", "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 3);

    let response = http
        .post(format!("{}/login", running.identity))
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let response = http
        .post(format!("{}/login", running.identity))
        .json(&json!({ "username": "admin", "password": "admin123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body.get("token").is_some());

    let products: Value = http
        .get(format!("{}/product", running.catalog))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<_> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Burger", "Pizza", "Salad"]);

    let health: Value = http
        .get(format!("{}/health", running.catalog))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({ "status": "ok", "service": "catalog" }));

    running.stop().await;
}

#[tokio::test]
async fn test_unreachable_identity_service_yields_500() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = url(listener.local_addr().unwrap());
    drop(listener);

    let running = start(Some(dead), Duration::from_millis(500)).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/order", running.order))
        .json(&json!({ "userID": 1, "productID": 1, "quantity": 1, "totalPrice": 15.99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "error checking user existence");

    let response = http.get(format!("{}/order", running.order)).send().await.unwrap();
    assert_eq!(response.status(), 204);

    running.stop().await;
}

#[tokio::test]
async fn test_failing_identity_service_yields_500() {
    // Answers every user lookup with a server error.
    let failing = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let failing_url = url(failing.local_addr().unwrap());
    let app = axum::Router::new().route(
        "/users/{id}",
        axum::routing::get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let stub = tokio::spawn(async move { axum::serve(failing, app).await });

    let running = start(Some(failing_url), Duration::from_secs(2)).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/order", running.order))
        .json(&json!({ "userID": 1, "productID": 1, "quantity": 1, "totalPrice": 15.99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "error checking user existence");

    let response = http.get(format!("{}/order", running.order)).send().await.unwrap();
    assert_eq!(response.status(), 204);

    running.stop().await;
    stub.abort();
}

#[tokio::test]
async fn test_slow_identity_service_times_out() {
    // Accepts connections but never answers.
    let silent = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let silent_url = url(silent.local_addr().unwrap());
    let holder = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = silent.accept().await {
            held.push(socket);
        }
    });

    let running = start(Some(silent_url), Duration::from_millis(200)).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/order", running.order))
        .json(&json!({ "userID": 1, "productID": 1, "quantity": 1, "totalPrice": 15.99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);

    running.stop().await;
    holder.abort();
}

#[tokio::test]
async fn test_concurrent_orders_over_http() {
    let running = start(None, Duration::from_secs(5)).await;
    let http = reqwest::Client::new();

    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let http = http.clone();
            let url = format!("{}/order", running.order);
            tokio::spawn(async move {
                let body = json!({ "userID": 1 + i % 2, "productID": 1 + i % 3, "quantity": 1, "totalPrice": 8.99 });
                let response = http.post(url).json(&body).send().await.unwrap();
                assert_eq!(response.status(), 200);
                let body: Value = response.json().await.unwrap();
                body["order"]["id"].as_u64().unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());

    running.stop().await;
}
