//! End-to-end checks against a real listener.

#![allow(clippy::panic)]

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;

use api_router::api;
use api_router::api::dto::{HealthResponse, RouteInfo, RouteKind};

async fn spawn_server(prefix: &str) -> SocketAddr {
    let Ok(app) = api::build_router(prefix, true) else {
        panic!("demo routes should mount");
    };
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

#[tokio::test]
async fn health_over_http() {
    let addr = spawn_server("api/v1").await;
    let Ok(response) = reqwest::get(format!("http://{addr}/api/v1/health")).await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let Ok(health) = response.json::<HealthResponse>().await else {
        panic!("health body should parse");
    };
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn route_listing_reports_websocket() {
    let addr = spawn_server("/svc/").await;
    let Ok(response) = reqwest::get(format!("http://{addr}/svc/routes")).await else {
        panic!("request failed");
    };
    let Ok(routes) = response.json::<Vec<RouteInfo>>().await else {
        panic!("routes body should parse");
    };
    let Some(ws) = routes.iter().find(|r| r.kind == RouteKind::WebSocket) else {
        panic!("websocket route missing");
    };
    assert_eq!(ws.path, "/svc/ws");
    assert_eq!(ws.name.as_deref(), Some("echo"));
}

#[tokio::test]
async fn websocket_echo() {
    let addr = spawn_server("/api/v1").await;
    let Ok((mut socket, _)) = tokio_tungstenite::connect_async(format!("ws://{addr}/api/v1/ws")).await
    else {
        panic!("websocket handshake failed");
    };

    if socket.send(Message::text("hello")).await.is_err() {
        panic!("send failed");
    }
    let Some(Ok(reply)) = socket.next().await else {
        panic!("no reply");
    };
    assert_eq!(reply.to_text().ok(), Some("Echo: hello"));

    let _ = socket.close(None).await;
}

#[tokio::test]
async fn websocket_route_feed_reads_app_state() {
    let addr = spawn_server("/api/v1").await;
    let Ok((mut socket, _)) =
        tokio_tungstenite::connect_async(format!("ws://{addr}/api/v1/ws/routes")).await
    else {
        panic!("websocket handshake failed");
    };

    let Some(Ok(frame)) = socket.next().await else {
        panic!("no route table");
    };
    let Ok(text) = frame.to_text() else {
        panic!("route table should be text");
    };
    let Ok(routes) = serde_json::from_str::<Vec<RouteInfo>>(text) else {
        panic!("route table should parse");
    };
    assert_eq!(routes.len(), 6);
    assert!(routes.iter().any(|r| r.path == "/api/v1/ws/routes"));
}
