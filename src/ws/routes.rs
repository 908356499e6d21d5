//! Route snapshot WebSocket endpoint.

use axum::extract::ws::{Message, WebSocket};
use futures_util::SinkExt;

use crate::app_state::AppState;

/// Sends the mounted route table as one JSON text frame, then closes.
pub async fn routes_socket(mut socket: WebSocket, state: AppState) {
    let payload = match serde_json::to_string(&*state.routes) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(%err, "failed to encode route table");
            return;
        }
    };
    if socket.send(Message::text(payload)).await.is_err() {
        tracing::debug!("ws client left before route table was sent");
        return;
    }
    let _ = socket.close().await;
}
