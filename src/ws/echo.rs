//! Echo WebSocket endpoint.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

/// Replies to every text frame with `Echo: <text>` until the client
/// closes the connection.
pub async fn echo_socket(socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    while let Some(msg) = ws_rx.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let reply = format!("Echo: {}", text.as_str());
                if ws_tx.send(Message::text(reply)).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(%err, "ws receive failed");
                break;
            }
        }
    }

    tracing::debug!("ws connection closed");
}
