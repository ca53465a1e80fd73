//! WebSocket handler for the live push channel.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{future, SinkExt, StreamExt};
use std::sync::Arc;

use crate::server::state::AppState;

/// WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Streams one connection's live feed until the client goes away.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (guard, mut feed) = state.open_connection();
    let connection_id = guard.id();
    tracing::info!(connection_id, "Live connection opened");

    let (sender, mut receiver) = socket.split();
    let sink = sender.with(|json: String| future::ready(Ok::<_, axum::Error>(Message::Text(json))));

    // Feed task: advance, emit, sleep, until a send fails
    let mut send_task = tokio::spawn(async move { feed.run(sink).await });

    // The channel is push-only; reading just notices a close while the feed sleeps
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        result = &mut send_task => {
            recv_task.abort();
            match result {
                Ok(Ok(summary)) => tracing::debug!(
                    connection_id,
                    rounds = summary.rounds,
                    messages = summary.messages_sent,
                    "Live feed ended"
                ),
                Ok(Err(e)) => tracing::warn!(connection_id, error = %e, "Live feed failed"),
                Err(e) => tracing::warn!(connection_id, error = %e, "Live feed task aborted"),
            }
        },
        _ = &mut recv_task => {
            send_task.abort();
        },
    }

    drop(guard);
    tracing::info!(connection_id, "Live connection closed");
}
