//! WebSocket handler for the chat channel.
//!
//! Endpoint: GET /ws
//!
//! Clients connect here to join the chat. The server:
//! - replays the full persisted history to the new connection (oldest first)
//! - broadcasts every new message to all live connections, sender included
//! - reports validation/persistence failures only to the sending connection

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::stream::StreamExt;
use futures_util::SinkExt;

use crate::chat::events::{ClientEvent, ServerEvent};
use crate::chat::store::load_messages;
use crate::server::state::AppState;

/// Axum handler — upgrades HTTP to WebSocket.
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(state, socket))
}

/// Chat connection lifecycle.
///
/// Subscribes to the hub, replays history, then relays events until the
/// client disconnects. Dropping the subscription at any point removes this
/// connection from the live set.
async fn handle_socket(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    // Subscribe BEFORE loading history so a message persisted in between is
    // not lost. It may then appear in both the history and the live stream
    // (at-least-once delivery), but never in neither.
    let mut hub_rx = state.chat_hub.subscribe();

    tracing::debug!("chat client connected ({} live)", state.chat_hub.connection_count());

    // ── History replay ──────────────────────────────────────────────
    let history = match load_messages(&state.db_pool).await {
        Ok(messages) => messages,
        Err(e) => {
            tracing::error!("failed to load chat history: {:?}", e);
            let event = ServerEvent::Error {
                message: "Failed to load message history".to_string(),
            };
            if let Ok(json) = serde_json::to_string(&event) {
                let _ = ws_tx.send(Message::Text(json.into())).await;
            }
            return;
        }
    };

    let event = ServerEvent::MessageHistory { messages: history };
    let json = match serde_json::to_string(&event) {
        Ok(j) => j,
        Err(e) => {
            tracing::error!("failed to serialize history: {:?}", e);
            return;
        }
    };
    if ws_tx.send(Message::Text(json.into())).await.is_err() {
        return;
    }

    // ── Live event loop ─────────────────────────────────────────────

    loop {
        tokio::select! {
            // Forward broadcast messages to this client
            msg = hub_rx.recv() => {
                match msg {
                    Ok(message) => {
                        let event = ServerEvent::NewMessage { message };
                        let json = match serde_json::to_string(&event) {
                            Ok(j) => j,
                            Err(e) => {
                                tracing::warn!("failed to serialize message event: {:?}", e);
                                continue;
                            }
                        };
                        if ws_tx.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("chat client lagged, dropped {n} messages");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }

            // Handle client events
            frame = ws_rx.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = handle_client_frame(&state, text.as_str()).await {
                            let json = match serde_json::to_string(&reply) {
                                Ok(j) => j,
                                Err(_) => continue,
                            };
                            // Error frames go to this connection only
                            if ws_tx.send(Message::Text(json.into())).await.is_err() {
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(_)) => break,
                    _ => {} // Ignore binary/ping/pong frames
                }
            }
        }
    }

    tracing::debug!("chat client disconnected");
}

/// Process a single client text frame.
///
/// Returns an event to send back point-to-point, or `None` when the frame
/// was handled entirely via broadcast (the sender receives its own message
/// through its hub subscription like everyone else).
async fn handle_client_frame(state: &AppState, text: &str) -> Option<ServerEvent> {
    let event: ClientEvent = match serde_json::from_str(text) {
        Ok(event) => event,
        Err(_) => {
            return Some(ServerEvent::Error {
                message: "Malformed event".to_string(),
            });
        }
    };

    match event {
        ClientEvent::SendMessage { username, message } => {
            match state.chat_hub.publish(&state.db_pool, &username, &message).await {
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("chat send failed: {}", e);
                    Some(ServerEvent::Error { message: e.message() })
                }
            }
        }
    }
}
