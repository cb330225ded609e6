//! Chat Module
//!
//! Real-time chat over a persistent WebSocket connection. Every message is
//! persisted before broadcast; newly connected clients receive the full
//! ordered history before any live event.
//!
//! # Architecture
//!
//! - **`events`** - Wire event types (`sendMessage`, `messageHistory`,
//!   `newMessage`, `error`)
//! - **`store`** - Message persistence, ordered by a sequence column
//! - **`hub`** - Live connection set and persist-then-broadcast path
//! - **`socket`** - WebSocket upgrade handler and connection lifecycle
//!
//! # Ordering Guarantees
//!
//! Broadcast order equals persistence order (the hub serializes
//! persist + send), and history replay returns persistence order, so every
//! client observes the same total order of messages.

/// Wire event types
pub mod events;

/// Message persistence
pub mod store;

/// Connection registry and broadcasting
pub mod hub;

/// WebSocket handler
pub mod socket;

pub use hub::ChatHub;
pub use socket::ws_handler;
pub use store::ChatMessage;
