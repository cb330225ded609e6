/**
 * Chat Wire Events
 *
 * JSON text frames exchanged over the WebSocket chat channel. Events are
 * tagged by a `type` field:
 *
 * - client -> server: `sendMessage`
 * - server -> client: `messageHistory` (once, at connect), `newMessage`
 *   (broadcast), `error` (point-to-point, never broadcast)
 */

use serde::{Deserialize, Serialize};

use crate::chat::store::ChatMessage;

/// Events sent by clients
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Send a chat message
    ///
    /// The username is client-asserted and not cross-checked against any
    /// authenticated identity; the chat channel is anonymous.
    #[serde(rename_all = "camelCase")]
    SendMessage { username: String, message: String },
}

/// Events sent by the server
#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Full ordered history, delivered once per connection at establishment
    #[serde(rename_all = "camelCase")]
    MessageHistory { messages: Vec<ChatMessage> },

    /// A just-persisted message, delivered to every live connection
    #[serde(rename_all = "camelCase")]
    NewMessage { message: ChatMessage },

    /// Failure report to the originating connection only
    #[serde(rename_all = "camelCase")]
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_send_message_deserialization() {
        let json = r#"{"type":"sendMessage","username":"alice","message":"hi"}"#;
        let event: ClientEvent = serde_json::from_str(json).unwrap();
        match event {
            ClientEvent::SendMessage { username, message } => {
                assert_eq!(username, "alice");
                assert_eq!(message, "hi");
            }
        }
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        let json = r#"{"type":"somethingElse","x":1}"#;
        assert!(serde_json::from_str::<ClientEvent>(json).is_err());
    }

    #[test]
    fn test_new_message_tag() {
        let event = ServerEvent::NewMessage {
            message: ChatMessage {
                id: Uuid::new_v4(),
                username: "alice".to_string(),
                message: "hi".to_string(),
                created_at: Utc::now(),
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "newMessage");
        assert_eq!(json["message"]["username"], "alice");
    }

    #[test]
    fn test_history_tag() {
        let event = ServerEvent::MessageHistory { messages: vec![] };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "messageHistory");
    }
}
