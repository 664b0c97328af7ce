//! Response-shape normalization.
//!
//! The API is inconsistent about envelopes: some endpoints return a bare
//! payload, others wrap it in `{success, data, message}`. Both shapes are
//! decoded into one typed result here, at the client boundary; anything
//! else fails with a distinct malformed-response error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use tiket_core::error::{Result, TiketError};

/// Maximum number of characters of raw body text surfaced in errors.
pub const ERROR_SNIPPET_LEN: usize = 200;

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Envelope {
        #[serde(default)]
        #[allow(dead_code)]
        success: Option<bool>,
        data: Vec<T>,
    },
    Bare(Vec<T>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemPayload<T> {
    Envelope {
        #[serde(default)]
        #[allow(dead_code)]
        success: Option<bool>,
        data: T,
    },
    Bare(T),
}

/// Decodes a collection body that may be a bare array or a `{data: []}`
/// envelope.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    match serde_json::from_str::<ListPayload<T>>(body) {
        Ok(ListPayload::Envelope { data, .. }) => Ok(data),
        Ok(ListPayload::Bare(items)) => Ok(items),
        Err(_) => Err(TiketError::malformed(error_message(body))),
    }
}

/// Decodes a single-record body that may be bare or enveloped.
pub fn decode_item<T: DeserializeOwned>(body: &str) -> Result<T> {
    match serde_json::from_str::<ItemPayload<T>>(body) {
        Ok(ItemPayload::Envelope { data, .. }) => Ok(data),
        Ok(ItemPayload::Bare(item)) => Ok(item),
        Err(_) => Err(TiketError::malformed(error_message(body))),
    }
}

/// Extracts a human-readable message from an error body: the JSON
/// `message` field when present, otherwise the truncated raw text.
pub fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    snippet(body)
}

/// Truncates raw body text to [`ERROR_SNIPPET_LEN`] characters.
pub fn snippet(text: &str) -> String {
    text.chars().take(ERROR_SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiket_core::ticket::Ticket;
    use tiket_core::user::User;

    const TICKET: &str = r#"{
        "id": 1,
        "case_number": "GS-0001",
        "subject": "App crash",
        "status": "Opened",
        "opened": "2024-05-01T08:30:00Z"
    }"#;

    #[test]
    fn test_bare_array_and_envelope_normalize_identically() {
        let bare = format!("[{TICKET}]");
        let envelope = format!("{{\"success\": true, \"data\": [{TICKET}]}}");

        let from_bare: Vec<Ticket> = decode_list(&bare).unwrap();
        let from_envelope: Vec<Ticket> = decode_list(&envelope).unwrap();
        assert_eq!(from_bare, from_envelope);
        assert_eq!(from_bare.len(), 1);
        assert_eq!(from_bare[0].case_number, "GS-0001");
    }

    #[test]
    fn test_envelope_without_success_flag_still_decodes() {
        let envelope = format!("{{\"data\": [{TICKET}]}}");
        let tickets: Vec<Ticket> = decode_list(&envelope).unwrap();
        assert_eq!(tickets.len(), 1);
    }

    #[test]
    fn test_junk_shape_is_malformed() {
        let err = decode_list::<Ticket>("{\"rows\": []}").unwrap_err();
        assert!(err.is_malformed());

        let err = decode_list::<Ticket>("\"oops\"").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_malformed_error_carries_embedded_message() {
        let body = r#"{"success": false, "message": "Customer not found"}"#;
        let err = decode_list::<Ticket>(body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed response: Customer not found"
        );
    }

    #[test]
    fn test_item_decodes_both_shapes() {
        let bare: Ticket = decode_item(TICKET).unwrap();
        let envelope: Ticket =
            decode_item(&format!("{{\"success\": true, \"data\": {TICKET}}}")).unwrap();
        assert_eq!(bare, envelope);
    }

    #[test]
    fn test_error_message_prefers_message_field() {
        assert_eq!(
            error_message(r#"{"message": "Invalid credentials"}"#),
            "Invalid credentials"
        );
        assert_eq!(error_message("plain text error"), "plain text error");
    }

    #[test]
    fn test_snippet_truncates_to_200_chars() {
        let long = "x".repeat(500);
        assert_eq!(snippet(&long).len(), 200);
        assert_eq!(error_message(&long).len(), 200);
    }

    #[test]
    fn test_user_list_decodes_from_bare_array() {
        let body = r#"[{"id": 1, "username": "a", "name": "A", "role": "admin"}]"#;
        let users: Vec<User> = decode_list(body).unwrap();
        assert_eq!(users[0].username, "a");
    }
}
