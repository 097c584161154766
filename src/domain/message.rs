//! Payload transformation and response formatting

use super::ports::{Channel, DispatchResult};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Largest integer an `f64` holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Reverse the character order of a payload.
///
/// Total and involutive: `reverse(&reverse(p)) == p` for every string.
pub fn reverse(payload: &str) -> String {
    payload.chars().rev().collect()
}

/// Render the reply returned to inbound callers:
/// `Processed <label>: <transformed> with response: <json>`.
///
/// An absent result renders as the literal `null`.
pub fn format_response(channel: Channel, transformed: &str, result: &DispatchResult) -> String {
    let json = match result {
        Some(value) => {
            let mut value = value.clone();
            normalize_numbers(&mut value);
            value.to_string()
        }
        None => "null".to_string(),
    };
    format!(
        "Processed {}: {} with response: {}",
        channel.label(),
        transformed,
        json
    )
}

/// Rewrite integral floats (`10.0`, `1e2`) as integers so they render
/// without a fractional part.
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
                    *n = Number::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

/// Queue provider acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueReceipt {
    #[serde(rename = "MessageId")]
    pub message_id: String,
    #[serde(
        rename = "MD5OfMessageBody",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub md5_of_message_body: Option<String>,
    #[serde(
        rename = "SequenceNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sequence_number: Option<String>,
}

impl QueueReceipt {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            md5_of_message_body: None,
            sequence_number: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("a"), "a");
        assert_eq!(reverse("héllo wörld"), "dlröw olléh");
    }

    #[test]
    fn test_reverse_is_involutive() {
        for s in ["", "x", "abc", "socket query HTTP", "日本語テキスト", "mixed 🦀 text"] {
            assert_eq!(reverse(&reverse(s)), s);
        }
    }

    #[test]
    fn test_format_service_response() {
        let result = Some(json!({"status": "success"}));
        assert_eq!(
            format_response(Channel::Service, "olleh", &result),
            r#"Processed HTTP: olleh with response: {"status":"success"}"#
        );
    }

    #[test]
    fn test_format_absent_result() {
        assert_eq!(
            format_response(Channel::Service, "tset", &None),
            "Processed HTTP: tset with response: null"
        );
    }

    #[test]
    fn test_format_preserves_key_order() {
        let result: DispatchResult = serde_json::from_str(r#"{"z":1,"a":{"y":true,"b":null}}"#).ok();
        assert_eq!(
            format_response(Channel::Queue, "dlrow", &result),
            r#"Processed SQS: dlrow with response: {"z":1,"a":{"y":true,"b":null}}"#
        );
    }

    #[test]
    fn test_format_renders_integral_floats_as_integers() {
        let result: DispatchResult =
            serde_json::from_str(r#"{"price":10.0,"big":1e2,"ratio":0.5,"list":[-3.0,7]}"#).ok();
        assert_eq!(
            format_response(Channel::Service, "x", &result),
            r#"Processed HTTP: x with response: {"price":10,"big":100,"ratio":0.5,"list":[-3,7]}"#
        );
    }

    #[test]
    fn test_receipt_serialization() {
        let receipt = QueueReceipt::new("12345");
        assert_eq!(
            serde_json::to_string(&receipt).unwrap(),
            r#"{"MessageId":"12345"}"#
        );

        let receipt = QueueReceipt {
            md5_of_message_body: Some("abc".into()),
            ..QueueReceipt::new("m-1")
        };
        assert_eq!(
            serde_json::to_value(&receipt).unwrap(),
            json!({"MessageId": "m-1", "MD5OfMessageBody": "abc"})
        );
    }
}
