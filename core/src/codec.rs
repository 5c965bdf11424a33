//! JSON wire policy shared by requests and responses.
//!
//! Payload types opt into the wire conventions with serde attributes:
//! `#[serde(rename_all = "camelCase")]` on structs, plain unit enums (which
//! serde writes as their variant names) and [`utc`] on timestamp fields.
//! This module owns the encode/decode entry points so every body the client
//! sends or reads goes through the same code path.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a payload as a JSON request body.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Decode a JSON document into `T`.
pub fn decode<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    serde_json::from_str(json)
}

/// Decode a success response body.
///
/// A blank body or a bare `null` decodes to `None`; anything else must be
/// a valid `T`.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> serde_json::Result<Option<T>> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    decode(body).map(Some)
}

/// Serde helpers that keep timestamps in UTC on the wire.
///
/// Output is RFC 3339 with a `Z` suffix. Input with an explicit offset is
/// converted to UTC; input without one is taken to already be UTC.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Audit {
///     #[serde(with = "resource_client::codec::utc")]
///     created_at: DateTime<Utc>,
/// }
/// ```
pub mod utc {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        let err = match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => return Ok(dt.with_timezone(&Utc)),
            Err(e) => e,
        };
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
            .ok_or(err)
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// Same conventions for `Option<DateTime<Utc>>`; pair with `#[serde(default)]`.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_str(&super::format(v)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| super::parse(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    enum Color {
        Red,
        DeepBlue,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Widget {
        widget_id: String,
        color: Color,
        #[serde(with = "utc")]
        created_at: DateTime<Utc>,
        #[serde(default, with = "utc::option")]
        retired_at: Option<DateTime<Utc>>,
    }

    fn widget() -> Widget {
        Widget {
            widget_id: "42".to_string(),
            color: Color::DeepBlue,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
            retired_at: None,
        }
    }

    #[test]
    fn encode_uses_camel_case_names_and_enum_names() {
        let json: serde_json::Value = serde_json::from_str(&encode(&widget()).unwrap()).unwrap();
        assert_eq!(json["widgetId"], "42");
        assert_eq!(json["color"], "DeepBlue");
        assert_eq!(json["createdAt"], "2024-03-01T12:30:00Z");
        assert!(json["retiredAt"].is_null());
        assert!(json.get("widget_id").is_none());
    }

    #[test]
    fn roundtrip_preserves_value() {
        let mut original = widget();
        original.retired_at = Some(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());
        let back: Widget = decode(&encode(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn offset_timestamps_are_converted_to_utc() {
        let back: Widget = decode(
            r#"{"widgetId":"1","color":"Red","createdAt":"2024-03-01T14:30:00+02:00"}"#,
        )
        .unwrap();
        assert_eq!(back.created_at, Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap());
        assert_eq!(back.retired_at, None);
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        assert_eq!(
            utc::parse("2024-03-01T12:30:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
        );
        assert!(utc::parse("yesterday").is_err());
    }

    #[test]
    fn numeric_enum_is_rejected() {
        let result: serde_json::Result<Widget> =
            decode(r#"{"widgetId":"1","color":0,"createdAt":"2024-03-01T12:30:00Z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn blank_body_decodes_to_none() {
        assert_eq!(decode_body::<Widget>("").unwrap(), None);
        assert_eq!(decode_body::<Widget>("  \n").unwrap(), None);
        assert!(decode_body::<Widget>("{not json").is_err());
    }

    #[test]
    fn null_body_decodes_to_none() {
        assert_eq!(decode_body::<Widget>("null").unwrap(), None);
        assert_eq!(decode_body::<Widget>(" null\n").unwrap(), None);
        assert!(decode_body::<Widget>("nul").is_err());
    }
}
