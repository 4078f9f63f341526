//! Opaque cursor codec.
//!
//! A cursor is the base64 encoding of `key:value` pairs joined with commas,
//! one pair per pagination key, e.g. `last_name:Doe,_id:64f1c2...`.
//! Values carry no type tags; [`decode_value`] recovers numbers, dates and
//! strings heuristically, so the format stays compatible with cursors
//! already handed out to API clients.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use mongodb::bson::{oid::ObjectId, Bson, DateTime, Document};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::IDENTITY_KEY;

/// Integers above this are read back as millisecond timestamps.
pub const TIMESTAMP_THRESHOLD_MILLIS: i64 = 1_000_000_000_000;

const NULL_LITERAL: &str = "null";

// Same unreserved set as JavaScript's encodeURIComponent, so `,` and `:`
// never appear unescaped inside a value.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    #[error("cursor is not valid base64")]
    InvalidBase64,

    #[error("cursor payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("cursor entry {entry:?} has no ':' separator")]
    MalformedEntry { entry: String },

    #[error("cursor value {value:?} is not a valid percent-encoded string")]
    InvalidValue { value: String },

    #[error("cursor has no value for pagination key {key:?}")]
    MissingKey { key: String },
}

/// How a pagination key's cursor value is read back.
///
/// Cursor values carry no type tags, so keys whose values the text alone
/// cannot classify (all-digit strings, dates before 2001-09-09) must be
/// declared. A value decoded as the wrong BSON type never compares with the
/// stored field, and paging stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyKind {
    /// Guessed from the text, see [`decode_value`]. `_id` hex becomes an
    /// ObjectId.
    #[default]
    Inferred,
    /// Always a string, even when it looks like a number.
    String,
    /// Epoch milliseconds of any magnitude.
    Date,
}

/// Resolve a possibly dotted field path (`profile.city`) inside a document.
pub fn lookup<'a>(document: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut parts = path.split('.');
    let mut current = document.get(parts.next()?)?;
    for part in parts {
        current = current.as_document()?.get(part)?;
    }
    Some(current)
}

/// Serialize one field value into its cursor form.
pub fn encode_value(value: &Bson) -> String {
    match value {
        Bson::Null | Bson::Undefined => NULL_LITERAL.to_string(),
        Bson::DateTime(dt) => dt.timestamp_millis().to_string(),
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        Bson::String(s) => utf8_percent_encode(s, URI_COMPONENT).to_string(),
        other => utf8_percent_encode(&other.to_string(), URI_COMPONENT).to_string(),
    }
}

/// Recover a field value from its cursor form.
///
/// `null` becomes [`Bson::Null`]. Anything that parses as an integer is a
/// number, unless it exceeds [`TIMESTAMP_THRESHOLD_MILLIS`], in which case it
/// is a date. Everything else is a percent-decoded string.
pub fn decode_value(raw: &str) -> Result<Bson, CursorError> {
    if raw == NULL_LITERAL {
        return Ok(Bson::Null);
    }

    if let Ok(n) = raw.parse::<i64>() {
        if n > TIMESTAMP_THRESHOLD_MILLIS {
            return Ok(Bson::DateTime(DateTime::from_millis(n)));
        }
        return Ok(i32::try_from(n).map(Bson::Int32).unwrap_or(Bson::Int64(n)));
    }

    decode_string(raw).map(Bson::String)
}

/// Encode the values of `keys` in `document` as an opaque cursor.
///
/// Missing fields encode as `null`.
pub fn encode_cursor(document: &Document, keys: &[String]) -> String {
    let payload = keys
        .iter()
        .map(|key| {
            let value = lookup(document, key).unwrap_or(&Bson::Null);
            format!("{}:{}", key, encode_value(value))
        })
        .collect::<Vec<_>>()
        .join(",");

    STANDARD.encode(payload)
}

/// Split an opaque cursor into its raw `(key, encoded value)` pairs.
fn split_cursor(cursor: &str) -> Result<Vec<(String, String)>, CursorError> {
    let bytes = STANDARD
        .decode(cursor.trim())
        .map_err(|_| CursorError::InvalidBase64)?;
    let payload = String::from_utf8(bytes).map_err(|_| CursorError::InvalidUtf8)?;

    payload
        .split(',')
        .map(|entry| {
            entry
                .split_once(':')
                .map(|(key, raw)| (key.to_string(), raw.to_string()))
                .ok_or_else(|| CursorError::MalformedEntry {
                    entry: entry.to_string(),
                })
        })
        .collect()
}

/// Decode an opaque cursor into its `(key, value)` pairs, in encoded order.
///
/// Keys missing from `kinds` are decoded as [`KeyKind::Inferred`].
pub fn decode_cursor(
    cursor: &str,
    kinds: &HashMap<String, KeyKind>,
) -> Result<Vec<(String, Bson)>, CursorError> {
    split_cursor(cursor)?
        .into_iter()
        .map(|(key, raw)| {
            let kind = kinds.get(&key).copied().unwrap_or_default();
            let value = decode_entry(&key, &raw, kind)?;
            Ok((key, value))
        })
        .collect()
}

fn decode_entry(key: &str, raw: &str, kind: KeyKind) -> Result<Bson, CursorError> {
    if raw == NULL_LITERAL {
        return Ok(Bson::Null);
    }

    match kind {
        // Identity values travel as ObjectId hex; read them back as
        // ObjectIds so they compare against stored `_id`s.
        KeyKind::Inferred if key == IDENTITY_KEY => match ObjectId::parse_str(raw) {
            Ok(oid) => Ok(Bson::ObjectId(oid)),
            Err(_) => decode_value(raw),
        },
        KeyKind::Inferred => decode_value(raw),
        KeyKind::String => decode_string(raw).map(Bson::String),
        KeyKind::Date => raw
            .parse::<i64>()
            .map(|millis| Bson::DateTime(DateTime::from_millis(millis)))
            .map_err(|_| CursorError::InvalidValue {
                value: raw.to_string(),
            }),
    }
}

fn decode_string(raw: &str) -> Result<String, CursorError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| CursorError::InvalidValue {
            value: raw.to_string(),
        })
}

/// Shorten a cursor for log output.
pub fn abbreviate(cursor: &str) -> String {
    const VISIBLE: usize = 12;
    match cursor.char_indices().nth(VISIBLE) {
        Some((idx, _)) => format!("{}...", &cursor[..idx]),
        None => cursor.to_string(),
    }
}
