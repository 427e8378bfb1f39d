//! Tolerant decoding of external game payloads.
//!
//! Import payloads come from Steam/IGDB exports and launcher scrapes, so
//! fields are routinely missing or mistyped. Every optional field decodes
//! independently and falls back to its documented default; only `platform`
//! and `status` are structurally required, since there is nothing sensible
//! to fall back to for them.

use crate::domain::{Game, Platform, Recency, Status};
use crate::error::{LibraryError, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn bool_field(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

// The whole map decodes or none of it does; a partially-typed map degrades
// to the single empty-key placeholder rather than the canonical key set.
fn metadata_field(obj: &Map<String, Value>) -> BTreeMap<String, String> {
    obj.get("metadata")
        .and_then(|value| serde_json::from_value::<BTreeMap<String, String>>(value.clone()).ok())
        .unwrap_or_else(|| BTreeMap::from([(String::new(), String::new())]))
}

fn id_field(obj: &Map<String, Value>) -> Uuid {
    obj.get("id")
        .and_then(Value::as_str)
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .unwrap_or_else(Uuid::new_v4)
}

fn required_string<'a>(obj: &'a Map<String, Value>, key: &'static str) -> Result<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or(LibraryError::MalformedPayload(key))
}

/// Decode a single raw payload into a canonical `Game`, deriving recency
/// from `metadata["last_played"]` against the current wall clock.
pub fn decode_game(payload: &Value) -> Result<Game> {
    decode_game_at(payload, Utc::now())
}

pub(crate) fn decode_game_at(payload: &Value, now: DateTime<Utc>) -> Result<Game> {
    let obj = payload
        .as_object()
        .ok_or(LibraryError::MalformedPayload("payload"))?;

    let launcher = string_field(obj, "launcher");
    let metadata = metadata_field(obj);
    let icon = string_field(obj, "icon");
    let name = string_field(obj, "name");

    let platform = Platform::from_raw(required_string(obj, "platform")?);
    let status = Status::from_raw(required_string(obj, "status")?);

    // Recency is never read from the payload; it is always derived here
    // and then frozen until an explicit refresh.
    let last_played = metadata.get("last_played").map(String::as_str).unwrap_or("");
    let recency = Recency::from_last_played(last_played, now);

    Ok(Game {
        id: id_field(obj),
        steam_id: string_field(obj, "steamID"),
        igdb_id: string_field(obj, "igdbID"),
        launcher,
        metadata,
        icon,
        name,
        platform,
        status,
        recency,
        is_hidden: bool_field(obj, "isHidden"),
        is_favorite: bool_field(obj, "isFavorite"),
    })
}

/// Decode a batch of records. Records are independent, so they decode in
/// parallel; each record succeeds or fails on its own and the caller
/// decides whether to skip failures or abort.
pub fn decode_batch(payloads: &[Value]) -> Vec<Result<Game>> {
    let now = Utc::now();
    payloads
        .par_iter()
        .map(|payload| decode_game_at(payload, now))
        .collect()
}

/// Pull the record array out of an import document: either the persisted
/// `{"games": [...]}` shape or a bare array of records.
pub fn payload_records(doc: &Value) -> Result<&[Value]> {
    match doc {
        Value::Array(items) => Ok(items),
        Value::Object(obj) => obj
            .get("games")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or(LibraryError::MalformedPayload("games")),
        _ => Err(LibraryError::MalformedPayload("games")),
    }
}
