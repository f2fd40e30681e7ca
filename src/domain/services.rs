//! Turning an API response body into rank records.
//!
//! Parsing is kept free of I/O so it can be driven by canned bodies in
//! tests and by the HTTP client in production alike.

use super::errors::{FetchError, FetchResult};
use super::models::{Envelope, RankBatch, RankData, RankItem, RankRecord};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

pub const POPULARITY_LIST: &str = "popularity_rank_list";
pub const SCORE_LIST: &str = "score_rank_list";

/// Current wall-clock time as fractional seconds since the Unix epoch.
pub fn now_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}

/// Parses a response body into a batch stamped with `timestamp`.
///
/// # Errors
///
/// * [`FetchError::Json`] if the body is not JSON
/// * [`FetchError::Rejected`] if the body is not an object, or `code` is
///   absent or not `0`
/// * [`FetchError::MissingData`] if `data` is absent or null
/// * [`FetchError::MalformedPayload`] if a rank list is not a list
/// * [`FetchError::MalformedItem`] if an entry lacks one of its fields
///
/// # Examples
///
/// ```
/// use gunrank::domain::parse_response;
///
/// let body = r#"{"code":0,"data":{"popularity_rank_list":[{"gun_id":1,"rank":1,"point":100}]}}"#;
/// let batch = parse_response(body, 42.0).unwrap();
/// assert_eq!(batch.popularity.len(), 1);
/// assert!(batch.score.is_empty());
/// ```
pub fn parse_response(body: &str, timestamp: f64) -> FetchResult<RankBatch> {
    let body: Value = serde_json::from_str(body).map_err(FetchError::Json)?;
    if !body.is_object() {
        return Err(FetchError::Rejected { code: None });
    }
    let envelope: Envelope = serde_json::from_value(body).map_err(FetchError::Json)?;

    if !envelope.is_success() {
        return Err(FetchError::Rejected {
            code: envelope.code.map(|code| code.to_string()),
        });
    }

    let data = match envelope.data {
        Some(Value::Null) | None => return Err(FetchError::MissingData),
        Some(data) => data,
    };
    let data: RankData = serde_json::from_value(data).map_err(FetchError::MalformedPayload)?;

    Ok(RankBatch {
        timestamp,
        popularity: records_from_list(POPULARITY_LIST, data.popularity_rank_list, timestamp)?,
        score: records_from_list(SCORE_LIST, data.score_rank_list, timestamp)?,
    })
}

/// Maps every entry of one rank list to a record carrying `timestamp`.
pub fn records_from_list(
    list: &'static str,
    items: Vec<Value>,
    timestamp: f64,
) -> FetchResult<Vec<RankRecord>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<RankItem>(item)
                .map(|item| RankRecord::from_item(item, timestamp))
                .map_err(|source| FetchError::MalformedItem { list, index, source })
        })
        .collect()
}
