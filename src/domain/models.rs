use std::fmt;
use serde::Deserialize;
use serde_json::{Number, Value};

/// Identifier of a gun as the API reports it.
///
/// The API is not consistent about the type, so both numbers and strings
/// are accepted and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GunId {
    Int(Number),
    Text(String),
}

impl fmt::Display for GunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GunId::Int(id) => write!(f, "{}", id),
            GunId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for GunId {
    fn from(id: i64) -> Self {
        GunId::Int(Number::from(id))
    }
}

impl From<&str> for GunId {
    fn from(id: &str) -> Self {
        GunId::Text(id.to_string())
    }
}

/// One leaderboard entry as it appears inside a rank list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankItem {
    pub gun_id: GunId,
    pub rank: i64,
    pub point: Number,
}

/// The `data` payload of a successful response.
///
/// Items are kept as raw JSON so a malformed entry can be reported with
/// its list and position instead of failing the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankData {
    #[serde(default)]
    pub popularity_rank_list: Vec<Value>,
    #[serde(default)]
    pub score_rank_list: Vec<Value>,
}

/// Outer object of every API response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// Status code reported by the API; only `0` means success.
    pub const SUCCESS: i64 = 0;

    pub fn is_success(&self) -> bool {
        match &self.code {
            Some(Value::Number(code)) => {
                code.as_i64() == Some(Self::SUCCESS) || code.as_f64() == Some(Self::SUCCESS as f64)
            }
            _ => false,
        }
    }
}

/// One ranking observation, ready to be written as a CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct RankRecord {
    /// Seconds since the Unix epoch, shared by every record of one fetch
    pub timestamp: f64,
    pub gun_id: GunId,
    pub rank: i64,
    pub point: Number,
}

impl RankRecord {
    pub fn from_item(item: RankItem, timestamp: f64) -> Self {
        Self {
            timestamp,
            gun_id: item.gun_id,
            rank: item.rank,
            point: item.point,
        }
    }

    /// Returns the text of the cell for `column`, or `None` if the record
    /// has no such field.
    ///
    /// # Examples
    ///
    /// ```
    /// use gunrank::domain::{GunId, RankRecord};
    ///
    /// let record = RankRecord {
    ///     timestamp: 1.5,
    ///     gun_id: GunId::from(7),
    ///     rank: 2,
    ///     point: serde_json::Number::from(100u64),
    /// };
    /// assert_eq!(record.field("point").as_deref(), Some("100"));
    /// assert_eq!(record.field("nope"), None);
    /// ```
    pub fn field(&self, column: &str) -> Option<String> {
        match column {
            // Debug keeps the `.0` on whole seconds
            "timestamp" => Some(format!("{:?}", self.timestamp)),
            "gun_id" => Some(self.gun_id.to_string()),
            "rank" => Some(self.rank.to_string()),
            "point" => Some(self.point.to_string()),
            _ => None,
        }
    }
}

/// Both rank lists produced by a single fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankBatch {
    pub timestamp: f64,
    pub popularity: Vec<RankRecord>,
    pub score: Vec<RankRecord>,
}

impl RankBatch {
    pub fn is_empty(&self) -> bool {
        self.popularity.is_empty() && self.score.is_empty()
    }
}
