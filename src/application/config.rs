use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://gf2-gameworldrank-us-api.sunborngame.com/activity/rank";
pub const POPULARITY_FILENAME: &str = "gun_popularity_history.csv";
pub const SCORE_FILENAME: &str = "gun_score_history.csv";
pub const FIELDNAMES: [&str; 4] = ["timestamp", "gun_id", "rank", "point"];
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where to fetch from and where to append to.
///
/// `Config::default()` is the production deployment. Every field may be
/// overridden, which is how tests point the pipeline at a loopback server
/// and a scratch directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub popularity_path: PathBuf,
    pub score_path: PathBuf,
    /// Request timeout in seconds
    #[serde(with = "secs")]
    pub timeout: Duration,
    pub columns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            popularity_path: PathBuf::from(POPULARITY_FILENAME),
            score_path: PathBuf::from(SCORE_FILENAME),
            timeout: DEFAULT_TIMEOUT,
            columns: FIELDNAMES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_paths(mut self, popularity: impl Into<PathBuf>, score: impl Into<PathBuf>) -> Self {
        self.popularity_path = popularity.into();
        self.score_path = score.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(String::as_str).collect()
    }
}

mod secs {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
