use thiserror::Error;

/// Everything that can go wrong between issuing the request and holding a
/// [`RankBatch`](super::RankBatch).
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure, timeout or any other transport error
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    Json(#[source] serde_json::Error),

    /// Envelope code missing or not the success value
    #[error("API reported failure (code {code:?})")]
    Rejected { code: Option<String> },

    /// Envelope is successful but carries no `data`
    #[error("Response has no data payload")]
    MissingData,

    /// `data` exists but its rank lists are not lists
    #[error("Malformed data payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// An entry of a rank list lacks `gun_id`, `rank` or `point`
    #[error("Malformed item {index} in {list}: {source}")]
    MalformedItem {
        list: &'static str,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Soft failures are absorbed and reported as "no data". The rest break
    /// the assumption that the API only returns well-formed entries.
    pub fn is_soft(&self) -> bool {
        !matches!(
            self,
            FetchError::MalformedPayload(_) | FetchError::MalformedItem { .. }
        )
    }
}

/// Failures while appending rows to a history log.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type PersistResult<T> = Result<T, PersistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_classification() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(FetchError::Json(json_err).is_soft());
        assert!(FetchError::Status(503).is_soft());
        assert!(FetchError::Rejected { code: Some("1".into()) }.is_soft());
        assert!(FetchError::MissingData.is_soft());

        let item_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let malformed = FetchError::MalformedItem { list: "score_rank_list", index: 4, source: item_err };
        assert!(!malformed.is_soft());
        assert!(malformed.to_string().contains("item 4 in score_rank_list"));
    }
}
