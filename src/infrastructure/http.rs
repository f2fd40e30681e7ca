use crate::domain::{now_timestamp, parse_response, FetchError, FetchResult, RankBatch};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking client for the rank API. One call to [`RankClient::fetch`]
/// issues exactly one GET; nothing is retried.
pub struct RankClient {
    client: Client,
}

impl RankClient {
    pub fn new(timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetches and parses the rank lists, reporting every failure kind.
    pub fn try_fetch(&self, url: &str) -> FetchResult<RankBatch> {
        debug!(url, "requesting rank lists");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let batch = parse_response(&body, now_timestamp())?;

        debug!(
            popularity = batch.popularity.len(),
            score = batch.score.len(),
            "parsed rank lists"
        );
        Ok(batch)
    }

    /// Like [`RankClient::try_fetch`], but soft failures come back as an
    /// empty batch. Only malformed entries are still returned as errors.
    pub fn fetch(&self, url: &str) -> FetchResult<RankBatch> {
        match self.try_fetch(url) {
            Ok(batch) => Ok(batch),
            Err(err) if err.is_soft() => {
                warn!(url, error = %err, "fetch yielded no data");
                Ok(RankBatch::default())
            }
            Err(err) => Err(err),
        }
    }
}

/// One-shot fetch with a fresh client.
///
/// A client that cannot be built is treated like any other network failure.
pub fn fetch(url: &str, timeout: Duration) -> FetchResult<RankBatch> {
    match RankClient::new(timeout) {
        Ok(client) => client.fetch(url),
        Err(err) => {
            warn!(error = %err, "could not build HTTP client");
            Ok(RankBatch::default())
        }
    }
}
