use super::config::Config;
use crate::domain::FetchResult;
use crate::infrastructure::{fetch, HistoryLog};
use tracing::info;

/// Rows appended to each log by one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub popularity_rows: usize,
    pub score_rows: usize,
}

/// Performs one fetch-and-append cycle.
///
/// Network, JSON, envelope and filesystem failures all end up as zero rows
/// appended. The only error returned is a rank list entry missing one of
/// its fields.
pub fn run(config: &Config) -> FetchResult<RunReport> {
    let batch = fetch(&config.api_url, config.timeout)?;
    let columns = config.column_names();

    let popularity = HistoryLog::append(&batch.popularity, &config.popularity_path, &columns);
    let score = HistoryLog::append(&batch.score, &config.score_path, &columns);

    let report = RunReport {
        popularity_rows: popularity.rows,
        score_rows: score.rows,
    };
    info!(
        popularity = report.popularity_rows,
        score = report.score_rows,
        "run complete"
    );
    Ok(report)
}
