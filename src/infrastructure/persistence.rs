use crate::domain::{PersistError, PersistResult, RankRecord};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, warn};

/// What a single append did to its log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendOutcome {
    pub rows: usize,
    pub wrote_header: bool,
}

/// Append-only CSV history log.
///
/// The header is written only when the file does not exist yet, so it
/// appears exactly once as the first line. Rows are never rewritten.
pub struct HistoryLog;

impl HistoryLog {
    pub fn try_append(
        records: &[RankRecord],
        path: &Path,
        columns: &[&str],
    ) -> PersistResult<AppendOutcome> {
        if records.is_empty() {
            return Ok(AppendOutcome::default());
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        record
                            .field(column)
                            .ok_or_else(|| PersistError::UnknownColumn(column.to_string()))
                    })
                    .collect::<PersistResult<Vec<String>>>()
            })
            .collect::<PersistResult<Vec<_>>>()?;

        let existed = path.exists();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        if !existed {
            writer.write_record(columns)?;
        }
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = rows.len(), header = !existed, "appended rows");
        Ok(AppendOutcome {
            rows: rows.len(),
            wrote_header: !existed,
        })
    }

    /// Appends `records`, absorbing any failure. A failure part way through
    /// leaves whatever was already written in place.
    pub fn append(records: &[RankRecord], path: &Path, columns: &[&str]) -> AppendOutcome {
        match Self::try_append(records, path, columns) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "append failed");
                AppendOutcome::default()
            }
        }
    }
}
