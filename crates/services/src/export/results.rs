use chrono::{DateTime, Utc};
use quiz_core::model::SessionState;
use quiz_core::time::{DurationUnits, jst_file_stamp};

use crate::error::ExportError;
use crate::sessions::{ResultRow, result_rows};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const RESULT_HEADERS: [&str; 9] = [
    "ID",
    "小問",
    "入力",
    "正解",
    "判定",
    "経過時間",
    "累計時間",
    "タイトル",
    "問題レベル",
];

/// A file ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Outcome of asking for the results CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Ready(DownloadFile),
    /// Export stays blocked until the user enters a name.
    NameRequired,
}

/// Build the results CSV for the session, or report that a name is missing.
///
/// # Errors
///
/// Returns `ExportError::Csv` if the CSV cannot be encoded.
pub fn export_results(
    state: &SessionState,
    units: DurationUnits,
    now: DateTime<Utc>,
) -> Result<ExportOutcome, ExportError> {
    let name = state.user_name.trim();
    if name.is_empty() {
        return Ok(ExportOutcome::NameRequired);
    }
    let bytes = results_csv(&result_rows(state, units))?;
    Ok(ExportOutcome::Ready(DownloadFile {
        file_name: results_file_name(name, now),
        bytes,
    }))
}

/// `<name>_結果_<YYYYMMDD_HHMMSS>.csv` with the stamp in Japan Standard Time.
///
/// Path separators in the name are replaced so the file stays in the
/// output directory.
#[must_use]
pub fn results_file_name(name: &str, now: DateTime<Utc>) -> String {
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}_結果_{}.csv", jst_file_stamp(now))
}

/// UTF-8 CSV with a byte-order mark, one line per record.
///
/// # Errors
///
/// Returns `ExportError::Csv` if a record cannot be written.
pub fn results_csv(rows: &[ResultRow]) -> Result<Vec<u8>, ExportError> {
    let mut buf = UTF8_BOM.to_vec();
    {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buf);
        writer.write_record(RESULT_HEADERS)?;
        for row in rows {
            let id = row.problem_id.to_string();
            writer.write_record([
                id.as_str(),
                row.sub_question.as_str(),
                row.user_input.as_str(),
                row.correct_answer.as_str(),
                row.verdict.label(),
                row.per_problem_time.as_str(),
                row.cumulative_time.as_str(),
                row.title.as_str(),
                row.difficulty.as_str(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buf)
}
