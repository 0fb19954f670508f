use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use quiz_core::canon::canonical_column;
use quiz_core::model::{AnswerKey, AnswerKeyRow};
use thiserror::Error;
use tracing::{debug, info};

/// Expected answer-key column headers.
pub mod columns {
    pub const TITLE: &str = "タイトル";
    pub const ID: &str = "ID";
    pub const SUB_QUESTION: &str = "小問";
    pub const DIFFICULTY: &str = "問題レベル";
    pub const ANSWER: &str = "答え";
    pub const VIDEO: &str = "解説動画";

    pub const ALL: [&str; 6] = [TITLE, ID, SUB_QUESTION, DIFFICULTY, ANSWER, VIDEO];
}

/// File name fragments that mark a CSV as the answer key.
const ANSWER_KEY_HINTS: &[&str] = &["答え", "解答", "answer", "key"];

//
// ─── ENCODINGS ────────────────────────────────────────────────────────────────
//

/// Text encodings tried, in order, when reading an answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8 with an optional byte-order mark.
    Utf8Sig,
    Utf8,
    Cp932,
    ShiftJis,
}

pub const FALLBACK_ORDER: [TextEncoding; 4] = [
    TextEncoding::Utf8Sig,
    TextEncoding::Utf8,
    TextEncoding::Cp932,
    TextEncoding::ShiftJis,
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl TextEncoding {
    /// Strict decode; malformed input is an error rather than replaced.
    ///
    /// # Errors
    ///
    /// Returns `AnswerKeyError::Decode` if the bytes are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>, AnswerKeyError> {
        let decoded = match self {
            TextEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body).ok().map(Cow::Borrowed)
            }
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            // encoding_rs implements Shift_JIS as the Windows-31J superset, so
            // both labels share one decoder.
            TextEncoding::Cp932 | TextEncoding::ShiftJis => encoding_rs::SHIFT_JIS
                .decode_without_bom_handling_and_without_replacement(bytes),
        };
        decoded.ok_or(AnswerKeyError::Decode(self))
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Cp932 => "cp932",
            TextEncoding::ShiftJis => "shift-jis",
        };
        f.write_str(label)
    }
}

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Why one `(path, encoding)` attempt failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnswerKeyError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("not valid {0} text")]
    Decode(TextEncoding),

    #[error("file has no header row")]
    Empty,

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record} has {found} fields but the header has {expected}")]
    ExtraFields {
        record: usize,
        expected: usize,
        found: usize,
    },
}

//
// ─── LOADING ──────────────────────────────────────────────────────────────────
//

/// Parse one file with one encoding.
///
/// # Errors
///
/// Returns `AnswerKeyError` if the file cannot be read, decoded, or parsed.
pub fn try_load(path: &Path, encoding: TextEncoding) -> Result<AnswerKey, AnswerKeyError> {
    let bytes = std::fs::read(path)?;
    let text = encoding.decode(&bytes)?;
    let rows = parse_rows(&text)?;
    Ok(AnswerKey::new(rows).with_source(path))
}

/// Load the first candidate that parses, trying every encoding in
/// [`FALLBACK_ORDER`] across all files before moving to the next encoding.
///
/// Files whose name looks like an answer key are tried first. Returns `None`
/// when no combination succeeds.
#[must_use]
pub fn load_answer_key(candidates: &[PathBuf]) -> Option<AnswerKey> {
    let ordered = prioritize(candidates);
    for encoding in FALLBACK_ORDER {
        for path in &ordered {
            match try_load(path, encoding) {
                Ok(key) => {
                    info!(
                        path = %path.display(),
                        %encoding,
                        rows = key.rows().len(),
                        "answer key loaded"
                    );
                    return Some(key);
                }
                Err(err) => {
                    debug!(path = %path.display(), %encoding, error = %err, "answer key attempt failed");
                }
            }
        }
    }
    None
}

fn prioritize(candidates: &[PathBuf]) -> Vec<&PathBuf> {
    let mut ordered: Vec<&PathBuf> = candidates.iter().collect();
    ordered.sort_by_key(|path| !looks_like_answer_key(path));
    ordered
}

fn looks_like_answer_key(path: &Path) -> bool {
    let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    let lower = name.to_lowercase();
    ANSWER_KEY_HINTS.iter().any(|hint| lower.contains(hint))
}

/// Parse decoded CSV text into canonical rows.
///
/// Missing columns, and trailing fields left off a short record, read as
/// empty.
///
/// # Errors
///
/// Returns `AnswerKeyError::Empty` without a header row,
/// `AnswerKeyError::ExtraFields` for a record longer than the header and
/// `AnswerKeyError::Csv` for otherwise malformed input.
pub fn parse_rows(text: &str) -> Result<Vec<AnswerKeyRow>, AnswerKeyError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(AnswerKeyError::Empty);
    }

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    if let Some((idx, record)) = records
        .iter()
        .enumerate()
        .find(|(_, record)| record.len() > headers.len())
    {
        return Err(AnswerKeyError::ExtraFields {
            record: idx + 1,
            expected: headers.len(),
            found: record.len(),
        });
    }

    let column = |name: &str| -> Vec<String> {
        let raw: Vec<&str> = match headers.iter().position(|h| h == name) {
            Some(idx) => records
                .iter()
                .map(|record| record.get(idx).unwrap_or(""))
                .collect(),
            None => vec![""; records.len()],
        };
        canonical_column(&raw)
    };

    let titles = column(columns::TITLE);
    let ids = column(columns::ID);
    let subs = column(columns::SUB_QUESTION);
    let levels = column(columns::DIFFICULTY);
    let answers = column(columns::ANSWER);
    let videos = column(columns::VIDEO);

    let rows = (0..records.len())
        .map(|i| AnswerKeyRow {
            title: titles[i].clone(),
            id: ids[i].clone(),
            sub_question: subs[i].clone(),
            difficulty: levels[i].clone(),
            correct_answer: answers[i].clone(),
            explain_video_url: Some(videos[i].clone()).filter(|v| !v.is_empty()),
        })
        .collect();
    Ok(rows)
}
