use services::{ExportError, SessionError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The answer key has no usable problem ids.
    NoProblems,
    /// The session points past the last problem.
    ProblemOutOfRange,
    /// The button does not apply to the current screen.
    NotAllowed,
    AssetUnreadable(String),
    ExportFailed(String),
    Unknown,
}

impl ViewError {
    /// Whether the quiz cannot continue rendering.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoProblems | Self::ProblemOutOfRange)
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoProblems => "解答データに問題がありません。CSVのID列を確認してください。".into(),
            Self::ProblemOutOfRange => "問題番号が範囲外です。最初からやり直してください。".into(),
            Self::NotAllowed => "この画面では操作できません。".into(),
            Self::AssetUnreadable(reason) => format!("画像を表示できません: {reason}"),
            Self::ExportFailed(reason) => format!("保存に失敗しました: {reason}"),
            Self::Unknown => "エラーが発生しました。もう一度お試しください。".into(),
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoProblems => Self::NoProblems,
            SessionError::IndexOutOfRange { .. } => Self::ProblemOutOfRange,
            SessionError::InvalidTransition { .. }
            | SessionError::NotAcceptingInput(_)
            | SessionError::UnknownSubQuestion(_) => Self::NotAllowed,
            _ => Self::Unknown,
        }
    }
}

impl From<ExportError> for ViewError {
    fn from(err: ExportError) -> Self {
        Self::ExportFailed(err.to_string())
    }
}
