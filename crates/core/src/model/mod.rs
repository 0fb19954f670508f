mod answer_key;
mod assets;
mod ids;
mod record;
mod session;

pub use answer_key::{AnswerKey, AnswerKeyRow};
pub use assets::{AssetIndex, AssetLookup, AssetRole};
pub use ids::{ParseIdError, ProblemId, RecordKey};
pub use record::{AnswerRecord, Verdict};
pub use session::{QuizPhase, SessionState};
