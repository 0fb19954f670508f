mod asset_vm;
mod quiz_vm;
mod time_fmt;

pub use asset_vm::{AssetKind, AssetPreviewVm, load_preview};
pub use quiz_vm::{InputRowVm, QuizVm};
pub use time_fmt::{progress_label, timer_label};
