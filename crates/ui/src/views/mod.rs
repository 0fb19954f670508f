mod asset;
mod end;
mod explain;
mod problem;
mod quiz;
mod solution;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use asset::AssetPanel;
pub use end::EndScreen;
pub use explain::ExplainScreen;
pub use problem::ProblemScreen;
pub use quiz::{QuizScreen, QuizView};
pub use solution::SolutionScreen;
pub use state::ViewError;
