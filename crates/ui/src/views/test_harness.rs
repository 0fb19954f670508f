use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{AnswerKey, AnswerKeyRow, AssetIndex, AssetRole, ProblemId};
use quiz_core::time::{DurationUnits, JA_UNITS, fixed_clock};
use services::{ExportService, QuizEvent, QuizMachine};
use storage::{QuizContent, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizScreen;
use crate::vm::QuizVm;

struct TestApp {
    machine: Arc<QuizMachine>,
    exports: Arc<ExportService>,
    assets: AssetIndex,
}

impl UiApp for TestApp {
    fn quiz_machine(&self) -> Arc<QuizMachine> {
        Arc::clone(&self.machine)
    }

    fn exports(&self) -> Arc<ExportService> {
        Arc::clone(&self.exports)
    }

    fn asset_path(&self, role: AssetRole, id: ProblemId) -> Option<PathBuf> {
        match self.assets.lookup(role, id) {
            quiz_core::model::AssetLookup::Found(path) => Some(path.to_path_buf()),
            quiz_core::model::AssetLookup::NotFound => None,
        }
    }

    fn refresh_interval(&self) -> Duration {
        Duration::from_secs(1)
    }

    fn units(&self) -> DurationUnits {
        JA_UNITS
    }
}

/// One scripted user action applied before the first render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Event(QuizEvent),
    Input(&'static str, &'static str),
    Name(&'static str),
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    steps: Vec<Step>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(app));
    let steps = props.steps.clone();
    let vm = use_signal(move || {
        let mut vm = QuizVm::new(ctx.quiz_machine(), ctx.units());
        for step in steps {
            match step {
                Step::Event(event) => vm.dispatch(event),
                Step::Input(sub, text) => vm.set_input(sub, text),
                Step::Name(name) => vm.set_user_name(name.to_string()),
            }
        }
        vm
    });
    rsx! { QuizScreen { vm, tick: 0 } }
}

pub fn row(id: &str, sub: &str, answer: &str) -> AnswerKeyRow {
    AnswerKeyRow {
        title: format!("タイトル{id}"),
        id: id.to_string(),
        sub_question: sub.to_string(),
        difficulty: "A".to_string(),
        correct_answer: answer.to_string(),
        explain_video_url: None,
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub dir: tempfile::TempDir,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Harness over an answer key with problems 1 (a=5, b=10) and 2 (a=3),
/// plus an image for problem 1 in a temporary content directory.
pub fn setup_quiz_harness(steps: Vec<Step>) -> ViewHarness {
    setup_quiz_harness_with_rows(
        vec![row("1", "a", "5"), row("1", "b", "10"), row("2", "a", "3")],
        steps,
    )
}

pub fn setup_quiz_harness_with_rows(rows: Vec<AnswerKeyRow>, steps: Vec<Step>) -> ViewHarness {
    let dir = tempfile::tempdir().expect("tempdir");
    let image = dir.path().join("問題1.png");
    std::fs::write(&image, b"png").expect("write image");

    let mut assets = AssetIndex::new();
    assets.insert(AssetRole::Problem, ProblemId::new(1), image);
    let storage = Storage::in_memory(QuizContent {
        answer_key: AnswerKey::new(rows),
        assets,
    });
    let content = storage.content.load_content().expect("load content");

    let clock = fixed_clock();
    let machine = Arc::new(QuizMachine::new(Arc::new(content.answer_key), clock));
    let exports = Arc::new(ExportService::new(clock, JA_UNITS, dir.path()));
    let app = Arc::new(TestApp {
        machine,
        exports,
        assets: content.assets,
    });

    let dom = VirtualDom::new_with_props(QuizHarness, HarnessProps { app, steps });
    ViewHarness { dom, dir }
}
