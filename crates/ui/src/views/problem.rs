use dioxus::prelude::*;
use quiz_core::model::{AssetRole, ProblemId};
use services::QuizEvent;

use crate::views::AssetPanel;
use crate::vm::QuizVm;

#[component]
pub fn ProblemScreen(vm: Signal<QuizVm>, problem_id: ProblemId) -> Element {
    let mut vm = vm;
    rsx! {
        section { class: "screen screen-problem",
            AssetPanel { key: "problem-{problem_id}", role: AssetRole::Problem, problem_id }
            div { class: "actions",
                button {
                    class: "primary",
                    onclick: move |_| vm.write().dispatch(QuizEvent::EnterAnswers),
                    "解答を入力する"
                }
                button {
                    class: "secondary",
                    onclick: move |_| vm.write().dispatch(QuizEvent::Skip),
                    "解説を見る"
                }
            }
        }
    }
}
