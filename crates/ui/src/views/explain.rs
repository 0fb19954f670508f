use dioxus::prelude::*;
use quiz_core::model::{AssetRole, ProblemId};
use services::QuizEvent;

use crate::views::AssetPanel;
use crate::vm::QuizVm;

#[component]
pub fn ExplainScreen(vm: Signal<QuizVm>, problem_id: ProblemId) -> Element {
    let mut vm = vm;
    let (video_url, has_next) = {
        let guard = vm.read();
        (guard.video_url(), guard.has_next())
    };
    let next_label = if has_next { "次の問題へ" } else { "結果を見る" };

    rsx! {
        section { class: "screen screen-explain",
            AssetPanel { key: "solution-{problem_id}", role: AssetRole::Solution, problem_id }
            if let Some(url) = video_url {
                p { class: "video-link",
                    a { href: "{url}", target: "_blank", "解説動画を見る" }
                }
            }
            div { class: "actions",
                button {
                    class: "primary",
                    onclick: move |_| vm.write().dispatch(QuizEvent::Next),
                    "{next_label}"
                }
            }
        }
    }
}
