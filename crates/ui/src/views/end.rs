use dioxus::prelude::*;
use services::{QuizEvent, SaveOutcome};
use tracing::warn;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::QuizVm;

#[derive(Clone, Debug, PartialEq)]
enum SaveStatus {
    Saved(String),
    NameRequired,
    Failed(ViewError),
}

#[component]
pub fn EndScreen(vm: Signal<QuizVm>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = vm;
    let mut status = use_signal(|| None::<SaveStatus>);
    let (rows, user_name) = {
        let guard = vm.read();
        (guard.result_rows(), guard.state().user_name.clone())
    };
    let name_missing = user_name.trim().is_empty();

    let exports = ctx.exports();
    let on_save = move |_: MouseEvent| {
        let outcome = exports.save_results(vm.read().state());
        let next = match outcome {
            Ok(SaveOutcome::Saved(path)) => SaveStatus::Saved(path.display().to_string()),
            Ok(SaveOutcome::NameRequired) => SaveStatus::NameRequired,
            Err(err) => {
                warn!(error = %err, "results export failed");
                SaveStatus::Failed(err.into())
            }
        };
        status.set(Some(next));
    };
    let on_restart = move |_: MouseEvent| {
        status.set(None);
        vm.write().dispatch(QuizEvent::Restart);
    };

    rsx! {
        section { class: "screen screen-end",
            h2 { "結果" }
            if rows.is_empty() {
                p { class: "empty", "記録された解答はありません。" }
            } else {
                table { class: "results",
                    thead {
                        tr {
                            th { "ID" }
                            th { "小問" }
                            th { "入力" }
                            th { "正解" }
                            th { "判定" }
                            th { "経過時間" }
                            th { "累計時間" }
                            th { "タイトル" }
                            th { "問題レベル" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr { key: "{row.problem_id}-{row.sub_question}",
                                td { "{row.problem_id}" }
                                td { "{row.sub_question}" }
                                td { "{row.user_input}" }
                                td { "{row.correct_answer}" }
                                td { "{row.verdict.label()}" }
                                td { "{row.per_problem_time}" }
                                td { "{row.cumulative_time}" }
                                td { "{row.title}" }
                                td { "{row.difficulty}" }
                            }
                        }
                    }
                }
            }
            div { class: "export",
                label {
                    span { "名前" }
                    input {
                        r#type: "text",
                        value: "{user_name}",
                        oninput: move |evt: FormEvent| vm.write().set_user_name(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    disabled: name_missing,
                    onclick: on_save,
                    "結果をCSVで保存"
                }
                match status() {
                    Some(SaveStatus::Saved(path)) => rsx! {
                        p { class: "asset-status", "保存しました: {path}" }
                    },
                    Some(SaveStatus::NameRequired) => rsx! {
                        p { class: "inline-error", "名前を入力してください。" }
                    },
                    Some(SaveStatus::Failed(err)) => rsx! {
                        p { class: "inline-error", "{err.message()}" }
                    },
                    None => rsx! {},
                }
            }
            div { class: "actions",
                button { class: "secondary", onclick: on_restart, "最初からやり直す" }
            }
        }
    }
}
