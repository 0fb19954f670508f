use dioxus::prelude::*;
use quiz_core::model::{AssetRole, ProblemId, Verdict};
use services::QuizEvent;

use crate::views::AssetPanel;
use crate::vm::QuizVm;

fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "verdict correct",
        Verdict::Incorrect => "verdict incorrect",
        Verdict::Ungraded => "verdict",
    }
}

#[component]
pub fn SolutionScreen(vm: Signal<QuizVm>, problem_id: ProblemId) -> Element {
    let mut vm = vm;
    let (inputs, graded) = {
        let guard = vm.read();
        (guard.input_rows(), guard.graded_rows())
    };

    rsx! {
        section { class: "screen screen-solution",
            h3 { "問題{problem_id}の解答" }
            details { class: "problem-peek",
                summary { "問題画像を表示" }
                AssetPanel {
                    key: "solution-peek-{problem_id}",
                    role: AssetRole::Problem,
                    problem_id,
                }
            }
            div { class: "answer-inputs",
                for row in inputs {
                    AnswerInput {
                        key: "{problem_id}-{row.sub_question}",
                        vm,
                        sub_question: row.sub_question,
                        value: row.value,
                    }
                }
            }
            div { class: "actions",
                button {
                    class: "primary",
                    onclick: move |_| vm.write().dispatch(QuizEvent::Grade),
                    "採点する"
                }
                button {
                    class: "secondary",
                    onclick: move |_| vm.write().dispatch(QuizEvent::Back),
                    "問題に戻る"
                }
                button {
                    class: "secondary",
                    onclick: move |_| vm.write().dispatch(QuizEvent::Explain),
                    "解説へ"
                }
            }
            if !graded.is_empty() {
                table { class: "graded",
                    thead {
                        tr {
                            th { "小問" }
                            th { "入力" }
                            th { "正解" }
                            th { "判定" }
                        }
                    }
                    tbody {
                        for row in graded {
                            tr { key: "{row.sub_question}",
                                td { "{row.sub_question}" }
                                td { "{row.user_input}" }
                                td { "{row.correct_answer}" }
                                td { class: verdict_class(row.verdict), "{row.verdict.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AnswerInput(vm: Signal<QuizVm>, sub_question: String, value: String) -> Element {
    let mut vm = vm;
    let label = if sub_question.is_empty() {
        "解答".to_string()
    } else {
        format!("({sub_question})")
    };
    rsx! {
        label { class: "answer-input",
            span { "{label}" }
            input {
                r#type: "text",
                value: "{value}",
                oninput: move |evt: FormEvent| vm.write().set_input(&sub_question, &evt.value()),
            }
        }
    }
}
