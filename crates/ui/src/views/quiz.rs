use dioxus::prelude::*;
use quiz_core::model::QuizPhase;

use crate::context::AppContext;
use crate::views::{EndScreen, ExplainScreen, ProblemScreen, SolutionScreen};
use crate::vm::QuizVm;

/// Root of the quiz flow. Owns the session and the timer tick.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let interval = ctx.refresh_interval();
    let vm = use_signal(move || QuizVm::new(ctx.quiz_machine(), ctx.units()));
    let mut tick = use_signal(|| 0_u64);

    // Re-render only the timer line; inputs keep their in-progress text.
    use_future(move || async move {
        loop {
            tokio::time::sleep(interval).await;
            tick += 1;
        }
    });

    rsx! {
        QuizScreen { vm, tick: tick() }
    }
}

#[component]
pub fn QuizScreen(vm: Signal<QuizVm>, tick: u64) -> Element {
    let guard = vm.read();
    let phase = guard.phase();
    let progress = guard.progress_label();
    let current = guard.current_problem();
    let title = guard.title();
    let notice = guard.error().filter(|err| !err.is_fatal()).cloned();
    drop(guard);

    let (progress, problem_id) = match (progress, current) {
        (Ok(progress), Ok(id)) => (progress, id),
        (Err(err), _) | (_, Err(err)) => {
            return rsx! {
                div { class: "fatal",
                    h1 { "続行できません" }
                    p { "{err.message()}" }
                }
            };
        }
    };

    rsx! {
        div { class: "quiz",
            header { class: "quiz-header",
                p { class: "progress", "{progress}" }
                if let Some(title) = title {
                    h2 { class: "problem-title", "{title}" }
                }
                TimerLine { vm, tick }
            }
            if let Some(notice) = notice {
                p { class: "inline-error", "{notice.message()}" }
            }
            match phase {
                QuizPhase::Problem => rsx! { ProblemScreen { vm, problem_id } },
                QuizPhase::Solution => rsx! { SolutionScreen { vm, problem_id } },
                QuizPhase::Explain => rsx! { ExplainScreen { vm, problem_id } },
                QuizPhase::End => rsx! { EndScreen { vm } },
            }
        }
    }
}

#[component]
fn TimerLine(vm: Signal<QuizVm>, tick: u64) -> Element {
    let text = vm.read().timer_label();
    rsx! {
        p { class: "timer", "data-tick": "{tick}", "{text}" }
    }
}
