use dioxus::prelude::*;
use quiz_core::model::{AssetRole, ProblemId};
use tracing::warn;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{AssetKind, load_preview};

fn role_label(role: AssetRole) -> &'static str {
    match role {
        AssetRole::Problem => "問題",
        AssetRole::Solution => "解説",
    }
}

/// Shows the asset for one problem with a button that saves it as a PDF.
///
/// A missing or unreadable asset renders a placeholder; the rest of the
/// screen keeps working.
#[component]
pub fn AssetPanel(role: AssetRole, problem_id: ProblemId) -> Element {
    let ctx = use_context::<AppContext>();
    let mut status = use_signal(|| None::<Result<String, ViewError>>);
    let label = role_label(role);

    let Some(path) = ctx.asset_path(role, problem_id) else {
        return rsx! {
            div { class: "asset asset-missing",
                p { "{label}{problem_id} の画像が見つかりません。" }
            }
        };
    };

    let preview = load_preview(&path);
    let exports = ctx.exports();
    let on_save = move |_: MouseEvent| {
        let result = exports
            .save_asset_pdf(&path)
            .map(|saved| saved.display().to_string())
            .map_err(|err| {
                warn!(problem = problem_id.value(), error = %err, "pdf download failed");
                ViewError::from(err)
            });
        status.set(Some(result));
    };

    rsx! {
        div { class: "asset",
            match preview {
                Ok(preview) => match preview.kind {
                    AssetKind::Image => rsx! {
                        img {
                            class: "asset-image",
                            src: "{preview.data_uri}",
                            alt: "{preview.file_name}",
                        }
                    },
                    AssetKind::Pdf => rsx! {
                        iframe {
                            class: "asset-pdf",
                            src: "{preview.data_uri}",
                            title: "{preview.file_name}",
                        }
                    },
                },
                Err(err) => rsx! {
                    p { class: "inline-error", "{err.message()}" }
                },
            }
            div { class: "asset-actions",
                button { class: "secondary", onclick: on_save, "{label}をPDFで保存" }
                match status() {
                    Some(Ok(saved)) => rsx! {
                        span { class: "asset-status", "保存しました: {saved}" }
                    },
                    Some(Err(err)) => rsx! {
                        span { class: "inline-error", "{err.message()}" }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
