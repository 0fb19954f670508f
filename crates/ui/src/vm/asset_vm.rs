use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Pdf,
}

/// An asset inlined as a data URI so the webview can show local files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPreviewVm {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: AssetKind,
    pub data_uri: String,
}

fn mime_for(path: &Path) -> Option<(&'static str, AssetKind)> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some(("image/png", AssetKind::Image)),
        "jpg" | "jpeg" => Some(("image/jpeg", AssetKind::Image)),
        "pdf" => Some(("application/pdf", AssetKind::Pdf)),
        _ => None,
    }
}

/// # Errors
///
/// Returns `ViewError::AssetUnreadable` if the file type is unsupported or the
/// file cannot be read.
pub fn load_preview(path: &Path) -> Result<AssetPreviewVm, ViewError> {
    let (mime, kind) = mime_for(path)
        .ok_or_else(|| ViewError::AssetUnreadable(format!("{} は未対応の形式です", path.display())))?;
    let bytes = std::fs::read(path).map_err(|err| ViewError::AssetUnreadable(err.to_string()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(AssetPreviewVm {
        path: path.to_path_buf(),
        file_name,
        kind,
        data_uri: format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes)),
    })
}
