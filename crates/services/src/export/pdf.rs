use std::path::Path;

use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, XObjectTransform};
use tracing::warn;

use super::results::DownloadFile;
use crate::error::PdfError;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

const PT_PER_MM: f32 = 72.0 / 25.4;

/// Where an image lands on the page, in points from the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

/// Scale an image (one pixel per point) to fit the page and centre it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fit_to_page(
    image_width: usize,
    image_height: usize,
    page_width: f32,
    page_height: f32,
) -> Placement {
    let (w, h) = (image_width as f32, image_height as f32);
    let scale = (page_width / w).min(page_height / h);
    let (width, height) = (w * scale, h * scale);
    Placement {
        x: (page_width - width) / 2.0,
        y: (page_height - height) / 2.0,
        width,
        height,
        scale,
    }
}

/// Single-page A4 PDF for an asset, named `<stem>.pdf`.
///
/// Raster images are scaled to fit and centred; a source that already is a
/// PDF is returned unchanged.
///
/// Pixels are embedded as decoded, without re-encoding to JPEG. Photos and
/// JPEG sources stay close to their original size, but a large PNG scan
/// yields a PDF several times bigger than a lossy rendition would be.
///
/// # Errors
///
/// Returns `PdfError` if the file cannot be read or decoded.
pub fn asset_pdf(path: &Path) -> Result<DownloadFile, PdfError> {
    let stem = path
        .file_stem()
        .map_or_else(|| "image".to_string(), |s| s.to_string_lossy().into_owned());
    let file_name = format!("{stem}.pdf");
    let bytes = std::fs::read(path).map_err(|source| PdfError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        return Ok(DownloadFile { file_name, bytes });
    }

    let bytes = image_page(&bytes, &stem, path)?;
    Ok(DownloadFile { file_name, bytes })
}

fn image_page(bytes: &[u8], title: &str, path: &Path) -> Result<Vec<u8>, PdfError> {
    let mut warnings = Vec::new();
    let image = RawImage::decode_from_bytes(bytes, &mut warnings).map_err(|reason| {
        PdfError::Decode {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    })?;
    if image.width == 0 || image.height == 0 {
        return Err(PdfError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    let placement = fit_to_page(
        image.width,
        image.height,
        A4_WIDTH_MM * PT_PER_MM,
        A4_HEIGHT_MM * PT_PER_MM,
    );

    let mut document = PdfDocument::new(title);
    let image_id = document.add_image(&image);
    let ops = vec![Op::UseXobject {
        id: image_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(placement.x)),
            translate_y: Some(Pt(placement.y)),
            scale_x: Some(placement.scale),
            scale_y: Some(placement.scale),
            // 72 dpi makes one image pixel one point before scaling.
            dpi: Some(72.0),
            ..Default::default()
        },
    }];

    let page = PdfPage::new(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), ops);
    let bytes = document
        .with_pages(vec![page])
        .save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        warn!(path = %path.display(), count = warnings.len(), "pdf rendered with warnings");
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_fits_width_and_centres_vertically() {
        let p = fit_to_page(2000, 1000, 500.0, 800.0);
        assert!((p.scale - 0.25).abs() < f32::EPSILON);
        assert!((p.width - 500.0).abs() < 1e-3);
        assert!((p.height - 250.0).abs() < 1e-3);
        assert!(p.x.abs() < 1e-3);
        assert!((p.y - 275.0).abs() < 1e-3);
    }

    #[test]
    fn small_image_is_scaled_up() {
        let p = fit_to_page(100, 100, 500.0, 800.0);
        assert!((p.scale - 5.0).abs() < 1e-6);
        assert!((p.y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn pdf_source_is_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("解説3.pdf");
        std::fs::write(&path, b"%PDF-1.4 test").unwrap();
        let file = asset_pdf(&path).unwrap();
        assert_eq!(file.file_name, "解説3.pdf");
        assert_eq!(file.bytes, b"%PDF-1.4 test");
    }

    // 1x1 RGBA PNG.
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
        0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0xf8,
        0xcf, 0xc0, 0xf0, 0x1f, 0x00, 0x05, 0x00, 0x01, 0xff, 0x56, 0xc7, 0x2f, 0x0d, 0x00, 0x00,
        0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn png_renders_as_single_page_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("問題2.png");
        std::fs::write(&path, TINY_PNG).unwrap();
        let file = asset_pdf(&path).unwrap();
        assert_eq!(file.file_name, "問題2.pdf");
        assert!(file.bytes.starts_with(b"%PDF"));
        assert_ne!(file.bytes, TINY_PNG);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = asset_pdf(Path::new("/definitely/not/here/問題1.png")).unwrap_err();
        assert!(matches!(err, PdfError::Io { .. }));
    }

    #[test]
    fn garbage_image_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("問題1.png");
        std::fs::write(&path, b"not an image").unwrap();
        let err = asset_pdf(&path).unwrap_err();
        assert!(matches!(err, PdfError::Decode { .. }));
    }
}
