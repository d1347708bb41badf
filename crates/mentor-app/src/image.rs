//! Loading images from disk for inline sending.

use std::path::Path;

use mentor_ai::InlineImage;
use mentor_common::{MentorError, Result};

/// Largest file accepted for inline upload.
const MAX_INLINE_BYTES: u64 = 20 * 1024 * 1024;

/// Read `path` and encode it as an inline image, guessing the MIME type
/// from the extension.
pub(crate) async fn load_image(path: &Path) -> Result<InlineImage> {
    let mime = mime_guess::from_path(path)
        .first()
        .filter(|m| m.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| MentorError::Image(format!("not an image: {}", path.display())))?;

    let size = tokio::fs::metadata(path).await?.len();
    if size > MAX_INLINE_BYTES {
        return Err(MentorError::Image(format!(
            "{} is {size} bytes, limit is {MAX_INLINE_BYTES}",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    Ok(InlineImage::from_bytes(mime.essence_str(), &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn png_is_loaded_with_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.png");
        std::fs::write(&path, b"hi").unwrap();

        let image = load_image(&path).await.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGk=");
    }

    #[tokio::test]
    async fn jpeg_extension_is_recognised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.JPG");
        std::fs::write(&path, b"x").unwrap();

        let image = load_image(&path).await.unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn non_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"text").unwrap();

        let err = load_image(&path).await.unwrap_err();
        assert!(matches!(err, MentorError::Image(_)));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = load_image(Path::new("/tmp/definitely_missing_mentor.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, MentorError::Io(_)));
    }
}
