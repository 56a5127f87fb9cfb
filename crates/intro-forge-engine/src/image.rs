//! Picture resolution: turns an optional upload into a displayable image
//! source, falling back to the picture reference typed into the form.

use base64::{Engine as _, engine::general_purpose};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to read picture {name}: {source}")]
    Io {
        name: String,
        source: std::io::Error,
    },
    #[error("Picture {0} is empty")]
    Empty(String),
}

/// Anything a picture can be read from.
pub trait PictureSource {
    fn file_name(&self) -> &str;

    /// MIME type declared by whoever supplied the file, if any
    fn content_type(&self) -> Option<&str>;

    fn read_bytes(&self) -> impl Future<Output = Result<Vec<u8>, ImageError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum UploadSource {
    /// Already in memory, e.g. handed over by the desktop file picker
    Bytes(Arc<[u8]>),
    /// Read lazily from disk when the picture is resolved
    Path(PathBuf),
}

/// A picture the user attached to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    name: String,
    content_type: Option<String>,
    source: UploadSource,
}

impl Upload {
    pub fn from_bytes(
        name: impl Into<String>,
        content_type: Option<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type,
            source: UploadSource::Bytes(bytes.into()),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            content_type: None,
            source: UploadSource::Path(path),
        }
    }
}

impl PictureSource for Upload {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ImageError> {
        match &self.source {
            UploadSource::Bytes(bytes) => Ok(bytes.to_vec()),
            UploadSource::Path(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| ImageError::Io {
                        name: self.name.clone(),
                        source,
                    })
            }
        }
    }
}

/// Resolves the image source shown in every rendering.
///
/// With a picture, its content becomes a self-contained `data:` URL. Without
/// one, or when it cannot be read or is empty, the result is exactly
/// `fallback`. Failures are logged and never reported to the caller.
pub async fn resolve_image<P: PictureSource>(picture: Option<&P>, fallback: &str) -> String {
    let Some(picture) = picture else {
        return fallback.to_string();
    };

    match read_picture(picture).await {
        Ok(data_url) => {
            log::debug!(
                "Resolved picture {} to a {} byte data URL",
                picture.file_name(),
                data_url.len()
            );
            data_url
        }
        Err(e) => {
            log::warn!("{e}; using {fallback} instead");
            fallback.to_string()
        }
    }
}

/// Reads a picture into a `data:` URL without any fallback.
pub async fn read_picture<P: PictureSource>(picture: &P) -> Result<String, ImageError> {
    let bytes = picture.read_bytes().await?;
    if bytes.is_empty() {
        return Err(ImageError::Empty(picture.file_name().to_string()));
    }
    let mime = picture
        .content_type()
        .filter(|declared| !declared.trim().is_empty())
        .unwrap_or_else(|| mime_from_extension(Path::new(picture.file_name())));
    Ok(data_url(mime, &bytes))
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes))
}

fn mime_from_extension(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io;

    struct UnreadablePicture;

    impl PictureSource for UnreadablePicture {
        fn file_name(&self) -> &str {
            "broken.png"
        }

        fn content_type(&self) -> Option<&str> {
            Some("image/png")
        }

        async fn read_bytes(&self) -> Result<Vec<u8>, ImageError> {
            Err(ImageError::Io {
                name: "broken.png".to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    #[tokio::test]
    async fn test_no_picture_resolves_to_fallback() {
        let resolved = resolve_image(None::<&Upload>, "images/headshot.jpg").await;
        assert_eq!(resolved, "images/headshot.jpg");
    }

    #[tokio::test]
    async fn test_picture_resolves_to_inline_data() {
        let upload = Upload::from_bytes(
            "me.png",
            Some("image/png".to_string()),
            vec![0x89, b'P', b'N', b'G'],
        );

        let resolved = resolve_image(Some(&upload), "images/headshot.jpg").await;

        assert_eq!(resolved, "data:image/png;base64,iVBORw==");
        assert_ne!(resolved, "images/headshot.jpg");
    }

    #[tokio::test]
    async fn test_read_failure_falls_back_silently() {
        let resolved = resolve_image(Some(&UnreadablePicture), "images/headshot.jpg").await;
        assert_eq!(resolved, "images/headshot.jpg");
    }

    #[tokio::test]
    async fn test_empty_picture_falls_back() {
        let upload = Upload::from_bytes("empty.png", None, Vec::<u8>::new());

        assert!(matches!(read_picture(&upload).await, Err(ImageError::Empty(_))));
        assert_eq!(resolve_image(Some(&upload), "fallback.jpg").await, "fallback.jpg");
    }

    #[tokio::test]
    async fn test_picture_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.JPG");
        std::fs::write(&path, b"abc").unwrap();

        let upload = Upload::from_path(&path);

        assert_eq!(upload.file_name(), "portrait.JPG");
        assert_eq!(read_picture(&upload).await.unwrap(), "data:image/jpeg;base64,YWJj");
    }

    #[tokio::test]
    async fn test_missing_file_falls_back() {
        let upload = Upload::from_path("/this/path/does/not/exist.png");
        assert_eq!(
            resolve_image(Some(&upload), "images/headshot.jpg").await,
            "images/headshot.jpg"
        );
    }

    #[rstest]
    #[case("photo.png", "image/png")]
    #[case("photo.jpeg", "image/jpeg")]
    #[case("drawing.SVG", "image/svg+xml")]
    #[case("notes.txt", "application/octet-stream")]
    #[case("no_extension", "application/octet-stream")]
    fn test_mime_from_extension(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(mime_from_extension(Path::new(name)), expected);
    }
}
