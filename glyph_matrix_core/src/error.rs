use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    FontLoad(#[from] FontLoadError),
    #[error(transparent)]
    ImageDecode(#[from] ImageDecodeError),
}

/// The input is neither a single character nor an existing path.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "input must be a single character or an existing image path, got: {:?}",
    self.input
)]
pub struct InvalidInputError {
    pub input: String,
}

#[derive(Debug, thiserror::Error)]
#[error("font {}: {}", self.font, self.reason)]
pub struct FontLoadError {
    pub font: String,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
#[error("failed to decode image: {}", self.path.display())]
pub struct ImageDecodeError {
    pub path: PathBuf,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl ImageDecodeError {
    pub fn new(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_quotes_input() {
        let err: Error = InvalidInputError {
            input: "ab".to_owned(),
        }
        .into();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(
            err.to_string(),
            "input must be a single character or an existing image path, got: \"ab\""
        );
    }

    #[test]
    fn image_decode_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ImageDecodeError::new("missing.png", io);
        assert_eq!(err.to_string(), "failed to decode image: missing.png");
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("gone"));
    }
}
