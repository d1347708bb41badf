use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MentorError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("model.temperature out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: model.temperature out of range"
        );
    }

    #[test]
    fn mentor_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let mentor_err: MentorError = io_err.into();
        assert!(matches!(mentor_err, MentorError::Io(_)));
        assert!(mentor_err.to_string().contains("file missing"));
    }

    #[test]
    fn image_error_display() {
        let err = MentorError::Image("not an image: notes.txt".into());
        assert_eq!(err.to_string(), "image error: not an image: notes.txt");
    }
}
