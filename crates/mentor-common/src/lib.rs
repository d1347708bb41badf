pub mod errors;

pub use errors::{ConfigError, MentorError};

pub type Result<T> = std::result::Result<T, MentorError>;
