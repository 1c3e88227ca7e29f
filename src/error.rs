use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Backend API errors with structured variants.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status and a FastAPI-style
    /// `{"detail": ...}` body.
    #[error("backend returned {status}: {detail}")]
    Backend { status: u16, detail: String },

    #[error("invalid backend URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// Local store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read store file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write store file: {0}")]
    Write(#[source] std::io::Error),

    /// The store file exists but does not parse. Surfaced instead of
    /// silently starting over so saved names are never clobbered.
    #[error("store file is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("saved name not found: {id}")]
    NotFound { id: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
