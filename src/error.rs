use thiserror::Error;

/// Why a poll did not produce a snapshot.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status}")]
    Http { status: u16 },

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no token records returned")]
    NotFound,
}

impl FetchError {
    /// Taxonomy class, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) | Self::Http { .. } => "transport",
            Self::Parse(_) => "parse",
            Self::NotFound => "not_found",
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
