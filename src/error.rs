use std::path::PathBuf;

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

/// The rate board could not be downloaded.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// The downloaded page did not contain a usable rate pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid selector {selector}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("element not found: {selector}")]
    MissingElement { selector: String },

    #[error("not a number: buy={buy:?} sell={sell:?}")]
    NotANumber { buy: String, sell: String },

    #[error("rates must be positive: buy={buy} sell={sell}")]
    NonPositive { buy: String, sell: String },
}

/// The messaging sink refused or failed a send.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("delivery to {destination} failed: {reason}")]
    Rejected { destination: String, reason: String },
}

/// The rate cache could not be written.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode cache record: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short stable label for the error family, used as a log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Fetch(_) => "fetch",
            Error::Parse(_) => "parse",
            Error::Delivery(_) => "delivery",
            Error::Persist(_) => "persist",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_number_keeps_raw_values() {
        let err: Error = ParseError::NotANumber {
            buy: "41.10".into(),
            sell: "N/A".into(),
        }
        .into();

        assert_eq!(err.kind(), "parse");
        assert_eq!(err.to_string(), r#"not a number: buy="41.10" sell="N/A""#);
    }

    #[test]
    fn persist_error_names_path() {
        let err = PersistError::Io {
            path: PathBuf::from("/nope/cache.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().starts_with("failed to write /nope/cache.json"));
    }
}
