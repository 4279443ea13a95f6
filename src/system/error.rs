use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single provider query.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{what} is not available on this system")]
    Unavailable { what: &'static str },

    #[error("failed to query {what}: {reason}")]
    Query { what: &'static str, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ProviderError {
    pub fn unavailable(what: &'static str) -> Self {
        ProviderError::Unavailable { what }
    }

    pub fn query(what: &'static str, reason: impl Into<String>) -> Self {
        ProviderError::Query {
            what,
            reason: reason.into(),
        }
    }
}

/// Fatal failure of a whole collection pass. Carries the first property
/// that could not be read.
#[derive(Debug, Error)]
#[error("{property}: {source}")]
pub struct CollectionError {
    pub property: &'static str,
    #[source]
    pub source: ProviderError,
}

impl CollectionError {
    pub fn new(property: &'static str, source: ProviderError) -> Self {
        CollectionError { property, source }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_error_names_property_and_cause() {
        let err = CollectionError::new("memory", ProviderError::unavailable("memory metrics"));
        assert_eq!(
            err.to_string(),
            "memory: memory metrics is not available on this system"
        );
    }

    #[test]
    fn report_error_wraps_collection_error_transparently() {
        let err: ReportError =
            CollectionError::new("cpu", ProviderError::query("cpu usage", "boom")).into();
        assert_eq!(err.to_string(), "cpu: failed to query cpu usage: boom");
    }
}
