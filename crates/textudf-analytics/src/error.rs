use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("unknown clean type: {name}")]
    UnknownCleanKind { name: String },
}
