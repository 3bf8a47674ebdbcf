use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("failed to parse request body: {0}")]
    Deserialization(#[source] serde_json::Error),
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("There must be at least one Clewdr provider")]
    EmptySource,
    #[error("There must be at most one default Clewdr provider")]
    MoreThanOneDefault,
    #[error("\'{0}\' is not a unique name")]
    DuplicateName(String),
    #[error("provider '{name}' uses interface '{interface}', only 'clewdr' is supported")]
    UnsupportedInterface { name: String, interface: String },
}
