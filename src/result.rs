use thiserror::Error;

/// Header name and value ready to attach to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: &'static str,
    pub value: String,
}

/// Errors that can be produced while building or serializing a policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CspError {
    #[error("{operation} requires at least one non-blank value")]
    MissingValues { operation: &'static str },
    #[error("no directives declared")]
    EmptyPolicy,
}
