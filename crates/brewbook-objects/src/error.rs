//! Construction error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A constructor was invoked as a plain call.
    #[error("{type_name} must be called with new keyword")]
    MissingConstructionContext { type_name: &'static str },
}
