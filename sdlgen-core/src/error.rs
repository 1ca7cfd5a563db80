//! Error types for descriptor construction.

use thiserror::Error;

/// Error raised when a descriptor violates one of its required invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Type descriptor without an operation name.
    #[error("type '{type_name}' has no operation name")]
    MissingOperationName {
        /// Source name of the offending type.
        type_name: String,
    },

    /// Type descriptor without a source name.
    #[error("type descriptor has an empty source name")]
    MissingTypeName,

    /// Field descriptor without a source name.
    #[error("field of type '{type_name}' has an empty source name")]
    MissingFieldName {
        /// Source name of the declaring type.
        type_name: String,
    },

    /// Parameter descriptor without a name.
    #[error("parameter of field '{field}' has no name")]
    MissingParameterName {
        /// Field that declares the parameter.
        field: String,
    },

    /// List whose element type is itself a list.
    #[error("'{subject}' declares a list of lists, which is not supported")]
    NestedList {
        /// Field or parameter subject.
        subject: String,
    },

    /// Unrecognised schema kind literal.
    #[error("unknown schema kind '{value}'")]
    UnknownKind {
        /// Offending literal.
        value: String,
    },

    /// Unrecognised value type literal.
    #[error("unknown value type '{value}'")]
    UnknownValueType {
        /// Offending literal.
        value: String,
    },
}

impl DescriptorError {
    /// Creates a missing operation name error.
    pub fn missing_operation_name(type_name: impl Into<String>) -> Self {
        Self::MissingOperationName {
            type_name: type_name.into(),
        }
    }

    /// Creates a missing parameter name error.
    pub fn missing_parameter_name(field: impl Into<String>) -> Self {
        Self::MissingParameterName {
            field: field.into(),
        }
    }

    /// Creates a nested list error.
    pub fn nested_list(subject: impl Into<String>) -> Self {
        Self::NestedList {
            subject: subject.into(),
        }
    }
}

/// Result type alias for descriptor operations.
pub type Result<T> = std::result::Result<T, DescriptorError>;
