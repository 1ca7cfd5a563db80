//! Error types for descriptor discovery and validation.

use sdlgen_core::DescriptorError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for descriptor file parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Descriptor invariant violated while building from a file.
    #[error("invalid descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    /// Input file with an unsupported extension.
    #[error("unsupported descriptor input '{}'", path.display())]
    UnsupportedInput {
        /// Offending path.
        path: PathBuf,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for batch validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two descriptors share a source name.
    #[error("duplicate type name '{name}'")]
    DuplicateType {
        /// Duplicated source name.
        name: String,
    },

    /// Two non-root descriptors render under the same operation name.
    #[error("duplicate operation name '{operation_name}' on types '{first}' and '{second}'")]
    DuplicateOperationName {
        /// Duplicated operation name.
        operation_name: String,
        /// First declaring type.
        first: String,
        /// Second declaring type.
        second: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}
