//! Schema kinds and field value types.
//!
//! Both enums carry the fixed SDL literal they render as. `OBJECT` and `LIST`
//! value types have no literal of their own; the generator resolves them.

use crate::error::DescriptorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a schema-bearing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaKind {
    /// Query operation root.
    Query,
    /// Mutation operation root.
    Mutation,
    /// Plain object type.
    #[default]
    Object,
    /// Input object type.
    Input,
    /// Interface type.
    Interface,
    /// Object type implementing a base object.
    Implementation,
    /// Enumeration.
    Enum,
}

impl SchemaKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Query,
        Self::Mutation,
        Self::Object,
        Self::Input,
        Self::Interface,
        Self::Implementation,
        Self::Enum,
    ];

    /// Returns the SDL keyword for this kind.
    ///
    /// `Implementation` has no keyword of its own.
    #[must_use]
    pub const fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Query => Some("query"),
            Self::Mutation => Some("mutation"),
            Self::Object => Some("type"),
            Self::Input => Some("input"),
            Self::Interface => Some("interface"),
            Self::Implementation => None,
            Self::Enum => Some("enum"),
        }
    }

    /// Returns the upper-case name used in descriptor files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Input => "INPUT",
            Self::Interface => "INTERFACE",
            Self::Implementation => "IMPLEMENTATION",
            Self::Enum => "ENUM",
        }
    }

    /// Returns true for the `Query` and `Mutation` operation roots.
    #[must_use]
    pub const fn is_operation_root(&self) -> bool {
        matches!(self, Self::Query | Self::Mutation)
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaKind {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DescriptorError::UnknownKind {
                value: s.to_string(),
            })
    }
}

/// Value type of a field or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    /// UTF-8 string.
    #[default]
    String,
    /// Signed 32-bit integer.
    Int,
    /// Double precision float.
    Float,
    /// Boolean.
    Boolean,
    /// Opaque identifier.
    #[serde(rename = "ID")]
    Id,
    /// Reference to another schema type.
    Object,
    /// List of elements.
    List,
}

impl ValueType {
    /// All value types, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::String,
        Self::Int,
        Self::Float,
        Self::Boolean,
        Self::Id,
        Self::Object,
        Self::List,
    ];

    /// Returns the fixed SDL token, or `None` for `Object` and `List`.
    #[must_use]
    pub const fn token(&self) -> Option<&'static str> {
        match self {
            Self::String => Some("String"),
            Self::Int => Some("Int"),
            Self::Float => Some("Float"),
            Self::Boolean => Some("Boolean"),
            Self::Id => Some("ID"),
            Self::Object | Self::List => None,
        }
    }

    /// Returns the upper-case name used in descriptor files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Boolean => "BOOLEAN",
            Self::Id => "ID",
            Self::Object => "OBJECT",
            Self::List => "LIST",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DescriptorError::UnknownValueType {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(SchemaKind::Query.keyword(), Some("query"));
        assert_eq!(SchemaKind::Mutation.keyword(), Some("mutation"));
        assert_eq!(SchemaKind::Object.keyword(), Some("type"));
        assert_eq!(SchemaKind::Input.keyword(), Some("input"));
        assert_eq!(SchemaKind::Interface.keyword(), Some("interface"));
        assert_eq!(SchemaKind::Implementation.keyword(), None);
        assert_eq!(SchemaKind::Enum.keyword(), Some("enum"));
    }

    #[test]
    fn test_operation_roots() {
        let roots: Vec<_> = SchemaKind::ALL
            .into_iter()
            .filter(SchemaKind::is_operation_root)
            .collect();
        assert_eq!(roots, vec![SchemaKind::Query, SchemaKind::Mutation]);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("OBJECT".parse::<SchemaKind>(), Ok(SchemaKind::Object));
        assert_eq!(
            "implementation".parse::<SchemaKind>(),
            Ok(SchemaKind::Implementation)
        );
        assert!(matches!(
            "union".parse::<SchemaKind>(),
            Err(DescriptorError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_value_type_tokens() {
        assert_eq!(ValueType::String.token(), Some("String"));
        assert_eq!(ValueType::Int.token(), Some("Int"));
        assert_eq!(ValueType::Float.token(), Some("Float"));
        assert_eq!(ValueType::Boolean.token(), Some("Boolean"));
        assert_eq!(ValueType::Id.token(), Some("ID"));
        assert_eq!(ValueType::Object.token(), None);
        assert_eq!(ValueType::List.token(), None);
    }

    #[test]
    fn test_value_type_from_str() {
        assert_eq!("id".parse::<ValueType>(), Ok(ValueType::Id));
        assert_eq!("List".parse::<ValueType>(), Ok(ValueType::List));
        assert!("decimal".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ValueType::Id).expect("serialize");
        assert_eq!(json, "\"ID\"");
        let kind: SchemaKind = serde_json::from_str("\"MUTATION\"").expect("deserialize");
        assert_eq!(kind, SchemaKind::Mutation);
    }
}
