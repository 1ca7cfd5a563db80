//! Type, field and parameter descriptors.
//!
//! Descriptors are produced once by a discovery collaborator (descriptor
//! files, `#[derive(SdlSchema)]`, hand-written code) and are read-only while
//! a schema is generated. Cross references between types go through
//! [`TypeRef`], the stable source name of the referenced type.

use crate::error::{DescriptorError, Result};
use crate::kind::{SchemaKind, ValueType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable reference to a declared type, by its source name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    /// Creates a reference to the type declared as `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a reference to a type implementing [`SchemaType`].
    #[must_use]
    pub fn of<T: SchemaType>() -> Self {
        Self(T::TYPE_NAME.to_string())
    }

    /// Returns the referenced source name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A type that can describe itself as a schema type.
///
/// Implemented by `#[derive(SdlSchema)]`.
pub trait SchemaType {
    /// Source name of the type, the key other descriptors reference it by.
    const TYPE_NAME: &'static str;

    /// Returns the descriptor of this type.
    fn descriptor() -> TypeDescriptor;
}

const fn default_nullable() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

/// Descriptor of one schema-bearing type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Source name of the declared type; target of [`TypeRef`]s.
    pub name: String,
    /// Schema kind.
    #[serde(default)]
    pub kind: SchemaKind,
    /// Identifier used for this type in SDL output.
    pub operation_name: String,
    /// Base type of an `Implementation`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type_ref: Option<TypeRef>,
    /// Fields in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Creates a new type descriptor with no fields.
    ///
    /// # Errors
    /// Returns `DescriptorError` if `name` or `operation_name` is empty.
    pub fn new(
        kind: SchemaKind,
        name: impl Into<String>,
        operation_name: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let operation_name = operation_name.into();

        if name.is_empty() {
            return Err(DescriptorError::MissingTypeName);
        }
        if operation_name.is_empty() {
            return Err(DescriptorError::missing_operation_name(name));
        }

        Ok(Self {
            name,
            kind,
            operation_name,
            base_type_ref: None,
            fields: Vec::new(),
        })
    }

    /// Sets the base type reference.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<TypeRef>) -> Self {
        self.base_type_ref = Some(base.into());
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Returns a reference to this type.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.name.as_str())
    }

    /// Looks up a field by its rendered key.
    #[must_use]
    pub fn get_field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key() == key)
    }
}

/// Descriptor of one member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// The member's own identifier.
    pub source_name: String,
    /// Optional override of the rendered key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Value type.
    #[serde(default)]
    pub value_type: ValueType,
    /// Referenced type of an `Object` field or a list of objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<TypeRef>,
    /// Element type of a `List` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ValueType>,
    /// Whether the field accepts null.
    #[serde(default = "default_nullable", skip_serializing_if = "is_true")]
    pub nullable: bool,
    /// Arguments in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDescriptor>,
}

impl FieldDescriptor {
    /// Creates a nullable field with no parameters.
    #[must_use]
    pub fn new(source_name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            source_name: source_name.into(),
            display_name: None,
            value_type,
            type_ref: None,
            item_type: None,
            nullable: true,
            parameters: Vec::new(),
        }
    }

    /// Sets the rendered key override.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets nullability.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the referenced type.
    #[must_use]
    pub fn with_type_ref(mut self, type_ref: impl Into<TypeRef>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    /// Sets the list element type.
    #[must_use]
    pub fn with_item_type(mut self, item_type: ValueType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the rendered key: the display name if set and non-empty,
    /// otherwise the source name.
    #[must_use]
    pub fn key(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.source_name,
        }
    }

    /// Returns the element type of a `List` field, `None` otherwise.
    #[must_use]
    pub fn element_type(&self) -> Option<ValueType> {
        element_type(self.value_type, self.item_type, self.type_ref.is_some())
    }
}

/// Descriptor of one argument of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Argument name.
    pub name: String,
    /// Value type.
    #[serde(default)]
    pub value_type: ValueType,
    /// Referenced type of an `Object` argument or a list of objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type_ref: Option<TypeRef>,
    /// Element type of a `List` argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ValueType>,
    /// Whether the argument accepts null.
    #[serde(default = "default_nullable", skip_serializing_if = "is_true")]
    pub nullable: bool,
}

impl ParameterDescriptor {
    /// Creates a nullable `String` parameter.
    ///
    /// # Errors
    /// Returns `DescriptorError` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DescriptorError::missing_parameter_name(""));
        }
        Ok(Self {
            name,
            value_type: ValueType::String,
            object_type_ref: None,
            item_type: None,
            nullable: true,
        })
    }

    /// Sets the value type.
    #[must_use]
    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Sets the referenced type.
    #[must_use]
    pub fn with_object_ref(mut self, type_ref: impl Into<TypeRef>) -> Self {
        self.object_type_ref = Some(type_ref.into());
        self
    }

    /// Sets the list element type.
    #[must_use]
    pub fn with_item_type(mut self, item_type: ValueType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Sets nullability.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Returns the element type of a `List` parameter, `None` otherwise.
    #[must_use]
    pub fn element_type(&self) -> Option<ValueType> {
        element_type(
            self.value_type,
            self.item_type,
            self.object_type_ref.is_some(),
        )
    }
}

fn element_type(
    value_type: ValueType,
    item_type: Option<ValueType>,
    has_ref: bool,
) -> Option<ValueType> {
    if value_type != ValueType::List {
        return None;
    }
    Some(item_type.unwrap_or(if has_ref {
        ValueType::Object
    } else {
        ValueType::String
    }))
}
