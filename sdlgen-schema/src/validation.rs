//! Descriptor validation utilities.
//!
//! Descriptors with public fields can be built without going through the
//! checked constructors, so the generator re-validates every element before
//! rendering it.

use crate::error::SchemaError;
use sdlgen_core::{
    DescriptorError, FieldDescriptor, ParameterDescriptor, TypeDescriptor, ValueType,
};
use std::collections::{HashMap, HashSet};

/// Validates the type-level invariants of a descriptor.
///
/// # Errors
/// Returns `DescriptorError` if the source name or operation name is empty.
pub fn validate_type(descriptor: &TypeDescriptor) -> Result<(), DescriptorError> {
    if descriptor.name.is_empty() {
        return Err(DescriptorError::MissingTypeName);
    }
    if descriptor.operation_name.is_empty() {
        return Err(DescriptorError::missing_operation_name(&descriptor.name));
    }
    Ok(())
}

/// Validates a field of `type_name`.
///
/// # Errors
/// Returns `DescriptorError` if the field has no source name or declares a
/// list of lists.
pub fn validate_field(type_name: &str, field: &FieldDescriptor) -> Result<(), DescriptorError> {
    if field.source_name.is_empty() {
        return Err(DescriptorError::MissingFieldName {
            type_name: type_name.to_string(),
        });
    }
    if field.element_type() == Some(ValueType::List) {
        return Err(DescriptorError::nested_list(format!(
            "{}.{}",
            type_name,
            field.key()
        )));
    }
    Ok(())
}

/// Validates a parameter declared on `field`.
///
/// # Errors
/// Returns `DescriptorError` if the parameter has no name or declares a list
/// of lists.
pub fn validate_parameter(
    field: &str,
    parameter: &ParameterDescriptor,
) -> Result<(), DescriptorError> {
    if parameter.name.is_empty() {
        return Err(DescriptorError::missing_parameter_name(field));
    }
    if parameter.element_type() == Some(ValueType::List) {
        return Err(DescriptorError::nested_list(format!(
            "{}({})",
            field, parameter.name
        )));
    }
    Ok(())
}

/// Validates a whole batch for names that would collide in the output.
///
/// Operation roots are exempt from the operation name check because
/// repeated roots are merged with `extend`.
///
/// # Errors
/// Returns `SchemaError` for the first duplicate found.
pub fn validate_batch(descriptors: &[TypeDescriptor]) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_operations: HashMap<&str, &str> = HashMap::new();

    for descriptor in descriptors {
        if !seen_names.insert(descriptor.name.as_str()) {
            return Err(SchemaError::DuplicateType {
                name: descriptor.name.clone(),
            });
        }

        if descriptor.kind.is_operation_root() {
            continue;
        }
        if let Some(first) =
            seen_operations.insert(descriptor.operation_name.as_str(), descriptor.name.as_str())
        {
            return Err(SchemaError::DuplicateOperationName {
                operation_name: descriptor.operation_name.clone(),
                first: first.to_string(),
                second: descriptor.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_core::SchemaKind;

    fn raw_type(kind: SchemaKind, name: &str, operation_name: &str) -> TypeDescriptor {
        TypeDescriptor {
            name: name.to_string(),
            kind,
            operation_name: operation_name.to_string(),
            base_type_ref: None,
            fields: Vec::new(),
        }
    }

    #[test]
    fn test_validate_type() {
        assert!(validate_type(&raw_type(SchemaKind::Object, "Doc", "doc")).is_ok());
        assert_eq!(
            validate_type(&raw_type(SchemaKind::Object, "Doc", "")),
            Err(DescriptorError::missing_operation_name("Doc"))
        );
        assert_eq!(
            validate_type(&raw_type(SchemaKind::Object, "", "doc")),
            Err(DescriptorError::MissingTypeName)
        );
    }

    #[test]
    fn test_validate_field_nested_list() {
        let field =
            FieldDescriptor::new("matrix", ValueType::List).with_item_type(ValueType::List);
        assert_eq!(
            validate_field("Grid", &field),
            Err(DescriptorError::nested_list("Grid.matrix"))
        );

        let field = FieldDescriptor::new("rows", ValueType::List).with_item_type(ValueType::Int);
        assert!(validate_field("Grid", &field).is_ok());
    }

    #[test]
    fn test_validate_field_name() {
        let field = FieldDescriptor::new("", ValueType::String);
        assert!(matches!(
            validate_field("Doc", &field),
            Err(DescriptorError::MissingFieldName { .. })
        ));
    }

    #[test]
    fn test_validate_parameter() {
        let param = ParameterDescriptor {
            name: String::new(),
            value_type: ValueType::String,
            object_type_ref: None,
            item_type: None,
            nullable: true,
        };
        assert_eq!(
            validate_parameter("Doc.url", &param),
            Err(DescriptorError::missing_parameter_name("Doc.url"))
        );

        let param = ParameterDescriptor::new("ids")
            .expect("valid")
            .with_value_type(ValueType::List)
            .with_item_type(ValueType::Id);
        assert!(validate_parameter("Doc.url", &param).is_ok());
    }

    #[test]
    fn test_validate_batch_allows_repeated_roots() {
        let batch = vec![
            raw_type(SchemaKind::Query, "DocQuery", "docs"),
            raw_type(SchemaKind::Query, "UserQuery", "docs"),
            raw_type(SchemaKind::Object, "Doc", "doc"),
        ];
        assert!(validate_batch(&batch).is_ok());
    }

    #[test]
    fn test_validate_batch_duplicates() {
        let batch = vec![
            raw_type(SchemaKind::Object, "Doc", "doc"),
            raw_type(SchemaKind::Object, "Doc", "other"),
        ];
        assert!(matches!(
            validate_batch(&batch),
            Err(SchemaError::DuplicateType { .. })
        ));

        let batch = vec![
            raw_type(SchemaKind::Object, "Doc", "doc"),
            raw_type(SchemaKind::Input, "DocInput", "doc"),
        ];
        let err = validate_batch(&batch).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate operation name 'doc' on types 'Doc' and 'DocInput'"
        );
    }
}
