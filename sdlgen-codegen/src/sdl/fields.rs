//! Field block generation.

use super::tokens::SdlToken;
use sdlgen_core::{
    DiagnosticReason, Diagnostics, FieldDescriptor, ParameterDescriptor, SchemaKind,
    TypeDescriptor, TypeRef, ValueType,
};
use sdlgen_schema::{TypeRegistry, Unresolved, validate_field, validate_parameter};

/// Generator for the field block of a type declaration.
pub struct FieldGenerator<'r, 'a> {
    registry: &'r TypeRegistry<'a>,
}

impl<'r, 'a> FieldGenerator<'r, 'a> {
    /// Creates a new field generator.
    #[must_use]
    pub fn new(registry: &'r TypeRegistry<'a>) -> Self {
        Self { registry }
    }

    /// Generates the braced field block of `descriptor`.
    ///
    /// Fields that cannot be rendered are reported to `diagnostics` and
    /// left out entirely.
    pub fn generate(&self, descriptor: &TypeDescriptor, diagnostics: &mut Diagnostics) -> String {
        let mut output = String::new();
        SdlToken::BlockOpen.push_to(&mut output);

        for field in &descriptor.fields {
            let line = if descriptor.kind == SchemaKind::Enum {
                self.generate_enum_entry(descriptor, field, diagnostics)
            } else {
                self.generate_field(descriptor, field, diagnostics)
            };
            if let Some(line) = line {
                output.push_str(&line);
            }
        }

        SdlToken::BlockClose.push_to(&mut output);
        output
    }

    /// Enum entries carry the key only; type, nullability and parameters
    /// are ignored.
    fn generate_enum_entry(
        &self,
        descriptor: &TypeDescriptor,
        field: &FieldDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> Option<String> {
        let key = field.key();
        if key.is_empty() {
            diagnostics.report(
                descriptor.name.as_str(),
                DiagnosticReason::InvalidDescriptor,
                format!("enum entry of {} has no name", descriptor.name),
            );
            return None;
        }

        let mut line = key.to_string();
        SdlToken::Newline.push_to(&mut line);
        Some(line)
    }

    fn generate_field(
        &self,
        descriptor: &TypeDescriptor,
        field: &FieldDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> Option<String> {
        let subject = format!("{}.{}", descriptor.name, field.key());

        if let Err(err) = validate_field(&descriptor.name, field) {
            diagnostics.report(subject, DiagnosticReason::InvalidDescriptor, err.to_string());
            return None;
        }

        let value = match self.render_type(
            field.value_type,
            field.element_type(),
            field.type_ref.as_ref(),
            field.nullable,
        ) {
            Ok(value) => value,
            Err(unresolved) => {
                diagnostics.report(
                    subject,
                    unresolved.reason(),
                    format!(
                        "field {} is of type {} but {}",
                        field.key(),
                        field.value_type,
                        unresolved
                    ),
                );
                return None;
            }
        };

        let mut line = field.key().to_string();
        line.push_str(&self.generate_arguments(&subject, &field.parameters, diagnostics));
        SdlToken::KeySep.push_to(&mut line);
        line.push_str(&value);
        SdlToken::Newline.push_to(&mut line);
        Some(line)
    }

    /// Generates the argument list of a field, or nothing if no parameter
    /// survives filtering.
    fn generate_arguments(
        &self,
        field: &str,
        parameters: &[ParameterDescriptor],
        diagnostics: &mut Diagnostics,
    ) -> String {
        let arguments: Vec<String> = parameters
            .iter()
            .filter_map(|parameter| self.generate_parameter(field, parameter, diagnostics))
            .collect();

        if arguments.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        SdlToken::ArgsOpen.push_to(&mut output);
        output.push_str(&arguments.join(SdlToken::ArgSep.text()));
        SdlToken::ArgsClose.push_to(&mut output);
        output
    }

    fn generate_parameter(
        &self,
        field: &str,
        parameter: &ParameterDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> Option<String> {
        let subject = format!("{}({})", field, parameter.name);

        if let Err(err) = validate_parameter(field, parameter) {
            diagnostics.report(subject, DiagnosticReason::InvalidDescriptor, err.to_string());
            return None;
        }

        match self.render_type(
            parameter.value_type,
            parameter.element_type(),
            parameter.object_type_ref.as_ref(),
            parameter.nullable,
        ) {
            Ok(value) => {
                let mut entry = parameter.name.clone();
                SdlToken::KeySep.push_to(&mut entry);
                entry.push_str(&value);
                Some(entry)
            }
            Err(unresolved) => {
                diagnostics.report(
                    subject,
                    unresolved.reason(),
                    format!(
                        "param {} is of type {} but {}",
                        parameter.name, parameter.value_type, unresolved
                    ),
                );
                None
            }
        }
    }

    /// Renders a value type with its list and non-null markers.
    ///
    /// `element` is the element type when the value is a list.
    fn render_type(
        &self,
        value_type: ValueType,
        element: Option<ValueType>,
        type_ref: Option<&TypeRef>,
        nullable: bool,
    ) -> Result<String, Unresolved> {
        let inner = element.unwrap_or(value_type);
        let token = match inner.token() {
            Some(token) => token,
            None => self.registry.resolve(type_ref)?.operation_name.as_str(),
        };

        let mut output = String::new();
        if element.is_some() {
            SdlToken::ListOpen.push_to(&mut output);
            output.push_str(token);
            SdlToken::ListClose.push_to(&mut output);
        } else {
            output.push_str(token);
        }
        if !nullable {
            SdlToken::NonNull.push_to(&mut output);
        }
        Ok(output)
    }
}
