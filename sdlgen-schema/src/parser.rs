//! XML descriptor package parser.
//!
//! A descriptor package lists declared classes and their schema annotations:
//!
//! ```xml
//! <sdl:package xmlns:sdl="urn:sdlgen" name="com.example.dto">
//!   <class name="Doc">
//!     <schema kind="OBJECT" operationName="doc"/>
//!     <member name="title"><field/></member>
//!     <member name="url">
//!       <field nullable="false">
//!         <parameter name="welcome"/>
//!       </field>
//!     </member>
//!   </class>
//! </sdl:package>
//! ```
//!
//! Classes without `<schema>` and members without `<field>` are reported as
//! missing annotations and left out of the resulting [`DescriptorSet`].

use crate::discovery::DescriptorSet;
use crate::error::ParseError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use sdlgen_core::{
    DiagnosticReason, FieldDescriptor, ParameterDescriptor, SchemaKind, TypeDescriptor, TypeRef,
    ValueType,
};

/// Parses every package of an XML descriptor document.
///
/// # Arguments
/// * `xml` - The descriptor package XML content
///
/// # Returns
/// The annotated descriptors in document order, with unannotated classes and
/// members recorded as diagnostics.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or an attribute carries an
/// invalid value.
pub fn parse_descriptors(xml: &str) -> Result<DescriptorSet, ParseError> {
    parse_descriptors_in(xml, &[])
}

/// Parses the packages of an XML descriptor document whose name equals, or
/// is nested under, one of `packages`. An empty filter keeps every package.
///
/// # Arguments
/// * `xml` - The descriptor package XML content
/// * `packages` - Package names to keep
///
/// # Returns
/// The descriptors of the matching packages, in document order.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or an attribute carries an
/// invalid value.
pub fn parse_descriptors_in(
    xml: &str,
    packages: &[String],
) -> Result<DescriptorSet, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut set = DescriptorSet::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if matches!(name, "package" | "sdl:package") {
                    let package = required_attr(e, "package", "name")?;
                    if package_matches(&package, packages) {
                        tracing::debug!("scanning package {}", package);
                        parse_package(&mut reader, &mut set)?;
                    } else {
                        tracing::debug!("skipping package {}", package);
                        skip_element(&mut reader)?;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(set)
}

/// Returns true if `package` equals or is nested under one of `filters`.
#[must_use]
pub fn package_matches(package: &str, filters: &[String]) -> bool {
    filters.is_empty()
        || filters.iter().any(|filter| {
            package == filter
                || package
                    .strip_prefix(filter.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
}

/// Parses the classes of one package, up to its end tag.
fn parse_package(
    reader: &mut Reader<&[u8]>,
    set: &mut DescriptorSet,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "class" {
                    let class_name = required_attr(e, "class", "name")?;
                    parse_class(reader, class_name, set)?;
                } else {
                    skip_element(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "class" {
                    let class_name = required_attr(e, "class", "name")?;
                    set.add_unannotated(class_name);
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Schema annotation of a class.
struct SchemaAnnotation {
    kind: SchemaKind,
    operation_name: String,
    base_ref: Option<TypeRef>,
}

/// Parses one class body and records its descriptor or diagnostics.
fn parse_class(
    reader: &mut Reader<&[u8]>,
    class_name: String,
    set: &mut DescriptorSet,
) -> Result<(), ParseError> {
    let mut annotation = None;
    let mut members = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "schema" => {
                        annotation = Some(parse_schema_annotation(e)?);
                        skip_element(reader)?;
                    }
                    "member" => {
                        let member_name = required_attr(e, "member", "name")?;
                        let field = parse_member(reader, &member_name)?;
                        members.push((member_name, field));
                    }
                    _ => skip_element(reader)?,
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "schema" => annotation = Some(parse_schema_annotation(e)?),
                    "member" => {
                        let member_name = required_attr(e, "member", "name")?;
                        members.push((member_name, None));
                    }
                    _ => {}
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let Some(annotation) = annotation else {
        set.add_unannotated(class_name);
        return Ok(());
    };

    let created = TypeDescriptor::new(
        annotation.kind,
        class_name.as_str(),
        annotation.operation_name,
    );
    let mut descriptor = match created {
        Ok(descriptor) => descriptor,
        Err(err) => {
            set.diagnostics.report(
                class_name.as_str(),
                DiagnosticReason::InvalidDescriptor,
                format!("class {} rejected: {}", class_name, err),
            );
            set.unannotated.push(class_name);
            return Ok(());
        }
    };
    descriptor.base_type_ref = annotation.base_ref;

    for (member_name, field) in members {
        match field {
            Some(field) => descriptor.add_field(field),
            None => set.diagnostics.report(
                format!("{}.{}", class_name, member_name),
                DiagnosticReason::MissingAnnotation,
                format!("field {}.{} should be annotated", class_name, member_name),
            ),
        }
    }

    set.descriptors.push(descriptor);
    Ok(())
}

/// Parses the attributes of a `<schema>` annotation.
fn parse_schema_annotation(e: &BytesStart<'_>) -> Result<SchemaAnnotation, ParseError> {
    let mut kind = SchemaKind::default();
    let mut operation_name = String::new();
    let mut base_ref = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "kind" => {
                kind = value
                    .parse()
                    .map_err(|_| ParseError::invalid_attr("schema", "kind", value))?
            }
            "operationName" => operation_name = value.to_string(),
            "baseRef" if !value.is_empty() => base_ref = Some(TypeRef::new(value)),
            _ => {}
        }
    }

    Ok(SchemaAnnotation {
        kind,
        operation_name,
        base_ref,
    })
}

/// Parses a member body, returning its field annotation if present.
fn parse_member(
    reader: &mut Reader<&[u8]>,
    member_name: &str,
) -> Result<Option<FieldDescriptor>, ParseError> {
    let mut field = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "field" {
                    let mut descriptor = parse_field_attrs(e, member_name)?;
                    parse_parameters(reader, &mut descriptor)?;
                    field = Some(descriptor);
                } else {
                    skip_element(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "field" {
                    field = Some(parse_field_attrs(e, member_name)?);
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(field)
}

/// Parses the attributes of a `<field>` annotation.
fn parse_field_attrs(
    e: &BytesStart<'_>,
    member_name: &str,
) -> Result<FieldDescriptor, ParseError> {
    let mut field = FieldDescriptor::new(member_name, ValueType::String);

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "name" if !value.is_empty() => field.display_name = Some(value.to_string()),
            "type" => field.value_type = parse_value_type("field", "type", value)?,
            "itemType" => field.item_type = Some(parse_value_type("field", "itemType", value)?),
            "nullable" => field.nullable = parse_bool("field", "nullable", value)?,
            "ref" if !value.is_empty() => field.type_ref = Some(TypeRef::new(value)),
            _ => {}
        }
    }

    Ok(field)
}

/// Parses the `<parameter>` children of a field, up to the field end tag.
fn parse_parameters(
    reader: &mut Reader<&[u8]>,
    field: &mut FieldDescriptor,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "parameter" {
                    field.parameters.push(parse_parameter(e)?);
                }
                skip_element(reader)?;
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "parameter" {
                    field.parameters.push(parse_parameter(e)?);
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses the attributes of a `<parameter>` annotation.
///
/// An empty name is kept; generation drops the parameter with a diagnostic.
fn parse_parameter(e: &BytesStart<'_>) -> Result<ParameterDescriptor, ParseError> {
    let mut parameter = ParameterDescriptor {
        name: required_attr(e, "parameter", "name")?,
        value_type: ValueType::String,
        object_type_ref: None,
        item_type: None,
        nullable: true,
    };

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "type" => parameter.value_type = parse_value_type("parameter", "type", value)?,
            "itemType" => {
                parameter.item_type = Some(parse_value_type("parameter", "itemType", value)?)
            }
            "nullable" => parameter.nullable = parse_bool("parameter", "nullable", value)?,
            "ref" if !value.is_empty() => parameter.object_type_ref = Some(TypeRef::new(value)),
            _ => {}
        }
    }

    Ok(parameter)
}

/// Reads a required attribute.
fn required_attr(
    e: &BytesStart<'_>,
    element: &str,
    attribute: &str,
) -> Result<String, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == attribute.as_bytes() {
            return Ok(std::str::from_utf8(&attr.value)?.to_string());
        }
    }
    Err(ParseError::missing_attr(element, attribute))
}

fn parse_value_type(
    element: &str,
    attribute: &str,
    value: &str,
) -> Result<ValueType, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::invalid_attr(element, attribute, value))
}

fn parse_bool(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}

/// Skips the remainder of an element whose start tag was just read.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
