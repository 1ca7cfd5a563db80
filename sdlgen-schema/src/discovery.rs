//! Descriptor discovery.
//!
//! Collects the ordered batch of type descriptors from descriptor files and
//! directories. XML files hold descriptor packages (see [`crate::parser`]);
//! JSON files hold an array of serialized [`TypeDescriptor`]s.

use crate::error::ParseError;
use crate::parser::parse_descriptors_in;
use sdlgen_core::{DiagnosticReason, Diagnostics, TypeDescriptor};
use std::path::{Path, PathBuf};

/// Descriptors found by discovery, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct DescriptorSet {
    /// Annotated type descriptors.
    pub descriptors: Vec<TypeDescriptor>,
    /// Names of declared types that carry no schema annotation.
    pub unannotated: Vec<String>,
    /// Diagnostics recorded while discovering.
    pub diagnostics: Diagnostics,
}

impl DescriptorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding `descriptors` and nothing else.
    #[must_use]
    pub fn from_descriptors(descriptors: Vec<TypeDescriptor>) -> Self {
        Self {
            descriptors,
            ..Self::default()
        }
    }

    /// Records a declared type without schema annotation.
    pub fn add_unannotated(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.diagnostics.report(
            name.as_str(),
            DiagnosticReason::MissingAnnotation,
            format!("class {} should be annotated", name),
        );
        self.unannotated.push(name);
    }

    /// Appends the contents of `other`, keeping order.
    pub fn merge(&mut self, other: DescriptorSet) {
        self.descriptors.extend(other.descriptors);
        self.unannotated.extend(other.unannotated);
        self.diagnostics.extend(other.diagnostics);
    }

    /// Returns the number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if no descriptor was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Parses a JSON array of type descriptors.
///
/// # Arguments
/// * `json` - A JSON array of serialized type descriptors
///
/// # Returns
/// The descriptors in array order.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed.
pub fn parse_json(json: &str) -> Result<DescriptorSet, ParseError> {
    let descriptors: Vec<TypeDescriptor> = serde_json::from_str(json)?;
    Ok(DescriptorSet::from_descriptors(descriptors))
}

/// Loads one descriptor file, dispatching on its extension.
///
/// The package filter only applies to XML files.
///
/// # Arguments
/// * `path` - Path to a `.xml` or `.json` descriptor file
/// * `packages` - XML package names to keep; empty keeps all
///
/// # Returns
/// The descriptors found in the file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed, or has an
/// unsupported extension.
pub fn load_file(path: &Path, packages: &[String]) -> Result<DescriptorSet, ParseError> {
    let format = InputFormat::of(path).ok_or_else(|| ParseError::UnsupportedInput {
        path: path.to_path_buf(),
    })?;
    let source = std::fs::read_to_string(path)?;
    tracing::debug!("loading descriptors from {}", path.display());

    match format {
        InputFormat::Xml => parse_descriptors_in(&source, packages),
        InputFormat::Json => parse_json(&source),
    }
}

/// Discovers descriptors from files and directories, in the given order.
///
/// Directories are walked recursively; their `.xml` and `.json` entries are
/// visited in sorted path order so repeated runs see the same sequence.
///
/// # Arguments
/// * `paths` - Descriptor files or directories
/// * `packages` - XML package names to keep; empty keeps all
///
/// # Returns
/// The merged descriptor set, in discovery order.
///
/// # Errors
/// Returns `ParseError` for the first input that cannot be read or parsed.
pub fn discover<P: AsRef<Path>>(
    paths: &[P],
    packages: &[String],
) -> Result<DescriptorSet, ParseError> {
    let mut set = DescriptorSet::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            for file in collect_files(path)? {
                set.merge(load_file(&file, packages)?);
            }
        } else {
            set.merge(load_file(path, packages)?);
        }
    }

    tracing::debug!(
        "discovered {} descriptors, {} unannotated types",
        set.descriptors.len(),
        set.unannotated.len()
    );
    Ok(set)
}

/// Supported descriptor file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Xml,
    Json,
}

impl InputFormat {
    fn of(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("xml") {
            Some(Self::Xml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Recursively collects descriptor files below `dir`, sorted by path.
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();

    let mut files = Vec::new();
    for entry in entries {
        if entry.is_dir() {
            files.extend(collect_files(&entry)?);
        } else if InputFormat::of(&entry).is_some() {
            files.push(entry);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_core::{FieldDescriptor, SchemaKind, ValueType};
    use std::fs;

    const AUTHOR_XML: &str = r#"<package name="lib.authors">
    <class name="Author"><schema operationName="author"/></class>
</package>"#;

    const BOOK_XML: &str = r#"<package name="lib.books">
    <class name="Book">
        <schema kind="IMPLEMENTATION" operationName="book" baseRef="Author"/>
    </class>
    <class name="Shelf"/>
</package>"#;

    #[test]
    fn test_parse_json() {
        let json = r#"[
            {"name": "DocQuery", "kind": "QUERY", "operationName": "docs",
             "fields": [{"sourceName": "all", "valueType": "LIST", "typeRef": "Doc"}]}
        ]"#;
        let set = parse_json(json).expect("parse");
        assert_eq!(set.len(), 1);
        assert_eq!(set.descriptors[0].kind, SchemaKind::Query);
        assert_eq!(
            set.descriptors[0].fields[0].element_type(),
            Some(ValueType::Object)
        );
    }

    #[test]
    fn test_parse_json_error() {
        assert!(matches!(parse_json("{"), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_discover_directory_is_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b_books.xml"), BOOK_XML).expect("write");
        fs::write(dir.path().join("a_authors.xml"), AUTHOR_XML).expect("write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

        let set = discover(&[dir.path()], &[]).expect("discover");
        let names: Vec<_> = set.descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Author", "Book"]);
        assert_eq!(set.unannotated, vec!["Shelf".to_string()]);
        assert_eq!(set.diagnostics.len(), 1);
    }

    #[test]
    fn test_discover_nested_and_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("mkdir");
        fs::write(nested.join("authors.xml"), AUTHOR_XML).expect("write");

        let doc = TypeDescriptor::new(SchemaKind::Object, "Doc", "doc")
            .expect("valid")
            .with_field(FieldDescriptor::new("title", ValueType::String));
        let json = serde_json::to_string(&vec![doc]).expect("serialize");
        let json_dir = tempfile::tempdir().expect("tempdir");
        let json_path = json_dir.path().join("doc.json");
        fs::write(&json_path, json).expect("write");

        let set = discover(&[json_path.as_path(), dir.path()], &[]).expect("discover");
        let names: Vec<_> = set.descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Doc", "Author"]);
    }

    #[test]
    fn test_discover_package_filter() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("authors.xml"), AUTHOR_XML).expect("write");
        fs::write(dir.path().join("books.xml"), BOOK_XML).expect("write");

        let set = discover(&[dir.path()], &["lib.books".to_string()]).expect("discover");
        assert_eq!(set.len(), 1);
        assert_eq!(set.descriptors[0].name, "Book");
    }

    #[test]
    fn test_unsupported_input() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("schema.yaml");
        fs::write(&path, "x").expect("write");

        assert!(matches!(
            load_file(&path, &[]),
            Err(ParseError::UnsupportedInput { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = discover(&["/nonexistent/descriptors.xml"], &[]);
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
