//! Tests for `#[derive(SdlSchema)]`.

#![allow(dead_code)]

use sdlgen::prelude::*;

#[derive(SdlSchema)]
#[sdl(kind = "object", operation_name = "doc")]
struct Doc {
    #[sdl]
    title: String,
    #[sdl(nullable = false, param(name = "welcome"), param(name = "test"))]
    url: String,
    cache: Vec<u8>,
}

#[derive(SdlSchema)]
#[sdl(operation_name = "docType")]
enum DocType {
    #[sdl(name = "media")]
    Media,
    #[sdl(name = "document")]
    Document,
    Draft,
}

#[derive(SdlSchema)]
#[sdl(operation_name = "author")]
struct Author {
    #[sdl(nullable = false)]
    name: String,
    #[sdl(ty = "list", of = Doc)]
    docs: Vec<Doc>,
}

#[derive(SdlSchema)]
#[sdl(kind = "implementation", operation_name = "editor", base = Author)]
struct Editor {
    #[sdl(nullable = false)]
    name: String,
    #[sdl(ty = "list", item = "int", name = "reviewedIds")]
    reviewed: Vec<i32>,
}

#[derive(SdlSchema)]
#[sdl(kind = "query", operation_name = "LibraryQuery")]
struct LibraryQuery {
    #[sdl(
        ty = "object",
        of = "Doc",
        param(name = "id", ty = "id", nullable = false),
        param(name = "kind", ty = "object", of = DocType)
    )]
    doc: Option<Doc>,
}

#[derive(SdlSchema)]
#[sdl(kind = "QUERY", operation_name = "AuthorQuery", crate = "sdlgen::core")]
struct AuthorQuery {
    #[sdl(ty = "list", of = Author, nullable = false)]
    r#authors: Vec<Author>,
}

#[test]
fn test_struct_descriptor() {
    let descriptor = Doc::descriptor();
    assert_eq!(Doc::TYPE_NAME, "Doc");
    assert_eq!(descriptor.name, "Doc");
    assert_eq!(descriptor.kind, SchemaKind::Object);
    assert_eq!(descriptor.operation_name, "doc");
    assert_eq!(descriptor.base_type_ref, None);

    let keys: Vec<_> = descriptor.fields.iter().map(FieldDescriptor::key).collect();
    assert_eq!(keys, vec!["title", "url"]);

    let url = descriptor.get_field("url").expect("url field");
    assert!(!url.nullable);
    assert_eq!(url.value_type, ValueType::String);
    let params: Vec<_> = url.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, vec!["welcome", "test"]);
}

#[test]
fn test_enum_descriptor() {
    let descriptor = DocType::descriptor();
    assert_eq!(descriptor.kind, SchemaKind::Enum);

    let sources: Vec<_> = descriptor
        .fields
        .iter()
        .map(|f| f.source_name.as_str())
        .collect();
    assert_eq!(sources, vec!["Media", "Document"]);
    assert_eq!(descriptor.fields[0].key(), "media");
}

#[test]
fn test_references() {
    assert_eq!(Editor::descriptor().base_type_ref, Some(TypeRef::new("Author")));

    let author = Author::descriptor();
    let docs = author.get_field("docs").expect("docs field");
    assert_eq!(docs.type_ref, Some(TypeRef::of::<Doc>()));
    assert_eq!(docs.element_type(), Some(ValueType::Object));

    let editor = Editor::descriptor();
    let reviewed = editor.get_field("reviewedIds").expect("renamed field");
    assert_eq!(reviewed.source_name, "reviewed");
    assert_eq!(reviewed.element_type(), Some(ValueType::Int));

    let query = LibraryQuery::descriptor();
    let kind = &query.fields[0].parameters[1];
    assert_eq!(kind.object_type_ref, Some(TypeRef::new("DocType")));
}

#[test]
fn test_raw_identifier_and_crate_path() {
    let descriptor = AuthorQuery::descriptor();
    assert_eq!(descriptor.kind, SchemaKind::Query);
    assert_eq!(descriptor.fields[0].source_name, "authors");
}

#[test]
fn test_generate_derived_schema() {
    let output = generate(&[
        Doc::descriptor(),
        DocType::descriptor(),
        Author::descriptor(),
        Editor::descriptor(),
        LibraryQuery::descriptor(),
        AuthorQuery::descriptor(),
    ]);

    let expected = concat!(
        "\n type doc {\ntitle: String\nurl( welcome: String,test: String) : String!\n}\n\n",
        "\n enum docType {\nmedia\ndocument\n}\n\n",
        "\n type author {\nname: String!\ndocs: [doc]\n}\n\n",
        "\n  editor implements author{\nname: String!\nreviewedIds: [Int]\n}\n\n",
        "\n query {\ndoc( id: ID!,kind: docType) : doc\n}\n\n",
        "\nextend  query {\nauthors: [author]!\n}\n\n",
    );
    assert_eq!(output.sdl, expected);
    assert!(output.is_clean());
}
