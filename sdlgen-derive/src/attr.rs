//! `#[sdl(...)]` attribute parsing.

use proc_macro2::{Ident, Span};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitBool, LitStr, Meta, Path, Type};

/// Reference to another schema type.
pub(crate) enum RefAttr {
    /// `of = "Author"`: by source name.
    Name(LitStr),
    /// `of = Author`: by a type implementing `SchemaType`.
    Type(Type),
}

/// Attributes of the deriving type.
pub(crate) struct ContainerAttrs {
    pub kind: Ident,
    pub operation_name: LitStr,
    pub base: Option<RefAttr>,
    pub krate: Path,
}

/// Attributes shared by fields and parameters.
#[derive(Default)]
pub(crate) struct ValueAttrs {
    pub ty: Option<Ident>,
    pub of: Option<RefAttr>,
    pub item: Option<Ident>,
    pub nullable: Option<bool>,
}

/// Attributes of a struct field or enum variant.
pub(crate) struct MemberAttrs {
    pub name: Option<LitStr>,
    pub value: ValueAttrs,
    pub params: Vec<ParamAttrs>,
}

/// Attributes of one `param(...)` entry.
pub(crate) struct ParamAttrs {
    pub name: LitStr,
    pub value: ValueAttrs,
}

const KINDS: &[(&str, &str)] = &[
    ("query", "Query"),
    ("mutation", "Mutation"),
    ("object", "Object"),
    ("input", "Input"),
    ("interface", "Interface"),
    ("implementation", "Implementation"),
    ("enum", "Enum"),
];

const VALUE_TYPES: &[(&str, &str)] = &[
    ("string", "String"),
    ("int", "Int"),
    ("float", "Float"),
    ("boolean", "Boolean"),
    ("id", "Id"),
    ("object", "Object"),
    ("list", "List"),
];

fn variant_of(table: &[(&str, &str)], lit: &LitStr, what: &str) -> syn::Result<Ident> {
    let value = lit.value();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&value))
        .map(|(_, variant)| Ident::new(variant, lit.span()))
        .ok_or_else(|| syn::Error::new(lit.span(), format!("unknown {} '{}'", what, value)))
}

fn parse_ref(meta: &ParseNestedMeta<'_>) -> syn::Result<RefAttr> {
    let value = meta.value()?;
    if value.peek(LitStr) {
        Ok(RefAttr::Name(value.parse()?))
    } else {
        Ok(RefAttr::Type(value.parse()?))
    }
}

fn non_empty(lit: LitStr, what: &str) -> syn::Result<LitStr> {
    if lit.value().is_empty() {
        return Err(syn::Error::new(lit.span(), format!("{} must not be empty", what)));
    }
    Ok(lit)
}

impl ValueAttrs {
    /// Parses one value attribute, returning false if `meta` is not one.
    fn parse(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<bool> {
        if meta.path.is_ident("ty") {
            let lit: LitStr = meta.value()?.parse()?;
            self.ty = Some(variant_of(VALUE_TYPES, &lit, "value type")?);
        } else if meta.path.is_ident("of") {
            self.of = Some(parse_ref(meta)?);
        } else if meta.path.is_ident("item") {
            let lit: LitStr = meta.value()?.parse()?;
            let item = variant_of(VALUE_TYPES, &lit, "value type")?;
            if item == "List" {
                return Err(syn::Error::new(lit.span(), "lists of lists are not supported"));
            }
            self.item = Some(item);
        } else if meta.path.is_ident("nullable") {
            let lit: LitBool = meta.value()?.parse()?;
            self.nullable = Some(lit.value);
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

/// Parses the container attributes. `default_kind` applies when no `kind`
/// is given.
pub(crate) fn parse_container(
    attrs: &[Attribute],
    default_kind: &str,
) -> syn::Result<ContainerAttrs> {
    let mut kind = None;
    let mut operation_name = None;
    let mut base = None;
    let mut krate = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("sdl")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("kind") {
                let lit: LitStr = meta.value()?.parse()?;
                kind = Some(variant_of(KINDS, &lit, "schema kind")?);
            } else if meta.path.is_ident("operation_name") {
                let lit: LitStr = meta.value()?.parse()?;
                operation_name = Some(non_empty(lit, "operation_name")?);
            } else if meta.path.is_ident("base") {
                base = Some(parse_ref(&meta)?);
            } else if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                krate = Some(lit.parse::<Path>()?);
            } else {
                return Err(meta.error("unsupported sdl attribute"));
            }
            Ok(())
        })?;
    }

    let operation_name = operation_name.ok_or_else(|| {
        syn::Error::new(
            Span::call_site(),
            "SdlSchema requires: #[sdl(operation_name = \"...\")]",
        )
    })?;

    Ok(ContainerAttrs {
        kind: kind.unwrap_or_else(|| Ident::new(default_kind, Span::call_site())),
        operation_name,
        base,
        krate: krate.unwrap_or_else(|| syn::parse_quote!(::sdlgen_core)),
    })
}

/// Parses the member attributes, or returns `None` for a member without
/// `#[sdl]`.
pub(crate) fn parse_member(attrs: &[Attribute]) -> syn::Result<Option<MemberAttrs>> {
    let mut member = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("sdl")) {
        let parsed = member.get_or_insert_with(|| MemberAttrs {
            name: None,
            value: ValueAttrs::default(),
            params: Vec::new(),
        });
        if matches!(attr.meta, Meta::Path(_)) {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                parsed.name = Some(non_empty(lit, "name")?);
            } else if meta.path.is_ident("param") {
                parsed.params.push(parse_param(&meta)?);
            } else if !parsed.value.parse(&meta)? {
                return Err(meta.error("unsupported sdl attribute"));
            }
            Ok(())
        })?;
    }

    Ok(member)
}

fn parse_param(meta: &ParseNestedMeta<'_>) -> syn::Result<ParamAttrs> {
    let mut name = None;
    let mut value = ValueAttrs::default();

    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("name") {
            let lit: LitStr = inner.value()?.parse()?;
            name = Some(non_empty(lit, "parameter name")?);
        } else if !value.parse(&inner)? {
            return Err(inner.error("unsupported param attribute"));
        }
        Ok(())
    })?;

    let name = name.ok_or_else(|| meta.error("param requires: name = \"...\""))?;
    Ok(ParamAttrs { name, value })
}
