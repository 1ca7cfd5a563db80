//! # sdlgen Derive
//!
//! Derive macro for declaring schema types in Rust.
//!
//! `#[derive(SdlSchema)]` implements `sdlgen_core::SchemaType`, producing the
//! type descriptor at compile time instead of loading it from a descriptor
//! file.

mod attr;

use attr::{ContainerAttrs, MemberAttrs, ParamAttrs, RefAttr, ValueAttrs};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Path, parse_macro_input};

/// Derives `SchemaType` for a struct or enum.
///
/// Structs default to kind `object` and enums to kind `enum`. Members
/// without `#[sdl]` are not part of the schema.
///
/// # Example
/// ```ignore
/// #[derive(SdlSchema)]
/// #[sdl(kind = "object", operation_name = "doc")]
/// struct Doc {
///     #[sdl]
///     title: String,
///     #[sdl(nullable = false, param(name = "welcome"), param(name = "test"))]
///     url: String,
///     #[sdl(ty = "list", of = Author)]
///     authors: Vec<Author>,
///     cache: Vec<u8>,
/// }
/// ```
///
/// Container attributes: `kind`, `operation_name` (required), `base` and
/// `crate` (path of the core crate, `::sdlgen_core` by default). Member
/// attributes: `name`, `ty`, `of`, `item`, `nullable` and repeated
/// `param(name, ty, of, item, nullable)`.
#[proc_macro_derive(SdlSchema, attributes(sdl))]
pub fn derive_sdl_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let members = collect_members(input)?;
    let default_kind = match input.data {
        Data::Enum(_) => "Enum",
        _ => "Object",
    };
    let container = attr::parse_container(&input.attrs, default_kind)?;
    let ContainerAttrs {
        kind,
        operation_name,
        base,
        krate,
    } = &container;

    let ident = &input.ident;
    let type_name = ident.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let base = option(base.as_ref().map(|base| type_ref(krate, base)));
    let fields = members
        .iter()
        .map(|(source, member)| field_descriptor(krate, source, member));

    Ok(quote! {
        impl #impl_generics #krate::SchemaType for #ident #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;

            fn descriptor() -> #krate::TypeDescriptor {
                #krate::TypeDescriptor {
                    name: ::std::string::String::from(#type_name),
                    kind: #krate::SchemaKind::#kind,
                    operation_name: ::std::string::String::from(#operation_name),
                    base_type_ref: #base,
                    fields: ::std::vec![#(#fields),*],
                }
            }
        }
    })
}

/// Collects the annotated members with their source names, in declaration
/// order.
fn collect_members(input: &DeriveInput) -> syn::Result<Vec<(String, MemberAttrs)>> {
    let mut members = Vec::new();

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => {
                for field in &fields.named {
                    if let (Some(ident), Some(member)) =
                        (&field.ident, attr::parse_member(&field.attrs)?)
                    {
                        members.push((ident.unraw().to_string(), member));
                    }
                }
            }
            Fields::Unit => {}
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "SdlSchema requires named fields",
                ));
            }
        },
        Data::Enum(data) => {
            for variant in &data.variants {
                if let Some(member) = attr::parse_member(&variant.attrs)? {
                    members.push((variant.ident.unraw().to_string(), member));
                }
            }
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "SdlSchema can only be derived for structs and enums",
            ));
        }
    }

    Ok(members)
}

fn option(value: Option<TokenStream2>) -> TokenStream2 {
    match value {
        Some(value) => quote!(::std::option::Option::Some(#value)),
        None => quote!(::std::option::Option::None),
    }
}

fn type_ref(krate: &Path, reference: &RefAttr) -> TokenStream2 {
    match reference {
        RefAttr::Name(name) => quote!(#krate::TypeRef::new(#name)),
        RefAttr::Type(ty) => quote!(#krate::TypeRef::of::<#ty>()),
    }
}

/// Expands the value type, defaulting to `String`.
fn value_type(krate: &Path, value: &ValueAttrs) -> TokenStream2 {
    match &value.ty {
        Some(ty) => quote!(#krate::ValueType::#ty),
        None => quote!(#krate::ValueType::String),
    }
}

fn item_type(krate: &Path, value: &ValueAttrs) -> TokenStream2 {
    option(value.item.as_ref().map(|item| quote!(#krate::ValueType::#item)))
}

fn field_descriptor(krate: &Path, source: &str, member: &MemberAttrs) -> TokenStream2 {
    let display_name = option(
        member
            .name
            .as_ref()
            .map(|name| quote!(::std::string::String::from(#name))),
    );
    let value_type = value_type(krate, &member.value);
    let type_ref = option(member.value.of.as_ref().map(|of| type_ref(krate, of)));
    let item_type = item_type(krate, &member.value);
    let nullable = member.value.nullable.unwrap_or(true);
    let parameters = member
        .params
        .iter()
        .map(|param| parameter_descriptor(krate, param));

    quote! {
        #krate::FieldDescriptor {
            source_name: ::std::string::String::from(#source),
            display_name: #display_name,
            value_type: #value_type,
            type_ref: #type_ref,
            item_type: #item_type,
            nullable: #nullable,
            parameters: ::std::vec![#(#parameters),*],
        }
    }
}

fn parameter_descriptor(krate: &Path, param: &ParamAttrs) -> TokenStream2 {
    let name = &param.name;
    let value_type = value_type(krate, &param.value);
    let object_type_ref = option(param.value.of.as_ref().map(|of| type_ref(krate, of)));
    let item_type = item_type(krate, &param.value);
    let nullable = param.value.nullable.unwrap_or(true);

    quote! {
        #krate::ParameterDescriptor {
            name: ::std::string::String::from(#name),
            value_type: #value_type,
            object_type_ref: #object_type_ref,
            item_type: #item_type,
            nullable: #nullable,
        }
    }
}
