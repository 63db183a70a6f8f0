//! `BotApiMethod` derive implementation
//!
//! # Expansion Process
//!
//! 1. **Parse**: read the struct with `syn::DeriveInput`
//! 2. **Collect**: container attributes (`name`, `response`) and, per field,
//!    its wire name, whether it is an `Option`, and its checks
//! 3. **Generate**: trait impl, constants, constructor and builder
//!
//! Every generated path is absolute (`::tgbots_core::...`, `::std::...`) so the
//! expansion does not depend on what the user has imported.
//!
//! # Wire names
//!
//! Wire names must be the keys serde actually writes, so the serde attributes
//! that pick them are read too: container `rename_all` and field `rename`,
//! either plain or as `(serialize = "..", deserialize = "..")` with both sides
//! equal. Serde attributes that drop a field or reshape the struct (`skip*`,
//! `flatten`, `transparent`, `tag`, `from`/`into`) are rejected.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{
    parse_macro_input, Data, DeriveInput, Field, Fields, GenericArgument, Ident, LitStr,
    PathArguments, Type,
};

/// Container-level `#[bot_method(...)]` settings
struct MethodAttrs {
    name: LitStr,
    response: Type,
    /// From `#[serde(rename_all = "...")]`
    rename_all: Option<RenameRule>,
}

/// Serde's `rename_all` rules, applied to snake_case field names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => RenameRule::Lower,
            "UPPERCASE" => RenameRule::Upper,
            "PascalCase" => RenameRule::Pascal,
            "camelCase" => RenameRule::Camel,
            "snake_case" => RenameRule::Snake,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnake,
            "kebab-case" => RenameRule::Kebab,
            "SCREAMING-KEBAB-CASE" => RenameRule::ScreamingKebab,
            other => {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!("unknown rename rule `{}`", other),
                ))
            }
        })
    }

    fn apply(self, field: &str) -> String {
        match self {
            RenameRule::Lower | RenameRule::Snake => field.to_string(),
            RenameRule::Upper | RenameRule::ScreamingSnake => field.to_ascii_uppercase(),
            RenameRule::Pascal => {
                let mut pascal = String::with_capacity(field.len());
                let mut capitalize = true;
                for ch in field.chars() {
                    if ch == '_' {
                        capitalize = true;
                    } else if capitalize {
                        pascal.push(ch.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        pascal.push(ch);
                    }
                }
                pascal
            }
            RenameRule::Camel => {
                let mut camel = RenameRule::Pascal.apply(field);
                if let Some(first) = camel.get_mut(..1) {
                    first.make_ascii_lowercase();
                }
                camel
            }
            RenameRule::Kebab => field.replace('_', "-"),
            RenameRule::ScreamingKebab => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

/// One precondition attached to a field
enum Check {
    ChatId,
    UserId,
    NewUpload(LitStr),
    NonEmpty(LitStr),
}

struct FieldInfo {
    ident: Ident,
    ty: Type,
    /// `T` when the field is declared as `Option<T>`
    inner: Option<Type>,
    wire_name: String,
    checks: Vec<Check>,
}

impl FieldInfo {
    fn is_optional(&self) -> bool {
        self.inner.is_some()
    }

    /// The type a value is set with: `T` for both `T` and `Option<T>`
    fn value_type(&self) -> &Type {
        self.inner.as_ref().unwrap_or(&self.ty)
    }
}

pub fn derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "BotApiMethod cannot be derived for generic structs",
        ));
    }

    let attrs = parse_method_attrs(input)?;
    let fields = parse_fields(input, attrs.rename_all)?;

    let ident = &input.ident;
    let vis = &input.vis;
    let builder_ident = format_ident!("{}Builder", ident);
    let method_name = &attrs.name;
    let response = &attrs.response;

    let field_consts = fields.iter().map(|f| {
        let const_ident = format_ident!("{}_FIELD", f.ident.unraw().to_string().to_uppercase());
        let wire = &f.wire_name;
        let doc = format!("Wire name of the `{}` field", f.ident.unraw());
        quote! {
            #[doc = #doc]
            pub const #const_ident: &'static str = #wire;
        }
    });

    let specs = fields.iter().map(|f| {
        let wire = &f.wire_name;
        let kind = field_kind(f.value_type());
        if f.is_optional() {
            quote! { ::tgbots_core::FieldSpec::optional(#wire, #kind) }
        } else {
            quote! { ::tgbots_core::FieldSpec::required(#wire, #kind) }
        }
    });

    let checks = fields.iter().flat_map(validation_calls);
    let uploads_fn = uploads_fn(&fields);

    let new_params = fields.iter().filter(|f| !f.is_optional()).map(|f| {
        let field = &f.ident;
        let ty = &f.ty;
        quote! { #field: impl ::std::convert::Into<#ty> }
    });
    let new_inits = fields.iter().map(|f| {
        let field = &f.ident;
        if f.is_optional() {
            quote! { #field: ::std::option::Option::None }
        } else {
            quote! { #field: #field.into() }
        }
    });

    let builder_fields = fields.iter().map(|f| {
        let field = &f.ident;
        let ty = f.value_type();
        quote! { #field: ::std::option::Option<#ty> }
    });
    let builder_setters = fields.iter().map(|f| {
        let field = &f.ident;
        let ty = f.value_type();
        let doc = format!("Set `{}`", f.wire_name);
        quote! {
            #[doc = #doc]
            pub fn #field(mut self, value: impl ::std::convert::Into<#ty>) -> Self {
                self.#field = ::std::option::Option::Some(value.into());
                self
            }
        }
    });
    let build_inits = fields.iter().map(|f| {
        let field = &f.ident;
        let wire = &f.wire_name;
        if f.is_optional() {
            quote! { #field: self.#field }
        } else {
            quote! {
                #field: self.#field.ok_or(::tgbots_core::Error::MissingField {
                    method: #method_name,
                    field: #wire,
                })?
            }
        }
    });

    let builder_doc = format!("Builder for [`{}`]", ident);

    Ok(quote! {
        impl ::tgbots_core::BotApiMethod for #ident {
            const METHOD: &'static str = #method_name;
            const FIELDS: &'static [::tgbots_core::FieldSpec] = &[#(#specs),*];
            type Response = #response;

            fn validate(&self) -> ::tgbots_core::Result<()> {
                #(#checks)*
                ::std::result::Result::Ok(())
            }

            #uploads_fn
        }

        impl #ident {
            /// Endpoint selector of this request
            pub const PATH: &'static str = #method_name;

            #(#field_consts)*

            /// Create the request from its required fields
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#new_params),*) -> Self {
                Self {
                    #(#new_inits),*
                }
            }

            /// Start building the request field by field
            pub fn builder() -> #builder_ident {
                <#builder_ident as ::std::default::Default>::default()
            }
        }

        #[doc = #builder_doc]
        #[derive(Debug, Clone, Default)]
        #vis struct #builder_ident {
            #(#builder_fields),*
        }

        impl #builder_ident {
            #(#builder_setters)*

            /// Finish the request
            ///
            /// # Errors
            ///
            /// `Error::MissingField` when a required field was never set.
            pub fn build(self) -> ::tgbots_core::Result<#ident> {
                ::std::result::Result::Ok(#ident {
                    #(#build_inits),*
                })
            }
        }
    })
}

fn parse_method_attrs(input: &DeriveInput) -> syn::Result<MethodAttrs> {
    let mut name: Option<LitStr> = None;
    let mut response: Option<Type> = None;
    let mut rename_all: Option<RenameRule> = None;

    for attr in &input.attrs {
        if attr.path().is_ident("bot_method") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("response") {
                    response = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `name = \"...\"` or `response = Type`"))
                }
            })?;
        } else if attr.path().is_ident("serde") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    rename_all = Some(RenameRule::parse(&symmetric_name(&meta)?)?);
                    return Ok(());
                }
                for unsupported in ["transparent", "tag", "from", "try_from", "into", "remote"] {
                    if meta.path.is_ident(unsupported) {
                        return Err(meta.error(format!(
                            "#[serde({})] changes the wire shape and is not supported by BotApiMethod",
                            unsupported
                        )));
                    }
                }
                skip_serde_item(&meta)
            })?;
        }
    }

    let name = name.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "missing endpoint name: add #[bot_method(name = \"...\")]",
        )
    })?;
    let response = response.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "missing response type: add #[bot_method(response = Type)]",
        )
    })?;

    Ok(MethodAttrs {
        name,
        response,
        rename_all,
    })
}

fn parse_fields(
    input: &DeriveInput,
    rename_all: Option<RenameRule>,
) -> syn::Result<Vec<FieldInfo>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "BotApiMethod can only be derived for structs",
            ))
        }
    };

    match &data.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| parse_field(field, rename_all))
            .collect(),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "BotApiMethod requires a struct with named fields",
        )),
    }
}

fn parse_field(field: &Field, rename_all: Option<RenameRule>) -> syn::Result<FieldInfo> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
    let mut renamed: Option<String> = None;
    let mut checks = Vec::new();

    for attr in &field.attrs {
        if attr.path().is_ident("bot_method") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("chat_id") {
                    checks.push(Check::ChatId);
                } else if meta.path.is_ident("user_id") {
                    checks.push(Check::UserId);
                } else if meta.path.is_ident("new_upload") {
                    checks.push(Check::NewUpload(meta.value()?.parse()?));
                } else if meta.path.is_ident("non_empty") {
                    checks.push(Check::NonEmpty(meta.value()?.parse()?));
                } else {
                    return Err(meta.error(
                        "expected one of `chat_id`, `user_id`, `new_upload = \"...\"`, `non_empty = \"...\"`",
                    ));
                }
                Ok(())
            })?;
        } else if attr.path().is_ident("serde") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    renamed = Some(symmetric_name(&meta)?.value());
                    return Ok(());
                }
                for unsupported in ["skip", "skip_serializing", "skip_deserializing", "flatten"] {
                    if meta.path.is_ident(unsupported) {
                        return Err(meta.error(format!(
                            "#[serde({})] is not supported by BotApiMethod: every field is a wire parameter",
                            unsupported
                        )));
                    }
                }
                skip_serde_item(&meta)
            })?;
        }
    }

    let name = ident.unraw().to_string();
    let wire_name = match (renamed, rename_all) {
        (Some(explicit), _) => explicit,
        (None, Some(rule)) => rule.apply(&name),
        (None, None) => name,
    };

    Ok(FieldInfo {
        ident,
        ty: field.ty.clone(),
        inner: option_inner(&field.ty).cloned(),
        wire_name,
        checks,
    })
}

/// Read `key = "..."`, or `key(serialize = "...", deserialize = "...")` with
/// both sides equal
fn symmetric_name(meta: &ParseNestedMeta) -> syn::Result<LitStr> {
    if meta.input.peek(syn::Token![=]) {
        return meta.value()?.parse();
    }

    let mut serialize: Option<LitStr> = None;
    let mut deserialize: Option<LitStr> = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            serialize = Some(inner.value()?.parse()?);
            Ok(())
        } else if inner.path.is_ident("deserialize") {
            deserialize = Some(inner.value()?.parse()?);
            Ok(())
        } else {
            Err(inner.error("expected `serialize = \"...\"` or `deserialize = \"...\"`"))
        }
    })?;

    match (serialize, deserialize) {
        (Some(ser), Some(de)) if ser.value() == de.value() => Ok(ser),
        _ => Err(meta.error(
            "BotApiMethod needs one wire name: give `serialize` and `deserialize` the same value",
        )),
    }
}

/// Consume a serde item that does not affect wire names
fn skip_serde_item(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: TokenStream2 = content.parse()?;
    }
    Ok(())
}

/// `Some(T)` when `ty` is spelled `Option<T>` (with or without a path prefix)
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn last_segment(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

fn is_input_file(ty: &Type) -> bool {
    last_segment(ty).as_deref() == Some("InputFile")
}

fn field_kind(ty: &Type) -> TokenStream2 {
    let kind = match last_segment(ty).as_deref() {
        Some("String") => quote! { String },
        Some("i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "isize" | "usize") => {
            quote! { Integer }
        }
        Some("bool") => quote! { Boolean },
        Some("ChatId") => quote! { ChatId },
        Some("InputFile") => quote! { InputFile },
        _ => quote! { Object },
    };
    quote! { ::tgbots_core::FieldKind::#kind }
}

fn validation_calls(field: &FieldInfo) -> Vec<TokenStream2> {
    let ident = &field.ident;
    field
        .checks
        .iter()
        .map(|check| {
            let call = match check {
                Check::ChatId => quote! {
                    ::tgbots_core::validations::required_chat_id(value, self)?;
                },
                Check::UserId => quote! {
                    ::tgbots_core::validations::required_user_id(value, self)?;
                },
                Check::NewUpload(message) => quote! {
                    ::tgbots_core::validations::required_new_upload(value, #message, self)?;
                },
                Check::NonEmpty(message) => quote! {
                    ::tgbots_core::validations::required_non_empty(value, #message, self)?;
                },
            };
            if field.is_optional() {
                quote! {
                    if let ::std::option::Option::Some(value) = &self.#ident {
                        #call
                    }
                }
            } else {
                quote! {
                    {
                        let value = &self.#ident;
                        #call
                    }
                }
            }
        })
        .collect()
}

fn uploads_fn(fields: &[FieldInfo]) -> TokenStream2 {
    let pushes: Vec<TokenStream2> = fields
        .iter()
        .filter(|f| is_input_file(f.value_type()))
        .map(|f| {
            let ident = &f.ident;
            let wire = &f.wire_name;
            if f.is_optional() {
                quote! {
                    if let ::std::option::Option::Some(file) = &self.#ident {
                        uploads.push((#wire, file));
                    }
                }
            } else {
                quote! { uploads.push((#wire, &self.#ident)); }
            }
        })
        .collect();

    if pushes.is_empty() {
        return TokenStream2::new();
    }

    quote! {
        fn uploads(&self) -> ::std::vec::Vec<(&'static str, &::tgbots_core::InputFile)> {
            let mut uploads = ::std::vec::Vec::new();
            #(#pushes)*
            uploads
        }
    }
}
