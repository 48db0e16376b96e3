use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// Derives `AsValue` for a type.
/// A tuple struct with a single field is a named scalar: it classifies as its
/// field, tagged with its own type name. Any other struct or enum becomes an
/// opaque value compared through its `PartialEq` implementation.
pub fn derive_as_value(input: DeriveInput) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) =
        input.generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let field_type = &fields.unnamed[0].ty;
                quote! {
                    const NIL_KIND: ::core::option::Option<
                        assertive_core::values::core_values::reference::ReferenceKind,
                    > = <#field_type as assertive_core::values::value::AsValue>::NIL_KIND;

                    fn as_value(&self) -> assertive_core::values::value::Value<'_> {
                        assertive_core::values::value::AsValue::as_value(&self.0)
                            .renamed::<Self>()
                    }
                }
            }
            _ => opaque_body(),
        },
        Data::Enum(_) => opaque_body(),
        Data::Union(_) => {
            return syn::Error::new_spanned(
                ident,
                "#[derive(AsValue)] can not be used on unions",
            )
            .to_compile_error();
        }
    };

    quote! {
        impl #impl_generics assertive_core::values::value::AsValue for #ident #ty_generics #where_clause {
            #body
        }
    }
}

fn opaque_body() -> TokenStream {
    quote! {
        fn as_value(&self) -> assertive_core::values::value::Value<'_> {
            assertive_core::values::value::Value::opaque(self)
        }
    }
}
