use proc_macro::TokenStream;
use syn::{Data, DeriveInput, Fields, FieldsUnnamed};

pub fn expand(item: TokenStream) -> TokenStream {
    let mut derive_input = syn::parse_macro_input!(item as DeriveInput);
    let enum_ident = derive_input.ident.clone();
    let Data::Enum(data_enum) = &mut derive_input.data else {
        return syn::Error::new_spanned(&derive_input.ident, "#[expand] can only be applied to an enum")
            .into_compile_error()
            .into();
    };
    let struct_attributes = &derive_input.attrs;
    let struct_visibility = &derive_input.vis;
    let mut structs = std::vec![];

    for variant in &mut data_enum.variants {
        let Fields::Named(fields_named) = &mut variant.fields else {
            continue;
        };

        // NOTE: enum variant fields are implicitly public, the generated struct fields are not, so they inherit the
        // visibility of the enum
        for field in &mut fields_named.named {
            field.vis = struct_visibility.clone();
        }

        let struct_ident = variant.ident.clone();
        let fields_unnamed: FieldsUnnamed = syn::parse_quote! { (#struct_ident) };
        let struct_fields = std::mem::replace(&mut variant.fields, Fields::Unnamed(fields_unnamed));
        let struct_item = quote::quote! {
            #(#struct_attributes)*
            #struct_visibility struct #struct_ident #struct_fields

            impl ::core::convert::From<#struct_ident> for #enum_ident {
                fn from(value: #struct_ident) -> Self {
                    Self::#struct_ident(value)
                }
            }
        };

        structs.push(struct_item);
    }

    quote::quote! {
        #(#structs)*
        #derive_input
    }
    .into()
}
