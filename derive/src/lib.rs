use proc_macro::TokenStream;
use quote::quote;

/// Derives the [`FromSource`] trait.
///
/// Fields are drawn in declaration order. Named, tuple, and unit structs are
/// supported.
#[proc_macro_derive(FromSource)]
pub fn derive_from_source(input: TokenStream) -> TokenStream {
    let item: syn::Item = syn::parse(input).expect("failed to parse the token stream");

    let ret = match item {
        syn::Item::Struct(s) => {
            let name = s.ident;

            let body = match s.fields {
                syn::Fields::Named(fields) => {
                    let init = fields.named.iter().map(|field| {
                        let ident = field.ident.as_ref().unwrap();

                        quote! {
                            #ident : unit_rng::FromSource::from_source(source),
                        }
                    });

                    quote! { Self { #(#init)* } }
                }
                syn::Fields::Unnamed(fields) => {
                    let init = fields.unnamed.iter().map(|_| {
                        quote! {
                            unit_rng::FromSource::from_source(source),
                        }
                    });

                    quote! { Self( #(#init)* ) }
                }
                syn::Fields::Unit => quote! { Self },
            };

            quote! {
                impl unit_rng::FromSource for #name {
                    fn from_source(source: &mut impl unit_rng::Source) -> Self {
                        #body
                    }
                }
            }
        }
        _ => panic!("unsupported item type"),
    };

    ret.into()
}
