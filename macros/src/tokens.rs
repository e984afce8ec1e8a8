use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use sial_macros_core::{pascal_case, snake_case, unkeywordize};
use syn::{
    braced,
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Attribute, Ident, Path, Token, Visibility,
};

struct Input {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    path: Path,
    blocks: Vec<Block>,
}

struct Block {
    name: Ident,
    regs: Vec<Ident>,
}

impl Parse for Input {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident = input.parse()?;
        input.parse::<Token![;]>()?;
        let path = input.parse()?;
        input.parse::<Token![;]>()?;
        let mut blocks = Vec::new();
        while !input.is_empty() {
            blocks.push(input.parse()?);
        }
        Ok(Self { attrs, vis, ident, path, blocks })
    }
}

impl Parse for Block {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        input.parse::<Token![mod]>()?;
        let name = input.parse()?;
        let content;
        braced!(content in input);
        let mut regs = Vec::new();
        while !content.is_empty() {
            regs.push(content.parse()?);
            content.parse::<Token![;]>()?;
        }
        Ok(Self { name, regs })
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let Input { attrs, vis, ident, path, blocks } = parse_macro_input!(input as Input);
    let mut index_fields = Vec::new();
    let mut index_docs = Vec::new();
    let mut index_types = Vec::new();
    let mut periphs = Vec::new();
    for Block { name, regs } in &blocks {
        let block_snake = snake_case(&name.to_string());
        let block_mod = Ident::new(&block_snake, Span::call_site());
        let mut block_index_fields = Vec::new();
        let mut periph_fields = Vec::new();
        let mut periph_docs = Vec::new();
        let mut periph_types = Vec::new();
        for reg in regs {
            let reg_ty = Ident::new(&pascal_case(&reg.to_string()), Span::call_site());
            let reg_snake = snake_case(&reg.to_string());
            let field = format!("{block_snake}_{reg_snake}");
            let field = Ident::new(&unkeywordize(&field), Span::call_site());
            let ty = quote!(#path::#block_mod::#reg_ty<::sial::reg::tag::Shared>);
            index_docs.push(format!("{name} {reg} register token."));
            index_fields.push(field.clone());
            index_types.push(ty.clone());
            block_index_fields.push(field);
            periph_fields.push(Ident::new(&unkeywordize(&reg_snake), Span::call_site()));
            periph_docs.push(format!("{name} {reg} register token."));
            periph_types.push(ty);
        }
        periphs.push(periph_tokens(
            name,
            &block_snake,
            &path,
            &block_index_fields,
            &periph_fields,
            &periph_docs,
            &periph_types,
        ));
    }
    let expanded = quote! {
        #(#attrs)*
        #vis struct #ident {
            #(
                #[doc = #index_docs]
                pub #index_fields: #index_types,
            )*
        }

        unsafe impl ::sial::token::Token for #ident {
            #[inline]
            unsafe fn take() -> Self {
                Self {
                    #(#index_fields: ::sial::token::Token::take(),)*
                }
            }
        }

        #(#periphs)*
    };
    expanded.into()
}

fn periph_tokens(
    block: &Ident,
    block_snake: &str,
    path: &Path,
    index_fields: &[Ident],
    periph_fields: &[Ident],
    periph_docs: &[String],
    periph_types: &[TokenStream2],
) -> TokenStream2 {
    let periph_ty = Ident::new(&format!("{}Periph", pascal_case(&block.to_string())), Span::call_site());
    let macro_name = Ident::new(&format!("periph_{block_snake}"), Span::call_site());
    let struct_doc = format!("{block} peripheral.");
    let macro_doc = format!("Extracts the {block} register tokens from the index.");
    quote! {
        #[doc = #struct_doc]
        pub struct #periph_ty {
            #(
                #[doc = #periph_docs]
                pub #periph_fields: #periph_types,
            )*
        }

        #[doc = #macro_doc]
        #[macro_export]
        macro_rules! #macro_name {
            ($regs:ident) => {
                #path::#periph_ty {
                    #(#periph_fields: $regs.#index_fields,)*
                }
            };
        }
    }
}
