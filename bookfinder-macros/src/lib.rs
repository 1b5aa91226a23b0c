mod expand;

use proc_macro::TokenStream;

/**
 * Lifts struct-like enum variants into standalone structs.
 *
 * Each struct-like variant becomes a tuple variant wrapping a struct of the same name, and a `From` impl from the
 * struct into the enum is generated. Unit and tuple variants are left untouched. The enum's attributes are copied
 * onto every generated struct, and the struct fields take the enum's visibility.
 *
 * Example:
 * ```ignore
 * #[expand]
 * #[derive(Debug)]
 * pub enum Message {
 *     Settled { term: String },
 *     Tick,
 * }
 * ```
 * generates
 * ```ignore
 * #[derive(Debug)]
 * pub struct Settled {
 *     pub term: String,
 * }
 *
 * impl From<Settled> for Message { ... }
 *
 * #[derive(Debug)]
 * pub enum Message {
 *     Settled(Settled),
 *     Tick,
 * }
 * ```
 */
#[proc_macro_attribute]
pub fn expand(_arg_tokens: TokenStream, item_tokens: TokenStream) -> TokenStream {
    crate::expand::expand(item_tokens)
}
