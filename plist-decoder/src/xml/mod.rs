/*!
 Contains logic and data structures used to decode XML property list data into native Rust data structures.

 ## Overview

 An XML property list is a `<plist>` element holding at most one `<dict>` or `<array>`. Containers nest
 arbitrarily and hold scalar leaves: `<string>`, `<integer>`, `<real>`, `<true/>`, `<false/>`,
 `<date>`, and `<data>`.

 ## Layers

 - [`tokenizer`] reduces the XML event stream to start tags, end tags, and text
 - [`parser`] walks those tokens with a recursive descent reader
 - [`models`] holds the resulting [`Document`](models::Document) and [`Value`](models::Value) tree
 - [`options`] controls how unknown elements and deep nesting are treated
*/

pub mod models;
pub mod options;
pub mod parser;
pub mod tokenizer;
