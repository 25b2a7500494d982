//! Build GraphQL document trees from shorthand props and edit them in
//! place.
//!
//! ```ignore
//! use libgraphql_ast_builder::api::DocumentApi;
//! use serde_json::json;
//!
//! let mut doc = DocumentApi::from_input("type User { id: ID! name: String }")?;
//! doc.get_object_type("User")?
//!     .create_field("email: String!")?
//!     .update_field("name", json!({ "type": "String!" }))?;
//! println!("{}", doc.to_sdl()?);
//! ```

pub mod api;
pub mod ast;
mod ast_build_error;
pub mod build;
pub mod crud;
mod graphql_parser_ast;
mod node_kind;
pub mod parse;
pub mod print;

pub use api::DocumentApi;
pub use ast_build_error::AstBuildError;
pub use node_kind::KindFamily;
pub use node_kind::NodeKind;
pub use parse::DocumentInput;
