//! A configurable pretty-printer for GraphQL schema and executable documents.
//!
//! Input is either a [`graphql_parser`] syntax tree (see [`ast`]) or the
//! resolved type system in [`types`]/[`schema`]. Output is deterministic,
//! re-parseable GraphQL text along with the set of type and directive names
//! that were referenced while rendering it (see [`PrintResult`]).
//!
//! ```
//! use libgraphql_printer::Printer;
//! use libgraphql_printer::Settings;
//! use libgraphql_printer::schema::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .load_str(None, "type Query { hello: String }")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let result = Printer::new(Settings::default())
//!     .print_schema(&schema)
//!     .unwrap();
//! assert_eq!(result.text(), "type Query {\n    hello: String\n}\n");
//! ```

pub mod ast;
mod blocks;
mod collector;
mod context;
mod directive_resolver;
mod named_ref;
mod print_error;
mod printer;
pub mod schema;
mod settings;
pub mod types;

pub use collector::Collector;
pub use directive_resolver::DirectiveResolver;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use print_error::PrintError;
pub use printer::Printable;
pub use printer::PrintResult;
pub use printer::Printer;
pub use printer::SchemaTypeRef;
pub use settings::NameFilter;
pub use settings::Settings;

#[cfg(test)]
mod tests;
