//! # Wire-Schema Parser
//!
//! Import and export of the wire-schema text format, a line-oriented
//! serialization of circuit layouts:
//!
//! ```text
//! #wire-schema 1
//! C ram 0 p:-12,-23
//! W 3 ns:[13,6 p:ram/out|22,6,0]
//! ```
//!
//! [`export`] is a total function from a [`Layout`](wireschema_core::layout::Layout)
//! to text. [`import`] goes the other way and never fails: it returns the
//! layout it could decode together with every [`Issue`](error::Issue) it
//! found, and the caller decides what to accept.
//!
//! ## Usage
//!
//! ```
//! # use wireschema_parser::{export, import, ImportOptions};
//! # use wireschema_core::schema::{ImportPolicy, RoundTripMode};
//! # use wireschema_parser::error::ImportError;
//! fn main() -> Result<(), ImportError> {
//!     let source = "#wire-schema 1\nC ram 0 p:-12,-23\nW 3 ns:[13,6 p:ram/out|22,6,0]\n";
//!
//!     let options = ImportOptions::new().with_round_trip(RoundTripMode::Exact);
//!     let layout = import(source, options).accept(ImportPolicy::RejectAll)?;
//!
//!     assert_eq!(export(&layout), source);
//!     Ok(())
//! }
//! ```

mod decode;
pub mod error;
mod export;
mod import;
mod lexer;
mod round_trip;
mod source;
mod span;
mod tokens;

pub use export::{ComponentLine, LayoutText, NodeText, Number, WireLine, export};
pub use import::{ImportOptions, ImportOutcome, ImportState, import};
pub use lexer::tokenize_line;
pub use span::Span;
pub use tokens::{LinePart, PartValue};
