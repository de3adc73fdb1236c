//! Wire-Schema Core Types
//!
//! This crate provides the in-memory model that the wire-schema text format
//! describes. It includes:
//!
//! - **Layout**: Components and wire graphs with checked invariants ([`layout`] module)
//! - **Geometry**: Points and sizes ([`geometry`] module)
//! - **Identifiers**: Rules for ids written into the text format ([`identifier`] module)
//! - **Schema**: Grammar constants and import options ([`schema`] module)

pub mod error;
pub mod geometry;
pub mod identifier;
pub mod layout;
pub mod schema;
