//! # dbc
//!
//! `dbc` is the module to work with .dbc files: a line-oriented parser that fills
//! a SlotMap-backed [`DatabaseDBC`](types::database::DatabaseDBC).

pub(crate) mod core;
pub mod parse;
pub mod types;

pub use parse::{from_file, from_str};
