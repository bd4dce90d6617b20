//! # types
//!
//! In-memory model of a parsed DBC file.

pub mod database;
pub mod errors;
pub mod message;
pub mod signal;
